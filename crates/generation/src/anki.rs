use crate::models::Flashcard;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

const MAX_TITLE_CHARS: usize = 50;

/// Write cards as an Anki-importable CSV with a `Front,Back` header.
pub fn write_anki_csv<W: Write>(mut writer: W, cards: &[Flashcard]) -> std::io::Result<()> {
    writer.write_all(b"Front,Back\r\n")?;
    for card in cards {
        write!(
            writer,
            "{},{}\r\n",
            csv_field(&card.question),
            csv_field(&card.answer)
        )?;
    }
    writer.flush()
}

pub fn save_anki_csv(path: &Path, cards: &[Flashcard]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create Anki CSV {}", path.display()))?;
    write_anki_csv(std::io::BufWriter::new(file), cards)
        .with_context(|| format!("write Anki CSV {}", path.display()))?;
    tracing::info!(target: "generation", "wrote {} cards to {}", cards.len(), path.display());
    Ok(())
}

/// `Flashcards - <title>.csv` with the title reduced to filename-safe
/// characters.
pub fn anki_file_name(title: Option<&str>) -> String {
    let raw = title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or("Untitled Flashcards");
    let safe: String = raw
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let safe = safe.trim();
    let safe = if safe.chars().count() > MAX_TITLE_CHARS {
        let cut: String = safe.chars().take(MAX_TITLE_CHARS).collect();
        format!("{cut}...")
    } else {
        safe.to_string()
    };
    format!("Flashcards - {safe}.csv")
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_quoting() {
        let cards = vec![
            Flashcard::new("Plain?", "Yes"),
            Flashcard::new("Comma, here", "Say \"hi\""),
            Flashcard::new("Two\nlines", "ok"),
        ];
        let mut out = Vec::new();
        write_anki_csv(&mut out, &cards).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Front,Back\r\nPlain?,Yes\r\n\"Comma, here\",\"Say \"\"hi\"\"\"\r\n\"Two\nlines\",ok\r\n"
        );
    }

    #[test]
    fn test_file_name_sanitized() {
        assert_eq!(anki_file_name(Some("Cells: the basics!")), "Flashcards - Cells the basics.csv");
        assert_eq!(anki_file_name(None), "Flashcards - Untitled Flashcards.csv");
        assert_eq!(anki_file_name(Some("  ")), "Flashcards - Untitled Flashcards.csv");

        let long = "a".repeat(80);
        let name = anki_file_name(Some(&long));
        assert_eq!(name, format!("Flashcards - {}....csv", "a".repeat(50)));
    }

    #[test]
    fn test_save_anki_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.csv");
        save_anki_csv(&path, &[Flashcard::new("Q", "A")]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Front,Back\r\nQ,A\r\n");
    }
}
