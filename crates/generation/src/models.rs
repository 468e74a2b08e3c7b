use crate::error::ParseChoiceError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// How many cards the result view lists.
pub const PREVIEW_LIMIT: usize = 10;

/// What `content` holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Url,
    Text,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Text => "text",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Url => "YouTube URL",
            Self::Text => "Custom Text",
        }
    }
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Sheets,
    Anki,
    Both,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [Self::Sheets, Self::Anki, Self::Both];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sheets => "sheets",
            Self::Anki => "anki",
            Self::Both => "both",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sheets => "Google Sheets",
            Self::Anki => "Anki CSV",
            Self::Both => "Both Formats",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sheets" => Ok(Self::Sheets),
            "anki" => Ok(Self::Anki),
            "both" => Ok(Self::Both),
            _ => Err(ParseChoiceError {
                kind: "export format",
                value: s.to_string(),
                expected: "sheets, anki, both",
            }),
        }
    }
}

/// Body of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub input_type: InputType,
    pub content: String,
    pub export_format: ExportFormat,
}

impl GenerateRequest {
    pub fn new(input_type: InputType, content: impl Into<String>, export_format: ExportFormat) -> Self {
        Self {
            input_type,
            content: content.into(),
            export_format,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FlashcardWire")]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Shapes the generator has been seen to emit for a card.
#[derive(Deserialize)]
#[serde(untagged)]
enum FlashcardWire {
    QuestionAnswer { question: String, answer: String },
    FrontBack { front: String, back: String },
    Pair(String, String),
}

impl From<FlashcardWire> for Flashcard {
    fn from(wire: FlashcardWire) -> Self {
        match wire {
            FlashcardWire::QuestionAnswer { question, answer } => Flashcard { question, answer },
            FlashcardWire::FrontBack { front, back } => Flashcard {
                question: front,
                answer: back,
            },
            FlashcardWire::Pair(question, answer) => Flashcard { question, answer },
        }
    }
}

impl Flashcard {
    /// Best-effort card from a value that matched none of the wire shapes.
    /// Missing or non-string sides come back blank; anything that is not an
    /// object or array is dropped.
    fn salvage(value: &Value) -> Option<Self> {
        let text = |v: Option<&Value>| v.and_then(Value::as_str).unwrap_or_default().to_string();
        match value {
            Value::Object(map) => {
                let question = map.get("question").or_else(|| map.get("front"));
                let answer = map.get("answer").or_else(|| map.get("back"));
                if question.is_none() && answer.is_none() {
                    return None;
                }
                Some(Flashcard {
                    question: text(question),
                    answer: text(answer),
                })
            }
            Value::Array(items) => Some(Flashcard {
                question: text(items.first()),
                answer: text(items.get(1)),
            }),
            _ => None,
        }
    }
}

/// `flashcards` that is not an array decodes as absent, so the rest of the
/// payload still gets through.
fn lenient_cards<'de, D>(deserializer: D) -> Result<Option<Vec<Flashcard>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(Value::Array(items)) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let cards = items
        .into_iter()
        .filter_map(|item| {
            serde_json::from_value::<Flashcard>(item.clone())
                .ok()
                .or_else(|| Flashcard::salvage(&item))
        })
        .collect();
    Ok(Some(cards))
}

/// Non-string link fields decode as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Success payload of `POST /generate`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(
        default,
        deserialize_with = "lenient_cards",
        skip_serializing_if = "Option::is_none"
    )]
    pub flashcards: Option<Vec<Flashcard>>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub sheets_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub anki_file: Option<String>,
}

impl GenerateResponse {
    pub fn cards(&self) -> &[Flashcard] {
        self.flashcards.as_deref().unwrap_or(&[])
    }

    /// First cards for display, at most `PREVIEW_LIMIT`.
    pub fn preview(&self) -> &[Flashcard] {
        let cards = self.cards();
        &cards[..cards.len().min(PREVIEW_LIMIT)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request = GenerateRequest::new(InputType::Text, "Mitochondria", ExportFormat::Both);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "input_type": "text",
                "content": "Mitochondria",
                "export_format": "both",
            })
        );
    }

    #[test]
    fn test_flashcard_shapes() {
        let body = r#"{
            "flashcards": [
                {"question": "Q1", "answer": "A1"},
                {"front": "Q2", "back": "A2"},
                ["Q3", "A3"]
            ]
        }"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.cards(),
            &[
                Flashcard::new("Q1", "A1"),
                Flashcard::new("Q2", "A2"),
                Flashcard::new("Q3", "A3"),
            ]
        );
        assert!(response.sheets_url.is_none());
        assert!(response.anki_file.is_none());
    }

    #[test]
    fn test_non_array_flashcards_keeps_links() {
        let body = r#"{"flashcards":{"front":"a"},"anki_file":"x.csv","sheets_url":"https://s"}"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert!(response.flashcards.is_none());
        assert!(response.cards().is_empty());
        assert_eq!(response.anki_file.as_deref(), Some("x.csv"));
        assert_eq!(response.sheets_url.as_deref(), Some("https://s"));
    }

    #[test]
    fn test_malformed_cards_blank_filled_or_dropped() {
        let body = r#"{
            "flashcards": [
                {"question": "Q", "answer": null},
                ["Only question"],
                {"front": 7, "back": "B"},
                "stray",
                {"unrelated": true},
                {"question": "Q2", "answer": "A2"}
            ],
            "sheets_url": 42
        }"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.cards(),
            &[
                Flashcard::new("Q", ""),
                Flashcard::new("Only question", ""),
                Flashcard::new("", "B"),
                Flashcard::new("Q2", "A2"),
            ]
        );
        assert!(response.sheets_url.is_none());
    }

    #[test]
    fn test_preview_caps_at_limit() {
        let cards = (0..25)
            .map(|i| Flashcard::new(format!("q{i}"), format!("a{i}")))
            .collect::<Vec<_>>();
        let response = GenerateResponse {
            flashcards: Some(cards),
            ..Default::default()
        };
        assert_eq!(response.preview().len(), PREVIEW_LIMIT);
        assert_eq!(response.preview()[9].question, "q9");
        assert!(GenerateResponse::default().preview().is_empty());
    }

    #[test]
    fn test_export_format_parse() {
        assert_eq!("Anki".parse::<ExportFormat>(), Ok(ExportFormat::Anki));
        assert_eq!(" both ".parse::<ExportFormat>(), Ok(ExportFormat::Both));
        let err = "pdf".parse::<ExportFormat>().unwrap_err();
        assert!(err.to_string().contains("pdf"));
    }

    #[test]
    fn test_labels() {
        assert_eq!(ExportFormat::Sheets.label(), "Google Sheets");
        assert_eq!(InputType::Url.label(), "YouTube URL");
        assert_eq!(ExportFormat::default(), ExportFormat::Sheets);
        assert_eq!(InputType::default(), InputType::Url);
    }
}
