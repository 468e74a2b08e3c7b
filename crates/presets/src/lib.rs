/// Prompt presets
///
/// An ordered list of named prompt templates with one selected entry and a
/// draft buffer the user edits before saving it back.
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PresetError {
    #[error("preset index {index} out of range (have {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("preset list cannot start empty")]
    EmptySeed,
}

/// One reusable prompt template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub text: String,
}

impl Preset {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Presets every session starts with.
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset::new(
            "Default Prompt",
            "Summarize the video and generate flashcards for key concepts.",
        ),
        Preset::new(
            "Vocabulary Focus",
            "Extract vocabulary words and definitions from the video.",
        ),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Text,
}

/// Unsaved edit buffer mirroring the selected preset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub text: String,
}

impl Draft {
    fn from_preset(preset: &Preset) -> Self {
        Self {
            name: preset.name.clone(),
            text: preset.text.clone(),
        }
    }

    fn to_preset(&self) -> Preset {
        Preset::new(self.name.clone(), self.text.clone())
    }
}

/// Preset list state. The list is never empty and `selected` always points
/// at an existing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetStore {
    presets: Vec<Preset>,
    selected: usize,
    draft: Draft,
}

impl Default for PresetStore {
    fn default() -> Self {
        let presets = builtin_presets();
        let draft = Draft::from_preset(&presets[0]);
        Self {
            presets,
            selected: 0,
            draft,
        }
    }
}

impl PresetStore {
    /// Create a store seeded with `seed`, selecting the first entry.
    pub fn new(seed: Vec<Preset>) -> Result<Self, PresetError> {
        let draft = seed
            .first()
            .map(Draft::from_preset)
            .ok_or(PresetError::EmptySeed)?;
        Ok(Self {
            presets: seed,
            selected: 0,
            draft,
        })
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &Preset {
        &self.presets[self.selected]
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Mutable access for text widgets. Only the draft is exposed.
    pub fn draft_name_mut(&mut self) -> &mut String {
        &mut self.draft.name
    }

    pub fn draft_text_mut(&mut self) -> &mut String {
        &mut self.draft.text
    }

    /// False when deleting would empty the list.
    pub fn can_delete(&self) -> bool {
        self.presets.len() > 1
    }

    /// Select the preset at `index` and reload the draft from it.
    pub fn select(&mut self, index: usize) -> Result<(), PresetError> {
        let preset = self.presets.get(index).ok_or(PresetError::IndexOutOfRange {
            index,
            len: self.presets.len(),
        })?;
        self.draft = Draft::from_preset(preset);
        self.selected = index;
        Ok(())
    }

    pub fn edit_draft(&mut self, field: DraftField, value: impl Into<String>) {
        match field {
            DraftField::Name => self.draft.name = value.into(),
            DraftField::Text => self.draft.text = value.into(),
        }
    }

    /// Write the draft over the selected preset.
    pub fn save(&mut self) {
        self.presets[self.selected] = self.draft.to_preset();
        tracing::debug!(index = self.selected, name = %self.draft.name, "preset saved");
    }

    /// Append the draft as a new preset and select it.
    pub fn add(&mut self) {
        let index = self.presets.len();
        self.presets.push(self.draft.to_preset());
        self.selected = index;
        tracing::debug!(index, name = %self.draft.name, "preset added");
    }

    /// Remove the selected preset unless it is the last one, then fall back
    /// to the first entry.
    pub fn delete(&mut self) {
        if !self.can_delete() {
            return;
        }
        let removed = self.presets.remove(self.selected);
        tracing::debug!(index = self.selected, name = %removed.name, "preset deleted");
        self.selected = 0;
        self.draft = Draft::from_preset(&self.presets[0]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_selects_first_builtin() {
        let store = PresetStore::default();
        assert_eq!(store.len(), 2);
        assert_eq!(store.selected_index(), 0);
        assert_eq!(store.draft().name, "Default Prompt");
        assert_eq!(store.draft().text, store.presets()[0].text);
    }

    #[test]
    fn test_empty_seed_rejected() {
        assert_eq!(PresetStore::new(Vec::new()), Err(PresetError::EmptySeed));
    }

    #[test]
    fn test_edit_then_save_only_touches_selected() {
        let mut store = PresetStore::default();
        store.edit_draft(DraftField::Text, "X");
        assert_eq!(store.presets()[0].text, builtin_presets()[0].text);

        store.save();
        assert_eq!(store.presets()[0].text, "X");
        assert_eq!(store.presets()[0].name, "Default Prompt");
        assert_eq!(store.presets()[1], builtin_presets()[1]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.selected_index(), 0);
    }

    #[test]
    fn test_select_out_of_range_leaves_state() {
        let mut store = PresetStore::default();
        store.edit_draft(DraftField::Name, "unsaved");
        let before = store.clone();

        let err = store.select(2).unwrap_err();
        assert_eq!(err, PresetError::IndexOutOfRange { index: 2, len: 2 });
        assert_eq!(store, before);
    }

    #[test]
    fn test_select_discards_unsaved_draft() {
        let mut store = PresetStore::default();
        store.edit_draft(DraftField::Name, "scratch");
        store.select(1).unwrap();
        store.select(0).unwrap();
        assert_eq!(store.draft().name, "Default Prompt");
    }

    #[test]
    fn test_add_selects_new_entry() {
        let mut store = PresetStore::default();
        store.edit_draft(DraftField::Name, "Dates");
        store.edit_draft(DraftField::Text, "List every date mentioned.");
        store.add();

        assert_eq!(store.len(), 3);
        assert_eq!(store.selected_index(), 2);
        assert_eq!(store.selected(), &Preset::new("Dates", "List every date mentioned."));
        assert_eq!(store.draft().name, "Dates");
        // The entry the draft was copied from is untouched.
        assert_eq!(store.presets()[0], builtin_presets()[0]);
    }

    #[test]
    fn test_delete_last_preset_is_noop() {
        let mut store = PresetStore::new(vec![Preset::new("Only", "one")]).unwrap();
        store.edit_draft(DraftField::Text, "edited");
        let before = store.clone();

        assert!(!store.can_delete());
        store.delete();
        assert_eq!(store, before);
    }

    #[test]
    fn test_delete_resets_to_first() {
        let mut store = PresetStore::default();
        store.select(1).unwrap();
        store.delete();

        assert_eq!(store.len(), 1);
        assert_eq!(store.selected_index(), 0);
        assert_eq!(store.draft().name, "Default Prompt");
    }

    #[test]
    fn test_delete_first_promotes_second() {
        let mut store = PresetStore::default();
        store.delete();
        assert_eq!(store.presets(), &builtin_presets()[1..]);
        assert_eq!(store.draft().name, "Vocabulary Focus");
    }

    #[test]
    fn test_preset_json_shape() {
        let json = serde_json::to_string(&Preset::new("a", "b")).unwrap();
        assert_eq!(json, r#"{"name":"a","text":"b"}"#);
    }
}
