//! Editable Region: the click-to-edit contract shared by every template.
//!
//! A region is bound to one model setter through a `FieldBinding`. It is a
//! placeholder while the binding's tracker key is absent:
//!
//! - focus on a placeholder clears the shown text (presentation only)
//! - blur with blank text on a placeholder restores it and commits nothing
//! - any other blur commits the raw text, line breaks included

use serde::{Deserialize, Serialize};

use crate::document::model::{
    EducationField, EntryId, ExperienceField, ListField, SectionKind, TextField,
};
use crate::document::name::NamePart;
use crate::document::tracker::EditKey;

/// Which model setter a region writes through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldBinding {
    Text { field: TextField },
    Title { section: SectionKind },
    ListItem { field: ListField, index: usize },
    Experience { id: EntryId, field: ExperienceField },
    Education { id: EntryId, field: EducationField },
    /// A derived span of `full_name`.
    Name { part: NamePart },
}

impl FieldBinding {
    pub fn text(field: TextField) -> Self {
        FieldBinding::Text { field }
    }

    pub fn title(section: SectionKind) -> Self {
        FieldBinding::Title { section }
    }

    /// Tracker key whose presence makes this region user-authored.
    pub fn edit_key(&self) -> EditKey {
        match self {
            FieldBinding::Text { field } => EditKey::Field(*field),
            FieldBinding::Title { section } => EditKey::Title(*section),
            FieldBinding::ListItem { field, index } => EditKey::ListItem {
                field: *field,
                index: *index,
            },
            FieldBinding::Experience { id, field } => EditKey::Experience {
                id: id.clone(),
                field: *field,
            },
            FieldBinding::Education { id, field } => EditKey::Education {
                id: id.clone(),
                field: *field,
            },
            FieldBinding::Name { .. } => EditKey::Field(TextField::FullName),
        }
    }

    pub fn is_multiline(&self) -> bool {
        match self {
            FieldBinding::Text { field } => field.is_multiline(),
            FieldBinding::Experience { field, .. } => *field == ExperienceField::Description,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "text", rename_all = "snake_case")]
pub enum BlurOutcome {
    /// Blank edit of a placeholder; the placeholder is shown again and nothing is written.
    Reverted,
    /// Raw text to write through the binding's setter.
    Committed(String),
}

/// One rendered, in-place editable text fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditableRegion {
    pub binding: FieldBinding,
    /// Text currently shown in the region.
    pub text: String,
    pub placeholder: bool,
    pub multiline: bool,
    #[serde(skip)]
    model_text: String,
}

impl EditableRegion {
    pub fn new(binding: FieldBinding, text: impl Into<String>, placeholder: bool) -> Self {
        let text = text.into();
        let multiline = binding.is_multiline();
        Self {
            binding,
            model_text: text.clone(),
            text,
            placeholder,
            multiline,
        }
    }

    pub fn focus(&mut self) -> &str {
        if self.placeholder {
            self.text.clear();
        }
        &self.text
    }

    pub fn blur(&mut self, raw: &str) -> BlurOutcome {
        if self.placeholder && raw.trim().is_empty() {
            self.text = self.model_text.clone();
            return BlurOutcome::Reverted;
        }
        self.text = raw.to_string();
        BlurOutcome::Committed(raw.to_string())
    }
}
