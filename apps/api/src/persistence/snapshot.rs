//! Snapshot format: `{ data, modifiedFields, language, savedAt }`.
//!
//! Decoding is lenient. Each top-level value and each document field is read
//! on its own, and anything missing or of the wrong shape falls back to the
//! built-in example for the snapshot's language. Only unreadable files and
//! invalid JSON are errors, and those leave the caller's session untouched.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::document::example::example_document;
use crate::document::model::{
    CvDocument, Education, Experience, ListField, SectionKind, TemplateKind, TextField,
    DEFAULT_PHOTO_OFFSET,
};
use crate::document::photo::clamp_offset;
use crate::document::session::EditorSession;
use crate::document::tracker::{EditKey, EditTracker};
use crate::locale::Language;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub data: CvDocument,
    pub modified_fields: EditTracker,
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    pub fn capture(session: &EditorSession) -> Self {
        Self {
            data: session.document().clone(),
            modified_fields: session.tracker().clone(),
            language: session.language(),
            saved_at: Some(Utc::now()),
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decodes `raw`, using `default_language` when the snapshot names none it supports.
    pub fn parse(raw: &str, default_language: Language) -> Result<Self, SnapshotError> {
        let root: Map<String, Value> = serde_json::from_str(raw)?;

        let language = root
            .get("language")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or(default_language);

        let data = match root.get("data") {
            Some(Value::Object(fields)) => decode_document(fields, language),
            _ => {
                warn!("Snapshot has no document object, using example content");
                example_document(language)
            }
        };

        let mut modified_fields = EditTracker::new();
        if let Some(Value::Array(keys)) = root.get("modifiedFields") {
            let mut skipped = 0usize;
            for key in keys {
                match key.as_str().map(str::parse::<EditKey>) {
                    Some(Ok(key)) => modified_fields.mark_edited(key),
                    _ => skipped += 1,
                }
            }
            if skipped > 0 {
                warn!("Skipped {skipped} unparseable edit keys in snapshot");
            }
        }

        let saved_at = root
            .get("savedAt")
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok());

        Ok(Self {
            data,
            modified_fields,
            language,
            saved_at,
        })
    }

    /// Builds a session; keys pointing at entries or items that no longer exist are dropped.
    pub fn into_session(self) -> EditorSession {
        EditorSession::from_parts(self.data, self.modified_fields, self.language)
    }
}

/// `birth_date` -> `birthDate`
fn camel_key(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper = false;
    for c in snake.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn take<T: DeserializeOwned>(fields: &Map<String, Value>, key: &str) -> Option<T> {
    let value = fields.get(key)?.clone();
    match serde_json::from_value(value) {
        Ok(v) => Some(v),
        Err(e) => {
            debug!("Ignoring malformed snapshot field '{key}': {e}");
            None
        }
    }
}

/// Entry arrays keep every well-formed entry; a non-array falls back entirely.
fn take_entries<T: DeserializeOwned>(fields: &Map<String, Value>, key: &str) -> Option<Vec<T>> {
    let Value::Array(items) = fields.get(key)? else {
        return None;
    };
    let decoded: Vec<T> = items
        .iter()
        .filter_map(|item| serde_json::from_value(item.clone()).ok())
        .collect();
    if decoded.len() < items.len() {
        warn!(
            "Dropped {} malformed '{key}' entries from snapshot",
            items.len() - decoded.len()
        );
    }
    Some(decoded)
}

fn decode_document(fields: &Map<String, Value>, language: Language) -> CvDocument {
    let mut doc = example_document(language);

    for field in TextField::ALL {
        if let Some(value) = take::<String>(fields, &camel_key(field.as_str())) {
            *doc.text_mut(field) = value;
        }
    }
    for field in ListField::ALL {
        if let Some(items) = take::<Vec<String>>(fields, &camel_key(field.as_str())) {
            *doc.list_mut(field) = items;
        }
    }
    if let Some(entries) = take_entries::<Experience>(fields, "experiences") {
        doc.experiences = entries;
    }
    if let Some(entries) = take_entries::<Education>(fields, "education") {
        doc.education = entries;
    }

    doc.profile_image = match fields.get("profileImage") {
        Some(Value::String(uri)) if !uri.is_empty() => Some(uri.clone()),
        _ => None,
    };
    doc.profile_image_pos = fields
        .get("profileImagePos")
        .and_then(Value::as_f64)
        .map(clamp_offset)
        .unwrap_or(DEFAULT_PHOTO_OFFSET);
    if let Some(name) = fields.get("template").and_then(Value::as_str) {
        doc.template = TemplateKind::resolve(name);
    }

    if let Some(Value::Object(titles)) = fields.get("sectionTitles") {
        for section in SectionKind::ALL {
            if let Some(title) = take::<String>(titles, &camel_key(section.as_str())) {
                *doc.section_titles.get_mut(section) = title;
            }
        }
    }
    doc
}

/// JSON file holding the single saved snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let json = snapshot.to_json()?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, json).await?;
        info!("Saved snapshot to {}", self.path.display());
        Ok(())
    }

    /// `Ok(None)` when nothing has been saved yet.
    pub async fn load(&self, default_language: Language) -> Result<Option<Snapshot>, SnapshotError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let snapshot = Snapshot::parse(&raw, default_language)?;
        info!("Loaded snapshot from {}", self.path.display());
        Ok(Some(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::model::{EntryId, ExperienceField};
    use serde_json::json;

    #[test]
    fn test_camel_key() {
        assert_eq!(camel_key("birth_date"), "birthDate");
        assert_eq!(camel_key("soft_skills"), "softSkills");
        assert_eq!(camel_key("personal_info"), "personalInfo");
        assert_eq!(camel_key("email"), "email");
    }

    #[test]
    fn test_capture_then_parse_restores_session() {
        let mut session = EditorSession::new(Language::Es);
        session.set_text(TextField::FullName, "Lucia Gomez");
        session.update_list_item(ListField::Skills, 0, "Kotlin".into()).unwrap();
        session.set_template(TemplateKind::Elegant);

        let json = Snapshot::capture(&session).to_json().unwrap();
        let restored = Snapshot::parse(&json, Language::It).unwrap().into_session();

        assert_eq!(restored.document(), session.document());
        assert_eq!(restored.tracker(), session.tracker());
        assert_eq!(restored.language(), Language::Es);
    }

    #[test]
    fn test_missing_offset_defaults_and_out_of_range_clamps() {
        let missing = Snapshot::parse(r#"{ "data": { "fullName": "X" } }"#, Language::It).unwrap();
        assert_eq!(missing.data.profile_image_pos, 50.0);
        assert_eq!(missing.data.full_name, "X");

        let high = Snapshot::parse(r#"{ "data": { "profileImagePos": 180 } }"#, Language::It).unwrap();
        assert_eq!(high.data.profile_image_pos, 100.0);
    }

    #[test]
    fn test_malformed_fields_fall_back_individually() {
        let raw = json!({
            "data": {
                "role": 42,
                "email": "me@example.com",
                "skills": "not a list",
                "template": "brutalist",
                "sectionTitles": { "skills": "Tools", "summary": 7 }
            },
            "modifiedFields": ["field:email", "bogus", 3, "title:skills"],
            "language": "de"
        })
        .to_string();

        let snapshot = Snapshot::parse(&raw, Language::En).unwrap();
        let example = example_document(Language::En);
        assert_eq!(snapshot.language, Language::En);
        assert_eq!(snapshot.data.role, example.role);
        assert_eq!(snapshot.data.email, "me@example.com");
        assert_eq!(snapshot.data.skills, example.skills);
        assert_eq!(snapshot.data.template, TemplateKind::Modern);
        assert_eq!(snapshot.data.section_titles.skills, "Tools");
        assert_eq!(snapshot.data.section_titles.summary, example.section_titles.summary);
        assert_eq!(snapshot.modified_fields.len(), 2);
    }

    #[test]
    fn test_keys_for_missing_entries_are_dropped_on_restore() {
        let raw = json!({
            "data": {
                "experiences": [
                    { "id": "a", "company": "Acme", "role": "Dev", "period": "2020", "description": "" },
                    { "id": "broken" }
                ],
                "skills": ["Rust"]
            },
            "modifiedFields": ["experience:a:role", "experience:gone:role", "list:skills:4"]
        })
        .to_string();

        let session = Snapshot::parse(&raw, Language::It).unwrap().into_session();
        assert_eq!(session.document().experiences.len(), 1);
        assert!(session.is_edited(&EditKey::Experience {
            id: EntryId::from("a"),
            field: ExperienceField::Role
        }));
        assert_eq!(session.tracker().len(), 1);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            Snapshot::parse("{ not json", Language::It),
            Err(SnapshotError::Json(_))
        ));
        assert!(Snapshot::parse("[1, 2]", Language::It).is_err());
    }

    #[tokio::test]
    async fn test_store_round_trip_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("nested").join("cv.json"));
        assert!(store.load(Language::It).await.unwrap().is_none());

        let mut session = EditorSession::new(Language::Pt);
        session.set_photo("data:image/png;base64,AA".to_string());
        store.save(&Snapshot::capture(&session)).await.unwrap();

        let loaded = store.load(Language::It).await.unwrap().unwrap();
        assert_eq!(loaded.language, Language::Pt);
        assert_eq!(loaded.data.profile_image.as_deref(), Some("data:image/png;base64,AA"));
        assert!(loaded.saved_at.is_some());
    }

    #[tokio::test]
    async fn test_corrupt_file_reports_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        tokio::fs::write(file.path(), "garbage").await.unwrap();
        let store = SnapshotStore::new(file.path());
        assert!(store.load(Language::It).await.is_err());
    }
}
