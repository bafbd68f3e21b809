//! Editor session: the document, its edit tracker, and the display language,
//! mutated together.
//!
//! Every setter replaces a value and marks its tracker key in the same call, so
//! a reader holding the session can never observe one without the other.

use tracing::debug;

use crate::document::editable::{BlurOutcome, EditableRegion, FieldBinding};
use crate::document::example::example_document;
use crate::document::lists::unknown_entry;
use crate::document::model::{
    Collection, CvDocument, SectionKind, TemplateKind, TextField, DEFAULT_PHOTO_OFFSET,
};
use crate::document::name::{name_part, recompose};
use crate::document::photo::{clamp_offset, DragGesture};
use crate::document::tracker::{EditKey, EditTracker};
use crate::document::EditError;
use crate::locale::{Language, Locale};

#[derive(Debug, Clone)]
pub struct EditorSession {
    pub(super) document: CvDocument,
    pub(super) tracker: EditTracker,
    language: Language,
    drag: Option<DragGesture>,
}

impl EditorSession {
    /// A fresh session on the built-in example. Nothing is marked edited.
    pub fn new(language: Language) -> Self {
        Self {
            document: example_document(language),
            tracker: EditTracker::new(),
            language,
            drag: None,
        }
    }

    /// Rebuilds a session from restored parts. Tracker keys pointing at missing
    /// entities are dropped and unedited titles follow `language`.
    pub fn from_parts(document: CvDocument, mut tracker: EditTracker, language: Language) -> Self {
        let dropped = tracker.retain_valid(&document);
        if dropped > 0 {
            debug!("Dropped {dropped} stale edit keys while restoring session");
        }
        let mut session = Self {
            document,
            tracker,
            language,
            drag: None,
        };
        session.sync_titles();
        session
    }

    pub fn document(&self) -> &CvDocument {
        &self.document
    }

    pub fn tracker(&self) -> &EditTracker {
        &self.tracker
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn locale(&self) -> &'static Locale {
        self.language.locale()
    }

    pub fn template(&self) -> TemplateKind {
        self.document.template
    }

    pub fn is_edited(&self, key: &EditKey) -> bool {
        self.tracker.is_edited(key)
    }

    // ── Scalars and titles ──────────────────────────────────────────────────

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        *self.document.text_mut(field) = value.into();
        self.tracker.mark_edited(EditKey::Field(field));
    }

    pub fn set_title(&mut self, section: SectionKind, value: impl Into<String>) {
        *self.document.section_titles.get_mut(section) = value.into();
        self.tracker.mark_edited(EditKey::Title(section));
    }

    /// Swaps the active layout. Content is untouched.
    pub fn set_template(&mut self, template: TemplateKind) {
        self.document.template = template;
    }

    /// Switches the display language and re-translates every title the user has not edited.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.sync_titles();
    }

    fn sync_titles(&mut self) {
        let titles = &self.language.locale().section_titles;
        for section in SectionKind::ALL {
            if !self.tracker.is_edited(&EditKey::Title(section)) {
                *self.document.section_titles.get_mut(section) = titles.get(section).to_string();
            }
        }
    }

    // ── Photo ───────────────────────────────────────────────────────────────

    /// Stores a new image and recentres the framing.
    pub fn set_photo(&mut self, image: String) {
        self.document.profile_image = Some(image);
        self.document.profile_image_pos = DEFAULT_PHOTO_OFFSET;
        self.drag = None;
        self.tracker.mark_edited(EditKey::Photo);
    }

    /// Clears the image. The framing offset is kept for the next upload's first render.
    pub fn remove_photo(&mut self) {
        self.document.profile_image = None;
        self.drag = None;
        self.tracker.mark_edited(EditKey::Photo);
    }

    pub fn set_photo_offset(&mut self, offset: f64) -> f64 {
        let offset = clamp_offset(offset);
        self.document.profile_image_pos = offset;
        self.tracker.mark_edited(EditKey::Photo);
        offset
    }

    pub fn begin_photo_drag(&mut self, pointer_y: f64) -> Result<(), EditError> {
        if !self.document.has_photo() {
            return Err(EditError::PhotoMissing);
        }
        self.drag = Some(DragGesture::begin(self.document.profile_image_pos, pointer_y));
        Ok(())
    }

    /// Applies a pointer move. Every move writes straight to the document.
    pub fn drag_photo(&mut self, pointer_y: f64, container_height: f64) -> Result<f64, EditError> {
        let drag = self.drag.ok_or(EditError::NoActiveDrag)?;
        Ok(self.set_photo_offset(drag.offset_at(pointer_y, container_height)))
    }

    /// Ends the gesture; the offset stays at its last computed value.
    pub fn end_photo_drag(&mut self) -> f64 {
        self.drag = None;
        self.document.profile_image_pos
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    // ── Editable regions ────────────────────────────────────────────────────

    /// Current model text behind `binding`.
    pub fn current_text(&self, binding: &FieldBinding) -> Result<String, EditError> {
        match binding {
            FieldBinding::Text { field } => Ok(self.document.text(*field).to_string()),
            FieldBinding::Title { section } => {
                Ok(self.document.section_titles.get(*section).to_string())
            }
            FieldBinding::ListItem { field, index } => self
                .document
                .list(*field)
                .get(*index)
                .cloned()
                .ok_or(EditError::IndexOutOfRange {
                    field: *field,
                    index: *index,
                    len: self.document.list(*field).len(),
                }),
            FieldBinding::Experience { id, field } => self
                .document
                .experience(id)
                .map(|e| e.get(*field).to_string())
                .ok_or_else(|| unknown_entry(Collection::Experience, id)),
            FieldBinding::Education { id, field } => self
                .document
                .education_entry(id)
                .map(|e| e.get(*field).to_string())
                .ok_or_else(|| unknown_entry(Collection::Education, id)),
            FieldBinding::Name { part } => Ok(name_part(&self.document.full_name, *part)),
        }
    }

    pub fn region(&self, binding: &FieldBinding) -> Result<EditableRegion, EditError> {
        let text = self.current_text(binding)?;
        let placeholder = !self.tracker.is_edited(&binding.edit_key());
        Ok(EditableRegion::new(binding.clone(), text, placeholder))
    }

    /// Text the region shows once focused.
    pub fn focus(&self, binding: &FieldBinding) -> Result<String, EditError> {
        let mut region = self.region(binding)?;
        Ok(region.focus().to_string())
    }

    /// Runs the blur rules for `binding` and commits when they say so.
    pub fn blur(&mut self, binding: &FieldBinding, raw: &str) -> Result<BlurOutcome, EditError> {
        let mut region = self.region(binding)?;
        let outcome = region.blur(raw);
        if let BlurOutcome::Committed(text) = &outcome {
            self.commit(binding, text.clone())?;
        }
        Ok(outcome)
    }

    /// Writes `value` through the setter behind `binding` and marks it edited.
    pub fn commit(&mut self, binding: &FieldBinding, value: String) -> Result<(), EditError> {
        debug!("Committing {}", binding.edit_key());
        match binding {
            FieldBinding::Text { field } => self.set_text(*field, value),
            FieldBinding::Title { section } => self.set_title(*section, value),
            FieldBinding::ListItem { field, index } => {
                self.update_list_item(*field, *index, value)?
            }
            FieldBinding::Experience { id, field } => self.update_experience(id, *field, value)?,
            FieldBinding::Education { id, field } => self.update_education(id, *field, value)?,
            FieldBinding::Name { part } => {
                let full_name = recompose(&self.document.full_name, *part, &value);
                self.set_text(TextField::FullName, full_name);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::model::{EntryId, ExperienceField, ListField};
    use crate::document::name::NamePart;

    #[test]
    fn test_new_session_has_no_edited_keys() {
        let session = EditorSession::new(Language::It);
        assert!(session.tracker().is_empty());
        assert_eq!(session.document().section_titles.contact, "Contatti");
    }

    #[test]
    fn test_commit_marks_every_field_kind_edited() {
        let mut session = EditorSession::new(Language::En);
        let bindings = [
            FieldBinding::text(TextField::Phone),
            FieldBinding::title(SectionKind::Summary),
            FieldBinding::ListItem {
                field: ListField::Languages,
                index: 1,
            },
            FieldBinding::Experience {
                id: EntryId::from("1"),
                field: ExperienceField::Period,
            },
            FieldBinding::Education {
                id: EntryId::from("1"),
                field: crate::document::model::EducationField::Degree,
            },
            FieldBinding::Name {
                part: NamePart::Last,
            },
        ];
        for binding in &bindings {
            session.commit(binding, "typed".to_string()).unwrap();
            assert!(session.is_edited(&binding.edit_key()), "{binding:?}");
        }
        assert_eq!(session.document().languages[1], "typed");
        assert_eq!(session.document().full_name, "Guilherme typed");
    }

    #[test]
    fn test_locale_switch_updates_only_unedited_titles() {
        let mut session = EditorSession::new(Language::It);
        session.set_title(SectionKind::Skills, "Tecnologie");

        for language in [Language::En, Language::Es, Language::Pt, Language::En] {
            session.set_language(language);
            let titles = &session.document().section_titles;
            assert_eq!(titles.skills, "Tecnologie");
            assert_eq!(titles.contact, language.locale().section_titles.contact);
            assert_eq!(titles.experience, language.locale().section_titles.experience);
        }
    }

    #[test]
    fn test_blur_on_untouched_placeholder_changes_nothing() {
        let mut session = EditorSession::new(Language::It);
        let binding = FieldBinding::text(TextField::Role);
        let before = session.document().clone();

        assert_eq!(session.focus(&binding).unwrap(), "");
        assert_eq!(session.blur(&binding, "   ").unwrap(), BlurOutcome::Reverted);

        assert_eq!(session.document(), &before);
        assert!(!session.is_edited(&binding.edit_key()));
    }

    #[test]
    fn test_blur_with_text_commits_through_setter() {
        let mut session = EditorSession::new(Language::It);
        let binding = FieldBinding::text(TextField::Summary);
        let outcome = session.blur(&binding, "Line one\nLine two").unwrap();
        assert_eq!(outcome, BlurOutcome::Committed("Line one\nLine two".into()));
        assert_eq!(session.document().summary, "Line one\nLine two");
        assert!(session.is_edited(&EditKey::Field(TextField::Summary)));

        // once edited, clearing it is a real edit
        assert_eq!(session.focus(&binding).unwrap(), "Line one\nLine two");
        session.blur(&binding, "").unwrap();
        assert_eq!(session.document().summary, "");
    }

    #[test]
    fn test_blur_on_missing_list_item_is_rejected_without_mutation() {
        let mut session = EditorSession::new(Language::It);
        let before = session.document().clone();
        let binding = FieldBinding::ListItem {
            field: ListField::Skills,
            index: 99,
        };
        assert!(matches!(
            session.blur(&binding, "Rust"),
            Err(EditError::IndexOutOfRange { index: 99, .. })
        ));
        assert_eq!(session.document(), &before);
        assert!(session.tracker().is_empty());
    }

    #[test]
    fn test_first_name_span_writes_back_to_full_name() {
        let mut session = EditorSession::new(Language::It);
        session
            .blur(&FieldBinding::Name { part: NamePart::First }, "Ada")
            .unwrap();
        assert_eq!(session.document().full_name, "Ada Tebaldi");
        assert!(session.is_edited(&EditKey::Field(TextField::FullName)));
        assert_eq!(
            session
                .current_text(&FieldBinding::Name { part: NamePart::Last })
                .unwrap(),
            "Tebaldi"
        );
    }

    #[test]
    fn test_photo_drag_requires_an_image() {
        let mut session = EditorSession::new(Language::It);
        assert_eq!(session.begin_photo_drag(0.0), Err(EditError::PhotoMissing));
        assert_eq!(session.drag_photo(10.0, 100.0), Err(EditError::NoActiveDrag));
    }

    #[test]
    fn test_photo_drag_writes_every_move_and_stops_on_end() {
        let mut session = EditorSession::new(Language::It);
        session.set_photo("data:image/png;base64,AAAA".into());
        assert_eq!(session.document().profile_image_pos, 50.0);

        session.begin_photo_drag(200.0).unwrap();
        assert_eq!(session.drag_photo(210.0, 100.0).unwrap(), 60.0);
        assert_eq!(session.drag_photo(1000.0, 100.0).unwrap(), 100.0);
        assert_eq!(session.drag_photo(180.0, 100.0).unwrap(), 30.0);
        assert_eq!(session.end_photo_drag(), 30.0);
        assert!(!session.is_dragging());
        assert_eq!(session.drag_photo(0.0, 100.0), Err(EditError::NoActiveDrag));
    }

    #[test]
    fn test_upload_resets_offset_and_remove_keeps_it() {
        let mut session = EditorSession::new(Language::It);
        session.set_photo("data:a".into());
        session.set_photo_offset(20.0);
        session.remove_photo();
        assert!(session.document().profile_image.is_none());
        assert_eq!(session.document().profile_image_pos, 20.0);
        session.set_photo("data:b".into());
        assert_eq!(session.document().profile_image_pos, 50.0);
    }

    #[test]
    fn test_from_parts_drops_stale_keys_and_syncs_titles() {
        let doc = example_document(Language::It);
        let mut tracker = EditTracker::new();
        tracker.mark_edited(EditKey::ListItem {
            field: ListField::Languages,
            index: 7,
        });
        tracker.mark_edited(EditKey::Experience {
            id: EntryId::from("ghost"),
            field: ExperienceField::Role,
        });
        tracker.mark_edited(EditKey::Field(TextField::Email));

        let session = EditorSession::from_parts(doc, tracker, Language::En);
        assert_eq!(session.tracker().len(), 1);
        assert_eq!(session.document().section_titles.contact, "Contact");
    }
}
