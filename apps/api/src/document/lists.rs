//! List Mutation Engine: add/update/remove over the entry collections and the
//! positional string lists.
//!
//! New items are seeded from the active locale and start as placeholders (no
//! tracker key). Removals adjust the tracker in the same call as the list.

use tracing::{debug, info};

use crate::document::model::{
    Collection, Education, EducationField, EntryId, Experience, ExperienceField, ListField,
};
use crate::document::session::EditorSession;
use crate::document::tracker::EditKey;
use crate::document::EditError;

pub(super) fn unknown_entry(collection: Collection, id: &EntryId) -> EditError {
    EditError::UnknownEntry {
        collection,
        id: id.clone(),
    }
}

impl EditorSession {
    // ── Experience ──────────────────────────────────────────────────────────

    pub fn add_experience(&mut self) -> EntryId {
        let seed = &self.locale().defaults.experience;
        let id = EntryId::generate();
        self.document.experiences.push(Experience {
            id: id.clone(),
            company: seed.company.to_string(),
            role: seed.role.to_string(),
            period: seed.period.to_string(),
            description: seed.description.to_string(),
        });
        info!("Added experience {id}");
        id
    }

    pub fn update_experience(
        &mut self,
        id: &EntryId,
        field: ExperienceField,
        value: String,
    ) -> Result<(), EditError> {
        let entry = self
            .document
            .experiences
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| unknown_entry(Collection::Experience, id))?;
        *entry.get_mut(field) = value;
        self.tracker.mark_edited(EditKey::Experience {
            id: id.clone(),
            field,
        });
        Ok(())
    }

    pub fn remove_experience(&mut self, id: &EntryId) -> Result<Experience, EditError> {
        let position = self
            .document
            .experiences
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| unknown_entry(Collection::Experience, id))?;
        let removed = self.document.experiences.remove(position);
        self.tracker.purge_entity(Collection::Experience, id);
        info!("Removed experience {id}");
        Ok(removed)
    }

    // ── Education ───────────────────────────────────────────────────────────

    pub fn add_education(&mut self) -> EntryId {
        let seed = &self.locale().defaults.education;
        let id = EntryId::generate();
        self.document.education.push(Education {
            id: id.clone(),
            school: seed.school.to_string(),
            degree: seed.degree.to_string(),
            year: seed.year.to_string(),
        });
        info!("Added education {id}");
        id
    }

    pub fn update_education(
        &mut self,
        id: &EntryId,
        field: EducationField,
        value: String,
    ) -> Result<(), EditError> {
        let entry = self
            .document
            .education
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| unknown_entry(Collection::Education, id))?;
        *entry.get_mut(field) = value;
        self.tracker.mark_edited(EditKey::Education {
            id: id.clone(),
            field,
        });
        Ok(())
    }

    pub fn remove_education(&mut self, id: &EntryId) -> Result<Education, EditError> {
        let position = self
            .document
            .education
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| unknown_entry(Collection::Education, id))?;
        let removed = self.document.education.remove(position);
        self.tracker.purge_entity(Collection::Education, id);
        info!("Removed education {id}");
        Ok(removed)
    }

    // ── Positional lists ────────────────────────────────────────────────────

    /// Appends the locale's seed text and returns the new item's index.
    pub fn add_list_item(&mut self, field: ListField) -> usize {
        let seed = self.locale().defaults.list_items.get(field);
        let list = self.document.list_mut(field);
        list.push(seed.to_string());
        debug!("Added {} item {}", field.as_str(), list.len() - 1);
        list.len() - 1
    }

    pub fn update_list_item(
        &mut self,
        field: ListField,
        index: usize,
        value: String,
    ) -> Result<(), EditError> {
        let list = self.document.list_mut(field);
        let len = list.len();
        let slot = list
            .get_mut(index)
            .ok_or(EditError::IndexOutOfRange { field, index, len })?;
        *slot = value;
        self.tracker.mark_edited(EditKey::ListItem { field, index });
        Ok(())
    }

    /// Removes the item at `index`, shifting later items and their tracker keys down.
    pub fn remove_list_item(&mut self, field: ListField, index: usize) -> Result<String, EditError> {
        let list = self.document.list_mut(field);
        let len = list.len();
        if index >= len {
            return Err(EditError::IndexOutOfRange { field, index, len });
        }
        let removed = list.remove(index);
        self.tracker.reindex_on_removal(field, index);
        debug!("Removed {} item {index}", field.as_str());
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Language;

    fn session_with_skills(skills: &[&str]) -> EditorSession {
        let mut session = EditorSession::new(Language::En);
        session.document.skills = skills.iter().map(|s| s.to_string()).collect();
        session
    }

    fn edited(session: &EditorSession, field: ListField, index: usize) -> bool {
        session.is_edited(&EditKey::ListItem { field, index })
    }

    #[test]
    fn test_experience_lifecycle_purges_tracker_keys() {
        let mut session = EditorSession::new(Language::En);
        session.document.experiences.clear();
        let id = session.add_experience();

        let added = session.document().experience(&id).unwrap();
        assert_eq!(added.role, "Role");
        assert!(session.tracker().is_empty());

        session
            .update_experience(&id, ExperienceField::Role, "Backend Engineer".into())
            .unwrap();
        assert_eq!(session.document().experience(&id).unwrap().role, "Backend Engineer");
        assert!(session.is_edited(&EditKey::Experience {
            id: id.clone(),
            field: ExperienceField::Role
        }));

        session.remove_experience(&id).unwrap();
        assert!(session.document().experiences.is_empty());
        assert!(!session.tracker().keys().any(|k| matches!(
            k,
            EditKey::Experience { id: kid, .. } if kid == &id
        )));
    }

    #[test]
    fn test_unknown_entry_is_a_no_op() {
        let mut session = EditorSession::new(Language::En);
        let before = session.document().clone();
        let ghost = EntryId::from("ghost");

        assert_eq!(
            session.update_education(&ghost, EducationField::Year, "1999".into()),
            Err(unknown_entry(Collection::Education, &ghost))
        );
        assert!(session.remove_experience(&ghost).is_err());
        assert_eq!(session.document(), &before);
        assert!(session.tracker().is_empty());
    }

    #[test]
    fn test_new_entries_follow_active_locale() {
        let mut session = EditorSession::new(Language::Es);
        let id = session.add_education();
        assert_eq!(session.document().education_entry(&id).unwrap().school, "Nombre del Instituto");

        let index = session.add_list_item(ListField::SoftSkills);
        assert_eq!(session.document().soft_skills[index], "Nueva soft skill");
        assert!(!edited(&session, ListField::SoftSkills, index));
    }

    #[test]
    fn test_seed_text_does_not_retranslate() {
        let mut session = EditorSession::new(Language::It);
        let index = session.add_list_item(ListField::Languages);
        session.set_language(Language::En);
        assert_eq!(session.document().languages[index], "Nuova lingua");
    }

    #[test]
    fn test_remove_first_of_two_edited_skills() {
        let mut session = session_with_skills(&["React", "Go"]);
        session.update_list_item(ListField::Skills, 0, "React".into()).unwrap();
        session.update_list_item(ListField::Skills, 1, "Go".into()).unwrap();

        assert_eq!(session.remove_list_item(ListField::Skills, 0).unwrap(), "React");

        assert_eq!(session.document().skills, vec!["Go".to_string()]);
        assert!(edited(&session, ListField::Skills, 0));
        assert!(!edited(&session, ListField::Skills, 1));
    }

    #[test]
    fn test_remove_keeps_edited_vector_aligned() {
        // edited: [F, T, F, T]; remove 1 -> [F, F, T]
        let mut session = session_with_skills(&["a", "b", "c", "d"]);
        session.update_list_item(ListField::Skills, 1, "B".into()).unwrap();
        session.update_list_item(ListField::Skills, 3, "D".into()).unwrap();

        session.remove_list_item(ListField::Skills, 1).unwrap();

        assert_eq!(session.document().skills, vec!["a", "c", "D"]);
        let vector: Vec<bool> = (0..3).map(|i| edited(&session, ListField::Skills, i)).collect();
        assert_eq!(vector, vec![false, false, true]);
        assert!(!edited(&session, ListField::Skills, 3));
    }

    #[test]
    fn test_out_of_range_is_rejected_and_touches_nothing() {
        let mut session = session_with_skills(&["a", "b"]);
        session.update_list_item(ListField::Skills, 1, "B".into()).unwrap();
        let before = session.document().clone();
        let tracked = session.tracker().clone();

        assert_eq!(
            session.update_list_item(ListField::Skills, 2, "c".into()),
            Err(EditError::IndexOutOfRange {
                field: ListField::Skills,
                index: 2,
                len: 2
            })
        );
        assert!(session.remove_list_item(ListField::Skills, 5).is_err());

        assert_eq!(session.document(), &before);
        assert_eq!(session.tracker(), &tracked);
    }
}
