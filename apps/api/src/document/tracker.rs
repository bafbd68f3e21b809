//! Field Edit Tracker: which fields hold user-authored content rather than placeholders.
//!
//! Keys are structured (`EditKey`), so re-indexing and purging match on typed
//! variants instead of string prefixes. The string grammar only exists at the
//! persistence boundary:
//!
//! - `field:<name>` / `field:photo`
//! - `title:<section>`
//! - `list:<field>:<index>`
//! - `experience:<id>:<field>` / `education:<id>:<field>`

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::document::model::{
    Collection, CvDocument, EducationField, EntryId, ExperienceField, ListField, SectionKind,
    TextField,
};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EditKey {
    Field(TextField),
    Photo,
    Title(SectionKind),
    ListItem { field: ListField, index: usize },
    Experience { id: EntryId, field: ExperienceField },
    Education { id: EntryId, field: EducationField },
}

impl EditKey {
    /// Whether the entity this key points at exists in `doc`.
    pub fn is_valid_for(&self, doc: &CvDocument) -> bool {
        match self {
            EditKey::Field(_) | EditKey::Photo | EditKey::Title(_) => true,
            EditKey::ListItem { field, index } => *index < doc.list(*field).len(),
            EditKey::Experience { id, .. } => doc.contains_entry(Collection::Experience, id),
            EditKey::Education { id, .. } => doc.contains_entry(Collection::Education, id),
        }
    }
}

impl fmt::Display for EditKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditKey::Field(field) => write!(f, "field:{}", field.as_str()),
            EditKey::Photo => f.write_str("field:photo"),
            EditKey::Title(kind) => write!(f, "title:{}", kind.as_str()),
            EditKey::ListItem { field, index } => write!(f, "list:{}:{index}", field.as_str()),
            EditKey::Experience { id, field } => write!(f, "experience:{id}:{}", field.as_str()),
            EditKey::Education { id, field } => write!(f, "education:{id}:{}", field.as_str()),
        }
    }
}

impl FromStr for EditKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, rest) = s
            .split_once(':')
            .ok_or_else(|| format!("malformed edit key '{s}'"))?;
        match kind {
            "field" if rest == "photo" => Ok(EditKey::Photo),
            "field" => Ok(EditKey::Field(rest.parse()?)),
            "title" => Ok(EditKey::Title(rest.parse()?)),
            "list" => {
                let (field, index) = rest
                    .split_once(':')
                    .ok_or_else(|| format!("list key without index '{s}'"))?;
                let index = index
                    .parse::<usize>()
                    .map_err(|_| format!("bad list index in '{s}'"))?;
                Ok(EditKey::ListItem {
                    field: field.parse()?,
                    index,
                })
            }
            "experience" | "education" => {
                // ids never contain ':' when generated, but be tolerant of imported ones
                let (id, field) = rest
                    .rsplit_once(':')
                    .filter(|(id, _)| !id.is_empty())
                    .ok_or_else(|| format!("entry key without field '{s}'"))?;
                let id = EntryId::from(id);
                if kind == "experience" {
                    Ok(EditKey::Experience {
                        id,
                        field: field.parse()?,
                    })
                } else {
                    Ok(EditKey::Education {
                        id,
                        field: field.parse()?,
                    })
                }
            }
            other => Err(format!("unknown edit key kind '{other}'")),
        }
    }
}

impl From<EditKey> for String {
    fn from(key: EditKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for EditKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Set of keys marking user-authored content. Absence means placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditTracker {
    keys: BTreeSet<EditKey>,
}

impl EditTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotently records `key` as user-authored.
    pub fn mark_edited(&mut self, key: EditKey) {
        self.keys.insert(key);
    }

    pub fn is_edited(&self, key: &EditKey) -> bool {
        self.keys.contains(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &EditKey> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Shifts positional keys of `field` after removing the item at `removed`:
    /// lower indices stay, the removed index is dropped, higher indices move down by one.
    pub fn reindex_on_removal(&mut self, field: ListField, removed: usize) {
        let keys = std::mem::take(&mut self.keys);
        self.keys = keys
            .into_iter()
            .filter_map(|key| match key {
                EditKey::ListItem { field: f, index } if f == field => {
                    if index < removed {
                        Some(EditKey::ListItem { field: f, index })
                    } else if index == removed {
                        None
                    } else {
                        Some(EditKey::ListItem {
                            field: f,
                            index: index - 1,
                        })
                    }
                }
                other => Some(other),
            })
            .collect();
    }

    /// Drops every key scoped to the entry `id` of `collection`.
    pub fn purge_entity(&mut self, collection: Collection, id: &EntryId) {
        self.keys.retain(|key| match (collection, key) {
            (Collection::Experience, EditKey::Experience { id: k, .. }) => k != id,
            (Collection::Education, EditKey::Education { id: k, .. }) => k != id,
            _ => true,
        });
    }

    /// Removes keys pointing at entities `doc` does not contain. Returns how many were dropped.
    pub fn retain_valid(&mut self, doc: &CvDocument) -> usize {
        let before = self.keys.len();
        self.keys.retain(|key| key.is_valid_for(doc));
        before - self.keys.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(index: usize) -> EditKey {
        EditKey::ListItem {
            field: ListField::Skills,
            index,
        }
    }

    #[test]
    fn test_mark_edited_is_idempotent() {
        let mut tracker = EditTracker::new();
        tracker.mark_edited(EditKey::Field(TextField::Email));
        tracker.mark_edited(EditKey::Field(TextField::Email));
        assert_eq!(tracker.len(), 1);
        assert!(tracker.is_edited(&EditKey::Field(TextField::Email)));
        assert!(!tracker.is_edited(&EditKey::Field(TextField::Phone)));
    }

    #[test]
    fn test_reindex_shifts_higher_positions_down() {
        // edited vector over 5 items: [T, F, T, T, F]; remove index 2
        let mut tracker = EditTracker::new();
        for i in [0, 2, 3] {
            tracker.mark_edited(skill(i));
        }
        tracker.reindex_on_removal(ListField::Skills, 2);

        // expected [T, F, T, F]
        let edited: Vec<bool> = (0..4).map(|i| tracker.is_edited(&skill(i))).collect();
        assert_eq!(edited, vec![true, false, true, false]);
        assert!(!tracker.is_edited(&skill(4)));
    }

    #[test]
    fn test_reindex_leaves_other_lists_untouched() {
        let mut tracker = EditTracker::new();
        tracker.mark_edited(skill(1));
        tracker.mark_edited(EditKey::ListItem {
            field: ListField::Languages,
            index: 1,
        });
        tracker.mark_edited(EditKey::Title(SectionKind::Skills));

        tracker.reindex_on_removal(ListField::Skills, 0);

        assert!(tracker.is_edited(&skill(0)));
        assert!(tracker.is_edited(&EditKey::ListItem {
            field: ListField::Languages,
            index: 1
        }));
        assert!(tracker.is_edited(&EditKey::Title(SectionKind::Skills)));
    }

    #[test]
    fn test_purge_entity_only_touches_that_entry() {
        let a = EntryId::from("a");
        let b = EntryId::from("b");
        let mut tracker = EditTracker::new();
        tracker.mark_edited(EditKey::Experience {
            id: a.clone(),
            field: ExperienceField::Role,
        });
        tracker.mark_edited(EditKey::Experience {
            id: a.clone(),
            field: ExperienceField::Company,
        });
        tracker.mark_edited(EditKey::Experience {
            id: b.clone(),
            field: ExperienceField::Role,
        });
        // same id in the other collection survives
        tracker.mark_edited(EditKey::Education {
            id: a.clone(),
            field: EducationField::School,
        });

        tracker.purge_entity(Collection::Experience, &a);

        assert_eq!(tracker.len(), 2);
        assert!(tracker.is_edited(&EditKey::Experience {
            id: b,
            field: ExperienceField::Role
        }));
        assert!(tracker.is_edited(&EditKey::Education {
            id: a,
            field: EducationField::School
        }));
    }

    #[test]
    fn test_key_string_grammar() {
        let cases = [
            (EditKey::Field(TextField::FullName), "field:full_name"),
            (EditKey::Photo, "field:photo"),
            (EditKey::Title(SectionKind::SoftSkills), "title:soft_skills"),
            (skill(3), "list:skills:3"),
            (
                EditKey::Experience {
                    id: EntryId::from("1"),
                    field: ExperienceField::Role,
                },
                "experience:1:role",
            ),
        ];
        for (key, text) in cases {
            assert_eq!(key.to_string(), text);
            assert_eq!(text.parse::<EditKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_malformed_keys_are_rejected() {
        for bad in [
            "fullName",
            "list:skills",
            "list:skills:x",
            "list:hobbies:0",
            "experience::role",
            "experience:1:salary",
            "title:hobbies",
        ] {
            assert!(bad.parse::<EditKey>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_tracker_serializes_as_string_array() {
        let mut tracker = EditTracker::new();
        tracker.mark_edited(skill(0));
        tracker.mark_edited(EditKey::Title(SectionKind::Contact));
        let json = serde_json::to_value(&tracker).unwrap();
        assert_eq!(json, serde_json::json!(["title:contact", "list:skills:0"]));
    }
}
