//! Tools-panel view of the removable items, independent of the template.

use serde::Serialize;

use crate::document::model::{Collection, CvDocument, EntryId, ListField};
use crate::locale::Locale;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutlineTarget {
    Collection { collection: Collection },
    List { field: ListField },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "ref", rename_all = "snake_case")]
pub enum ItemRef {
    Entry { id: EntryId },
    Index { index: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlineItem {
    pub label: String,
    #[serde(flatten)]
    pub item: ItemRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlineGroup {
    pub label: &'static str,
    #[serde(flatten)]
    pub target: OutlineTarget,
    pub items: Vec<OutlineItem>,
    /// Set only when `items` is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_caption: Option<&'static str>,
}

fn first_filled<'a>(candidates: &[&'a str], fallback: &'a str) -> String {
    candidates
        .iter()
        .copied()
        .find(|s| !s.trim().is_empty())
        .unwrap_or(fallback)
        .to_string()
}

fn group(
    label: &'static str,
    target: OutlineTarget,
    items: Vec<OutlineItem>,
    empty: &'static str,
) -> OutlineGroup {
    let empty_caption = items.is_empty().then_some(empty);
    OutlineGroup {
        label,
        target,
        items,
        empty_caption,
    }
}

pub fn outline(doc: &CvDocument, locale: &Locale) -> Vec<OutlineGroup> {
    let captions = &locale.captions;
    let experiences = doc
        .experiences
        .iter()
        .map(|e| OutlineItem {
            label: first_filled(&[e.role.as_str(), e.company.as_str()], captions.add_experience),
            item: ItemRef::Entry { id: e.id.clone() },
        })
        .collect();
    let education = doc
        .education
        .iter()
        .map(|e| OutlineItem {
            label: first_filled(&[e.degree.as_str(), e.school.as_str()], captions.add_education),
            item: ItemRef::Entry { id: e.id.clone() },
        })
        .collect();

    let mut groups = vec![
        group(
            captions.experiences_label,
            OutlineTarget::Collection {
                collection: Collection::Experience,
            },
            experiences,
            captions.empty_experience,
        ),
        group(
            captions.education_label,
            OutlineTarget::Collection {
                collection: Collection::Education,
            },
            education,
            captions.empty_education,
        ),
    ];

    for field in ListField::ALL {
        let items = doc
            .list(field)
            .iter()
            .enumerate()
            .map(|(index, text)| OutlineItem {
                label: first_filled(&[text.as_str()], captions.blank_item(field)),
                item: ItemRef::Index { index },
            })
            .collect();
        groups.push(group(
            captions.list_label(field),
            OutlineTarget::List { field },
            items,
            captions.empty_list(field),
        ));
    }
    groups
}
