//! Builders shared by the templates. They decide nothing about layout; each
//! template picks which of these to call and in what order.

use crate::document::editable::{EditableRegion, FieldBinding};
use crate::document::model::{
    Collection, CvDocument, EducationField, ExperienceField, ListField, SectionKind, TextField,
};
use crate::document::name::{name_part, NamePart};
use crate::document::tracker::EditTracker;
use crate::locale::Locale;
use crate::render::photo::{PhotoStyle, PhotoView};
use crate::render::{Icon, Region, RenderNode};

/// What a template shows for a collection with no items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPolicy {
    Hide,
    Caption,
}

/// Read-only view handed to a template for one render.
pub struct Projection<'a> {
    pub doc: &'a CvDocument,
    pub locale: &'static Locale,
    tracker: &'a EditTracker,
}

impl<'a> Projection<'a> {
    pub fn new(doc: &'a CvDocument, locale: &'static Locale, tracker: &'a EditTracker) -> Self {
        Self {
            doc,
            locale,
            tracker,
        }
    }

    pub fn editable(&self, binding: FieldBinding, text: impl Into<String>) -> RenderNode {
        let placeholder = !self.tracker.is_edited(&binding.edit_key());
        RenderNode::Editable(EditableRegion::new(binding, text, placeholder))
    }

    pub fn text(&self, field: TextField) -> RenderNode {
        self.editable(FieldBinding::text(field), self.doc.text(field))
    }

    /// Text field that prints `fallback` while the stored value is blank.
    pub fn text_or(&self, field: TextField, fallback: &str) -> RenderNode {
        let value = self.doc.text(field);
        let shown = if value.trim().is_empty() {
            fallback
        } else {
            value
        };
        self.editable(FieldBinding::text(field), shown)
    }

    pub fn title(&self, section: SectionKind) -> RenderNode {
        self.editable(
            FieldBinding::title(section),
            self.doc.section_titles.get(section),
        )
    }

    pub fn name(&self, part: NamePart) -> RenderNode {
        self.editable(
            FieldBinding::Name { part },
            name_part(&self.doc.full_name, part),
        )
    }

    pub fn photo(&self, style: PhotoStyle) -> RenderNode {
        RenderNode::Photo(PhotoView::framed(self.doc, style))
    }

    pub fn contact_row(&self, icon: Icon, field: TextField) -> RenderNode {
        RenderNode::row(vec![RenderNode::icon(icon), self.text(field)])
    }

    pub fn list_items(&self, field: ListField, bullet: Option<Icon>) -> Vec<RenderNode> {
        self.doc
            .list(field)
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let region = self.editable(FieldBinding::ListItem { field, index }, item.as_str());
                match bullet {
                    Some(icon) => RenderNode::row(vec![RenderNode::icon(icon), region]),
                    None => region,
                }
            })
            .collect()
    }

    /// Titled list section, or `None` when empty and the policy hides it.
    pub fn list_section(
        &self,
        field: ListField,
        policy: EmptyPolicy,
        bullet: Option<Icon>,
    ) -> Option<RenderNode> {
        let body = self.list_body(field, policy, bullet)?;
        let mut children = vec![self.title(field.section())];
        children.extend(body);
        Some(RenderNode::section(field.section(), children))
    }

    /// List items or the empty caption, without a title. `None` when hidden.
    pub fn list_body(
        &self,
        field: ListField,
        policy: EmptyPolicy,
        bullet: Option<Icon>,
    ) -> Option<Vec<RenderNode>> {
        if self.doc.list(field).is_empty() {
            return match policy {
                EmptyPolicy::Hide => None,
                EmptyPolicy::Caption => Some(vec![RenderNode::caption(
                    self.locale.captions.empty_list(field),
                )]),
            };
        }
        Some(self.list_items(field, bullet))
    }

    pub fn experience_entries(&self, order: &[ExperienceField]) -> Vec<RenderNode> {
        self.doc
            .experiences
            .iter()
            .map(|exp| {
                let children = order
                    .iter()
                    .map(|&field| {
                        self.editable(
                            FieldBinding::Experience {
                                id: exp.id.clone(),
                                field,
                            },
                            exp.get(field),
                        )
                    })
                    .collect();
                RenderNode::Entry {
                    collection: Collection::Experience,
                    id: exp.id.clone(),
                    children,
                }
            })
            .collect()
    }

    pub fn education_entries(&self, order: &[EducationField]) -> Vec<RenderNode> {
        self.doc
            .education
            .iter()
            .map(|edu| {
                let children = order
                    .iter()
                    .map(|&field| {
                        self.editable(
                            FieldBinding::Education {
                                id: edu.id.clone(),
                                field,
                            },
                            edu.get(field),
                        )
                    })
                    .collect();
                RenderNode::Entry {
                    collection: Collection::Education,
                    id: edu.id.clone(),
                    children,
                }
            })
            .collect()
    }

    pub fn experience_section(
        &self,
        order: &[ExperienceField],
        policy: EmptyPolicy,
    ) -> Option<RenderNode> {
        let mut children = vec![self.title(SectionKind::Experience)];
        if self.doc.experiences.is_empty() {
            if policy == EmptyPolicy::Hide {
                return None;
            }
            children.push(RenderNode::caption(self.locale.captions.empty_experience));
        }
        children.extend(self.experience_entries(order));
        Some(RenderNode::section(SectionKind::Experience, children))
    }

    pub fn education_section(
        &self,
        order: &[EducationField],
        policy: EmptyPolicy,
    ) -> Option<RenderNode> {
        let mut children = vec![self.title(SectionKind::Education)];
        if self.doc.education.is_empty() {
            if policy == EmptyPolicy::Hide {
                return None;
            }
            children.push(RenderNode::caption(self.locale.captions.empty_education));
        }
        children.extend(self.education_entries(order));
        Some(RenderNode::section(SectionKind::Education, children))
    }

    pub fn summary_section(&self, titled: bool) -> RenderNode {
        let mut children = Vec::with_capacity(2);
        if titled {
            children.push(self.title(SectionKind::Summary));
        }
        children.push(self.text(TextField::Summary));
        RenderNode::section(SectionKind::Summary, children)
    }

    /// One row per present social, in fixed priority order. `None` when there are none.
    pub fn socials(&self) -> Option<RenderNode> {
        let rows: Vec<RenderNode> = self
            .doc
            .present_socials()
            .into_iter()
            .map(|(field, _)| RenderNode::row(vec![RenderNode::icon(Icon::social(field)), self.text(field)]))
            .collect();
        if rows.is_empty() {
            return None;
        }
        Some(RenderNode::region(Region::Column, rows))
    }

    /// Titled social section, hidden entirely when no social is present.
    pub fn social_section(&self) -> Option<RenderNode> {
        let socials = self.socials()?;
        Some(RenderNode::section(
            SectionKind::Social,
            vec![self.title(SectionKind::Social), socials],
        ))
    }
}
