//! Template Projection Engine.
//!
//! A render is a pure function of (document, language, tracker): the same
//! inputs always yield an equal tree, so switching template and back loses
//! nothing. Templates only read; every editable leaf carries the binding the
//! session needs to write the edit back.

pub mod context;
pub mod outline;
pub mod photo;
pub mod templates;

use serde::Serialize;

use crate::document::editable::EditableRegion;
use crate::document::model::{Collection, CvDocument, EntryId, SectionKind, TemplateKind, TextField};
use crate::document::session::EditorSession;
use crate::document::tracker::EditTracker;
use crate::locale::Language;

pub use context::{EmptyPolicy, Projection};
pub use photo::{PhotoShape, PhotoStyle, PhotoView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Root of every template.
    Page,
    Header,
    Sidebar,
    Main,
    Footer,
    Column,
    /// Full-width strip, used for footers that span the page.
    Band,
    /// Decorative color bar with no content.
    Accent,
    /// Console-styled block.
    Terminal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Mail,
    Phone,
    MapPin,
    Globe,
    Linkedin,
    Github,
    ExternalLink,
    Instagram,
    Twitter,
    User,
    Check,
    Dot,
    Code,
}

impl Icon {
    /// Icon paired with a social field. Non-social fields get a globe.
    pub fn social(field: TextField) -> Icon {
        match field {
            TextField::Linkedin => Icon::Linkedin,
            TextField::Github => Icon::Github,
            TextField::Portfolio => Icon::ExternalLink,
            TextField::Instagram => Icon::Instagram,
            TextField::Twitter => Icon::Twitter,
            _ => Icon::Globe,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum RenderNode {
    Region {
        region: Region,
        children: Vec<RenderNode>,
    },
    Section {
        section: SectionKind,
        children: Vec<RenderNode>,
    },
    Entry {
        collection: Collection,
        id: EntryId,
        children: Vec<RenderNode>,
    },
    Row {
        children: Vec<RenderNode>,
    },
    Editable(EditableRegion),
    /// Static template text. Never editable.
    Label {
        text: String,
    },
    /// Localized hint shown in place of an empty collection.
    Caption {
        text: String,
    },
    Icon {
        icon: Icon,
    },
    Photo(PhotoView),
}

impl RenderNode {
    pub fn region(region: Region, children: Vec<RenderNode>) -> Self {
        RenderNode::Region { region, children }
    }

    pub fn section(section: SectionKind, children: Vec<RenderNode>) -> Self {
        RenderNode::Section { section, children }
    }

    pub fn row(children: Vec<RenderNode>) -> Self {
        RenderNode::Row { children }
    }

    pub fn label(text: impl Into<String>) -> Self {
        RenderNode::Label { text: text.into() }
    }

    pub fn caption(text: impl Into<String>) -> Self {
        RenderNode::Caption { text: text.into() }
    }

    pub fn icon(icon: Icon) -> Self {
        RenderNode::Icon { icon }
    }

    pub fn children(&self) -> &[RenderNode] {
        match self {
            RenderNode::Region { children, .. }
            | RenderNode::Section { children, .. }
            | RenderNode::Entry { children, .. }
            | RenderNode::Row { children } => children,
            _ => &[],
        }
    }

    /// Depth-first walk over this node and all descendants.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a RenderNode)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    pub fn editables(&self) -> Vec<&EditableRegion> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if let RenderNode::Editable(region) = node {
                found.push(region);
            }
        });
        found
    }

    pub fn sections(&self) -> Vec<SectionKind> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if let RenderNode::Section { section, .. } = node {
                found.push(*section);
            }
        });
        found
    }
}

/// A projected CV page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderTree {
    pub template: TemplateKind,
    pub language: Language,
    pub root: RenderNode,
}

impl RenderTree {
    pub fn editables(&self) -> Vec<&EditableRegion> {
        self.root.editables()
    }

    pub fn sections(&self) -> Vec<SectionKind> {
        self.root.sections()
    }
}

/// Projects `doc` through its selected template.
pub fn project(doc: &CvDocument, language: Language, tracker: &EditTracker) -> RenderTree {
    let projection = Projection::new(doc, language.locale(), tracker);
    let layout = templates::lookup(doc.template);
    RenderTree {
        template: doc.template,
        language,
        root: layout(&projection),
    }
}

pub fn render(session: &EditorSession) -> RenderTree {
    project(session.document(), session.language(), session.tracker())
}
