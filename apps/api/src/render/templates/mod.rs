// One layout function per template. Adding a template means adding a module
// and a match arm; nothing else dispatches on `TemplateKind`.

mod classic;
mod corporate;
mod creative;
mod elegant;
mod europass;
mod minimal;
mod modern;
mod sidebar;
mod tech;

use crate::document::model::TemplateKind;
use crate::render::{Projection, RenderNode};

pub type Layout = fn(&Projection<'_>) -> RenderNode;

/// Layout for `kind`. Unknown selector names never get here; they resolve to
/// `TemplateKind::Modern` when parsed.
pub fn lookup(kind: TemplateKind) -> Layout {
    match kind {
        TemplateKind::Europass => europass::layout,
        TemplateKind::Modern => modern::layout,
        TemplateKind::Classic => classic::layout,
        TemplateKind::Minimal => minimal::layout,
        TemplateKind::Creative => creative::layout,
        TemplateKind::Corporate => corporate::layout,
        TemplateKind::Elegant => elegant::layout,
        TemplateKind::Tech => tech::layout,
        TemplateKind::Sidebar => sidebar::layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::example::example_document;
    use crate::document::EditTracker;
    use crate::locale::Language;

    #[test]
    fn test_every_template_has_its_own_layout() {
        let doc = example_document(Language::En);
        let tracker = EditTracker::new();
        let projection = Projection::new(&doc, Language::En.locale(), &tracker);
        let trees: Vec<RenderNode> = TemplateKind::ALL
            .into_iter()
            .map(|kind| lookup(kind)(&projection))
            .collect();

        for (i, a) in trees.iter().enumerate() {
            for b in &trees[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
