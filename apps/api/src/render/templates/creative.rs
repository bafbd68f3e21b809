use crate::document::model::{ExperienceField as Exp, ListField, TextField};
use crate::document::name::NamePart;
use crate::render::{
    EmptyPolicy, Icon, PhotoShape, PhotoStyle, Projection, Region, RenderNode,
};

pub fn layout(p: &Projection<'_>) -> RenderNode {
    let header = RenderNode::region(
        Region::Header,
        vec![
            p.name(NamePart::First),
            p.name(NamePart::Last),
            p.text(TextField::Role),
            p.photo(PhotoStyle::new(PhotoShape::Tilted).with_fallback(Icon::User)),
        ],
    );

    let mut main = vec![p.summary_section(true)];
    main.extend(p.experience_section(
        &[Exp::Period, Exp::Role, Exp::Company, Exp::Description],
        EmptyPolicy::Hide,
    ));
    main.extend(p.list_section(ListField::Skills, EmptyPolicy::Hide, None));
    main.extend(p.list_section(ListField::Languages, EmptyPolicy::Hide, Some(Icon::Check)));

    let mut footer = vec![
        p.contact_row(Icon::Mail, TextField::Email),
        p.contact_row(Icon::MapPin, TextField::Location),
    ];
    footer.extend(p.socials());

    RenderNode::region(
        Region::Page,
        vec![
            RenderNode::region(Region::Accent, Vec::new()),
            header,
            RenderNode::region(Region::Main, main),
            RenderNode::region(Region::Footer, footer),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::example::example_document;
    use crate::document::model::SectionKind;
    use crate::document::tracker::EditTracker;
    use crate::locale::Language;

    #[test]
    fn test_opens_with_accent_bar() {
        let doc = example_document(Language::It);
        let tracker = EditTracker::new();
        let page = layout(&Projection::new(&doc, Language::It.locale(), &tracker));
        assert!(matches!(
            page.children().first(),
            Some(RenderNode::Region { region: Region::Accent, .. })
        ));
        assert!(!page.sections().contains(&SectionKind::Education));
    }
}
