use crate::document::model::{ExperienceField as Exp, ListField, SectionKind, TextField};
use crate::render::{
    EmptyPolicy, Icon, PhotoShape, PhotoStyle, Projection, Region, RenderNode,
};

pub fn layout(p: &Projection<'_>) -> RenderNode {
    let mut aside = vec![
        p.photo(PhotoStyle::new(PhotoShape::Rounded).with_fallback(Icon::User)),
        RenderNode::section(
            SectionKind::Contact,
            vec![
                p.title(SectionKind::Contact),
                p.contact_row(Icon::Mail, TextField::Email),
                p.contact_row(Icon::Phone, TextField::Phone),
                p.contact_row(Icon::MapPin, TextField::Location),
            ],
        ),
    ];
    aside.extend(p.list_section(ListField::Skills, EmptyPolicy::Hide, None));
    aside.extend(p.list_section(ListField::Languages, EmptyPolicy::Hide, None));

    let mut main = vec![
        RenderNode::region(
            Region::Header,
            vec![p.text(TextField::FullName), p.text(TextField::Role)],
        ),
        p.summary_section(false),
    ];
    main.extend(p.experience_section(
        &[Exp::Role, Exp::Period, Exp::Company, Exp::Description],
        EmptyPolicy::Hide,
    ));
    main.extend(p.social_section());

    RenderNode::region(
        Region::Page,
        vec![
            RenderNode::region(Region::Sidebar, aside),
            RenderNode::region(Region::Main, main),
        ],
    )
}
