use crate::document::model::{ExperienceField as Exp, ListField, SectionKind, TextField};
use crate::render::{EmptyPolicy, PhotoShape, PhotoStyle, Projection, Region, RenderNode};

pub fn layout(p: &Projection<'_>) -> RenderNode {
    let mut side = vec![
        p.photo(PhotoStyle::new(PhotoShape::Circle).grayscale()),
        RenderNode::section(
            SectionKind::Contact,
            vec![
                p.title(SectionKind::Contact),
                p.text(TextField::Email),
                p.text(TextField::Phone),
                p.text(TextField::Location),
            ],
        ),
    ];
    side.extend(p.social_section());
    side.extend(p.list_section(ListField::Languages, EmptyPolicy::Hide, None));
    side.extend(p.list_section(ListField::Skills, EmptyPolicy::Hide, None));

    let mut main = vec![
        p.text(TextField::FullName),
        p.text(TextField::Role),
        p.summary_section(false),
    ];
    main.extend(p.experience_section(
        &[Exp::Period, Exp::Role, Exp::Company, Exp::Description],
        EmptyPolicy::Hide,
    ));

    RenderNode::region(
        Region::Page,
        vec![
            RenderNode::region(Region::Sidebar, side),
            RenderNode::region(Region::Main, main),
        ],
    )
}
