use crate::document::model::{ExperienceField as Exp, ListField, TextField};
use crate::render::{EmptyPolicy, Projection, Region, RenderNode};

pub fn layout(p: &Projection<'_>) -> RenderNode {
    let header = RenderNode::region(
        Region::Header,
        vec![
            p.text(TextField::FullName),
            RenderNode::row(vec![
                p.text(TextField::Location),
                p.text(TextField::Email),
                p.text(TextField::Phone),
            ]),
            p.text(TextField::Role),
        ],
    );

    let mut main = vec![p.summary_section(false)];
    main.extend(p.experience_section(
        &[Exp::Role, Exp::Company, Exp::Period, Exp::Description],
        EmptyPolicy::Hide,
    ));

    let mut band = Vec::new();
    band.extend(p.socials());
    band.extend(p.list_section(ListField::Skills, EmptyPolicy::Hide, None));
    band.extend(p.list_section(ListField::Languages, EmptyPolicy::Hide, None));

    RenderNode::region(
        Region::Page,
        vec![
            header,
            RenderNode::region(Region::Main, main),
            RenderNode::region(Region::Band, band),
        ],
    )
}
