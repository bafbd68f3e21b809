use crate::document::model::{
    EducationField as Edu, ExperienceField as Exp, ListField, SectionKind, TextField,
};
use crate::render::{EmptyPolicy, Projection, Region, RenderNode};

pub fn layout(p: &Projection<'_>) -> RenderNode {
    let header = RenderNode::region(
        Region::Header,
        vec![
            p.text(TextField::FullName),
            p.text(TextField::Role),
            RenderNode::row(vec![
                p.text(TextField::Email),
                RenderNode::label("•"),
                p.text(TextField::Phone),
                RenderNode::label("•"),
                p.text(TextField::Location),
            ]),
        ],
    );

    let mut main = Vec::new();
    main.extend(p.experience_section(
        &[Exp::Company, Exp::Period, Exp::Role, Exp::Description],
        EmptyPolicy::Hide,
    ));
    main.extend(p.education_section(&[Edu::Degree, Edu::Year, Edu::School], EmptyPolicy::Hide));

    let mut personal = vec![
        p.title(SectionKind::PersonalInfo),
        p.text(TextField::Nationality),
        p.text(TextField::BirthDate),
    ];
    personal.extend(p.socials());
    let mut side = vec![RenderNode::section(SectionKind::PersonalInfo, personal)];
    side.extend(p.list_section(ListField::Languages, EmptyPolicy::Hide, None));
    side.extend(p.list_section(ListField::Skills, EmptyPolicy::Hide, None));

    RenderNode::region(
        Region::Page,
        vec![
            header,
            RenderNode::region(Region::Main, main),
            RenderNode::region(Region::Sidebar, side),
        ],
    )
}
