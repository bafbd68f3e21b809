use crate::document::model::{
    EducationField as Edu, ExperienceField as Exp, ListField, TextField,
};
use crate::render::{EmptyPolicy, Projection, Region, RenderNode};

pub fn layout(p: &Projection<'_>) -> RenderNode {
    let header = RenderNode::region(
        Region::Header,
        vec![
            p.text(TextField::FullName),
            p.text(TextField::Role),
            RenderNode::region(
                Region::Column,
                vec![
                    p.text(TextField::Email),
                    p.text(TextField::Phone),
                    p.text(TextField::Location),
                ],
            ),
        ],
    );

    let mut main = vec![p.summary_section(true)];
    main.extend(p.experience_section(
        &[Exp::Role, Exp::Company, Exp::Period, Exp::Description],
        EmptyPolicy::Caption,
    ));

    let mut lower = Vec::new();
    lower.extend(p.list_section(ListField::Skills, EmptyPolicy::Caption, None));
    lower.extend(p.social_section());
    lower.extend(p.education_section(&[Edu::Degree, Edu::School, Edu::Year], EmptyPolicy::Caption));
    main.push(RenderNode::region(Region::Column, lower));

    RenderNode::region(
        Region::Page,
        vec![header, RenderNode::region(Region::Main, main)],
    )
}
