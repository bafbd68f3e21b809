use crate::document::model::{
    EducationField as Edu, ExperienceField as Exp, ListField, TextField,
};
use crate::render::{
    EmptyPolicy, Icon, PhotoShape, PhotoStyle, Projection, Region, RenderNode,
};

pub fn layout(p: &Projection<'_>) -> RenderNode {
    let header = RenderNode::region(
        Region::Header,
        vec![
            p.text(TextField::FullName),
            p.text(TextField::Role),
            p.contact_row(Icon::Mail, TextField::Email),
            p.contact_row(Icon::Phone, TextField::Phone),
            p.contact_row(Icon::MapPin, TextField::Location),
            RenderNode::row(vec![
                RenderNode::icon(Icon::User),
                p.text(TextField::Nationality),
                RenderNode::label("•"),
                p.text(TextField::BirthDate),
            ]),
            p.photo(PhotoStyle::new(PhotoShape::Rounded).with_fallback(Icon::User)),
        ],
    );

    let mut main = vec![p.summary_section(true)];
    main.extend(p.experience_section(
        &[Exp::Role, Exp::Period, Exp::Company, Exp::Description],
        EmptyPolicy::Caption,
    ));
    main.extend(p.education_section(&[Edu::Degree, Edu::School, Edu::Year], EmptyPolicy::Caption));
    main.extend(p.social_section());

    let aside: Vec<RenderNode> = [
        (ListField::Languages, Icon::Globe, None),
        (ListField::Skills, Icon::Code, None),
        (ListField::SoftSkills, Icon::User, Some(Icon::Dot)),
    ]
    .into_iter()
    .filter_map(|(field, heading, bullet)| {
        let body = p.list_body(field, EmptyPolicy::Caption, bullet)?;
        let mut children = vec![RenderNode::row(vec![
            RenderNode::icon(heading),
            p.title(field.section()),
        ])];
        children.extend(body);
        Some(RenderNode::section(field.section(), children))
    })
    .chain(std::iter::once(RenderNode::label(p.locale.captions.privacy_note)))
    .collect();

    RenderNode::region(
        Region::Page,
        vec![
            header,
            RenderNode::region(Region::Main, main),
            RenderNode::region(Region::Sidebar, aside),
        ],
    )
}
