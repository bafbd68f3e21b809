use crate::document::model::{
    EducationField as Edu, ExperienceField as Exp, ListField, SectionKind, TextField,
};
use crate::render::{
    EmptyPolicy, Icon, PhotoShape, PhotoStyle, Projection, Region, RenderNode,
};

pub fn layout(p: &Projection<'_>) -> RenderNode {
    let header = RenderNode::region(
        Region::Header,
        vec![
            RenderNode::label(p.locale.chrome.curriculum_title),
            p.text(TextField::FullName),
            p.photo(PhotoStyle::new(PhotoShape::Square).with_fallback(Icon::User)),
        ],
    );

    let contact = RenderNode::section(
        SectionKind::Contact,
        vec![
            p.title(SectionKind::Contact),
            p.contact_row(Icon::Mail, TextField::Email),
            p.contact_row(Icon::Phone, TextField::Phone),
            p.contact_row(Icon::MapPin, TextField::Location),
            RenderNode::row(vec![
                RenderNode::icon(Icon::Globe),
                p.text_or(TextField::Portfolio, p.locale.defaults.website_label),
            ]),
        ],
    );
    let mut sidebar = vec![contact];
    sidebar.extend(p.list_section(ListField::Languages, EmptyPolicy::Caption, Some(Icon::Check)));
    sidebar.extend(p.list_section(ListField::Skills, EmptyPolicy::Caption, None));

    let mut main = vec![p.summary_section(true)];
    main.extend(p.experience_section(
        &[Exp::Role, Exp::Period, Exp::Company, Exp::Description],
        EmptyPolicy::Caption,
    ));
    main.extend(p.education_section(&[Edu::Degree, Edu::Year, Edu::School], EmptyPolicy::Caption));

    let mut page = vec![
        header,
        RenderNode::region(Region::Sidebar, sidebar),
        RenderNode::region(Region::Main, main),
    ];
    page.extend(p.socials().map(|s| RenderNode::region(Region::Footer, vec![s])));
    RenderNode::region(Region::Page, page)
}
