use crate::document::model::{ExperienceField as Exp, ListField, SectionKind, TextField};
use crate::document::name::NamePart;
use crate::render::{EmptyPolicy, Projection, Region, RenderNode};

pub fn layout(p: &Projection<'_>) -> RenderNode {
    let chrome = &p.locale.chrome;
    let terminal = RenderNode::region(
        Region::Terminal,
        vec![
            RenderNode::row(vec![RenderNode::label("> "), p.name(NamePart::Handle)]),
            RenderNode::row(vec![
                RenderNode::label(format!(
                    "{}: {} | {}: ",
                    chrome.status_label, chrome.available_for_hire, chrome.role_label
                )),
                p.text(TextField::Role),
            ]),
        ],
    );

    let mut main = vec![p.summary_section(true)];
    main.extend(p.experience_section(
        &[Exp::Role, Exp::Company, Exp::Period, Exp::Description],
        EmptyPolicy::Caption,
    ));

    let mut stack = vec![RenderNode::label(chrome.stack_label)];
    stack.extend(
        p.list_body(ListField::Skills, EmptyPolicy::Caption, None)
            .unwrap_or_default(),
    );

    let mut network = vec![
        RenderNode::label(chrome.network_label),
        RenderNode::row(vec![
            RenderNode::label(format!("{}: ", chrome.email_label)),
            p.text(TextField::Email),
        ]),
    ];
    network.extend(p.socials());

    RenderNode::region(
        Region::Page,
        vec![
            terminal,
            RenderNode::region(Region::Main, main),
            RenderNode::region(
                Region::Sidebar,
                vec![
                    RenderNode::section(SectionKind::Skills, stack),
                    RenderNode::section(SectionKind::Contact, network),
                ],
            ),
        ],
    )
}
