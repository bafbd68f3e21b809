use crate::document::model::{
    CvDocument, Education, EntryId, Experience, SectionTitles, TemplateKind, DEFAULT_PHOTO_OFFSET,
};
use crate::locale::Language;

/// The built-in example CV every session starts from.
///
/// Every text is placeholder content: the matching tracker starts empty, so the
/// first focus on any field clears it for typing.
pub fn example_document(language: Language) -> CvDocument {
    CvDocument {
        full_name: "Guilherme Tebaldi".into(),
        role: "Full Stack Developer & Marketing Specialist".into(),
        email: "guilherme.tebaldi@email.com".into(),
        phone: "+39 123 456 7890".into(),
        location: "Italia / Remoto".into(),
        nationality: "Brasiliano".into(),
        birth_date: "1996".into(),
        summary: "Programmatore appassionato con solida esperienza nel marketing digitale e nella \
                  gestione dei social media. Specializzato nello sviluppo di siti web e applicazioni \
                  scalabili. Elevata capacità di concentrazione e resistenza nel lavoro di sviluppo \
                  software, unita a una profonda conoscenza degli strumenti di marketing per la \
                  crescita del business."
            .into(),
        profile_image: None,
        profile_image_pos: DEFAULT_PHOTO_OFFSET,
        linkedin: "linkedin.com/in/guilherme-tebaldi".into(),
        github: "github.com/GuilhermeTebaldi".into(),
        portfolio: "guilhermetebaldi.dev".into(),
        instagram: "@guilhermetebaldi".into(),
        twitter: String::new(),
        template: TemplateKind::Modern,
        experiences: vec![Experience {
            id: EntryId::from("1"),
            company: "Freelance".into(),
            role: "Sviluppatore Full Stack & Digital Strategist".into(),
            period: "Dal 2014 al 2025 - Presente".into(),
            description: "Sviluppo di applicazioni web e mobile su misura. Gestione di campagne \
                          marketing multicanale e ottimizzazione della presenza sui social media \
                          per diversi clienti internazionali."
                .into(),
        }],
        education: vec![Education {
            id: EntryId::from("1"),
            school: "SENAI".into(),
            degree: "Programmatore e Marketing Digitale".into(),
            year: "2011".into(),
        }],
        skills: [
            "React",
            "Java",
            "C#",
            "Render",
            "Vercel",
            "Social Media Management",
            "Digital Marketing",
        ]
        .map(String::from)
        .to_vec(),
        languages: ["Portoghese (Madrelingua)", "Italiano"].map(String::from).to_vec(),
        soft_skills: ["Problem Solving", "Focus Profondo", "Creatività", "Adattabilità"]
            .map(String::from)
            .to_vec(),
        section_titles: SectionTitles::from(&language.locale().section_titles),
    }
}
