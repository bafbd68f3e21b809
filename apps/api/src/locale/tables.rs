use super::{
    Captions, EducationDefaults, EntryDefaults, ExperienceDefaults, ListDefaults, Locale,
    LocalizedTitles, TemplateChrome,
};

pub(super) static IT: Locale = Locale {
    label: "Italiano",
    section_titles: LocalizedTitles {
        experience: "Esperienze Lavorative",
        education: "Istruzione",
        skills: "Competenze Tecniche",
        languages: "Lingue",
        soft_skills: "Soft Skills",
        summary: "Profilo Professionale",
        contact: "Contatti",
        social: "Web & Social",
        personal_info: "Anagrafica",
    },
    defaults: EntryDefaults {
        experience: ExperienceDefaults {
            company: "Nuova Azienda",
            role: "Ruolo",
            period: "2024 - Presente",
            description: "Descrizione delle attività...",
        },
        education: EducationDefaults {
            school: "Nome Istituto",
            degree: "Titolo di Studio",
            year: "2024",
        },
        list_items: ListDefaults {
            skills: "Nuova competenza",
            languages: "Nuova lingua",
            soft_skills: "Nuova soft skill",
        },
        website_label: "Sito Web",
    },
    chrome: TemplateChrome {
        curriculum_title: "Curriculum Vitae",
        status_label: "Stato",
        role_label: "Ruolo",
        available_for_hire: "disponibile_per_assunzione",
        stack_label: "Stack",
        network_label: "Rete",
        email_label: "email",
    },
    captions: Captions {
        experiences_label: "Esperienze",
        education_label: "Istruzione",
        skills_label: "Competenze",
        languages_label: "Lingue",
        soft_skills_label: "Soft Skills",
        add_experience: "Esperienza",
        add_education: "Istruzione",
        empty_experience: "Nessuna esperienza",
        empty_education: "Nessuna istruzione",
        empty_skills: "Nessuna competenza",
        empty_languages: "Nessuna lingua",
        empty_soft_skills: "Nessuna soft skill",
        empty_skill_fallback: "Competenza vuota",
        empty_language_fallback: "Lingua vuota",
        empty_soft_skill_fallback: "Soft skill vuota",
        privacy_note: "Autorizzo il trattamento dei miei dati personali ai sensi del Dlgs 196 del 30 giugno 2003 e dell'art. 13 GDPR ai fini della ricerca e selezione del personale.",
    },
};

pub(super) static PT: Locale = Locale {
    label: "Português",
    section_titles: LocalizedTitles {
        experience: "Experiências Profissionais",
        education: "Formação",
        skills: "Competências",
        languages: "Idiomas",
        soft_skills: "Soft Skills",
        summary: "Resumo Profissional",
        contact: "Contato",
        social: "Web & Social",
        personal_info: "Dados Pessoais",
    },
    defaults: EntryDefaults {
        experience: ExperienceDefaults {
            company: "Nova Empresa",
            role: "Cargo",
            period: "2024 - Presente",
            description: "Descrição das atividades...",
        },
        education: EducationDefaults {
            school: "Nome da Instituição",
            degree: "Grau",
            year: "2024",
        },
        list_items: ListDefaults {
            skills: "Nova competência",
            languages: "Novo idioma",
            soft_skills: "Nova soft skill",
        },
        website_label: "Site",
    },
    chrome: TemplateChrome {
        curriculum_title: "Currículo Vitae",
        status_label: "Status",
        role_label: "Cargo",
        available_for_hire: "disponível_para_contratação",
        stack_label: "Stack",
        network_label: "Rede",
        email_label: "email",
    },
    captions: Captions {
        experiences_label: "Experiências",
        education_label: "Formação",
        skills_label: "Competências",
        languages_label: "Idiomas",
        soft_skills_label: "Soft Skills",
        add_experience: "Experiência",
        add_education: "Formação",
        empty_experience: "Nenhuma experiência",
        empty_education: "Nenhuma formação",
        empty_skills: "Nenhuma competência",
        empty_languages: "Nenhum idioma",
        empty_soft_skills: "Nenhuma soft skill",
        empty_skill_fallback: "Competência vazia",
        empty_language_fallback: "Idioma vazio",
        empty_soft_skill_fallback: "Soft skill vazia",
        privacy_note: "Autorizo o tratamento dos meus dados pessoais nos termos do Decreto Legislativo 196 de 30 de junho de 2003 e do art. 13 do GDPR para fins de recrutamento e seleção.",
    },
};

pub(super) static EN: Locale = Locale {
    label: "English",
    section_titles: LocalizedTitles {
        experience: "Work Experience",
        education: "Education",
        skills: "Skills",
        languages: "Languages",
        soft_skills: "Soft Skills",
        summary: "Professional Summary",
        contact: "Contact",
        social: "Web & Social",
        personal_info: "Personal Info",
    },
    defaults: EntryDefaults {
        experience: ExperienceDefaults {
            company: "New Company",
            role: "Role",
            period: "2024 - Present",
            description: "Description of activities...",
        },
        education: EducationDefaults {
            school: "School Name",
            degree: "Degree",
            year: "2024",
        },
        list_items: ListDefaults {
            skills: "New skill",
            languages: "New language",
            soft_skills: "New soft skill",
        },
        website_label: "Website",
    },
    chrome: TemplateChrome {
        curriculum_title: "Curriculum Vitae",
        status_label: "Status",
        role_label: "Role",
        available_for_hire: "available_for_hire",
        stack_label: "Stack",
        network_label: "Network",
        email_label: "email",
    },
    captions: Captions {
        experiences_label: "Experiences",
        education_label: "Education",
        skills_label: "Skills",
        languages_label: "Languages",
        soft_skills_label: "Soft Skills",
        add_experience: "Experience",
        add_education: "Education",
        empty_experience: "No experience",
        empty_education: "No education",
        empty_skills: "No skills",
        empty_languages: "No languages",
        empty_soft_skills: "No soft skills",
        empty_skill_fallback: "Empty skill",
        empty_language_fallback: "Empty language",
        empty_soft_skill_fallback: "Empty soft skill",
        privacy_note: "I authorize the processing of my personal data pursuant to Legislative Decree 196 of June 30, 2003 and Article 13 of the GDPR for recruitment and selection purposes.",
    },
};

pub(super) static ES: Locale = Locale {
    label: "Español",
    section_titles: LocalizedTitles {
        experience: "Experiencia Laboral",
        education: "Educación",
        skills: "Habilidades",
        languages: "Idiomas",
        soft_skills: "Soft Skills",
        summary: "Resumen Profesional",
        contact: "Contacto",
        social: "Web y Social",
        personal_info: "Información Personal",
    },
    defaults: EntryDefaults {
        experience: ExperienceDefaults {
            company: "Nueva Empresa",
            role: "Puesto",
            period: "2024 - Presente",
            description: "Descripción de actividades...",
        },
        education: EducationDefaults {
            school: "Nombre del Instituto",
            degree: "Título",
            year: "2024",
        },
        list_items: ListDefaults {
            skills: "Nueva habilidad",
            languages: "Nuevo idioma",
            soft_skills: "Nueva soft skill",
        },
        website_label: "Sitio web",
    },
    chrome: TemplateChrome {
        curriculum_title: "Currículum Vitae",
        status_label: "Estado",
        role_label: "Rol",
        available_for_hire: "disponible_para_contratación",
        stack_label: "Stack",
        network_label: "Red",
        email_label: "email",
    },
    captions: Captions {
        experiences_label: "Experiencias",
        education_label: "Educación",
        skills_label: "Habilidades",
        languages_label: "Idiomas",
        soft_skills_label: "Soft Skills",
        add_experience: "Experiencia",
        add_education: "Educación",
        empty_experience: "Sin experiencia",
        empty_education: "Sin educación",
        empty_skills: "Sin habilidades",
        empty_languages: "Sin idiomas",
        empty_soft_skills: "Sin soft skills",
        empty_skill_fallback: "Habilidad vacía",
        empty_language_fallback: "Idioma vacío",
        empty_soft_skill_fallback: "Soft skill vacía",
        privacy_note: "Autorizo el tratamiento de mis datos personales de acuerdo con el Decreto Legislativo 196 de 30 de junio de 2003 y el art. 13 del GDPR para fines de selección y contratación.",
    },
};
