//! Locale provider: section titles, seed content, and template chrome per display language.
//!
//! The language set is closed. Every table is a typed struct, so a locale that
//! forgets a section kind fails to compile rather than falling back at runtime.

mod tables;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::document::model::{ListField, SectionKind};

/// Display languages the editor ships tables for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    It,
    Pt,
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::It, Language::Pt, Language::En, Language::Es];

    pub fn as_str(self) -> &'static str {
        match self {
            Language::It => "it",
            Language::Pt => "pt",
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Returns the static table for this language.
    pub fn locale(self) -> &'static Locale {
        match self {
            Language::It => &tables::IT,
            Language::Pt => &tables::PT,
            Language::En => &tables::EN,
            Language::Es => &tables::ES,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unsupported language '{s}'"))
    }
}

/// Everything the editor reads from one language.
#[derive(Debug)]
pub struct Locale {
    pub label: &'static str,
    pub section_titles: LocalizedTitles,
    pub defaults: EntryDefaults,
    pub chrome: TemplateChrome,
    pub captions: Captions,
}

#[derive(Debug)]
pub struct LocalizedTitles {
    pub experience: &'static str,
    pub education: &'static str,
    pub skills: &'static str,
    pub languages: &'static str,
    pub soft_skills: &'static str,
    pub summary: &'static str,
    pub contact: &'static str,
    pub social: &'static str,
    pub personal_info: &'static str,
}

impl LocalizedTitles {
    pub fn get(&self, kind: SectionKind) -> &'static str {
        match kind {
            SectionKind::Experience => self.experience,
            SectionKind::Education => self.education,
            SectionKind::Skills => self.skills,
            SectionKind::Languages => self.languages,
            SectionKind::SoftSkills => self.soft_skills,
            SectionKind::Summary => self.summary,
            SectionKind::Contact => self.contact,
            SectionKind::Social => self.social,
            SectionKind::PersonalInfo => self.personal_info,
        }
    }
}

#[derive(Debug)]
pub struct ExperienceDefaults {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct EducationDefaults {
    pub school: &'static str,
    pub degree: &'static str,
    pub year: &'static str,
}

#[derive(Debug)]
pub struct ListDefaults {
    pub skills: &'static str,
    pub languages: &'static str,
    pub soft_skills: &'static str,
}

impl ListDefaults {
    pub fn get(&self, field: ListField) -> &'static str {
        match field {
            ListField::Skills => self.skills,
            ListField::Languages => self.languages,
            ListField::SoftSkills => self.soft_skills,
        }
    }
}

/// Seed content for freshly added entries and list items.
#[derive(Debug)]
pub struct EntryDefaults {
    pub experience: ExperienceDefaults,
    pub education: EducationDefaults,
    pub list_items: ListDefaults,
    /// Shown in place of an empty portfolio URL by templates that always list it.
    pub website_label: &'static str,
}

/// Static strings templates print around the document content. Never editable.
#[derive(Debug)]
pub struct TemplateChrome {
    pub curriculum_title: &'static str,
    pub status_label: &'static str,
    pub role_label: &'static str,
    pub available_for_hire: &'static str,
    pub stack_label: &'static str,
    pub network_label: &'static str,
    pub email_label: &'static str,
}

#[derive(Debug)]
pub struct Captions {
    pub experiences_label: &'static str,
    pub education_label: &'static str,
    pub skills_label: &'static str,
    pub languages_label: &'static str,
    pub soft_skills_label: &'static str,
    pub add_experience: &'static str,
    pub add_education: &'static str,
    pub empty_experience: &'static str,
    pub empty_education: &'static str,
    pub empty_skills: &'static str,
    pub empty_languages: &'static str,
    pub empty_soft_skills: &'static str,
    pub empty_skill_fallback: &'static str,
    pub empty_language_fallback: &'static str,
    pub empty_soft_skill_fallback: &'static str,
    pub privacy_note: &'static str,
}

impl Captions {
    /// Caption shown when a positional list has no items.
    pub fn empty_list(&self, field: ListField) -> &'static str {
        match field {
            ListField::Skills => self.empty_skills,
            ListField::Languages => self.empty_languages,
            ListField::SoftSkills => self.empty_soft_skills,
        }
    }

    /// Caption shown in place of a list item whose text is blank.
    pub fn blank_item(&self, field: ListField) -> &'static str {
        match field {
            ListField::Skills => self.empty_skill_fallback,
            ListField::Languages => self.empty_language_fallback,
            ListField::SoftSkills => self.empty_soft_skill_fallback,
        }
    }

    pub fn list_label(&self, field: ListField) -> &'static str {
        match field {
            ListField::Skills => self.skills_label,
            ListField::Languages => self.languages_label,
            ListField::SoftSkills => self.soft_skills_label,
        }
    }
}
