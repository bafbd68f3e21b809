use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::locale::LocalizedTitles;

/// Fallback vertical framing offset of the profile photo, in percent.
pub const DEFAULT_PHOTO_OFFSET: f64 = 50.0;

// ────────────────────────────────────────────────────────────────────────────
// Identifiers and field names
// ────────────────────────────────────────────────────────────────────────────

/// Stable identifier of an experience or education entry. Assigned once at creation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-text scalar fields of the document, socials included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    FullName,
    Role,
    Email,
    Phone,
    Location,
    Nationality,
    BirthDate,
    Summary,
    Linkedin,
    Github,
    Portfolio,
    Instagram,
    Twitter,
}

impl TextField {
    pub const ALL: [TextField; 13] = [
        TextField::FullName,
        TextField::Role,
        TextField::Email,
        TextField::Phone,
        TextField::Location,
        TextField::Nationality,
        TextField::BirthDate,
        TextField::Summary,
        TextField::Linkedin,
        TextField::Github,
        TextField::Portfolio,
        TextField::Instagram,
        TextField::Twitter,
    ];

    /// Social fields in the fixed order templates print them.
    pub const SOCIALS: [TextField; 5] = [
        TextField::Linkedin,
        TextField::Github,
        TextField::Portfolio,
        TextField::Instagram,
        TextField::Twitter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TextField::FullName => "full_name",
            TextField::Role => "role",
            TextField::Email => "email",
            TextField::Phone => "phone",
            TextField::Location => "location",
            TextField::Nationality => "nationality",
            TextField::BirthDate => "birth_date",
            TextField::Summary => "summary",
            TextField::Linkedin => "linkedin",
            TextField::Github => "github",
            TextField::Portfolio => "portfolio",
            TextField::Instagram => "instagram",
            TextField::Twitter => "twitter",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, TextField::Summary)
    }
}

impl FromStr for TextField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown field '{s}'"))
    }
}

/// The fixed categories of CV content a template may display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Experience,
    Education,
    Skills,
    Languages,
    SoftSkills,
    Summary,
    Contact,
    Social,
    PersonalInfo,
}

impl SectionKind {
    pub const ALL: [SectionKind; 9] = [
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Languages,
        SectionKind::SoftSkills,
        SectionKind::Summary,
        SectionKind::Contact,
        SectionKind::Social,
        SectionKind::PersonalInfo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Languages => "languages",
            SectionKind::SoftSkills => "soft_skills",
            SectionKind::Summary => "summary",
            SectionKind::Contact => "contact",
            SectionKind::Social => "social",
            SectionKind::PersonalInfo => "personal_info",
        }
    }
}

impl FromStr for SectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown section '{s}'"))
    }
}

/// Positional string lists. Position is identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListField {
    Skills,
    Languages,
    SoftSkills,
}

impl ListField {
    pub const ALL: [ListField; 3] = [ListField::Skills, ListField::Languages, ListField::SoftSkills];

    pub fn as_str(self) -> &'static str {
        match self {
            ListField::Skills => "skills",
            ListField::Languages => "languages",
            ListField::SoftSkills => "soft_skills",
        }
    }

    pub fn section(self) -> SectionKind {
        match self {
            ListField::Skills => SectionKind::Skills,
            ListField::Languages => SectionKind::Languages,
            ListField::SoftSkills => SectionKind::SoftSkills,
        }
    }
}

impl FromStr for ListField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown list '{s}'"))
    }
}

/// Identity-keyed collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Experience,
    Education,
}

impl Collection {
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Experience => "experience",
            Collection::Education => "education",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Company,
    Role,
    Period,
    Description,
}

impl ExperienceField {
    pub const ALL: [ExperienceField; 4] = [
        ExperienceField::Company,
        ExperienceField::Role,
        ExperienceField::Period,
        ExperienceField::Description,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceField::Company => "company",
            ExperienceField::Role => "role",
            ExperienceField::Period => "period",
            ExperienceField::Description => "description",
        }
    }
}

impl FromStr for ExperienceField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExperienceField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown experience field '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    School,
    Degree,
    Year,
}

impl EducationField {
    pub const ALL: [EducationField; 3] =
        [EducationField::School, EducationField::Degree, EducationField::Year];

    pub fn as_str(self) -> &'static str {
        match self {
            EducationField::School => "school",
            EducationField::Degree => "degree",
            EducationField::Year => "year",
        }
    }
}

impl FromStr for EducationField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EducationField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown education field '{s}'"))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Template selector
// ────────────────────────────────────────────────────────────────────────────

/// The layout strategies a document can be projected through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Europass,
    #[default]
    Modern,
    Classic,
    Minimal,
    Creative,
    Corporate,
    Elegant,
    Tech,
    Sidebar,
}

impl TemplateKind {
    /// Gallery order.
    pub const ALL: [TemplateKind; 9] = [
        TemplateKind::Europass,
        TemplateKind::Modern,
        TemplateKind::Classic,
        TemplateKind::Minimal,
        TemplateKind::Creative,
        TemplateKind::Corporate,
        TemplateKind::Elegant,
        TemplateKind::Tech,
        TemplateKind::Sidebar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateKind::Europass => "europass",
            TemplateKind::Modern => "modern",
            TemplateKind::Classic => "classic",
            TemplateKind::Minimal => "minimal",
            TemplateKind::Creative => "creative",
            TemplateKind::Corporate => "corporate",
            TemplateKind::Elegant => "elegant",
            TemplateKind::Tech => "tech",
            TemplateKind::Sidebar => "sidebar",
        }
    }

    /// Resolves a selector name, falling back to the default layout for names
    /// this build does not know.
    pub fn resolve(name: &str) -> Self {
        let name = name.trim();
        TemplateKind::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
            .unwrap_or_else(|| {
                tracing::warn!("Unknown template '{name}', using {}", TemplateKind::default().as_str());
                TemplateKind::default()
            })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: EntryId,
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: String,
}

impl Experience {
    pub fn get(&self, field: ExperienceField) -> &str {
        match field {
            ExperienceField::Company => &self.company,
            ExperienceField::Role => &self.role,
            ExperienceField::Period => &self.period,
            ExperienceField::Description => &self.description,
        }
    }

    pub fn get_mut(&mut self, field: ExperienceField) -> &mut String {
        match field {
            ExperienceField::Company => &mut self.company,
            ExperienceField::Role => &mut self.role,
            ExperienceField::Period => &mut self.period,
            ExperienceField::Description => &mut self.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: EntryId,
    pub school: String,
    pub degree: String,
    pub year: String,
}

impl Education {
    pub fn get(&self, field: EducationField) -> &str {
        match field {
            EducationField::School => &self.school,
            EducationField::Degree => &self.degree,
            EducationField::Year => &self.year,
        }
    }

    pub fn get_mut(&mut self, field: EducationField) -> &mut String {
        match field {
            EducationField::School => &mut self.school,
            EducationField::Degree => &mut self.degree,
            EducationField::Year => &mut self.year,
        }
    }
}

/// User-overridable section labels. Unedited entries follow the display language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionTitles {
    pub experience: String,
    pub education: String,
    pub skills: String,
    pub languages: String,
    pub soft_skills: String,
    pub summary: String,
    pub contact: String,
    pub social: String,
    pub personal_info: String,
}

impl SectionTitles {
    pub fn get(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::Experience => &self.experience,
            SectionKind::Education => &self.education,
            SectionKind::Skills => &self.skills,
            SectionKind::Languages => &self.languages,
            SectionKind::SoftSkills => &self.soft_skills,
            SectionKind::Summary => &self.summary,
            SectionKind::Contact => &self.contact,
            SectionKind::Social => &self.social,
            SectionKind::PersonalInfo => &self.personal_info,
        }
    }

    pub fn get_mut(&mut self, kind: SectionKind) -> &mut String {
        match kind {
            SectionKind::Experience => &mut self.experience,
            SectionKind::Education => &mut self.education,
            SectionKind::Skills => &mut self.skills,
            SectionKind::Languages => &mut self.languages,
            SectionKind::SoftSkills => &mut self.soft_skills,
            SectionKind::Summary => &mut self.summary,
            SectionKind::Contact => &mut self.contact,
            SectionKind::Social => &mut self.social,
            SectionKind::PersonalInfo => &mut self.personal_info,
        }
    }
}

impl From<&LocalizedTitles> for SectionTitles {
    fn from(titles: &LocalizedTitles) -> Self {
        Self {
            experience: titles.experience.to_string(),
            education: titles.education.to_string(),
            skills: titles.skills.to_string(),
            languages: titles.languages.to_string(),
            soft_skills: titles.soft_skills.to_string(),
            summary: titles.summary.to_string(),
            contact: titles.contact.to_string(),
            social: titles.social.to_string(),
            personal_info: titles.personal_info.to_string(),
        }
    }
}

/// The canonical, language-agnostic CV content. Field names follow the
/// browser snapshot format (camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvDocument {
    pub full_name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub nationality: String,
    pub birth_date: String,
    pub summary: String,
    /// Opaque image reference (usually a `data:` URI).
    pub profile_image: Option<String>,
    /// Vertical framing offset in percent, 0..=100.
    pub profile_image_pos: f64,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    pub instagram: String,
    pub twitter: String,
    pub template: TemplateKind,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
    pub languages: Vec<String>,
    pub soft_skills: Vec<String>,
    pub section_titles: SectionTitles,
}

impl CvDocument {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FullName => &self.full_name,
            TextField::Role => &self.role,
            TextField::Email => &self.email,
            TextField::Phone => &self.phone,
            TextField::Location => &self.location,
            TextField::Nationality => &self.nationality,
            TextField::BirthDate => &self.birth_date,
            TextField::Summary => &self.summary,
            TextField::Linkedin => &self.linkedin,
            TextField::Github => &self.github,
            TextField::Portfolio => &self.portfolio,
            TextField::Instagram => &self.instagram,
            TextField::Twitter => &self.twitter,
        }
    }

    pub fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::FullName => &mut self.full_name,
            TextField::Role => &mut self.role,
            TextField::Email => &mut self.email,
            TextField::Phone => &mut self.phone,
            TextField::Location => &mut self.location,
            TextField::Nationality => &mut self.nationality,
            TextField::BirthDate => &mut self.birth_date,
            TextField::Summary => &mut self.summary,
            TextField::Linkedin => &mut self.linkedin,
            TextField::Github => &mut self.github,
            TextField::Portfolio => &mut self.portfolio,
            TextField::Instagram => &mut self.instagram,
            TextField::Twitter => &mut self.twitter,
        }
    }

    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::Skills => &self.skills,
            ListField::Languages => &self.languages,
            ListField::SoftSkills => &self.soft_skills,
        }
    }

    pub fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::Skills => &mut self.skills,
            ListField::Languages => &mut self.languages,
            ListField::SoftSkills => &mut self.soft_skills,
        }
    }

    /// Socials whose trimmed value is non-empty, in print order.
    pub fn present_socials(&self) -> Vec<(TextField, &str)> {
        TextField::SOCIALS
            .into_iter()
            .map(|f| (f, self.text(f)))
            .filter(|(_, v)| !v.trim().is_empty())
            .collect()
    }

    pub fn experience(&self, id: &EntryId) -> Option<&Experience> {
        self.experiences.iter().find(|e| &e.id == id)
    }

    pub fn education_entry(&self, id: &EntryId) -> Option<&Education> {
        self.education.iter().find(|e| &e.id == id)
    }

    pub fn contains_entry(&self, collection: Collection, id: &EntryId) -> bool {
        match collection {
            Collection::Experience => self.experience(id).is_some(),
            Collection::Education => self.education_entry(id).is_some(),
        }
    }

    pub fn has_photo(&self) -> bool {
        self.profile_image.is_some()
    }
}
