//! The user's career profile.

use serde::{Deserialize, Serialize};

/// The single active profile record.
///
/// Created with defaults on first use, replaced wholesale on save, and
/// snapshotted into every saved reality.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    pub education: Education,
    pub skills: HeldSkills,
    pub projects: Vec<Project>,
    pub internships: Vec<Internship>,
    pub achievements: Vec<Achievement>,
    pub target_roles: Vec<TargetRole>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub degree: String,
    pub major: String,
    pub university: String,
    pub cgpa: f64,
    pub current_year: String,
    pub expected_graduation: String,
    pub coursework: Vec<Coursework>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Coursework {
    pub course: String,
    pub grade: String,
    pub credits: u32,
    pub semester: String,
}

/// Skills the user already has, as opposed to the skills a plan requires.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct HeldSkills {
    pub technical: Vec<HeldTechnicalSkill>,
    pub soft: Vec<HeldSoftSkill>,
    pub certifications: Vec<HeldCertification>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct HeldTechnicalSkill {
    pub name: String,
    /// Beginner, Intermediate, Advanced or Expert
    pub proficiency: String,
    pub years_of_experience: f64,
    pub projects: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct HeldSoftSkill {
    pub name: String,
    /// Developing, Competent or Proficient
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct HeldCertification {
    pub name: String,
    pub issuer: String,
    pub date_obtained: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Internship {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub responsibilities: Vec<String>,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub date: String,
    /// Academic, Technical, Leadership or Other
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TargetRole {
    pub role: String,
    /// High, Medium or Low
    pub priority: String,
    pub target_companies: Vec<String>,
    pub required_skills: Vec<String>,
    /// Self-assessed readiness, 0-100
    pub current_readiness: u8,
}
