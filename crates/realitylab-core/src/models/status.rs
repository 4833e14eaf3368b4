//! Status and tier enumerations for reality documents.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Document-level stability flag.
///
/// Generators have used several spellings over time; all of them are
/// accepted on input, while output always uses the canonical form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum RealityStatus {
    /// No unresolved risk
    #[default]
    #[serde(rename = "STABLE", alias = "Stable", alias = "stable")]
    Stable,

    /// Unresolved risk or instability
    #[serde(
        rename = "BREACH_DETECTED",
        alias = "BREACH DETECTED",
        alias = "Critical",
        alias = "critical"
    )]
    BreachDetected,
}

impl FromStr for RealityStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace(' ', "_").as_str() {
            "STABLE" => Ok(RealityStatus::Stable),
            "BREACH_DETECTED" | "CRITICAL" => Ok(RealityStatus::BreachDetected),
            _ => Err(format!("Invalid reality status: {s}")),
        }
    }
}

impl RealityStatus {
    /// Canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RealityStatus::Stable => "STABLE",
            RealityStatus::BreachDetected => "BREACH_DETECTED",
        }
    }

    /// Status with an icon, for list and tree views.
    pub fn with_icon(&self) -> &'static str {
        match self {
            RealityStatus::Stable => "● STABLE",
            RealityStatus::BreachDetected => "⚠ BREACH_DETECTED",
        }
    }
}

/// Priority of a technical skill in a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum SkillPriority {
    Critical,
    #[default]
    Important,
    #[serde(rename = "Nice-to-have")]
    NiceToHave,
}

/// Importance of a soft skill.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Importance {
    High,
    #[default]
    Medium,
    Low,
}

/// Priority of a certification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum CertificationPriority {
    #[serde(rename = "Must-have")]
    MustHave,
    #[default]
    Recommended,
    Optional,
}

/// Kind of learning resource.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ResourceKind {
    #[default]
    Course,
    Book,
    Tutorial,
    Project,
    Practice,
}

/// Completion state of a learning resource.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ResourceStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

/// Kind of employer a plan targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum RoleType {
    #[serde(rename = "Service-based")]
    ServiceBased,
    #[default]
    #[serde(rename = "Product-based")]
    ProductBased,
    Startup,
    Research,
}

/// Category of a glitch (risk recorded inside one document).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum GlitchKind {
    Time,
    Prerequisite,
    #[default]
    Goal,
    Resource,
    Skill,
}

/// Severity of a glitch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

impl GlitchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlitchKind::Time => "Time",
            GlitchKind::Prerequisite => "Prerequisite",
            GlitchKind::Goal => "Goal",
            GlitchKind::Resource => "Resource",
            GlitchKind::Skill => "Skill",
        }
    }
}

impl RoleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::ServiceBased => "Service-based",
            RoleType::ProductBased => "Product-based",
            RoleType::Startup => "Startup",
            RoleType::Research => "Research",
        }
    }
}

impl SkillPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillPriority::Critical => "Critical",
            SkillPriority::Important => "Important",
            SkillPriority::NiceToHave => "Nice-to-have",
        }
    }
}

impl CertificationPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            CertificationPriority::MustHave => "Must-have",
            CertificationPriority::Recommended => "Recommended",
            CertificationPriority::Optional => "Optional",
        }
    }
}

impl ResourceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceStatus::NotStarted => "Not Started",
            ResourceStatus::InProgress => "In Progress",
            ResourceStatus::Completed => "Completed",
        }
    }
}
