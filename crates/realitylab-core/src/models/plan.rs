//! The generated plan document ("reality") and its nested records.

use serde::{Deserialize, Deserializer, Serialize};

use super::{
    CertificationPriority, GlitchKind, Importance, RealityStatus, ResourceKind, ResourceStatus,
    RoleType, Severity, SkillPriority,
};
use crate::error::{LabError, Result};

/// One generated career plan.
///
/// Every section defaults to empty so that partially populated generator
/// output still deserializes; [`PlanDocument::validate`] enforces the one
/// structural invariant (at least one timeline phase).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanDocument {
    /// Display name, not unique
    #[serde(alias = "reality_name", alias = "realityName")]
    pub name: String,

    /// Sustainable development goal tags
    #[serde(alias = "sdg_alignment")]
    pub sdg_alignment: Vec<String>,

    pub required_skills: RequiredSkills,

    pub learning_resources: Vec<LearningResource>,

    pub interview_prep: InterviewPrep,

    /// Ordered phase sequence
    #[serde(alias = "timeline_phases")]
    pub timeline_phases: Vec<TimelinePhase>,

    pub placement_outcomes: PlacementOutcomes,

    pub glitches: Vec<Glitch>,

    pub status: RealityStatus,
}

impl PlanDocument {
    /// Creates an empty, stable document with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Appends a timeline phase.
    pub fn with_phase(mut self, phase: TimelinePhase) -> Self {
        self.timeline_phases.push(phase);
        self
    }

    /// Appends a glitch.
    pub fn with_glitch(mut self, glitch: Glitch) -> Self {
        self.glitches.push(glitch);
        self
    }

    /// Sets the document status.
    pub fn with_status(mut self, status: RealityStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the SDG tags.
    pub fn with_sdgs<I, S>(mut self, sdgs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sdg_alignment = sdgs.into_iter().map(Into::into).collect();
        self
    }

    /// Checks the invariants a generated document must hold before it is
    /// treated as a plan.
    pub fn validate(&self) -> Result<()> {
        if self.timeline_phases.is_empty() {
            return Err(LabError::invalid_input("timelinePhases")
                .with_reason("a reality needs at least one timeline phase"));
        }
        Ok(())
    }
}

/// Skills the plan asks the user to acquire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RequiredSkills {
    pub technical: Vec<TechnicalSkill>,
    pub soft: Vec<SoftSkill>,
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TechnicalSkill {
    pub skill: String,
    pub priority: SkillPriority,
    /// Current proficiency, 0-100
    pub current_level: u8,
    /// Target proficiency, 0-100
    pub target_level: u8,
    pub learning_path: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SoftSkill {
    pub skill: String,
    pub importance: Importance,
    pub development_activities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub name: String,
    pub deadline: String,
    pub cost: f64,
    pub priority: CertificationPriority,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LearningResource {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub platform: String,
    pub duration: String,
    pub cost: f64,
    pub prerequisite: Vec<String>,
    pub status: ResourceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct InterviewPrep {
    pub technical: TechnicalPrep,
    pub behavioral: BehavioralPrep,
    pub assessments: AssessmentPrep,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TechnicalPrep {
    pub topics: Vec<String>,
    pub practice_problems: u32,
    pub mock_interviews: u32,
    pub target_score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BehavioralPrep {
    pub scenarios: Vec<String>,
    pub star_stories: u32,
    pub practice_hours: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentPrep {
    pub platforms: Vec<String>,
    pub target_score: u32,
    pub completed: u32,
}

/// One phase of the plan timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelinePhase {
    pub phase: String,
    pub action: String,
    /// Free text, conventionally `"<N> <unit>"`
    pub duration: String,
    pub weekly_hours: u32,
    pub milestones: Vec<String>,
    pub dependencies: Vec<String>,
}

impl TimelinePhase {
    pub fn new(
        phase: impl Into<String>,
        action: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            phase: phase.into(),
            action: action.into(),
            duration: duration.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PlacementOutcomes {
    pub target_companies: Vec<String>,
    #[serde(rename = "expectedCTC")]
    pub expected_ctc: CompensationRange,
    pub role_type: RoleType,
    /// Estimated chance of placement, 0-100
    pub success_probability: f64,
    pub alternative_paths: Vec<String>,
}

/// Expected cost-to-company range. No currency conversion is ever applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct CompensationRange {
    pub min: f64,
    pub max: f64,
    pub currency: String,
}

/// A risk recorded inside a single document.
///
/// Glitches compare by value: two glitches are the same risk when every
/// field matches.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct Glitch {
    #[serde(rename = "type")]
    pub kind: GlitchKind,
    pub description: String,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

impl Glitch {
    pub fn new(kind: GlitchKind, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            kind,
            description: description.into(),
            severity,
            resolution: None,
        }
    }
}

// Older generators emit glitches as bare strings.
impl<'de> Deserialize<'de> for Glitch {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Record {
                #[serde(rename = "type", default)]
                kind: GlitchKind,
                description: String,
                #[serde(default)]
                severity: Severity,
                #[serde(default)]
                resolution: Option<String>,
            },
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(description) => Glitch {
                kind: GlitchKind::default(),
                description,
                severity: Severity::default(),
                resolution: None,
            },
            Repr::Record {
                kind,
                description,
                severity,
                resolution,
            } => Glitch {
                kind,
                description,
                severity,
                resolution,
            },
        })
    }
}
