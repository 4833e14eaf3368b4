//! Data models for realities, profiles, and merge conflicts.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data and presentation apart.
//!
//! # Examples
//!
//! ```rust
//! use realitylab_core::models::{PlanDocument, RealityStatus, TimelinePhase};
//!
//! let doc = PlanDocument::new("Data Engineer")
//!     .with_phase(TimelinePhase::new("Foundation", "Learn SQL", "3 months"))
//!     .with_status(RealityStatus::Stable);
//! assert!(doc.validate().is_ok());
//! ```

pub mod artifact;
pub mod conflict;
pub mod plan;
pub mod profile;
pub mod status;

#[cfg(test)]
mod tests;

pub use artifact::SavedArtifact;
pub use conflict::{
    Conflict, ConflictId, ConflictKind, ConflictRef, ConflictResolution, ConflictSubject,
    ConflictValue, ResolutionChoice,
};
pub use plan::{
    AssessmentPrep, BehavioralPrep, Certification, CompensationRange, Glitch, InterviewPrep,
    LearningResource, PlacementOutcomes, PlanDocument, RequiredSkills, SoftSkill, TechnicalPrep,
    TechnicalSkill, TimelinePhase,
};
pub use profile::{
    Achievement, Coursework, Education, HeldCertification, HeldSkills, HeldSoftSkill,
    HeldTechnicalSkill, Internship, Profile, Project, TargetRole,
};
pub use status::{
    CertificationPriority, GlitchKind, Importance, RealityStatus, ResourceKind, ResourceStatus,
    RoleType, Severity, SkillPriority,
};
