//! Core library for the reality lab: saved career plans ("realities"),
//! their fork lineage, and merging two of them into one.
//!
//! The pieces, bottom up:
//!
//! - [`models`]: the plan document, profile, saved reality, and conflict types
//! - [`extract`]: month counts from free-text durations
//! - [`merge`]: conflict detection, reconciliation, and comparison; all pure
//! - [`store`]: keyed persistence over a [`store::KeyValueBackend`], with
//!   [`db::Database`] (SQLite) and [`store::MemoryBackend`] implementations
//! - [`generation`]: turning generator output into a plan, or passing it
//!   through untouched
//! - [`lab`]: the async facade interfaces use
//! - [`display`]: markdown rendering for all of the above
//!
//! # Quick Start
//!
//! ```rust
//! use realitylab_core::{
//!     merge::merge,
//!     models::{PlanDocument, TimelinePhase},
//!     params::SaveReality,
//!     LabBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let lab = LabBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let save = |name: &str, months: &str| SaveReality {
//!     name: name.to_string(),
//!     document: PlanDocument::new(name)
//!         .with_phase(TimelinePhase::new("Only phase", "Do the work", months)),
//!     ..Default::default()
//! };
//! let a = lab.save_reality(&save("Founder", "24 months")).await?;
//! let b = lab.save_reality(&save("MBA", "24 months")).await?;
//!
//! let outcome = merge(&a, &b, &[]);
//! for (index, pending) in outcome.unresolved() {
//!     println!("Conflict {index} needs a choice: {}", pending.conflict.description);
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod extract;
pub mod generation;
pub mod lab;
pub mod merge;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    Ancestry, CreateResult, DeleteResult, LocalDateTime, OperationStatus, Realities, RealityTree,
};
pub use error::{LabError, Result};
pub use generation::{parse_generation_output, GenerationOutput, GenerationRequest};
pub use lab::{ImportOutcome, Lab, LabBuilder};
pub use merge::{ComparisonReport, MergeMode, MergeOutcome};
pub use models::{Conflict, ConflictResolution, PlanDocument, Profile, RealityStatus, SavedArtifact};
pub use store::{MemoryBackend, StorageInfo, Store, StoreEvent};
