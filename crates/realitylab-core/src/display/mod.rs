//! Markdown display for realities, reports, and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the newtype wrappers here add list, tree, and result framing. Everything
//! renders as markdown so the CLI can pass it straight to its terminal
//! renderer.
//!
//! ## Module Organization
//!
//! - [`collections`]: Lists and lineage ([`Realities`], [`RealityTree`], [`Ancestry`])
//! - [`results`]: Save/delete results plus comparison, merge, and storage reports
//! - [`status`]: One-line confirmations ([`OperationStatus`])
//! - [`datetime`]: Local timestamp formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use realitylab_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Profile saved");
//! assert_eq!(status.to_string(), "Success: Profile saved\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Ancestry, Realities, RealityTree};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult};
pub use status::{OperationStatus, StatusLevel};
