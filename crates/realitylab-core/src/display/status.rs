//! Status and confirmation message types for operation feedback.

use std::fmt;

/// How an operation turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    /// Completed, but not the way the caller asked for
    Warning,
    Failure,
}

impl StatusLevel {
    fn label(self) -> &'static str {
        match self {
            StatusLevel::Success => "Success:",
            StatusLevel::Warning => "Warning:",
            StatusLevel::Failure => "Error:",
        }
    }
}

/// One-line confirmation for operations that have nothing richer to show,
/// such as clearing storage or importing output that held no plan.
pub struct OperationStatus {
    pub message: String,
    pub level: StatusLevel,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Success,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Warning,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        self.level == StatusLevel::Success
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.level.label(), self.message)
    }
}
