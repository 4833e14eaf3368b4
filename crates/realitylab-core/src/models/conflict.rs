//! Merge-time conflicts and user resolutions.
//!
//! Conflicts are transient: they are recomputed on every detection call and
//! never persisted. A resolution points at a conflict either by its
//! content-derived [`ConflictId`] or by its position in the list returned
//! from one detection call. Positions are only meaningful against that same
//! list; re-detecting after either document changes may shift them.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Type tag of a conflict.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    Time,
    Skill,
    Goal,
    Phase,
}

impl ConflictKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictKind::Time => "time",
            ConflictKind::Skill => "skill",
            ConflictKind::Goal => "goal",
            ConflictKind::Phase => "phase",
        }
    }
}

/// What a detected conflict is about. Each detection rule has exactly one
/// subject, which fixes the conflict's [`ConflictKind`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ConflictSubject {
    /// Combined timeline is too long
    TotalDuration,
    /// Stability statuses differ
    Status,
    /// Phase counts differ by more than one
    PhaseCount,
    /// Each side carries risks the other lacks
    DivergentRisks,
}

impl ConflictSubject {
    pub fn kind(&self) -> ConflictKind {
        match self {
            ConflictSubject::TotalDuration => ConflictKind::Time,
            ConflictSubject::Status | ConflictSubject::DivergentRisks => ConflictKind::Goal,
            ConflictSubject::PhaseCount => ConflictKind::Phase,
        }
    }
}

/// The closed set of value shapes a conflict option can take.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ConflictValue {
    Number(u32),
    Text(String),
    List(Vec<String>),
}

impl fmt::Display for ConflictValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictValue::Number(n) => write!(f, "{n}"),
            ConflictValue::Text(s) => write!(f, "{s}"),
            ConflictValue::List(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

impl From<u32> for ConflictValue {
    fn from(n: u32) -> Self {
        ConflictValue::Number(n)
    }
}

impl From<String> for ConflictValue {
    fn from(s: String) -> Self {
        ConflictValue::Text(s)
    }
}

impl From<&str> for ConflictValue {
    fn from(s: &str) -> Self {
        ConflictValue::Text(s.to_string())
    }
}

/// Stable, content-derived conflict identifier.
///
/// `cf-` followed by the first 12 hex digits of SHA-256 over the type tag and
/// description, so the same conflict between the same two documents always
/// gets the same id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ConflictId(String);

impl ConflictId {
    const PREFIX: &'static str = "cf-";

    pub fn from_content(kind: ConflictKind, description: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(kind.as_str().as_bytes());
        hasher.update(b"\n");
        hasher.update(description.as_bytes());
        let digest = hex::encode(hasher.finalize());
        Self(format!("{}{}", Self::PREFIX, &digest[..12]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConflictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ConflictId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex_part = s
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| format!("Conflict id must start with '{}': {s}", Self::PREFIX))?;
        if hex_part.is_empty() || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid conflict id: {s}"));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }
}

/// A difference between two documents found by the detector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub id: ConflictId,
    #[serde(rename = "type")]
    pub kind: ConflictKind,
    pub subject: ConflictSubject,
    pub description: String,
    pub option_a: ConflictValue,
    pub option_b: ConflictValue,
    /// A default policy exists; no human choice is needed
    pub auto_resolvable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested: Option<ConflictValue>,
}

impl Conflict {
    pub fn new(
        subject: ConflictSubject,
        description: impl Into<String>,
        option_a: impl Into<ConflictValue>,
        option_b: impl Into<ConflictValue>,
        auto_resolvable: bool,
        suggested: Option<ConflictValue>,
    ) -> Self {
        let kind = subject.kind();
        let description = description.into();
        Self {
            id: ConflictId::from_content(kind, &description),
            kind,
            subject,
            description,
            option_a: option_a.into(),
            option_b: option_b.into(),
            auto_resolvable,
            suggested,
        }
    }
}

/// Which side the user picked for a conflict.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ResolutionChoice {
    A,
    B,
    #[serde(rename = "suggested")]
    Suggested,
}

impl ResolutionChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionChoice::A => "A",
            ResolutionChoice::B => "B",
            ResolutionChoice::Suggested => "suggested",
        }
    }
}

impl FromStr for ResolutionChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" => Ok(ResolutionChoice::A),
            "b" => Ok(ResolutionChoice::B),
            "suggested" | "s" => Ok(ResolutionChoice::Suggested),
            _ => Err(format!("Invalid resolution choice: {s} (expected A, B or suggested)")),
        }
    }
}

/// How a resolution points at its conflict.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ConflictRef {
    /// Position in one detection call's output
    Index(usize),
    /// Content-derived id, stable across detection calls
    Id(ConflictId),
}

impl FromStr for ConflictRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.parse::<usize>() {
            Ok(index) => Ok(ConflictRef::Index(index)),
            Err(_) => s.parse::<ConflictId>().map(ConflictRef::Id),
        }
    }
}

/// A user decision for one conflict, consumed once by the reconciler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConflictResolution {
    pub target: ConflictRef,
    pub choice: ResolutionChoice,
}

impl ConflictResolution {
    /// Resolution bound to a position in a detection result.
    pub fn at(index: usize, choice: ResolutionChoice) -> Self {
        Self {
            target: ConflictRef::Index(index),
            choice,
        }
    }

    /// Resolution bound to a conflict id.
    pub fn for_id(id: ConflictId, choice: ResolutionChoice) -> Self {
        Self {
            target: ConflictRef::Id(id),
            choice,
        }
    }
}

/// Parses `REF=CHOICE`, e.g. `0=A` or `cf-1a2b3c4d5e6f=suggested`.
impl FromStr for ConflictResolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (target, choice) = s
            .split_once('=')
            .ok_or_else(|| format!("Expected REF=CHOICE, got: {s}"))?;
        Ok(Self {
            target: target.parse()?,
            choice: choice.parse()?,
        })
    }
}
