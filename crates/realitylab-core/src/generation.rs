//! Boundary with the external plan generator.
//!
//! The generator is handed a prompt plus a short profile summary and answers
//! with free text that usually contains one JSON plan. Nothing here calls a
//! model; this module shapes the request and makes sense of the reply.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::models::{PlanDocument, Profile};

/// What gets sent to the generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub prompt: String,
    pub profile_context: String,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, profile: &Profile) -> Self {
        Self {
            prompt: prompt.into(),
            profile_context: profile_context(profile),
        }
    }
}

/// What came back from the generator.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutput {
    /// A well-formed plan
    Plan(PlanDocument),
    /// Text that could not be turned into a plan, passed through untouched
    Opaque { text: String, reason: String },
}

impl GenerationOutput {
    pub fn into_plan(self) -> Option<PlanDocument> {
        match self {
            GenerationOutput::Plan(doc) => Some(doc),
            GenerationOutput::Opaque { .. } => None,
        }
    }
}

/// Interprets generator output. Never fails.
///
/// The first balanced `{...}` substring is parsed as a [`PlanDocument`];
/// when there is none, it does not parse, or the plan has no timeline, the
/// whole text comes back as [`GenerationOutput::Opaque`].
pub fn parse_generation_output(text: &str) -> GenerationOutput {
    let opaque = |reason: String| {
        warn!("Generator output treated as opaque text: {reason}");
        GenerationOutput::Opaque {
            text: text.to_string(),
            reason,
        }
    };

    let Some(json) = extract_json_object(text) else {
        return opaque("no JSON object found".to_string());
    };

    match serde_json::from_str::<PlanDocument>(json) {
        Ok(doc) => match doc.validate() {
            Ok(()) => GenerationOutput::Plan(doc),
            Err(e) => opaque(e.to_string()),
        },
        Err(e) => opaque(format!("JSON did not match the plan shape: {e}")),
    }
}

/// First balanced brace-delimited substring of `text`.
///
/// Braces inside JSON string literals (including escaped quotes) are not
/// counted. Returns `None` if no opening brace is ever closed.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Compact plain-text summary of a profile for the generator prompt.
pub fn profile_context(profile: &Profile) -> String {
    let mut lines = Vec::new();

    if !profile.name.is_empty() {
        lines.push(format!("Name: {}", profile.name));
    }
    let edu = &profile.education;
    if !edu.degree.is_empty() || !edu.major.is_empty() {
        let mut line = format!("Education: {} {}", edu.degree, edu.major)
            .trim_end()
            .to_string();
        if !edu.university.is_empty() {
            line.push_str(&format!(", {}", edu.university));
        }
        if edu.cgpa > 0.0 {
            line.push_str(&format!(" (CGPA {})", edu.cgpa));
        }
        lines.push(line);
    }
    if !profile.skills.technical.is_empty() {
        let skills: Vec<String> = profile
            .skills
            .technical
            .iter()
            .map(|s| format!("{} ({})", s.name, s.proficiency))
            .collect();
        lines.push(format!("Technical skills: {}", skills.join(", ")));
    }
    if !profile.skills.soft.is_empty() {
        let skills: Vec<&str> = profile.skills.soft.iter().map(|s| s.name.as_str()).collect();
        lines.push(format!("Soft skills: {}", skills.join(", ")));
    }
    if !profile.projects.is_empty() {
        let projects: Vec<&str> = profile.projects.iter().map(|p| p.title.as_str()).collect();
        lines.push(format!("Projects: {}", projects.join(", ")));
    }
    if !profile.internships.is_empty() {
        let internships: Vec<String> = profile
            .internships
            .iter()
            .map(|i| format!("{} at {}", i.role, i.company))
            .collect();
        lines.push(format!("Internships: {}", internships.join(", ")));
    }
    if !profile.target_roles.is_empty() {
        let roles: Vec<String> = profile
            .target_roles
            .iter()
            .map(|r| format!("{} ({} priority, {}% ready)", r.role, r.priority, r.current_readiness))
            .collect();
        lines.push(format!("Target roles: {}", roles.join(", ")));
    }

    if lines.is_empty() {
        "No profile provided.".to_string()
    } else {
        lines.join("\n")
    }
}
