//! Display implementations for domain models.
//!
//! Every implementation produces markdown: a heading, a short `- Key: value`
//! metadata block, then one subsection per non-empty part of the model.
//! Empty sections are skipped rather than printed as "none".

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    merge::ResolvedConflict,
    models::{
        Conflict, Glitch, PlanDocument, Profile, RealityStatus, SavedArtifact, Severity,
        TimelinePhase,
    },
};

impl fmt::Display for RealityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Glitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "**{}** ({}): {}",
            self.kind.as_str(),
            self.severity,
            self.description
        )?;
        if let Some(resolution) = &self.resolution {
            write!(f, " *Fix: {resolution}*")?;
        }
        Ok(())
    }
}

impl fmt::Display for TimelinePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.phase, self.duration)?;
        writeln!(f)?;
        writeln!(f, "{}", self.action)?;
        if self.weekly_hours > 0 {
            writeln!(f)?;
            writeln!(f, "- Weekly hours: {}", self.weekly_hours)?;
        }
        if !self.milestones.is_empty() {
            writeln!(f, "- Milestones: {}", self.milestones.join(", "))?;
        }
        if !self.dependencies.is_empty() {
            writeln!(f, "- Depends on: {}", self.dependencies.join(", "))?;
        }
        writeln!(f)
    }
}

impl PlanDocument {
    fn fmt_skills(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let skills = &self.required_skills;
        if skills.technical.is_empty() && skills.soft.is_empty() && skills.certifications.is_empty()
        {
            return Ok(());
        }

        writeln!(f, "## Required Skills")?;
        writeln!(f)?;
        for skill in &skills.technical {
            writeln!(
                f,
                "- {} ({}): level {} → {}",
                skill.skill,
                skill.priority.as_str(),
                skill.current_level,
                skill.target_level
            )?;
        }
        for skill in &skills.soft {
            writeln!(f, "- {} (soft, {:?})", skill.skill, skill.importance)?;
        }
        for cert in &skills.certifications {
            writeln!(
                f,
                "- Certification: {} ({}, by {})",
                cert.name,
                cert.priority.as_str(),
                cert.deadline
            )?;
        }
        writeln!(f)
    }

    fn fmt_placement(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let placement = &self.placement_outcomes;
        if placement.target_companies.is_empty() && placement.success_probability == 0.0 {
            return Ok(());
        }

        writeln!(f, "## Placement Outcomes")?;
        writeln!(f)?;
        writeln!(f, "- Role type: {}", placement.role_type.as_str())?;
        if !placement.target_companies.is_empty() {
            writeln!(f, "- Target companies: {}", placement.target_companies.join(", "))?;
        }
        let ctc = &placement.expected_ctc;
        if ctc.max > 0.0 {
            writeln!(f, "- Expected CTC: {}-{} {}", ctc.min, ctc.max, ctc.currency)?;
        }
        writeln!(
            f,
            "- Success probability: {:.0}%",
            placement.success_probability
        )?;
        if !placement.alternative_paths.is_empty() {
            writeln!(f, "- Alternatives: {}", placement.alternative_paths.join(", "))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for PlanDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(
            f,
            "- Total duration: {} months",
            crate::extract::total_months(&self.timeline_phases)
        )?;
        if !self.sdg_alignment.is_empty() {
            writeln!(f, "- SDGs: {}", self.sdg_alignment.join(", "))?;
        }
        writeln!(f)?;

        if self.timeline_phases.is_empty() {
            writeln!(f, "No timeline phases in this reality.")?;
            writeln!(f)?;
        } else {
            writeln!(f, "## Timeline")?;
            writeln!(f)?;
            for phase in &self.timeline_phases {
                write!(f, "{phase}")?;
            }
        }

        self.fmt_skills(f)?;

        if !self.learning_resources.is_empty() {
            writeln!(f, "## Learning Resources")?;
            writeln!(f)?;
            for resource in &self.learning_resources {
                write!(f, "- {} ({:?}", resource.title, resource.kind)?;
                if !resource.platform.is_empty() {
                    write!(f, ", {}", resource.platform)?;
                }
                writeln!(f, ") [{}]", resource.status.as_str())?;
            }
            writeln!(f)?;
        }

        self.fmt_placement(f)?;

        if !self.glitches.is_empty() {
            writeln!(f, "## Glitches")?;
            writeln!(f)?;
            for glitch in &self.glitches {
                writeln!(f, "- {glitch}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for SavedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        if let Some(parent) = &self.parent_id {
            writeln!(f, "- Forked from: {parent}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        if !self.prompt.is_empty() {
            writeln!(f, "- Prompt: {}", self.prompt)?;
        }
        writeln!(f)?;

        // The document heading is demoted one level under the artifact's
        let document = self.document.to_string();
        for line in document.lines().skip(2) {
            if line.starts_with('#') {
                writeln!(f, "#{line}")?;
            } else {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.is_empty() {
            "Unnamed profile"
        } else {
            self.name.as_str()
        };
        writeln!(f, "# {name}")?;
        writeln!(f)?;
        if !self.email.is_empty() {
            writeln!(f, "- Email: {}", self.email)?;
        }
        let edu = &self.education;
        if !edu.degree.is_empty() {
            writeln!(f, "- Education: {} {}, {}", edu.degree, edu.major, edu.university)?;
        }
        if edu.cgpa > 0.0 {
            writeln!(f, "- CGPA: {}", edu.cgpa)?;
        }
        writeln!(f)?;

        if !self.skills.technical.is_empty() || !self.skills.soft.is_empty() {
            writeln!(f, "## Skills")?;
            writeln!(f)?;
            for skill in &self.skills.technical {
                writeln!(f, "- {} ({})", skill.name, skill.proficiency)?;
            }
            for skill in &self.skills.soft {
                writeln!(f, "- {} (soft, {})", skill.name, skill.level)?;
            }
            writeln!(f)?;
        }

        if !self.projects.is_empty() {
            writeln!(f, "## Projects")?;
            writeln!(f)?;
            for project in &self.projects {
                writeln!(f, "- **{}**: {}", project.title, project.description)?;
            }
            writeln!(f)?;
        }

        if !self.internships.is_empty() {
            writeln!(f, "## Internships")?;
            writeln!(f)?;
            for internship in &self.internships {
                writeln!(
                    f,
                    "- {} at {} ({})",
                    internship.role, internship.company, internship.duration
                )?;
            }
            writeln!(f)?;
        }

        if !self.target_roles.is_empty() {
            writeln!(f, "## Target Roles")?;
            writeln!(f)?;
            for role in &self.target_roles {
                writeln!(
                    f,
                    "- {} ({} priority, {}% ready)",
                    role.role, role.priority, role.current_readiness
                )?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} [{}] `{}`", self.description, self.kind.as_str(), self.id)?;
        writeln!(f)?;
        writeln!(f, "- A: {}", self.option_a)?;
        writeln!(f, "- B: {}", self.option_b)?;
        if let Some(suggested) = &self.suggested {
            writeln!(f, "- Suggested: {suggested}")?;
        }
        if self.auto_resolvable {
            writeln!(f, "- Auto-resolvable")?;
        }
        Ok(())
    }
}

impl fmt::Display for ResolvedConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.conflict)?;
        match self.resolution {
            Some(choice) => writeln!(f, "- Resolved: {}", choice.as_str()),
            None if self.conflict.auto_resolvable => Ok(()),
            None => writeln!(f, "- **Needs a choice**"),
        }
    }
}
