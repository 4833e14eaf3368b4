//! Reconciliation of two realities into one merged document.

use log::debug;
use serde::{Deserialize, Serialize};

use super::{detect_conflicts, union};
use crate::{
    extract::{phase_months, total_months},
    models::{
        AssessmentPrep, BehavioralPrep, CompensationRange, Conflict, ConflictKind, ConflictRef,
        ConflictResolution, ConflictSubject, InterviewPrep, PlacementOutcomes, PlanDocument,
        RealityStatus, RequiredSkills, ResolutionChoice, SavedArtifact, TechnicalPrep,
        TimelinePhase,
    },
};

/// How resolutions influence the merged document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeMode {
    /// Resolutions only gate the merged status; field values always follow
    /// the per-field combination rules.
    #[default]
    Observed,
    /// Resolutions additionally select which side's values land in the
    /// fields their conflict is about.
    ApplyChoices,
}

/// A detected conflict annotated with the resolution that was applied to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConflict {
    #[serde(flatten)]
    pub conflict: Conflict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<ResolutionChoice>,
}

impl ResolvedConflict {
    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }
}

/// Result of merging two realities. Produced even when conflicts remain.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeOutcome {
    pub merged: PlanDocument,
    /// Conflicts in detection order, so positions match the detector's
    pub conflicts: Vec<ResolvedConflict>,
    /// Conflicts flagged auto-resolvable, whether or not a resolution was
    /// supplied for them
    pub auto_resolved_count: usize,
}

impl MergeOutcome {
    /// Conflicts that still need a human decision: not auto-resolvable and
    /// not referenced by any resolution.
    pub fn unresolved(&self) -> Vec<(usize, &ResolvedConflict)> {
        self.conflicts
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.conflict.auto_resolvable && !c.is_resolved())
            .collect()
    }

    /// Whether the caller can accept the merge without asking again.
    pub fn is_complete(&self) -> bool {
        self.unresolved().is_empty()
    }
}

/// Merges two saved realities with the default [`MergeMode::Observed`].
pub fn merge(
    a: &SavedArtifact,
    b: &SavedArtifact,
    resolutions: &[ConflictResolution],
) -> MergeOutcome {
    merge_with_mode(a, b, resolutions, MergeMode::Observed)
}

/// Merges two saved realities.
pub fn merge_with_mode(
    a: &SavedArtifact,
    b: &SavedArtifact,
    resolutions: &[ConflictResolution],
    mode: MergeMode,
) -> MergeOutcome {
    merge_documents(&a.document, &b.document, resolutions, mode)
}

/// Merges two documents.
///
/// Conflicts are detected afresh here; index-based resolutions must have
/// been collected against a detection of these same two documents.
pub fn merge_documents(
    a: &PlanDocument,
    b: &PlanDocument,
    resolutions: &[ConflictResolution],
    mode: MergeMode,
) -> MergeOutcome {
    let conflicts = detect_conflicts(a, b);
    let choices: Vec<Option<ResolutionChoice>> = conflicts
        .iter()
        .enumerate()
        .map(|(index, conflict)| find_choice(resolutions, index, conflict))
        .collect();

    let mut merged = combine_fields(a, b);
    merged.status = observed_status(a, b, &conflicts, &choices);

    if mode == MergeMode::ApplyChoices {
        apply_choices(&mut merged, a, b, &conflicts, &choices);
    }

    let auto_resolved_count = conflicts.iter().filter(|c| c.auto_resolvable).count();
    debug!(
        "Merged '{}' with {} conflict(s), {} auto-resolvable, status {}",
        merged.name,
        conflicts.len(),
        auto_resolved_count,
        merged.status.as_str()
    );

    MergeOutcome {
        merged,
        conflicts: conflicts
            .into_iter()
            .zip(choices)
            .map(|(conflict, resolution)| ResolvedConflict {
                conflict,
                resolution,
            })
            .collect(),
        auto_resolved_count,
    }
}

/// Id references win over positional ones.
fn find_choice(
    resolutions: &[ConflictResolution],
    index: usize,
    conflict: &Conflict,
) -> Option<ResolutionChoice> {
    resolutions
        .iter()
        .find(|r| matches!(&r.target, ConflictRef::Id(id) if *id == conflict.id))
        .or_else(|| {
            resolutions
                .iter()
                .find(|r| r.target == ConflictRef::Index(index))
        })
        .map(|r| r.choice)
}

fn has_unresolved_time_conflict(
    conflicts: &[Conflict],
    choices: &[Option<ResolutionChoice>],
) -> bool {
    conflicts
        .iter()
        .zip(choices)
        .any(|(c, choice)| c.kind == ConflictKind::Time && choice.is_none())
}

/// Breach when a time conflict is left unresolved, or when either source is
/// in breach and no goal-type conflict was resolved (whatever the choice).
fn observed_status(
    a: &PlanDocument,
    b: &PlanDocument,
    conflicts: &[Conflict],
    choices: &[Option<ResolutionChoice>],
) -> RealityStatus {
    let source_breach =
        a.status == RealityStatus::BreachDetected || b.status == RealityStatus::BreachDetected;
    let goal_resolved = conflicts
        .iter()
        .zip(choices)
        .any(|(c, choice)| c.kind == ConflictKind::Goal && choice.is_some());

    if has_unresolved_time_conflict(conflicts, choices) || (source_breach && !goal_resolved) {
        RealityStatus::BreachDetected
    } else {
        RealityStatus::Stable
    }
}

/// Later conflicts override earlier ones when both pick a timeline.
fn apply_choices(
    merged: &mut PlanDocument,
    a: &PlanDocument,
    b: &PlanDocument,
    conflicts: &[Conflict],
    choices: &[Option<ResolutionChoice>],
) {
    for (conflict, choice) in conflicts.iter().zip(choices) {
        let Some(choice) = *choice else {
            continue;
        };
        match (conflict.subject, choice) {
            (ConflictSubject::TotalDuration | ConflictSubject::PhaseCount, ResolutionChoice::A) => {
                merged.timeline_phases = a.timeline_phases.clone();
            }
            (ConflictSubject::TotalDuration | ConflictSubject::PhaseCount, ResolutionChoice::B) => {
                merged.timeline_phases = b.timeline_phases.clone();
            }
            (ConflictSubject::TotalDuration, ResolutionChoice::Suggested) => {
                let shorter = if total_months(&b.timeline_phases) < total_months(&a.timeline_phases)
                {
                    b
                } else {
                    a
                };
                merged.timeline_phases = shorter.timeline_phases.clone();
            }
            (ConflictSubject::PhaseCount, ResolutionChoice::Suggested) => {}
            (ConflictSubject::Status, ResolutionChoice::A) => merged.status = a.status,
            (ConflictSubject::Status, ResolutionChoice::B) => merged.status = b.status,
            (ConflictSubject::Status, ResolutionChoice::Suggested) => {
                merged.status = RealityStatus::Stable;
            }
            (ConflictSubject::DivergentRisks, ResolutionChoice::A) => {
                merged.glitches = a.glitches.clone();
            }
            (ConflictSubject::DivergentRisks, ResolutionChoice::B) => {
                merged.glitches = b.glitches.clone();
            }
            (ConflictSubject::DivergentRisks, ResolutionChoice::Suggested) => {}
        }
    }

    if has_unresolved_time_conflict(conflicts, choices) {
        merged.status = RealityStatus::BreachDetected;
    }
}

/// Field-by-field combination, independent of any conflict or resolution.
fn combine_fields(a: &PlanDocument, b: &PlanDocument) -> PlanDocument {
    PlanDocument {
        name: format!("{} + {}", a.name, b.name),
        sdg_alignment: union(&a.sdg_alignment, &b.sdg_alignment),
        required_skills: RequiredSkills {
            technical: concat(&a.required_skills.technical, &b.required_skills.technical),
            soft: concat(&a.required_skills.soft, &b.required_skills.soft),
            certifications: concat(
                &a.required_skills.certifications,
                &b.required_skills.certifications,
            ),
        },
        learning_resources: concat(&a.learning_resources, &b.learning_resources),
        interview_prep: combine_interview_prep(&a.interview_prep, &b.interview_prep),
        timeline_phases: merge_timelines(&a.timeline_phases, &b.timeline_phases),
        placement_outcomes: combine_placement(&a.placement_outcomes, &b.placement_outcomes),
        glitches: union(&a.glitches, &b.glitches),
        status: RealityStatus::Stable,
    }
}

fn concat<T: Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().chain(b).cloned().collect()
}

fn combine_interview_prep(a: &InterviewPrep, b: &InterviewPrep) -> InterviewPrep {
    InterviewPrep {
        technical: TechnicalPrep {
            topics: union(&a.technical.topics, &b.technical.topics),
            practice_problems: a
                .technical
                .practice_problems
                .saturating_add(b.technical.practice_problems),
            mock_interviews: a
                .technical
                .mock_interviews
                .saturating_add(b.technical.mock_interviews),
            target_score: a.technical.target_score.max(b.technical.target_score),
        },
        behavioral: BehavioralPrep {
            scenarios: union(&a.behavioral.scenarios, &b.behavioral.scenarios),
            star_stories: a
                .behavioral
                .star_stories
                .saturating_add(b.behavioral.star_stories),
            practice_hours: a
                .behavioral
                .practice_hours
                .saturating_add(b.behavioral.practice_hours),
        },
        assessments: AssessmentPrep {
            platforms: union(&a.assessments.platforms, &b.assessments.platforms),
            target_score: a.assessments.target_score.max(b.assessments.target_score),
            completed: a
                .assessments
                .completed
                .saturating_add(b.assessments.completed),
        },
    }
}

/// Compensation range widens to cover both; currency and role type come
/// from `a` with no conversion. Success probability is the unrounded mean.
fn combine_placement(a: &PlacementOutcomes, b: &PlacementOutcomes) -> PlacementOutcomes {
    PlacementOutcomes {
        target_companies: union(&a.target_companies, &b.target_companies),
        expected_ctc: CompensationRange {
            min: a.expected_ctc.min.min(b.expected_ctc.min),
            max: a.expected_ctc.max.max(b.expected_ctc.max),
            currency: a.expected_ctc.currency.clone(),
        },
        role_type: a.role_type,
        success_probability: (a.success_probability + b.success_probability) / 2.0,
        alternative_paths: union(&a.alternative_paths, &b.alternative_paths),
    }
}

/// Pairs phases by position up to the longer list's length.
///
/// Paired phases take the longer list's phase name, join actions as
/// `"<a> + <b>"`, keep the duration with fewer months (`a`'s on a tie), the
/// larger weekly hours, and the union of milestones and dependencies.
/// Unpaired phases of the longer list pass through unchanged.
pub fn merge_timelines(a: &[TimelinePhase], b: &[TimelinePhase]) -> Vec<TimelinePhase> {
    let a_is_longer = a.len() >= b.len();
    (0..a.len().max(b.len()))
        .filter_map(|i| match (a.get(i), b.get(i)) {
            (Some(pa), Some(pb)) => Some(combine_phases(pa, pb, a_is_longer)),
            (Some(only), None) | (None, Some(only)) => Some(only.clone()),
            (None, None) => None,
        })
        .collect()
}

fn combine_phases(pa: &TimelinePhase, pb: &TimelinePhase, a_is_longer: bool) -> TimelinePhase {
    let phase = if a_is_longer { &pa.phase } else { &pb.phase };
    let duration = if phase_months(pb) < phase_months(pa) {
        &pb.duration
    } else {
        &pa.duration
    };

    TimelinePhase {
        phase: phase.clone(),
        action: format!("{} + {}", pa.action, pb.action),
        duration: duration.clone(),
        weekly_hours: pa.weekly_hours.max(pb.weekly_hours),
        milestones: union(&pa.milestones, &pb.milestones),
        dependencies: union(&pa.dependencies, &pb.dependencies),
    }
}
