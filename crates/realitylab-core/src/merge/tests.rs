use jiff::Timestamp;

use super::*;
use crate::models::{
    CompensationRange, ConflictKind, ConflictResolution, ConflictSubject, ConflictValue, Glitch,
    GlitchKind, PlanDocument, Profile, RealityStatus, ResolutionChoice, RoleType, SavedArtifact,
    Severity, TimelinePhase,
};

/// Document with one phase per duration, all `"<n> months"`.
fn doc(name: &str, months: &[u32]) -> PlanDocument {
    months
        .iter()
        .enumerate()
        .fold(PlanDocument::new(name), |doc, (i, m)| {
            doc.with_phase(TimelinePhase::new(
                format!("Phase {}", i + 1),
                format!("{name} step {}", i + 1),
                format!("{m} months"),
            ))
        })
}

fn artifact(id: &str, document: PlanDocument) -> SavedArtifact {
    SavedArtifact {
        id: id.to_string(),
        name: document.name.clone(),
        parent_id: None,
        created_at: Timestamp::from_second(1_700_000_000).unwrap(),
        document,
        profile: Profile::default(),
        prompt: String::new(),
    }
}

fn glitch(description: &str) -> Glitch {
    Glitch::new(GlitchKind::Time, description, Severity::Medium)
}

#[test]
fn test_aligned_realities_have_no_conflicts() {
    let a = doc("Startup", &[6, 8, 6]);
    let b = doc("Corporate", &[3, 4, 3]);

    assert!(detect_conflicts(&a, &b).is_empty());

    let outcome = merge(&artifact("a", a), &artifact("b", b), &[]);
    assert_eq!(outcome.merged.status, RealityStatus::Stable);
    assert_eq!(outcome.auto_resolved_count, 0);
    assert!(outcome.conflicts.is_empty());
    assert!(outcome.is_complete());
}

#[test]
fn test_long_combined_timeline_is_a_time_conflict() {
    let a = doc("MBA", &[10, 10, 5]);
    let b = doc("Pilot", &[5, 5, 5]);

    let conflicts = detect_conflicts(&a, &b);
    assert_eq!(conflicts.len(), 1);
    let time = &conflicts[0];
    assert_eq!(time.kind, ConflictKind::Time);
    assert!(!time.auto_resolvable);
    assert_eq!(time.suggested, Some(ConflictValue::Number(15)));
    assert_eq!(time.option_a, ConflictValue::from("25 months (MBA)"));
    assert_eq!(time.option_b, ConflictValue::from("15 months (Pilot)"));
    assert!(time.description.contains("40 months"));

    let outcome = merge(&artifact("a", a), &artifact("b", b), &[]);
    assert_eq!(outcome.merged.status, RealityStatus::BreachDetected);
    let unresolved = outcome.unresolved();
    assert_eq!(unresolved.len(), 1);
    assert_eq!(unresolved[0].0, 0);
}

#[test]
fn test_resolving_time_conflict_clears_breach() {
    let a = artifact("a", doc("MBA", &[10, 10, 5]));
    let b = artifact("b", doc("Pilot", &[5, 5, 5]));

    let outcome = merge(&a, &b, &[ConflictResolution::at(0, ResolutionChoice::A)]);
    assert_eq!(outcome.merged.status, RealityStatus::Stable);
    assert_eq!(outcome.conflicts[0].resolution, Some(ResolutionChoice::A));
    assert!(outcome.is_complete());
}

#[test]
fn test_status_mismatch_propagates_breach_without_goal_resolution() {
    let a = doc("Stable path", &[4, 4, 4]);
    let b = doc("Risky path", &[4, 4, 4]).with_status(RealityStatus::BreachDetected);

    let conflicts = detect_conflicts(&a, &b);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].kind, ConflictKind::Goal);
    assert_eq!(conflicts[0].subject, ConflictSubject::Status);
    assert!(conflicts[0].auto_resolvable);
    assert_eq!(conflicts[0].suggested, Some(ConflictValue::from("STABLE")));

    let a = artifact("a", a);
    let b = artifact("b", b);
    let outcome = merge(&a, &b, &[]);
    assert_eq!(outcome.merged.status, RealityStatus::BreachDetected);
    assert_eq!(outcome.auto_resolved_count, 1);
    assert!(outcome.is_complete());

    // Any goal resolution suppresses source breach, even choosing the
    // breached side.
    let outcome = merge(&a, &b, &[ConflictResolution::at(0, ResolutionChoice::B)]);
    assert_eq!(outcome.merged.status, RealityStatus::Stable);
}

#[test]
fn test_apply_choices_mode_honours_status_choice() {
    let a = artifact("a", doc("Stable path", &[4, 4, 4]));
    let b = artifact(
        "b",
        doc("Risky path", &[4, 4, 4]).with_status(RealityStatus::BreachDetected),
    );

    let outcome = merge_with_mode(
        &a,
        &b,
        &[ConflictResolution::at(0, ResolutionChoice::B)],
        MergeMode::ApplyChoices,
    );
    assert_eq!(outcome.merged.status, RealityStatus::BreachDetected);

    let outcome = merge_with_mode(
        &a,
        &b,
        &[ConflictResolution::at(0, ResolutionChoice::Suggested)],
        MergeMode::ApplyChoices,
    );
    assert_eq!(outcome.merged.status, RealityStatus::Stable);
}

#[test]
fn test_apply_choices_mode_selects_timeline() {
    let a = artifact("a", doc("MBA", &[10, 10, 5]));
    let b = artifact("b", doc("Pilot", &[5, 5, 5]));

    let observed = merge(&a, &b, &[ConflictResolution::at(0, ResolutionChoice::B)]);
    assert_eq!(observed.merged.timeline_phases.len(), 3);
    assert!(observed.merged.timeline_phases[0].action.contains(" + "));

    let applied = merge_with_mode(
        &a,
        &b,
        &[ConflictResolution::at(0, ResolutionChoice::B)],
        MergeMode::ApplyChoices,
    );
    assert_eq!(applied.merged.timeline_phases, b.document.timeline_phases);
    assert_eq!(applied.merged.status, RealityStatus::Stable);

    let suggested = merge_with_mode(
        &a,
        &b,
        &[ConflictResolution::at(0, ResolutionChoice::Suggested)],
        MergeMode::ApplyChoices,
    );
    assert_eq!(suggested.merged.timeline_phases, b.document.timeline_phases);
}

#[test]
fn test_resolution_by_id_survives_reordering() {
    let a = doc("MBA", &[10, 10, 5]);
    let b = doc("Pilot", &[5, 5, 5]).with_status(RealityStatus::BreachDetected);

    let conflicts = detect_conflicts(&a, &b);
    assert_eq!(conflicts.len(), 2);
    let time_id = conflicts[0].id.clone();

    // Index 1 is the status conflict in this detection; the id still binds to
    // the time conflict.
    let outcome = merge_documents(
        &a,
        &b,
        &[ConflictResolution::for_id(time_id, ResolutionChoice::A)],
        MergeMode::Observed,
    );
    assert_eq!(outcome.conflicts[0].resolution, Some(ResolutionChoice::A));
    assert_eq!(outcome.conflicts[1].resolution, None);
    // Time resolved, but source breach still propagates without a goal
    // resolution.
    assert_eq!(outcome.merged.status, RealityStatus::BreachDetected);
}

#[test]
fn test_index_resolutions_are_bound_to_one_detection() {
    let a = doc("MBA", &[10, 10, 5]);
    let b = doc("Pilot", &[5, 5, 5]).with_status(RealityStatus::BreachDetected);

    // Collected while only the status conflict existed (index 0).
    let before = detect_conflicts(&a, &doc("Pilot", &[1, 1, 1]).with_status(RealityStatus::BreachDetected));
    assert_eq!(before.len(), 1);
    assert_eq!(before[0].subject, ConflictSubject::Status);
    let stale = [ConflictResolution::at(0, ResolutionChoice::Suggested)];

    // After b grew, index 0 is the time conflict.
    let outcome = merge_documents(&a, &b, &stale, MergeMode::Observed);
    assert_eq!(outcome.conflicts[0].conflict.kind, ConflictKind::Time);
    assert_eq!(outcome.conflicts[0].resolution, Some(ResolutionChoice::Suggested));
    assert_eq!(outcome.conflicts[1].resolution, None);
}

#[test]
fn test_phase_count_conflict() {
    let a = doc("Short", &[2]);
    let b = doc("Long", &[2, 2, 2, 2]);

    let conflicts = detect_conflicts(&a, &b);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].kind, ConflictKind::Phase);
    assert!(conflicts[0].auto_resolvable);
    assert_eq!(conflicts[0].suggested, Some(ConflictValue::Number(4)));
    assert_eq!(conflicts[0].option_a, ConflictValue::from("1 phases"));

    // A difference of exactly one is tolerated
    assert!(detect_conflicts(&doc("x", &[1, 1]), &doc("y", &[1, 1, 1])).is_empty());
}

#[test]
fn test_divergent_risks_conflict_and_union() {
    let shared = glitch("Opportunity Cost");
    let a = doc("A", &[3, 3, 3])
        .with_glitch(shared.clone())
        .with_glitch(glitch("Skill Gap"));
    let b = doc("B", &[3, 3, 3])
        .with_glitch(shared.clone())
        .with_glitch(glitch("Location Mismatch"));

    let conflicts = detect_conflicts(&a, &b);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].subject, ConflictSubject::DivergentRisks);
    assert_eq!(conflicts[0].option_a, ConflictValue::from("1 unique risks from A"));
    assert_eq!(conflicts[0].suggested, Some(ConflictValue::from("Combine all risks")));

    let outcome = merge_documents(&a, &b, &[], MergeMode::Observed);
    assert_eq!(outcome.merged.glitches.len(), 3);
    assert_eq!(outcome.merged.glitches[0], shared);

    let only_a = merge_documents(
        &a,
        &b,
        &[ConflictResolution::at(0, ResolutionChoice::A)],
        MergeMode::ApplyChoices,
    );
    assert_eq!(only_a.merged.glitches, a.glitches);
}

#[test]
fn test_one_sided_extra_risk_is_not_a_conflict() {
    let a = doc("A", &[3]).with_glitch(glitch("Skill Gap"));
    let b = doc("B", &[3]);
    assert!(detect_conflicts(&a, &b).is_empty());
}

#[test]
fn test_detection_order_is_fixed() {
    let a = doc("A", &[20, 10, 5])
        .with_glitch(glitch("one"))
        .with_status(RealityStatus::BreachDetected);
    let b = doc("B", &[5]).with_glitch(glitch("two"));

    let kinds: Vec<ConflictSubject> = detect_conflicts(&a, &b)
        .into_iter()
        .map(|c| c.subject)
        .collect();
    assert_eq!(
        kinds,
        vec![
            ConflictSubject::TotalDuration,
            ConflictSubject::Status,
            ConflictSubject::PhaseCount,
            ConflictSubject::DivergentRisks,
        ]
    );

    let outcome = merge_documents(&a, &b, &[], MergeMode::Observed);
    assert_eq!(outcome.auto_resolved_count, 3);
}

#[test]
fn test_crossing_duration_threshold_adds_only_a_time_conflict() {
    let a = doc("A", &[4, 3, 3]);
    let under = doc("B", &[10, 10, 6]);
    let over = doc("B", &[10, 10, 7]);

    let before = detect_conflicts(&a, &under);
    let after = detect_conflicts(&a, &over);
    assert!(before.is_empty());
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].kind, ConflictKind::Time);
}

#[test]
fn test_merge_timelines_pairs_by_position() {
    let mut first = TimelinePhase::new("Foundation", "Learn Rust", "6 months");
    first.weekly_hours = 10;
    first.milestones = vec!["Book".to_string(), "CLI".to_string()];
    let mut second = TimelinePhase::new("Basics", "Learn Go", "4 months");
    second.weekly_hours = 15;
    second.milestones = vec!["CLI".to_string(), "Server".to_string()];
    second.dependencies = vec!["Laptop".to_string()];
    let tail = TimelinePhase::new("Launch", "Apply", "2 months");

    let merged = merge_timelines(&[first.clone()], &[second.clone(), tail.clone()]);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].phase, "Basics");
    assert_eq!(merged[0].action, "Learn Rust + Learn Go");
    assert_eq!(merged[0].duration, "4 months");
    assert_eq!(merged[0].weekly_hours, 15);
    assert_eq!(merged[0].milestones, vec!["Book", "CLI", "Server"]);
    assert_eq!(merged[0].dependencies, vec!["Laptop"]);
    assert_eq!(merged[1], tail);

    // Equal month counts keep the first operand's duration text
    let x = TimelinePhase::new("X", "x", "3 months");
    let y = TimelinePhase::new("Y", "y", "3 mo");
    assert_eq!(merge_timelines(&[x], &[y])[0].duration, "3 months");
}

#[test]
fn test_merged_phase_count_is_the_longer_list() {
    for (left, right) in [(1usize, 4usize), (3, 3), (5, 2), (0, 2)] {
        let a = doc("A", &vec![1; left]);
        let b = doc("B", &vec![1; right]);
        let outcome = merge_documents(&a, &b, &[], MergeMode::Observed);
        assert_eq!(outcome.merged.timeline_phases.len(), left.max(right));
    }
}

#[test]
fn test_scalar_field_combination() {
    let mut a = doc("A", &[3]);
    a.sdg_alignment = vec!["SDG 4".into(), "SDG 8".into()];
    a.interview_prep.technical.practice_problems = 100;
    a.interview_prep.technical.target_score = 70;
    a.interview_prep.behavioral.star_stories = 3;
    a.interview_prep.assessments.completed = 1;
    a.placement_outcomes.expected_ctc = CompensationRange {
        min: 6.0,
        max: 12.0,
        currency: "INR".into(),
    };
    a.placement_outcomes.role_type = RoleType::Startup;
    a.placement_outcomes.success_probability = 60.0;
    a.placement_outcomes.target_companies = vec!["Acme".into()];

    let mut b = doc("B", &[3]);
    b.sdg_alignment = vec!["SDG 8".into(), "SDG 9".into()];
    b.interview_prep.technical.practice_problems = 50;
    b.interview_prep.technical.target_score = 85;
    b.interview_prep.behavioral.star_stories = 2;
    b.interview_prep.assessments.completed = 4;
    b.placement_outcomes.expected_ctc = CompensationRange {
        min: 8.0,
        max: 20.0,
        currency: "USD".into(),
    };
    b.placement_outcomes.role_type = RoleType::Research;
    b.placement_outcomes.success_probability = 75.0;
    b.placement_outcomes.target_companies = vec!["Acme".into(), "Globex".into()];

    let merged = merge_documents(&a, &b, &[], MergeMode::Observed).merged;
    assert_eq!(merged.name, "A + B");
    assert_eq!(merged.sdg_alignment, vec!["SDG 4", "SDG 8", "SDG 9"]);
    assert_eq!(merged.interview_prep.technical.practice_problems, 150);
    assert_eq!(merged.interview_prep.technical.target_score, 85);
    assert_eq!(merged.interview_prep.behavioral.star_stories, 5);
    assert_eq!(merged.interview_prep.assessments.completed, 5);
    assert_eq!(merged.placement_outcomes.expected_ctc.min, 6.0);
    assert_eq!(merged.placement_outcomes.expected_ctc.max, 20.0);
    assert_eq!(merged.placement_outcomes.expected_ctc.currency, "INR");
    assert_eq!(merged.placement_outcomes.role_type, RoleType::Startup);
    assert_eq!(merged.placement_outcomes.success_probability, 67.5);
    assert_eq!(merged.placement_outcomes.target_companies, vec!["Acme", "Globex"]);
}

#[test]
fn test_list_fields_concatenate_without_dedup() {
    let mut a = doc("A", &[3]);
    let mut b = doc("B", &[3]);
    let skill = crate::models::TechnicalSkill {
        skill: "SQL".into(),
        ..Default::default()
    };
    a.required_skills.technical.push(skill.clone());
    b.required_skills.technical.push(skill);

    let merged = merge_documents(&a, &b, &[], MergeMode::Observed).merged;
    assert_eq!(merged.required_skills.technical.len(), 2);
}

#[test]
fn test_stable_sources_under_threshold_merge_stable() {
    let a = doc("A", &[6, 6]);
    let b = doc("B", &[12, 12]);
    let outcome = merge_documents(&a, &b, &[], MergeMode::Observed);
    assert_eq!(outcome.merged.status, RealityStatus::Stable);
}

#[test]
fn test_compare_is_pure_and_symmetric() {
    let a = doc("A", &[6, 6])
        .with_sdgs(["SDG 4", "SDG 8"])
        .with_glitch(glitch("Skill Gap"));
    let b = doc("B", &[3])
        .with_sdgs(["SDG 8", "SDG 13"])
        .with_glitch(glitch("Skill Gap"))
        .with_glitch(glitch("Visa"));

    let first = compare_documents(&a, &b);
    assert_eq!(first, compare_documents(&a, &b));

    assert_eq!(first.sdgs.common, vec!["SDG 8"]);
    assert_eq!(first.sdgs.unique_a, vec!["SDG 4"]);
    assert_eq!(first.sdgs.unique_b, vec!["SDG 13"]);
    assert_eq!(first.glitches.common, vec![glitch("Skill Gap")]);
    assert_eq!(first.glitches.unique_b, vec![glitch("Visa")]);
    assert_eq!(first.total_duration_a, 12);
    assert_eq!(first.total_duration_b, 3);

    let reversed = compare(&artifact("b", b), &artifact("a", a));
    let mut common_ab = first.sdgs.common.clone();
    let mut common_ba = reversed.sdgs.common.clone();
    common_ab.sort();
    common_ba.sort();
    assert_eq!(common_ab, common_ba);
    assert_eq!(reversed.sdgs.unique_a, first.sdgs.unique_b);
    assert_eq!(reversed.sdgs.unique_b, first.sdgs.unique_a);
    assert_eq!(reversed.total_duration_a, first.total_duration_b);
}
