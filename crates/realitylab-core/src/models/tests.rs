#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;
    use serde_json::json;

    use crate::models::{
        Conflict, ConflictId, ConflictKind, ConflictRef, ConflictResolution, ConflictSubject,
        ConflictValue, Glitch, GlitchKind, PlanDocument, Profile, RealityStatus,
        ResolutionChoice, SavedArtifact, Severity, TimelinePhase,
    };

    #[test]
    fn test_status_accepts_generator_spellings() {
        for (raw, expected) in [
            ("\"STABLE\"", RealityStatus::Stable),
            ("\"Stable\"", RealityStatus::Stable),
            ("\"BREACH DETECTED\"", RealityStatus::BreachDetected),
            ("\"BREACH_DETECTED\"", RealityStatus::BreachDetected),
            ("\"Critical\"", RealityStatus::BreachDetected),
        ] {
            let status: RealityStatus = serde_json::from_str(raw).expect("status should parse");
            assert_eq!(status, expected, "input {raw}");
        }

        assert_eq!(
            serde_json::to_string(&RealityStatus::BreachDetected).unwrap(),
            "\"BREACH_DETECTED\""
        );
        assert_eq!(
            "breach detected".parse::<RealityStatus>(),
            Ok(RealityStatus::BreachDetected)
        );
        assert!("meltdown".parse::<RealityStatus>().is_err());
    }

    #[test]
    fn test_document_parses_legacy_generator_shape() {
        let raw = json!({
            "reality_name": "Pilot",
            "sdg_alignment": ["SDG 4", "SDG 8"],
            "timeline_phases": [
                {"phase": "Foundation", "action": "Ground school", "duration": "6 months"}
            ],
            "glitches": ["Financial Constraint"],
            "status": "Stable"
        });

        let doc: PlanDocument = serde_json::from_value(raw).expect("legacy shape should parse");
        assert_eq!(doc.name, "Pilot");
        assert_eq!(doc.sdg_alignment, vec!["SDG 4", "SDG 8"]);
        assert_eq!(doc.timeline_phases.len(), 1);
        assert_eq!(doc.timeline_phases[0].weekly_hours, 0);
        assert_eq!(
            doc.glitches,
            vec![Glitch::new(
                GlitchKind::Goal,
                "Financial Constraint",
                Severity::Medium
            )]
        );
        assert_eq!(doc.status, RealityStatus::Stable);
    }

    #[test]
    fn test_document_parses_full_shape() {
        let raw = json!({
            "name": "ML Engineer",
            "sdgAlignment": ["SDG 9"],
            "requiredSkills": {
                "technical": [{
                    "skill": "PyTorch",
                    "priority": "Critical",
                    "currentLevel": 20,
                    "targetLevel": 80,
                    "learningPath": ["Tensors", "Autograd"]
                }],
                "soft": [{"skill": "Writing", "importance": "High", "developmentActivities": []}],
                "certifications": [{"name": "TF Dev", "deadline": "Q3", "cost": 100.0, "priority": "Must-have"}]
            },
            "learningResources": [{
                "title": "Deep Learning",
                "type": "Book",
                "platform": "MIT Press",
                "duration": "3 months",
                "cost": 0,
                "prerequisite": [],
                "status": "In Progress"
            }],
            "timelinePhases": [{
                "phase": "Build",
                "action": "Ship a model",
                "duration": "4 months",
                "weeklyHours": 15,
                "milestones": ["Demo"],
                "dependencies": []
            }],
            "placementOutcomes": {
                "targetCompanies": ["Acme"],
                "expectedCTC": {"min": 10.0, "max": 20.0, "currency": "INR"},
                "roleType": "Startup",
                "successProbability": 62.5,
                "alternativePaths": []
            },
            "glitches": [{"type": "Skill", "description": "Math gap", "severity": "High"}],
            "status": "BREACH_DETECTED"
        });

        let doc: PlanDocument = serde_json::from_value(raw).expect("full shape should parse");
        assert_eq!(doc.required_skills.technical[0].target_level, 80);
        assert_eq!(doc.learning_resources[0].url, None);
        assert_eq!(doc.timeline_phases[0].weekly_hours, 15);
        assert_eq!(doc.placement_outcomes.expected_ctc.currency, "INR");
        assert_eq!(doc.glitches[0].severity, Severity::High);
        assert_eq!(doc.status, RealityStatus::BreachDetected);
        assert!(doc.validate().is_ok());

        // Round trip keeps camelCase keys
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value.get("timelinePhases").is_some());
        assert!(value["placementOutcomes"].get("expectedCTC").is_some());
    }

    #[test]
    fn test_validate_rejects_empty_timeline() {
        let doc = PlanDocument::new("Nothing planned");
        let err = doc.validate().expect_err("empty timeline must be rejected");
        assert!(err.to_string().contains("timelinePhases"));

        let doc = doc.with_phase(TimelinePhase::new("Start", "Begin", "1 month"));
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_glitch_value_equality() {
        let a = Glitch::new(GlitchKind::Time, "Too long", Severity::High);
        let mut b = a.clone();
        assert_eq!(a, b);
        b.resolution = Some("Cut scope".to_string());
        assert_ne!(a, b);
    }

    #[test]
    fn test_conflict_id_is_content_derived() {
        let first = Conflict::new(
            ConflictSubject::Status,
            "Realities have different stability statuses",
            "STABLE",
            "BREACH_DETECTED",
            true,
            Some(ConflictValue::from("STABLE")),
        );
        let second = Conflict::new(
            ConflictSubject::Status,
            "Realities have different stability statuses",
            "BREACH_DETECTED",
            "STABLE",
            true,
            None,
        );
        assert_eq!(first.id, second.id);
        assert_eq!(first.kind, ConflictKind::Goal);
        assert!(first.id.as_str().starts_with("cf-"));
        assert_eq!(first.id.as_str().len(), 15);

        let other = ConflictId::from_content(ConflictKind::Phase, &first.description);
        assert_ne!(first.id, other);
    }

    #[test]
    fn test_conflict_serializes_type_tag_and_values() {
        let conflict = Conflict::new(
            ConflictSubject::TotalDuration,
            "Combined timeline is 40 months",
            "25 months (A)",
            "15 months (B)",
            false,
            Some(ConflictValue::Number(15)),
        );
        let value = serde_json::to_value(&conflict).unwrap();
        assert_eq!(value["type"], "time");
        assert_eq!(value["optionA"], "25 months (A)");
        assert_eq!(value["suggested"], 15);
        assert_eq!(value["autoResolvable"], false);
    }

    #[test]
    fn test_resolution_parsing() {
        let by_index: ConflictResolution = "2=B".parse().unwrap();
        assert_eq!(by_index, ConflictResolution::at(2, ResolutionChoice::B));

        let by_id: ConflictResolution = "cf-00aa11bb22cc=suggested".parse().unwrap();
        assert_eq!(by_id.choice, ResolutionChoice::Suggested);
        assert!(matches!(by_id.target, ConflictRef::Id(_)));

        assert!("2".parse::<ConflictResolution>().is_err());
        assert!("x=A".parse::<ConflictResolution>().is_err());
        assert!("0=C".parse::<ConflictResolution>().is_err());
    }

    #[test]
    fn test_saved_artifact_accepts_legacy_data_key() {
        let artifact = SavedArtifact {
            id: "reality_1".to_string(),
            name: "Pilot".to_string(),
            parent_id: None,
            created_at: Timestamp::from_second(1640995200).unwrap(),
            document: PlanDocument::new("Pilot"),
            profile: Profile::default(),
            prompt: "I want to fly".to_string(),
        };

        let mut value = serde_json::to_value(&artifact).unwrap();
        assert!(value.get("parentId").is_some());
        let document = value.as_object_mut().unwrap().remove("document").unwrap();
        value.as_object_mut().unwrap().insert("data".to_string(), document);

        let parsed: SavedArtifact = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, artifact);
        assert!(!parsed.is_fork());
    }
}
