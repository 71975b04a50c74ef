//! End-to-end scenarios for the harmony engine.

use approx::assert_abs_diff_eq;
use harmonizer_rs::lexicon::Concept;
use harmonizer_rs::{
    AnalysisUnit, Axis, Coordinate, HarmonyEngine, LexiconBuilder, LexiconOverride, NodeKind,
    OverrideDocument, Severity, StructuralNode, Trajectory,
};

fn free(tokens: &[&str]) -> Vec<Concept> {
    tokens.iter().map(|t| Concept::free(*t)).collect()
}

#[test]
fn scenario_query_name_over_destructive_body() {
    let engine = HarmonyEngine::with_defaults().unwrap();
    let ice = engine.score_concepts(&free(&["get", "user"]), &free(&["delete"]));

    assert_eq!(ice.intent.coordinate.dominant_axis(), Some(Axis::Wisdom));
    assert_eq!(ice.execution.coordinate.dominant_axis(), Some(Axis::Power));
    assert!(ice.distance >= 1.2, "distance {}", ice.distance);
    assert_eq!(ice.severity, Severity::Critical);

    let report = engine.analyze(&AnalysisUnit::new(
        "get_user",
        vec![StructuralNode::method_call("session", "delete")],
    ));
    assert_eq!(report.trajectory.trajectory().label(), "Wisdom → Power");
    assert_eq!(report.trajectory.from, Some(Axis::Wisdom));
    assert_eq!(report.trajectory.to, Some(Axis::Power));
    assert!(report.trajectory.interpretation.contains("body mutates or destroys state"));
}

#[test]
fn scenario_check_and_persist_stays_harmonious() {
    let engine = HarmonyEngine::with_defaults().unwrap();
    let unit = AnalysisUnit::new(
        "validate_and_save",
        vec![
            StructuralNode::method_call("rules", "check"),
            StructuralNode::method_call("repository", "save"),
        ],
    );
    let report = engine.analyze(&unit);

    assert!(report.distance < 0.1, "distance {}", report.distance);
    assert!(matches!(
        report.severity,
        Severity::Excellent | Severity::Harmonious
    ));
    assert!(!report.disharmonious);
    assert_eq!(report.trajectory.trajectory(), Trajectory::None);
}

#[test]
fn scenario_unrecognized_body_is_degenerate_not_an_error() {
    let engine = HarmonyEngine::with_defaults().unwrap();

    for body in [
        Vec::new(),
        vec![StructuralNode::call("frobnicate")],
        vec![StructuralNode::leaf(NodeKind::Block)],
    ] {
        let report = engine.analyze(&AnalysisUnit::new("get_user", body));
        assert_eq!(report.execution.concept_count, 0);
        assert!(report.execution.coordinate.is_zero());
        assert_eq!(report.execution.clarity, 0.0);
        assert!(report.is_low_confidence());
    }
}

#[test]
fn scenario_conflicting_render_registration_fails() {
    let first = Coordinate::new(0.2, 0.0, 0.5, 0.3).unwrap();
    let second = Coordinate::new(0.0, 0.0, 0.0, 1.0).unwrap();

    let mut builder = LexiconBuilder::new();
    builder.register("render", first, None).unwrap();
    let err = builder.register("render", second, None).unwrap_err();
    assert!(err.is_construction());

    let document = OverrideDocument::new(vec![
        LexiconOverride::new("render", first),
        LexiconOverride::new("render", second),
    ]);
    let err = LexiconBuilder::with_defaults()
        .unwrap()
        .merge(&document)
        .unwrap_err();
    assert!(err.is_construction());
}

#[test]
fn docs_pull_intent_toward_their_vocabulary() {
    let engine = HarmonyEngine::with_defaults().unwrap();
    let body = vec![StructuralNode::method_call("db", "delete")];

    let bare = engine.analyze(&AnalysisUnit::new("process", body.clone()));
    let documented = engine.analyze(
        &AnalysisUnit::new("process", body).with_docs("Delete and remove the stale rows."),
    );

    assert!(documented.distance < bare.distance);
    assert!(documented.intent.concept_count >= 2);
}

#[test]
fn trajectory_deltas_match_coordinates() {
    let engine = HarmonyEngine::with_defaults().unwrap();
    let report = engine.analyze(&AnalysisUnit::new(
        "check_permissions",
        vec![
            StructuralNode::method_call("socket", "send"),
            StructuralNode::leaf(NodeKind::Assignment),
        ],
    ));

    for axis in Axis::ALL {
        assert_abs_diff_eq!(
            report.trajectory.deltas[axis.index()],
            report.execution.coordinate[axis] - report.intent.coordinate[axis],
            epsilon = 1e-12
        );
    }
}
