//! End-to-end query scenarios: text in, activation and animation out.

use neuroglow::prelude::*;
use neuroglow::presets;

fn session() -> Session {
    Session::new(Anatomy::standard(), 11)
}

#[test]
fn optimization_query_lights_executive_regions() {
    let mut s = session();
    let classification = s.submit("How do I optimize my goals?").expect("non-empty query");

    assert_eq!(classification.script, ScriptKey::Optimization);
    assert!(classification.tags.contains("prefrontal-cortex"));
    assert!(classification.tags.contains("reasoning-module-1"));

    let activation = s.activation();
    assert!(activation.is_region_active(RegionId("prefrontal-cortex")));
    assert!(activation.is_region_active(RegionId("anterior-cingulate")));
    assert!(activation.is_pathway_active(PathwayId::new("prefrontal-cortex", "anterior-cingulate")));
    assert!(!activation.is_region_active(RegionId("amygdala")));
}

#[test]
fn empty_input_changes_nothing() {
    let mut s = session();
    assert!(s.submit("").is_none());
    assert!(s.activation().is_empty());
    assert!(s.script().is_none());
    assert!(!s.is_processing());

    s.submit("what do I remember?");
    let before = s.activation().clone();
    let script = s.script();
    assert!(s.submit("").is_none());
    assert_eq!(s.activation(), &before);
    assert_eq!(s.script(), script);
}

#[test]
fn zero_intensity_renders_baseline() {
    let mut s = session();
    s.submit("How do I optimize my goals?");
    s.set_intensity(0.0);

    let mut animator = ParticleAnimator::new(s.anatomy(), 11);
    let start: Vec<Vec<f32>> = animator.flows().iter().map(|f| f.progress.clone()).collect();

    let mut clock = FrameClock::new();
    for _ in 0..120 {
        let (time, delta) = clock.advance(1.0 / 60.0);
        animator.tick(s.activation(), s.intensity(), time, delta);
    }

    for body in animator.bodies() {
        assert_eq!(body.opacity, body.base_opacity, "{}", body.name);
    }
    for (flow, progress) in animator.flows().iter().zip(start) {
        assert_eq!(flow.progress, progress);
        if flow.active {
            assert_eq!(flow.opacity, 0.0);
        }
    }
}

#[test]
fn half_active_pathway_stays_dark() {
    let mut s = session();
    s.submit("Help me remember this");

    let activation = s.activation();
    assert!(activation.is_region_active(RegionId("prefrontal-cortex")));
    assert!(!activation.is_region_active(RegionId("amygdala")));
    assert!(!activation.is_pathway_active(PathwayId::new("prefrontal-cortex", "amygdala")));
    assert!(activation.is_pathway_active(PathwayId::new("hippocampus", "prefrontal-cortex")));

    let mut animator = ParticleAnimator::new(s.anatomy(), 11);
    animator.tick(activation, 1.0, 0.5, 1.0 / 60.0);
    let dark = animator
        .flows()
        .iter()
        .find(|f| f.id == PathwayId::new("prefrontal-cortex", "amygdala"))
        .expect("standard pathway");
    assert!(!dark.active);
    assert_eq!(dark.opacity, 0.15);
}

#[test]
fn overlapping_keywords_follow_rule_order() {
    let a = classify("optimize my memory");
    let b = classify("optimize my memory");
    assert_eq!(a, b);
    assert_eq!(a.script, ScriptKey::Optimization);
    assert!(!a.tags.contains("hippocampus"));
}

#[test]
fn every_preset_activates_something() {
    for preset in presets::all() {
        let mut s = session();
        s.select_preset(preset);
        assert!(
            s.activation().region_count() > 0,
            "preset activates nothing: {}",
            &preset.prompt[..40]
        );
        assert!(s.is_processing());
    }
}

#[test]
fn response_types_out_then_stops() {
    let mut s = session();
    s.submit("Is there a threat?");
    let mut clock = FrameClock::new();
    let mut seen = 0;
    for _ in 0..(60 * 10) {
        let (_, delta) = clock.advance(1.0 / 60.0);
        s.advance(delta);
        let len = s.response().len();
        assert!(len >= seen, "response must only grow");
        seen = len;
    }
    assert!(!s.is_processing());
    assert!(s.response().starts_with("⚠️ THREAT DETECTION"));
}

#[test]
fn long_run_keeps_invariants() {
    let mut s = session();
    s.select_preset(presets::all().nth(2).expect("ten presets"));
    s.submit("language and words");
    s.set_intensity(1.0);

    let mut animator = ParticleAnimator::new(s.anatomy(), 3);
    let mut clock = FrameClock::new();
    for frame in 0..2_000 {
        // Occasional stalls get clamped by the clock.
        let raw = if frame % 97 == 0 { 3.0 } else { 1.0 / 60.0 };
        let (time, delta) = clock.advance(raw);
        animator.tick(s.activation(), s.intensity(), time, delta);
    }

    for flow in animator.flows() {
        assert!(flow.progress.iter().all(|t| (0.0..1.0).contains(t)));
    }
    for cloud in animator.clouds() {
        for p in &cloud.positions {
            assert!(p.distance(cloud.center) <= neuroglow::animator::BOUND_RADIUS + 1e-4);
        }
    }
}
