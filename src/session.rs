//! Query session: classifier, resolver and response script wired together.
//!
//! The session owns the current [`ActiveTagSet`] and the [`Activation`]
//! derived from it. Both are replaced wholesale on every query.
//!
//! A query submitted while a previous response is still being revealed
//! cancels that response and replaces it.

use crate::activation::{resolve, ActiveTagSet, Activation};
use crate::anatomy::Anatomy;
use crate::classifier::{classify, Classification, ScriptKey};
use crate::presets::Preset;
use crate::script::ScriptPlayer;

/// Intensity a fresh session starts with.
pub const DEFAULT_INTENSITY: f32 = 0.7;

/// Interactive state behind the query box.
#[derive(Debug)]
pub struct Session {
    anatomy: Anatomy,
    tags: ActiveTagSet,
    activation: Activation,
    script: ScriptPlayer,
    intensity: f32,
    query: Option<String>,
}

impl Session {
    pub fn new(anatomy: Anatomy, seed: u64) -> Self {
        Self {
            anatomy,
            tags: ActiveTagSet::new(),
            activation: Activation::none(),
            script: ScriptPlayer::new(seed),
            intensity: DEFAULT_INTENSITY,
            query: None,
        }
    }

    /// Submit free text. Blank input is ignored and returns `None`.
    pub fn submit(&mut self, text: &str) -> Option<Classification> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let classification = classify(text);
        log::info!(
            "query classified as '{}' ({} tags)",
            classification.script,
            classification.tags.len()
        );
        self.apply(text, classification.tags.clone(), classification.script);
        Some(classification)
    }

    /// Run a canned preset: its own tags, script picked from its prompt text.
    pub fn select_preset(&mut self, preset: &Preset) {
        let script = classify(preset.prompt).script;
        log::info!("preset selected ({} tags, script '{}')", preset.tags.len(), script);
        self.apply(preset.prompt, preset.tags.iter().copied().collect(), script);
    }

    fn apply(&mut self, query: &str, tags: ActiveTagSet, script: ScriptKey) {
        self.activation = resolve(&self.anatomy, &tags);
        log::debug!(
            "{} regions and {} pathways active",
            self.activation.region_count(),
            self.activation.pathway_count()
        );
        self.tags = tags;
        self.query = Some(query.to_owned());
        self.script.start(script);
    }

    /// Advance the response reveal by `delta` seconds.
    pub fn advance(&mut self, delta: f32) {
        self.script.advance(delta);
    }

    /// Set the global intensity, clamped into `[0, 1]`.
    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = if intensity.is_nan() { 0.0 } else { intensity.clamp(0.0, 1.0) };
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn anatomy(&self) -> &Anatomy {
        &self.anatomy
    }

    pub fn tags(&self) -> &ActiveTagSet {
        &self.tags
    }

    pub fn activation(&self) -> &Activation {
        &self.activation
    }

    /// The last accepted query text.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Whether the response is still being revealed.
    pub fn is_processing(&self) -> bool {
        self.script.is_playing()
    }

    /// The response revealed so far.
    pub fn response(&self) -> String {
        self.script.text()
    }

    pub fn script(&self) -> Option<ScriptKey> {
        self.script.key()
    }

    /// Load shown in the activity monitor, in percent: 12 per active tag.
    pub fn processing_load(&self) -> u32 {
        load_percent(self.tags.len())
    }
}

fn load_percent(tag_count: usize) -> u32 {
    tag_count.saturating_mul(12).min(100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::RegionId;

    fn session() -> Session {
        Session::new(Anatomy::standard(), 42)
    }

    #[test]
    fn test_blank_input_is_a_no_op() {
        let mut s = session();
        assert!(s.submit("").is_none());
        assert!(s.submit("   \n\t").is_none());
        assert!(s.tags().is_empty());
        assert!(s.activation().is_empty());
        assert!(!s.is_processing());
        assert_eq!(s.query(), None);
    }

    #[test]
    fn test_blank_input_keeps_previous_state() {
        let mut s = session();
        s.submit("fear");
        let before = s.activation().clone();
        s.submit("  ");
        assert_eq!(s.activation(), &before);
        assert_eq!(s.query(), Some("fear"));
    }

    #[test]
    fn test_submit_resolves_and_starts_script() {
        let mut s = session();
        let c = s.submit("What do I remember?").map(|c| c.script);
        assert_eq!(c, Some(ScriptKey::Memory));
        assert!(s.activation().is_region_active(RegionId("hippocampus")));
        assert!(s.is_processing());
        assert_eq!(s.response(), "");
        s.advance(10.0);
        assert!(!s.is_processing());
        assert!(s.response().starts_with("🧠 MEMORY SYSTEMS"));
    }

    #[test]
    fn test_new_query_replaces_running_one() {
        let mut s = session();
        s.submit("optimize goals");
        s.advance(2.0);
        s.submit("danger");
        assert_eq!(s.script(), Some(ScriptKey::Fear));
        assert_eq!(s.response(), "");
        assert!(s.activation().is_region_active(RegionId("amygdala")));
        assert!(!s.activation().is_region_active(RegionId("hippocampus")));
    }

    #[test]
    fn test_preset_uses_its_own_tags() {
        let mut s = session();
        let preset = crate::presets::all().next().copied().unwrap();
        s.select_preset(&preset);
        assert!(s.tags().contains("value-systems"));
        assert!(s.activation().is_region_active(RegionId("prefrontal-cortex")));
        assert!(s.activation().is_region_active(RegionId("anterior-cingulate")));
        // The prompt mentions "utility", so the optimization script plays.
        assert_eq!(s.script(), Some(ScriptKey::Optimization));
    }

    #[test]
    fn test_intensity_is_clamped() {
        let mut s = session();
        assert_eq!(s.intensity(), DEFAULT_INTENSITY);
        s.set_intensity(1.5);
        assert_eq!(s.intensity(), 1.0);
        s.set_intensity(-0.2);
        assert_eq!(s.intensity(), 0.0);
        s.set_intensity(f32::NAN);
        assert_eq!(s.intensity(), 0.0);
    }

    #[test]
    fn test_processing_load() {
        let mut s = session();
        assert_eq!(s.processing_load(), 0);
        s.submit("optimize");
        assert_eq!(s.processing_load(), 48);
        let mut crowded = session();
        crowded.select_preset(&crate::presets::Preset {
            prompt: "many tags",
            tags: &["a", "b", "c", "d", "e", "f", "g", "h", "i"],
            explanation: "",
            intensity: 0.5,
            insight: "",
        });
        assert_eq!(crowded.processing_load(), 100);
    }

    #[test]
    fn test_load_saturates_for_huge_tag_counts() {
        assert_eq!(load_percent(8), 96);
        assert_eq!(load_percent(9), 100);
        assert_eq!(load_percent(u32::MAX as usize / 12 + 1), 100);
        assert_eq!(load_percent(usize::MAX), 100);
    }
}
