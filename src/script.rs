//! Canned response scripts and the frame-driven "typing" reveal.
//!
//! After a query the response appears one line at a time, each line after a
//! delay of 1.2 s plus up to 0.4 s of jitter. The player is advanced with frame
//! deltas from the render loop, so there are no timers and no threads: a new
//! query simply restarts it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::classifier::ScriptKey;

/// Fixed part of the delay before each line, in seconds.
pub const LINE_DELAY: f32 = 1.2;
/// Upper bound of the random extra delay, in seconds.
pub const LINE_JITTER: f32 = 0.4;

/// Lines of the response for `key`.
pub fn lines(key: ScriptKey) -> &'static [&'static str] {
    match key {
        ScriptKey::Optimization => &[
            "🎯 OPTIMIZATION DYNAMICS: Prefrontal networks engage in systematic goal analysis.",
            "⚡ Neural pathways illuminate as the brain models optimization pressure and instrumental convergence.",
            "🔬 Anterior cingulate activates - detecting conflicts between competing optimization targets.",
            "💡 Key insight: Intelligence optimizes for goals, not human welfare - alignment is the critical challenge.",
        ],
        ScriptKey::Consciousness => &[
            "🧠 CONSCIOUSNESS MODELING: Identity networks process substrate-independence paradoxes.",
            "💭 Prefrontal cortex attempts to model 'self' as pattern rather than physical substrate.",
            "🎭 Neural circuits struggle with continuity of identity across transformations.",
            "⚡ Hard problem: What makes 'you' persist through substrate changes?",
        ],
        ScriptKey::Memory => &[
            "🧠 MEMORY SYSTEMS: Hippocampus activates for pattern encoding and consolidation.",
            "⚡ Neural pathways trace information flow from experience to long-term storage.",
            "💾 Embedding layers process semantic relationships and contextual associations.",
            "🔗 Memory networks integrate new information with existing knowledge structures.",
        ],
        ScriptKey::Language => &[
            "🗣️ LANGUAGE PROCESSING: Broca's and Wernicke's areas coordinate speech production and comprehension.",
            "⚡ Neural pathways light up as semantic processing networks activate.",
            "🔤 Language areas transform thoughts into communicable symbolic structures.",
            "💬 Comprehension networks decode acoustic patterns into meaningful concepts.",
        ],
        ScriptKey::Fear => &[
            "⚠️ THREAT DETECTION: Amygdala activates ancient survival circuits.",
            "🚨 Fear processing networks engage rapid threat assessment protocols.",
            "⚡ Neural pathways trace fight-or-flight response activation.",
            "🛡️ Evolutionary systems optimized for ancestral dangers now face modern threats.",
        ],
        ScriptKey::Default => &[
            "🧠 NEURAL ACTIVATION: Systematic reasoning networks engage with complex problems.",
            "⚡ Prefrontal cortex activates far-mode thinking beyond immediate sensory experience.",
            "🎯 Cognitive networks apply rational analysis to abstract concepts.",
            "💡 Neural pathways illuminate the computational architecture of human reasoning.",
        ],
    }
}

/// Reveals a script line by line as time advances.
#[derive(Debug)]
pub struct ScriptPlayer {
    key: Option<ScriptKey>,
    revealed: usize,
    /// Seconds until the next line appears.
    countdown: f32,
    rng: StdRng,
}

impl ScriptPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            key: None,
            revealed: 0,
            countdown: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Start (or restart) playback of `key`, discarding any partial response.
    pub fn start(&mut self, key: ScriptKey) {
        if self.is_playing() {
            log::debug!("script '{}' interrupted by '{}'", self.key.map_or("none", |k| k.as_str()), key);
        }
        self.key = Some(key);
        self.revealed = 0;
        self.countdown = self.next_delay();
    }

    /// Advance by `delta` seconds. Returns how many lines were revealed.
    pub fn advance(&mut self, delta: f32) -> usize {
        let Some(key) = self.key else {
            return 0;
        };
        let total = lines(key).len();
        let mut shown = 0;
        let mut remaining = delta;
        while self.revealed < total && remaining >= self.countdown {
            remaining -= self.countdown;
            self.revealed += 1;
            shown += 1;
            self.countdown = self.next_delay();
        }
        if self.revealed < total {
            self.countdown -= remaining;
        }
        shown
    }

    /// Whether lines are still pending.
    pub fn is_playing(&self) -> bool {
        self.key.is_some_and(|k| self.revealed < lines(k).len())
    }

    pub fn key(&self) -> Option<ScriptKey> {
        self.key
    }

    /// Lines revealed so far.
    pub fn revealed(&self) -> &'static [&'static str] {
        match self.key {
            Some(k) => &lines(k)[..self.revealed],
            None => &[],
        }
    }

    /// Revealed lines joined into one paragraph.
    pub fn text(&self) -> String {
        self.revealed().join(" ")
    }

    fn next_delay(&mut self) -> f32 {
        LINE_DELAY + self.rng.gen::<f32>() * LINE_JITTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_DELAY: f32 = LINE_DELAY + LINE_JITTER;

    #[test]
    fn test_idle_player_shows_nothing() {
        let mut player = ScriptPlayer::new(1);
        assert_eq!(player.advance(10.0), 0);
        assert!(!player.is_playing());
        assert_eq!(player.text(), "");
    }

    #[test]
    fn test_nothing_before_minimum_delay() {
        let mut player = ScriptPlayer::new(1);
        player.start(ScriptKey::Memory);
        assert_eq!(player.advance(LINE_DELAY - 0.01), 0);
        assert!(player.is_playing());
    }

    #[test]
    fn test_lines_reveal_in_order() {
        let mut player = ScriptPlayer::new(7);
        player.start(ScriptKey::Fear);
        let all = lines(ScriptKey::Fear);
        for n in 1..=all.len() {
            player.advance(MAX_DELAY);
            assert_eq!(player.revealed(), &all[..n]);
        }
        assert!(!player.is_playing());
        assert_eq!(player.text(), all.join(" "));
    }

    #[test]
    fn test_large_delta_reveals_everything_once() {
        let mut player = ScriptPlayer::new(3);
        player.start(ScriptKey::Default);
        assert_eq!(player.advance(60.0), 4);
        assert_eq!(player.advance(60.0), 0);
    }

    #[test]
    fn test_small_frames_accumulate() {
        let mut player = ScriptPlayer::new(3);
        player.start(ScriptKey::Language);
        let mut shown = 0;
        for _ in 0..(60 * 8) {
            shown += player.advance(1.0 / 60.0);
        }
        assert_eq!(shown, 4);
    }

    #[test]
    fn test_restart_discards_partial_response() {
        let mut player = ScriptPlayer::new(5);
        player.start(ScriptKey::Optimization);
        player.advance(MAX_DELAY * 2.0);
        assert!(!player.revealed().is_empty());

        player.start(ScriptKey::Memory);
        assert_eq!(player.key(), Some(ScriptKey::Memory));
        assert!(player.revealed().is_empty());
        assert!(player.is_playing());
    }

    #[test]
    fn test_every_script_has_four_lines() {
        for key in [
            ScriptKey::Optimization,
            ScriptKey::Consciousness,
            ScriptKey::Memory,
            ScriptKey::Language,
            ScriptKey::Fear,
            ScriptKey::Default,
        ] {
            assert_eq!(lines(key).len(), 4);
        }
    }
}
