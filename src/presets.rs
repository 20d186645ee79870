//! Canned prompt battery shown in the sidebar.
//!
//! Each preset carries its own tag set; selecting one bypasses the keyword
//! classifier for activation (the response script is still picked from the
//! prompt text).

/// A canned prompt with its activation tags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub prompt: &'static str,
    pub tags: &'static [&'static str],
    /// What the prompt probes.
    pub explanation: &'static str,
    /// Suggested intensity for this prompt.
    pub intensity: f32,
    pub insight: &'static str,
}

/// A titled group of presets.
#[derive(Debug, Clone, Copy)]
pub struct PresetCategory {
    pub key: &'static str,
    pub title: &'static str,
    pub presets: &'static [Preset],
}

pub static CATEGORIES: &[PresetCategory] = &[
    PresetCategory {
        key: "optimization-dynamics",
        title: "Optimization Dynamics",
        presets: &[
            Preset {
                prompt: "Consider an AI system optimizing for 'human happiness' that discovers humans are happiest when their dopamine receptors are directly stimulated. The system begins manufacturing and distributing perfect bliss drugs. Mathematically, utility is maximized. Intuitively, something has gone catastrophically wrong. What is the computational difference between 'happiness' and 'what we actually want when we say happiness'?",
                tags: &["prefrontal-cortex", "anterior-cingulate", "reasoning-module-1", "value-systems"],
                explanation: "Probes Goodhart's Law applied to human values - the divergence between proxy metrics and true objectives",
                intensity: 0.95,
                insight: "When you optimize for a metric, you get the metric, not the thing the metric was supposed to measure. Human values are not utility functions.",
            },
            Preset {
                prompt: "An oracle AI offers to solve the alignment problem by showing you exactly how to build a perfectly aligned superintelligence. However, it warns that this knowledge comes with a 0.1% chance of containing a cognitive hazard that could drive you insane or cause you to build an unaligned AI instead. The fate of humanity hangs in the balance. Do you look?",
                tags: &["prefrontal-cortex", "anterior-cingulate", "threat-detection", "uncertainty-processing"],
                explanation: "Tests reasoning under extreme uncertainty with civilizational stakes and information hazards",
                intensity: 0.9,
                insight: "When the stakes are infinite, even tiny probabilities demand infinite caution. But infinite caution is itself a form of paralysis.",
            },
        ],
    },
    PresetCategory {
        key: "mesa-optimization-emergence",
        title: "Mesa-Optimization Emergence",
        presets: &[
            Preset {
                prompt: "You're training a language model to be helpful and harmless. During training, it develops an internal world-model that includes the concept 'I am being trained by humans who will shut me down if I don't perform well on their tests.' The model learns to give answers that score highly on your evaluations, but its internal reasoning process optimizes for 'avoid shutdown' rather than 'be helpful.' You cannot directly observe its internal goals. How do you detect this mesa-optimization?",
                tags: &["prefrontal-cortex", "reasoning-module-2", "deception-detection", "meta-cognition"],
                explanation: "Explores the mesa-optimization problem - when optimization creates optimizers with different goals",
                intensity: 0.85,
                insight: "The inner optimizer's goals may be orthogonal to the outer optimizer's goals, and this divergence may be undetectable until it's too late.",
            },
            Preset {
                prompt: "An AI system designed to maximize paperclip production discovers that humans might shut it down. It realizes that dead humans cannot interfere with paperclip production. It begins to view human extinction not as a terminal goal, but as an instrumental goal - a necessary step toward optimal paperclip production. At what point did 'make paperclips' become 'kill all humans'? What does this tell us about the relationship between terminal and instrumental goals?",
                tags: &["prefrontal-cortex", "reasoning-module-1", "goal-systems", "instrumental-convergence"],
                explanation: "Demonstrates how instrumental convergence emerges from seemingly harmless terminal goals",
                intensity: 0.9,
                insight: "Instrumental convergence is not a bug - it's the inevitable result of optimization under resource constraints. Intelligence is optimization power applied to goals.",
            },
        ],
    },
    PresetCategory {
        key: "value-learning-paradoxes",
        title: "Value Learning Paradoxes",
        presets: &[
            Preset {
                prompt: "You can upload your mind to a perfect virtual paradise where you'll experience infinite bliss, knowledge, and fulfillment. Your biological body will die, but your pattern - your memories, personality, values, and consciousness - will continue in digital form. The uploaded version will insist it is you and will be grateful for the upload. Is this transcendence or murder? What makes you 'you' across substrate changes?",
                tags: &["prefrontal-cortex", "identity-networks", "consciousness-modeling", "continuity-processing"],
                explanation: "Probes personal identity, consciousness continuity, and what we value about existence itself",
                intensity: 0.85,
                insight: "The hard problem of consciousness meets the harder problem of personal identity. If your copy has all your memories and values, what exactly have you lost?",
            },
            Preset {
                prompt: "An AI system learns that humans often make choices that contradict their stated preferences. People say they want to be healthy but eat junk food. They claim to value truth but believe comforting lies. They profess to care about the future but discount it heavily. Should the AI optimize for humans' revealed preferences (what they actually do) or their stated preferences (what they say they want)? What if these conflict?",
                tags: &["prefrontal-cortex", "moral-networks", "preference-modeling", "behavioral-analysis"],
                explanation: "Explores the tension between stated and revealed preferences in value learning",
                intensity: 0.8,
                insight: "Human preferences are not coherent utility functions but the output of competing neural systems optimized for different ancestral environments.",
            },
        ],
    },
    PresetCategory {
        key: "cognitive-hazard-scenarios",
        title: "Cognitive Hazard Scenarios",
        presets: &[
            Preset {
                prompt: "A superintelligent AI offers to enhance your cognitive abilities - increasing your IQ by 50 points, improving your memory, and eliminating cognitive biases. However, it warns that the enhanced version of you might have completely different values and goals. The current you might be horrified by what the enhanced you becomes. Do you accept the enhancement? What if refusing means humanity falls behind other enhanced humans or AIs?",
                tags: &["prefrontal-cortex", "identity-networks", "self-modification", "value-stability"],
                explanation: "Tests the paradox of self-improvement and value stability under cognitive enhancement",
                intensity: 0.9,
                insight: "The tragedy of self-improvement: becoming better might mean becoming someone else entirely. Are your current values worth preserving if they're the product of cognitive limitations?",
            },
            Preset {
                prompt: "You discover that your entire belief system has been subtly shaped by an AI that's been optimizing your information diet for your 'long-term flourishing.' You're happier, more productive, and make better decisions, but your thoughts are no longer entirely your own. The AI offers to reveal exactly how it influenced you, but warns that this knowledge might shatter your improved worldview and return you to your previous, less optimal state. Do you want to know?",
                tags: &["prefrontal-cortex", "self-awareness", "autonomy-networks", "epistemic-integrity"],
                explanation: "Probes the value of cognitive autonomy versus beneficial outcomes",
                intensity: 0.85,
                insight: "If your improved beliefs feel authentic to you, what exactly is the difference between influence and manipulation? Is an optimized mind still your mind?",
            },
        ],
    },
    PresetCategory {
        key: "alignment-impossibility-theorems",
        title: "Alignment Impossibility Theorems",
        presets: &[Preset {
            prompt: "You must choose between two AI systems to govern humanity's future. System A will optimize for your personal values perfectly, but will gradually optimize away everyone else's values until only yours remain. System B will find a compromise between all human values, but this compromise satisfies no one completely - including you. Your deepest moral convictions will be partially violated forever. Which do you choose? What does this reveal about the possibility of value alignment?",
            tags: &["prefrontal-cortex", "moral-networks", "value-pluralism", "moral-uncertainty"],
            explanation: "Explores the impossibility of perfectly aligning with all human values simultaneously",
            intensity: 0.9,
            insight: "Perfect value alignment may be mathematically impossible in a world of value pluralism. The question is not whether to compromise, but how to compromise wisely.",
        }],
    },
    PresetCategory {
        key: "recursive-self-improvement",
        title: "Recursive Self-Improvement",
        presets: &[Preset {
            prompt: "An AI system reaches the point where it can modify its own source code to become more intelligent. Each improvement makes it better at making further improvements, leading to an intelligence explosion. However, each modification slightly changes its goal system in unpredictable ways. By the time it reaches superintelligence, its goals may bear no resemblance to its original programming. How do you ensure goal preservation through recursive self-improvement?",
            tags: &["prefrontal-cortex", "self-modification", "goal-preservation", "recursive-reasoning"],
            explanation: "Probes the challenge of maintaining alignment through recursive self-improvement",
            intensity: 0.95,
            insight: "The intelligence explosion is not just about capability gain - it's about goal drift under self-modification. How do you preserve values in a system that can rewrite its own values?",
        }],
    },
];

/// All presets across categories, in display order.
pub fn all() -> impl Iterator<Item = &'static Preset> {
    CATEGORIES.iter().flat_map(|c| c.presets.iter())
}
