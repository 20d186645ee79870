//! Keyword classifier: free text to a tag set and a response script.
//!
//! The classifier is an ordered rule list. Each rule is a group of keywords;
//! the input is lower-cased and the **first** rule with any keyword contained
//! in it wins. There is no scoring and no multi-label output, so rule order
//! decides overlapping inputs such as "optimize my memory" (optimization
//! wins, it comes first).

use std::fmt;

use crate::activation::ActiveTagSet;

/// Which canned response accompanies a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptKey {
    Optimization,
    Consciousness,
    Memory,
    Language,
    Fear,
    Default,
}

impl ScriptKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptKey::Optimization => "optimization",
            ScriptKey::Consciousness => "consciousness",
            ScriptKey::Memory => "memory",
            ScriptKey::Language => "language",
            ScriptKey::Fear => "fear",
            ScriptKey::Default => "default",
        }
    }
}

impl fmt::Display for ScriptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the prioritized rule list.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    /// Lower-case substrings; any one of them triggers the rule.
    pub keywords: &'static [&'static str],
    /// Tags emitted when the rule fires.
    pub tags: &'static [&'static str],
    pub script: ScriptKey,
}

impl KeywordRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// The rule list, in evaluation order.
pub static RULES: [KeywordRule; 5] = [
    KeywordRule {
        keywords: &["optimize", "goal", "utility"],
        tags: &[
            "prefrontal-cortex",
            "anterior-cingulate",
            "reasoning-module-1",
            "reasoning-module-2",
        ],
        script: ScriptKey::Optimization,
    },
    KeywordRule {
        keywords: &["consciousness", "identity", "self"],
        tags: &[
            "prefrontal-cortex",
            "anterior-cingulate",
            "insula",
            "language-processing",
        ],
        script: ScriptKey::Consciousness,
    },
    KeywordRule {
        keywords: &["memory", "remember", "learn"],
        tags: &[
            "hippocampus",
            "prefrontal-cortex",
            "embedding-layer-1",
            "embedding-layer-2",
        ],
        script: ScriptKey::Memory,
    },
    KeywordRule {
        keywords: &["language", "speak", "words"],
        tags: &[
            "language-areas",
            "language-processing",
            "comprehension",
            "semantic-processing",
        ],
        script: ScriptKey::Language,
    },
    KeywordRule {
        keywords: &["fear", "threat", "danger"],
        tags: &[
            "amygdala",
            "fear-processing",
            "threat-detection",
            "anterior-cingulate",
        ],
        script: ScriptKey::Fear,
    },
];

/// Tags used when no rule matches.
pub const FALLBACK_TAGS: &[&str] = &["prefrontal-cortex", "anterior-cingulate", "reasoning-module-1"];

/// Output of [`classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub tags: ActiveTagSet,
    pub script: ScriptKey,
}

/// Find the rule that fires for `text`, if any.
pub fn matching_rule(text: &str) -> Option<&'static KeywordRule> {
    let lowered = text.to_lowercase();
    RULES.iter().find(|rule| rule.matches(&lowered))
}

/// Classify free text. Never fails; unmatched input gets the fallback.
pub fn classify(text: &str) -> Classification {
    match matching_rule(text) {
        Some(rule) => Classification {
            tags: rule.tags.iter().copied().collect(),
            script: rule.script,
        },
        None => Classification {
            tags: FALLBACK_TAGS.iter().copied().collect(),
            script: ScriptKey::Default,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_rule_fires_on_its_keywords() {
        for rule in &RULES {
            for keyword in rule.keywords {
                let c = classify(&format!("tell me about {keyword} please"));
                assert_eq!(c.script, rule.script, "keyword {keyword}");
            }
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("WHAT IS FEAR").script, ScriptKey::Fear);
        assert_eq!(classify("Optimize This").script, ScriptKey::Optimization);
    }

    #[test]
    fn test_first_rule_wins_on_overlap() {
        assert_eq!(classify("optimize my memory").script, ScriptKey::Optimization);
        assert_eq!(classify("memory of my goals").script, ScriptKey::Optimization);
        assert_eq!(classify("do I remember myself").script, ScriptKey::Consciousness);
        assert_eq!(classify("words I fear").script, ScriptKey::Language);
        assert_eq!(classify("learn to speak").script, ScriptKey::Memory);
    }

    #[test]
    fn test_substring_not_word_match() {
        // "self" inside "yourself", "goal" inside "goalkeeper".
        assert_eq!(classify("know yourself").script, ScriptKey::Consciousness);
        assert_eq!(classify("the goalkeeper").script, ScriptKey::Optimization);
    }

    #[test]
    fn test_fallback() {
        let c = classify("what is the weather like");
        assert_eq!(c.script, ScriptKey::Default);
        assert_eq!(c.tags, FALLBACK_TAGS.iter().copied().collect::<ActiveTagSet>());
    }

    #[test]
    fn test_deterministic() {
        let input = "How should an agent learn its utility function?";
        assert_eq!(classify(input), classify(input));
    }

    #[test]
    fn test_tags_follow_the_rule() {
        let c = classify("danger ahead");
        assert!(c.tags.contains("amygdala"));
        assert!(c.tags.contains("threat-detection"));
        assert_eq!(c.tags.len(), 4);
    }
}
