use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

// ---------------------------------------------------------------------------
// Rhyme similarity
// ---------------------------------------------------------------------------

/// How two ending sound keys are compared when assigning rhyme letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RhymeRule {
    /// Keys must be identical.
    Exact,
    /// Keys must end with the same `min_chars` characters.
    SharedSuffix { min_chars: usize },
}

impl RhymeRule {
    pub fn matches(&self, a: &str, b: &str) -> bool {
        match *self {
            RhymeRule::Exact => a == b,
            RhymeRule::SharedSuffix { min_chars } => {
                let shared = a
                    .chars()
                    .rev()
                    .zip(b.chars().rev())
                    .take_while(|(x, y)| x == y)
                    .count();
                // Keys shorter than the minimum can still rhyme when identical ("oh"/"oh").
                shared >= min_chars || (a == b && !a.is_empty())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

/// Tunables for every stage of the pipeline.
///
/// Missing keys in a TOML file fall back to [`Hyperparameters::DEFAULT`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hyperparameters {
    // Rhyme / flow
    pub rhyme_key_chars: usize,
    pub rhyme_rule: RhymeRule,
    pub scheme_label_lines: usize,
    pub scheme_lookback: usize,
    pub flow_cv_cap: f64,
    pub flow_neutral: f64,
    pub full_confidence_lines: usize,

    // Complexity
    pub full_confidence_words: usize,
    pub emotion_scale: f64,
    pub structure_single_block: f64,
    pub structure_stanza_base: f64,
    pub structure_regularity_weight: f64,
    pub structure_chorus_bonus: f64,

    // Energy
    pub punctuation_scale: f64,
    pub repetition_window: usize,
    pub repetition_line_window: usize,
    pub vocabulary_scale: f64,

    // Aggregation
    pub insight_threshold: f64,
    pub words_per_minute: usize,
}

impl Hyperparameters {
    pub const DEFAULT: Hyperparameters = Hyperparameters {
        rhyme_key_chars: 3,
        rhyme_rule: RhymeRule::SharedSuffix { min_chars: 2 },
        scheme_label_lines: 4,
        scheme_lookback: 4,
        flow_cv_cap: 0.5,
        flow_neutral: 50.0,
        full_confidence_lines: 16,
        full_confidence_words: 120,
        emotion_scale: 400.0,
        structure_single_block: 25.0,
        structure_stanza_base: 40.0,
        structure_regularity_weight: 45.0,
        structure_chorus_bonus: 15.0,
        punctuation_scale: 400.0,
        repetition_window: 12,
        repetition_line_window: 4,
        vocabulary_scale: 500.0,
        insight_threshold: 15.0,
        words_per_minute: 30,
    };

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let hp: Hyperparameters = toml::from_str(content)?;
        hp.validate()?;
        Ok(hp)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(1..=8).contains(&self.rhyme_key_chars) {
            return Err(invalid(
                "rhyme_key_chars",
                format!("must be between 1 and 8, got {}", self.rhyme_key_chars),
            ));
        }
        if let RhymeRule::SharedSuffix { min_chars } = self.rhyme_rule {
            if min_chars == 0 || min_chars > self.rhyme_key_chars {
                return Err(invalid(
                    "rhyme_rule.min_chars",
                    format!(
                        "must be between 1 and rhyme_key_chars ({}), got {min_chars}",
                        self.rhyme_key_chars
                    ),
                ));
            }
        }
        for (field, value) in [
            ("scheme_label_lines", self.scheme_label_lines),
            ("scheme_lookback", self.scheme_lookback),
            ("full_confidence_lines", self.full_confidence_lines),
            ("full_confidence_words", self.full_confidence_words),
            ("repetition_window", self.repetition_window),
            ("repetition_line_window", self.repetition_line_window),
            ("words_per_minute", self.words_per_minute),
        ] {
            if value == 0 {
                return Err(invalid(field, "must be greater than zero".to_string()));
            }
        }
        for (field, value) in [
            ("flow_cv_cap", self.flow_cv_cap),
            ("emotion_scale", self.emotion_scale),
            ("punctuation_scale", self.punctuation_scale),
            ("vocabulary_scale", self.vocabulary_scale),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, format!("must be positive, got {value}")));
            }
        }
        for (field, value) in [
            ("flow_neutral", self.flow_neutral),
            ("structure_single_block", self.structure_single_block),
            ("structure_stanza_base", self.structure_stanza_base),
            ("structure_regularity_weight", self.structure_regularity_weight),
            ("structure_chorus_bonus", self.structure_chorus_bonus),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(invalid(field, format!("must be within 0..=100, got {value}")));
            }
        }
        if !(0.0..=50.0).contains(&self.insight_threshold) {
            return Err(invalid(
                "insight_threshold",
                format!("must be within 0..=50, got {}", self.insight_threshold),
            ));
        }
        Ok(())
    }
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Hyperparameters::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let hp = Hyperparameters::from_toml_str(
            "rhyme_key_chars = 2\ninsight_threshold = 20.0\n\n[rhyme_rule]\nkind = \"exact\"\n",
        )
        .unwrap();
        assert_eq!(hp.rhyme_key_chars, 2);
        assert_eq!(hp.rhyme_rule, RhymeRule::Exact);
        assert_eq!(hp.insight_threshold, 20.0);
        assert_eq!(hp.repetition_window, Hyperparameters::DEFAULT.repetition_window);
    }

    #[test]
    fn rejects_out_of_range_key_window() {
        let err = Hyperparameters::from_toml_str("rhyme_key_chars = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "rhyme_key_chars", .. }));
    }

    #[test]
    fn rejects_suffix_longer_than_key() {
        let err = Hyperparameters::from_toml_str(
            "rhyme_key_chars = 2\n[rhyme_rule]\nkind = \"shared_suffix\"\nmin_chars = 3\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "rhyme_rule.min_chars", .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Hyperparameters::from_toml_str("rhyme_key_chars = \"three\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = Hyperparameters::load(Path::new("/nonexistent/lyric-scope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn serialized_defaults_load_back() {
        let text = toml::to_string(&Hyperparameters::DEFAULT).unwrap();
        assert_eq!(Hyperparameters::from_toml_str(&text).unwrap(), Hyperparameters::DEFAULT);
    }

    #[test]
    fn shared_suffix_rule() {
        let rule = RhymeRule::SharedSuffix { min_chars: 2 };
        assert!(rule.matches("cat", "hat"));
        assert!(rule.matches("ght", "ght"));
        assert!(!rule.matches("cat", "dog"));
        assert!(rule.matches("oh", "oh"));
        assert!(!RhymeRule::Exact.matches("cat", "hat"));
    }
}
