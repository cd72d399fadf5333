use std::collections::HashSet;

use serde::Serialize;
use tracing::trace;

use crate::config::Hyperparameters;
use crate::lexicon::{EMOTION_NEGATIVE, EMOTION_POSITIVE};
use crate::score::{clamp_score, coefficient_of_variation, mean, sample_confidence, SCORE_MAX};
use crate::tokenize::Lyric;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityReport {
    pub creativity: f64,
    pub diversity: f64,
    pub emotion: f64,
    pub structure: f64,
    /// Mean of the four sub-scores.
    pub score: f64,
    pub confidence: f64,
    pub structure_confidence: f64,
    pub mood: String,
    pub positive_hits: usize,
    pub negative_hits: usize,
    pub stanza_count: usize,
    pub chorus_detected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructureScore {
    pub score: f64,
    pub stanzas: usize,
    pub chorus: bool,
}

pub fn diversity(words: &[&str]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let unique: HashSet<&str> = words.iter().copied().collect();
    clamp_score(unique.len() as f64 / words.len() as f64 * SCORE_MAX)
}

pub fn creativity(lyric: &Lyric) -> f64 {
    let total = lyric.word_count();
    if total == 0 {
        return 0.0;
    }
    let rare = lyric.words().filter(|w| w.rare).count();
    clamp_score(rare as f64 / total as f64 * SCORE_MAX)
}

fn mood(positive: usize, negative: usize) -> &'static str {
    match (positive, negative) {
        (0, 0) => "neutral",
        (p, n) if p > n => "positive",
        (p, n) if n > p => "negative",
        _ => "mixed",
    }
}

/// Verse/chorus segmentation from blank-line spacing. Evenly sized stanzas
/// score higher; a stanza repeated verbatim counts as a chorus.
pub fn structure(lyric: &Lyric, hp: &Hyperparameters) -> StructureScore {
    let stanzas = lyric.stanzas();
    match stanzas.len() {
        0 => StructureScore {
            score: 0.0,
            stanzas: 0,
            chorus: false,
        },
        1 => StructureScore {
            score: clamp_score(hp.structure_single_block),
            stanzas: 1,
            chorus: false,
        },
        n => {
            let sizes: Vec<f64> = stanzas.iter().map(|s| s.len() as f64).collect();
            let regularity = 1.0 - coefficient_of_variation(&sizes).min(1.0);

            let mut seen = HashSet::new();
            let chorus = stanzas.iter().any(|stanza| {
                let text = stanza
                    .iter()
                    .map(|l| l.normalized_text())
                    .collect::<Vec<_>>()
                    .join("\n");
                !text.trim().is_empty() && !seen.insert(text)
            });

            let mut score = hp.structure_stanza_base + hp.structure_regularity_weight * regularity;
            if chorus {
                score += hp.structure_chorus_bonus;
            }
            StructureScore {
                score: clamp_score(score),
                stanzas: n,
                chorus,
            }
        }
    }
}

pub fn analyze_complexity(lyric: &Lyric, hp: &Hyperparameters) -> ComplexityReport {
    let words: Vec<&str> = lyric.words().map(|w| w.normalized.as_str()).collect();
    let total = words.len();

    let positive_hits = words.iter().filter(|w| EMOTION_POSITIVE.contains(**w)).count();
    let negative_hits = words.iter().filter(|w| EMOTION_NEGATIVE.contains(**w)).count();
    let emotion = if total == 0 {
        0.0
    } else {
        clamp_score((positive_hits + negative_hits) as f64 / total as f64 * hp.emotion_scale)
    };

    let diversity = diversity(&words);
    let creativity = creativity(lyric);
    let structure = structure(lyric, hp);
    let score = clamp_score(mean(&[creativity, diversity, emotion, structure.score]));

    trace!(
        words = total,
        diversity,
        creativity,
        emotion,
        structure = structure.score,
        "complexity analyzed"
    );

    ComplexityReport {
        creativity,
        diversity,
        emotion,
        structure: structure.score,
        score,
        confidence: sample_confidence(total, hp.full_confidence_words),
        structure_confidence: sample_confidence(lyric.line_count(), hp.full_confidence_lines),
        mood: mood(positive_hits, negative_hits).to_string(),
        positive_hits,
        negative_hits,
        stanza_count: structure.stanzas,
        chorus_detected: structure.chorus,
    }
}
