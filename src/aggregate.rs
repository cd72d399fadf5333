use std::collections::HashSet;

use serde::Serialize;
use serde_json::{json, Value};

use crate::complexity::ComplexityReport;
use crate::config::Hyperparameters;
use crate::energy::EnergyReport;
use crate::rhyme::FlowReport;
use crate::score::{clamp_score, mean, round1, ScoreDimension, NEUTRAL_MIDPOINT, SCORE_MAX};
use crate::tokenize::Lyric;

pub const DIMENSION_NAMES: [&str; 5] = ["complexity", "rhyme", "flow", "energy", "structure"];

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Mean of the five dimension scores.
    pub headline: f64,
    /// Radar order: complexity, rhyme, flow, energy, structure.
    pub dimensions: Vec<ScoreDimension>,
    pub unique_words: usize,
    pub lexical_diversity: f64,
    pub total_syllables: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub word_count: usize,
    pub line_count: usize,
    pub syllable_count: usize,
    pub scheme: String,
    pub stanza_count: usize,
    pub estimated_minutes: usize,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub complexity: ComplexityReport,
    pub flow: FlowReport,
    pub energy: EnergyReport,
    pub dashboard: Dashboard,
    pub insights: Vec<String>,
    pub metadata: Metadata,
}

/// One stored row per dimension, the shape the persistence layer keeps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRow {
    #[serde(rename = "type")]
    pub row_type: String,
    pub score: f64,
    pub confidence: f64,
    pub details: Value,
}

impl AnalysisResult {
    pub fn dimension(&self, name: &str) -> Option<&ScoreDimension> {
        self.dashboard.dimensions.iter().find(|d| d.name == name)
    }

    pub fn score_rows(&self) -> Vec<ScoreRow> {
        self.dashboard
            .dimensions
            .iter()
            .map(|d| ScoreRow {
                row_type: d.name.clone(),
                score: d.score,
                confidence: d.confidence,
                details: d.details.clone(),
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Insights
// ---------------------------------------------------------------------------

fn insight_for(name: &str, score: f64, high: bool) -> String {
    match (name, high) {
        ("complexity", true) => {
            format!("Vocabulary is varied and inventive (complexity {score}).")
        }
        ("complexity", false) => {
            format!("Language is plain and repetitive; try fresher word choices (complexity {score}).")
        }
        ("rhyme", true) => format!("Most line endings pair up in rhyme (rhyme {score})."),
        ("rhyme", false) => {
            format!("Few line endings rhyme; consider tightening the scheme (rhyme {score}).")
        }
        ("flow", true) => format!("Syllable counts are steady from line to line (flow {score})."),
        ("flow", false) => {
            format!("Syllable counts swing between lines, so the flow may feel uneven (flow {score}).")
        }
        ("energy", true) => {
            format!("High energy from exclamations, hooks and driving words (energy {score}).")
        }
        ("energy", false) => format!("Calm, low-key energy throughout (energy {score})."),
        ("structure", true) => format!("Clear verse/chorus sections (structure {score})."),
        ("structure", false) => format!(
            "Little sectional structure; blank lines between verses and a repeated chorus would help (structure {score})."
        ),
        (other, true) => format!("{other} is well above average ({score})."),
        (other, false) => format!("{other} is well below average ({score})."),
    }
}

/// One observation per dimension deviating from the midpoint by more than
/// `threshold`, largest deviation first. Dimensions with no supporting data
/// (confidence 0) are skipped.
pub fn build_insights(dimensions: &[ScoreDimension], threshold: f64) -> Vec<String> {
    let mut flagged: Vec<(&ScoreDimension, f64)> = dimensions
        .iter()
        .filter(|d| d.confidence > 0.0)
        .map(|d| (d, d.score - NEUTRAL_MIDPOINT))
        .filter(|(_, dev)| dev.abs() > threshold)
        .collect();
    // Stable sort keeps radar order on ties.
    flagged.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()));
    flagged
        .into_iter()
        .map(|(d, dev)| insight_for(&d.name, d.score, dev > 0.0))
        .collect()
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

fn clamp_reports(complexity: &mut ComplexityReport, flow: &mut FlowReport, energy: &mut EnergyReport) {
    for v in [
        &mut complexity.creativity,
        &mut complexity.diversity,
        &mut complexity.emotion,
        &mut complexity.structure,
        &mut complexity.score,
        &mut complexity.confidence,
        &mut complexity.structure_confidence,
        &mut flow.consistency,
        &mut flow.rhyme,
        &mut flow.confidence,
        &mut energy.level,
        &mut energy.confidence,
        &mut energy.signals.punctuation,
        &mut energy.signals.repetition,
        &mut energy.signals.vocabulary,
    ] {
        *v = clamp_score(*v);
    }
}

fn dimensions(complexity: &ComplexityReport, flow: &FlowReport, energy: &EnergyReport) -> Vec<ScoreDimension> {
    let letters: Vec<&str> = flow.per_line.iter().map(|l| l.letter.as_str()).collect();
    vec![
        ScoreDimension::new(
            "complexity",
            complexity.score,
            complexity.confidence,
            json!({
                "creativity": complexity.creativity,
                "diversity": complexity.diversity,
                "emotion": complexity.emotion,
                "structure": complexity.structure,
                "mood": complexity.mood,
            }),
        ),
        ScoreDimension::new(
            "rhyme",
            flow.rhyme,
            flow.confidence,
            json!({
                "scheme": flow.scheme,
                "letters": letters,
                "variety": flow.rhyme_variety,
            }),
        ),
        ScoreDimension::new(
            "flow",
            flow.consistency,
            flow.confidence,
            json!({
                "perLine": flow.per_line,
                "avgSyllables": flow.avg_syllables,
                "stressPoints": flow.stress_points,
            }),
        ),
        ScoreDimension::new(
            "energy",
            energy.level,
            energy.confidence,
            json!({
                "signals": energy.signals,
                "persona": energy.persona,
                "intensity": energy.intensity,
            }),
        ),
        ScoreDimension::new(
            "structure",
            complexity.structure,
            complexity.structure_confidence,
            json!({
                "stanzas": complexity.stanza_count,
                "chorus": complexity.chorus_detected,
            }),
        ),
    ]
}

pub fn assemble(
    lyric: &Lyric,
    mut complexity: ComplexityReport,
    mut flow: FlowReport,
    mut energy: EnergyReport,
    hp: &Hyperparameters,
) -> AnalysisResult {
    clamp_reports(&mut complexity, &mut flow, &mut energy);

    let dimensions = dimensions(&complexity, &flow, &energy);
    let scores: Vec<f64> = dimensions.iter().map(|d| d.score).collect();
    let insights = build_insights(&dimensions, hp.insight_threshold);

    let word_count = lyric.word_count();
    let unique_words = lyric
        .words()
        .map(|w| w.normalized.as_str())
        .collect::<HashSet<_>>()
        .len();
    let lexical_diversity = if word_count == 0 {
        0.0
    } else {
        round1(unique_words as f64 / word_count as f64 * SCORE_MAX)
    };
    let syllable_count = lyric.syllable_count();

    let dashboard = Dashboard {
        headline: clamp_score(mean(&scores)),
        dimensions,
        unique_words,
        lexical_diversity,
        total_syllables: syllable_count,
    };

    let metadata = Metadata {
        word_count,
        line_count: lyric.line_count(),
        syllable_count,
        scheme: flow.scheme.clone(),
        stanza_count: complexity.stanza_count,
        estimated_minutes: word_count.div_ceil(hp.words_per_minute.max(1)),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    AnalysisResult {
        complexity,
        flow,
        energy,
        dashboard,
        insights,
        metadata,
    }
}
