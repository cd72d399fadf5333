use std::collections::HashMap;

use serde::Serialize;
use tracing::trace;

use crate::config::{Hyperparameters, RhymeRule};
use crate::score::{
    clamp_score, coefficient_of_variation, round2, sample_confidence, SCORE_MAX, SCORE_MIN,
};
use crate::tokenize::Lyric;

pub const SCHEME_INSUFFICIENT: &str = "insufficient-data";
pub const SCHEME_FREE_FORM: &str = "free-form";

/// Multiplier from average syllables per word to stress points.
const STRESS_PER_SYLLABLE: f64 = 1.4;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineProfile {
    pub line: usize,
    pub syllables: usize,
    pub ending_word: String,
    pub sound_key: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RhymeScheme {
    pub label: String,
    /// Share of lines whose ending rhymes with some other line, 0..=100.
    pub consistency: f64,
    /// One letter per profile, in order.
    pub letters: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRhyme {
    pub line: usize,
    pub letter: String,
    pub syllables: usize,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowReport {
    pub consistency: f64,
    pub rhyme: f64,
    pub confidence: f64,
    pub scheme: String,
    pub per_line: Vec<LineRhyme>,
    pub avg_syllables: f64,
    pub stress_points: usize,
    pub rhyme_variety: String,
}

// ---------------------------------------------------------------------------
// Profiles and keys
// ---------------------------------------------------------------------------

/// Last `window` characters of a word, or the whole word when shorter.
pub fn sound_key(word: &str, window: usize) -> String {
    let len = word.chars().count();
    word.chars().skip(len.saturating_sub(window)).collect()
}

pub fn line_profiles(lyric: &Lyric, hp: &Hyperparameters) -> Vec<LineProfile> {
    lyric
        .contributing_lines()
        .filter_map(|line| {
            let last = line.last_word()?;
            Some(LineProfile {
                line: line.number,
                syllables: line.syllables(),
                ending_word: last.normalized.clone(),
                sound_key: sound_key(&last.normalized, hp.rhyme_key_chars),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Scheme detection
// ---------------------------------------------------------------------------

/// Spreadsheet-style letters: A..Z, AA, AB, ...
pub fn letter_name(index: usize) -> String {
    let mut out = Vec::new();
    let mut idx = index;
    loop {
        out.push((b'A' + (idx % 26) as u8) as char);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }
    out.iter().rev().collect()
}

/// Greedy lettering in one pass. `seen` holds each distinct key at its first
/// occurrence, so the first match found is the earliest matching prior line.
pub fn assign_letters(profiles: &[LineProfile], rule: RhymeRule) -> Vec<String> {
    let mut seen: Vec<(&str, usize)> = Vec::new();
    let mut next_letter = 0usize;

    profiles
        .iter()
        .map(|p| {
            let key = p.sound_key.as_str();
            let found = seen
                .iter()
                .find(|(prior, _)| rule.matches(prior, key))
                .map(|&(_, idx)| idx);
            let idx = match found {
                Some(idx) => idx,
                None => {
                    next_letter += 1;
                    next_letter - 1
                }
            };
            if !seen.iter().any(|(prior, _)| *prior == key) {
                seen.push((key, idx));
            }
            letter_name(idx)
        })
        .collect()
}

fn letter_counts(letters: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for letter in letters {
        *counts.entry(letter.as_str()).or_insert(0) += 1;
    }
    counts
}

pub fn scheme_label(letters: &[String], hp: &Hyperparameters) -> String {
    if letters.len() < 2 {
        return SCHEME_INSUFFICIENT.to_string();
    }
    let lookback = &letters[..letters.len().min(hp.scheme_lookback)];
    let repeated = letter_counts(lookback).values().any(|&c| c > 1);
    if !repeated {
        return SCHEME_FREE_FORM.to_string();
    }
    letters[..letters.len().min(hp.scheme_label_lines)].concat()
}

pub fn detect_scheme(profiles: &[LineProfile], hp: &Hyperparameters) -> RhymeScheme {
    let letters = assign_letters(profiles, hp.rhyme_rule);
    let label = scheme_label(&letters, hp);
    let consistency = if letters.len() < 2 {
        SCORE_MIN
    } else {
        let counts = letter_counts(&letters);
        let rhymed = letters.iter().filter(|l| counts[l.as_str()] > 1).count();
        clamp_score(rhymed as f64 / letters.len() as f64 * SCORE_MAX)
    };
    RhymeScheme {
        label,
        consistency,
        letters,
    }
}

fn rhyme_variety(letters: &[String]) -> &'static str {
    let shared_groups = letter_counts(letters).values().filter(|&&c| c > 1).count();
    match shared_groups {
        0 | 1 => "Simple",
        2 => "Moderate",
        3 | 4 => "Complex",
        _ => "Advanced",
    }
}

// ---------------------------------------------------------------------------
// Flow
// ---------------------------------------------------------------------------

/// `100 * (1 - cv / cap)`, with cv capped. Uniform lines score 100 for any
/// cap; a cap that is not positive treats every variation as maximal.
pub fn flow_consistency(syllables: &[usize], cv_cap: f64) -> f64 {
    let values: Vec<f64> = syllables.iter().map(|&s| s as f64).collect();
    let cv = coefficient_of_variation(&values);
    if cv <= 0.0 {
        return SCORE_MAX;
    }
    if cv_cap.is_nan() || cv_cap <= 0.0 {
        return SCORE_MIN;
    }
    clamp_score(SCORE_MAX * (1.0 - cv.min(cv_cap) / cv_cap))
}

pub fn analyze_flow(lyric: &Lyric, hp: &Hyperparameters) -> FlowReport {
    let profiles = line_profiles(lyric, hp);
    let scheme = detect_scheme(&profiles, hp);

    let word_count = lyric.word_count();
    let avg_syllables = if word_count == 0 {
        0.0
    } else {
        round2(lyric.syllable_count() as f64 / word_count as f64)
    };
    let stress_points = (avg_syllables * STRESS_PER_SYLLABLE).floor() as usize;

    let per_line: Vec<LineRhyme> = profiles
        .iter()
        .zip(&scheme.letters)
        .map(|(p, letter)| LineRhyme {
            line: p.line,
            letter: letter.clone(),
            syllables: p.syllables,
            key: p.sound_key.clone(),
        })
        .collect();

    let (consistency, confidence) = if profiles.len() < 2 {
        (clamp_score(hp.flow_neutral), SCORE_MIN)
    } else {
        let syllables: Vec<usize> = profiles.iter().map(|p| p.syllables).collect();
        (
            flow_consistency(&syllables, hp.flow_cv_cap),
            sample_confidence(profiles.len(), hp.full_confidence_lines),
        )
    };

    trace!(
        lines = profiles.len(),
        scheme = %scheme.label,
        rhyme = scheme.consistency,
        consistency,
        "flow analyzed"
    );

    FlowReport {
        consistency,
        rhyme: scheme.consistency,
        confidence,
        rhyme_variety: rhyme_variety(&scheme.letters).to_string(),
        scheme: scheme.label,
        per_line,
        avg_syllables,
        stress_points,
    }
}
