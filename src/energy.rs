use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::trace;

use crate::config::Hyperparameters;
use crate::lexicon::{FILLER, HIGH_ENERGY};
use crate::score::{clamp_score, sample_confidence};
use crate::tokenize::Lyric;

// Composite weights, not configurable. They sum to 1.
pub const PUNCTUATION_WEIGHT: f64 = 0.40;
pub const REPETITION_WEIGHT: f64 = 0.35;
pub const VOCABULARY_WEIGHT: f64 = 0.25;

// Split of the repetition signal between word, phrase and whole-line echoes.
const WORD_ECHO_SHARE: f64 = 40.0;
const PHRASE_ECHO_SHARE: f64 = 25.0;
const LINE_ECHO_SHARE: f64 = 35.0;

// Phrase lengths checked for echoes, in words.
const PHRASE_MIN_N: usize = 2;
const PHRASE_MAX_N: usize = 3;

static CAPS_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Z]{2,}\b").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergySignals {
    pub punctuation: f64,
    pub repetition: f64,
    pub vocabulary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyReport {
    pub level: f64,
    pub confidence: f64,
    pub signals: EnergySignals,
    pub persona: String,
    pub intensity: String,
    pub exclamations: usize,
    pub caps_words: usize,
}

// ---------------------------------------------------------------------------
// Signals
// ---------------------------------------------------------------------------

pub fn punctuation_signal(text: &str, word_count: usize, scale: f64) -> (f64, usize, usize) {
    let exclamations = text.matches('!').count();
    let caps_words = CAPS_WORD_RE.find_iter(text).count();
    if word_count == 0 {
        return (0.0, exclamations, caps_words);
    }
    let density = (exclamations + caps_words) as f64 / word_count as f64;
    (clamp_score(density * scale), exclamations, caps_words)
}

/// Share of non-filler words already heard within the preceding `window` words.
fn word_echo(words: &[&str], window: usize) -> f64 {
    let mut candidates = 0usize;
    let mut echoes = 0usize;
    for (i, word) in words.iter().enumerate() {
        if FILLER.contains(*word) {
            continue;
        }
        candidates += 1;
        if words[i.saturating_sub(window)..i].contains(word) {
            echoes += 1;
        }
    }
    if candidates == 0 {
        return 0.0;
    }
    echoes as f64 / candidates as f64
}

/// Share of 2- and 3-word phrases that already started within the preceding
/// `window` words. Phrases made only of filler are not counted.
fn phrase_echo(words: &[&str], window: usize) -> f64 {
    let mut candidates = 0usize;
    let mut echoes = 0usize;
    for n in PHRASE_MIN_N..=PHRASE_MAX_N {
        if words.len() < n {
            continue;
        }
        for i in 0..=words.len() - n {
            let gram = &words[i..i + n];
            if gram.iter().all(|w| FILLER.contains(*w)) {
                continue;
            }
            candidates += 1;
            if (i.saturating_sub(window)..i).any(|j| &words[j..j + n] == gram) {
                echoes += 1;
            }
        }
    }
    if candidates == 0 {
        return 0.0;
    }
    echoes as f64 / candidates as f64
}

/// Share of lines equal to one of the previous `window` lines.
fn line_echo(lines: &[String], window: usize) -> f64 {
    if lines.is_empty() {
        return 0.0;
    }
    let echoes = lines
        .iter()
        .enumerate()
        .filter(|(i, line)| lines[i.saturating_sub(window)..*i].contains(line))
        .count();
    echoes as f64 / lines.len() as f64
}

pub fn repetition_signal(lyric: &Lyric, hp: &Hyperparameters) -> f64 {
    let words: Vec<&str> = lyric.words().map(|w| w.normalized.as_str()).collect();
    let lines: Vec<String> = lyric.contributing_lines().map(|l| l.normalized_text()).collect();
    let words_part = (2.0 * word_echo(&words, hp.repetition_window)).min(1.0);
    let phrases_part = (2.0 * phrase_echo(&words, hp.repetition_window)).min(1.0);
    let lines_part = line_echo(&lines, hp.repetition_line_window);
    clamp_score(
        WORD_ECHO_SHARE * words_part
            + PHRASE_ECHO_SHARE * phrases_part
            + LINE_ECHO_SHARE * lines_part,
    )
}

pub fn vocabulary_signal(lyric: &Lyric, scale: f64) -> f64 {
    let total = lyric.word_count();
    if total == 0 {
        return 0.0;
    }
    let hits = lyric
        .words()
        .filter(|w| HIGH_ENERGY.contains(w.normalized.as_str()))
        .count();
    clamp_score(hits as f64 / total as f64 * scale)
}

pub fn combine(signals: &EnergySignals) -> f64 {
    clamp_score(
        PUNCTUATION_WEIGHT * signals.punctuation
            + REPETITION_WEIGHT * signals.repetition
            + VOCABULARY_WEIGHT * signals.vocabulary,
    )
}

pub fn persona(level: f64) -> &'static str {
    if level > 70.0 {
        "Energetic"
    } else if level > 40.0 {
        "Moderate"
    } else {
        "Calm"
    }
}

pub fn intensity(level: f64) -> &'static str {
    if level > 80.0 {
        "High"
    } else if level > 50.0 {
        "Moderate"
    } else {
        "Low"
    }
}

pub fn analyze_energy(text: &str, lyric: &Lyric, hp: &Hyperparameters) -> EnergyReport {
    let word_count = lyric.word_count();
    let (punctuation, exclamations, caps_words) =
        punctuation_signal(text, word_count, hp.punctuation_scale);
    let signals = EnergySignals {
        punctuation,
        repetition: repetition_signal(lyric, hp),
        vocabulary: vocabulary_signal(lyric, hp.vocabulary_scale),
    };
    let level = if word_count == 0 { 0.0 } else { combine(&signals) };

    trace!(
        punctuation = signals.punctuation,
        repetition = signals.repetition,
        vocabulary = signals.vocabulary,
        level,
        "energy analyzed"
    );

    EnergyReport {
        level,
        confidence: sample_confidence(word_count, hp.full_confidence_words),
        signals,
        persona: persona(level).to_string(),
        intensity: intensity(level).to_string(),
        exclamations,
        caps_words,
    }
}
