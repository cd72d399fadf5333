use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon;
use crate::syllable::estimate_syllables;

static PUNCT_STRIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\w]+|[^\w]+$").unwrap());

static APOSTROPHE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"['\u{2018}\u{2019}`]+").unwrap());

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub raw: String,
    pub normalized: String,
    pub syllables: usize,
    /// Not found in the bundled common-word set.
    pub rare: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based position in the input, blank lines included.
    pub number: usize,
    pub raw: String,
    pub words: Vec<Word>,
}

impl Line {
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }

    pub fn syllables(&self) -> usize {
        self.words.iter().map(|w| w.syllables).sum()
    }

    pub fn last_word(&self) -> Option<&Word> {
        self.words.last()
    }

    /// Normalized words joined by single spaces, used to compare lines.
    pub fn normalized_text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.normalized.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Tokenized lyric. Built once per analysis and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lyric {
    pub lines: Vec<Line>,
}

impl Lyric {
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.lines.iter().flat_map(|l| l.words.iter())
    }

    /// Lines with at least one word. Only these feed rhyme and flow.
    pub fn contributing_lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|l| !l.words.is_empty())
    }

    /// Runs of non-blank lines separated by one or more blank lines.
    pub fn stanzas(&self) -> Vec<Vec<&Line>> {
        let mut stanzas = Vec::new();
        let mut current: Vec<&Line> = Vec::new();
        for line in &self.lines {
            if line.is_blank() {
                if !current.is_empty() {
                    stanzas.push(std::mem::take(&mut current));
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            stanzas.push(current);
        }
        stanzas
    }

    pub fn word_count(&self) -> usize {
        self.lines.iter().map(|l| l.words.len()).sum()
    }

    /// Non-blank lines, punctuation-only lines included.
    pub fn line_count(&self) -> usize {
        self.lines.iter().filter(|l| !l.is_blank()).count()
    }

    pub fn syllable_count(&self) -> usize {
        self.words().map(|w| w.syllables).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.word_count() == 0
    }
}

// ---------------------------------------------------------------------------
// Tokenization
// ---------------------------------------------------------------------------

pub fn normalize_word(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let folded = APOSTROPHE_RE.replace_all(&lowered, "'");
    PUNCT_STRIP_RE.replace_all(&folded, "").into_owned()
}

pub fn tokenize(text: &str) -> Lyric {
    let lines = text
        .lines()
        .enumerate()
        .map(|(i, raw)| {
            let words = raw
                .split_whitespace()
                .filter_map(|token| {
                    let normalized = normalize_word(token);
                    if normalized.is_empty() {
                        return None;
                    }
                    Some(Word {
                        raw: token.to_string(),
                        syllables: estimate_syllables(&normalized),
                        rare: !lexicon::is_common(&normalized),
                        normalized,
                    })
                })
                .collect();
            Line {
                number: i + 1,
                raw: raw.to_string(),
                words,
            }
        })
        .collect();
    Lyric { lines }
}
