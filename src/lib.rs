//! Rule-based lyric scoring.
//!
//! [`analyze`] turns raw lyric text into scores for complexity, rhyme, flow,
//! energy and structure, plus a dashboard summary and ranked insights. The
//! pipeline is deterministic and does no I/O: identical text always yields an
//! identical [`AnalysisResult`].
//!
//! ```
//! let result = lyric_scope::analyze("I saw a cat\nit wore a hat");
//! assert_eq!(result.flow.scheme, "AA");
//! assert!(result.dashboard.headline <= 100.0);
//! ```

pub mod aggregate;
pub mod complexity;
pub mod config;
pub mod energy;
pub mod error;
pub mod lexicon;
pub mod rhyme;
pub mod score;
pub mod syllable;
pub mod tokenize;

use tracing::debug;

pub use aggregate::{build_insights, AnalysisResult, Dashboard, Metadata, ScoreRow};
pub use complexity::ComplexityReport;
pub use config::{Hyperparameters, RhymeRule};
pub use energy::{EnergyReport, EnergySignals};
pub use error::{ConfigError, ConfigResult};
pub use rhyme::{FlowReport, LineProfile, LineRhyme, RhymeScheme};
pub use score::ScoreDimension;
pub use tokenize::{tokenize, Line, Lyric, Word};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Analyze `text` with the default tunables.
pub fn analyze(text: &str) -> AnalysisResult {
    analyze_with(text, &Hyperparameters::DEFAULT)
}

/// Analyze `text` with caller-supplied tunables.
///
/// Never fails. Empty or whitespace-only text yields zero scores (flow sits
/// at `hp.flow_neutral`), confidence 0 everywhere and no insights.
/// Tunables that [`Hyperparameters::validate`] would reject still produce a
/// result: zero divisors and NaN scores fall back to the score bounds.
pub fn analyze_with(text: &str, hp: &Hyperparameters) -> AnalysisResult {
    let lyric = tokenize::tokenize(text);
    if lyric.is_empty() {
        debug!("no words in input, returning neutral analysis");
    }

    let complexity = complexity::analyze_complexity(&lyric, hp);
    let flow = rhyme::analyze_flow(&lyric, hp);
    let energy = energy::analyze_energy(text, &lyric, hp);
    let result = aggregate::assemble(&lyric, complexity, flow, energy, hp);

    debug!(
        words = result.metadata.word_count,
        lines = result.metadata.line_count,
        scheme = %result.metadata.scheme,
        headline = result.dashboard.headline,
        insights = result.insights.len(),
        "lyrics analyzed"
    );
    result
}
