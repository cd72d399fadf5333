//! Bundled word lists, built once per process and read-only afterwards.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// High-frequency English words plus stock lyric vocabulary. A word outside
/// this list counts as "rare" for the creativity score.
const COMMON_WORD_LIST: &[&str] = &[
    // Function words
    "a", "about", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "around", "as", "at", "away", "back", "be", "because", "been", "before", "being",
    "below", "between", "both", "but", "by", "can", "can't", "cannot", "could", "did",
    "didn't", "do", "does", "doesn't", "don't", "down", "each", "even", "ever", "every",
    "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "i'd", "i'll", "i'm", "i've", "if",
    "in", "into", "is", "isn't", "it", "it's", "its", "itself", "just", "let", "let's",
    "like", "me", "more", "most", "my", "myself", "never", "no", "nor", "not", "now", "of",
    "off", "oh", "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own",
    "same", "she", "should", "so", "some", "still", "such", "than", "that", "that's",
    "the", "their", "them", "then", "there", "these", "they", "this", "those", "through",
    "till", "to", "too", "under", "until", "up", "us", "very", "was", "wasn't", "we",
    "we're", "were", "what", "when", "where", "which", "while", "who", "why", "will",
    "with", "won't", "would", "yeah", "yes", "you", "you're", "your", "yours", "yourself",
    // Common verbs
    "ask", "become", "believe", "bring", "call", "came", "come", "feel", "felt",
    "find", "found", "get", "give", "go", "goes", "going", "gone", "got", "gonna", "hear",
    "help", "hold", "keep", "knew", "know", "leave", "left", "live", "look", "lose", "made",
    "make", "mean", "meet", "move", "need", "play", "put", "run", "said", "saw", "say",
    "see", "seem", "show", "sing", "stay", "stop", "take", "talk", "tell", "think", "told",
    "took", "try", "turn", "wait", "walk", "want", "wanna", "watch", "went", "work",
    // Common nouns
    "baby", "day", "days", "eyes", "face", "friend", "girl", "hand", "hands", "head",
    "heart", "home", "house", "life", "light", "love", "man", "mind", "money", "night",
    "nothing", "people", "place", "road", "side", "something", "song", "soul", "sun",
    "thing", "things", "time", "way", "world", "year", "years",
    // Common modifiers
    "bad", "big", "cold", "good", "great", "little", "long", "new", "old", "right", "small",
    "true", "well", "one", "two", "first", "last", "always", "far", "tonight", "today",
    "together", "alone", "high", "low",
];

pub static COMMON_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| COMMON_WORD_LIST.iter().copied().collect());

pub static EMOTION_POSITIVE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "love", "loved", "loving", "happy", "joy", "smile", "smiling", "hope", "dream",
        "dreams", "shine", "bright", "sweet", "free", "alive", "glory", "bliss", "laugh",
        "laughing", "kiss", "warm", "beautiful", "heaven", "peace", "proud", "delight",
        "grateful", "glow", "wonder", "thrill",
    ]
    .into_iter()
    .collect()
});

pub static EMOTION_NEGATIVE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "hate", "cry", "crying", "cried", "tears", "pain", "hurt", "broken", "lonely", "alone",
        "fear", "afraid", "sad", "sorrow", "grief", "lost", "die", "dying", "dead", "bleed",
        "scream", "angry", "rage", "regret", "sorry", "empty", "cold", "dark", "darkness",
        "goodbye", "ache", "wound",
    ]
    .into_iter()
    .collect()
});

/// Words that suggest tempo or intensity.
pub static HIGH_ENERGY: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "fire", "burn", "burning", "run", "running", "jump", "dance", "dancing", "party",
        "loud", "wild", "fight", "shout", "scream", "rage", "fast", "faster", "rush", "blast",
        "boom", "bang", "explode", "electric", "thunder", "lightning", "crash", "rock", "hype",
        "go", "move", "higher", "louder", "turn", "up", "now", "tonight", "alive",
    ]
    .into_iter()
    .collect()
});

/// Words too common to count as an echo in the repetition cadence.
pub static FILLER: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "to", "of", "in", "on", "at", "i", "you", "me",
        "my", "your", "it", "is", "be", "we", "for", "with", "that", "this",
    ]
    .into_iter()
    .collect()
});

pub fn is_common(word: &str) -> bool {
    COMMON_WORDS.contains(word)
}
