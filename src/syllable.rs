/// Heuristic syllable count for a normalized (lower-case) word.
///
/// Counts runs of vowels, treating `y` as a vowel only when neither neighbour
/// is one of `aeiou`. A silent trailing `e` is dropped unless the word ends in
/// consonant + `le` or would otherwise have no syllables. Always returns at
/// least 1. Good enough for comparing lines, not for phonetics.
pub fn estimate_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(|c| c.to_lowercase())
        .collect();
    if letters.is_empty() {
        return 1;
    }

    let vowel_at = |i: usize| -> bool {
        let c = letters[i];
        if is_core_vowel(c) {
            return true;
        }
        if c == 'y' {
            let prev = i.checked_sub(1).map(|p| letters[p]);
            let next = letters.get(i + 1).copied();
            return !prev.is_some_and(is_core_vowel) && !next.is_some_and(is_core_vowel);
        }
        false
    };

    let mut groups = 0usize;
    let mut in_group = false;
    for i in 0..letters.len() {
        let v = vowel_at(i);
        if v && !in_group {
            groups += 1;
        }
        in_group = v;
    }

    if groups > 1 && has_silent_e(&letters, &vowel_at) {
        groups -= 1;
    }

    groups.max(1)
}

fn is_core_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn has_silent_e(letters: &[char], vowel_at: &dyn Fn(usize) -> bool) -> bool {
    let n = letters.len();
    if n < 2 || letters[n - 1] != 'e' || vowel_at(n - 2) {
        return false;
    }
    // "table", "little": the final syllable is real.
    let consonant_le = n >= 3 && letters[n - 2] == 'l' && !vowel_at(n - 3);
    !consonant_le
}
