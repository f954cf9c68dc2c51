//! Heuristic syllable counting for Portuguese.
//!
//! Walks the word left to right over the Portuguese vowel set. A vowel pair
//! listed in [`DIPHTHONGS`] counts as a single unit and consumes both
//! characters; any other vowel counts one. This is not a dictionary: hiatus
//! pairs such as "io" in "relatório" count as two units. Every readability
//! formula is built on this count, so the table and walk order are fixed.

/// Portuguese vowels, including accented forms.
pub const VOWELS: &str = "aeiouáéíóúàãõâêô";

/// Vowel pairs that count as one syllable unit.
pub const DIPHTHONGS: &[&str] = &[
    "ai", "au", "ei", "eu", "éi", "éu", "oi", "ou", "ói", "ui", "iu", "ão", "ãe", "õe",
];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

fn is_diphthong(a: char, b: char) -> bool {
    DIPHTHONGS.iter().any(|d| {
        let mut chars = d.chars();
        chars.next() == Some(a) && chars.next() == Some(b)
    })
}

/// Count syllables in a single word.
///
/// Returns 0 for words with no vowel. A word containing a vowel always
/// counts at least 1.
pub fn count_syllables(word: &str) -> usize {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    let mut count = 0;
    let mut i = 0;

    while i < chars.len() {
        if !is_vowel(chars[i]) {
            i += 1;
            continue;
        }
        if i + 1 < chars.len() && is_diphthong(chars[i], chars[i + 1]) {
            count += 1;
            i += 2;
            continue;
        }
        count += 1;
        i += 1;
    }

    if count == 0 && chars.iter().copied().any(is_vowel) {
        return 1;
    }
    count
}

/// Sum of syllables over the whitespace-separated words of `text`.
pub fn count_text_syllables(text: &str) -> usize {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphabetic()))
        .filter(|w| !w.is_empty())
        .map(count_syllables)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_words() {
        assert_eq!(count_syllables("casa"), 2);
        assert_eq!(count_syllables("sol"), 1);
        assert_eq!(count_syllables("amanhã"), 3);
    }

    #[test]
    fn diphthongs_count_once() {
        assert_eq!(count_syllables("pão"), 1);
        assert_eq!(count_syllables("ouro"), 2);
        assert_eq!(count_syllables("pai"), 1);
        assert_eq!(count_syllables("mães"), 1);
    }

    #[test]
    fn hiatus_counts_twice() {
        // re-la-tó-ri-o by the walk; the heuristic over-counts "io".
        assert_eq!(count_syllables("relatório"), 5);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(count_syllables("CASA"), count_syllables("casa"));
    }

    #[test]
    fn no_vowels() {
        assert_eq!(count_syllables(""), 0);
        assert_eq!(count_syllables("123"), 0);
        assert_eq!(count_syllables("psst"), 0);
    }

    #[test]
    fn text_sum_ignores_punctuation() {
        assert_eq!(count_text_syllables("Casa, sol!"), 3);
    }
}
