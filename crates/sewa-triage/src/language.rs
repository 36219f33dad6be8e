//! English/Nepali language guess for symptom text.
//!
//! A heuristic, not a general language identifier: only `en` and `ne` can
//! come out of it.

use sewa_core::models::language::Language;

/// Share of Devanagari letters above which text is treated as Nepali.
const DEVANAGARI_RATIO_THRESHOLD: f64 = 0.2;

/// Common Nepali function words and verb suffixes.
const NEPALI_INDICATORS: &[&str] = &[
    "छ", "छु", "छौ", "छन्", "छिन्", "छे", "छै", "छौं", "छन्",
    "मलाई", "म", "तपाईं", "हामी", "उनी", "यो", "त्यो", "यहाँ", "त्यहाँ",
    "दुख्छ", "दुखाइ", "गाह्रो", "सजिलो", "राम्रो", "नराम्रो",
];

/// Guess whether `text` is English or Nepali.
///
/// Blank text, or text without alphabetic characters, is English.
pub fn detect(text: &str) -> Language {
    if text.trim().is_empty() {
        return Language::En;
    }

    let Some(ratio) = devanagari_ratio(text) else {
        return Language::En;
    };

    let lower = text.to_lowercase();
    let has_indicator = NEPALI_INDICATORS.iter().any(|word| lower.contains(word));

    if ratio > DEVANAGARI_RATIO_THRESHOLD || has_indicator {
        Language::Ne
    } else {
        Language::En
    }
}

/// Devanagari code points over letters, or `None` when there are no letters.
///
/// Every code point in the block counts toward the numerator, but the
/// combining signs (matras, virama, nukta) are not letters and stay out of
/// the denominator, so the ratio can exceed 1.
fn devanagari_ratio(text: &str) -> Option<f64> {
    let letters = text
        .chars()
        .filter(|c| c.is_alphabetic() && !is_devanagari_sign(*c))
        .count();
    if letters == 0 {
        return None;
    }
    let devanagari = text.chars().filter(|c| is_devanagari(*c)).count();
    Some(devanagari as f64 / letters as f64)
}

fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Combining marks of the Devanagari block (general categories Mn and Mc).
fn is_devanagari_sign(c: char) -> bool {
    matches!(
        c,
        '\u{0900}'..='\u{0903}'
            | '\u{093A}'..='\u{093C}'
            | '\u{093E}'..='\u{094F}'
            | '\u{0951}'..='\u{0957}'
            | '\u{0962}'..='\u{0963}'
    )
}
