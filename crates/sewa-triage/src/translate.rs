//! Nepali → English medical lexicon.
//!
//! Replacement is sequential over [`LEXICON`], so an entry must never
//! contain an entry declared before it: multi-word phrases and longer
//! compounds come first, their constituent words after.

use tracing::debug;

pub const LEXICON: &[(&str, &str)] = &[
    // pain and symptoms
    ("छाती दुख्छ", "chest pain"),
    ("छाती दुखाइ", "chest pain"),
    ("सास फेर्न गाह्रो छ", "difficulty breathing"),
    ("सास फेर्न गाह्रो", "difficulty breathing"),
    ("टाउको दुखाइ", "headache"),
    ("टाउको दुख्छ", "headache"),
    ("पेट दुखाइ", "stomach pain"),
    ("पेट दुख्छ", "stomach pain"),
    ("ढाड दुखाइ", "back pain"),
    ("ढाड दुख्छ", "back pain"),
    ("चक्कर आउँछ", "dizziness"),
    ("ज्वरो", "fever"),
    ("ताप", "fever"),
    ("वमन", "vomiting"),
    ("उल्टी", "vomiting"),
    ("चक्कर", "dizziness"),
    ("थकान", "fatigue"),
    ("थकाइ", "fatigue"),
    ("कमजोरी", "weakness"),
    ("गंभीर", "severe"),
    ("हल्का", "mild"),
    ("सानो", "minor"),
    ("रक्तस्राव", "bleeding"),
    ("रगत", "bleeding"),
    ("बेहोस", "unconscious"),
    ("खोकी", "cough"),
    ("नियमित", "routine"),
    ("जाँच", "checkup"),
    ("परामर्श", "consultation"),
    // body parts
    ("छाती", "chest"),
    ("टाउको", "head"),
    ("पेट", "stomach"),
    ("ढाड", "back"),
    ("हात", "hand"),
    ("खुट्टा", "leg"),
    ("आँखा", "eye"),
    ("कान", "ear"),
    ("नाक", "nose"),
    ("मुख", "mouth"),
    // conditions
    ("हृदयघात", "heart attack"),
    ("हृदय", "heart"),
    ("मधुमेह", "diabetes"),
    ("रक्तचाप", "blood pressure"),
    ("अस्थमा", "asthma"),
    ("अल्सर", "ulcer"),
    ("क्यान्सर", "cancer"),
    ("संक्रमण", "infection"),
    ("एलर्जी", "allergy"),
    // severity and urgency
    ("आपत्कालीन", "emergency"),
    ("तत्काल", "immediate"),
    ("धेरै", "very"),
    ("अलि", "little"),
    ("कम", "less"),
    ("बढी", "more"),
    // time
    ("लामो समय", "long time"),
    ("छोटो समय", "short time"),
    ("आज", "today"),
    ("हिजो", "yesterday"),
    ("भोलि", "tomorrow"),
    ("हाल", "recently"),
];

/// Replace every known Nepali term in `text` with its English equivalent.
///
/// Text without lexicon entries is returned unchanged.
pub fn translate(text: &str) -> String {
    let mut translated = text.to_string();
    for (nepali, english) in LEXICON {
        if translated.contains(nepali) {
            translated = translated.replace(nepali, english);
        }
    }
    debug!(original = %text, translated = %translated, "translated symptom text");
    translated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_entry_contains_an_earlier_entry() {
        for (i, (earlier, _)) in LEXICON.iter().enumerate() {
            for (later, _) in &LEXICON[i + 1..] {
                assert!(
                    !later.contains(earlier),
                    "'{later}' is shadowed by earlier entry '{earlier}'"
                );
            }
        }
    }

    #[test]
    fn no_duplicate_keys() {
        for (i, (key, _)) in LEXICON.iter().enumerate() {
            assert!(
                LEXICON[i + 1..].iter().all(|(other, _)| other != key),
                "duplicate lexicon key '{key}'"
            );
        }
    }
}
