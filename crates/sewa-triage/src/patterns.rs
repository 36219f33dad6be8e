use std::sync::LazyLock;

use regex::Regex;

/// An ordered set of alternation patterns that all count toward one tier.
pub struct PatternGroup {
    patterns: Vec<Regex>,
}

impl PatternGroup {
    /// Total non-overlapping matches across every pattern in the group.
    pub fn count(&self, text: &str) -> u32 {
        self.patterns
            .iter()
            .map(|re| re.find_iter(text).count() as u32)
            .sum()
    }
}

/// A single-concept pattern backing one [`FeatureVector`] flag.
///
/// [`FeatureVector`]: sewa_core::models::symptom::FeatureVector
pub struct SymptomPattern {
    regex: Regex,
}

impl SymptomPattern {
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

pub static URGENT_GROUP: LazyLock<PatternGroup> = LazyLock::new(|| {
    group(&[
        "chest pain|heart attack|cardiac|छाती दुख्छ|हृदय",
        "difficulty breathing|can't breathe|suffocating|सास फेर्न गाह्रो",
        "severe|intense|unbearable|emergency|गंभीर|आपत्कालीन",
        "stroke|bleeding|unconscious|poisoning|बेहोस|रक्तस्राव",
    ])
});

pub static MODERATE_GROUP: LazyLock<PatternGroup> = LazyLock::new(|| {
    group(&[
        "fever|temperature|hot|ज्वरो|ताप",
        "headache|head pain|टाउको दुखाइ",
        "nausea|vomiting|sick|वमन|छाती दुखाइ",
        "cough|fatigue|weakness|खोकी|थकान|कमजोरी",
    ])
});

pub static ROUTINE_GROUP: LazyLock<PatternGroup> = LazyLock::new(|| {
    group(&[
        "routine|checkup|consultation|नियमित|जाँच",
        "mild|minor|हल्का|सानो",
        "cold|skin rash|रूखो|छाला",
    ])
});

pub static FEVER: LazyLock<SymptomPattern> =
    LazyLock::new(|| symptom("fever|temperature|hot|ज्वरो"));
pub static CHEST_PAIN: LazyLock<SymptomPattern> =
    LazyLock::new(|| symptom("chest|heart|cardiac|छाती"));
pub static BREATHING_DIFFICULTY: LazyLock<SymptomPattern> =
    LazyLock::new(|| symptom("breathing|breath|respiratory|सास"));
pub static SEVERE_PAIN: LazyLock<SymptomPattern> =
    LazyLock::new(|| symptom("severe|intense|unbearable|गंभीर"));
pub static BLEEDING: LazyLock<SymptomPattern> =
    LazyLock::new(|| symptom("bleeding|blood|hemorrhage|रक्त"));
pub static HEADACHE: LazyLock<SymptomPattern> =
    LazyLock::new(|| symptom("headache|head pain|टाउको"));
pub static NAUSEA: LazyLock<SymptomPattern> =
    LazyLock::new(|| symptom("nausea|vomiting|sick|वमन"));
pub static DIZZINESS: LazyLock<SymptomPattern> =
    LazyLock::new(|| symptom("dizzy|dizziness|vertigo|चक्कर"));

/// Severity modifiers and their weights. Each entry counts once when it
/// appears anywhere in the text, including inside longer words.
pub const SEVERITY_MODIFIERS: &[(&str, i32)] = &[
    // high
    ("high", 2),
    ("severe", 2),
    ("intense", 2),
    ("unbearable", 2),
    ("गंभीर", 2),
    // moderate
    ("moderate", 1),
    ("some", 1),
    ("mild", 1),
    ("हल्का", 1),
    // low
    ("low", -1),
    ("slight", -1),
    ("minor", -1),
    ("सानो", -1),
];

fn group(alternations: &[&str]) -> PatternGroup {
    PatternGroup {
        patterns: alternations.iter().map(|alt| bounded(alt)).collect(),
    }
}

fn symptom(alternation: &str) -> SymptomPattern {
    SymptomPattern {
        regex: bounded(alternation),
    }
}

fn bounded(alternation: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("invalid symptom regex pattern")
}
