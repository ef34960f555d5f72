use chrono::{Datelike, NaiveDate};
use serde::Serialize;

// A curated word with enough context to drill it offline
#[derive(Debug, Clone, Serialize)]
pub struct WordEntry {
    pub word: String,
    pub translation: String,
    pub pronunciation: String,
    pub gender: Option<String>,
    pub word_type: String,
    pub example: String,
    pub example_translation: String,
    pub difficulty: i32,
    pub alternatives: Vec<String>,
    pub note: String,
    pub similar_examples: Vec<String>,
    pub variations: Vec<String>,
}

impl WordEntry {
    pub fn grammar_tip(&self) -> String {
        if self.word_type == "reflexive verb" {
            "Reflexive verbs always need the reflexive pronoun (mich, dich, sich, etc.)".to_string()
        } else if self.word_type.contains("verb") {
            "Remember German verb conjugations change based on the subject".to_string()
        } else if let Some(gender) = &self.gender {
            format!(
                "This is a {} noun - use appropriate articles and adjective endings",
                gender
            )
        } else {
            "Pay attention to word order in German sentences".to_string()
        }
    }

    pub fn drill(&self, mode: DrillMode) -> Drill {
        match mode {
            DrillMode::Translation => {
                let answer = if self.alternatives.len() > 1 {
                    format!(
                        "{} (also: {})",
                        self.translation,
                        self.alternatives[1..].join(", ")
                    )
                } else {
                    self.translation.clone()
                };
                Drill {
                    question: format!("What does \"{}\" mean in English?", self.word),
                    answer,
                    note: self.note.clone(),
                }
            }
            DrillMode::Example => {
                let note = if self.similar_examples.is_empty() {
                    self.note.clone()
                } else {
                    self.similar_examples.join("\n")
                };
                Drill {
                    question: format!("Translate this sentence: \"{}\"", self.example),
                    answer: self.example_translation.clone(),
                    note,
                }
            }
            DrillMode::Usage => {
                let note = if self.variations.is_empty() {
                    self.grammar_tip()
                } else {
                    self.variations.join("\n")
                };
                Drill {
                    question: format!("Use \"{}\" in a German sentence:", self.word),
                    answer: format!("Model: {}", self.example),
                    note,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DrillMode {
    Translation,
    Example,
    Usage,
}

impl DrillMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrillMode::Translation => "translation",
            DrillMode::Example => "example",
            DrillMode::Usage => "usage",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "translation" | "t" | "meaning" => Some(DrillMode::Translation),
            "example" | "e" | "sentence" => Some(DrillMode::Example),
            "usage" | "u" | "use" => Some(DrillMode::Usage),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DrillMode::Translation => "Translation",
            DrillMode::Example => "Example",
            DrillMode::Usage => "Usage",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Drill {
    pub question: String,
    pub answer: String,
    pub note: String,
}

// Each date maps deterministically onto one word, cycling through the list
// over the year.
pub fn word_for_date(words: &[WordEntry], date: NaiveDate) -> Option<&WordEntry> {
    if words.is_empty() {
        return None;
    }
    let idx = (date.ordinal() as usize) % words.len();
    words.get(idx)
}
