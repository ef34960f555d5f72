// Shared domain types. Some accessors exist for one surface only (CLI, TUI or
// persisted blobs), so dead_code is allowed at module level.
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Self-assessed outcome of showing one card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewStatus {
    Mastered,
    Learning,
    NeedsPractice,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Mastered => "mastered",
            ReviewStatus::Learning => "learning",
            ReviewStatus::NeedsPractice => "needs-practice",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mastered" | "m" | "got-it" | "gotit" | "easy" => Some(ReviewStatus::Mastered),
            "learning" | "l" | "not-quite" | "notquite" | "ok" => Some(ReviewStatus::Learning),
            "needs-practice" | "practice" | "p" | "repeat" | "r" | "again" | "hard" => {
                Some(ReviewStatus::NeedsPractice)
            }
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReviewStatus::Mastered => "Mastered",
            ReviewStatus::Learning => "Learning",
            ReviewStatus::NeedsPractice => "Needs Practice",
        }
    }
}

// Which side of a card is the question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudyDirection {
    GermanToEnglish,
    EnglishToGerman,
}

impl StudyDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudyDirection::GermanToEnglish => "german-to-english",
            StudyDirection::EnglishToGerman => "english-to-german",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "german-to-english" | "de-en" | "de" | "german" => {
                Some(StudyDirection::GermanToEnglish)
            }
            "english-to-german" | "en-de" | "en" | "english" => {
                Some(StudyDirection::EnglishToGerman)
            }
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StudyDirection::GermanToEnglish => "German to English",
            StudyDirection::EnglishToGerman => "English to German",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            StudyDirection::GermanToEnglish => StudyDirection::EnglishToGerman,
            StudyDirection::EnglishToGerman => StudyDirection::GermanToEnglish,
        }
    }
}

fn default_difficulty() -> i32 {
    2
}

// One flashcard. Immutable per catalog load; the id is derived from the prompt
// so review history survives a reload of the same material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyItem {
    pub id: String,
    pub prompt: String,
    pub answer: String,
    pub category: Option<String>,
    #[serde(default = "default_difficulty")]
    pub difficulty: i32,
}

impl StudyItem {
    pub fn front(&self, direction: StudyDirection) -> &str {
        match direction {
            StudyDirection::GermanToEnglish => &self.prompt,
            StudyDirection::EnglishToGerman => &self.answer,
        }
    }

    pub fn back(&self, direction: StudyDirection) -> &str {
        match direction {
            StudyDirection::GermanToEnglish => &self.answer,
            StudyDirection::EnglishToGerman => &self.prompt,
        }
    }

    pub fn difficulty_label(&self) -> &'static str {
        match self.difficulty {
            1 => "Basic",
            2 => "Easy",
            3 => "Medium",
            4 => "Hard",
            5 => "Advanced",
            _ => "Unknown",
        }
    }
}

// Review state for one card. At most one record per item id; created on the
// first assessment and updated in place on every later one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub item_id: String,
    pub last_seen_at: DateTime<Utc>,
    pub status: ReviewStatus,
    pub streak: u32,
}

// One day's study queue. The cursor walks the sequence once; a card marked
// needs-practice is appended again so it comes back at the end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub date: String,
    pub item_ids: Vec<String>,
    pub target_len: usize,
    pub cursor: usize,
}

impl Session {
    pub fn new(date: String, item_ids: Vec<String>, target_len: usize) -> Self {
        Self {
            date,
            item_ids,
            target_len,
            cursor: 0,
        }
    }

    pub fn current_id(&self) -> Option<&str> {
        self.item_ids.get(self.cursor).map(|s| s.as_str())
    }

    pub fn advance(&mut self) {
        if self.cursor < self.item_ids.len() {
            self.cursor += 1;
        }
    }

    pub fn requeue(&mut self, item_id: String) {
        self.item_ids.push(item_id);
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.item_ids.len()
    }

    pub fn len(&self) -> usize {
        self.item_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_ids.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.item_ids.len().saturating_sub(self.cursor)
    }
}

// User preferences. Serde defaults keep old blobs readable when fields are
// added.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub cards_per_day: usize,
    pub direction: StudyDirection,
    pub sheet_url: Option<String>,
    pub auto_advance: bool,
    pub show_pronunciation: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cards_per_day: 20,
            direction: StudyDirection::GermanToEnglish,
            sheet_url: None,
            auto_advance: false,
            show_pronunciation: true,
        }
    }
}

// JSON output wrapper for CLI
#[derive(Debug, Serialize)]
pub struct JsonOutput<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}
