use std::collections::HashSet;

use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Der,
    Die,
    Das,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Der => "der",
            Gender::Die => "die",
            Gender::Das => "das",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "der" | "m" | "masculine" => Some(Gender::Der),
            "die" | "f" | "feminine" => Some(Gender::Die),
            "das" | "n" | "neuter" => Some(Gender::Das),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenderNoun {
    pub noun: String,
    pub gender: Gender,
    pub plural: String,
    pub meaning: String,
    pub category: String,
    pub difficulty: i32,
}

// One quiz round: every noun comes up once before any repeats. The score is
// per process, not persisted.
pub struct GenderQuiz {
    nouns: Vec<GenderNoun>,
    used: HashSet<usize>,
    current: Option<usize>,
    answered: bool,
    pub correct: u32,
    pub total: u32,
}

impl GenderQuiz {
    pub fn new(nouns: Vec<GenderNoun>) -> Self {
        GenderQuiz {
            nouns,
            used: HashSet::new(),
            current: None,
            answered: false,
            correct: 0,
            total: 0,
        }
    }

    pub fn current(&self) -> Option<&GenderNoun> {
        self.current.and_then(|idx| self.nouns.get(idx))
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn next_noun<R: Rng>(&mut self, rng: &mut R) -> Option<&GenderNoun> {
        if self.nouns.is_empty() {
            return None;
        }
        if self.used.len() >= self.nouns.len() {
            self.used.clear();
        }

        let available: Vec<usize> = (0..self.nouns.len())
            .filter(|idx| !self.used.contains(idx))
            .collect();
        let pick = available[rng.gen_range(0..available.len())];

        self.current = Some(pick);
        self.answered = false;
        self.nouns.get(pick)
    }

    // Scores the current noun once; repeat calls return None until the next
    // noun is drawn.
    pub fn answer(&mut self, guess: Gender) -> Option<bool> {
        if self.answered {
            return None;
        }
        let idx = self.current?;
        let is_correct = self.nouns[idx].gender == guess;

        self.total += 1;
        if is_correct {
            self.correct += 1;
        }
        self.used.insert(idx);
        self.answered = true;
        Some(is_correct)
    }

    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.correct as f64 / self.total as f64) * 100.0
        }
    }
}
