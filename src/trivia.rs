use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::store::{get_json, put_json, KeyValueStore, StoreError};

pub const KEY_FAVORITES: &str = "trivia-favorites";

// How many recently shown facts to hold back from the draw
const HISTORY_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Country {
    Germany,
    Austria,
    Switzerland,
}

impl Country {
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Germany => "germany",
            Country::Austria => "austria",
            Country::Switzerland => "switzerland",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "germany" | "de" | "deutschland" => Some(Country::Germany),
            "austria" | "at" | "österreich" | "oesterreich" => Some(Country::Austria),
            "switzerland" | "ch" | "schweiz" => Some(Country::Switzerland),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Country::Germany => "Germany",
            Country::Austria => "Austria",
            Country::Switzerland => "Switzerland",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TriviaFact {
    pub id: u32,
    pub title: String,
    pub fact: String,
    pub country: Country,
    pub category: String,
    pub difficulty: i32,
    pub fun_rating: i32,
    pub source: Option<String>,
}

// Deck with a short memory: a fact shown recently stays out of the draw
// until the rest of the pool has had its turn.
pub struct TriviaDeck {
    facts: Vec<TriviaFact>,
    history: Vec<u32>,
    pub filter: Option<Country>,
}

impl TriviaDeck {
    pub fn new(facts: Vec<TriviaFact>) -> Self {
        TriviaDeck {
            facts,
            history: Vec::new(),
            filter: None,
        }
    }

    pub fn facts(&self) -> &[TriviaFact] {
        &self.facts
    }

    pub fn fact_by_id(&self, id: u32) -> Option<&TriviaFact> {
        self.facts.iter().find(|f| f.id == id)
    }

    pub fn cycle_filter(&mut self) {
        self.filter = match self.filter {
            None => Some(Country::Germany),
            Some(Country::Germany) => Some(Country::Austria),
            Some(Country::Austria) => Some(Country::Switzerland),
            Some(Country::Switzerland) => None,
        };
    }

    pub fn next_fact<R: Rng>(&mut self, rng: &mut R) -> Option<&TriviaFact> {
        let pool: Vec<usize> = self
            .facts
            .iter()
            .enumerate()
            .filter(|(_, f)| self.filter.map(|c| f.country == c).unwrap_or(true))
            .map(|(idx, _)| idx)
            .collect();

        if pool.is_empty() {
            return None;
        }

        let unseen: Vec<usize> = pool
            .iter()
            .copied()
            .filter(|idx| !self.history.contains(&self.facts[*idx].id))
            .collect();
        let candidates = if unseen.is_empty() { &pool } else { &unseen };

        let pick = candidates[rng.gen_range(0..candidates.len())];
        self.history.push(self.facts[pick].id);
        if self.history.len() > HISTORY_LIMIT {
            self.history.remove(0);
        }

        self.facts.get(pick)
    }
}

// Favorites operations

pub fn load_favorites<S: KeyValueStore>(store: &S) -> Vec<u32> {
    get_json(store, KEY_FAVORITES).unwrap_or_default()
}

pub fn is_favorite<S: KeyValueStore>(store: &S, id: u32) -> bool {
    load_favorites(store).contains(&id)
}

// Returns whether the fact is a favorite after the toggle
pub fn toggle_favorite<S: KeyValueStore>(store: &mut S, id: u32) -> Result<bool, StoreError> {
    let mut favorites = load_favorites(store);
    let added = match favorites.iter().position(|f| *f == id) {
        Some(pos) => {
            favorites.remove(pos);
            false
        }
        None => {
            favorites.push(id);
            true
        }
    };
    put_json(store, KEY_FAVORITES, &favorites)?;
    Ok(added)
}
