use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::models::{ReviewRecord, ReviewStatus, Session, StudyItem};
use crate::store::{get_json, put_json, KeyValueStore, StoreError};

pub const KEY_CATALOG: &str = "catalog";
pub const KEY_HISTORY: &str = "review-history";
pub const KEY_SETTINGS: &str = "settings";

pub fn session_key(date: NaiveDate) -> String {
    format!("session:{}", date.format("%Y-%m-%d"))
}

// Days a mastered card stays out of rotation, by consecutive-mastered streak.
// A mastered record with streak 0 gets the first interval.
fn interval_for_streak(streak: u32) -> i64 {
    match streak {
        0 | 1 => 3,
        2 => 7,
        3 => 14,
        _ => 30,
    }
}

fn days_since(last_seen: DateTime<Utc>, today: NaiveDate) -> i64 {
    (today - last_seen.date_naive()).num_days()
}

#[derive(Debug, Serialize)]
pub struct StudyStats {
    pub total_items: usize,
    pub new_items: usize,
    pub learning: usize,
    pub needs_practice: usize,
    pub mastered: usize,
    pub due_today: usize,
    pub avg_streak: f64,
}

// Owns the catalog, the per-item review history and the current day's
// session. The store is injected; the clock and RNG arrive per call so
// every decision is reproducible.
pub struct Scheduler<S: KeyValueStore> {
    store: S,
    catalog: Vec<StudyItem>,
    history: HashMap<String, ReviewRecord>,
    session: Option<Session>,
}

impl<S: KeyValueStore> Scheduler<S> {
    // Missing or corrupt blobs read as empty state
    pub fn new(store: S) -> Self {
        let catalog: Vec<StudyItem> = get_json(&store, KEY_CATALOG).unwrap_or_default();
        let history: HashMap<String, ReviewRecord> =
            get_json(&store, KEY_HISTORY).unwrap_or_default();

        Scheduler {
            store,
            catalog,
            history,
            session: None,
        }
    }

    // Features sharing the store (favorites, settings) borrow it from here
    // instead of opening a second connection.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    // Catalog operations

    pub fn catalog(&self) -> &[StudyItem] {
        &self.catalog
    }

    pub fn item(&self, id: &str) -> Option<&StudyItem> {
        self.catalog.iter().find(|i| i.id == id)
    }

    // Replaces the catalog wholesale. Duplicate ids resolve last-one-wins;
    // review history is untouched so re-imports keep progress.
    pub fn load_catalog(&mut self, items: Vec<StudyItem>) -> Result<usize, StoreError> {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut deduped: Vec<StudyItem> = Vec::new();

        for item in items {
            match positions.get(&item.id) {
                Some(&idx) => deduped[idx] = item,
                None => {
                    positions.insert(item.id.clone(), deduped.len());
                    deduped.push(item);
                }
            }
        }

        put_json(&mut self.store, KEY_CATALOG, &deduped)?;
        self.catalog = deduped;
        Ok(self.catalog.len())
    }

    // Review operations

    pub fn get_review(&self, item_id: &str) -> Option<&ReviewRecord> {
        self.history.get(item_id)
    }

    pub fn history(&self) -> &HashMap<String, ReviewRecord> {
        &self.history
    }

    // Always applies, even for ids outside the current catalog. Mastered
    // extends the streak; anything else resets it to zero.
    pub fn record_assessment(
        &mut self,
        item_id: &str,
        status: ReviewStatus,
        now: DateTime<Utc>,
    ) -> Result<ReviewRecord, StoreError> {
        let record = match self.history.get(item_id) {
            Some(prev) => ReviewRecord {
                item_id: item_id.to_string(),
                last_seen_at: now,
                status,
                streak: match status {
                    ReviewStatus::Mastered => prev.streak + 1,
                    _ => 0,
                },
            },
            None => ReviewRecord {
                item_id: item_id.to_string(),
                last_seen_at: now,
                status,
                streak: match status {
                    ReviewStatus::Mastered => 1,
                    _ => 0,
                },
            },
        };

        self.history.insert(item_id.to_string(), record.clone());
        put_json(&mut self.store, KEY_HISTORY, &self.history)?;
        Ok(record)
    }

    // Never-reviewed and non-mastered cards are always eligible; mastered
    // cards wait out their streak interval.
    pub fn is_eligible(&self, item_id: &str, today: NaiveDate) -> bool {
        match self.history.get(item_id) {
            None => true,
            Some(rec) => match rec.status {
                ReviewStatus::Learning | ReviewStatus::NeedsPractice => true,
                ReviewStatus::Mastered => {
                    days_since(rec.last_seen_at, today) >= interval_for_streak(rec.streak)
                }
            },
        }
    }

    // Session operations

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn current_item(&self) -> Option<&StudyItem> {
        let id = self.session.as_ref()?.current_id()?;
        self.item(id)
    }

    // Returns the day's session, generating and persisting one on first
    // call. Repeat calls on the same date return the stored sequence.
    pub fn start_session<R: Rng>(
        &mut self,
        target: usize,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<&Session, StoreError> {
        let date_str = today.format("%Y-%m-%d").to_string();

        let session = match self.session.take() {
            Some(s) if s.date == date_str => s,
            _ => {
                let stored: Option<Session> = get_json(&self.store, &session_key(today));
                match stored {
                    Some(s) if s.date == date_str => s,
                    _ => {
                        let s = self.generate(target, today, rng);
                        put_json(&mut self.store, &session_key(today), &s)?;
                        s
                    }
                }
            }
        };

        Ok(self.session.insert(session))
    }

    // Discards any cached or stored sequence for the day
    pub fn new_session<R: Rng>(
        &mut self,
        target: usize,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<&Session, StoreError> {
        let s = self.generate(target, today, rng);
        put_json(&mut self.store, &session_key(today), &s)?;
        Ok(self.session.insert(s))
    }

    // Priority cards (learning or needs-practice) are all included, even past
    // the target. The remainder fills from unseen cards, then from mastered
    // cards whose interval has elapsed. An empty pool falls back to the whole
    // catalog so the session is never empty while cards exist.
    fn generate<R: Rng>(&self, target: usize, today: NaiveDate, rng: &mut R) -> Session {
        let date_str = today.format("%Y-%m-%d").to_string();

        let mut priority: Vec<String> = Vec::new();
        let mut unseen: Vec<String> = Vec::new();
        let mut reviewable: Vec<String> = Vec::new();

        for item in &self.catalog {
            match self.history.get(&item.id) {
                None => unseen.push(item.id.clone()),
                Some(rec) => match rec.status {
                    ReviewStatus::Learning | ReviewStatus::NeedsPractice => {
                        priority.push(item.id.clone())
                    }
                    ReviewStatus::Mastered => {
                        if self.is_eligible(&item.id, today) {
                            reviewable.push(item.id.clone());
                        }
                    }
                },
            }
        }

        priority.shuffle(rng);
        unseen.shuffle(rng);
        reviewable.shuffle(rng);

        let mut ids = priority;
        for id in unseen.into_iter().chain(reviewable) {
            if ids.len() >= target {
                break;
            }
            ids.push(id);
        }

        if ids.is_empty() && !self.catalog.is_empty() {
            let mut all: Vec<String> = self.catalog.iter().map(|i| i.id.clone()).collect();
            all.shuffle(rng);
            all.truncate(target);
            ids = all;
        }

        Session::new(date_str, ids, target)
    }

    // Grades the card under the cursor. Needs-practice appends the card again
    // so it returns at the end of the queue; the cursor does not move here.
    pub fn assess_current(
        &mut self,
        status: ReviewStatus,
        now: DateTime<Utc>,
    ) -> Result<Option<ReviewRecord>, StoreError> {
        let current = self
            .session
            .as_ref()
            .and_then(|s| s.current_id())
            .map(|id| id.to_string());

        let Some(item_id) = current else {
            return Ok(None);
        };

        let record = self.record_assessment(&item_id, status, now)?;

        if status == ReviewStatus::NeedsPractice {
            if let Some(session) = self.session.as_mut() {
                session.requeue(item_id);
            }
        }

        self.persist_session()?;
        Ok(Some(record))
    }

    pub fn advance_session(&mut self) -> Result<(), StoreError> {
        if let Some(session) = self.session.as_mut() {
            session.advance();
        }
        self.persist_session()
    }

    fn persist_session(&mut self) -> Result<(), StoreError> {
        if let Some(session) = &self.session {
            let key = format!("session:{}", session.date);
            put_json(&mut self.store, &key, session)?;
        }
        Ok(())
    }

    // Stats

    pub fn stats(&self, today: NaiveDate) -> StudyStats {
        let mut new_items = 0;
        let mut learning = 0;
        let mut needs_practice = 0;
        let mut mastered = 0;
        let mut due_today = 0;
        let mut streak_sum: u64 = 0;

        for item in &self.catalog {
            match self.history.get(&item.id) {
                None => new_items += 1,
                Some(rec) => {
                    streak_sum += u64::from(rec.streak);
                    match rec.status {
                        ReviewStatus::Learning => learning += 1,
                        ReviewStatus::NeedsPractice => needs_practice += 1,
                        ReviewStatus::Mastered => mastered += 1,
                    }
                    if self.is_eligible(&item.id, today) {
                        due_today += 1;
                    }
                }
            }
        }

        let reviewed = learning + needs_practice + mastered;
        let avg_streak = if reviewed == 0 {
            0.0
        } else {
            streak_sum as f64 / reviewed as f64
        };

        StudyStats {
            total_items: self.catalog.len(),
            new_items,
            learning,
            needs_practice,
            mastered,
            due_today,
            avg_streak,
        }
    }

    #[cfg(test)]
    fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_item(id: &str) -> StudyItem {
        StudyItem {
            id: id.to_string(),
            prompt: id.to_string(),
            answer: format!("{} meaning", id),
            category: None,
            difficulty: 2,
        }
    }

    fn setup_scheduler(ids: &[&str]) -> Scheduler<MemoryStore> {
        let mut scheduler = Scheduler::new(MemoryStore::new());
        scheduler
            .load_catalog(ids.iter().map(|id| make_item(id)).collect())
            .unwrap();
        scheduler
    }

    fn ts(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    mod interval_tests {
        use super::*;

        #[test]
        fn interval_table() {
            let expected = [(0, 3), (1, 3), (2, 7), (3, 14), (4, 30), (5, 30), (12, 30)];
            for (streak, days) in expected {
                assert_eq!(
                    interval_for_streak(streak),
                    days,
                    "wrong interval for streak {}",
                    streak
                );
            }
        }
    }

    mod eligibility_tests {
        use super::*;

        #[test]
        fn no_record_is_eligible() {
            let scheduler = setup_scheduler(&["a"]);
            assert!(scheduler.is_eligible("a", date(2024, 6, 1)));
        }

        #[test]
        fn learning_always_eligible() {
            let mut scheduler = setup_scheduler(&["a"]);
            scheduler
                .record_assessment("a", ReviewStatus::Learning, ts(2024, 6, 1))
                .unwrap();
            assert!(scheduler.is_eligible("a", date(2024, 6, 1)));
            assert!(scheduler.is_eligible("a", date(2024, 9, 9)));
        }

        #[test]
        fn needs_practice_always_eligible() {
            let mut scheduler = setup_scheduler(&["a"]);
            scheduler
                .record_assessment("a", ReviewStatus::NeedsPractice, ts(2024, 6, 1))
                .unwrap();
            assert!(scheduler.is_eligible("a", date(2024, 6, 1)));
        }

        #[test]
        fn mastered_streak_1_waits_3_days() {
            let mut scheduler = setup_scheduler(&["a"]);
            scheduler
                .record_assessment("a", ReviewStatus::Mastered, ts(2024, 6, 1))
                .unwrap();
            assert!(!scheduler.is_eligible("a", date(2024, 6, 2)));
            assert!(!scheduler.is_eligible("a", date(2024, 6, 3)));
            assert!(scheduler.is_eligible("a", date(2024, 6, 4)));
        }

        #[test]
        fn mastered_streak_2_seen_10_days_ago_is_eligible() {
            let mut scheduler = setup_scheduler(&["a"]);
            scheduler
                .record_assessment("a", ReviewStatus::Mastered, ts(2024, 6, 1))
                .unwrap();
            scheduler
                .record_assessment("a", ReviewStatus::Mastered, ts(2024, 6, 5))
                .unwrap();
            assert!(scheduler.is_eligible("a", date(2024, 6, 15)));
        }

        #[test]
        fn mastered_streak_2_seen_3_days_ago_is_not_eligible() {
            let mut scheduler = setup_scheduler(&["a"]);
            scheduler
                .record_assessment("a", ReviewStatus::Mastered, ts(2024, 6, 1))
                .unwrap();
            scheduler
                .record_assessment("a", ReviewStatus::Mastered, ts(2024, 6, 5))
                .unwrap();
            assert!(!scheduler.is_eligible("a", date(2024, 6, 8)));
        }

        #[test]
        fn mastered_streak_zero_uses_first_interval() {
            // A mastered record can carry streak 0 if written by an older
            // version; it behaves like streak 1.
            let mut store = MemoryStore::new();
            let mut history = HashMap::new();
            history.insert(
                "a".to_string(),
                ReviewRecord {
                    item_id: "a".to_string(),
                    last_seen_at: ts(2024, 6, 1),
                    status: ReviewStatus::Mastered,
                    streak: 0,
                },
            );
            put_json(&mut store, KEY_HISTORY, &history).unwrap();
            put_json(&mut store, KEY_CATALOG, &vec![make_item("a")]).unwrap();

            let scheduler = Scheduler::new(store);
            assert!(!scheduler.is_eligible("a", date(2024, 6, 3)));
            assert!(scheduler.is_eligible("a", date(2024, 6, 4)));
        }

        #[test]
        fn long_streak_clamps_to_30_days() {
            let mut scheduler = setup_scheduler(&["a"]);
            for day in 1..=6 {
                scheduler
                    .record_assessment("a", ReviewStatus::Mastered, ts(2024, 1, day))
                    .unwrap();
            }
            assert!(!scheduler.is_eligible("a", date(2024, 1, 20)));
            assert!(scheduler.is_eligible("a", date(2024, 2, 5)));
        }
    }

    mod record_tests {
        use super::*;

        #[test]
        fn first_mastered_starts_streak_at_1() {
            let mut scheduler = setup_scheduler(&["a"]);
            let rec = scheduler
                .record_assessment("a", ReviewStatus::Mastered, ts(2024, 6, 1))
                .unwrap();
            assert_eq!(rec.streak, 1);
            assert_eq!(rec.status, ReviewStatus::Mastered);
        }

        #[test]
        fn first_learning_starts_streak_at_0() {
            let mut scheduler = setup_scheduler(&["a"]);
            let rec = scheduler
                .record_assessment("a", ReviewStatus::Learning, ts(2024, 6, 1))
                .unwrap();
            assert_eq!(rec.streak, 0);
        }

        #[test]
        fn mastered_twice_increments_twice() {
            let mut scheduler = setup_scheduler(&["a"]);
            scheduler
                .record_assessment("a", ReviewStatus::Mastered, ts(2024, 6, 1))
                .unwrap();
            let rec = scheduler
                .record_assessment("a", ReviewStatus::Mastered, ts(2024, 6, 1))
                .unwrap();
            assert_eq!(rec.streak, 2);
        }

        #[test]
        fn non_mastered_resets_streak() {
            let mut scheduler = setup_scheduler(&["a"]);
            scheduler
                .record_assessment("a", ReviewStatus::Mastered, ts(2024, 6, 1))
                .unwrap();
            scheduler
                .record_assessment("a", ReviewStatus::Mastered, ts(2024, 6, 2))
                .unwrap();
            let rec = scheduler
                .record_assessment("a", ReviewStatus::NeedsPractice, ts(2024, 6, 3))
                .unwrap();
            assert_eq!(rec.streak, 0);
            assert_eq!(rec.status, ReviewStatus::NeedsPractice);
        }

        #[test]
        fn reassessment_last_write_wins() {
            let mut scheduler = setup_scheduler(&["a"]);
            scheduler
                .record_assessment("a", ReviewStatus::Mastered, ts(2024, 6, 1))
                .unwrap();
            scheduler
                .record_assessment("a", ReviewStatus::Learning, ts(2024, 6, 1))
                .unwrap();
            let rec = scheduler.get_review("a").unwrap();
            assert_eq!(rec.status, ReviewStatus::Learning);
            assert_eq!(rec.streak, 0);
        }

        #[test]
        fn unknown_item_still_recorded() {
            let mut scheduler = setup_scheduler(&["a"]);
            scheduler
                .record_assessment("ghost", ReviewStatus::Learning, ts(2024, 6, 1))
                .unwrap();
            assert!(scheduler.get_review("ghost").is_some());
        }

        #[test]
        fn updates_last_seen_at() {
            let mut scheduler = setup_scheduler(&["a"]);
            scheduler
                .record_assessment("a", ReviewStatus::Mastered, ts(2024, 6, 1))
                .unwrap();
            scheduler
                .record_assessment("a", ReviewStatus::Mastered, ts(2024, 6, 9))
                .unwrap();
            let rec = scheduler.get_review("a").unwrap();
            assert_eq!(rec.last_seen_at, ts(2024, 6, 9));
        }

        #[test]
        fn history_written_to_store() {
            let mut scheduler = setup_scheduler(&["a"]);
            scheduler
                .record_assessment("a", ReviewStatus::Mastered, ts(2024, 6, 1))
                .unwrap();
            let store = scheduler.into_store();
            let raw = store.get(KEY_HISTORY).unwrap().unwrap();
            assert!(raw.contains("\"a\""));
            assert!(raw.contains("Mastered"));
        }
    }

    mod catalog_tests {
        use super::*;

        #[test]
        fn duplicate_ids_last_one_wins() {
            let mut scheduler = Scheduler::new(MemoryStore::new());
            let mut second = make_item("a");
            second.answer = "newer".to_string();
            let count = scheduler
                .load_catalog(vec![make_item("a"), make_item("b"), second])
                .unwrap();
            assert_eq!(count, 2);
            assert_eq!(scheduler.item("a").unwrap().answer, "newer");
        }

        #[test]
        fn reload_keeps_history() {
            let mut scheduler = setup_scheduler(&["a", "b"]);
            scheduler
                .record_assessment("a", ReviewStatus::Mastered, ts(2024, 6, 1))
                .unwrap();
            scheduler
                .load_catalog(vec![make_item("a"), make_item("c")])
                .unwrap();
            assert_eq!(scheduler.get_review("a").unwrap().streak, 1);
        }

        #[test]
        fn catalog_written_to_store() {
            let scheduler = setup_scheduler(&["a", "b"]);
            let store = scheduler.into_store();
            let raw = store.get(KEY_CATALOG).unwrap().unwrap();
            assert!(raw.contains("\"a\""));
            assert!(raw.contains("\"b\""));
        }
    }

    mod generation_tests {
        use super::*;

        #[test]
        fn fills_with_unseen_items_up_to_target() {
            let mut scheduler = setup_scheduler(&["a", "b", "c", "d", "e"]);
            let session = scheduler
                .start_session(3, date(2024, 6, 1), &mut rng())
                .unwrap();
            assert_eq!(session.len(), 3);
            let mut seen = session.item_ids.clone();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), 3);
        }

        #[test]
        fn includes_all_priority_past_target() {
            let mut scheduler = setup_scheduler(&["a", "b", "c", "d", "e", "f"]);
            for id in ["a", "b", "c"] {
                scheduler
                    .record_assessment(id, ReviewStatus::NeedsPractice, ts(2024, 5, 20))
                    .unwrap();
            }
            for id in ["d", "e"] {
                scheduler
                    .record_assessment(id, ReviewStatus::Learning, ts(2024, 5, 20))
                    .unwrap();
            }
            let session = scheduler
                .start_session(2, date(2024, 6, 1), &mut rng())
                .unwrap();
            assert_eq!(session.len(), 5);
            for id in ["a", "b", "c", "d", "e"] {
                assert!(session.item_ids.iter().any(|i| i == id), "missing {}", id);
            }
            assert!(!session.item_ids.iter().any(|i| i == "f"));
        }

        #[test]
        fn priority_comes_before_fill() {
            let mut scheduler = setup_scheduler(&["a", "b", "c", "d"]);
            scheduler
                .record_assessment("a", ReviewStatus::NeedsPractice, ts(2024, 5, 20))
                .unwrap();
            let session = scheduler
                .start_session(3, date(2024, 6, 1), &mut rng())
                .unwrap();
            assert_eq!(session.item_ids[0], "a");
        }

        #[test]
        fn unseen_fills_before_due_mastered() {
            let mut scheduler = setup_scheduler(&["fresh", "seen"]);
            scheduler
                .record_assessment("seen", ReviewStatus::Mastered, ts(2024, 5, 1))
                .unwrap();
            let session = scheduler
                .start_session(2, date(2024, 6, 1), &mut rng())
                .unwrap();
            assert_eq!(session.item_ids, vec!["fresh", "seen"]);
        }

        #[test]
        fn recently_mastered_excluded() {
            let mut scheduler = setup_scheduler(&["a", "b"]);
            scheduler
                .record_assessment("a", ReviewStatus::Mastered, ts(2024, 6, 1))
                .unwrap();
            let session = scheduler
                .start_session(10, date(2024, 6, 2), &mut rng())
                .unwrap();
            assert_eq!(session.item_ids, vec!["b"]);
        }

        #[test]
        fn empty_pool_falls_back_to_whole_catalog() {
            let mut scheduler = setup_scheduler(&["a", "b", "c", "d", "e"]);
            for id in ["a", "b", "c", "d", "e"] {
                scheduler
                    .record_assessment(id, ReviewStatus::Mastered, ts(2024, 6, 1))
                    .unwrap();
            }
            let session = scheduler
                .start_session(3, date(2024, 6, 2), &mut rng())
                .unwrap();
            assert_eq!(session.len(), 3);
        }

        #[test]
        fn fallback_caps_at_catalog_size() {
            let mut scheduler = setup_scheduler(&["a", "b"]);
            for id in ["a", "b"] {
                scheduler
                    .record_assessment(id, ReviewStatus::Mastered, ts(2024, 6, 1))
                    .unwrap();
            }
            let session = scheduler
                .start_session(10, date(2024, 6, 2), &mut rng())
                .unwrap();
            assert_eq!(session.len(), 2);
        }

        #[test]
        fn empty_catalog_gives_empty_session() {
            let mut scheduler = Scheduler::new(MemoryStore::new());
            let session = scheduler
                .start_session(10, date(2024, 6, 1), &mut rng())
                .unwrap();
            assert!(session.is_empty());
            assert!(session.is_complete());
        }

        #[test]
        fn seeded_rng_is_reproducible() {
            let ids = ["a", "b", "c", "d", "e", "f", "g"];
            let mut first = setup_scheduler(&ids);
            let mut second = setup_scheduler(&ids);
            let seq_a = first
                .start_session(5, date(2024, 6, 1), &mut StdRng::seed_from_u64(7))
                .unwrap()
                .item_ids
                .clone();
            let seq_b = second
                .start_session(5, date(2024, 6, 1), &mut StdRng::seed_from_u64(7))
                .unwrap()
                .item_ids
                .clone();
            assert_eq!(seq_a, seq_b);
        }

        #[test]
        fn same_day_start_returns_cached_sequence() {
            let mut scheduler = setup_scheduler(&["a", "b", "c", "d", "e"]);
            let first = scheduler
                .start_session(3, date(2024, 6, 1), &mut StdRng::seed_from_u64(1))
                .unwrap()
                .item_ids
                .clone();
            let second = scheduler
                .start_session(3, date(2024, 6, 1), &mut StdRng::seed_from_u64(999))
                .unwrap()
                .item_ids
                .clone();
            assert_eq!(first, second);
        }

        #[test]
        fn same_day_survives_reopening_the_store() {
            let mut scheduler = setup_scheduler(&["a", "b", "c", "d", "e"]);
            let first = scheduler
                .start_session(3, date(2024, 6, 1), &mut StdRng::seed_from_u64(1))
                .unwrap()
                .item_ids
                .clone();

            let mut reopened = Scheduler::new(scheduler.into_store());
            let second = reopened
                .start_session(3, date(2024, 6, 1), &mut StdRng::seed_from_u64(999))
                .unwrap()
                .item_ids
                .clone();
            assert_eq!(first, second);
        }

        #[test]
        fn new_session_discards_cached_sequence() {
            let mut scheduler = setup_scheduler(&["a", "b", "c", "d", "e"]);
            scheduler
                .start_session(3, date(2024, 6, 1), &mut rng())
                .unwrap();
            scheduler.advance_session().unwrap();
            let session = scheduler
                .new_session(3, date(2024, 6, 1), &mut rng())
                .unwrap();
            assert_eq!(session.cursor, 0);
            assert_eq!(session.len(), 3);
        }

        #[test]
        fn next_day_generates_fresh_session() {
            let mut scheduler = setup_scheduler(&["a", "b", "c"]);
            scheduler
                .start_session(3, date(2024, 6, 1), &mut rng())
                .unwrap();
            let session = scheduler
                .start_session(3, date(2024, 6, 2), &mut rng())
                .unwrap();
            assert_eq!(session.date, "2024-06-02");
            assert_eq!(session.cursor, 0);
        }
    }

    mod runtime_tests {
        use super::*;

        #[test]
        fn needs_practice_requeues_at_end() {
            let mut scheduler = setup_scheduler(&["a", "b", "c", "d", "e"]);
            scheduler
                .start_session(3, date(2024, 6, 1), &mut rng())
                .unwrap();
            let current = scheduler.current_item().unwrap().id.clone();

            scheduler
                .assess_current(ReviewStatus::NeedsPractice, ts(2024, 6, 1))
                .unwrap();

            let session = scheduler.session().unwrap();
            assert_eq!(session.len(), 4);
            assert_eq!(session.item_ids.last().unwrap(), &current);
        }

        #[test]
        fn mastered_and_learning_do_not_requeue() {
            let mut scheduler = setup_scheduler(&["a", "b", "c"]);
            scheduler
                .start_session(3, date(2024, 6, 1), &mut rng())
                .unwrap();
            scheduler
                .assess_current(ReviewStatus::Mastered, ts(2024, 6, 1))
                .unwrap();
            scheduler.advance_session().unwrap();
            scheduler
                .assess_current(ReviewStatus::Learning, ts(2024, 6, 1))
                .unwrap();
            assert_eq!(scheduler.session().unwrap().len(), 3);
        }

        #[test]
        fn assess_after_completion_is_a_no_op() {
            let mut scheduler = setup_scheduler(&["a"]);
            scheduler
                .start_session(1, date(2024, 6, 1), &mut rng())
                .unwrap();
            scheduler.advance_session().unwrap();
            let result = scheduler
                .assess_current(ReviewStatus::Mastered, ts(2024, 6, 1))
                .unwrap();
            assert!(result.is_none());
            assert!(scheduler.get_review("a").is_none());
        }

        #[test]
        fn full_walk_with_requeue() {
            let mut scheduler = setup_scheduler(&["a", "b", "c", "d", "e"]);
            scheduler
                .start_session(3, date(2024, 6, 1), &mut rng())
                .unwrap();
            let first = scheduler.current_item().unwrap().id.clone();

            // Miss the first card, pass the next two
            scheduler
                .assess_current(ReviewStatus::NeedsPractice, ts(2024, 6, 1))
                .unwrap();
            scheduler.advance_session().unwrap();
            scheduler
                .assess_current(ReviewStatus::Learning, ts(2024, 6, 1))
                .unwrap();
            scheduler.advance_session().unwrap();
            scheduler
                .assess_current(ReviewStatus::Mastered, ts(2024, 6, 1))
                .unwrap();
            scheduler.advance_session().unwrap();

            // The missed card comes back as the appended fourth entry
            assert_eq!(scheduler.current_item().unwrap().id, first);
            scheduler
                .assess_current(ReviewStatus::Mastered, ts(2024, 6, 1))
                .unwrap();
            scheduler.advance_session().unwrap();

            assert!(scheduler.session().unwrap().is_complete());
            assert_eq!(scheduler.get_review(&first).unwrap().streak, 1);
        }

        #[test]
        fn session_progress_survives_reopening() {
            let mut scheduler = setup_scheduler(&["a", "b", "c"]);
            scheduler
                .start_session(3, date(2024, 6, 1), &mut rng())
                .unwrap();
            scheduler
                .assess_current(ReviewStatus::Mastered, ts(2024, 6, 1))
                .unwrap();
            scheduler.advance_session().unwrap();

            let mut reopened = Scheduler::new(scheduler.into_store());
            let session = reopened
                .start_session(3, date(2024, 6, 1), &mut rng())
                .unwrap();
            assert_eq!(session.cursor, 1);
        }
    }

    mod stats_tests {
        use super::*;

        #[test]
        fn counts_by_status() {
            let mut scheduler = setup_scheduler(&["a", "b", "c", "d", "e"]);
            scheduler
                .record_assessment("a", ReviewStatus::Mastered, ts(2024, 6, 1))
                .unwrap();
            scheduler
                .record_assessment("b", ReviewStatus::Learning, ts(2024, 6, 1))
                .unwrap();
            scheduler
                .record_assessment("c", ReviewStatus::NeedsPractice, ts(2024, 6, 1))
                .unwrap();

            let stats = scheduler.stats(date(2024, 6, 2));
            assert_eq!(stats.total_items, 5);
            assert_eq!(stats.new_items, 2);
            assert_eq!(stats.mastered, 1);
            assert_eq!(stats.learning, 1);
            assert_eq!(stats.needs_practice, 1);
            // b and c are always due; a waits out its interval
            assert_eq!(stats.due_today, 2);
        }

        #[test]
        fn mastered_due_after_interval_counts() {
            let mut scheduler = setup_scheduler(&["a"]);
            scheduler
                .record_assessment("a", ReviewStatus::Mastered, ts(2024, 6, 1))
                .unwrap();
            assert_eq!(scheduler.stats(date(2024, 6, 2)).due_today, 0);
            assert_eq!(scheduler.stats(date(2024, 6, 10)).due_today, 1);
        }

        #[test]
        fn avg_streak_over_reviewed_items() {
            let mut scheduler = setup_scheduler(&["a", "b"]);
            scheduler
                .record_assessment("a", ReviewStatus::Mastered, ts(2024, 6, 1))
                .unwrap();
            scheduler
                .record_assessment("a", ReviewStatus::Mastered, ts(2024, 6, 2))
                .unwrap();
            scheduler
                .record_assessment("b", ReviewStatus::Learning, ts(2024, 6, 1))
                .unwrap();
            let stats = scheduler.stats(date(2024, 6, 3));
            assert!((stats.avg_streak - 1.0).abs() < f64::EPSILON);
        }

        #[test]
        fn empty_scheduler_all_zero() {
            let scheduler = Scheduler::new(MemoryStore::new());
            let stats = scheduler.stats(date(2024, 6, 1));
            assert_eq!(stats.total_items, 0);
            assert_eq!(stats.due_today, 0);
            assert_eq!(stats.avg_streak, 0.0);
        }
    }

    mod rehydration_tests {
        use super::*;

        #[test]
        fn corrupt_history_reads_as_empty() {
            let mut store = MemoryStore::new();
            store.set(KEY_HISTORY, "{{{ not json").unwrap();
            store.set(KEY_CATALOG, "also broken").unwrap();

            let scheduler = Scheduler::new(store);
            assert!(scheduler.catalog().is_empty());
            assert!(scheduler.get_review("a").is_none());
        }

        #[test]
        fn corrupt_session_blob_regenerates() {
            let mut scheduler = setup_scheduler(&["a", "b"]);
            scheduler
                .start_session(2, date(2024, 6, 1), &mut rng())
                .unwrap();

            let mut store = scheduler.into_store();
            store.set(&session_key(date(2024, 6, 1)), "garbage").unwrap();

            let mut reopened = Scheduler::new(store);
            let session = reopened
                .start_session(2, date(2024, 6, 1), &mut rng())
                .unwrap();
            assert_eq!(session.len(), 2);
            assert_eq!(session.date, "2024-06-01");
        }

        #[test]
        fn seeded_blobs_rehydrate() {
            let mut store = MemoryStore::new();
            put_json(&mut store, KEY_CATALOG, &vec![make_item("a")]).unwrap();
            let mut history = HashMap::new();
            history.insert(
                "a".to_string(),
                ReviewRecord {
                    item_id: "a".to_string(),
                    last_seen_at: ts(2024, 6, 1),
                    status: ReviewStatus::Learning,
                    streak: 0,
                },
            );
            put_json(&mut store, KEY_HISTORY, &history).unwrap();

            let scheduler = Scheduler::new(store);
            assert_eq!(scheduler.catalog().len(), 1);
            assert_eq!(
                scheduler.get_review("a").unwrap().status,
                ReviewStatus::Learning
            );
        }
    }
}
