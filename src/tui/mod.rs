mod ui;
mod widgets;

use std::io;
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::data;
use crate::gender::{Gender, GenderQuiz};
use crate::models::{ReviewStatus, Settings, StudyItem};
use crate::scheduler::{Scheduler, StudyStats};
use crate::store::KeyValueStore;
use crate::trivia::{self, TriviaDeck};
use crate::wordofday::{DrillMode, WordEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Study,
    Gender,
    Trivia,
    Word,
}

impl View {
    fn next(&self) -> Self {
        match self {
            View::Dashboard => View::Study,
            View::Study => View::Gender,
            View::Gender => View::Trivia,
            View::Trivia => View::Word,
            View::Word => View::Dashboard,
        }
    }

    fn prev(&self) -> Self {
        match self {
            View::Dashboard => View::Word,
            View::Study => View::Dashboard,
            View::Gender => View::Study,
            View::Trivia => View::Gender,
            View::Word => View::Trivia,
        }
    }
}

pub struct App<S: KeyValueStore> {
    scheduler: Scheduler<S>,
    pub settings: Settings,
    pub today: NaiveDate,
    rng: StdRng,
    pub view: View,
    pub stats: StudyStats,
    pub categories: Vec<(String, usize)>,
    pub revealed: bool,
    pub browse: Option<usize>,
    pub quiz: GenderQuiz,
    pub last_guess: Option<Gender>,
    pub words: Vec<WordEntry>,
    pub drill_mode: Option<DrillMode>,
    pub drill_revealed: bool,
    pub deck: TriviaDeck,
    pub current_fact_id: Option<u32>,
    pub favorites: Vec<u32>,
    pub should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(
        mut scheduler: Scheduler<S>,
        settings: Settings,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let today = Utc::now().date_naive();
        let mut rng = StdRng::from_entropy();

        scheduler.start_session(settings.cards_per_day, today, &mut rng)?;
        let stats = scheduler.stats(today);
        let categories = category_counts(scheduler.catalog());
        let favorites = trivia::load_favorites(scheduler.store());

        let mut quiz = GenderQuiz::new(data::gender_nouns());
        quiz.next_noun(&mut rng);

        let mut deck = TriviaDeck::new(data::trivia_facts());
        let current_fact_id = deck.next_fact(&mut rng).map(|f| f.id);

        Ok(Self {
            scheduler,
            settings,
            today,
            rng,
            view: View::Dashboard,
            stats,
            categories,
            revealed: false,
            browse: None,
            quiz,
            last_guess: None,
            words: data::daily_words(),
            drill_mode: None,
            drill_revealed: false,
            deck,
            current_fact_id,
            favorites,
            should_quit: false,
        })
    }

    pub fn current_item(&self) -> Option<&StudyItem> {
        self.scheduler.current_item()
    }

    // (done, total) for the day's session
    pub fn session_progress(&self) -> (usize, usize) {
        match self.scheduler.session() {
            Some(s) => (s.cursor.min(s.len()), s.len()),
            None => (0, 0),
        }
    }

    // The card on screen: the browsed one when the user has stepped off the
    // live cursor, the live one otherwise.
    pub fn displayed_item(&self) -> Option<&StudyItem> {
        match self.browse {
            Some(idx) => {
                let session = self.scheduler.session()?;
                let id = session.item_ids.get(idx)?;
                self.scheduler.item(id)
            }
            None => self.scheduler.current_item(),
        }
    }

    // Display-only stepping through the session sequence. Assessment
    // progress moves only through grading.
    fn browse_step(&mut self, step: i64) {
        let (cursor, len) = match self.scheduler.session() {
            Some(s) if !s.item_ids.is_empty() => (s.cursor, s.len()),
            _ => return,
        };
        let last = (len - 1) as i64;
        let at = self.browse.unwrap_or(cursor) as i64;
        let target = (at + step).clamp(0, last) as usize;
        // Landing back on the live cursor resumes the normal grading flow
        self.browse = if target == cursor { None } else { Some(target) };
        self.revealed = false;
    }

    fn refresh_stats(&mut self) {
        self.stats = self.scheduler.stats(self.today);
    }

    fn grade_current(&mut self, status: ReviewStatus) -> Result<(), Box<dyn std::error::Error>> {
        if !self.revealed {
            return Ok(());
        }
        match self.browse {
            // Regrading a revisited card rewrites its record; the sequence
            // and cursor stay put.
            Some(idx) => {
                let id = self
                    .scheduler
                    .session()
                    .and_then(|s| s.item_ids.get(idx).cloned());
                if let Some(id) = id {
                    self.scheduler.record_assessment(&id, status, Utc::now())?;
                }
            }
            None => {
                if self.scheduler.assess_current(status, Utc::now())?.is_some() {
                    self.scheduler.advance_session()?;
                }
            }
        }
        self.revealed = false;
        self.refresh_stats();
        Ok(())
    }

    fn restart_session(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.scheduler
            .new_session(self.settings.cards_per_day, self.today, &mut self.rng)?;
        self.revealed = false;
        self.browse = None;
        self.refresh_stats();
        Ok(())
    }

    fn next_fact(&mut self) {
        self.current_fact_id = self.deck.next_fact(&mut self.rng).map(|f| f.id);
    }

    fn toggle_current_favorite(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(id) = self.current_fact_id {
            trivia::toggle_favorite(self.scheduler.store_mut(), id)?;
            self.favorites = trivia::load_favorites(self.scheduler.store());
        }
        Ok(())
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match key {
            KeyCode::Char('q') => self.should_quit = true,

            // Navigation between views: h/l (left/right like vim)
            KeyCode::Char('h') | KeyCode::Left => self.view = self.view.prev(),
            KeyCode::Char('l') | KeyCode::Right => self.view = self.view.next(),

            KeyCode::Tab => {
                if modifiers.contains(KeyModifiers::SHIFT) {
                    self.view = self.view.prev();
                } else {
                    self.view = self.view.next();
                }
            }
            KeyCode::BackTab => {
                self.view = self.view.prev();
            }

            KeyCode::Char(' ') | KeyCode::Enter if self.view == View::Study => {
                if self.displayed_item().is_some() {
                    self.revealed = !self.revealed;
                }
            }
            KeyCode::Char('j') | KeyCode::Down if self.view == View::Study => {
                self.browse_step(1);
            }
            KeyCode::Char('k') | KeyCode::Up if self.view == View::Study => {
                self.browse_step(-1);
            }
            KeyCode::Char('1') if self.view == View::Study => {
                self.grade_current(ReviewStatus::Mastered)?;
            }
            KeyCode::Char('2') if self.view == View::Study => {
                self.grade_current(ReviewStatus::Learning)?;
            }
            KeyCode::Char('3') if self.view == View::Study => {
                self.grade_current(ReviewStatus::NeedsPractice)?;
            }
            KeyCode::Char('n') if self.view == View::Study => {
                self.restart_session()?;
            }

            KeyCode::Char('1') if self.view == View::Gender => self.answer_gender(Gender::Der),
            KeyCode::Char('2') if self.view == View::Gender => self.answer_gender(Gender::Die),
            KeyCode::Char('3') if self.view == View::Gender => self.answer_gender(Gender::Das),
            KeyCode::Char('n') if self.view == View::Gender => {
                self.quiz.next_noun(&mut self.rng);
                self.last_guess = None;
            }

            KeyCode::Char('n') if self.view == View::Trivia => self.next_fact(),
            KeyCode::Char('f') if self.view == View::Trivia => self.toggle_current_favorite()?,
            KeyCode::Char('c') if self.view == View::Trivia => {
                self.deck.cycle_filter();
                self.next_fact();
            }

            KeyCode::Char('1') if self.view == View::Word => {
                self.drill_mode = Some(DrillMode::Translation);
                self.drill_revealed = false;
            }
            KeyCode::Char('2') if self.view == View::Word => {
                self.drill_mode = Some(DrillMode::Example);
                self.drill_revealed = false;
            }
            KeyCode::Char('3') if self.view == View::Word => {
                self.drill_mode = Some(DrillMode::Usage);
                self.drill_revealed = false;
            }
            KeyCode::Char('r') if self.view == View::Word => {
                if self.drill_mode.is_some() {
                    self.drill_revealed = !self.drill_revealed;
                }
            }
            KeyCode::Esc if self.view == View::Word => {
                self.drill_mode = None;
                self.drill_revealed = false;
            }

            _ => {}
        }
        Ok(())
    }

    fn answer_gender(&mut self, guess: Gender) {
        if self.quiz.answer(guess).is_some() {
            self.last_guess = Some(guess);
        }
    }
}

fn category_counts(catalog: &[StudyItem]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for item in catalog {
        let name = item.category.as_deref().unwrap_or("uncategorized");
        match counts.iter_mut().find(|(n, _)| n == name) {
            Some((_, count)) => *count += 1,
            None => counts.push((name.to_string(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

pub fn run<S: KeyValueStore>(
    scheduler: Scheduler<S>,
    settings: Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(scheduler, settings)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<S: KeyValueStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key.code, key.modifiers)?;
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
