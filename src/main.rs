mod catalog;
mod data;
mod gender;
mod models;
mod scheduler;
mod store;
mod trivia;
mod wordofday;

mod tui;

use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use catalog::HttpFetcher;
use gender::Gender;
use models::{JsonOutput, ReviewStatus, Settings, StudyDirection};
use scheduler::{Scheduler, KEY_SETTINGS};
use store::{get_json, put_json, KeyValueStore, SqliteStore};
use trivia::{Country, TriviaDeck};
use wordofday::DrillMode;

const DEFAULT_DB_NAME: &str = "wortschatz.db";

#[derive(Parser)]
#[command(name = "wortschatz")]
#[command(about = "A German vocabulary trainer with spaced-repetition flashcards")]
#[command(version)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the store and seed the starter cards
    Init,

    /// Manage the card catalog
    #[command(subcommand)]
    Catalog(CatalogCommands),

    /// Show or resume today's study session
    Session {
        /// Cards per session (defaults to the configured value)
        #[arg(long, short)]
        count: Option<usize>,

        /// Discard today's session and build a new one
        #[arg(long)]
        fresh: bool,
    },

    /// Grade the current card and move to the next one
    Assess {
        /// One of: mastered, learning, needs-practice
        status: String,

        /// Grade a specific card by id instead of the session cursor
        #[arg(long, short)]
        item: Option<String>,
    },

    /// Show the word of the day
    Word {
        /// Drill mode: translation, example, or usage
        #[arg(long, short)]
        drill: Option<String>,

        /// Also print the drill answer
        #[arg(long)]
        reveal: bool,
    },

    /// Quiz yourself on noun genders
    Gender {
        /// Ask about a specific noun
        #[arg(long, short)]
        noun: Option<String>,

        /// Your answer: der, die, or das (requires --noun)
        #[arg(long, short)]
        answer: Option<String>,
    },

    /// Browse German culture trivia
    #[command(subcommand)]
    Trivia(TriviaCommands),

    /// Show or change settings
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Export, import, or wipe stored data
    #[command(subcommand)]
    Data(DataCommands),

    /// Show study statistics
    Stats,

    /// Launch interactive terminal UI
    Tui,
}

#[derive(Subcommand)]
enum CatalogCommands {
    /// List all cards with their review state
    List {
        /// Filter by category
        #[arg(long, short)]
        category: Option<String>,
    },

    /// Load cards from a CSV file or spreadsheet URL
    Load {
        /// File path or URL
        source: String,
    },

    /// Fetch cards again from the configured sheet URL
    Sync,

    /// Restore the built-in starter cards
    Reset,
}

#[derive(Subcommand)]
enum TriviaCommands {
    /// Show a trivia fact
    Show {
        /// Filter by country: germany, austria, or switzerland
        #[arg(long, short)]
        country: Option<String>,
    },

    /// List favorite facts
    Favorites,

    /// Toggle a favorite by fact id
    Fav { id: u32 },
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Show current settings
    Show,

    /// Set how many cards a session holds
    Cards { count: usize },

    /// Set the study direction: german-english or english-german
    Direction { direction: String },

    /// Set the spreadsheet URL, or clear it when omitted
    Sheet { url: Option<String> },
}

#[derive(Subcommand)]
enum DataCommands {
    /// Write everything stored to a JSON file
    Export {
        /// Output path
        path: PathBuf,
    },

    /// Load a previously exported JSON file
    Import {
        /// Input path
        path: PathBuf,
    },

    /// Delete all stored data
    Reset {
        /// Skip the confirmation
        #[arg(long)]
        yes: bool,
    },
}

fn get_db_path() -> PathBuf {
    if let Ok(path) = std::env::var("WORTSCHATZ_DB") {
        return PathBuf::from(path);
    }

    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wortschatz");

    std::fs::create_dir_all(&config_dir).ok();
    config_dir.join(DEFAULT_DB_NAME)
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let db_path = get_db_path();
    let mut db = SqliteStore::open(&db_path)?;
    let mut settings: Settings = get_json(&db, KEY_SETTINGS).unwrap_or_default();

    let now = Utc::now();
    let today = now.date_naive();

    match cli.command {
        Commands::Init => {
            let mut scheduler = Scheduler::new(db);
            let seeded = if scheduler.catalog().is_empty() {
                scheduler.load_catalog(data::starter_catalog())?
            } else {
                0
            };

            if cli.json {
                let output = serde_json::json!({
                    "path": db_path.display().to_string(),
                    "seeded": seeded,
                    "catalog_size": scheduler.catalog().len(),
                });
                println!("{}", serde_json::to_string(&JsonOutput::ok(output))?);
            } else {
                println!("Store initialized at: {}", db_path.display());
                if seeded > 0 {
                    println!("Seeded {} starter cards.", seeded);
                } else {
                    println!("Catalog already holds {} cards.", scheduler.catalog().len());
                }
            }
        }

        Commands::Catalog(catalog_cmd) => {
            let mut scheduler = Scheduler::new(db);
            match catalog_cmd {
                CatalogCommands::List { category } => {
                    ensure_catalog(&mut scheduler)?;
                    let items: Vec<_> = scheduler
                        .catalog()
                        .iter()
                        .filter(|i| match &category {
                            Some(c) => i.category.as_deref() == Some(c.as_str()),
                            None => true,
                        })
                        .collect();

                    if cli.json {
                        let rows: Vec<serde_json::Value> = items
                            .iter()
                            .map(|i| {
                                serde_json::json!({
                                    "item": i,
                                    "review": scheduler.get_review(&i.id),
                                })
                            })
                            .collect();
                        println!("{}", serde_json::to_string(&JsonOutput::ok(rows))?);
                    } else if items.is_empty() {
                        println!("No cards found.");
                    } else {
                        println!(
                            "{:<24} {:<26} {:<12} {:<8} STATUS",
                            "GERMAN", "ENGLISH", "CATEGORY", "LEVEL"
                        );
                        println!("{}", "-".repeat(84));
                        for item in &items {
                            let status = match scheduler.get_review(&item.id) {
                                Some(r) => format!("{} ({})", r.status.label(), r.streak),
                                None => "New".to_string(),
                            };
                            println!(
                                "{:<24} {:<26} {:<12} {:<8} {}",
                                truncate(&item.prompt, 22),
                                truncate(&item.answer, 24),
                                item.category.as_deref().unwrap_or("-"),
                                item.difficulty_label(),
                                status
                            );
                        }
                        println!();
                        println!("{} cards", items.len());
                    }
                }
                CatalogCommands::Load { source } => {
                    let fetcher = HttpFetcher::new()?;
                    let items = catalog::load_source(&fetcher, &source)?;
                    let count = scheduler.load_catalog(items)?;

                    if cli.json {
                        let output = serde_json::json!({ "loaded": count, "source": source });
                        println!("{}", serde_json::to_string(&JsonOutput::ok(output))?);
                    } else {
                        println!("Loaded {} cards from {}", count, source);
                    }
                }
                CatalogCommands::Sync => {
                    let url = settings.sheet_url.clone().ok_or(
                        "No sheet URL configured. Set one with: wortschatz settings sheet <url>",
                    )?;
                    let fetcher = HttpFetcher::new()?;
                    let items = catalog::load_source(&fetcher, &url)?;
                    let count = scheduler.load_catalog(items)?;

                    if cli.json {
                        let output = serde_json::json!({ "loaded": count, "source": url });
                        println!("{}", serde_json::to_string(&JsonOutput::ok(output))?);
                    } else {
                        println!("Synced {} cards from the configured sheet.", count);
                    }
                }
                CatalogCommands::Reset => {
                    let count = scheduler.load_catalog(data::starter_catalog())?;

                    if cli.json {
                        let output = serde_json::json!({ "loaded": count });
                        println!("{}", serde_json::to_string(&JsonOutput::ok(output))?);
                    } else {
                        println!("Restored {} starter cards.", count);
                    }
                }
            }
        }

        Commands::Session { count, fresh } => {
            let mut scheduler = Scheduler::new(db);
            ensure_catalog(&mut scheduler)?;

            let target = count.unwrap_or(settings.cards_per_day);
            let mut rng = StdRng::from_entropy();
            let session = if fresh {
                scheduler.new_session(target, today, &mut rng)?.clone()
            } else {
                scheduler.start_session(target, today, &mut rng)?.clone()
            };

            if cli.json {
                let output = serde_json::json!({
                    "session": session,
                    "current": scheduler.current_item(),
                });
                println!("{}", serde_json::to_string(&JsonOutput::ok(output))?);
            } else {
                println!("=== Study Session {} ===", session.date);
                println!(
                    "Progress: {}/{} ({} remaining)",
                    session.cursor.min(session.len()),
                    session.len(),
                    session.remaining()
                );
                println!();

                match scheduler.current_item() {
                    Some(item) => {
                        println!("Current card: {}", item.front(settings.direction));
                        if let Some(category) = &item.category {
                            println!("  [{}] [{}]", category, item.difficulty_label());
                        } else {
                            println!("  [{}]", item.difficulty_label());
                        }
                        println!();
                        println!("Grade it with: wortschatz assess <mastered|learning|needs-practice>");
                    }
                    None => println!("Session complete."),
                }
            }
        }

        Commands::Assess { status, item } => {
            let review_status = ReviewStatus::from_str(&status).ok_or_else(|| {
                format!(
                    "Invalid status '{}'. Use: mastered, learning, or needs-practice",
                    status
                )
            })?;

            let mut scheduler = Scheduler::new(db);
            ensure_catalog(&mut scheduler)?;

            if let Some(item_id) = item {
                let record = scheduler.record_assessment(&item_id, review_status, now)?;
                let prompt = scheduler
                    .item(&record.item_id)
                    .map(|i| i.prompt.clone())
                    .unwrap_or_else(|| record.item_id.clone());

                if cli.json {
                    println!("{}", serde_json::to_string(&JsonOutput::ok(&record))?);
                } else {
                    println!(
                        "Marked '{}' as {} (streak {}).",
                        prompt,
                        record.status.label(),
                        record.streak
                    );
                }
            } else {
                let mut rng = StdRng::from_entropy();
                scheduler.start_session(settings.cards_per_day, today, &mut rng)?;

                match scheduler.assess_current(review_status, now)? {
                    Some(record) => {
                        let prompt = scheduler
                            .item(&record.item_id)
                            .map(|i| i.prompt.clone())
                            .unwrap_or_else(|| record.item_id.clone());
                        scheduler.advance_session()?;
                        let next = scheduler.current_item().cloned();

                        if cli.json {
                            let output = serde_json::json!({
                                "record": record,
                                "next": next,
                            });
                            println!("{}", serde_json::to_string(&JsonOutput::ok(output))?);
                        } else {
                            println!(
                                "Marked '{}' as {} (streak {}).",
                                prompt,
                                record.status.label(),
                                record.streak
                            );
                            match next {
                                Some(item) => println!("Next card: {}", item.front(settings.direction)),
                                None => println!("Session complete."),
                            }
                        }
                    }
                    None => {
                        if cli.json {
                            println!(
                                "{}",
                                serde_json::to_string(&JsonOutput::<()>::err(
                                    "Today's session is already complete"
                                ))?
                            );
                        } else {
                            println!("Today's session is already complete.");
                            println!("Start a new one with: wortschatz session --fresh");
                        }
                    }
                }
            }
        }

        Commands::Word { drill, reveal } => {
            let words = data::daily_words();
            let entry = wordofday::word_for_date(&words, today)
                .ok_or("No word list available")?;

            let drill_mode = match drill {
                Some(d) => Some(DrillMode::from_str(&d).ok_or_else(|| {
                    format!("Invalid drill '{}'. Use: translation, example, or usage", d)
                })?),
                None => None,
            };

            if cli.json {
                let output = serde_json::json!({
                    "word": entry,
                    "drill": drill_mode.map(|m| entry.drill(m)),
                });
                println!("{}", serde_json::to_string(&JsonOutput::ok(output))?);
            } else {
                println!("=== Word of the Day ===");
                if settings.show_pronunciation {
                    println!("{}  {}", entry.word, entry.pronunciation);
                } else {
                    println!("{}", entry.word);
                }
                println!("{} - {}", entry.word_type, entry.translation);
                println!();
                println!("Example: {}", entry.example);
                println!("         {}", entry.example_translation);
                if !entry.note.is_empty() {
                    println!();
                    println!("Note: {}", entry.note);
                }

                if let Some(mode) = drill_mode {
                    let d = entry.drill(mode);
                    println!();
                    println!("--- {} drill ---", mode.label());
                    println!("{}", d.question);
                    if reveal {
                        println!();
                        println!("Answer: {}", d.answer);
                        if !d.note.is_empty() {
                            println!("{}", d.note);
                        }
                    } else {
                        println!("(add --reveal to see the answer)");
                    }
                }
            }
        }

        Commands::Gender { noun, answer } => {
            let nouns = data::gender_nouns();

            match (noun, answer) {
                (Some(name), Some(guess)) => {
                    let gender = Gender::from_str(&guess)
                        .ok_or_else(|| format!("Invalid answer '{}'. Use: der, die, or das", guess))?;
                    let entry = nouns
                        .iter()
                        .find(|n| n.noun.to_lowercase() == name.to_lowercase())
                        .ok_or_else(|| format!("Unknown noun '{}'", name))?;

                    let correct = entry.gender == gender;
                    if cli.json {
                        let output = serde_json::json!({
                            "noun": entry,
                            "guess": gender.as_str(),
                            "correct": correct,
                        });
                        println!("{}", serde_json::to_string(&JsonOutput::ok(output))?);
                    } else {
                        if correct {
                            println!("Correct!");
                        } else {
                            println!("Not quite.");
                        }
                        println!(
                            "{} {} (plural: die {}) - {}",
                            entry.gender.as_str(),
                            entry.noun,
                            entry.plural,
                            entry.meaning
                        );
                    }
                }
                (Some(name), None) => {
                    let entry = nouns
                        .iter()
                        .find(|n| n.noun.to_lowercase() == name.to_lowercase())
                        .ok_or_else(|| format!("Unknown noun '{}'", name))?;

                    if cli.json {
                        let output = serde_json::json!({ "noun": entry.noun, "meaning": entry.meaning });
                        println!("{}", serde_json::to_string(&JsonOutput::ok(output))?);
                    } else {
                        println!("Which article: ___ {}? ({})", entry.noun, entry.meaning);
                        println!(
                            "Answer with: wortschatz gender --noun {} --answer <der|die|das>",
                            entry.noun
                        );
                    }
                }
                (None, None) => {
                    let mut rng = StdRng::from_entropy();
                    let entry = &nouns[rng.gen_range(0..nouns.len())];

                    if cli.json {
                        let output = serde_json::json!({ "noun": entry.noun, "meaning": entry.meaning });
                        println!("{}", serde_json::to_string(&JsonOutput::ok(output))?);
                    } else {
                        println!("Which article: ___ {}? ({})", entry.noun, entry.meaning);
                        println!(
                            "Answer with: wortschatz gender --noun {} --answer <der|die|das>",
                            entry.noun
                        );
                    }
                }
                (None, Some(_)) => {
                    return Err("Provide --noun together with --answer".into());
                }
            }
        }

        Commands::Trivia(trivia_cmd) => match trivia_cmd {
            TriviaCommands::Show { country } => {
                let mut deck = TriviaDeck::new(data::trivia_facts());
                if let Some(c) = country {
                    let parsed = Country::from_str(&c).ok_or_else(|| {
                        format!("Invalid country '{}'. Use: germany, austria, or switzerland", c)
                    })?;
                    deck.filter = Some(parsed);
                }

                let mut rng = StdRng::from_entropy();
                match deck.next_fact(&mut rng) {
                    Some(fact) => {
                        let favorite = trivia::is_favorite(&db, fact.id);
                        if cli.json {
                            let output = serde_json::json!({
                                "fact": fact,
                                "favorite": favorite,
                            });
                            println!("{}", serde_json::to_string(&JsonOutput::ok(output))?);
                        } else {
                            println!("=== {} ===", fact.title);
                            println!("[{}] [{}]", fact.country.label(), fact.category);
                            println!();
                            println!("{}", fact.fact);
                            if let Some(source) = &fact.source {
                                println!();
                                println!("Source: {}", source);
                            }
                            println!();
                            if favorite {
                                println!("Remove from favorites: wortschatz trivia fav {}", fact.id);
                            } else {
                                println!("Add to favorites: wortschatz trivia fav {}", fact.id);
                            }
                        }
                    }
                    None => {
                        if cli.json {
                            println!(
                                "{}",
                                serde_json::to_string(&JsonOutput::<()>::err("No facts available"))?
                            );
                        } else {
                            println!("No facts available for that filter.");
                        }
                    }
                }
            }
            TriviaCommands::Favorites => {
                let deck = TriviaDeck::new(data::trivia_facts());
                let favorites = trivia::load_favorites(&db);
                let facts: Vec<_> = favorites
                    .iter()
                    .filter_map(|id| deck.fact_by_id(*id))
                    .collect();

                if cli.json {
                    println!("{}", serde_json::to_string(&JsonOutput::ok(&facts))?);
                } else if facts.is_empty() {
                    println!("No favorites yet. Star one with: wortschatz trivia fav <id>");
                } else {
                    println!("{:<5} {:<34} {:<12} CATEGORY", "ID", "TITLE", "COUNTRY");
                    println!("{}", "-".repeat(68));
                    for fact in &facts {
                        println!(
                            "{:<5} {:<34} {:<12} {}",
                            fact.id,
                            truncate(&fact.title, 32),
                            fact.country.label(),
                            fact.category
                        );
                    }
                }
            }
            TriviaCommands::Fav { id } => {
                let deck = TriviaDeck::new(data::trivia_facts());
                let fact = deck
                    .fact_by_id(id)
                    .ok_or_else(|| format!("Unknown fact id {}", id))?;
                let added = trivia::toggle_favorite(&mut db, id)?;

                if cli.json {
                    let output = serde_json::json!({ "id": id, "favorite": added });
                    println!("{}", serde_json::to_string(&JsonOutput::ok(output))?);
                } else if added {
                    println!("Added '{}' to favorites.", fact.title);
                } else {
                    println!("Removed '{}' from favorites.", fact.title);
                }
            }
        },

        Commands::Settings(settings_cmd) => match settings_cmd {
            SettingsCommands::Show => {
                if cli.json {
                    println!("{}", serde_json::to_string(&JsonOutput::ok(&settings))?);
                } else {
                    println!("=== Settings ===");
                    println!("Cards per day: {}", settings.cards_per_day);
                    println!("Direction: {}", settings.direction.label());
                    println!(
                        "Sheet URL: {}",
                        settings.sheet_url.as_deref().unwrap_or("(not set)")
                    );
                    println!("Auto advance: {}", settings.auto_advance);
                    println!("Show pronunciation: {}", settings.show_pronunciation);
                }
            }
            SettingsCommands::Cards { count } => {
                if count == 0 {
                    return Err("Cards per day must be at least 1".into());
                }
                settings.cards_per_day = count;
                put_json(&mut db, KEY_SETTINGS, &settings)?;

                if cli.json {
                    println!("{}", serde_json::to_string(&JsonOutput::ok(&settings))?);
                } else {
                    println!("Cards per day set to {}.", count);
                }
            }
            SettingsCommands::Direction { direction } => {
                let parsed = StudyDirection::from_str(&direction).ok_or_else(|| {
                    format!(
                        "Invalid direction '{}'. Use: german-english or english-german",
                        direction
                    )
                })?;
                settings.direction = parsed;
                put_json(&mut db, KEY_SETTINGS, &settings)?;

                if cli.json {
                    println!("{}", serde_json::to_string(&JsonOutput::ok(&settings))?);
                } else {
                    println!("Study direction set to {}.", parsed.label());
                }
            }
            SettingsCommands::Sheet { url } => {
                let cleared = url.is_none();
                settings.sheet_url = url;
                put_json(&mut db, KEY_SETTINGS, &settings)?;

                if cli.json {
                    println!("{}", serde_json::to_string(&JsonOutput::ok(&settings))?);
                } else if cleared {
                    println!("Sheet URL cleared.");
                } else {
                    println!("Sheet URL saved. Fetch it with: wortschatz catalog sync");
                }
            }
        },

        Commands::Data(data_cmd) => match data_cmd {
            DataCommands::Export { path } => {
                let keys = db.keys()?;
                let mut entries = serde_json::Map::new();
                for key in keys {
                    if let Some(value) = db.get(&key)? {
                        let parsed: serde_json::Value = serde_json::from_str(&value)
                            .unwrap_or(serde_json::Value::String(value));
                        entries.insert(key, parsed);
                    }
                }
                let count = entries.len();
                let export = serde_json::json!({
                    "exported_at": now.to_rfc3339(),
                    "entries": entries,
                });
                std::fs::write(&path, serde_json::to_string_pretty(&export)?)?;

                if cli.json {
                    let output = serde_json::json!({
                        "path": path.display().to_string(),
                        "entries": count,
                    });
                    println!("{}", serde_json::to_string(&JsonOutput::ok(output))?);
                } else {
                    println!("Exported {} entries to {}", count, path.display());
                }
            }
            DataCommands::Import { path } => {
                let text = std::fs::read_to_string(&path)?;
                let value: serde_json::Value = serde_json::from_str(&text)?;
                let entries = value
                    .get("entries")
                    .and_then(|v| v.as_object())
                    .ok_or("Not a wortschatz export file")?;

                for (key, entry) in entries {
                    db.set(key, &serde_json::to_string(entry)?)?;
                }

                if cli.json {
                    let output = serde_json::json!({ "imported": entries.len() });
                    println!("{}", serde_json::to_string(&JsonOutput::ok(output))?);
                } else {
                    println!("Imported {} entries from {}", entries.len(), path.display());
                }
            }
            DataCommands::Reset { yes } => {
                if !yes {
                    println!("This deletes all stored data. Re-run with --yes to confirm.");
                } else {
                    let keys = db.keys()?;
                    let count = keys.len();
                    for key in keys {
                        db.remove(&key)?;
                    }

                    if cli.json {
                        let output = serde_json::json!({ "removed": count });
                        println!("{}", serde_json::to_string(&JsonOutput::ok(output))?);
                    } else {
                        println!("All data removed ({} entries).", count);
                    }
                }
            }
        },

        Commands::Stats => {
            let mut scheduler = Scheduler::new(db);
            ensure_catalog(&mut scheduler)?;
            let stats = scheduler.stats(today);

            if cli.json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(&stats))?);
            } else {
                println!("=== Study Statistics ===");
                println!("Catalog size: {}", stats.total_items);
                println!("New: {}", stats.new_items);
                println!("Learning: {}", stats.learning);
                println!("Needs practice: {}", stats.needs_practice);
                println!("Mastered: {}", stats.mastered);
                println!("Due today: {}", stats.due_today);
                println!("Average streak: {:.1}", stats.avg_streak);
            }
        }

        Commands::Tui => {
            let mut scheduler = Scheduler::new(db);
            ensure_catalog(&mut scheduler)?;
            tui::run(scheduler, settings)?;
        }
    }

    Ok(())
}

fn ensure_catalog<S: KeyValueStore>(scheduler: &mut Scheduler<S>) -> Result<(), store::StoreError> {
    if scheduler.catalog().is_empty() {
        scheduler.load_catalog(data::starter_catalog())?;
    }
    Ok(())
}

// Char-based so umlauts never split mid-codepoint.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}


#[cfg(test)]
mod cli_parsing_tests {
    use super::*;

    #[test]
    fn parses_init() {
        let cli = Cli::try_parse_from(["wortschatz", "init"]).unwrap();
        assert!(matches!(cli.command, Commands::Init));
        assert!(!cli.json);
    }

    #[test]
    fn parses_catalog_list() {
        let cli = Cli::try_parse_from(["wortschatz", "catalog", "list"]).unwrap();
        match cli.command {
            Commands::Catalog(CatalogCommands::List { category }) => {
                assert!(category.is_none());
            }
            _ => panic!("Expected Catalog List command"),
        }
    }

    #[test]
    fn parses_catalog_list_with_category() {
        let cli =
            Cli::try_parse_from(["wortschatz", "catalog", "list", "--category", "nouns"]).unwrap();
        match cli.command {
            Commands::Catalog(CatalogCommands::List { category }) => {
                assert_eq!(category, Some("nouns".to_string()));
            }
            _ => panic!("Expected Catalog List command"),
        }
    }

    #[test]
    fn parses_catalog_load() {
        let cli = Cli::try_parse_from(["wortschatz", "catalog", "load", "cards.csv"]).unwrap();
        match cli.command {
            Commands::Catalog(CatalogCommands::Load { source }) => {
                assert_eq!(source, "cards.csv");
            }
            _ => panic!("Expected Catalog Load command"),
        }
    }

    #[test]
    fn catalog_load_requires_source() {
        let result = Cli::try_parse_from(["wortschatz", "catalog", "load"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_session_defaults() {
        let cli = Cli::try_parse_from(["wortschatz", "session"]).unwrap();
        match cli.command {
            Commands::Session { count, fresh } => {
                assert!(count.is_none());
                assert!(!fresh);
            }
            _ => panic!("Expected Session command"),
        }
    }

    #[test]
    fn parses_session_with_count_and_fresh() {
        let cli =
            Cli::try_parse_from(["wortschatz", "session", "--count", "5", "--fresh"]).unwrap();
        match cli.command {
            Commands::Session { count, fresh } => {
                assert_eq!(count, Some(5));
                assert!(fresh);
            }
            _ => panic!("Expected Session command"),
        }
    }

    #[test]
    fn parses_assess_status() {
        let cli = Cli::try_parse_from(["wortschatz", "assess", "mastered"]).unwrap();
        match cli.command {
            Commands::Assess { status, item } => {
                assert_eq!(status, "mastered");
                assert!(item.is_none());
            }
            _ => panic!("Expected Assess command"),
        }
    }

    #[test]
    fn parses_assess_with_item() {
        let cli = Cli::try_parse_from([
            "wortschatz",
            "assess",
            "needs-practice",
            "--item",
            "das-haus",
        ])
        .unwrap();
        match cli.command {
            Commands::Assess { status, item } => {
                assert_eq!(status, "needs-practice");
                assert_eq!(item, Some("das-haus".to_string()));
            }
            _ => panic!("Expected Assess command"),
        }
    }

    #[test]
    fn assess_requires_status() {
        let result = Cli::try_parse_from(["wortschatz", "assess"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_word_with_drill_and_reveal() {
        let cli =
            Cli::try_parse_from(["wortschatz", "word", "--drill", "usage", "--reveal"]).unwrap();
        match cli.command {
            Commands::Word { drill, reveal } => {
                assert_eq!(drill, Some("usage".to_string()));
                assert!(reveal);
            }
            _ => panic!("Expected Word command"),
        }
    }

    #[test]
    fn parses_gender_question_and_answer() {
        let cli = Cli::try_parse_from([
            "wortschatz",
            "gender",
            "--noun",
            "Haus",
            "--answer",
            "das",
        ])
        .unwrap();
        match cli.command {
            Commands::Gender { noun, answer } => {
                assert_eq!(noun, Some("Haus".to_string()));
                assert_eq!(answer, Some("das".to_string()));
            }
            _ => panic!("Expected Gender command"),
        }
    }

    #[test]
    fn parses_trivia_show_with_country() {
        let cli =
            Cli::try_parse_from(["wortschatz", "trivia", "show", "--country", "austria"]).unwrap();
        match cli.command {
            Commands::Trivia(TriviaCommands::Show { country }) => {
                assert_eq!(country, Some("austria".to_string()));
            }
            _ => panic!("Expected Trivia Show command"),
        }
    }

    #[test]
    fn parses_trivia_fav() {
        let cli = Cli::try_parse_from(["wortschatz", "trivia", "fav", "3"]).unwrap();
        match cli.command {
            Commands::Trivia(TriviaCommands::Fav { id }) => {
                assert_eq!(id, 3);
            }
            _ => panic!("Expected Trivia Fav command"),
        }
    }

    #[test]
    fn parses_settings_cards() {
        let cli = Cli::try_parse_from(["wortschatz", "settings", "cards", "30"]).unwrap();
        match cli.command {
            Commands::Settings(SettingsCommands::Cards { count }) => {
                assert_eq!(count, 30);
            }
            _ => panic!("Expected Settings Cards command"),
        }
    }

    #[test]
    fn parses_settings_sheet_without_url() {
        let cli = Cli::try_parse_from(["wortschatz", "settings", "sheet"]).unwrap();
        match cli.command {
            Commands::Settings(SettingsCommands::Sheet { url }) => {
                assert!(url.is_none());
            }
            _ => panic!("Expected Settings Sheet command"),
        }
    }

    #[test]
    fn parses_data_export() {
        let cli = Cli::try_parse_from(["wortschatz", "data", "export", "backup.json"]).unwrap();
        match cli.command {
            Commands::Data(DataCommands::Export { path }) => {
                assert_eq!(path, PathBuf::from("backup.json"));
            }
            _ => panic!("Expected Data Export command"),
        }
    }

    #[test]
    fn parses_data_reset_with_yes() {
        let cli = Cli::try_parse_from(["wortschatz", "data", "reset", "--yes"]).unwrap();
        match cli.command {
            Commands::Data(DataCommands::Reset { yes }) => {
                assert!(yes);
            }
            _ => panic!("Expected Data Reset command"),
        }
    }

    #[test]
    fn parses_stats_and_tui() {
        let cli = Cli::try_parse_from(["wortschatz", "stats"]).unwrap();
        assert!(matches!(cli.command, Commands::Stats));

        let cli = Cli::try_parse_from(["wortschatz", "tui"]).unwrap();
        assert!(matches!(cli.command, Commands::Tui));
    }

    #[test]
    fn global_json_flag_works_in_both_positions() {
        let cli = Cli::try_parse_from(["wortschatz", "--json", "stats"]).unwrap();
        assert!(cli.json);

        let cli = Cli::try_parse_from(["wortschatz", "stats", "--json"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn invalid_command_fails() {
        let result = Cli::try_parse_from(["wortschatz", "bogus"]);
        assert!(result.is_err());
    }
}
