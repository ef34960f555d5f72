// Built-in material so the app works before any catalog is imported.

use crate::catalog::item_id;
use crate::gender::{Gender, GenderNoun};
use crate::models::StudyItem;
use crate::trivia::{Country, TriviaFact};
use crate::wordofday::WordEntry;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn card(prompt: &str, answer: &str, category: &str, difficulty: i32) -> StudyItem {
    StudyItem {
        id: item_id(prompt),
        prompt: prompt.to_string(),
        answer: answer.to_string(),
        category: Some(category.to_string()),
        difficulty,
    }
}

pub fn starter_catalog() -> Vec<StudyItem> {
    vec![
        card("das Haus", "the house", "nouns", 1),
        card("der Hund", "the dog", "nouns", 1),
        card("die Katze", "the cat", "nouns", 1),
        card("laufen", "to run", "verbs", 2),
        card("sprechen", "to speak", "verbs", 2),
        card("schön", "beautiful", "adjectives", 2),
        card("schnell", "fast", "adjectives", 2),
        card("schwierig", "difficult", "adjectives", 3),
        card("verstehen", "to understand", "verbs", 3),
        card("der Kühlschrank", "the refrigerator", "nouns", 3),
    ]
}

pub fn daily_words() -> Vec<WordEntry> {
    vec![
        WordEntry {
            word: "verschärfen".to_string(),
            translation: "to intensify".to_string(),
            pronunciation: "fɛʁˈʃɛʁfən".to_string(),
            gender: None,
            word_type: "verb".to_string(),
            example: "Die Sicherheitsmaßnahmen wurden verschärft.".to_string(),
            example_translation: "The security measures were intensified.".to_string(),
            difficulty: 3,
            alternatives: strings(&[
                "to intensify",
                "to sharpen",
                "to tighten up",
                "to make stricter",
            ]),
            note: "Often used in formal contexts like laws, regulations, or policies"
                .to_string(),
            similar_examples: strings(&[
                "Die Sicherheit wurde verschärft. - Security was tightened.",
                "Wir müssen die Kontrollen verschärfen. - We need to intensify the controls.",
            ]),
            variations: strings(&[
                "verschärft (past participle) - \"Die verschärften Regeln\"",
                "Verschärfung (noun) - \"Die Verschärfung der Lage\"",
            ]),
        },
        WordEntry {
            word: "Nachhaltigkeit".to_string(),
            translation: "sustainability".to_string(),
            pronunciation: "ˈnaːxhaltɪçkaɪt".to_string(),
            gender: Some("die".to_string()),
            word_type: "noun".to_string(),
            example: "Nachhaltigkeit ist ein wichtiges Thema.".to_string(),
            example_translation: "Sustainability is an important topic.".to_string(),
            difficulty: 3,
            alternatives: strings(&["sustainability", "durability", "long-term viability"]),
            note: "A key concept in German environmental and business discourse".to_string(),
            similar_examples: strings(&[
                "Nachhaltigkeit ist unser Ziel. - Sustainability is our goal.",
                "Die Nachhaltigkeit des Projekts ist wichtig. - The sustainability of the project is important.",
            ]),
            variations: vec![],
        },
        WordEntry {
            word: "beeindruckend".to_string(),
            translation: "impressive".to_string(),
            pronunciation: "bəˈʔaɪndrʊkənt".to_string(),
            gender: None,
            word_type: "adjective".to_string(),
            example: "Das war eine beeindruckende Leistung.".to_string(),
            example_translation: "That was an impressive performance.".to_string(),
            difficulty: 2,
            alternatives: strings(&[
                "impressive",
                "striking",
                "remarkable",
                "awe-inspiring",
            ]),
            note: "Can describe anything from performances to achievements".to_string(),
            similar_examples: strings(&[
                "Das Ergebnis war beeindruckend. - The result was impressive.",
                "Sie hat eine beeindruckende Leistung gezeigt. - She showed an impressive performance.",
            ]),
            variations: vec![],
        },
        WordEntry {
            word: "sich bemühen".to_string(),
            translation: "to make an effort".to_string(),
            pronunciation: "zɪç bəˈmyːən".to_string(),
            gender: None,
            word_type: "reflexive verb".to_string(),
            example: "Ich bemühe mich, pünktlich zu sein.".to_string(),
            example_translation: "I make an effort to be on time.".to_string(),
            difficulty: 3,
            alternatives: strings(&[
                "to make an effort",
                "to strive",
                "to endeavor",
                "to try hard",
            ]),
            note: "Reflexive verb - always use \"sich\" with the appropriate pronoun".to_string(),
            similar_examples: vec![],
            variations: strings(&[
                "ich bemühe mich - I make an effort",
                "er/sie bemüht sich - he/she makes an effort",
                "wir bemühen uns - we make an effort",
            ]),
        },
        WordEntry {
            word: "Herausforderung".to_string(),
            translation: "challenge".to_string(),
            pronunciation: "hɛˈʁaʊsfɔʁdəʁʊŋ".to_string(),
            gender: Some("die".to_string()),
            word_type: "noun".to_string(),
            example: "Das ist eine große Herausforderung.".to_string(),
            example_translation: "This is a big challenge.".to_string(),
            difficulty: 2,
            alternatives: strings(&["challenge", "test", "difficulty", "hurdle"]),
            note: "Can be positive (opportunity) or negative (obstacle)".to_string(),
            similar_examples: vec![],
            variations: strings(&[
                "eine große Herausforderung - a big challenge",
                "Herausforderungen annehmen - to accept challenges",
            ]),
        },
    ]
}

fn noun(
    noun: &str,
    gender: Gender,
    plural: &str,
    meaning: &str,
    category: &str,
    difficulty: i32,
) -> GenderNoun {
    GenderNoun {
        noun: noun.to_string(),
        gender,
        plural: plural.to_string(),
        meaning: meaning.to_string(),
        category: category.to_string(),
        difficulty,
    }
}

pub fn gender_nouns() -> Vec<GenderNoun> {
    vec![
        noun("Haus", Gender::Das, "Häuser", "house", "buildings", 1),
        noun("Katze", Gender::Die, "Katzen", "cat", "animals", 1),
        noun("Hund", Gender::Der, "Hunde", "dog", "animals", 1),
        noun("Auto", Gender::Das, "Autos", "car", "vehicles", 1),
        noun("Tisch", Gender::Der, "Tische", "table", "furniture", 1),
        noun("Wand", Gender::Die, "Wände", "wall", "buildings", 2),
        noun("Fenster", Gender::Das, "Fenster", "window", "buildings", 2),
        noun(
            "Freundschaft",
            Gender::Die,
            "Freundschaften",
            "friendship",
            "abstract",
            3,
        ),
        noun(
            "Verständnis",
            Gender::Das,
            "Verständnisse",
            "understanding",
            "abstract",
            3,
        ),
        noun(
            "Bürgermeister",
            Gender::Der,
            "Bürgermeister",
            "mayor",
            "people",
            3,
        ),
        noun(
            "Universität",
            Gender::Die,
            "Universitäten",
            "university",
            "education",
            2,
        ),
        noun("Mädchen", Gender::Das, "Mädchen", "girl", "people", 2),
        noun("Frau", Gender::Die, "Frauen", "woman", "people", 1),
        noun("Mann", Gender::Der, "Männer", "man", "people", 1),
        noun("Buch", Gender::Das, "Bücher", "book", "objects", 1),
    ]
}

#[allow(clippy::too_many_arguments)]
fn fact(
    id: u32,
    title: &str,
    fact: &str,
    country: Country,
    category: &str,
    difficulty: i32,
    fun_rating: i32,
    source: Option<&str>,
) -> TriviaFact {
    TriviaFact {
        id,
        title: title.to_string(),
        fact: fact.to_string(),
        country,
        category: category.to_string(),
        difficulty,
        fun_rating,
        source: source.map(|s| s.to_string()),
    }
}

pub fn trivia_facts() -> Vec<TriviaFact> {
    vec![
        fact(
            1,
            "German Christmas Markets",
            "Germany hosts over 2,500 Christmas markets every year. The oldest, in Dresden, \
             dates back to 1434. Visitors warm up with Glühwein and Lebkuchen while browsing \
             the Weihnachtsmärkte.",
            Country::Germany,
            "traditions",
            2,
            5,
            Some("German National Tourist Board"),
        ),
        fact(
            2,
            "Swiss Cheese Holes",
            "The holes in Swiss cheese are called 'eyes'. They form when bacteria release \
             carbon dioxide during ripening, and cheesemakers judge maturity by tapping the \
             wheel and listening.",
            Country::Switzerland,
            "food",
            2,
            4,
            None,
        ),
        fact(
            3,
            "Austrian Sound of Music",
            "The Sound of Music, beloved around the world, was never popular in Austria \
             itself. Many Austrians have never seen the film and barely know its songs.",
            Country::Austria,
            "culture",
            3,
            4,
            None,
        ),
        fact(
            4,
            "German Bread Diversity",
            "Germany bakes more than 3,000 officially recognized types of bread, a culture \
             UNESCO added to its intangible heritage list in 2014. Germans eat around 85 kg \
             of bread per person each year.",
            Country::Germany,
            "food",
            2,
            4,
            None,
        ),
        fact(
            5,
            "Swiss Punctuality",
            "Swiss trains are famously punctual, with an average delay of about three \
             minutes. Passengers can even claim a partial refund when connections run badly \
             late.",
            Country::Switzerland,
            "culture",
            2,
            4,
            None,
        ),
        fact(
            6,
            "German Recycling",
            "Germany recycles about 68% of its household waste, one of the highest rates in \
             the world. Trash is sorted into color-coded bins, collected on specific days, \
             and wrong sorting can draw fines.",
            Country::Germany,
            "culture",
            2,
            3,
            None,
        ),
        fact(
            7,
            "Austrian Coffeehouse Culture",
            "Viennese coffeehouse culture is listed by UNESCO as intangible heritage. A \
             traditional Kaffeehaus serves more than 30 coffee preparations, and guests may \
             linger for hours over a single cup.",
            Country::Austria,
            "culture",
            3,
            4,
            None,
        ),
        fact(
            8,
            "German Autobahn",
            "About 70% of the German Autobahn has no general speed limit, only a recommended \
             130 km/h. The network dates back to the 1930s and now spans roughly 13,000 km.",
            Country::Germany,
            "geography",
            2,
            5,
            None,
        ),
        fact(
            9,
            "Swiss Direct Democracy",
            "Swiss citizens vote in national referendums three to four times a year, \
             deciding everything from local matters to constitutional change.",
            Country::Switzerland,
            "culture",
            4,
            4,
            None,
        ),
        fact(
            10,
            "German Kindergarten",
            "The Kindergarten was invented in Germany by Friedrich Fröbel in 1840. The word, \
             literally 'children's garden', spread unchanged into many other languages.",
            Country::Germany,
            "history",
            3,
            4,
            None,
        ),
    ]
}
