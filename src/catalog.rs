use std::time::Duration;

use thiserror::Error;

use crate::models::StudyItem;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no usable rows in source")]
    Empty,
}

// First cells that mark a header row rather than data
const HEADER_KEYWORDS: &[&str] = &["german", "deutsch", "word", "prompt", "front", "question"];

// Stable id for a card, derived from its prompt so review history survives
// catalog reloads. Umlauts are kept; everything non-alphanumeric collapses
// to a single hyphen.
pub fn item_id(prompt: &str) -> String {
    let mut id = String::new();
    let mut last_was_hyphen = true;

    for c in prompt.to_lowercase().chars() {
        if c.is_alphanumeric() {
            id.push(c);
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            id.push('-');
            last_was_hyphen = true;
        }
    }

    while id.ends_with('-') {
        id.pop();
    }
    id
}

// Rows are `prompt, answer[, category[, difficulty]]`. A leading all-digits
// column is a row number and is skipped; a recognised header row is skipped;
// rows without both prompt and answer are discarded. Bad difficulty values
// fall back to 2 and clamp into 1..=5.
pub fn parse_catalog(text: &str) -> Vec<StudyItem> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut items = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(_) => continue,
        };

        let mut fields: Vec<&str> = record.iter().collect();

        if idx == 0 {
            let first = fields.first().map(|s| s.to_lowercase()).unwrap_or_default();
            if HEADER_KEYWORDS.contains(&first.as_str()) {
                continue;
            }
        }

        // Spreadsheet exports often carry a numbering column
        if fields.len() >= 3 && fields[0].chars().all(|c| c.is_ascii_digit()) && !fields[0].is_empty()
        {
            fields.remove(0);
        }

        let prompt = fields.first().copied().unwrap_or_default();
        let answer = fields.get(1).copied().unwrap_or_default();
        if prompt.is_empty() || answer.is_empty() {
            continue;
        }

        let category = fields
            .get(2)
            .map(|s| s.to_string())
            .filter(|s| !s.is_empty());
        let difficulty = fields
            .get(3)
            .and_then(|s| s.parse::<i32>().ok())
            .map(|d| d.clamp(1, 5))
            .unwrap_or(2);

        items.push(StudyItem {
            id: item_id(prompt),
            prompt: prompt.to_string(),
            answer: answer.to_string(),
            category,
            difficulty,
        });
    }

    items
}

fn id_segment(rest: &str) -> &str {
    let end = rest
        .find(|c| c == '/' || c == '?' || c == '#')
        .unwrap_or(rest.len());
    &rest[..end]
}

// Turns the spreadsheet URLs people actually paste (editor links, published
// pages, bare document links) into their CSV export form. Already-CSV URLs
// and anything unrecognised pass through unchanged.
pub fn export_url(url: &str) -> String {
    if url.contains("export?format=csv") || url.contains("output=csv") {
        return url.to_string();
    }

    if let Some(pos) = url.find("/edit") {
        let base = &url[..pos];
        let gid: Option<String> = url[pos..].find("gid=").map(|g| {
            url[pos + g + 4..]
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect()
        });
        return match gid.filter(|g| !g.is_empty()) {
            Some(g) => format!("{}/export?format=csv&gid={}", base, g),
            None => format!("{}/export?format=csv", base),
        };
    }

    if url.contains("/pubhtml") {
        if let Some(start) = url.find("/spreadsheets/d/e/") {
            let id = id_segment(&url[start + "/spreadsheets/d/e/".len()..]);
            if !id.is_empty() {
                return format!(
                    "https://docs.google.com/spreadsheets/d/e/{}/pub?output=csv",
                    id
                );
            }
        }
        return url.to_string();
    }

    if let Some(start) = url.find("/spreadsheets/d/") {
        let rest = &url[start + "/spreadsheets/d/".len()..];
        if !rest.starts_with("e/") {
            let id = id_segment(rest);
            if !id.is_empty() {
                return format!(
                    "https://docs.google.com/spreadsheets/d/{}/export?format=csv",
                    id
                );
            }
        }
    }

    url.to_string()
}

// Network boundary for remote catalogs. Swappable so loading logic is
// testable without a server.
pub trait SourceFetcher {
    fn fetch(&self, url: &str) -> Result<String, CatalogError>;
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, CatalogError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(HttpFetcher { client })
    }
}

impl SourceFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, CatalogError> {
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.text()?)
    }
}

// Loads cards from a URL (via the fetcher) or a local file path. An
// unusable source is an error; the caller keeps whatever catalog it had.
pub fn load_source<F: SourceFetcher>(
    fetcher: &F,
    source: &str,
) -> Result<Vec<StudyItem>, CatalogError> {
    let text = if source.starts_with("http://") || source.starts_with("https://") {
        fetcher.fetch(&export_url(source))?
    } else {
        std::fs::read_to_string(source)?
    };

    let items = parse_catalog(&text);
    if items.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(items)
}
