//! Pure text transforms for server-generated itineraries.
//!
//! The backend returns the plan as loosely structured prose. Everything here
//! is string-in/struct-out so a surface can style the pieces however it
//! likes; no markup is produced.

use once_cell::sync::Lazy;
use regex::Regex;

static DAY_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^day\s+\d+").unwrap());
static BULLET_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-•*+]\s+").unwrap());
static MARKUP_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new("[#*_`]").unwrap());

const SUMMARY_MIN_CHARS: usize = 50;
const SUMMARY_MAX_CHARS: usize = 200;
const SUMMARY_FALLBACK: &str = "Trip plan generated successfully";

const HIGHLIGHT_KEYWORDS: [&str; 8] = [
    "must visit",
    "recommended",
    "famous for",
    "highlight",
    "don't miss",
    "popular",
    "attraction",
    "landmark",
];
const HIGHLIGHT_MIN_CHARS: usize = 20;
const MAX_HIGHLIGHTS: usize = 5;

/// One classified itinerary line, ready for a surface to style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A `Day <n>` heading.
    DayHeader(String),
    /// A list item with its marker stripped.
    Bullet(String),
    /// Any other non-blank line.
    Paragraph(String),
}

/// Classify each line of a trip plan in input order; blank lines are dropped.
pub fn format_itinerary(text: &str) -> Vec<Fragment> {
    text.lines().filter_map(classify_line).collect()
}

fn classify_line(line: &str) -> Option<Fragment> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if DAY_MARKER.is_match(line) {
        return Some(Fragment::DayHeader(line.to_string()));
    }
    if let Some(found) = BULLET_PREFIX.find(line) {
        return Some(Fragment::Bullet(line[found.end()..].trim().to_string()));
    }
    Some(Fragment::Paragraph(line.to_string()))
}

/// A per-day slice of the plan. `title` is `None` only for prose that
/// appears before the first day marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySection {
    pub title: Option<String>,
    pub body: String,
}

/// Split a plan into per-day sections at day-marker lines.
pub fn day_sections(text: &str) -> Vec<DaySection> {
    let mut sections: Vec<DaySection> = Vec::new();
    let mut current: Option<DaySection> = None;

    for line in text.lines() {
        let trimmed = line.trim();
        if DAY_MARKER.is_match(trimmed) {
            if let Some(section) = current.take() {
                push_section(&mut sections, section);
            }
            current = Some(DaySection {
                title: Some(trimmed.to_string()),
                body: String::new(),
            });
        } else {
            let section = current.get_or_insert_with(|| DaySection {
                title: None,
                body: String::new(),
            });
            if !section.body.is_empty() {
                section.body.push('\n');
            }
            section.body.push_str(trimmed);
        }
    }
    if let Some(section) = current.take() {
        push_section(&mut sections, section);
    }
    sections
}

fn push_section(sections: &mut Vec<DaySection>, mut section: DaySection) {
    section.body = section.body.trim().to_string();
    if section.title.is_some() || !section.body.is_empty() {
        sections.push(section);
    }
}

/// First substantial paragraph of the plan, markup stripped and capped at
/// 200 characters.
pub fn extract_summary(text: &str) -> String {
    let clean = MARKUP_CHARS.replace_all(text, "");
    for line in clean.lines() {
        let line = line.trim();
        if line.chars().count() > SUMMARY_MIN_CHARS {
            if line.chars().count() > SUMMARY_MAX_CHARS {
                let cut: String = line.chars().take(SUMMARY_MAX_CHARS).collect();
                return format!("{cut}...");
            }
            return line.to_string();
        }
    }
    SUMMARY_FALLBACK.to_string()
}

/// Lines that read like key attractions or recommendations, cleaned of
/// markers and markup, at most five.
pub fn highlights(text: &str) -> Vec<String> {
    let mut found = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        let lower = line.to_lowercase();
        if !HIGHLIGHT_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
            continue;
        }
        let clean = BULLET_PREFIX.replace(line, "");
        let clean = MARKUP_CHARS.replace_all(&clean, "");
        let clean = clean.trim();
        if clean.chars().count() > HIGHLIGHT_MIN_CHARS {
            found.push(clean.to_string());
            if found.len() == MAX_HIGHLIGHTS {
                break;
            }
        }
    }
    found
}

/// Thousands-separated display of a budget figure, rounded to whole units.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let digits = (amount.abs().round() as u64).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}
