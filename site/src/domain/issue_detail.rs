use crate::domain::{estimate_minutes, BackendIssue};
use chrono::{DateTime, Utc};
use serde::Serialize;

const MAX_BULLETS: usize = 4;
const BULLET_MARKERS: &[char] = &['-', '–', '—', '•', '·', '●', '◦', '*'];

/// Everything the issue page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueDetail {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub minutes: u32,
    pub date: String,
    pub bullets: Vec<String>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

impl Section {
    fn new(heading: &str, body: &str) -> Self {
        Self {
            heading: heading.to_string(),
            body: body.to_string(),
        }
    }

    /// The "Read more" section holds a link rather than prose.
    pub fn is_link(&self) -> bool {
        self.heading.eq_ignore_ascii_case("read more")
    }

    /// True when any line of the body starts with a `-` or `•` marker.
    pub fn is_bulleted(&self) -> bool {
        self.body.lines().any(|line| {
            line.trim_start()
                .starts_with(|c: char| c == '-' || c == '•')
        })
    }

    /// The body as list items, markers stripped and blank lines dropped.
    pub fn items(&self) -> Vec<String> {
        self.body
            .split('\n')
            .map(clean_bullet)
            .filter(|item| !item.is_empty())
            .collect()
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.body.split('\n')
    }
}

impl IssueDetail {
    pub fn from_backend(issue: &BackendIssue, now: DateTime<Utc>) -> Self {
        let full_text = issue.full_text();
        let minutes = if !full_text.is_empty() {
            estimate_minutes(&full_text)
        } else {
            match issue.preview_text.as_deref() {
                Some(preview) if !preview.is_empty() => estimate_minutes(preview),
                _ => estimate_minutes(&issue.title),
            }
        };

        Self {
            slug: issue.slug.clone(),
            title: issue.title.clone(),
            category: issue.topic(),
            date: issue.resolve_date(now),
            bullets: make_bullets(issue),
            sections: make_sections(issue),
            minutes,
        }
    }
}

/// Strips any leading run of bullet markers, repeatedly, so doubled markers
/// such as `- • item` are removed too.
pub fn clean_bullet(line: &str) -> String {
    let mut current = line.trim_start();

    loop {
        let next = current.trim_start_matches(BULLET_MARKERS).trim_start();
        if next == current {
            break;
        }
        current = next;
    }

    current.trim().to_string()
}

fn make_bullets(issue: &BackendIssue) -> Vec<String> {
    let source = issue
        .preview_text
        .as_deref()
        .or(issue.whats_going_on.as_deref())
        .or(issue.intro.as_deref())
        .or(issue.why_it_matters.as_deref())
        .unwrap_or("");

    let mut bullets: Vec<String> = source
        .split('\n')
        .map(clean_bullet)
        .filter(|line| !line.is_empty())
        .collect();

    if bullets.is_empty() {
        let whole = clean_bullet(source);
        if !whole.is_empty() {
            bullets.push(whole);
        }
    }

    bullets.truncate(MAX_BULLETS);

    if bullets.is_empty() {
        bullets.push("New issue is live.".to_string());
    }
    if bullets.len() == 1 {
        bullets.push("Read on for the full breakdown.".to_string());
    }

    bullets
}

fn make_sections(issue: &BackendIssue) -> Vec<Section> {
    let sources = [
        ("The big picture", &issue.intro),
        ("What's going on", &issue.whats_going_on),
        ("Why it matters", &issue.why_it_matters),
        ("Read more", &issue.read_more),
    ];

    let sections: Vec<Section> = sources
        .into_iter()
        .filter_map(|(heading, body)| {
            let body = body.as_deref()?.trim();
            (!body.is_empty()).then(|| Section::new(heading, body))
        })
        .collect();

    if !sections.is_empty() {
        return sections;
    }

    vec![Section::new(
        "Update",
        issue.preview_text.as_deref().unwrap_or("New issue."),
    )]
}
