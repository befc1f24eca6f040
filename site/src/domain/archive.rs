use crate::domain::backend_issue::DEFAULT_TOPIC;
use crate::domain::published_date::parse_issue_date;
use crate::domain::IssueCard;
use std::collections::BTreeSet;

pub const ALL_TOPICS: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Newest,
    Oldest,
}

impl SortMode {
    /// Unknown values fall back to `Newest`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "oldest" => Self::Oldest,
            _ => Self::Newest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TopicFilter {
    #[default]
    All,
    Only(String),
}

impl TopicFilter {
    pub fn parse(value: &str) -> Self {
        if value == ALL_TOPICS || value.is_empty() {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_TOPICS,
            Self::Only(topic) => topic,
        }
    }

    /// Exact, case-sensitive comparison against an already normalized topic.
    fn accepts(&self, topic: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == topic,
        }
    }
}

/// What the reader typed or picked in the archive controls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArchiveQuery {
    pub text: String,
    pub topic: TopicFilter,
    pub sort: SortMode,
}

impl ArchiveQuery {
    pub fn has_active_filters(&self) -> bool {
        !self.text.trim().is_empty() || self.topic != TopicFilter::All || self.sort != SortMode::Newest
    }
}

pub fn normalize_topic(topic: &str) -> String {
    let topic = topic.trim();
    if topic.is_empty() {
        DEFAULT_TOPIC.to_string()
    } else {
        topic.to_string()
    }
}

/// `"all"` followed by every distinct normalized topic, sorted.
pub fn topic_options(cards: &[IssueCard]) -> Vec<String> {
    let topics: BTreeSet<String> = cards.iter().map(|card| normalize_topic(&card.topic)).collect();

    std::iter::once(ALL_TOPICS.to_string())
        .chain(topics)
        .collect()
}

/// The cards that pass both the topic and the text filter, sorted by date.
pub fn filter_and_sort(cards: &[IssueCard], query: &ArchiveQuery) -> Vec<IssueCard> {
    let needle = query.text.trim().to_lowercase();

    let mut visible: Vec<IssueCard> = cards
        .iter()
        .filter(|card| {
            let topic = normalize_topic(&card.topic);
            query.topic.accepts(&topic) && matches_text(card, &topic, &needle)
        })
        .cloned()
        .collect();

    sort_cards(&mut visible, query.sort);
    visible
}

fn matches_text(card: &IssueCard, topic: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    let haystack = [card.title.as_str(), card.summary.as_str(), card.slug.as_str(), topic]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    haystack.contains(needle)
}

/// Cards whose date cannot be parsed sort as the oldest.
pub fn sort_cards(cards: &mut [IssueCard], mode: SortMode) {
    match mode {
        SortMode::Newest => cards.sort_by_key(|card| std::cmp::Reverse(parse_issue_date(&card.date))),
        SortMode::Oldest => cards.sort_by_key(|card| parse_issue_date(&card.date)),
    }
}
