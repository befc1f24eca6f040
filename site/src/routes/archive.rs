use crate::domain::archive::{
    filter_and_sort, topic_options, ArchiveQuery, SortMode, TopicFilter, ALL_TOPICS,
};
use crate::domain::IssueStore;
use crate::routes::layout::{escape_html, html_page, issue_card};
use crate::routes::PageError;
use actix_web::{web, HttpResponse};
use anyhow::Context;

/// Archive controls, as submitted by the search form.
#[derive(serde::Deserialize, Debug, Default)]
pub struct ArchiveParams {
    pub q: Option<String>,
    pub topic: Option<String>,
    pub sort: Option<String>,
}

impl From<ArchiveParams> for ArchiveQuery {
    fn from(params: ArchiveParams) -> Self {
        Self {
            text: params.q.unwrap_or_default(),
            topic: TopicFilter::parse(params.topic.as_deref().unwrap_or(ALL_TOPICS)),
            sort: SortMode::parse(params.sort.as_deref().unwrap_or_default()),
        }
    }
}

#[tracing::instrument(name = "Rendering the archive", skip(store))]
pub async fn archive(
    params: web::Query<ArchiveParams>,
    store: web::Data<dyn IssueStore>,
) -> Result<HttpResponse, PageError> {
    let cards = store
        .list_issues()
        .await
        .context("Failed to load the issue list")?;

    let query: ArchiveQuery = params.into_inner().into();
    let visible = filter_and_sort(&cards, &query);

    let topics: String = topic_options(&cards)
        .iter()
        .map(|topic| {
            let label = if topic == ALL_TOPICS {
                "All topics".to_string()
            } else {
                escape_html(topic)
            };
            format!(
                r#"<option value="{value}"{selected}>{label}</option>"#,
                value = escape_html(topic),
                selected = selected(topic == query.topic.as_str()),
            )
        })
        .collect();

    let sort_options: String = [SortMode::Newest, SortMode::Oldest]
        .iter()
        .map(|mode| {
            format!(
                r#"<option value="{value}"{selected}>{label}</option>"#,
                value = mode.as_str(),
                selected = selected(*mode == query.sort),
                label = match mode {
                    SortMode::Newest => "Newest",
                    SortMode::Oldest => "Oldest",
                },
            )
        })
        .collect();

    let reset = if query.has_active_filters() {
        r#"<a class="reset" href="/archive">Reset</a>"#
    } else {
        ""
    };

    let results = if visible.is_empty() {
        r#"<div class="empty">
        <p><strong>No matches.</strong></p>
        <p>Try a different search term or clear filters.</p>
    </div>"#
            .to_string()
    } else {
        format!(
            r#"<div class="grid">{}</div>"#,
            visible.iter().map(issue_card).collect::<String>()
        )
    };

    Ok(html_page(
        "Archive",
        &format!(
            r#"<section class="archive">
    <p class="eyebrow">Archive</p>
    <h1>Full archive</h1>
    <p>Browse every breakdown. Search by keyword, filter by topic, or sort by date.</p>
    <form class="controls" method="get" action="/archive">
        <input type="search" name="q" value="{text}" placeholder="Search titles, summaries, topics…" aria-label="Search">
        <select name="topic" aria-label="Topic">{topics}</select>
        <select name="sort" aria-label="Sort">{sort_options}</select>
        <button type="submit">Apply</button>
    </form>
    <p class="meta">Showing <strong>{shown}</strong> of {total} {reset}</p>
    {results}
</section>"#,
            text = escape_html(&query.text),
            shown = visible.len(),
            total = cards.len(),
        ),
    ))
}

fn selected(is_selected: bool) -> &'static str {
    if is_selected {
        " selected"
    } else {
        ""
    }
}
