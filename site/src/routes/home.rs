use crate::domain::archive::{sort_cards, SortMode};
use crate::domain::published_date::format_short;
use crate::domain::{IssueCard, IssueStore};
use crate::routes::layout::{escape_html, html_page, issue_card, issue_href, subscribe_form};
use crate::routes::PageError;
use actix_web::{web, HttpResponse};
use anyhow::Context;

#[tracing::instrument(name = "Rendering the home page", skip(store))]
pub async fn home(store: web::Data<dyn IssueStore>) -> Result<HttpResponse, PageError> {
    let mut cards = store
        .list_issues()
        .await
        .context("Failed to load the issue list")?;
    sort_cards(&mut cards, SortMode::Newest);

    let featured = match cards.first() {
        Some(card) => {
            let bullets = store
                .get_issue(&card.slug)
                .await
                .with_context(|| format!("Failed to load the featured issue {}", card.slug))?
                .map(|detail| detail.bullets)
                .unwrap_or_default();
            featured_card(card, &bullets)
        }
        None => r#"<p class="empty">The first breakdown is on its way.</p>"#.to_string(),
    };

    let recent: String = cards.iter().skip(1).map(issue_card).collect();

    Ok(html_page(
        "",
        &format!(
            r#"<section class="hero">
    <p class="eyebrow">Daily newsletter</p>
    <h1>Understand the news in 3 minutes.</h1>
    <p>Basic Breakdown turns complex headlines into simple, clear explanations, so you can stay informed without drowning in tabs and jargon.</p>
    {subscribe}
    <p class="fine-print">1–2 emails per week. No spam, no doomscrolling.</p>
</section>
{featured}
<section id="latest">
    <h2>Recent breakdowns</h2>
    <div class="grid">{recent}</div>
    <p><a href="/archive">Browse the full archive →</a></p>
</section>
<section id="how-it-works">
    <h2>How Basic Breakdown works</h2>
    <ol>
        <li><strong>We pick the headline.</strong> We track major stories and pick the ones that actually change something.</li>
        <li><strong>We break it down.</strong> We strip away jargon and spin, focusing on what happened, who's involved and the real context.</li>
        <li><strong>You get the bottom line.</strong> You walk away with a clear, 3-minute understanding, plus what to watch next.</li>
    </ol>
</section>"#,
            subscribe = subscribe_form("Get today's breakdown"),
        ),
    ))
}

fn featured_card(card: &IssueCard, bullets: &[String]) -> String {
    let bullets: String = bullets
        .iter()
        .map(|bullet| format!("<li>{}</li>", escape_html(bullet)))
        .collect();

    format!(
        r#"<article class="featured">
    <p class="meta">{topic} · {minutes} min read · {date}</p>
    <h2>{title}</h2>
    <p class="summary">{summary}</p>
    <ul>{bullets}</ul>
    <a href="{href}">Read today's breakdown →</a>
</article>"#,
        topic = escape_html(&capitalize(card.topic.trim())),
        minutes = card.minutes,
        date = escape_html(&format_short(&card.date)),
        title = escape_html(&card.title),
        summary = escape_html(&card.summary),
        href = issue_href(&card.slug),
    )
}

fn capitalize(topic: &str) -> String {
    let mut chars = topic.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
