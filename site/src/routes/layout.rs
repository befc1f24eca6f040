use crate::domain::published_date::format_short;
use crate::domain::IssueCard;
use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

const SITE_NAME: &str = "Basic Breakdown";

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// `raw` as an outbound link target, if it is an absolute http(s) URL.
pub fn external_href(raw: &str) -> Option<String> {
    let url = reqwest::Url::parse(raw.trim()).ok()?;
    match url.scheme() {
        "http" | "https" => Some(url.to_string()),
        _ => None,
    }
}

pub fn issue_href(slug: &str) -> String {
    format!("/posts/{}", urlencoding::encode(slug))
}

pub fn html_page(title: &str, body: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page(title, body))
}

/// Wraps page content in the shared header, footer and document head.
pub fn page(title: &str, body: &str) -> String {
    let title = if title.is_empty() {
        SITE_NAME.to_string()
    } else {
        format!("{} | {}", escape_html(title), SITE_NAME)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
</head>
<body>
<header class="site-header">
    <a href="/" class="brand">BASIC<br>BREAKDOWN</a>
    <nav>
        <a href="/archive">ARCHIVE</a>
        <a href="/about">ABOUT</a>
    </nav>
</header>
<main>
{body}
</main>
<footer class="site-footer">
    <p><strong>{SITE_NAME}</strong></p>
    <p>Simple, context-rich explanations of the stories that matter, in minutes, not hours.</p>
</footer>
</body>
</html>"#,
    )
}

pub fn subscribe_form(call_to_action: &str) -> String {
    format!(
        r#"<form class="subscribe" onsubmit="return false;">
        <input type="email" required placeholder="you@example.com" aria-label="Email address">
        <button type="submit">{}</button>
    </form>"#,
        escape_html(call_to_action)
    )
}

/// One issue in a listing: topic, date, title, summary and reading time.
pub fn issue_card(card: &IssueCard) -> String {
    let href = issue_href(&card.slug);
    let source = card
        .read_more
        .as_deref()
        .and_then(external_href)
        .map(|url| {
            format!(
                r#" <a class="source" href="{}" target="_blank" rel="noopener noreferrer">Source</a>"#,
                escape_html(&url)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<article class="issue-card">
    <p class="meta">{topic} · {date}</p>
    <h3><a href="{href}">{title}</a></h3>
    <p class="summary">{summary}</p>
    <p class="footer"><span>{minutes} min read</span> <a href="{href}">Read <span aria-hidden="true">→</span></a>{source}</p>
</article>"#,
        topic = escape_html(&card.topic.trim().to_uppercase()),
        date = escape_html(&format_short(&card.date)),
        title = escape_html(&card.title),
        summary = escape_html(&card.summary),
        minutes = card.minutes,
    )
}
