use crate::domain::published_date::format_short;
use crate::domain::{IssueDetail, IssueStore, Section};
use crate::routes::layout::{escape_html, external_href, page, subscribe_form};
use crate::routes::PageError;
use crate::startup::ApplicationBaseUrl;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use anyhow::Context;

#[tracing::instrument(name = "Rendering an issue", skip(store, base_url))]
pub async fn issue_page(
    slug: web::Path<String>,
    store: web::Data<dyn IssueStore>,
    base_url: web::Data<ApplicationBaseUrl>,
) -> Result<HttpResponse, PageError> {
    let slug = slug.into_inner();

    let detail = match store
        .get_issue(&slug)
        .await
        .with_context(|| format!("Failed to load issue {}", slug))?
    {
        Some(detail) => detail,
        None => return Ok(not_found()),
    };

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page(&detail.title, &render_detail(&detail, &base_url.0))))
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(ContentType::html())
        .body(page(
            "Issue not found",
            r#"<section class="not-found">
    <h1>We couldn't find that breakdown.</h1>
    <p>It may have been moved or never existed.</p>
    <p><a href="/archive">← Back to all breakdowns</a></p>
</section>"#,
        ))
}

fn render_detail(detail: &IssueDetail, base_url: &str) -> String {
    let bullets: String = detail
        .bullets
        .iter()
        .map(|bullet| format!("<li>{}</li>", escape_html(bullet)))
        .collect();

    let sections: String = detail.sections.iter().map(render_section).collect();

    format!(
        r#"<link rel="canonical" href="{canonical}">
<a class="back" href="/archive">← Back to all breakdowns</a>
<p class="meta">{category} · {minutes} min read</p>
<h1>{title}</h1>
<p class="date">{date}</p>
<aside class="recap">
    <p>Quick recap</p>
    <ul>{bullets}</ul>
</aside>
<article>{sections}</article>
<section class="inline-subscribe">
    <p><strong>Liked this breakdown?</strong></p>
    <p>Get the next one in your inbox in a 3-minute, no-jargon format.</p>
    {subscribe}
</section>"#,
        canonical = escape_html(&format!(
            "{}/posts/{}",
            base_url.trim_end_matches('/'),
            urlencoding::encode(&detail.slug)
        )),
        category = escape_html(&detail.category.to_uppercase()),
        minutes = detail.minutes,
        title = escape_html(&detail.title),
        date = escape_html(&format_short(&detail.date)),
        subscribe = subscribe_form("Subscribe"),
    )
}

fn render_section(section: &Section) -> String {
    let link = section
        .is_link()
        .then(|| external_href(&section.body))
        .flatten();

    let body = if let Some(href) = link {
        format!(
            r#"<a href="{href}" target="_blank" rel="noopener noreferrer">{href}</a>"#,
            href = escape_html(&href)
        )
    } else if section.is_bulleted() {
        let items: String = section
            .items()
            .iter()
            .map(|item| format!("<li>{}</li>", escape_html(item)))
            .collect();
        format!("<ul>{}</ul>", items)
    } else {
        section
            .paragraphs()
            .map(|paragraph| format!("<p>{}</p>", escape_html(paragraph)))
            .collect()
    };

    format!(
        "<section>\n    <h2>{}</h2>\n    {}\n</section>",
        escape_html(&section.heading),
        body
    )
}
