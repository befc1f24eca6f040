use crate::routes::layout::{escape_html, html_page, subscribe_form};
use actix_web::HttpResponse;

const CHIPS: [&str; 5] = [
    "One story per issue",
    "Plain English",
    "Context + stakes",
    "No doomscrolling",
    "Links to go deeper",
];

const WHAT_YOU_GET: [(&str, &str); 4] = [
    (
        "What's going on",
        "A clear summary of the event, without assuming you've been following it all week.",
    ),
    (
        "Why it matters",
        "The real-world impact: money, power, safety, tech, your time. Whatever the stakes are.",
    ),
    (
        "What to watch next",
        "The next decision, vote, deadline, or consequence that could change the story.",
    ),
    (
        "Optional links",
        "If you want to go deeper, you'll get a couple of reputable sources, not a rabbit hole.",
    ),
];

const PRINCIPLES: [&str; 4] = [
    "We avoid jargon. If a term matters, we define it.",
    "We write for people who are busy, not people who refresh the news all day.",
    "We prioritize clarity over speed. Better to be right and readable than first.",
    "We separate facts from what's uncertain (and say what we're watching).",
];

const FAQ: [(&str, &str); 5] = [
    (
        "How often do you publish?",
        "When there's a story worth breaking down. The goal is quality and clarity, not spam.",
    ),
    (
        "Is it free?",
        "Yes. The free version is meant to be useful on its own.",
    ),
    (
        "Where do the sources come from?",
        "Primary reporting and reputable outlets. Issues include a \"Read more\" link when it helps.",
    ),
    (
        "Can I suggest a story?",
        "Yes. Share a link and a one-sentence \"why it matters\" and it's easy to evaluate.",
    ),
    ("Can I unsubscribe anytime?", "Always. One click."),
];

pub async fn about() -> HttpResponse {
    let chips: String = CHIPS
        .iter()
        .map(|chip| format!(r#"<span class="chip">{}</span>"#, escape_html(chip)))
        .collect();

    let what_you_get: String = WHAT_YOU_GET
        .iter()
        .map(|(title, description)| {
            format!(
                "<div><p><strong>{}</strong></p><p>{}</p></div>",
                escape_html(title),
                escape_html(description)
            )
        })
        .collect();

    let principles: String = PRINCIPLES
        .iter()
        .map(|line| format!("<li>{}</li>", escape_html(line)))
        .collect();

    let faq: String = FAQ
        .iter()
        .map(|(question, answer)| {
            format!(
                "<details><summary>{}</summary><p>{}</p></details>",
                escape_html(question),
                escape_html(answer)
            )
        })
        .collect();

    html_page(
        "About",
        &format!(
            r#"<section class="about">
    <p class="eyebrow">About</p>
    <h1>What is Basic Breakdown?</h1>
    <p>Basic Breakdown is a short-form newsletter that explains one important story at a time: what happened, why it matters, and what to watch next. Designed to be readable in about 3 minutes.</p>
    <div class="chips">{chips}</div>
</section>
<section>
    <h2>WHAT YOU GET IN EACH ISSUE</h2>
    <div class="grid">{what_you_get}</div>
</section>
<section>
    <h2>HOW WE KEEP IT SIMPLE</h2>
    <ul>{principles}</ul>
</section>
<section>
    <h2>SAMPLE FORMAT</h2>
    <div class="sample">
        <p><strong>What happened</strong></p>
        <p>A quick, plain-language summary of the event in 2–4 sentences.</p>
        <p><strong>Why it matters</strong></p>
        <p>The consequence: who's affected, what changes, and why this is bigger than a headline.</p>
        <p><strong>What to watch</strong></p>
        <p>The next decision or deadline that could move the story.</p>
    </div>
</section>
<section id="faq">
    <h2>FAQ</h2>
    {faq}
</section>
<section class="cta">
    <p><strong>Want the next breakdown?</strong></p>
    <p>One important story. Clear context. Fast read.</p>
    {subscribe}
</section>"#,
            subscribe = subscribe_form("Subscribe"),
        ),
    )
}
