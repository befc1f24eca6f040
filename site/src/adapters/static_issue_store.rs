use crate::domain::envelope::IssueListEnvelope;
use crate::domain::{IssueCard, IssueDetail, IssueStore, IssueStoreError};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;

/// Serves a fixed payload, shaped like a content API response.
///
/// Used for local development and as a fallback when no content API is
/// configured. The payload goes through the same envelope decoding as API
/// responses, so it may use any accepted envelope.
#[derive(Clone)]
pub struct StaticIssueStore {
    payload: Arc<Value>,
}

impl StaticIssueStore {
    pub fn new(payload: Value) -> Self {
        Self {
            payload: Arc::new(payload),
        }
    }

    /// The three breakdowns the site launched with.
    pub fn sample() -> Self {
        Self::new(json!({ "data": { "issues": sample_issues() } }))
    }

    fn envelope(&self) -> IssueListEnvelope {
        IssueListEnvelope::classify(self.payload.as_ref().clone())
    }
}

#[async_trait]
impl IssueStore for StaticIssueStore {
    async fn list_issues(&self) -> Result<Vec<IssueCard>, IssueStoreError> {
        Ok(self.envelope().into_cards(Utc::now()))
    }

    async fn get_issue(&self, slug: &str) -> Result<Option<IssueDetail>, IssueStoreError> {
        let now = Utc::now();
        Ok(self
            .envelope()
            .into_issues()
            .iter()
            .find(|issue| issue.slug == slug)
            .map(|issue| IssueDetail::from_backend(issue, now)))
    }
}

fn sample_issues() -> Value {
    json!([
        {
            "slug": "hong-kong-apartment-blaze-safety-crisis",
            "title": "Deadly Hong Kong blaze exposes hidden risks in older apartment blocks",
            "category": "world",
            "publishedAt": "2025-11-29T08:00:00.000Z",
            "previewText": "- What happened and how the fire spread through older buildings\n- Why renovation covers and cramped layouts made it worse\n- What this reveals about Hong Kong's housing crisis",
            "intro": "A large fire broke out in a cluster of older apartment buildings in Hong Kong, quickly spreading through multiple floors. The buildings were wrapped in bamboo scaffolding and plastic sheeting due to ongoing renovations, which helped the fire jump from level to level.",
            "whatsGoingOn": "Hong Kong has some of the most crowded housing in the world. Older buildings often rely on outdated wiring, narrow stairwells and improvised renovations. These temporary fixes can stay in place for years, leaving residents exposed to fire and structural risks.",
            "whyItMatters": "The blaze highlights a long-running tension between scarce housing, slow regulation and the cost of safety upgrades.\n- How many other buildings are vulnerable\n- Whether inspections turn into reform of building codes\n- What support low-income residents get"
        },
        {
            "slug": "eu-targets-big-tech-with-ai-rules",
            "title": "EU targets big tech with new AI and competition rules",
            "category": "tech",
            "publishedAt": "2025-11-28T08:00:00.000Z",
            "previewText": "- New EU rules on AI and gatekeeper platforms\n- What tech companies will have to change\n- How this could affect users and startups",
            "intro": "The EU has introduced a new package of regulations aimed at AI systems and large digital platforms. These rules seek to limit opaque algorithms, risky AI uses and anti-competitive behaviour from the biggest tech companies.",
            "whatsGoingOn": "Europe has positioned itself as the global regulator for Big Tech, previously passing laws on data privacy and platform responsibility. The new rules extend that approach into AI and competition.",
            "whyItMatters": "For tech giants, it means more compliance costs and constraints on how they can use data and deploy AI. For users and smaller companies, it could mean more transparency and a fairer playing field, but also slower product rollouts in Europe.",
            "readMore": "https://digital-strategy.ec.europa.eu/en/policies/regulatory-framework-ai"
        },
        {
            "slug": "inflation-cools-what-it-means-for-your-budget",
            "title": "Inflation is cooling, but prices still feel high. Here's why.",
            "category": "money",
            "createdAt": "2025-11-26T08:00:00.000Z",
            "previewText": "Inflation rates are slowing down, yet many people say their wallets still feel squeezed. Both things can be true at once.",
            "intro": "Recent data shows inflation growing more slowly than in previous months. Central banks see this as a sign that interest rate hikes are starting to work.",
            "whyItMatters": "Households still face higher rent, food and energy costs compared to a few years ago. Slower inflation does not rewind those increases, but it can make it easier for wages to catch up over time."
        }
    ])
}
