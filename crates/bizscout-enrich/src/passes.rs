//! Website discovery (pass A) and social link discovery (pass B).

use std::sync::Arc;

use bizscout_core::{notes, BusinessRecord, SearchRequest};

use crate::extract::{extract_socials, extract_website, Extraction};
use crate::model::TextModel;
use crate::prompts::{socials_prompt, website_prompt};

/// Per-pass counters.
///
/// `failed` counts model errors and malformed replies; a reply that parsed
/// but had nothing usable is neither applied nor failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    pub attempted: usize,
    pub applied: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentSummary {
    /// `None` when website discovery is switched off.
    pub websites: Option<PassStats>,
    pub socials: PassStats,
}

/// Runs the enrichment passes against a language model.
#[derive(Clone)]
pub struct Enricher {
    model: Arc<dyn TextModel>,
    website_discovery: bool,
}

impl Enricher {
    #[must_use]
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self {
            model,
            website_discovery: true,
        }
    }

    #[must_use]
    pub fn with_website_discovery(mut self, enabled: bool) -> Self {
        self.website_discovery = enabled;
        self
    }

    /// Runs pass A (if enabled) then pass B over `records`, in place.
    ///
    /// Records promoted by pass A are eligible for pass B. Never fails:
    /// every per-record problem is logged and counted.
    pub async fn enrich(
        &self,
        records: &mut [BusinessRecord],
        request: &SearchRequest,
    ) -> EnrichmentSummary {
        let websites = if self.website_discovery {
            Some(self.discover_websites(records, request.location()).await)
        } else {
            None
        };
        let socials = self.discover_socials(records).await;

        EnrichmentSummary { websites, socials }
    }

    /// Pass A: asks the model for an official website for each record that
    /// has none.
    pub async fn discover_websites(
        &self,
        records: &mut [BusinessRecord],
        location: &str,
    ) -> PassStats {
        let mut stats = PassStats::default();

        for record in records.iter_mut().filter(|r| !r.has_website()) {
            stats.attempted += 1;
            let prompt = website_prompt(record.name(), record.category(), location);

            let reply = match self.model.generate(&prompt).await {
                Ok(reply) => reply,
                Err(e) => {
                    stats.failed += 1;
                    tracing::warn!(
                        place_id = record.id(),
                        error = %e,
                        "website discovery call failed"
                    );
                    continue;
                }
            };

            match extract_website(&reply) {
                Extraction::Found(url) => {
                    if record.adopt_website(&url, notes::WEBSITE_VIA_MODEL) {
                        stats.applied += 1;
                        tracing::debug!(place_id = record.id(), website = %url, "website inferred");
                    }
                }
                Extraction::Nothing => {
                    tracing::debug!(place_id = record.id(), "no website suggested");
                }
                Extraction::Malformed(reason) => {
                    stats.failed += 1;
                    tracing::warn!(
                        place_id = record.id(),
                        reason = %reason,
                        "website discovery reply could not be parsed"
                    );
                }
            }
        }

        stats
    }

    /// Pass B: asks the model for official social profiles of each record
    /// that has a website.
    pub async fn discover_socials(&self, records: &mut [BusinessRecord]) -> PassStats {
        let mut stats = PassStats::default();

        for record in records.iter_mut() {
            let Some(website) = record.website().map(str::to_owned) else {
                continue;
            };
            stats.attempted += 1;

            let reply = match self.model.generate(&socials_prompt(&website)).await {
                Ok(reply) => reply,
                Err(e) => {
                    stats.failed += 1;
                    tracing::warn!(website = %website, error = %e, "social lookup failed");
                    continue;
                }
            };

            match extract_socials(&reply) {
                Extraction::Found(links) => {
                    if record.adopt_socials(links, notes::SOCIALS_VIA_MODEL) {
                        stats.applied += 1;
                    }
                }
                Extraction::Nothing => {
                    tracing::debug!(website = %website, "no social links suggested");
                }
                Extraction::Malformed(reason) => {
                    stats.failed += 1;
                    tracing::warn!(
                        website = %website,
                        reason = %reason,
                        "social lookup reply could not be parsed"
                    );
                }
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::error::EnrichError;

    /// Replays canned replies in order and records every prompt it saw.
    struct ScriptedModel {
        replies: Mutex<VecDeque<Result<String, EnrichError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedModel {
        fn new(replies: Vec<Result<String, EnrichError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextModel for ScriptedModel {
        async fn generate(&self, prompt: &str) -> Result<String, EnrichError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(EnrichError::EmptyReply))
        }
    }

    fn ok(s: &str) -> Result<String, EnrichError> {
        Ok(s.to_string())
    }

    fn record(id: &str, website: Option<&str>) -> BusinessRecord {
        BusinessRecord::from_provider(
            id,
            Some(format!("Biz {id}")),
            "Bakery",
            None,
            None,
            website.map(str::to_string),
        )
    }

    fn request() -> SearchRequest {
        SearchRequest::new("Austin, TX", "Bakery", 10).unwrap()
    }

    #[tokio::test]
    async fn pass_a_upgrades_record_then_pass_b_sees_it() {
        let model = ScriptedModel::new(vec![
            ok(r#"{"website": "https://a.example"}"#),
            ok(r#"["https://facebook.com/a"]"#),
        ]);
        let enricher = Enricher::new(model.clone());
        let mut records = vec![record("a", None)];

        let summary = enricher.enrich(&mut records, &request()).await;

        assert_eq!(records[0].website(), Some("https://a.example"));
        assert_eq!(records[0].socials(), ["https://facebook.com/a"]);
        assert_eq!(
            records[0].verification_notes(),
            "Fetched from Google Places API | Website via Gemini (AI-inferred, verify manually) \
             | Socials via Gemini"
        );
        assert_eq!(
            summary.websites,
            Some(PassStats {
                attempted: 1,
                applied: 1,
                failed: 0
            })
        );
        assert_eq!(summary.socials.applied, 1);

        let prompts = model.prompts();
        assert!(prompts[0].contains("Business name: Biz a"));
        assert!(prompts[0].contains("Location: Austin, TX"));
        assert!(prompts[1].contains("Website: https://a.example"));
    }

    #[tokio::test]
    async fn pass_a_skips_records_with_website() {
        let model = ScriptedModel::new(vec![ok("[]")]);
        let enricher = Enricher::new(model.clone());
        let mut records = vec![record("a", Some("https://a.example"))];

        let summary = enricher.enrich(&mut records, &request()).await;

        assert_eq!(summary.websites.map(|s| s.attempted), Some(0));
        assert_eq!(summary.socials.attempted, 1);
        assert_eq!(model.prompts().len(), 1);
    }

    #[tokio::test]
    async fn website_without_scheme_is_not_applied() {
        let model = ScriptedModel::new(vec![ok(r#"{"website": "not-a-url"}"#)]);
        let enricher = Enricher::new(model);
        let mut records = vec![record("a", None)];
        let before = records.clone();

        let summary = enricher.enrich(&mut records, &request()).await;

        assert_eq!(records, before);
        assert_eq!(summary.websites.map(|s| s.applied), Some(0));
        assert_eq!(summary.socials.attempted, 0);
    }

    #[tokio::test]
    async fn failures_are_isolated_per_record() {
        let model = ScriptedModel::new(vec![
            Err(EnrichError::EmptyReply),
            ok("definitely not json"),
            ok("```json\n{\"website\": \"https://c.example\"}\n```"),
            ok("[]"),
        ]);
        let enricher = Enricher::new(model);
        let mut records = vec![record("a", None), record("b", None), record("c", None)];

        let summary = enricher.enrich(&mut records, &request()).await;

        assert_eq!(records[0].website(), None);
        assert_eq!(records[1].website(), None);
        assert_eq!(records[2].website(), Some("https://c.example"));
        assert_eq!(
            summary.websites,
            Some(PassStats {
                attempted: 3,
                applied: 1,
                failed: 2
            })
        );
        assert_eq!(
            summary.socials,
            PassStats {
                attempted: 1,
                applied: 0,
                failed: 0
            }
        );
    }

    #[tokio::test]
    async fn website_discovery_can_be_switched_off() {
        let model = ScriptedModel::new(vec![]);
        let enricher = Enricher::new(model.clone()).with_website_discovery(false);
        let mut records = vec![record("a", None)];

        let summary = enricher.enrich(&mut records, &request()).await;

        assert_eq!(summary.websites, None);
        assert!(model.prompts().is_empty());
    }

    #[tokio::test]
    async fn rerun_with_no_op_replies_leaves_records_unchanged() {
        let first = ScriptedModel::new(vec![
            ok(r#"{"website": "https://a.example"}"#),
            ok(r#"["https://instagram.com/a"]"#),
            ok(r#"["https://x.com/b"]"#),
        ]);
        let mut records = vec![record("a", None), record("b", Some("https://b.example"))];
        Enricher::new(first).enrich(&mut records, &request()).await;
        let enriched = records.clone();

        let no_op = ScriptedModel::new(vec![ok("[]"), ok("```json\n[]\n```")]);
        let summary = Enricher::new(no_op).enrich(&mut records, &request()).await;

        assert_eq!(records, enriched);
        assert_eq!(summary.websites.map(|s| s.attempted), Some(0));
        assert_eq!(summary.socials.applied, 0);
    }
}
