use serde::Serialize;

/// Provenance markers appended to [`BusinessRecord::verification_notes`].
pub mod notes {
    pub const SEPARATOR: &str = " | ";
    pub const FETCHED_FROM_PLACES: &str = "Fetched from Google Places API";
    pub const WEBSITE_VIA_MODEL: &str = "Website via Gemini (AI-inferred, verify manually)";
    pub const SOCIALS_VIA_MODEL: &str = "Socials via Gemini";
}

pub const UNKNOWN_NAME: &str = "Unknown Business";
pub const NO_ADDRESS: &str = "No address listed";
pub const NO_PHONE: &str = "N/A";

/// Returns `true` when `value` is an absolute `http://` or `https://` URL
/// with a host.
///
/// The prefix check is literal (lowercase scheme) so that anything accepted
/// here also satisfies a plain `starts_with("http")` check downstream.
#[must_use]
pub fn is_http_url(value: &str) -> bool {
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return false;
    }
    url::Url::parse(value).is_ok_and(|u| u.host_str().is_some_and(|h| !h.is_empty()))
}

/// One discovered business.
///
/// Fields are private so the enrichment invariants hold by construction:
/// `website` only ever goes from `None` to `Some`, `socials` is only set
/// while a website is known, and notes are append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRecord {
    id: String,
    name: String,
    category: String,
    address: String,
    phone: String,
    website: Option<String>,
    socials: Vec<String>,
    verification_notes: String,
}

impl BusinessRecord {
    /// Builds a record from provider data, applying placeholder defaults.
    ///
    /// Blank optional fields fall back to their placeholders. A `website`
    /// that is not an HTTP(S) URL is dropped.
    #[must_use]
    pub fn from_provider(
        id: impl Into<String>,
        name: Option<String>,
        category: impl Into<String>,
        address: Option<String>,
        phone: Option<String>,
        website: Option<String>,
    ) -> Self {
        let non_blank = |v: Option<String>| {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        };

        Self {
            id: id.into(),
            name: non_blank(name).unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            category: category.into(),
            address: non_blank(address).unwrap_or_else(|| NO_ADDRESS.to_string()),
            phone: non_blank(phone).unwrap_or_else(|| NO_PHONE.to_string()),
            website: non_blank(website).filter(|w| is_http_url(w)),
            socials: Vec::new(),
            verification_notes: notes::FETCHED_FROM_PLACES.to_string(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    #[must_use]
    pub fn socials(&self) -> &[String] {
        &self.socials
    }

    #[must_use]
    pub fn verification_notes(&self) -> &str {
        &self.verification_notes
    }

    #[must_use]
    pub fn has_website(&self) -> bool {
        self.website.is_some()
    }

    /// Sets a website discovered after the provider lookup and records the
    /// provenance `note`.
    ///
    /// Returns `false` without touching the record if a website is already
    /// known or `url` is not an HTTP(S) URL.
    pub fn adopt_website(&mut self, url: &str, note: &str) -> bool {
        let url = url.trim();
        if self.website.is_some() || !is_http_url(url) {
            return false;
        }
        self.website = Some(url.to_string());
        self.append_note(note);
        true
    }

    /// Replaces the social links and records the provenance `note`.
    ///
    /// Non-HTTP(S) entries are discarded. Returns `false` without touching
    /// the record if there is no website or nothing survives filtering.
    pub fn adopt_socials<I>(&mut self, links: I, note: &str) -> bool
    where
        I: IntoIterator<Item = String>,
    {
        if self.website.is_none() {
            return false;
        }
        let filtered: Vec<String> = links
            .into_iter()
            .map(|l| l.trim().to_string())
            .filter(|l| is_http_url(l))
            .collect();
        if filtered.is_empty() {
            return false;
        }
        self.socials = filtered;
        self.append_note(note);
        true
    }

    fn append_note(&mut self, note: &str) {
        if self.verification_notes.is_empty() {
            self.verification_notes.push_str(note);
        } else {
            self.verification_notes.push_str(notes::SEPARATOR);
            self.verification_notes.push_str(note);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bakery(website: Option<&str>) -> BusinessRecord {
        BusinessRecord::from_provider(
            "place-1",
            Some("Sunrise Bakery".to_string()),
            "Bakery",
            Some("1 Main St, Austin, TX".to_string()),
            Some("(512) 555-0100".to_string()),
            website.map(str::to_string),
        )
    }

    #[test]
    fn is_http_url_accepts_http_and_https() {
        assert!(is_http_url("http://example.com"));
        assert!(is_http_url("https://example.com/path?q=1"));
    }

    #[test]
    fn is_http_url_rejects_other_values() {
        assert!(!is_http_url("not-a-url"));
        assert!(!is_http_url("www.example.com"));
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url("https://"));
        assert!(!is_http_url("HTTPS://EXAMPLE.COM"));
        assert!(!is_http_url(""));
    }

    #[test]
    fn from_provider_applies_placeholders() {
        let record = BusinessRecord::from_provider(
            "abc",
            None,
            "Bakery",
            Some("   ".to_string()),
            None,
            Some(String::new()),
        );
        assert_eq!(record.name(), UNKNOWN_NAME);
        assert_eq!(record.address(), NO_ADDRESS);
        assert_eq!(record.phone(), NO_PHONE);
        assert_eq!(record.website(), None);
        assert!(record.socials().is_empty());
        assert_eq!(record.verification_notes(), notes::FETCHED_FROM_PLACES);
    }

    #[test]
    fn from_provider_drops_non_http_website() {
        let record = bakery(Some("sunrise-bakery.example"));
        assert_eq!(record.website(), None);
    }

    #[test]
    fn adopt_website_sets_once_and_appends_note() {
        let mut record = bakery(None);
        assert!(record.adopt_website("https://sunrise.example", notes::WEBSITE_VIA_MODEL));
        assert_eq!(record.website(), Some("https://sunrise.example"));
        assert_eq!(
            record.verification_notes(),
            "Fetched from Google Places API | Website via Gemini (AI-inferred, verify manually)"
        );

        assert!(!record.adopt_website("https://other.example", notes::WEBSITE_VIA_MODEL));
        assert_eq!(record.website(), Some("https://sunrise.example"));
    }

    #[test]
    fn adopt_website_rejects_missing_scheme() {
        let mut record = bakery(None);
        let before = record.clone();
        assert!(!record.adopt_website("not-a-url", notes::WEBSITE_VIA_MODEL));
        assert_eq!(record, before);
    }

    #[test]
    fn adopt_socials_requires_website() {
        let mut record = bakery(None);
        let before = record.clone();
        assert!(!record.adopt_socials(
            vec!["https://facebook.com/sunrise".to_string()],
            notes::SOCIALS_VIA_MODEL
        ));
        assert_eq!(record, before);
    }

    #[test]
    fn adopt_socials_filters_non_http_entries() {
        let mut record = bakery(Some("https://sunrise.example"));
        assert!(record.adopt_socials(
            vec![
                "https://instagram.com/sunrise".to_string(),
                "@sunrise".to_string(),
                "facebook.com/sunrise".to_string(),
            ],
            notes::SOCIALS_VIA_MODEL
        ));
        assert_eq!(record.socials(), ["https://instagram.com/sunrise"]);
        assert!(record.verification_notes().ends_with("| Socials via Gemini"));
    }

    #[test]
    fn adopt_socials_with_nothing_valid_is_a_no_op() {
        let mut record = bakery(Some("https://sunrise.example"));
        let before = record.clone();
        assert!(!record.adopt_socials(vec!["nope".to_string()], notes::SOCIALS_VIA_MODEL));
        assert_eq!(record, before);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let record = bakery(None);
        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(json["id"], "place-1");
        assert!(json["website"].is_null());
        assert_eq!(json["socials"], serde_json::json!([]));
        assert_eq!(json["verificationNotes"], "Fetched from Google Places API");
    }
}
