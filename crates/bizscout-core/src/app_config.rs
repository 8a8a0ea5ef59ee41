use std::net::SocketAddr;

/// Which outbound collaborators this process is allowed to call.
///
/// Derived once from credential presence so callers branch on a flag instead
/// of re-checking optional keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub places: bool,
    pub model: bool,
}

#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub places_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub model_temperature: f32,
    pub website_discovery: bool,
    pub places_timeout_secs: u64,
    pub model_timeout_secs: u64,
    pub user_agent: String,
}

impl AppConfig {
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            places: self.places_api_key.is_some(),
            model: self.gemini_api_key.is_some(),
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "places_api_key",
                &self.places_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("gemini_model", &self.gemini_model)
            .field("model_temperature", &self.model_temperature)
            .field("website_discovery", &self.website_discovery)
            .field("places_timeout_secs", &self.places_timeout_secs)
            .field("model_timeout_secs", &self.model_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
