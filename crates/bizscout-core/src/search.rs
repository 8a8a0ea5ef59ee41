use thiserror::Error;

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("location is required")]
    MissingLocation,

    #[error("category is required")]
    MissingCategory,

    #[error("limit must be between 1 and {MAX_LIMIT}, got {0}")]
    InvalidLimit(u32),
}

/// A validated search: non-blank location and category, limit in `1..=MAX_LIMIT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    location: String,
    category: String,
    limit: u32,
}

impl SearchRequest {
    /// Validates raw search input.
    ///
    /// The location is trimmed. The category is only checked for blankness
    /// and is stored exactly as given, since it is copied onto every record.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, checking location,
    /// category, then limit.
    pub fn new(location: &str, category: &str, limit: u32) -> Result<Self, ValidationError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(ValidationError::MissingLocation);
        }
        if category.trim().is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        if limit == 0 || limit > MAX_LIMIT {
            return Err(ValidationError::InvalidLimit(limit));
        }
        Ok(Self {
            location: location.to_string(),
            category: category.to_string(),
            limit,
        })
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Free-text query sent to the places provider.
    #[must_use]
    pub fn text_query(&self) -> String {
        format!("{} in {}", self.category.trim(), self.location)
    }
}

/// Applies the default and clamps a caller-supplied limit to `1..=MAX_LIMIT`.
#[must_use]
pub fn normalize_limit(limit: Option<u32>) -> u32 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}
