//! Backend location and credential wrappers for the record store.

use url::Url;

use super::error::RecordStoreError;

/// Path prefix under which PostgREST tables are exposed.
const REST_PREFIX: &str = "rest/v1/";

/// Validated base URL of the hosted record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendEndpoint(Url);

impl BackendEndpoint {
    /// Parses the project URL (e.g. `https://abc.supabase.co`).
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::MissingBackendUrl`] for blank input and
    /// [`RecordStoreError::InvalidUrl`] when the URL cannot be parsed or is
    /// not HTTP(S).
    pub fn parse(raw: &str) -> Result<Self, RecordStoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RecordStoreError::MissingBackendUrl);
        }

        let mut url =
            Url::parse(trimmed).map_err(|error| RecordStoreError::InvalidUrl(error.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RecordStoreError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }

        // Keep a trailing slash so joins append instead of replacing.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        url.set_fragment(None);
        Ok(Self(url))
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.0
    }

    /// Returns the REST URL for a table.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::InvalidUrl`] if the table name does not
    /// form a valid path.
    pub fn table_url(&self, table: &str) -> Result<Url, RecordStoreError> {
        self.0
            .join(REST_PREFIX)
            .and_then(|rest| rest.join(table))
            .map_err(|error| RecordStoreError::InvalidUrl(error.to_string()))
    }
}

/// Anonymous API key sent with every request.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validates that the key is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::MissingApiKey`] when the key is blank.
    pub fn new(key: impl AsRef<str>) -> Result<Self, RecordStoreError> {
        let trimmed = key.as_ref().trim();
        if trimmed.is_empty() {
            return Err(RecordStoreError::MissingApiKey);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the key value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}
