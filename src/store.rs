/// Deduplicated list of remembered URLs, persisted as a JSON array

use crate::backend::StorageBackend;
use crate::error::Result;
use serde::Deserialize;
use std::collections::HashSet;

/// Well-known key holding the serialized list
pub const STORAGE_KEY: &str = "url-list";

pub struct UrlListStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> UrlListStore<B> {
    pub fn new(backend: B) -> Self {
        UrlListStore { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Current list, exactly as persisted
    ///
    /// An absent value, or a falsy JSON scalar (`null`, `false`, `0`, `""`),
    /// reads as empty. Anything else that is not a JSON array of strings is
    /// an error.
    pub fn urls(&self) -> Result<Vec<String>> {
        match self.backend.get(STORAGE_KEY)? {
            None => Ok(Vec::new()),
            Some(raw) => Ok(serde_json::from_str::<StoredUrls>(&raw)?.into_urls()?),
        }
    }

    /// Append `url` and persist the deduplicated list with a single write
    pub fn add_url(&mut self, url: &str) -> Result<()> {
        let mut urls = self.urls()?;
        urls.push(url.to_string());

        let json = serde_json::to_string(&dedup_urls(urls))?;
        self.backend.set(STORAGE_KEY, &json)?;

        log::debug!("Remembered {}", url);
        Ok(())
    }
}

/// Shapes a persisted `url-list` value may take
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredUrls {
    List(Vec<String>),
    Null(()),
    Bool(bool),
    Number(f64),
    Text(String),
}

impl StoredUrls {
    fn into_urls(self) -> std::result::Result<Vec<String>, serde_json::Error> {
        match self {
            StoredUrls::List(urls) => Ok(urls),
            StoredUrls::Null(()) | StoredUrls::Bool(false) => Ok(Vec::new()),
            StoredUrls::Number(n) if n == 0.0 => Ok(Vec::new()),
            StoredUrls::Text(s) if s.is_empty() => Ok(Vec::new()),
            other => Err(serde::de::Error::custom(format!(
                "expected a JSON array of strings, found {:?}",
                other
            ))),
        }
    }
}

/// Drop repeated URLs (keep first occurrence)
pub fn dedup_urls(urls: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    urls.into_iter()
        .filter(|url| seen.insert(url.clone()))
        .collect()
}
