//! Seams between the orchestrator and the network
//!
//! `NearbyService` only talks to these traits, so the fallback policy can be
//! driven by in-memory backends as well as the real HTTP clients below.

use anyhow::Result;
use reqwest::blocking::Client;

use crate::coordinates::Coordinate;
use crate::geosearch::{self, SearchOutcome};
use crate::language::Language;
use crate::summary::{self, ArticleSummary};
use crate::translate::{self, Translation};
use crate::NearbyConfig;

/// Source of nearby articles and their summaries
pub trait WikiBackend: Send + Sync {
    /// Articles near `coordinate` on the `lang` wiki; transport errors are `Err`
    fn geosearch(&self, coordinate: Coordinate, lang: Language) -> Result<SearchOutcome>;

    /// Summary of `title` on the `lang` wiki, `None` when the wiki has none
    fn summary(&self, title: &str, lang: Language) -> Result<Option<ArticleSummary>>;
}

/// Machine translation out of English
pub trait TranslationBackend: Send + Sync {
    fn translate(&self, text: &str, target: Language) -> Translation;
}

/// Wikipedia over HTTP
pub struct WikipediaClient {
    client: Client,
    config: NearbyConfig,
}

impl WikipediaClient {
    pub fn new(client: Client, config: NearbyConfig) -> Self {
        Self { client, config }
    }
}

impl WikiBackend for WikipediaClient {
    fn geosearch(&self, coordinate: Coordinate, lang: Language) -> Result<SearchOutcome> {
        geosearch::search(&self.client, &self.config, coordinate, lang)
    }

    fn summary(&self, title: &str, lang: Language) -> Result<Option<ArticleSummary>> {
        summary::fetch_summary(&self.client, &self.config.wiki_base_url, title, lang)
    }
}

/// LibreTranslate over HTTP
pub struct LibreTranslateClient {
    client: Client,
    url: String,
}

impl LibreTranslateClient {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl TranslationBackend for LibreTranslateClient {
    fn translate(&self, text: &str, target: Language) -> Translation {
        translate::translate(&self.client, &self.url, text, target)
    }
}
