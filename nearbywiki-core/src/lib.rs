use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// Internal modules
mod backend;
mod coordinates;
mod geosearch;
mod http;
mod language;
mod presentation;
mod summary;
mod translate;

// Re-export public types
pub use backend::{LibreTranslateClient, TranslationBackend, WikiBackend, WikipediaClient};
pub use coordinates::{Axis, Coordinate, CoordinateError};
pub use geosearch::{ArticleRef, SearchOutcome};
pub use http::{build_client, default_user_agent};
pub use language::{Language, LanguageSupport};
pub use presentation::{
    format_distance, present, present_error, present_input_error, Banner, BannerKind, PageView,
    ResultView, NO_SUMMARY, NO_SUMMARY_AVAILABLE, THUMBNAIL_PLACEHOLDER,
};
pub use summary::ArticleSummary;
pub use translate::{translate_text, Translation, TRANSLATION_FAILED, TRANSLATION_SERVICE_ERROR};

/// Configuration options for nearby article retrieval
#[derive(Debug, Clone)]
pub struct NearbyConfig {
    /// Wiki base URL; `{lang}` is replaced by the language code
    pub wiki_base_url: String,
    /// LibreTranslate-compatible `/translate` endpoint
    pub translate_url: String,
    /// Geosearch radius in meters
    pub radius_meters: u32,
    /// Maximum number of articles per geosearch
    pub limit: u32,
    /// Language selection with fallback, or English only
    pub language_support: LanguageSupport,
    /// Number of summaries fetched at once (1 = one after another)
    pub concurrency: usize,
    /// User-Agent sent with every request
    pub user_agent: String,
    /// Request timeout; `None` leaves the HTTP client's default in place
    pub timeout: Option<Duration>,
}

impl Default for NearbyConfig {
    fn default() -> Self {
        Self {
            wiki_base_url: "https://{lang}.wikipedia.org".to_string(),
            translate_url: "https://libretranslate.de/translate".to_string(),
            radius_meters: 10_000,
            limit: 10,
            language_support: LanguageSupport::Multi,
            concurrency: 1,
            user_agent: default_user_agent(),
            timeout: None,
        }
    }
}

/// One article with its (possibly fallback, possibly translated) summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedResult {
    pub article: ArticleRef,
    /// `None` when neither the selected nor the fallback wiki has a summary
    pub summary: Option<ArticleSummary>,
    /// Language of the summary text as shown
    pub summary_language: Option<Language>,
    /// The summary came from the English wiki
    pub fallback_used: bool,
    /// The English summary text was machine-translated into the selected language
    pub translated: bool,
}

/// Everything produced by one retrieval cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyReport {
    pub coordinate: Coordinate,
    pub requested_language: Language,
    /// Wiki whose geosearch results are listed
    pub search_language: Language,
    /// The selected wiki had nothing nearby and English results are shown instead
    pub search_fallback: bool,
    /// HTTP status of the listed geosearch when it failed
    pub search_failure: Option<u16>,
    pub results: Vec<EnrichedResult>,
}

impl NearbyReport {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Retrieval engine: geosearch, summaries, fallback and translation
pub struct NearbyService {
    config: NearbyConfig,
    wiki: Box<dyn WikiBackend>,
    translator: Box<dyn TranslationBackend>,
}

impl NearbyService {
    /// Create a service talking to Wikipedia and LibreTranslate over HTTP
    pub fn new(config: NearbyConfig) -> Result<Self> {
        let client = build_client(&config)?;
        let wiki = WikipediaClient::new(client.clone(), config.clone());
        let translator = LibreTranslateClient::new(client, config.translate_url.clone());
        Ok(Self::with_backends(config, Box::new(wiki), Box::new(translator)))
    }

    /// Create a service over arbitrary backends
    pub fn with_backends(
        config: NearbyConfig,
        wiki: Box<dyn WikiBackend>,
        translator: Box<dyn TranslationBackend>,
    ) -> Self {
        Self {
            config,
            wiki,
            translator,
        }
    }

    pub fn config(&self) -> &NearbyConfig {
        &self.config
    }

    /// Parse the two text inputs and run a retrieval cycle
    ///
    /// Input errors are returned before any network call is made.
    pub fn find_nearby_text(
        &self,
        latitude: &str,
        longitude: &str,
        lang: Language,
    ) -> Result<NearbyReport> {
        let coordinate = Coordinate::parse(latitude, longitude)?;
        self.find_nearby(coordinate, lang)
    }

    /// Run a retrieval cycle for `coordinate`, preferring content in `requested`
    ///
    /// Results keep the geosearch order. Transport failures of the wiki
    /// endpoints abort the cycle; HTTP error statuses do not.
    pub fn find_nearby(&self, coordinate: Coordinate, requested: Language) -> Result<NearbyReport> {
        let support = self.config.language_support;
        let selected = support.effective(requested);
        let may_fall_back = support.allows_fallback() && !selected.is_default();

        log::info!("Searching near {} in '{}'", coordinate, selected);

        let mut outcome = self.wiki.geosearch(coordinate, selected)?;
        let mut search_fallback = false;

        if outcome.is_empty() && may_fall_back {
            match outcome.failure {
                Some(status) => log::warn!(
                    "Geosearch in '{}' failed with status {}, falling back to '{}'",
                    selected,
                    status,
                    Language::DEFAULT
                ),
                None => log::info!(
                    "No results in '{}', falling back to '{}'",
                    selected,
                    Language::DEFAULT
                ),
            }
            outcome = self.wiki.geosearch(coordinate, Language::DEFAULT)?;
            search_fallback = true;
        }

        let results = self.enrich_all(&outcome.articles, selected)?;
        log::info!("Found {} articles near {}", results.len(), coordinate);

        Ok(NearbyReport {
            coordinate,
            requested_language: selected,
            search_language: outcome.language,
            search_fallback,
            search_failure: outcome.failure,
            results,
        })
    }

    fn enrich_all(
        &self,
        articles: &[ArticleRef],
        selected: Language,
    ) -> Result<Vec<EnrichedResult>> {
        if self.config.concurrency <= 1 || articles.len() <= 1 {
            return articles
                .iter()
                .map(|article| self.enrich(article, selected))
                .collect();
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.concurrency)
            .build()
            .context("Failed to build summary worker pool")?;

        // Indexed parallel collect keeps the input order
        pool.install(|| {
            articles
                .par_iter()
                .map(|article| self.enrich(article, selected))
                .collect()
        })
    }

    fn enrich(&self, article: &ArticleRef, selected: Language) -> Result<EnrichedResult> {
        let mut summary = self.wiki.summary(&article.title, selected)?;
        let mut summary_language = selected;
        let mut fallback_used = false;

        let may_fall_back =
            self.config.language_support.allows_fallback() && !selected.is_default();
        if summary.is_none() && may_fall_back {
            log::debug!(
                "No '{}' summary for '{}', trying '{}'",
                selected,
                article.title,
                Language::DEFAULT
            );
            summary = self.wiki.summary(&article.title, Language::DEFAULT)?;
            summary_language = Language::DEFAULT;
            fallback_used = true;
        }

        let mut translated = false;
        if fallback_used {
            if let Some(extract) = summary.as_mut().and_then(|s| s.extract.as_mut()) {
                let translation = self.translator.translate(extract.as_str(), selected);
                match translation.usable() {
                    Some(text) => {
                        *extract = text.to_string();
                        summary_language = selected;
                        translated = true;
                    }
                    None => log::warn!(
                        "Keeping English summary of '{}': translation unusable ({:?})",
                        article.title,
                        translation
                    ),
                }
            }
        }

        if summary.is_none() {
            log::debug!("No summary at all for '{}'", article.title);
        }

        Ok(EnrichedResult {
            article: article.clone(),
            summary_language: summary.as_ref().map(|_| summary_language),
            summary,
            fallback_used,
            translated,
        })
    }
}
