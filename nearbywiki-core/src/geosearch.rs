use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::coordinates::Coordinate;
use crate::http::wiki_base;
use crate::language::Language;
use crate::NearbyConfig;

/// An article near the searched coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRef {
    pub title: String,
    /// Distance from the searched coordinate, in meters
    pub distance_meters: f64,
    pub page_id: Option<u64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl ArticleRef {
    pub fn new(title: impl Into<String>, distance_meters: f64) -> Self {
        Self {
            title: title.into(),
            distance_meters,
            page_id: None,
            latitude: None,
            longitude: None,
        }
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }
}

/// Result of one geosearch call
///
/// A non-success HTTP status yields an empty article list, with the status
/// kept in `failure` so callers can tell "nothing nearby" from "endpoint
/// refused".
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub language: Language,
    pub articles: Vec<ArticleRef>,
    pub failure: Option<u16>,
}

impl SearchOutcome {
    pub fn found(language: Language, articles: Vec<ArticleRef>) -> Self {
        Self {
            language,
            articles,
            failure: None,
        }
    }

    pub fn failed(language: Language, status: u16) -> Self {
        Self {
            language,
            articles: Vec::new(),
            failure: Some(status),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// MediaWiki `action=query&list=geosearch` response
#[derive(Debug, Deserialize)]
struct GeoSearchResponse {
    query: Option<GeoSearchQuery>,
}

#[derive(Debug, Deserialize)]
struct GeoSearchQuery {
    #[serde(default)]
    geosearch: Vec<GeoSearchHit>,
}

#[derive(Debug, Deserialize)]
struct GeoSearchHit {
    title: String,
    #[serde(default)]
    dist: f64,
    pageid: Option<u64>,
    lat: Option<f64>,
    lon: Option<f64>,
}

impl From<GeoSearchHit> for ArticleRef {
    fn from(hit: GeoSearchHit) -> Self {
        Self {
            title: hit.title,
            distance_meters: hit.dist,
            page_id: hit.pageid,
            latitude: hit.lat,
            longitude: hit.lon,
        }
    }
}

/// Search `lang`.wikipedia for articles within the configured radius
pub fn search(
    client: &Client,
    config: &NearbyConfig,
    coordinate: Coordinate,
    lang: Language,
) -> Result<SearchOutcome> {
    let url = format!("{}/w/api.php", wiki_base(&config.wiki_base_url, lang));
    let params = [
        ("action", "query".to_string()),
        ("list", "geosearch".to_string()),
        ("gscoord", coordinate.as_query_param()),
        ("gsradius", config.radius_meters.to_string()),
        ("gslimit", config.limit.to_string()),
        ("format", "json".to_string()),
    ];

    log::debug!("Geosearch {} in '{}' via {}", coordinate, lang, url);

    let response = client
        .get(&url)
        .query(&params)
        .send()
        .context("Failed to send geosearch request")?;

    let status = response.status();
    if !status.is_success() {
        log::warn!("Geosearch in '{}' returned status: {}", lang, status);
        return Ok(SearchOutcome::failed(lang, status.as_u16()));
    }

    let body: GeoSearchResponse = response
        .json()
        .context("Failed to parse geosearch response")?;

    let articles: Vec<ArticleRef> = body
        .query
        .map(|q| q.geosearch.into_iter().map(ArticleRef::from).collect())
        .unwrap_or_default();

    log::debug!("Geosearch in '{}' found {} articles", lang, articles.len());
    Ok(SearchOutcome::found(lang, articles))
}
