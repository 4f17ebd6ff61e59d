use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};

use crate::http::wiki_base;
use crate::language::Language;

/// Page summary as shown under each result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub extract: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub page_url: Option<String>,
}

impl ArticleSummary {
    pub fn with_extract(extract: impl Into<String>) -> Self {
        Self {
            extract: Some(extract.into()),
            ..Default::default()
        }
    }
}

/// REST `page/summary` response, only the fields we render
#[derive(Debug, Deserialize)]
struct SummaryPayload {
    extract: Option<String>,
    description: Option<String>,
    thumbnail: Option<Thumbnail>,
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    source: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    desktop: Option<PageUrls>,
}

#[derive(Debug, Deserialize)]
struct PageUrls {
    page: Option<String>,
}

impl From<SummaryPayload> for ArticleSummary {
    fn from(payload: SummaryPayload) -> Self {
        Self {
            extract: payload.extract,
            description: payload.description,
            thumbnail_url: payload.thumbnail.and_then(|t| t.source),
            page_url: payload
                .content_urls
                .and_then(|c| c.desktop)
                .and_then(|d| d.page),
        }
    }
}

/// URL of the summary endpoint for `title` on the wiki at `base`
///
/// Spaces become underscores and the title is pushed as a single path
/// segment, so titles containing '/' or '?' stay intact.
pub fn summary_url(base: &str, title: &str) -> Result<Url> {
    let mut url = Url::parse(base).with_context(|| format!("Invalid wiki base URL: {}", base))?;
    let page = title.replace(' ', "_");

    url.path_segments_mut()
        .map_err(|_| anyhow!("Wiki base URL cannot carry a path: {}", base))?
        .pop_if_empty()
        .extend(["api", "rest_v1", "page", "summary", page.as_str()]);

    Ok(url)
}

/// Fetch the summary of `title` from `lang`.wikipedia
///
/// Any non-success status is reported as `None`.
pub fn fetch_summary(
    client: &Client,
    wiki_base_template: &str,
    title: &str,
    lang: Language,
) -> Result<Option<ArticleSummary>> {
    let url = summary_url(&wiki_base(wiki_base_template, lang), title)?;

    log::debug!("Fetching summary of '{}' in '{}'", title, lang);

    let response = client
        .get(url)
        .send()
        .with_context(|| format!("Failed to send summary request for '{}'", title))?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        log::debug!("No '{}' article for '{}'", lang, title);
        return Ok(None);
    }
    if !status.is_success() {
        log::warn!("Summary of '{}' in '{}' returned status: {}", title, lang, status);
        return Ok(None);
    }

    let payload: SummaryPayload = response
        .json()
        .with_context(|| format!("Failed to parse summary response for '{}'", title))?;

    Ok(Some(payload.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_url_underscores_spaces() {
        let url = summary_url("https://en.wikipedia.org", "Golconda Fort").unwrap();
        assert_eq!(
            url.as_str(),
            "https://en.wikipedia.org/api/rest_v1/page/summary/Golconda_Fort"
        );
    }

    #[test]
    fn test_summary_url_keeps_base_path_and_escapes() {
        let url = summary_url("http://127.0.0.1:9000/te", "AC/DC?").unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:9000/te/api/rest_v1/page/summary/AC%2FDC%3F"
        );
    }

    #[test]
    fn test_summary_url_rejects_garbage_base() {
        assert!(summary_url("not a url", "Hyderabad").is_err());
    }

    #[test]
    fn test_parse_summary_payload() {
        let json = r#"{
            "type": "standard",
            "title": "Hyderabad",
            "description": "Capital of Telangana, India",
            "extract": "A city in India.",
            "thumbnail": {"source": "https://upload.wikimedia.org/hyd.jpg", "width": 320, "height": 213},
            "content_urls": {"desktop": {"page": "https://en.wikipedia.org/wiki/Hyderabad"}}
        }"#;
        let summary: ArticleSummary = serde_json::from_str::<SummaryPayload>(json).unwrap().into();

        assert_eq!(summary.extract.as_deref(), Some("A city in India."));
        assert_eq!(
            summary.thumbnail_url.as_deref(),
            Some("https://upload.wikimedia.org/hyd.jpg")
        );
        assert_eq!(
            summary.page_url.as_deref(),
            Some("https://en.wikipedia.org/wiki/Hyderabad")
        );
        assert_eq!(summary.description.as_deref(), Some("Capital of Telangana, India"));
    }

    #[test]
    fn test_parse_sparse_summary_payload() {
        let summary: ArticleSummary = serde_json::from_str::<SummaryPayload>(r#"{"title": "X"}"#)
            .unwrap()
            .into();
        assert_eq!(summary, ArticleSummary::default());
    }
}
