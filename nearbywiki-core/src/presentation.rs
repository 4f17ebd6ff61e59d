//! Rendering-independent view of a retrieval cycle
//!
//! Both the terminal and the desktop front ends draw a `PageView`; neither
//! looks at `NearbyReport` directly.

use serde::Serialize;

use crate::coordinates::CoordinateError;
use crate::language::LanguageSupport;
use crate::{EnrichedResult, NearbyReport};

/// Shown instead of a thumbnail image
pub const THUMBNAIL_PLACEHOLDER: &str = "📄";

/// Summary text when the page has a summary but no extract
pub const NO_SUMMARY: &str = "⚠️ No summary.";

/// Summary text when no wiki had a summary for the article
pub const NO_SUMMARY_AVAILABLE: &str = "⚠️ No summary available.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Success,
    Info,
    Warning,
    Error,
}

impl BannerKind {
    pub fn icon(&self) -> &'static str {
        match self {
            BannerKind::Success => "✅",
            BannerKind::Info => "🔁",
            BannerKind::Warning => "⚠️",
            BannerKind::Error => "❗",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    fn new(kind: BannerKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// One rendered result row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub title: String,
    /// Heading links here when present, otherwise the heading is plain text
    pub page_url: Option<String>,
    /// Image to show; `None` means draw [`THUMBNAIL_PLACEHOLDER`]
    pub thumbnail_url: Option<String>,
    /// e.g. "1.50 km"
    pub distance: String,
    /// Body of the collapsible summary section
    pub summary: String,
    pub description: Option<String>,
    /// Provenance note, e.g. when the summary was translated from English
    pub note: Option<String>,
}

/// Banners followed by the result rows, in geosearch order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageView {
    pub banners: Vec<Banner>,
    pub results: Vec<ResultView>,
}

/// Meters to "x.yy km"
pub fn format_distance(meters: f64) -> String {
    format!("{:.2} km", meters / 1000.0)
}

/// Build the page for a finished retrieval cycle
pub fn present(report: &NearbyReport, support: LanguageSupport) -> PageView {
    let mut banners = Vec::new();

    if let (LanguageSupport::EnglishOnly, Some(status)) = (support, report.search_failure) {
        banners.push(Banner::new(
            BannerKind::Error,
            format!("Failed to fetch data: HTTP {}", status),
        ));
    }

    if report.search_fallback {
        banners.push(Banner::new(
            BannerKind::Info,
            "No results found in selected language. Falling back to English.",
        ));
    }

    if report.is_empty() {
        banners.push(Banner::new(BannerKind::Warning, "No nearby articles found."));
    } else {
        banners.push(Banner::new(
            BannerKind::Success,
            format!(
                "Found {} articles near {}:",
                report.results.len(),
                report.coordinate
            ),
        ));
    }

    PageView {
        banners,
        results: report.results.iter().map(present_result).collect(),
    }
}

fn present_result(result: &EnrichedResult) -> ResultView {
    let summary = result.summary.as_ref();

    let text = match summary {
        Some(s) => s.extract.clone().unwrap_or_else(|| NO_SUMMARY.to_string()),
        None => NO_SUMMARY_AVAILABLE.to_string(),
    };

    let note = match (result.fallback_used, result.translated, summary.is_some()) {
        (true, true, _) => Some("Translated from English".to_string()),
        (true, false, true) => Some("Shown in English".to_string()),
        _ => None,
    };

    ResultView {
        title: result.article.title.clone(),
        page_url: summary.and_then(|s| s.page_url.clone()),
        thumbnail_url: summary.and_then(|s| s.thumbnail_url.clone()),
        distance: format_distance(result.article.distance_meters),
        summary: text,
        description: summary.and_then(|s| s.description.clone()),
        note,
    }
}

/// Page for rejected coordinate input; no network call has been made
pub fn present_input_error(err: &CoordinateError) -> PageView {
    log::debug!("Rejected coordinates: {}", err);
    PageView {
        banners: vec![Banner::new(
            BannerKind::Error,
            "Please enter valid numbers for latitude and longitude.",
        )],
        results: Vec::new(),
    }
}

/// Page for a retrieval cycle that aborted
pub fn present_error(err: &anyhow::Error) -> PageView {
    if let Some(input_err) = err.downcast_ref::<CoordinateError>() {
        return present_input_error(input_err);
    }

    PageView {
        banners: vec![Banner::new(BannerKind::Error, format!("{:#}", err))],
        results: Vec::new(),
    }
}
