use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Returned in place of a translation when the service answers with an error status
pub const TRANSLATION_FAILED: &str = "⚠️ Translation failed.";

/// Returned in place of a translation when the service cannot be reached or decoded
pub const TRANSLATION_SERVICE_ERROR: &str = "⚠️ Translation service error.";

/// Outcome of a translation request. Never an error: every failure mode is a variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Translation {
    Translated(String),
    Failed { status: u16 },
    ServiceError(String),
}

impl Translation {
    /// Translated text, if it can replace the source text
    pub fn usable(&self) -> Option<&str> {
        match self {
            Translation::Translated(text) if !is_sentinel_or_blank(text) => Some(text),
            _ => None,
        }
    }

    /// Flatten to the text shown to users, substituting the sentinel strings
    pub fn into_text(self) -> String {
        match self {
            Translation::Translated(text) => text,
            Translation::Failed { .. } => TRANSLATION_FAILED.to_string(),
            Translation::ServiceError(_) => TRANSLATION_SERVICE_ERROR.to_string(),
        }
    }
}

fn is_sentinel_or_blank(text: &str) -> bool {
    let text = text.trim();
    text.is_empty() || text == TRANSLATION_FAILED || text == TRANSLATION_SERVICE_ERROR
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// Translate English `text` into `target` via a LibreTranslate-compatible endpoint
pub fn translate(client: &Client, url: &str, text: &str, target: Language) -> Translation {
    let request = TranslateRequest {
        q: text,
        source: Language::DEFAULT.code(),
        target: target.code(),
        format: "text",
    };

    log::debug!("Translating {} chars into '{}'", text.chars().count(), target);

    let response = match client.post(url).json(&request).send() {
        Ok(response) => response,
        Err(e) => {
            log::warn!("Translation request failed: {}", e);
            return Translation::ServiceError(e.to_string());
        }
    };

    let status = response.status();
    if !status.is_success() {
        log::warn!("Translation API returned status: {}", status);
        return Translation::Failed {
            status: status.as_u16(),
        };
    }

    match response.json::<TranslateResponse>() {
        Ok(body) => Translation::Translated(body.translated_text.unwrap_or_default()),
        Err(e) => {
            log::warn!("Failed to parse translation response: {}", e);
            Translation::ServiceError(e.to_string())
        }
    }
}

/// Like [`translate`], flattened to a string. Never fails.
pub fn translate_text(client: &Client, url: &str, text: &str, target: Language) -> String {
    translate(client, url, text, target).into_text()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_rejects_blank_and_sentinels() {
        assert_eq!(
            Translation::Translated("భారతదేశంలో ఒక నగరం.".to_string()).usable(),
            Some("భారతదేశంలో ఒక నగరం.")
        );
        assert_eq!(Translation::Translated("  ".to_string()).usable(), None);
        assert_eq!(Translation::Translated(TRANSLATION_FAILED.to_string()).usable(), None);
        assert_eq!(Translation::Failed { status: 500 }.usable(), None);
        assert_eq!(Translation::ServiceError("timeout".into()).usable(), None);
    }

    #[test]
    fn test_into_text_maps_sentinels() {
        assert_eq!(Translation::Failed { status: 429 }.into_text(), TRANSLATION_FAILED);
        assert_eq!(
            Translation::ServiceError("dns".into()).into_text(),
            TRANSLATION_SERVICE_ERROR
        );
        assert_eq!(Translation::Translated("नमस्ते".into()).into_text(), "नमस्ते");
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(TranslateRequest {
            q: "A city in India.",
            source: "en",
            target: "te",
            format: "text",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"q": "A city in India.", "source": "en", "target": "te", "format": "text"})
        );
    }
}
