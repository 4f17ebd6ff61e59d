use anyhow::{Context, Result};
use reqwest::blocking::Client;

use crate::language::Language;
use crate::NearbyConfig;

/// Placeholder in `NearbyConfig::wiki_base_url` replaced by the language code
pub const LANG_PLACEHOLDER: &str = "{lang}";

/// Build the blocking HTTP client shared by the wiki and translation backends
pub fn build_client(config: &NearbyConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(config.user_agent.clone());

    // Without an explicit timeout reqwest's own default applies
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    builder.build().context("Failed to build HTTP client")
}

/// Base URL of the wiki for `lang`, without a trailing slash
pub fn wiki_base(template: &str, lang: Language) -> String {
    template
        .replace(LANG_PLACEHOLDER, lang.code())
        .trim_end_matches('/')
        .to_string()
}

/// Default User-Agent; Wikimedia asks clients to identify themselves
pub fn default_user_agent() -> String {
    format!(
        "NearbyWiki/{} (nearby Wikipedia article browser)",
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wiki_base_substitutes_language() {
        assert_eq!(
            wiki_base("https://{lang}.wikipedia.org", Language::Telugu),
            "https://te.wikipedia.org"
        );
        assert_eq!(
            wiki_base("http://127.0.0.1:8080/{lang}/", Language::Hindi),
            "http://127.0.0.1:8080/hi"
        );
    }

    #[test]
    fn test_default_user_agent_has_version() {
        let agent = default_user_agent();
        assert!(agent.starts_with("NearbyWiki/"));
        assert!(agent.contains(env!("CARGO_PKG_VERSION")));
    }
}
