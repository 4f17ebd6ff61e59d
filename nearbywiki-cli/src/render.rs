use nearbywiki_core::{Banner, PageView, ResultView, THUMBNAIL_PLACEHOLDER};
use std::fmt::Write;

/// Render banners and results as plain terminal text
pub fn render_page(page: &PageView) -> String {
    let mut out = String::new();

    for banner in &page.banners {
        out.push_str(&render_banner(banner));
        out.push('\n');
    }

    for result in &page.results {
        out.push('\n');
        render_result(&mut out, result);
        out.push_str("---\n");
    }

    out
}

pub fn render_banner(banner: &Banner) -> String {
    format!("{} {}", banner.kind.icon(), banner.message)
}

fn render_result(out: &mut String, result: &ResultView) {
    // Writing into a String cannot fail
    let _ = match &result.page_url {
        Some(url) => writeln!(out, "### {} <{}>", result.title, url),
        None => writeln!(out, "### {}", result.title),
    };

    if let Some(description) = &result.description {
        let _ = writeln!(out, "    {}", description);
    }

    let thumbnail = result.thumbnail_url.as_deref().unwrap_or(THUMBNAIL_PLACEHOLDER);
    let _ = writeln!(out, "    🖼  {}", thumbnail);
    let _ = writeln!(out, "    📏 Distance: {}", result.distance);

    let _ = writeln!(out, "    🔎 Summary:");
    for line in result.summary.lines() {
        let _ = writeln!(out, "       {}", line);
    }

    if let Some(note) = &result.note {
        let _ = writeln!(out, "    ({})", note);
    }
}
