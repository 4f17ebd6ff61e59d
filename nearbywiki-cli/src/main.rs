use anyhow::Result;
use nearbywiki_core::{present, present_error, LanguageSupport, NearbyConfig, NearbyService};

mod cli;
mod render;

fn main() -> Result<()> {
    let args = cli::parse_args();

    // Initialize logger with appropriate level based on verbose flag
    if std::env::var("RUST_LOG").is_err() {
        if args.verbose {
            std::env::set_var("RUST_LOG", "debug");
        } else {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    let language_support = if args.english_only {
        LanguageSupport::EnglishOnly
    } else {
        LanguageSupport::Multi
    };

    let config = NearbyConfig {
        language_support,
        concurrency: args.jobs.max(1),
        ..Default::default()
    };

    let service = NearbyService::new(config)?;

    match service.find_nearby_text(&args.latitude, &args.longitude, args.language) {
        Ok(report) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render::render_page(&present(&report, language_support)));
            }
            Ok(())
        }
        Err(e) => {
            log::debug!("Lookup failed: {:?}", e);
            for banner in present_error(&e).banners {
                eprintln!("{}", render::render_banner(&banner));
            }
            std::process::exit(1);
        }
    }
}
