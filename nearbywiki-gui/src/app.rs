use eframe::egui;
use nearbywiki_core::{
    present, present_error, present_input_error, Banner, BannerKind, Coordinate, Language,
    LanguageSupport, NearbyConfig, NearbyReport, NearbyService, PageView, ResultView,
    THUMBNAIL_PLACEHOLDER,
};
use std::thread::JoinHandle;

pub struct NearbyWikiApp {
    // Inputs
    language: Language,
    latitude: String,
    longitude: String,
    english_only: bool,

    // UI state
    is_fetching: bool,
    page: Option<PageView>,

    // Configuration
    config: NearbyConfig,

    // Processing
    fetch_thread: Option<JoinHandle<anyhow::Result<NearbyReport>>>,
}

impl NearbyWikiApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Thumbnails are loaded straight from their URLs
        egui_extras::install_image_loaders(&cc.egui_ctx);

        Self {
            language: Language::default(),
            latitude: String::new(),
            longitude: String::new(),
            english_only: false,
            is_fetching: false,
            page: None,
            config: NearbyConfig::default(),
            fetch_thread: None,
        }
    }

    fn language_support(&self) -> LanguageSupport {
        if self.english_only {
            LanguageSupport::EnglishOnly
        } else {
            LanguageSupport::Multi
        }
    }

    fn start_search(&mut self) {
        // Validate before touching the network
        let coordinate = match Coordinate::parse(&self.latitude, &self.longitude) {
            Ok(coordinate) => coordinate,
            Err(e) => {
                self.page = Some(present_input_error(&e));
                return;
            }
        };

        self.is_fetching = true;
        self.page = None;

        let config = NearbyConfig {
            language_support: self.language_support(),
            ..self.config.clone()
        };
        let language = self.language;

        self.fetch_thread = Some(std::thread::spawn(move || {
            let service = NearbyService::new(config)?;
            service.find_nearby(coordinate, language)
        }));
    }

    fn check_search_complete(&mut self) {
        if let Some(thread) = self.fetch_thread.take() {
            if thread.is_finished() {
                self.page = Some(match thread.join() {
                    Ok(Ok(report)) => present(&report, self.language_support()),
                    Ok(Err(e)) => {
                        log::warn!("Search failed: {:#}", e);
                        present_error(&e)
                    }
                    Err(_) => present_error(&anyhow::anyhow!("Search thread panicked")),
                });
                self.is_fetching = false;
            } else {
                // Put it back if not finished
                self.fetch_thread = Some(thread);
            }
        }
    }

    fn render_inputs(&mut self, ui: &mut egui::Ui) {
        ui.checkbox(&mut self.english_only, "English only");

        if !self.english_only {
            ui.horizontal(|ui| {
                ui.label("🌐 Choose Language:");
                for lang in Language::ALL {
                    ui.radio_value(&mut self.language, lang, lang.label());
                }
            });
        }

        let mut submitted = false;

        ui.label("📌 Latitude (e.g., 17.3850)");
        let lat = ui.text_edit_singleline(&mut self.latitude);
        submitted |= lat.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.label("📌 Longitude (e.g., 78.4867)");
        let lon = ui.text_edit_singleline(&mut self.longitude);
        submitted |= lon.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.add_space(6.0);
        let ready = !self.latitude.trim().is_empty() && !self.longitude.trim().is_empty();
        let search = ui
            .add_enabled(ready && !self.is_fetching, egui::Button::new("🔍 Search"))
            .on_hover_text("Find Wikipedia articles within 10 km");

        if (search.clicked() || (submitted && ready)) && !self.is_fetching {
            self.start_search();
        }
    }

    fn render_banner(ui: &mut egui::Ui, banner: &Banner) {
        let color = match banner.kind {
            BannerKind::Success => egui::Color32::GREEN,
            BannerKind::Info => egui::Color32::LIGHT_BLUE,
            BannerKind::Warning => egui::Color32::YELLOW,
            BannerKind::Error => egui::Color32::RED,
        };
        ui.colored_label(color, format!("{} {}", banner.kind.icon(), banner.message));
    }

    fn render_result(ui: &mut egui::Ui, index: usize, result: &ResultView) {
        ui.horizontal_top(|ui| {
            match &result.thumbnail_url {
                Some(url) => {
                    ui.add(egui::Image::new(url.as_str()).max_width(100.0));
                }
                None => {
                    ui.label(egui::RichText::new(THUMBNAIL_PLACEHOLDER).size(48.0));
                }
            }

            ui.vertical(|ui| {
                let heading = egui::RichText::new(&result.title).heading();
                match &result.page_url {
                    Some(url) => {
                        ui.hyperlink_to(heading, url);
                    }
                    None => {
                        ui.label(heading);
                    }
                }

                if let Some(description) = &result.description {
                    ui.weak(description);
                }

                ui.label(format!("📏 Distance: {}", result.distance));

                ui.push_id(index, |ui| {
                    egui::CollapsingHeader::new("🔎 Summary").show(ui, |ui| {
                        ui.label(&result.summary);
                        if let Some(note) = &result.note {
                            ui.small(note);
                        }
                    });
                });
            });
        });
        ui.separator();
    }
}

impl eframe::App for NearbyWikiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background task completion
        if self.is_fetching {
            self.check_search_complete();
            ctx.request_repaint(); // Keep refreshing while fetching
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("📍 NearbyWiki - Wikipedia Articles Near You");
            ui.add_space(10.0);

            self.render_inputs(ui);
            ui.add_space(10.0);

            if self.is_fetching {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Fetching nearby articles...");
                });
            }

            if let Some(page) = &self.page {
                for banner in &page.banners {
                    Self::render_banner(ui, banner);
                }
                ui.add_space(10.0);

                egui::ScrollArea::vertical().show(ui, |ui| {
                    for (index, result) in page.results.iter().enumerate() {
                        Self::render_result(ui, index, result);
                    }
                });
            }
        });
    }
}
