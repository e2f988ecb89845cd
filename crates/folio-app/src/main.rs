//! Main application entry point

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use eframe::egui::{self, Context};
use parking_lot::{Mutex, RwLock};
use tracing::{error, info, warn};

use folio_content::{sample_profile, ContentSource, TomlFileSource};
use folio_core::events::events::{ProfileLoadFailed, ProfileLoaded, SectionActivated};
use folio_core::events::{handler_from_fn, EventBus};
use folio_core::{GeometryRegistry, PageSettings, SectionTracker, VisibilityTracker};
use folio_ui::{apply_theme, ErrorMessage, Theme};
use folio_views::{PageContext, PortfolioPage, SECTIONS};

/// Main application state
struct PortfolioApp {
    /// The scrolling page and its section views
    page: PortfolioPage,

    /// Shared context passed to every view
    page_context: PageContext,

    /// Error banners pending display
    errors: Arc<Mutex<Vec<ErrorMessage>>>,

    /// Tokio runtime for background profile loads
    runtime: tokio::runtime::Runtime,

    /// Egui context
    egui_ctx: egui::Context,

    /// About dialog visibility
    show_about: bool,

    /// Window title currently applied
    window_title: String,
}

impl PortfolioApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Setup custom theme
        apply_theme(&cc.egui_ctx, &Theme::default());

        // Initialize tokio runtime
        let runtime = tokio::runtime::Runtime::new().expect("failed to start tokio runtime");

        let settings = PageSettings::default();
        let events = Arc::new(EventBus::new());
        install_event_logging(&events);

        let page_context = PageContext {
            profile: Arc::new(RwLock::new(sample_profile().clone())),
            visibility: Arc::new(VisibilityTracker::new()),
            sections: Arc::new(SectionTracker::new(SECTIONS.to_vec(), settings.tracker)),
            registry: Arc::new(RwLock::new(GeometryRegistry::new())),
            events,
            settings,
        };

        Self {
            page: PortfolioPage::new(),
            page_context,
            errors: Arc::new(Mutex::new(Vec::new())),
            runtime,
            egui_ctx: cc.egui_ctx.clone(),
            show_about: false,
            window_title: String::new(),
        }
    }

    /// Load a profile document in the background and swap it in on success.
    /// On failure the previous profile stays in place and a banner is shown.
    fn open_profile_file(&mut self, path: PathBuf) {
        info!("Opening profile file: {:?}", path);

        let source = TomlFileSource::new(path);

        let ctx = self.egui_ctx.clone();
        let page_context = self.page_context.clone();
        let errors = self.errors.clone();
        let runtime = self.runtime.handle().clone();

        runtime.spawn(async move {
            let source_name = source.source_name().to_string();
            match source.load().await {
                Ok(profile) => {
                    page_context.events.publish(ProfileLoaded {
                        source_name,
                        profile_name: profile.name.clone(),
                    });
                    *page_context.profile.write() = profile;
                    ctx.request_repaint();
                }
                Err(e) => {
                    error!("Failed to load profile: {}", e);
                    page_context.events.publish(ProfileLoadFailed {
                        source_name: source_name.clone(),
                        error: e.to_string(),
                    });
                    errors.lock().push(ErrorMessage::new(
                        format!("Could not load {}", source_name),
                        e.to_string(),
                    ));
                    ctx.request_repaint();
                }
            }
        });
    }

    /// Restore the built-in sample profile.
    fn load_sample(&mut self) {
        let profile = sample_profile().clone();
        self.page_context.events.publish(ProfileLoaded {
            source_name: "built-in sample".to_string(),
            profile_name: profile.name.clone(),
        });
        *self.page_context.profile.write() = profile;
    }

    /// Handle menu actions
    fn handle_menu(&mut self) {
        let ctx = self.egui_ctx.clone();
        egui::TopBottomPanel::top("menu_bar").show(&ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Profile...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Profile Files", &["toml"])
                            .pick_file()
                        {
                            self.open_profile_file(path);
                        }
                        ui.close_menu();
                    }

                    if ui.button("Load Built-in Sample").clicked() {
                        self.load_sample();
                        ui.close_menu();
                    }

                    ui.separator();

                    if ui.button("Exit").clicked() {
                        self.egui_ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    /// Keep the window title in sync with the loaded profile.
    fn sync_window_title(&mut self, ctx: &Context) {
        let title = format!("{} - Portfolio", self.page_context.profile.read().name);
        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }

    fn show_about_dialog(&mut self, ctx: &Context) {
        if !self.show_about {
            return;
        }
        let mut open = self.show_about;
        egui::Window::new("About Folio")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!("Folio {}", env!("CARGO_PKG_VERSION")));
                ui.label("A native single-page portfolio viewer.");
            });
        self.show_about = open;
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.sync_window_title(ctx);

        // Menu bar
        self.handle_menu();

        // Pending load errors
        {
            let mut errors = self.errors.lock();
            folio_ui::show_error_messages(ctx, &mut errors);
        }

        // The page renders into the remaining central area.
        self.page.ui(ctx, &self.page_context);

        self.show_about_dialog(ctx);
    }
}

/// Log bus traffic the way the views cannot: one place, all events.
fn install_event_logging(events: &Arc<EventBus>) {
    events.subscribe::<ProfileLoaded>(handler_from_fn(|event| {
        if let Some(loaded) = event.as_any().downcast_ref::<ProfileLoaded>() {
            info!(source = %loaded.source_name, profile = %loaded.profile_name, "profile loaded");
        }
    }));
    events.subscribe::<ProfileLoadFailed>(handler_from_fn(|event| {
        if let Some(failed) = event.as_any().downcast_ref::<ProfileLoadFailed>() {
            warn!(source = %failed.source_name, error = %failed.error, "profile load failed");
        }
    }));
    events.subscribe::<SectionActivated>(handler_from_fn(|event| {
        if let Some(activated) = event.as_any().downcast_ref::<SectionActivated>() {
            tracing::debug!(section = %activated.section, "section activated");
        }
    }));
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Folio portfolio viewer");

    // Run the app
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Folio",
        options,
        Box::new(|cc| Box::new(PortfolioApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
