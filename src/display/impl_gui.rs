use crate::config::Config;
use crate::diagnosis::presenter::DiagnosisView;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::reference_table::condition::Tone;
use crate::reference_table::table::ReferenceTable;
use crate::session::core::Event;
use crate::session::main::Session;
use crate::session::render::{encyclopedia_entry, render, ScannerPanel, Screen};
use crate::specialist_locator::impl_egui::SpecialistLocatorEgui;
use eframe::egui;
use image::DynamicImage;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

const THUMBNAIL_SIZE: u32 = 512;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Scanner,
    Encyclopedia,
    Locator,
}

struct MediScanWindow {
    session: Session,
    logger: Arc<dyn Logger + Send + Sync>,
    table: Arc<ReferenceTable>,
    tab: Tab,
    input_error: Option<String>,
    selected_condition: String,
    texture: Option<(Arc<DynamicImage>, egui::TextureHandle)>,
}

impl MediScanWindow {
    fn new(
        session: Session,
        logger: Arc<dyn Logger + Send + Sync>,
        table: Arc<ReferenceTable>,
    ) -> Self {
        let selected_condition = table.names().next().unwrap_or_default().to_string();
        Self {
            session,
            logger,
            table,
            tab: Tab::Scanner,
            input_error: None,
            selected_condition,
            texture: None,
        }
    }

    fn select_image(&mut self, file_name: String, bytes: Arc<[u8]>) {
        self.input_error = None;
        self.session
            .dispatch(Event::ImageSelected { file_name, bytes });
    }

    fn load_path(&mut self, path: &Path) {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match std::fs::read(path) {
            Ok(bytes) => self.select_image(file_name, Arc::from(bytes)),
            Err(e) => {
                let _ = self
                    .logger
                    .warn(&format!("Could not read {}: {}", path.display(), e));
                self.input_error = Some(format!("Could not read {}: {}", path.display(), e));
            }
        }
    }

    fn take_dropped_file(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };

        match (file.bytes, file.path) {
            (Some(bytes), _) => self.select_image(file.name, bytes),
            (None, Some(path)) => self.load_path(&path),
            (None, None) => {}
        }
    }

    fn sync_texture(&mut self, ctx: &egui::Context) {
        let Some(specimen) = &self.session.state().specimen else {
            self.texture = None;
            return;
        };

        let current = self
            .texture
            .as_ref()
            .is_some_and(|(image, _)| Arc::ptr_eq(image, &specimen.image));
        if current {
            return;
        }

        let thumbnail = specimen
            .image
            .thumbnail(THUMBNAIL_SIZE, THUMBNAIL_SIZE)
            .to_rgba8();
        let size = [thumbnail.width() as usize, thumbnail.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, thumbnail.as_raw());
        let handle = ctx.load_texture("specimen", color_image, egui::TextureOptions::LINEAR);
        self.texture = Some((specimen.image.clone(), handle));
    }

    fn controls(&mut self, ui: &mut egui::Ui, screen: &Screen) {
        ui.heading("⚙️ MediScan Controls");
        ui.separator();

        let mut threshold = screen.threshold;
        let slider = ui
            .add(egui::Slider::new(&mut threshold, 0..=100).text("Accuracy Threshold (%)"))
            .on_hover_text("Filters out unclear images.");
        if slider.changed() {
            self.session.dispatch(Event::ThresholdChanged(threshold));
        }

        ui.separator();
        if ui.button("🔄 Reset Analysis").clicked() {
            self.input_error = None;
            self.session.dispatch(Event::Reset);
        }
    }

    fn scanner_tab(&mut self, ui: &mut egui::Ui, screen: &Screen) {
        ui.columns(2, |columns| {
            self.specimen_column(&mut columns[0], screen);
            results_column(&mut columns[1], screen);
        });
    }

    fn specimen_column(&mut self, ui: &mut egui::Ui, screen: &Screen) {
        ui.heading("1. Specimen Input");
        ui.label("📸 Guidance: Ensure the disease image is centered and well-lit.");
        ui.label("Upload a jpg or png, or drop one onto the window.");

        let upload = ui.add_enabled(!screen.busy, egui::Button::new("📂 Upload Image"));
        if upload.clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("image", &["jpg", "jpeg", "png"])
                .pick_file()
            {
                self.load_path(&path);
            }
        }

        if let Some(error) = &self.input_error {
            ui.colored_label(tone_color(Tone::Error), error.as_str());
        }

        if let Some((_, texture)) = &self.texture {
            ui.add(egui::Image::new(texture).max_width(ui.available_width()));
            if let Some(name) = &screen.specimen_name {
                ui.small(format!("Analyzed Specimen: {}", name));
            }
        }

        let run = ui.add_enabled(
            screen.can_run_diagnostics,
            egui::Button::new("🚀 Run Diagnostics"),
        );
        if run.clicked() {
            self.session.dispatch(Event::RunDiagnostics);
        }
    }

    fn encyclopedia_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading("📚 Dermatological Encyclopedia");

        egui::ComboBox::from_label("Select Diagnosis")
            .selected_text(self.selected_condition.clone())
            .show_ui(ui, |ui| {
                for name in self.table.names() {
                    ui.selectable_value(&mut self.selected_condition, name.to_string(), name);
                }
            });

        let Some(entry) = encyclopedia_entry(&self.table, &self.selected_condition) else {
            return;
        };

        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(format!("📌 {}", entry.name))
                .size(20.0)
                .color(tone_color(entry.style.tone)),
        );
        ui.label(format!("Risk: {}", entry.risk_label));
        ui.label(format!("Overview: {}", entry.description));
        ui.label("Signs:");
        ui.label(entry.features.as_str());

        ui.columns(2, |columns| {
            columns[0].strong("🧬 Causes");
            columns[0].label(entry.causes.as_str());
            columns[1].strong("💊 Treatment");
            columns[1].label(entry.treatment.as_str());
        });

        ui.add_space(8.0);
        ui.colored_label(
            tone_color(Tone::Warning),
            format!("Directive: {}", entry.action),
        );
    }

    fn locator_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading("🚑 Specialist Locator");
        ui.label("Locate the nearest Board-Certified Dermatologist.");
        if ui.button("🔍 Find Dermatologist Near Me").clicked() {
            self.session.dispatch(Event::FindSpecialist);
        }
    }
}

impl eframe::App for MediScanWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.session.process_pending();
        self.take_dropped_file(ctx);
        self.sync_texture(ctx);

        let screen = render(self.session.state(), &self.table);

        egui::SidePanel::left("controls").show(ctx, |ui| self.controls(ui, &screen));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("🏥 Skin Disease Detection");
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, Tab::Scanner, "🔍 Clinical Scanner");
                ui.selectable_value(&mut self.tab, Tab::Encyclopedia, "📚 Disease Encyclopedia");
                ui.selectable_value(&mut self.tab, Tab::Locator, "🚑 Specialist Locator");
            });
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| match self.tab {
                Tab::Scanner => self.scanner_tab(ui, &screen),
                Tab::Encyclopedia => self.encyclopedia_tab(ui),
                Tab::Locator => self.locator_tab(ui),
            });
        });

        // completions arrive on the channel without waking the UI
        if screen.busy {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

fn results_column(ui: &mut egui::Ui, screen: &Screen) {
    ui.heading("2. Diagnostic Results");

    match &screen.panel {
        ScannerPanel::AwaitingInput => {
            ui.label("Upload an image to begin diagnostic analysis.");
        }
        ScannerPanel::Decoding { file_name } => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(format!("Reading {}...", file_name));
            });
        }
        ScannerPanel::Ready => {
            ui.label("Specimen loaded. Run diagnostics to analyze it.");
        }
        ScannerPanel::Classifying => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Processing Neural Network Layers...");
            });
        }
        ScannerPanel::Failed { message } => {
            ui.colored_label(tone_color(Tone::Error), "❌ ANALYSIS FAILED");
            ui.label(message.as_str());
        }
        ScannerPanel::Inconclusive(view) => {
            ui.colored_label(tone_color(Tone::Error), view.headline.as_str());
            ui.colored_label(tone_color(Tone::Warning), view.detail.as_str());
            ui.label(view.guidance.as_str());
        }
        ScannerPanel::Conclusive(view) => diagnosis(ui, view),
    }
}

fn diagnosis(ui: &mut egui::Ui, view: &DiagnosisView) {
    ui.label(
        egui::RichText::new(&view.headline)
            .size(20.0)
            .strong()
            .color(tone_color(view.style.tone)),
    );
    ui.label(format!("Risk Assessment: {}", view.risk_label));
    ui.label("AI Confidence Probability");
    ui.label(egui::RichText::new(&view.confidence).size(28.0).strong());

    ui.separator();
    ui.heading("📋 Clinical Breakdown");

    egui::CollapsingHeader::new("👁️ Visual Characteristics (What the AI saw)")
        .default_open(true)
        .show(ui, |ui| {
            ui.label(format!("Condition: {}", view.description));
            ui.label("Typical Features:");
            ui.label(view.features.as_str());
        });
    egui::CollapsingHeader::new("🧬 Etiology (Why this happened)").show(ui, |ui| {
        ui.label(view.causes.as_str());
    });
    egui::CollapsingHeader::new("💊 Medical Treatment Options").show(ui, |ui| {
        ui.label(view.treatment.as_str());
    });

    ui.add_space(8.0);
    egui::Frame::none()
        .fill(egui::Color32::from_rgb(240, 242, 246))
        .stroke(egui::Stroke::new(2.0, tone_color(Tone::Error)))
        .rounding(10.0)
        .inner_margin(15.0)
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new("RECOMMENDED ACTION PLAN:")
                    .strong()
                    .color(egui::Color32::BLACK),
            );
            ui.label(egui::RichText::new(&view.action).color(egui::Color32::BLACK));
        });

    ui.separator();
    ui.heading("📊 Differential Diagnosis");
    for entry in &view.differential {
        ui.add(
            egui::ProgressBar::new(entry.probability / 100.0)
                .text(format!("{} {:.1}%", entry.condition, entry.probability)),
        );
    }
}

fn tone_color(tone: Tone) -> egui::Color32 {
    match tone {
        Tone::Error => egui::Color32::from_rgb(255, 75, 75),
        Tone::Warning => egui::Color32::from_rgb(255, 164, 33),
        Tone::Success => egui::Color32::from_rgb(33, 195, 84),
    }
}

pub fn run(
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    table: Arc<ReferenceTable>,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title("Skin Disease Detection"),
        ..Default::default()
    };

    eframe::run_native(
        "Skin Disease Detection",
        options,
        Box::new(move |cc| {
            let window_logger = logger.with_namespace("gui");
            let specialist_locator = Arc::new(SpecialistLocatorEgui::new(
                cc.egui_ctx.clone(),
                logger.clone(),
            ));
            let session = Session::new(config, logger, image_classifier, specialist_locator);
            Box::new(MediScanWindow::new(session, window_logger, table))
        }),
    )?;

    Ok(())
}
