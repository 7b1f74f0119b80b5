use clap::Parser;
use config::Config;
use display::impl_console::format_screen;
use image_classifier::impl_fake::ImageClassifierFake;
use image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use image_classifier::interface::ImageClassifier;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use reference_table::table::ReferenceTable;
use session::core::Event;
use session::main::Session;
use session::render::render;
use specialist_locator::impl_console::SpecialistLocatorConsole;
use std::path::PathBuf;
use std::sync::Arc;

mod config;
mod diagnosis;
mod display;
mod image_classifier;
mod library;
mod reference_table;
mod session;
mod specialist_locator;

/// Skin lesion classifier with a clinical reference breakdown.
#[derive(Debug, Parser)]
#[command(name = "mediscan", version)]
struct Cli {
    /// ONNX model to load
    #[arg(long)]
    model: Option<PathBuf>,

    /// Minimum confidence (%) for a conclusive result
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    threshold: Option<u8>,

    /// Use random predictions instead of a model
    #[arg(long)]
    fake_classifier: bool,

    /// Analyze this image and print the report instead of opening a window
    #[arg(long)]
    image: Option<PathBuf>,

    /// Print the dermatologist search link
    #[arg(long)]
    find_specialist: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = Config::default();
    if let Some(model) = &cli.model {
        config.model.onnx_model_path = model.display().to_string();
    }
    if let Some(threshold) = cli.threshold {
        config.default_threshold = threshold;
    }

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let table = Arc::new(ReferenceTable::bundled());
    let _ = logger.info(&format!("Reference table holds {} conditions", table.len()));
    for label in table.unmapped_labels(&config.model.labels) {
        let _ = logger.warn(&format!(
            "Model label {} has no reference entry; results for it use the generic record",
            label
        ));
    }

    let image_classifier: Arc<dyn ImageClassifier + Send + Sync> = if cli.fake_classifier {
        let _ = logger.warn("Using the fake classifier; predictions are random");
        Arc::new(ImageClassifierFake::new(
            logger.clone(),
            config.model.labels.clone(),
        ))
    } else {
        Arc::new(ImageClassifierTractOnnx::new(
            config.model.clone(),
            logger.clone(),
        ))
    };

    if cli.image.is_some() || cli.find_specialist {
        return run_headless(&cli, config, logger, image_classifier, &table);
    }

    display::impl_gui::run(config, logger, image_classifier, table)
}

fn run_headless(
    cli: &Cli,
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    table: &ReferenceTable,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(
        config,
        logger,
        image_classifier,
        Arc::new(SpecialistLocatorConsole::new()),
    );

    if let Some(path) = &cli.image {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        session.dispatch(Event::ImageSelected {
            file_name,
            bytes: Arc::from(bytes),
        });
        session.wait_until_idle()?;
        session.dispatch(Event::RunDiagnostics);
        session.wait_until_idle()?;

        print!("{}", format_screen(&render(session.state(), table)));
    }

    if cli.find_specialist {
        session.dispatch(Event::FindSpecialist);
        session.join_effects();
    }

    Ok(())
}
