use crate::library::logger::interface::Logger;
use crate::specialist_locator::interface::SpecialistLocator;
use eframe::egui;
use std::sync::Arc;

/// Hands the URL to the egui platform integration, which opens it in the
/// system browser on the next frame.
pub struct SpecialistLocatorEgui {
    ctx: egui::Context,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl SpecialistLocatorEgui {
    pub fn new(ctx: egui::Context, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            ctx,
            logger: logger.with_namespace("specialist_locator"),
        }
    }
}

impl SpecialistLocator for SpecialistLocatorEgui {
    fn open_search(&self, url: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!("Opening {}", url))?;
        self.ctx.open_url(egui::OpenUrl::new_tab(url));
        self.ctx.request_repaint();
        Ok(())
    }
}
