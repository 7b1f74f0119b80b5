use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::session::core::{Effect, Event, Specimen};
use crate::specialist_locator::interface::SpecialistLocator;
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    specialist_locator: Arc<dyn SpecialistLocator + Send + Sync>,
    event_sender: Sender<Event>,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        specialist_locator: Arc<dyn SpecialistLocator + Send + Sync>,
        event_sender: Sender<Event>,
    ) -> Self {
        Self {
            logger,
            image_classifier,
            specialist_locator,
            event_sender,
        }
    }

    pub fn run_effect(&self, effect: Effect) {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        match effect {
            Effect::DecodeImage {
                generation,
                file_name,
                bytes,
            } => {
                let result: Result<Specimen, Box<dyn std::error::Error + Send + Sync>> =
                    image::load_from_memory(&bytes)
                        .map(|image| Specimen {
                            file_name,
                            image: Arc::new(image),
                        })
                        .map_err(|e| e.into());
                let _ = self
                    .event_sender
                    .send(Event::ImageDecodeDone { generation, result });
            }
            Effect::ClassifyImage {
                generation,
                specimen,
            } => {
                let result = self.image_classifier.classify(&specimen.image);
                if let Err(e) = &result {
                    let _ = self.logger.warn(&format!("Classification failed: {}", e));
                }
                let _ = self
                    .event_sender
                    .send(Event::ClassifyDone { generation, result });
            }
            Effect::OpenSpecialistSearch { url } => {
                if let Err(e) = self.specialist_locator.open_search(&url) {
                    let _ = self
                        .logger
                        .warn(&format!("Could not open specialist search: {}", e));
                }
            }
        }
    }
}
