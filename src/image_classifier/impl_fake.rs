use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::image_classifier::tract::scores::rank;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;
use std::time::Duration;

enum Behavior {
    Random { labels: Vec<String>, latency: Duration },
    #[cfg(test)]
    Fixed(Vec<Classification>),
    #[cfg(test)]
    Failing(String),
}

pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    behavior: Behavior,
}

impl ImageClassifierFake {
    /// Random scores over `labels`, summing to one.
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, labels: Vec<String>) -> Self {
        Self {
            logger: logger.with_namespace("classifier").with_namespace("fake"),
            behavior: Behavior::Random {
                labels,
                latency: Duration::from_millis(500),
            },
        }
    }

    #[cfg(test)]
    pub fn with_classifications(
        logger: Arc<dyn Logger + Send + Sync>,
        classifications: Vec<Classification>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("classifier").with_namespace("fake"),
            behavior: Behavior::Fixed(classifications),
        }
    }

    #[cfg(test)]
    pub fn failing(logger: Arc<dyn Logger + Send + Sync>, message: &str) -> Self {
        Self {
            logger: logger.with_namespace("classifier").with_namespace("fake"),
            behavior: Behavior::Failing(message.to_string()),
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!(
            "Classifying {}x{} image...",
            image.width(),
            image.height()
        ))?;

        match &self.behavior {
            Behavior::Random { labels, latency } => {
                std::thread::sleep(*latency);

                let mut rng = rand::rng();
                let weight_dist = Uniform::new(0.0f32, 1.0)?;

                let weights: Vec<f32> = labels
                    .iter()
                    .map(|_| weight_dist.sample(&mut rng).powi(3))
                    .collect();
                let total: f32 = weights.iter().sum();
                let scores: Vec<f32> = weights
                    .iter()
                    .map(|w| if total > 0.0 { w / total } else { 0.0 })
                    .collect();

                Ok(rank(labels, &scores))
            }
            #[cfg(test)]
            Behavior::Fixed(classifications) => Ok(classifications.clone()),
            #[cfg(test)]
            Behavior::Failing(message) => Err(message.clone().into()),
        }
    }
}
