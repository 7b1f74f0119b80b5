use crate::image_classifier::error::ClassifierError;
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::tract::image::resize_image_to_tensor;
use crate::image_classifier::tract::scores::{rank, softmax};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::sync::{Arc, Mutex};
use tract_onnx::prelude::*;

type Plan = SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>;

/// Loads the model on the first classification. A failed load is reported to
/// that caller and retried on the next one.
pub struct ImageClassifierTractOnnx {
    model: Mutex<Option<Arc<Plan>>>,
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    pub fn new(config: ModelConfig, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            model: Mutex::new(None),
            config,
            logger: logger.with_namespace("classifier").with_namespace("tract"),
        }
    }

    fn model(&self) -> Result<Arc<Plan>, ClassifierError> {
        let mut model = self
            .model
            .lock()
            .map_err(|_| ClassifierError::Inference("model lock poisoned".to_string()))?;

        if let Some(plan) = model.as_ref() {
            return Ok(plan.clone());
        }

        let plan = Arc::new(self.load()?);
        *model = Some(plan.clone());
        Ok(plan)
    }

    fn load(&self) -> Result<Plan, ClassifierError> {
        let config = &self.config;
        let _ = self
            .logger
            .info(&format!("Loading model {}", config.onnx_model_path));

        let input_fact = f32::fact([
            1,
            3,
            config.input_height as usize,
            config.input_width as usize,
        ]);

        let plan = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)
            .and_then(|model| model.with_input_fact(0, input_fact.into()))
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| ClassifierError::ModelLoad {
                path: config.onnx_model_path.clone(),
                message: format!("{:#}", e),
            })?;

        let _ = self.logger.info(&format!(
            "Model ready ({}x{}, {} labels)",
            config.input_width,
            config.input_height,
            config.labels.len()
        ));

        Ok(plan)
    }

    fn run(&self, image: &DynamicImage) -> Result<Vec<Classification>, ClassifierError> {
        let input = resize_image_to_tensor(
            image,
            self.config.input_width,
            self.config.input_height,
            &self.config.normalization,
        );

        let outputs = self
            .model()?
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| ClassifierError::Inference(format!("{:#}", e)))?;

        let logits = outputs
            .first()
            .ok_or(ClassifierError::NoOutput)?
            .to_array_view::<f32>()
            .map_err(|e| ClassifierError::Inference(format!("{:#}", e)))?;

        // logits are [1, num_labels]; flatten the batch dimension away
        let logits: Vec<f32> = logits.iter().copied().collect();

        if logits.len() != self.config.labels.len() {
            return Err(ClassifierError::LabelCountMismatch {
                expected: self.config.labels.len(),
                actual: logits.len(),
            });
        }

        Ok(rank(&self.config.labels, &softmax(&logits)))
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        let classifications = self.run(image)?;

        if let Some(top) = classifications.first() {
            let _ = self.logger.info(&format!(
                "Top prediction {} ({:.3})",
                top.label, top.confidence
            ));
        }

        Ok(classifications)
    }
}
