use crate::image_classifier::models::model_config::ModelConfig;

#[derive(Debug, Clone)]
pub struct Config {
    /// Percentage the top score must reach, 0-100.
    pub default_threshold: u8,
    pub model: ModelConfig,
    pub specialist_search_url: String,
    pub logger_timezone: chrono::FixedOffset,
    pub window_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_threshold: 45,
            model: ModelConfig::default(),
            specialist_search_url: "https://www.google.com/maps/search/dermatologist+near+me"
                .to_string(),
            logger_timezone: local_offset(),
            window_size: [1180.0, 820.0],
        }
    }
}

fn local_offset() -> chrono::FixedOffset {
    *chrono::Local::now().offset()
}
