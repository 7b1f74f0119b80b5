/// Per-channel normalization applied after scaling pixels to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub mean: [f32; 3],
    pub std: [f32; 3],
}

impl Normalization {
    #[cfg(test)]
    pub const IDENTITY: Normalization = Normalization {
        mean: [0.0; 3],
        std: [1.0; 3],
    };

    // ViT image processors map [0, 1] onto [-1, 1]
    pub const VIT: Normalization = Normalization {
        mean: [0.5; 3],
        std: [0.5; 3],
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: String,
    pub input_width: u32,
    pub input_height: u32,
    /// Raw label for each output index, in model order.
    pub labels: Vec<String>,
    pub normalization: Normalization,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            onnx_model_path: "./models/skin_cancer_vit.onnx".to_string(),
            input_width: 224,
            input_height: 224,
            labels: [
                "benign_keratosis",
                "basal_cell_carcinoma",
                "actinic_keratoses",
                "vascular_lesions",
                "melanocytic_nevi",
                "melanoma",
                "dermatofibroma",
            ]
            .iter()
            .map(|label| label.to_string())
            .collect(),
            normalization: Normalization::VIT,
        }
    }
}
