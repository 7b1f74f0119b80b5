use crate::config::Config;
use crate::diagnosis::gate::MAX_THRESHOLD;
use crate::diagnosis::prediction::PredictionResult;
use crate::image_classifier::interface::Classification;
use image::DynamicImage;
use std::fmt;
use std::sync::Arc;

/// A decoded image loaded into the session.
#[derive(Clone)]
pub struct Specimen {
    pub file_name: String,
    pub image: Arc<DynamicImage>,
}

impl PartialEq for Specimen {
    fn eq(&self, other: &Self) -> bool {
        self.file_name == other.file_name && Arc::ptr_eq(&self.image, &other.image)
    }
}

impl fmt::Debug for Specimen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Specimen({}, {}x{})",
            self.file_name,
            self.image.width(),
            self.image.height()
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Stage {
    AwaitingInput,
    Decoding { file_name: String },
    SpecimenReady,
    Classifying,
    Classified { prediction: PredictionResult },
    Failed { message: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct State {
    pub threshold: u8,
    pub specimen: Option<Specimen>,
    pub stage: Stage,
    /// Bumped whenever in-flight work becomes stale.
    pub generation: u64,
}

impl State {
    pub fn is_busy(&self) -> bool {
        matches!(self.stage, Stage::Decoding { .. } | Stage::Classifying)
    }

    pub fn can_run_diagnostics(&self) -> bool {
        self.specimen.is_some() && !self.is_busy()
    }
}

#[derive(Debug)]
pub enum Event {
    ImageSelected {
        file_name: String,
        bytes: Arc<[u8]>,
    },
    ImageDecodeDone {
        generation: u64,
        result: Result<Specimen, Box<dyn std::error::Error + Send + Sync>>,
    },
    RunDiagnostics,
    ClassifyDone {
        generation: u64,
        result: Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>,
    },
    ThresholdChanged(u8),
    Reset,
    FindSpecialist,
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::ImageSelected { file_name, bytes } => {
                format!("ImageSelected({}, {} bytes)", file_name, bytes.len())
            }
            event => format!("{:?}", event),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    DecodeImage {
        generation: u64,
        file_name: String,
        bytes: Arc<[u8]>,
    },
    ClassifyImage {
        generation: u64,
        specimen: Specimen,
    },
    OpenSpecialistSearch {
        url: String,
    },
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::DecodeImage {
                generation,
                file_name,
                bytes,
            } => format!(
                "DecodeImage(#{}, {}, {} bytes)",
                generation,
                file_name,
                bytes.len()
            ),
            effect => format!("{:?}", effect),
        }
    }
}

pub fn init(config: &Config) -> (State, Vec<Effect>) {
    (
        State {
            threshold: config.default_threshold.min(MAX_THRESHOLD),
            specimen: None,
            stage: Stage::AwaitingInput,
            generation: 0,
        },
        vec![],
    )
}

pub fn transition(config: &Config, state: State, event: Event) -> (State, Vec<Effect>) {
    match (state.stage.clone(), event) {
        // A running classification keeps its image
        (Stage::Classifying, Event::ImageSelected { .. }) => (state, vec![]),
        (_, Event::ImageSelected { file_name, bytes }) => {
            let generation = state.generation + 1;
            (
                State {
                    specimen: None,
                    stage: Stage::Decoding {
                        file_name: file_name.clone(),
                    },
                    generation,
                    ..state
                },
                vec![Effect::DecodeImage {
                    generation,
                    file_name,
                    bytes,
                }],
            )
        }

        (Stage::Decoding { .. }, Event::ImageDecodeDone { generation, result })
            if generation == state.generation =>
        {
            match result {
                Ok(specimen) => (
                    State {
                        specimen: Some(specimen),
                        stage: Stage::SpecimenReady,
                        ..state
                    },
                    vec![],
                ),
                Err(e) => (
                    State {
                        specimen: None,
                        stage: Stage::Failed {
                            message: format!("Could not read image: {}", e),
                        },
                        ..state
                    },
                    vec![],
                ),
            }
        }

        (_, Event::RunDiagnostics) if state.can_run_diagnostics() => {
            let generation = state.generation + 1;
            match state.specimen.clone() {
                Some(specimen) => (
                    State {
                        stage: Stage::Classifying,
                        generation,
                        ..state
                    },
                    vec![Effect::ClassifyImage {
                        generation,
                        specimen,
                    }],
                ),
                None => (state, vec![]),
            }
        }

        (Stage::Classifying, Event::ClassifyDone { generation, result })
            if generation == state.generation =>
        {
            let stage = match result {
                Ok(classifications) => match PredictionResult::new(classifications) {
                    Some(prediction) => Stage::Classified { prediction },
                    None => Stage::Failed {
                        message: "Classifier returned no predictions".to_string(),
                    },
                },
                Err(e) => Stage::Failed {
                    message: format!("Classification failed: {}", e),
                },
            };
            (State { stage, ..state }, vec![])
        }

        (_, Event::ThresholdChanged(threshold)) => (
            State {
                threshold: threshold.min(MAX_THRESHOLD),
                ..state
            },
            vec![],
        ),

        (_, Event::Reset) => {
            let (initial, effects) = init(config);
            (
                State {
                    generation: state.generation + 1,
                    ..initial
                },
                effects,
            )
        }

        (_, Event::FindSpecialist) => (
            state,
            vec![Effect::OpenSpecialistSearch {
                url: config.specialist_search_url.clone(),
            }],
        ),

        // Stale completions and actions that do not apply
        _ => (state, vec![]),
    }
}
