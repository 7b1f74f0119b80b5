use crate::config::Config;
use crate::session::core::{init, transition, Effect, Event, Stage, State};
use crate::session::tests::fixture::{classifications, png_bytes, specimen};

fn ready_state(config: &Config) -> State {
    let (state, _) = init(config);
    State {
        specimen: Some(specimen("lesion.jpg")),
        stage: Stage::SpecimenReady,
        generation: 1,
        ..state
    }
}

fn classifying_state(config: &Config) -> State {
    State {
        stage: Stage::Classifying,
        generation: 2,
        ..ready_state(config)
    }
}

#[test]
fn test_init() {
    let config = Config::default();
    let (state, effects) = init(&config);

    assert_eq!(state.stage, Stage::AwaitingInput);
    assert_eq!(state.threshold, 45);
    assert!(state.specimen.is_none());
    assert!(effects.is_empty());
}

#[test]
fn test_image_selected_requests_decode() {
    let config = Config::default();
    let (state, _) = init(&config);
    let bytes = png_bytes();

    let (state, effects) = transition(
        &config,
        state,
        Event::ImageSelected {
            file_name: "lesion.png".to_string(),
            bytes: bytes.clone(),
        },
    );

    assert_eq!(
        state.stage,
        Stage::Decoding {
            file_name: "lesion.png".to_string()
        }
    );
    assert_eq!(state.generation, 1);
    assert_eq!(
        effects,
        vec![Effect::DecodeImage {
            generation: 1,
            file_name: "lesion.png".to_string(),
            bytes,
        }]
    );
}

#[test]
fn test_new_image_clears_previous_result() {
    let config = Config::default();
    let state = State {
        stage: Stage::Classified {
            prediction: crate::diagnosis::prediction::PredictionResult::new(classifications(&[
                ("melanoma", 0.9),
            ]))
            .unwrap(),
        },
        ..ready_state(&config)
    };

    let (state, _) = transition(
        &config,
        state,
        Event::ImageSelected {
            file_name: "second.png".to_string(),
            bytes: png_bytes(),
        },
    );

    assert!(state.specimen.is_none());
    assert!(matches!(state.stage, Stage::Decoding { .. }));
}

#[test]
fn test_image_selected_ignored_while_classifying() {
    let config = Config::default();
    let state = classifying_state(&config);

    let (next, effects) = transition(
        &config,
        state.clone(),
        Event::ImageSelected {
            file_name: "other.png".to_string(),
            bytes: png_bytes(),
        },
    );

    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn test_decode_done_loads_specimen() {
    let config = Config::default();
    let (state, _) = init(&config);
    let state = State {
        stage: Stage::Decoding {
            file_name: "lesion.jpg".to_string(),
        },
        generation: 1,
        ..state
    };
    let loaded = specimen("lesion.jpg");

    let (state, effects) = transition(
        &config,
        state,
        Event::ImageDecodeDone {
            generation: 1,
            result: Ok(loaded.clone()),
        },
    );

    assert_eq!(state.stage, Stage::SpecimenReady);
    assert_eq!(state.specimen, Some(loaded));
    assert!(effects.is_empty());
}

#[test]
fn test_decode_failure_is_visible() {
    let config = Config::default();
    let (state, _) = init(&config);
    let state = State {
        stage: Stage::Decoding {
            file_name: "notes.txt".to_string(),
        },
        generation: 1,
        ..state
    };

    let (state, _) = transition(
        &config,
        state,
        Event::ImageDecodeDone {
            generation: 1,
            result: Err("unsupported format".into()),
        },
    );

    match state.stage {
        Stage::Failed { message } => assert!(message.contains("unsupported format")),
        other => panic!("Unexpected stage {:?}", other),
    }
}

#[test]
fn test_run_diagnostics_requests_classification() {
    let config = Config::default();
    let state = ready_state(&config);

    let (state, effects) = transition(&config, state, Event::RunDiagnostics);

    assert_eq!(state.stage, Stage::Classifying);
    assert_eq!(state.generation, 2);
    assert_eq!(
        effects,
        vec![Effect::ClassifyImage {
            generation: 2,
            specimen: state.specimen.clone().unwrap(),
        }]
    );
}

#[test]
fn test_run_diagnostics_without_image_does_nothing() {
    let config = Config::default();
    let (state, _) = init(&config);

    let (next, effects) = transition(&config, state.clone(), Event::RunDiagnostics);

    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn test_run_diagnostics_while_classifying_does_nothing() {
    let config = Config::default();
    let state = classifying_state(&config);

    let (next, effects) = transition(&config, state.clone(), Event::RunDiagnostics);

    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn test_classify_done_stores_prediction() {
    let config = Config::default();
    let state = classifying_state(&config);

    let (state, effects) = transition(
        &config,
        state,
        Event::ClassifyDone {
            generation: 2,
            result: Ok(classifications(&[("melanoma", 0.92), ("melanocytic_nevi", 0.05)])),
        },
    );

    match &state.stage {
        Stage::Classified { prediction } => {
            assert_eq!(prediction.top().label, "melanoma");
            assert_eq!(prediction.len(), 2);
        }
        other => panic!("Unexpected stage {:?}", other),
    }
    assert!(effects.is_empty());
}

#[test]
fn test_classify_failure_is_distinct_from_inconclusive() {
    let config = Config::default();
    let state = classifying_state(&config);

    let (state, _) = transition(
        &config,
        state,
        Event::ClassifyDone {
            generation: 2,
            result: Err("model unavailable".into()),
        },
    );

    match state.stage {
        Stage::Failed { message } => assert!(message.contains("model unavailable")),
        other => panic!("Unexpected stage {:?}", other),
    }
}

#[test]
fn test_empty_prediction_fails() {
    let config = Config::default();
    let state = classifying_state(&config);

    let (state, _) = transition(
        &config,
        state,
        Event::ClassifyDone {
            generation: 2,
            result: Ok(vec![]),
        },
    );

    assert!(matches!(state.stage, Stage::Failed { .. }));
}

#[test]
fn test_stale_classification_is_dropped() {
    let config = Config::default();
    let state = classifying_state(&config);

    let (state, _) = transition(&config, state, Event::Reset);
    let (state, effects) = transition(
        &config,
        state,
        Event::ClassifyDone {
            generation: 2,
            result: Ok(classifications(&[("melanoma", 0.92)])),
        },
    );

    assert_eq!(state.stage, Stage::AwaitingInput);
    assert!(effects.is_empty());
}

#[test]
fn test_stale_decode_is_dropped() {
    let config = Config::default();
    let (state, _) = init(&config);

    let (state, _) = transition(
        &config,
        state,
        Event::ImageSelected {
            file_name: "first.png".to_string(),
            bytes: png_bytes(),
        },
    );
    let (state, _) = transition(
        &config,
        state,
        Event::ImageSelected {
            file_name: "second.png".to_string(),
            bytes: png_bytes(),
        },
    );
    let (state, _) = transition(
        &config,
        state,
        Event::ImageDecodeDone {
            generation: 1,
            result: Ok(specimen("first.png")),
        },
    );

    assert_eq!(
        state.stage,
        Stage::Decoding {
            file_name: "second.png".to_string()
        }
    );
    assert!(state.specimen.is_none());
}

#[test]
fn test_decode_after_reset_is_dropped() {
    let config = Config::default();
    let (state, _) = init(&config);

    let (state, _) = transition(
        &config,
        state,
        Event::ImageSelected {
            file_name: "lesion.png".to_string(),
            bytes: png_bytes(),
        },
    );
    let (state, _) = transition(&config, state, Event::Reset);
    let (state, effects) = transition(
        &config,
        state,
        Event::ImageDecodeDone {
            generation: 1,
            result: Ok(specimen("lesion.png")),
        },
    );

    assert_eq!(state.stage, Stage::AwaitingInput);
    assert!(state.specimen.is_none());
    assert!(!state.can_run_diagnostics());
    assert!(effects.is_empty());
}

#[test]
fn test_threshold_change_keeps_prediction() {
    let config = Config::default();
    let prediction =
        crate::diagnosis::prediction::PredictionResult::new(classifications(&[("melanoma", 0.3)]))
            .unwrap();
    let state = State {
        stage: Stage::Classified {
            prediction: prediction.clone(),
        },
        ..ready_state(&config)
    };

    let (state, effects) = transition(&config, state, Event::ThresholdChanged(20));

    assert_eq!(state.threshold, 20);
    assert_eq!(state.stage, Stage::Classified { prediction });
    assert!(effects.is_empty());
}

#[test]
fn test_threshold_is_clamped() {
    let config = Config::default();
    let (state, _) = init(&config);

    let (state, _) = transition(&config, state, Event::ThresholdChanged(180));

    assert_eq!(state.threshold, 100);
}

#[test]
fn test_reset_restores_defaults() {
    let config = Config::default();
    let state = State {
        threshold: 80,
        ..classifying_state(&config)
    };

    let (state, effects) = transition(&config, state, Event::Reset);

    assert_eq!(state.threshold, 45);
    assert_eq!(state.stage, Stage::AwaitingInput);
    assert!(state.specimen.is_none());
    assert_eq!(state.generation, 3);
    assert!(effects.is_empty());
}

#[test]
fn test_find_specialist() {
    let config = Config::default();
    let (state, _) = init(&config);

    let (next, effects) = transition(&config, state.clone(), Event::FindSpecialist);

    assert_eq!(next, state);
    assert_eq!(
        effects,
        vec![Effect::OpenSpecialistSearch {
            url: config.specialist_search_url.clone()
        }]
    );
}
