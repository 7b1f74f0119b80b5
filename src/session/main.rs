use crate::config::Config;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::session::core::{init, transition, Effect, Event, State};
use crate::session::run_effect::RunEffect;
use crate::specialist_locator::interface::SpecialistLocator;
use std::sync::mpsc::{channel, Receiver, RecvError};
use std::sync::Arc;
use std::thread::JoinHandle;

/// One user's scanning session.
///
/// Only the owner thread runs `transition`; effects run on spawned threads and
/// report back through the channel, so the state has a single writer.
pub struct Session {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    state: State,
    event_receiver: Receiver<Event>,
    run_effect: RunEffect,
    effect_threads: Vec<JoinHandle<()>>,
}

impl Session {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        specialist_locator: Arc<dyn SpecialistLocator + Send + Sync>,
    ) -> Self {
        let logger = logger.with_namespace("session");
        let (event_sender, event_receiver) = channel();
        let run_effect = RunEffect::new(
            logger.clone(),
            image_classifier,
            specialist_locator,
            event_sender,
        );
        let (state, effects) = init(&config);

        let mut session = Self {
            config,
            logger,
            state,
            event_receiver,
            run_effect,
            effect_threads: Vec::new(),
        };
        session.spawn_effects(effects);
        session
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn dispatch(&mut self, event: Event) {
        let _ = self
            .logger
            .info(&format!("event: {}", event.to_display_string()));

        let (new_state, effects) = transition(&self.config, self.state.clone(), event);

        if new_state.stage != self.state.stage {
            let _ = self
                .logger
                .info(&format!("stage: {:?} -> {:?}", self.state.stage, new_state.stage));
        }

        self.state = new_state;
        self.spawn_effects(effects);
    }

    /// Applies every completion that has arrived. Returns whether any did.
    pub fn process_pending(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dispatch(event);
            changed = true;
        }
        changed
    }

    /// Blocks until no decode or classification is in flight.
    pub fn wait_until_idle(&mut self) -> Result<(), RecvError> {
        while self.state.is_busy() {
            let event = self.event_receiver.recv()?;
            self.dispatch(event);
        }
        Ok(())
    }

    /// Waits for every spawned effect to finish, then applies what they sent.
    pub fn join_effects(&mut self) {
        for handle in std::mem::take(&mut self.effect_threads) {
            if handle.join().is_err() {
                let _ = self.logger.warn("effect thread panicked");
            }
        }
        self.process_pending();
    }

    fn spawn_effects(&mut self, effects: Vec<Effect>) {
        self.effect_threads.retain(|handle| !handle.is_finished());
        for effect in effects {
            let run_effect = self.run_effect.clone();
            self.effect_threads
                .push(std::thread::spawn(move || run_effect.run_effect(effect)));
        }
    }
}
