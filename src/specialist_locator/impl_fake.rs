use crate::specialist_locator::interface::SpecialistLocator;
use std::sync::Mutex;

#[derive(Default)]
pub struct SpecialistLocatorFake {
    opened: Mutex<Vec<String>>,
}

impl SpecialistLocatorFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().map(|urls| urls.clone()).unwrap_or_default()
    }
}

impl SpecialistLocator for SpecialistLocatorFake {
    fn open_search(&self, url: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.opened
            .lock()
            .map_err(|e| e.to_string())?
            .push(url.to_string());
        Ok(())
    }
}
