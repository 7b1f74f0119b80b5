use crate::specialist_locator::interface::SpecialistLocator;

pub struct SpecialistLocatorConsole {}

impl SpecialistLocatorConsole {
    pub fn new() -> Self {
        Self {}
    }
}

impl SpecialistLocator for SpecialistLocatorConsole {
    fn open_search(&self, url: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        println!("Find a dermatologist near you: {}", url);
        Ok(())
    }
}
