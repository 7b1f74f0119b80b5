/// Opens an external search for nearby dermatologists. Fire and forget.
pub trait SpecialistLocator {
    fn open_search(&self, url: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
