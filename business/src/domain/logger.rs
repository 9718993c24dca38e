/// Logging port for the catalog engine. The domain and application layers
/// only know this trait; the presentation layer decides what backs it.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
