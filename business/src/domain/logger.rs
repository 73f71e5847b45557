/// Logging port used by use cases and the error translator.
///
/// Implemented in infrastructure so the domain never depends on a logging crate.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
