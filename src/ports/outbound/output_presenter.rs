use crate::shared::Result;

/// OutputPresenter port for presenting the serialized report locally
///
/// Used for dry runs and `--output`, where the payload is written to
/// stdout or a file instead of (or in addition to) the report sink.
pub trait OutputPresenter {
    /// Presents the serialized payload
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
