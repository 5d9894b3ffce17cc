use crate::errors::ScatResult;

/// Durable client-side checkpoint for wizard progress.
///
/// A string-keyed store of opaque JSON payloads, the same contract the browser's
/// local storage offered. Writes overwrite unconditionally; the last writer wins.
pub trait IProgressStore: Send + Sync {
    fn get(&self, key: &str) -> ScatResult<Option<String>>;
    fn put(&self, key: &str, payload: &str) -> ScatResult<()>;
    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> ScatResult<()>;
}
