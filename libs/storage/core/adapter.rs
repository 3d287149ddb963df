use std::sync::Arc;

use super::medium::MediumBox;

/// Best-effort wrapper over a key-value medium. The medium can be missing
/// entirely (e.g. a headless context with no data directory configured) or
/// can fail on any call; neither case ever surfaces an error to the caller.
///
/// Reads collapse every failure path to `None` and writes are dropped on
/// failure, so the collection stores built on top never have to branch on
/// storage outcomes.
#[derive(Clone)]
pub struct PersistenceAdapter {
    medium: Option<Arc<MediumBox>>,
}

impl PersistenceAdapter {
    pub fn new(medium: MediumBox) -> Self {
        Self {
            medium: Some(Arc::new(medium)),
        }
    }

    /// Adapter for contexts without any usable medium: all reads come back
    /// absent and all writes are dropped.
    pub fn detached() -> Self {
        Self { medium: None }
    }

    pub fn read(&self, key: &str) -> Option<String> {
        let medium = self.medium.as_ref()?;

        match medium.read(key) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!("read of key '{key}' failed, treating as absent: {error}");
                None
            }
        }
    }

    pub fn write(&self, key: &str, text: &str) {
        let Some(medium) = self.medium.as_ref() else {
            return;
        };

        if let Err(error) = medium.write(key, text) {
            tracing::warn!("write of key '{key}' dropped: {error}");
        }
    }
}
