use derive_more::{Deref, DerefMut};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediumError {
    #[error("medium io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("medium unavailable: {0}")]
    Unavailable(String),
    #[error("medium operation failed: {0}")]
    OperationFailed(String),
}

#[derive(Deref, DerefMut)]
#[deref(forward)]
#[deref_mut(forward)]
pub struct MediumBox(Box<dyn Medium>);

impl MediumBox {
    pub fn new(medium: impl Medium + 'static) -> Self {
        Self(Box::new(medium))
    }
}

/// A raw key-value medium: plain text stored under string keys. Media are
/// allowed to fail on any operation; callers that need failure tolerance go
/// through the persistence adapter instead of using a medium directly.
pub trait Medium: Send + Sync {
    /// Return the text last written under `key`, or `None` if the key was
    /// never written.
    fn read(&self, key: &str) -> Result<Option<String>, MediumError>;

    /// Persist `text` under `key`, replacing any previous value.
    fn write(&self, key: &str, text: &str) -> Result<(), MediumError>;
}
