use std::collections::HashMap;
use std::sync::Mutex;

use serde_derive::Deserialize;

use crate::{Medium, MediumBox, MediumConfig, MediumError};

/// This medium type is used for testing, data is not persisted to disk but
/// only present in memory
#[derive(Default)]
pub struct InMemoryMedium {
    entries: Mutex<HashMap<String, String>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct InMemoryMediumConfig {}

impl MediumConfig for InMemoryMediumConfig {
    type Medium = InMemoryMedium;

    fn to_medium(self) -> eyre::Result<MediumBox> {
        Ok(MediumBox::new(InMemoryMedium::default()))
    }
}

impl Medium for InMemoryMedium {
    fn read(&self, key: &str) -> Result<Option<String>, MediumError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| MediumError::OperationFailed("entry map poisoned".to_owned()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, text: &str) -> Result<(), MediumError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| MediumError::OperationFailed("entry map poisoned".to_owned()))?;
        entries.insert(key.to_owned(), text.to_owned());
        Ok(())
    }
}
