use std::path::PathBuf;

use serde_derive::Deserialize;

use crate::{Medium, MediumBox, MediumConfig, MediumError};

/// Durable medium storing each key as a json file inside a data directory.
pub struct FileMedium {
    root: PathBuf,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileMediumConfig {
    /// path of the data directory (default to ~/.local/share/tally/data)
    file_medium_path: Option<String>,
}

impl FileMediumConfig {
    pub fn get_file_medium_path(&self) -> eyre::Result<String> {
        let path_raw = self
            .file_medium_path
            .clone()
            .unwrap_or("~/.local/share/tally/data".to_owned());

        Ok(shellexpand::full(&path_raw)?.into_owned())
    }
}

impl MediumConfig for FileMediumConfig {
    type Medium = FileMedium;

    fn to_medium(self) -> eyre::Result<MediumBox> {
        let path = self.get_file_medium_path()?;
        Ok(MediumBox::new(FileMedium::new(path)))
    }
}

impl FileMedium {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileMedium { root: root.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        let mut path = self.root.join(key);
        path.set_extension("json");
        path
    }
}

impl Medium for FileMedium {
    fn read(&self, key: &str) -> Result<Option<String>, MediumError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(path)?;
        Ok(Some(contents))
    }

    fn write(&self, key: &str, text: &str) -> Result<(), MediumError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root)?;
        }

        std::fs::write(self.key_path(key), text.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_of_unwritten_key_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let medium = FileMedium::new(dir.path());

        assert!(medium.read("activities").unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let medium = FileMedium::new(dir.path());

        medium.write("activities", r#"[{"id":"a1"}]"#).unwrap();
        assert_eq!(
            medium.read("activities").unwrap(),
            Some(r#"[{"id":"a1"}]"#.to_owned())
        );
        assert!(dir.path().join("activities.json").exists());
    }

    #[test]
    fn write_creates_missing_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        let medium = FileMedium::new(dir.path().join("nested/data"));

        medium.write("logs", "[]").unwrap();
        assert_eq!(medium.read("logs").unwrap(), Some("[]".to_owned()));
    }

    #[test]
    fn keys_map_to_distinct_files() {
        let dir = tempfile::tempdir().unwrap();
        let medium = FileMedium::new(dir.path());

        medium.write("activities", "[1]").unwrap();
        medium.write("logs", "[2]").unwrap();

        assert_eq!(medium.read("activities").unwrap(), Some("[1]".to_owned()));
        assert_eq!(medium.read("logs").unwrap(), Some("[2]".to_owned()));
    }
}
