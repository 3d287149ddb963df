use serde::de::DeserializeOwned;
use serde_derive::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(bound = "M: DeserializeOwned")]
pub struct Config<M: DeserializeOwned + Default> {
    /// medium type frontends should use when none is specified on the
    /// command line (default to: file)
    pub default_medium_type: Option<String>,

    /// Rest of the medium config as a typed structure
    #[serde(default)]
    pub storage: M,
}

pub fn get_default_config<M>() -> Config<M>
where
    M: DeserializeOwned + Default,
{
    Config {
        default_medium_type: None,
        storage: M::default(),
    }
}
