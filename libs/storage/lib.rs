mod core {
    pub(crate) mod adapter;
    pub(crate) mod medium;
    pub(crate) mod medium_config;
    pub(crate) mod store;
}

pub use self::core::{
    adapter::PersistenceAdapter,
    medium::{Medium, MediumBox, MediumError},
    medium_config::MediumConfig,
    store::{CollectionStore, Record, SubscriptionId},
};

pub mod medium {
    pub mod file;
    pub mod in_memory;
}

pub mod test_utilities;

#[derive(Clone, Debug)]
pub enum BuiltinMediumType {
    File,
    InMemory,
}

impl std::str::FromStr for BuiltinMediumType {
    type Err = eyre::Error;

    fn from_str(value: &str) -> eyre::Result<Self> {
        match value {
            "file" => Ok(Self::File),
            "in_memory" => Ok(Self::InMemory),
            other => Err(eyre::eyre!("unknown medium type '{other}'")),
        }
    }
}
