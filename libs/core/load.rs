use crate::Core;
use tally_storage::{
    medium::{file::FileMediumConfig, in_memory::InMemoryMediumConfig},
    BuiltinMediumType, MediumConfig, PersistenceAdapter,
};

// TODO: make the default_medium_type config option effective, right now the
// frontend always picks the medium.
pub fn load(medium_type: BuiltinMediumType, config_path: &str) -> eyre::Result<Core> {
    match medium_type {
        BuiltinMediumType::File => load_core::<FileMediumConfig>(config_path),
        BuiltinMediumType::InMemory => load_core::<InMemoryMediumConfig>(config_path),
    }
}

pub fn load_core<MC>(config_path: &str) -> eyre::Result<Core>
where
    MC: MediumConfig,
{
    let mut found_config_file = Ok(());
    let config = match tally_config::get_config_from_path::<MC>(config_path) {
        Ok(v) => v,
        Err(e) => {
            found_config_file = Err(e);
            tally_config::get_default_config::<MC>()
        }
    };

    let adapter = PersistenceAdapter::new(config.storage.to_medium()?);

    let mut core = Core::new(adapter);
    core.found_config_file = found_config_file;
    Ok(core)
}
