use serde::de::DeserializeOwned;

use super::medium::{Medium, MediumBox};

pub trait MediumConfig: DeserializeOwned + Default {
    type Medium: Medium;

    fn to_medium(self) -> eyre::Result<MediumBox>;
}
