use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct RentalClosed(bool);

impl RentalClosed {
    pub fn new(value: impl Into<bool>) -> Self {
        Self(value.into())
    }
}
