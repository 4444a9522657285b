mod adults_only;
mod id;

pub use self::{adults_only::*, id::*};
use crate::entity::RentalId;
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Movie {
    id: MovieId,
    rental_id: Option<RentalId>,
    adults_only: AdultsOnly,
}

impl Movie {
    pub fn new(id: MovieId, rental_id: Option<RentalId>, adults_only: AdultsOnly) -> Self {
        Self {
            id,
            rental_id,
            adults_only,
        }
    }

    pub fn is_available(&self) -> bool {
        self.rental_id.is_none()
    }
}
