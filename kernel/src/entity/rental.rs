mod closed;
mod id;
mod limitations;

pub use self::{closed::*, id::*, limitations::*};
use crate::entity::{MovieId, UserId};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Rental {
    id: RentalId,
    user_id: UserId,
    movie_ids: Vec<MovieId>,
    closed: RentalClosed,
}

impl Rental {
    pub fn new(
        id: RentalId,
        user_id: UserId,
        movie_ids: Vec<MovieId>,
        closed: RentalClosed,
    ) -> Self {
        Self {
            id,
            user_id,
            movie_ids,
            closed,
        }
    }

    pub fn is_open(&self) -> bool {
        !*self.closed.as_ref()
    }
}
