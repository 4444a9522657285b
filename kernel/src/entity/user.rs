mod birth_date;
mod id;

pub use self::{birth_date::*, id::*};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Destructure, References)]
pub struct User {
    id: UserId,
    birth_date: BirthDate,
}

impl User {
    pub fn new(id: UserId, birth_date: BirthDate) -> Self {
        Self { id, birth_date }
    }
}
