use kernel::prelude::entity::{DestructRental, Rental};
use uuid::Uuid;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RentalDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub movie_ids: Vec<Uuid>,
    pub closed: bool,
}

impl From<Rental> for RentalDto {
    fn from(value: Rental) -> Self {
        let DestructRental {
            id,
            user_id,
            movie_ids,
            closed,
        } = value.into_destruct();
        Self {
            id: id.into(),
            user_id: user_id.into(),
            movie_ids: movie_ids.into_iter().map(Uuid::from).collect(),
            closed: closed.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRentalDto {
    pub user_id: Uuid,
    pub movie_ids: Vec<Uuid>,
}

pub struct GetRentalDto {
    pub id: Uuid,
}

pub struct GetRentalsFromUserIdDto {
    pub user_id: Uuid,
}
