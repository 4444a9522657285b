use crate::entity::RentalLimitations;

pub trait DependOnRentalLimitations: 'static + Sync + Send {
    fn rental_limitations(&self) -> &RentalLimitations;
}
