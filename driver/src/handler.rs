use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::limitation::DependOnRentalLimitations;
use kernel::interface::query::{DependOnMovieQuery, DependOnRentalQuery, DependOnUserQuery};
use kernel::interface::update::DependOnRentalModifier;
use kernel::prelude::entity::RentalLimitations;
use kernel::KernelError;

use crate::clock::SystemClock;
use crate::config::RentalConfig;
use crate::database::{
    InMemoryDatabase, InMemoryMovieRepository, InMemoryRentalRepository, InMemoryUserRepository,
};

/// Wires the in-memory repositories, a clock and the rental limits together.
pub struct Handler<C: Clock = SystemClock> {
    database: InMemoryDatabase,
    clock: C,
    limitations: RentalLimitations,
}

impl Handler {
    pub fn init() -> error_stack::Result<Self, KernelError> {
        let limitations = RentalConfig::from_env()?;
        Ok(Self::new(InMemoryDatabase::new(), SystemClock, limitations))
    }
}

impl<C: Clock> Handler<C> {
    pub fn new(database: InMemoryDatabase, clock: C, limitations: RentalLimitations) -> Self {
        Self {
            database,
            clock,
            limitations,
        }
    }

    pub fn database(&self) -> &InMemoryDatabase {
        &self.database
    }
}

impl<C: Clock> DependOnDatabaseConnection for Handler<C> {
    type DatabaseConnection = InMemoryDatabase;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        &self.database
    }
}

impl<C: Clock> DependOnUserQuery for Handler<C> {
    type UserQuery = InMemoryUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &InMemoryUserRepository
    }
}

impl<C: Clock> DependOnMovieQuery for Handler<C> {
    type MovieQuery = InMemoryMovieRepository;
    fn movie_query(&self) -> &Self::MovieQuery {
        &InMemoryMovieRepository
    }
}

impl<C: Clock> DependOnRentalQuery for Handler<C> {
    type RentalQuery = InMemoryRentalRepository;
    fn rental_query(&self) -> &Self::RentalQuery {
        &InMemoryRentalRepository
    }
}

impl<C: Clock> DependOnRentalModifier for Handler<C> {
    type RentalModifier = InMemoryRentalRepository;
    fn rental_modifier(&self) -> &Self::RentalModifier {
        &InMemoryRentalRepository
    }
}

impl<C: Clock> DependOnClock for Handler<C> {
    type Clock = C;
    fn clock(&self) -> &Self::Clock {
        &self.clock
    }
}

impl<C: Clock> DependOnRentalLimitations for Handler<C> {
    fn rental_limitations(&self) -> &RentalLimitations {
        &self.limitations
    }
}
