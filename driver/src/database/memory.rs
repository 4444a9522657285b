use std::collections::HashMap;
use std::sync::Arc;

use error_stack::Report;
use tokio::sync::RwLock;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::prelude::entity::{Movie, MovieId, Rental, User, UserId};
use kernel::KernelError;

pub use self::{movie::*, rental::*, user::*};

mod movie;
mod rental;
mod user;

#[derive(Debug, Clone, Default)]
pub(in crate::database) struct Store {
    users: HashMap<UserId, User>,
    movies: HashMap<MovieId, Movie>,
    rentals: Vec<Rental>,
}

#[derive(Debug, Default)]
struct Shared {
    revision: u64,
    store: Store,
}

/// Process-local database. Transactions work on a snapshot and publish it
/// on commit.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    shared: Arc<RwLock<Shared>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_user(&self, user: User) {
        let mut shared = self.shared.write().await;
        tracing::debug!(user_id = ?user.id(), "seed user");
        shared.store.users.insert(user.id().clone(), user);
        shared.revision += 1;
    }

    pub async fn insert_movie(&self, movie: Movie) {
        let mut shared = self.shared.write().await;
        tracing::debug!(movie_id = ?movie.id(), "seed movie");
        shared.store.movies.insert(movie.id().clone(), movie);
        shared.revision += 1;
    }

    pub async fn insert_rental(&self, rental: Rental) {
        let mut shared = self.shared.write().await;
        tracing::debug!(rental_id = ?rental.id(), "seed rental");
        shared.store.rentals.push(rental);
        shared.revision += 1;
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryTransaction;
    async fn transact(&self) -> error_stack::Result<InMemoryTransaction, KernelError> {
        let shared = self.shared.read().await;
        Ok(InMemoryTransaction {
            shared: Arc::clone(&self.shared),
            revision: shared.revision,
            store: shared.store.clone(),
            dirty: false,
        })
    }
}

pub struct InMemoryTransaction {
    shared: Arc<RwLock<Shared>>,
    revision: u64,
    store: Store,
    dirty: bool,
}

impl InMemoryTransaction {
    pub(in crate::database) fn store(&self) -> &Store {
        &self.store
    }

    pub(in crate::database) fn store_mut(&mut self) -> &mut Store {
        self.dirty = true;
        &mut self.store
    }
}

#[async_trait::async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        if !self.dirty {
            return Ok(());
        }
        let mut shared = self.shared.write().await;
        if shared.revision != self.revision {
            return Err(Report::new(KernelError::Concurrency).attach_printable(format!(
                "snapshot revision {}, current revision {}",
                self.revision, shared.revision
            )));
        }
        shared.store = self.store;
        shared.revision += 1;
        tracing::debug!(revision = shared.revision, "commit");
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        tracing::debug!(revision = self.revision, dirty = self.dirty, "roll back");
        Ok(())
    }
}
