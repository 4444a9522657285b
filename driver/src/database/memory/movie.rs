use kernel::interface::query::MovieQuery;
use kernel::prelude::entity::{Movie, MovieId};
use kernel::KernelError;

use crate::database::InMemoryTransaction;

pub struct InMemoryMovieRepository;

#[async_trait::async_trait]
impl MovieQuery for InMemoryMovieRepository {
    type Transaction = InMemoryTransaction;
    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &MovieId,
    ) -> error_stack::Result<Option<Movie>, KernelError> {
        Ok(con.store().movies.get(id).cloned())
    }
}
