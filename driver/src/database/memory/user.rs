use kernel::interface::query::UserQuery;
use kernel::prelude::entity::{User, UserId};
use kernel::KernelError;

use crate::database::InMemoryTransaction;

pub struct InMemoryUserRepository;

#[async_trait::async_trait]
impl UserQuery for InMemoryUserRepository {
    type Transaction = InMemoryTransaction;
    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        Ok(con.store().users.get(id).cloned())
    }
}
