use kernel::interface::query::RentalQuery;
use kernel::interface::update::RentalModifier;
use kernel::prelude::entity::{DestructMovie, Movie, Rental, RentalId, UserId};
use kernel::KernelError;

use crate::database::InMemoryTransaction;

pub struct InMemoryRentalRepository;

#[async_trait::async_trait]
impl RentalQuery for InMemoryRentalRepository {
    type Transaction = InMemoryTransaction;
    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        Ok(con
            .store()
            .rentals
            .iter()
            .find(|rental| rental.id() == id)
            .cloned())
    }

    async fn find_by_user_id(
        &self,
        con: &mut InMemoryTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        Ok(con
            .store()
            .rentals
            .iter()
            .filter(|rental| rental.user_id() == user_id)
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl RentalModifier for InMemoryRentalRepository {
    type Transaction = InMemoryTransaction;
    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        let store = con.store_mut();
        for movie_id in rental.movie_ids() {
            if let Some(movie) = store.movies.remove(movie_id) {
                let DestructMovie { id, adults_only, .. } = movie.into_destruct();
                let movie = Movie::new(id, Some(rental.id().clone()), adults_only);
                store.movies.insert(movie_id.clone(), movie);
            }
        }
        store.rentals.push(rental.clone());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::{MovieQuery, RentalQuery};
    use kernel::interface::update::RentalModifier;
    use kernel::prelude::entity::{
        AdultsOnly, Movie, MovieId, Rental, RentalClosed, RentalId, UserId,
    };
    use kernel::KernelError;

    use crate::database::{InMemoryDatabase, InMemoryMovieRepository, InMemoryRentalRepository};

    #[tokio::test]
    async fn create_marks_movies_rented() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let movie_id = MovieId::new(Uuid::new_v4());
        db.insert_movie(Movie::new(movie_id.clone(), None, AdultsOnly::new(false)))
            .await;

        let user_id = UserId::new(Uuid::new_v4());
        let rental_id = RentalId::new(Uuid::new_v4());
        let rental = Rental::new(
            rental_id.clone(),
            user_id.clone(),
            vec![movie_id.clone()],
            RentalClosed::new(false),
        );

        let mut con = db.transact().await?;
        InMemoryRentalRepository.create(&mut con, &rental).await?;
        con.commit().await?;

        let mut con = db.transact().await?;
        let found = InMemoryRentalRepository
            .find_by_id(&mut con, &rental_id)
            .await?;
        assert_eq!(found, Some(rental.clone()));

        let by_user = InMemoryRentalRepository
            .find_by_user_id(&mut con, &user_id)
            .await?;
        assert_eq!(by_user, vec![rental]);

        let movie = InMemoryMovieRepository
            .find_by_id(&mut con, &movie_id)
            .await?
            .expect("movie should exist");
        assert_eq!(movie.rental_id(), &Some(rental_id));
        assert!(!movie.is_available());
        Ok(())
    }

    #[tokio::test]
    async fn find_by_user_id_keeps_insertion_order() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let user_id = UserId::new(Uuid::new_v4());
        let rentals = (0..3)
            .map(|i| {
                Rental::new(
                    RentalId::new(Uuid::new_v4()),
                    user_id.clone(),
                    vec![MovieId::new(Uuid::new_v4())],
                    RentalClosed::new(i < 2),
                )
            })
            .collect::<Vec<_>>();
        for rental in &rentals {
            db.insert_rental(rental.clone()).await;
        }
        db.insert_rental(Rental::new(
            RentalId::new(Uuid::new_v4()),
            UserId::new(Uuid::new_v4()),
            vec![],
            RentalClosed::new(false),
        ))
        .await;

        let mut con = db.transact().await?;
        let found = InMemoryRentalRepository
            .find_by_user_id(&mut con, &user_id)
            .await?;
        assert_eq!(found, rentals);
        Ok(())
    }
}
