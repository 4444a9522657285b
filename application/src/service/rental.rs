use error_stack::Report;
use uuid::Uuid;

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::limitation::DependOnRentalLimitations;
use kernel::interface::query::{
    DependOnMovieQuery, DependOnRentalQuery, DependOnUserQuery, MovieQuery, RentalQuery,
    UserQuery,
};
use kernel::interface::update::{DependOnRentalModifier, RentalModifier};
use kernel::prelude::entity::{MovieId, Rental, RentalClosed, RentalId, UserId};
use kernel::KernelError;

use crate::transfer::{CreateRentalDto, GetRentalDto, GetRentalsFromUserIdDto, RentalDto};

#[async_trait::async_trait]
pub trait GetRentalService: 'static + Sync + Send + DependOnRentalQuery {
    async fn get_rental(
        &self,
        dto: GetRentalDto,
    ) -> error_stack::Result<Option<RentalDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = RentalId::new(dto.id);
        let rental = self.rental_query().find_by_id(&mut connection, &id).await?;

        Ok(rental.map(RentalDto::from))
    }

    async fn get_rentals_from_user(
        &self,
        dto: GetRentalsFromUserIdDto,
    ) -> error_stack::Result<Vec<RentalDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let user_id = UserId::new(dto.user_id);
        let rentals = self
            .rental_query()
            .find_by_user_id(&mut connection, &user_id)
            .await?;

        Ok(rentals.into_iter().map(RentalDto::from).collect())
    }
}

impl<T> GetRentalService for T where T: DependOnRentalQuery {}

#[async_trait::async_trait]
pub trait CreateRentalService:
    'static
    + Sync
    + Send
    + DependOnUserQuery
    + DependOnRentalQuery
    + DependOnMovieQuery
    + DependOnRentalModifier
    + DependOnClock
    + DependOnRentalLimitations
{
    /// Validates the request against the rental rules and stores a new open
    /// rental.
    ///
    /// Checks run in a fixed order and the first failing one aborts the call
    /// before anything is written:
    /// user exists, user has no open rental, movie count is within limits,
    /// then for each movie in request order: it exists, it is not already
    /// rented, and the user is old enough if it is adults-only.
    async fn create_rental(
        &self,
        dto: CreateRentalDto,
    ) -> error_stack::Result<RentalDto, KernelError> {
        tracing::debug!(user_id = %dto.user_id, movies = dto.movie_ids.len(), "create rental");
        let mut connection = self.database_connection().transact().await?;

        let user_id = UserId::new(dto.user_id);
        let user = self
            .user_query()
            .find_by_id(&mut connection, &user_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(user_id = %dto.user_id, "rental rejected: unknown user");
                Report::new(KernelError::UserNotFound)
                    .attach_printable(format!("user_id: {}", dto.user_id))
            })?;

        let rentals = self
            .rental_query()
            .find_by_user_id(&mut connection, &user_id)
            .await?;
        if let Some(pending) = rentals.iter().find(|rental| rental.is_open()) {
            let pending_id: Uuid = pending.id().clone().into();
            tracing::warn!(user_id = %dto.user_id, %pending_id, "rental rejected: pending rental");
            return Err(Report::new(KernelError::PendingRental)
                .attach_printable(format!("pending rental: {pending_id}")));
        }

        let limitations = self.rental_limitations();
        let requested = dto.movie_ids.len();
        if requested > limitations.max_movies() {
            tracing::warn!(user_id = %dto.user_id, requested, "rental rejected: too many movies");
            return Err(Report::new(KernelError::MaxMoviesExceeded).attach_printable(format!(
                "requested {requested}, limit {}",
                limitations.max_movies()
            )));
        }
        if requested == 0 {
            tracing::warn!(user_id = %dto.user_id, "rental rejected: no movies");
            return Err(Report::new(KernelError::NoMoviesSelected));
        }

        let age = user.birth_date().age_on(self.clock().today());
        let movie_ids = dto
            .movie_ids
            .iter()
            .copied()
            .map(MovieId::new)
            .collect::<Vec<_>>();
        for movie_id in &movie_ids {
            let raw_id: Uuid = movie_id.clone().into();
            let movie = self
                .movie_query()
                .find_by_id(&mut connection, movie_id)
                .await?
                .ok_or_else(|| {
                    tracing::warn!(movie_id = %raw_id, "rental rejected: unknown movie");
                    Report::new(KernelError::MovieNotFound)
                        .attach_printable(format!("movie_id: {raw_id}"))
                })?;

            if !movie.is_available() {
                tracing::warn!(movie_id = %raw_id, "rental rejected: movie already rented");
                return Err(Report::new(KernelError::MovieAlreadyInRental)
                    .attach_printable(format!("movie_id: {raw_id}")));
            }

            if *movie.adults_only().as_ref() && age < limitations.adult_age() {
                tracing::warn!(
                    user_id = %dto.user_id,
                    movie_id = %raw_id,
                    age,
                    "rental rejected: adults-only movie"
                );
                return Err(Report::new(KernelError::InsufficientAge).attach_printable(format!(
                    "age {age}, required {}",
                    limitations.adult_age()
                )));
            }
        }

        let rental = Rental::new(
            RentalId::new(Uuid::new_v4()),
            user_id,
            movie_ids,
            RentalClosed::new(false),
        );
        self.rental_modifier()
            .create(&mut connection, &rental)
            .await?;
        connection.commit().await?;

        let rental = RentalDto::from(rental);
        tracing::debug!(rental_id = %rental.id, user_id = %rental.user_id, "rental created");
        Ok(rental)
    }
}

impl<T> CreateRentalService for T where
    T: DependOnUserQuery
        + DependOnRentalQuery
        + DependOnMovieQuery
        + DependOnRentalModifier
        + DependOnClock
        + DependOnRentalLimitations
{
}
