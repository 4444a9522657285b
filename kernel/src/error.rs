use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    Concurrency,
    Timeout,
    Internal,
    UserNotFound,
    MovieNotFound,
    PendingRental,
    MaxMoviesExceeded,
    NoMoviesSelected,
    MovieAlreadyInRental,
    InsufficientAge,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Concurrency => write!(f, "Concurrency error"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
            KernelError::UserNotFound => write!(f, "User not found"),
            KernelError::MovieNotFound => write!(f, "Movie not found"),
            KernelError::PendingRental => write!(f, "User already has a pending rental"),
            KernelError::MaxMoviesExceeded => write!(f, "Maximum number of movies exceeded"),
            KernelError::NoMoviesSelected => write!(f, "At least one movie must be rented"),
            KernelError::MovieAlreadyInRental => write!(f, "Movie is already in rental"),
            KernelError::InsufficientAge => {
                write!(f, "User is not old enough to rent an adults-only movie")
            }
        }
    }
}

impl Context for KernelError {}
