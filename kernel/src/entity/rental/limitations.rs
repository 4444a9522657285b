use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_MOVIES: usize = 4;
pub const DEFAULT_ADULT_AGE: i32 = 18;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct RentalLimitations {
    max_movies: usize,
    adult_age: i32,
}

impl RentalLimitations {
    pub fn new(max_movies: usize, adult_age: i32) -> Self {
        Self {
            max_movies,
            adult_age,
        }
    }

    /// Upper bound on movies referenced by a single rental.
    pub fn max_movies(&self) -> usize {
        self.max_movies
    }

    /// Minimum age in completed years for adults-only movies.
    pub fn adult_age(&self) -> i32 {
        self.adult_age
    }
}

impl Default for RentalLimitations {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MOVIES, DEFAULT_ADULT_AGE)
    }
}
