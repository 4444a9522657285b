use std::num::ParseIntError;
use std::str::FromStr;

use error_stack::ResultExt;
use kernel::prelude::entity::{RentalLimitations, DEFAULT_ADULT_AGE, DEFAULT_MAX_MOVIES};
use kernel::KernelError;

use crate::env;
use crate::error::{ConvertError, DriverError};

static RENTAL_MAX_MOVIES: &str = "RENTAL_MAX_MOVIES";
static RENTAL_ADULT_AGE: &str = "RENTAL_ADULT_AGE";

pub struct RentalConfig;

impl RentalConfig {
    /// Reads rental limits from the environment (or `.env`), falling back to
    /// the defaults for unset keys.
    pub fn from_env() -> error_stack::Result<RentalLimitations, KernelError> {
        let max_movies = env_or(RENTAL_MAX_MOVIES, DEFAULT_MAX_MOVIES)
            .convert_error()
            .attach_printable_lazy(|| format!("Invalid {RENTAL_MAX_MOVIES}"))?;
        let adult_age = env_or(RENTAL_ADULT_AGE, DEFAULT_ADULT_AGE)
            .convert_error()
            .attach_printable_lazy(|| format!("Invalid {RENTAL_ADULT_AGE}"))?;
        tracing::debug!(max_movies, adult_age, "loaded rental limitations");
        Ok(RentalLimitations::new(max_movies, adult_age))
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T, DriverError>
where
    T: FromStr<Err = ParseIntError>,
{
    match env(key)? {
        Some(value) => Ok(value.trim().parse()?),
        None => Ok(default),
    }
}

#[cfg(test)]
mod test {
    use crate::error::DriverError;

    use super::env_or;

    #[test]
    fn unset_key_falls_back() {
        let value = env_or("DRIVER_TEST_UNSET_LIMIT", 4usize).unwrap();
        assert_eq!(value, 4);
    }

    #[test]
    fn reads_value() {
        std::env::set_var("DRIVER_TEST_ADULT_AGE", " 21 ");
        let value = env_or("DRIVER_TEST_ADULT_AGE", 18i32).unwrap();
        assert_eq!(value, 21);
    }

    #[test]
    fn rejects_malformed_value() {
        std::env::set_var("DRIVER_TEST_MAX_MOVIES", "four");
        let result = env_or("DRIVER_TEST_MAX_MOVIES", 4usize);
        assert!(matches!(result, Err(DriverError::Parse(_))));
    }
}
