use serde::{Deserialize, Serialize};
use time::Date;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct BirthDate(Date);

impl BirthDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }

    /// Age in completed years on `today`.
    ///
    /// A year only counts once the birthday itself has been reached, so a
    /// February 29 birthday is reached on March 1 in common years.
    /// Birth dates in the future give a negative age.
    pub fn age_on(&self, today: Date) -> i32 {
        let born = self.0;
        let age = today.year() - born.year();
        let birthday = (u8::from(born.month()), born.day());
        if (u8::from(today.month()), today.day()) < birthday {
            age - 1
        } else {
            age
        }
    }
}
