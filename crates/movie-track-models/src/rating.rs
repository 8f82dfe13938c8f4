use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// A star rating given to a watched movie, always within 1..=5.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct PersonalRating(u8);

impl PersonalRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, ModelError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ModelError::RatingOutOfRange(value as i64))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Five-character star bar, filled up to the rating (e.g. `★★★☆☆`)
    pub fn stars(&self) -> String {
        star_bar(self.0)
    }
}

/// Five-star bar with the first `filled` stars filled; `0` gives five empty stars.
pub fn star_bar(filled: u8) -> String {
    (1..=PersonalRating::MAX)
        .map(|i| if i <= filled { '★' } else { '☆' })
        .collect()
}

impl TryFrom<u8> for PersonalRating {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PersonalRating> for u8 {
    fn from(rating: PersonalRating) -> Self {
        rating.0
    }
}

impl fmt::Display for PersonalRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PersonalRating {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| ModelError::InvalidRating(s.trim().to_string()))?;
        u8::try_from(value)
            .map_err(|_| ModelError::RatingOutOfRange(value))
            .and_then(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(PersonalRating::new(0).is_err());
        assert!(PersonalRating::new(6).is_err());
        assert_eq!(PersonalRating::new(1).unwrap().get(), 1);
        assert_eq!(PersonalRating::new(5).unwrap().get(), 5);
    }

    #[test]
    fn test_rating_from_str() {
        assert_eq!("3".parse::<PersonalRating>().unwrap().get(), 3);
        assert_eq!("-2".parse::<PersonalRating>(), Err(ModelError::RatingOutOfRange(-2)));
        assert_eq!("300".parse::<PersonalRating>(), Err(ModelError::RatingOutOfRange(300)));
        assert_eq!(
            "three".parse::<PersonalRating>(),
            Err(ModelError::InvalidRating("three".to_string()))
        );
        assert_eq!(" 4.5 ".parse::<PersonalRating>(), Err(ModelError::InvalidRating("4.5".to_string())));
    }

    #[test]
    fn test_rating_rejects_out_of_range_json() {
        assert!(serde_json::from_str::<PersonalRating>("7").is_err());
        let rating: PersonalRating = serde_json::from_str("4").unwrap();
        assert_eq!(serde_json::to_string(&rating).unwrap(), "4");
    }

    #[test]
    fn test_stars() {
        assert_eq!(PersonalRating::new(3).unwrap().stars(), "★★★☆☆");
        assert_eq!(star_bar(0), "☆☆☆☆☆");
    }
}
