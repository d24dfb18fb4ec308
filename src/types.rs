use crate::error::BookingError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize};
use validator::Validate;

lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Booking {
    pub date: String,
    pub time: String,
    pub guests: u32,
    pub name: String,
    #[validate(regex(path = *EMAIL_PATTERN))]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Booking as submitted by a client. Every field may be absent so that an
/// incomplete submission is reported as missing fields instead of a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_guests")]
    pub guests: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl BookingRequest {
    /// Checks that all required fields are present, then the email format.
    pub fn into_booking(self) -> Result<Booking, BookingError> {
        let (Some(date), Some(time), Some(guests), Some(name), Some(email)) = (
            non_empty(self.date),
            non_empty(self.time),
            self.guests.filter(|guests| *guests > 0),
            non_empty(self.name),
            non_empty(self.email),
        ) else {
            return Err(BookingError::MissingFields);
        };

        let booking = Booking {
            date,
            time,
            guests,
            name,
            email,
            phone: self.phone,
        };
        booking
            .validate()
            .map_err(|_| BookingError::InvalidEmail)?;
        Ok(booking)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GuestCount {
    Number(u32),
    Text(String),
}

// Browser forms submit number inputs as strings.
fn deserialize_guests<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<GuestCount>::deserialize(deserializer)? {
        None => Ok(None),
        Some(GuestCount::Number(guests)) => Ok(Some(guests)),
        Some(GuestCount::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(GuestCount::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid guest count: {text}"))),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub times: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub message: String,
    pub booking: Booking,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
