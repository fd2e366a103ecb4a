use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{CandidateOption, Category};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub category: Category,
    pub option: CandidateOption,
    pub traveler_name: String,
    pub traveler_email: String,
    pub travelers: u32,
    pub total_price: u64,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// What the traveler submits after picking a card.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBooking {
    pub option: CandidateOption,
    pub traveler_name: String,
    pub traveler_email: String,
    #[serde(default = "default_travelers")]
    pub travelers: u32,
    pub notes: Option<String>,
}

fn default_travelers() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(BookingStatus::parse("Cancelled"), Some(BookingStatus::Cancelled));
        assert_eq!(BookingStatus::parse(" pending "), Some(BookingStatus::Pending));
        assert_eq!(BookingStatus::parse("bogus"), None);
    }
}
