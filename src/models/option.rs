use serde::{Deserialize, Serialize};

use super::Category;

/// One selectable booking choice mined from an assistant response.
///
/// Only the fields belonging to `category` are populated; the generic
/// fallback option carries `details` instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidateOption {
    pub category: Category,
    pub name: String,
    pub destination: String,
    pub price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl CandidateOption {
    pub fn new(category: Category, name: String, destination: String, price: u32) -> Self {
        Self {
            category,
            name,
            destination,
            price,
            departure: None,
            arrival: None,
            date: None,
            rating: None,
            duration: None,
            processing: None,
            details: None,
        }
    }
}
