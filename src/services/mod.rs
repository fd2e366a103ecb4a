pub mod ai;
pub mod booking;
pub mod extractor;
pub mod search;
