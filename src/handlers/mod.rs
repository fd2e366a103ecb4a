pub mod bookings;
pub mod extract;
pub mod health;
pub mod search;
