pub mod booking;
pub mod category;
pub mod option;

pub use booking::{Booking, BookingStatus, NewBooking};
pub use category::Category;
pub use option::CandidateOption;
