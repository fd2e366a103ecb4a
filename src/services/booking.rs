use chrono::Utc;
use rand::Rng;
use rusqlite::Connection;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Booking, BookingStatus, NewBooking};

const REFERENCE_PREFIX: &str = "TVX-";
const REFERENCE_LEN: usize = 9;
const REFERENCE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const MAX_REFERENCE_ATTEMPTS: usize = 5;

/// `TVX-` followed by nine characters from `[A-Z0-9]`.
pub fn generate_reference<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix: String = (0..REFERENCE_LEN)
        .map(|_| REFERENCE_CHARSET[rng.gen_range(0..REFERENCE_CHARSET.len())] as char)
        .collect();
    format!("{REFERENCE_PREFIX}{suffix}")
}

fn validate(request: &NewBooking) -> Result<(), AppError> {
    if request.traveler_name.trim().is_empty() {
        return Err(AppError::Validation("traveler name is required".to_string()));
    }
    let email = request.traveler_email.trim();
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(AppError::Validation(format!("invalid email: {email}")));
    }
    if request.travelers == 0 {
        return Err(AppError::Validation("at least one traveler is required".to_string()));
    }
    if request.option.name.trim().is_empty() {
        return Err(AppError::Validation("selected option has no name".to_string()));
    }
    Ok(())
}

/// Store the selected option verbatim under a fresh reference.
pub fn create_booking<R: Rng + ?Sized>(
    conn: &Connection,
    request: NewBooking,
    rng: &mut R,
) -> Result<Booking, AppError> {
    validate(&request)?;

    let mut id = generate_reference(rng);
    let mut attempts = 1;
    while queries::booking_exists(conn, &id)? {
        if attempts >= MAX_REFERENCE_ATTEMPTS {
            return Err(AppError::Internal(anyhow::anyhow!(
                "could not allocate a unique booking reference"
            )));
        }
        id = generate_reference(rng);
        attempts += 1;
    }

    let now = Utc::now().naive_utc();
    let booking = Booking {
        id,
        category: request.option.category,
        total_price: u64::from(request.option.price) * u64::from(request.travelers),
        option: request.option,
        traveler_name: request.traveler_name.trim().to_string(),
        traveler_email: request.traveler_email.trim().to_string(),
        travelers: request.travelers,
        status: BookingStatus::Confirmed,
        notes: request.notes.filter(|n| !n.trim().is_empty()),
        created_at: now,
        updated_at: now,
    };

    queries::create_booking(conn, &booking)?;

    tracing::info!(
        booking_id = %booking.id,
        category = %booking.category,
        total_price = booking.total_price,
        "booking confirmed"
    );

    Ok(booking)
}

pub fn cancel_booking(conn: &Connection, id: &str) -> Result<(), AppError> {
    if !queries::update_booking_status(conn, id, &BookingStatus::Cancelled)? {
        return Err(AppError::NotFound(format!("booking {id}")));
    }
    tracing::info!(booking_id = id, "booking cancelled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::models::{CandidateOption, Category};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_reference(s: &str) -> bool {
        s.strip_prefix(REFERENCE_PREFIX)
            .map(|rest| {
                rest.len() == REFERENCE_LEN && rest.bytes().all(|b| REFERENCE_CHARSET.contains(&b))
            })
            .unwrap_or(false)
    }

    fn request(travelers: u32) -> NewBooking {
        NewBooking {
            option: CandidateOption::new(
                Category::Flights,
                "Paris to Rome".to_string(),
                "Rome".to_string(),
                320,
            ),
            traveler_name: " Grace Hopper ".to_string(),
            traveler_email: "grace@example.com".to_string(),
            travelers,
            notes: Some("  ".to_string()),
        }
    }

    #[test]
    fn test_reference_format() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let reference = generate_reference(&mut rng);
            assert_eq!(reference.len(), 13);
            assert!(is_reference(&reference), "{reference}");
        }
        assert!(!is_reference("TVX-abc123xyz"));
        assert!(!is_reference("TVX-ABC"));
    }

    #[test]
    fn test_create_booking_totals_and_trims() {
        let conn = db::init_db(":memory:").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let booking = create_booking(&conn, request(3), &mut rng).unwrap();

        assert!(is_reference(&booking.id));
        assert_eq!(booking.total_price, 960);
        assert_eq!(booking.traveler_name, "Grace Hopper");
        assert_eq!(booking.category, Category::Flights);
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert!(booking.notes.is_none());
    }

    #[test]
    fn test_create_booking_rejects_bad_input() {
        let conn = db::init_db(":memory:").unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let err = create_booking(&conn, request(0), &mut rng).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let mut bad_email = request(1);
        bad_email.traveler_email = "grace.example.com".to_string();
        let err = create_booking(&conn, bad_email, &mut rng).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_cancel_unknown_booking() {
        let conn = db::init_db(":memory:").unwrap();
        let err = cancel_booking(&conn, "TVX-000000000").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
