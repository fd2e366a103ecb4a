use chrono::{NaiveDateTime, Utc};
use rusqlite::{params, Connection};

use crate::models::{Booking, BookingStatus, CandidateOption, Category};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const BOOKING_COLUMNS: &str = "id, category, option_json, traveler_name, traveler_email, \
     travelers, total_price, status, notes, created_at, updated_at";

// ── Bookings ──

pub fn create_booking(conn: &Connection, booking: &Booking) -> anyhow::Result<()> {
    let option_json = serde_json::to_string(&booking.option)?;
    let created_at = booking.created_at.format(TIMESTAMP_FORMAT).to_string();
    let updated_at = booking.updated_at.format(TIMESTAMP_FORMAT).to_string();

    conn.execute(
        "INSERT INTO bookings (id, category, option_json, traveler_name, traveler_email, travelers, total_price, status, notes, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            booking.id,
            booking.category.as_str(),
            option_json,
            booking.traveler_name,
            booking.traveler_email,
            booking.travelers,
            booking.total_price as i64,
            booking.status.as_str(),
            booking.notes,
            created_at,
            updated_at,
        ],
    )?;
    Ok(())
}

pub fn booking_exists(conn: &Connection, id: &str) -> anyhow::Result<bool> {
    let exists: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM bookings WHERE id = ?1",
        params![id],
        |row| row.get(0),
    )?;
    Ok(exists)
}

pub fn get_booking_by_id(conn: &Connection, id: &str) -> anyhow::Result<Option<Booking>> {
    let result = conn.query_row(
        &format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = ?1"),
        params![id],
        |row| Ok(parse_booking_row(row)),
    );

    match result {
        Ok(booking) => Ok(Some(booking?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn get_all_bookings(
    conn: &Connection,
    status_filter: Option<&BookingStatus>,
    limit: i64,
) -> anyhow::Result<Vec<Booking>> {
    let (sql, params_vec): (String, Vec<Box<dyn rusqlite::types::ToSql>>) = match status_filter {
        Some(status) => (
            format!(
                "SELECT {BOOKING_COLUMNS} FROM bookings WHERE status = ?1 \
                 ORDER BY created_at DESC, rowid DESC LIMIT ?2"
            ),
            vec![
                Box::new(status.as_str()) as Box<dyn rusqlite::types::ToSql>,
                Box::new(limit),
            ],
        ),
        None => (
            format!(
                "SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY created_at DESC, rowid DESC LIMIT ?1"
            ),
            vec![Box::new(limit) as Box<dyn rusqlite::types::ToSql>],
        ),
    };

    let mut stmt = conn.prepare(&sql)?;
    let params_refs: Vec<&dyn rusqlite::types::ToSql> =
        params_vec.iter().map(|p| p.as_ref()).collect();
    let rows = stmt.query_map(params_refs.as_slice(), |row| Ok(parse_booking_row(row)))?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row??);
    }
    Ok(bookings)
}

pub fn update_booking_status(
    conn: &Connection,
    id: &str,
    status: &BookingStatus,
) -> anyhow::Result<bool> {
    let now = Utc::now().naive_utc().format(TIMESTAMP_FORMAT).to_string();
    let count = conn.execute(
        "UPDATE bookings SET status = ?1, updated_at = ?2 WHERE id = ?3",
        params![status.as_str(), now, id],
    )?;
    Ok(count > 0)
}

fn parse_booking_row(row: &rusqlite::Row) -> anyhow::Result<Booking> {
    let id: String = row.get(0)?;
    let category_str: String = row.get(1)?;
    let option_json: String = row.get(2)?;
    let traveler_name: String = row.get(3)?;
    let traveler_email: String = row.get(4)?;
    let travelers: u32 = row.get(5)?;
    let total_price: i64 = row.get(6)?;
    let status_str: String = row.get(7)?;
    let notes: Option<String> = row.get(8)?;
    let created_at_str: String = row.get(9)?;
    let updated_at_str: String = row.get(10)?;

    let category = Category::parse(&category_str)
        .ok_or_else(|| anyhow::anyhow!("unknown category in booking {id}: {category_str}"))?;
    let status = BookingStatus::parse(&status_str)
        .ok_or_else(|| anyhow::anyhow!("unknown status in booking {id}: {status_str}"))?;
    let option: CandidateOption = serde_json::from_str(&option_json)?;

    let created_at = NaiveDateTime::parse_from_str(&created_at_str, TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| Utc::now().naive_utc());
    let updated_at = NaiveDateTime::parse_from_str(&updated_at_str, TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| Utc::now().naive_utc());

    Ok(Booking {
        id,
        category,
        option,
        traveler_name,
        traveler_email,
        travelers,
        total_price: total_price.max(0) as u64,
        status,
        notes,
        created_at,
        updated_at,
    })
}
