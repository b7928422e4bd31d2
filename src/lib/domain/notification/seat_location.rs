//! Seat location

use std::fmt;

use thiserror::Error;

/// An error that can occur when creating a seat location
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeatLocationError {
    /// The row is empty
    #[error("row is empty")]
    EmptyRow,

    /// The seat is empty
    #[error("seat is empty")]
    EmptySeat,
}

/// A seat, identified by its row and its number within that row.
///
/// Both parts are kept as the caller supplied them (trimmed), so venues that
/// label rows with letters work the same as numbered ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeatLocation {
    row: String,
    seat: String,
}

impl SeatLocation {
    /// Create a new seat location
    pub fn new(row: &str, seat: &str) -> Result<Self, SeatLocationError> {
        let row = row.trim();
        let seat = seat.trim();

        if row.is_empty() {
            return Err(SeatLocationError::EmptyRow);
        }

        if seat.is_empty() {
            return Err(SeatLocationError::EmptySeat);
        }

        Ok(Self {
            row: row.to_string(),
            seat: seat.to_string(),
        })
    }

    /// The row
    pub fn row(&self) -> &str {
        &self.row
    }

    /// The seat number within the row
    pub fn seat(&self) -> &str {
        &self.seat
    }
}

impl fmt::Display for SeatLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, seat {}", self.row, self.seat)
    }
}
