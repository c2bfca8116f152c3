use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MovieForm {
    pub title: String,
    pub genre: String,
    pub duration: i32,
    pub rating: f64,
}

#[derive(Debug, Deserialize)]
pub struct ShowtimeForm {
    pub show_date: String,
    pub show_time: String,
    pub available_seats: i32,
}

#[derive(Debug, Deserialize)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub seats_booked: i32,
}

/// Result of a booking attempt, carried across the post-booking redirect as a
/// query flag so the movie list can show what happened.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BookingOutcome {
    Confirmed,
    SoldOut,
    UnknownShowtime,
}

impl BookingOutcome {
    pub fn as_flag(self) -> &'static str {
        match self {
            BookingOutcome::Confirmed => "confirmed",
            BookingOutcome::SoldOut => "sold_out",
            BookingOutcome::UnknownShowtime => "unknown_showtime",
        }
    }

    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "confirmed" => Some(BookingOutcome::Confirmed),
            "sold_out" => Some(BookingOutcome::SoldOut),
            "unknown_showtime" => Some(BookingOutcome::UnknownShowtime),
            _ => None,
        }
    }
}
