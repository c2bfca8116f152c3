pub mod booking;
pub mod customer;
pub mod movie;
pub mod showtime;
