pub mod booking;
pub mod contact;
pub mod room;
pub mod user;
