pub mod booking;
pub mod contact;
pub mod id;
pub mod room;
pub mod user;
