pub mod booking;
pub mod contact;
pub mod pms;
pub mod room;
