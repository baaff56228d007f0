pub mod auth;
pub mod booking;
pub mod envelope;
pub mod profile;
pub mod venue;
