/// Administrative booking management
pub mod admin;
/// Booking commits
pub mod bookings;
/// Schedule configuration, week navigation and slot grids
pub mod slots;
