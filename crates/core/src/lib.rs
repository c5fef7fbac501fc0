//! # SlotBook Core
//!
//! Domain types and the scheduling engine for SlotBook. Everything in this
//! crate is independent of the HTTP layer and of any particular database.
//!
//! - [`slots::generate`] derives the slot grid for a day from the booked labels
//! - [`projection::project`] overlays a user's pending selection on that grid
//! - [`store::BookingStore`] is the persistence boundary backends implement
//! - [`engine::BookingEngine`] commits and removes bookings through a store

pub mod calendar;
pub mod config;
pub mod engine;
pub mod errors;
pub mod models;
pub mod projection;
pub mod slots;
pub mod store;
