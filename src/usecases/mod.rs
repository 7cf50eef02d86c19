//! Application use cases. Orchestrate domain logic via ports.

pub mod booking_service;

pub use booking_service::{BookingService, SlotOption};
