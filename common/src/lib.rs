//! Shared types and client-side state for the learning resource catalogue.
//!
//! Nothing in this crate touches the browser: the frontend drives these state
//! machines from Yew messages and timers, and the tests drive them with
//! synthetic clocks.

pub mod errors;
pub mod model;
pub mod pacing;
pub mod requests;
pub mod views;
