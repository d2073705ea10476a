//! Data models for the Freshservice API.
//!
//! This module contains the ticket model, the status and priority code
//! tables, and the JSON envelopes the API wraps them in.

mod common;
mod ticket;

pub use common::*;
pub use ticket::*;
