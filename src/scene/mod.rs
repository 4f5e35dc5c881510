//! Settings and the events staged in them.
//!
//! - [`Setting`]: a named location with a fixed member list
//! - [`Event`]: one alternating two-party dialogue inside a setting

mod event;
mod setting;

pub use event::{Event, DEFAULT_TURNS};
pub use setting::Setting;
