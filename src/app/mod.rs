//! Application layer: state, reducer, effects, ports and the title rotator.

pub use dyntitle_domain as domain;

pub mod action;
pub mod effect;
pub mod effect_runner;
pub mod message_state;
pub mod ports;
pub mod reducer;
pub mod render_schedule;
pub mod rotator;
pub mod settings;
pub mod state;
pub mod ticker;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
