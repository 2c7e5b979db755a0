//! Incremental calculator.
//!
//! The engine in [`calculator`] evaluates a display buffer while it is
//! being typed: once a second operator arrives, the pending `a op b` is
//! reduced to its result and typing continues from there. [`session`] holds
//! the state a front end keeps between key presses.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod frontend;
pub mod input;
pub mod logging;
pub mod session;
