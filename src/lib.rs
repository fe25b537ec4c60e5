//! Reducer-driven name/email form for the terminal.
//!
//! The form core (`form`) is a pure state machine built on the MVI traits in
//! `mvi`; the terminal shell (`ui`) only translates key events into
//! controller calls and renders the resulting state.

pub mod config;
pub mod form;
pub mod logging;
pub mod mvi;
pub mod ui;
