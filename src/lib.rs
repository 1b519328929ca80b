//! raven: keyboard-driven terminal navigator for tickets, alerts and automations.

pub mod catalog;
pub mod config;
pub mod tui;
