//! Shared Dioxus components for the bike rental prediction form.
//!
//! This crate provides:
//! - `browser`: blocking alerts and service settings from the browser
//! - `state`: reactive AppState with Dioxus Signals, one per workflow
//! - `components`: the PredictionForm and its sections

pub mod browser;
pub mod components;
pub mod state;
