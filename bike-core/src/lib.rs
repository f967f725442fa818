//! Core types and prediction service client for the bike rental predictor.
//!
//! This crate provides:
//! - `form`: the prediction input form state, change handling and validation
//! - `season`: season to month derivation
//! - `choices`: option tables for the select fields
//! - `history` / `actual`: history list with single selection, actual-value input
//! - `api`: wire types, `ServiceConfig` and the `PredictionService` seam
//! - `workflow`: the predict, history and actual-update flows

pub mod actual;
pub mod api;
pub mod choices;
pub mod error;
pub mod form;
pub mod history;
pub mod notice;
pub mod opaque;
pub mod season;
pub mod workflow;
