//! Symptom Interview
//!
//! An adaptive symptom interview that picks each next question from the
//! answers so far, infers suspected conditions, and ends with a ranked,
//! severity-classified list of diagnostic suggestions.
//!
//! # Features
//!
//! - Built-in question catalog across six body systems
//! - Follow-up rules and synthesized differential/detail questions
//! - Emergency short-circuit on red-flag symptoms or high severity
//! - `SQLite` history of finished assessments with a retention cap
//!
//! # Quick Start
//!
//! ```bash
//! ./symptom-interview interview respiratory --age 34 --gender female
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐  answers   ┌──────────────────┐  next question  ┌─────────┐
//! │ terminal │───────────▶│ InterviewSession │◀───────────────▶│ engine  │
//! │  (main)  │◀───────────│   (validation)   │   pure calls    │ catalog │
//! └──────────┘  questions └────────┬─────────┘                 └─────────┘
//!                                  │ AssessmentRecord
//!                                  ▼
//!                               SQLite
//! ```
//!
//! This crate does not give medical advice; its output is a triage aid.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod location;
pub mod storage;
pub mod traits;
