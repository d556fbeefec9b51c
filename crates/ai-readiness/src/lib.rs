//! AI-Readiness scoring engine.
//!
//! A pure computation library combining Idiosyncratic Readiness (V^R),
//! Systematic Opportunity (H^R), and skills synergy into a composite
//! AI-Readiness score, with a learning-pathway simulator on top. Dataset
//! access is injectable so any front end can drive the engine.

pub mod config;
pub mod datasets;
pub mod error;
pub mod scoring;
pub mod telemetry;
