//! Single test binary entry point.
//!
//! Consolidates all tests into a single binary following matklad's best
//! practices, reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - unit: single-component tests against the canvas API
//! - integration: full input-event workflow tests

mod helpers;
mod integration;
mod unit;
