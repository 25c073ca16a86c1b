//! # Workflows Module
//!
//! High-level entry points that resolve a complete calculation request.
//!
//! ## Overview
//!
//! A workflow resolves the wavefunction descriptor exactly once and hands it to
//! every builder, so the ground-state calculation and each response calculation
//! agree on the method. A request either resolves completely or fails with the
//! first fatal [`crate::engine::error::ResolveError`]; no partial specification is
//! returned.
//!
//! - **Resolution Workflow** ([`resolve`]) - Ground-state calculation plus one
//!   linear-response calculation per requested frequency.

pub mod resolve;
