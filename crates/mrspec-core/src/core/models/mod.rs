//! # Core Models Module
//!
//! This module contains the normalized records produced by resolution and handed
//! to the numerical engine.
//!
//! ## Overview
//!
//! Each model is a plain value: built once during a resolution pass, never mutated
//! afterwards. Operator presence is expressed with `Option` fields rather than ad hoc
//! key membership, so every consumer has to handle every operator kind explicitly.
//! The serialized field names and nesting of these records form the wire contract
//! with the downstream solver.
//!
//! ## Key Components
//!
//! - [`wavefunction`] - The shared wavefunction descriptor and its method, relativity and environment classification
//! - [`operators`] - Ground-state and response Fock operator trees
//! - [`guess`] - Initial-guess strategies for orbitals and response vectors
//! - [`solver`] - Iterative solver settings
//! - [`response`] - Linear-response calculations with their three Cartesian components
//! - [`properties`] - Requested properties and plots
//! - [`occupancy`] - User overrides of orbital occupations
//! - [`calculation`] - The top-level specification tree

pub mod calculation;
pub mod guess;
pub mod occupancy;
pub mod operators;
pub mod properties;
pub mod response;
pub mod solver;
pub mod wavefunction;
