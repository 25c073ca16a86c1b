//! # Engine Module
//!
//! This module implements the resolution rules that turn a frozen [`UserConfig`]
//! into the normalized records of [`crate::core::models`].
//!
//! ## Overview
//!
//! Every resolver is a function of the user input, the shared wavefunction
//! descriptor and, where artifacts on disk matter, a [`config::ResolveEnvironment`].
//! Inconsistent options are rejected with a [`error::ResolveError`]; missing guess
//! artifacts never are, they select a fallback strategy and raise a
//! [`diagnostics::Diagnostic`] instead.
//!
//! ## Architecture
//!
//! - **Method Resolution** ([`method`]) - Method, relativity, environment and external field classification
//! - **Reaction Field** ([`reaction`]) - Continuum solvent parameters and the Debye screening length
//! - **Operator Graph** ([`operators`]) - Conditional assembly of ground-state and response Fock operators
//! - **Initial Guess** ([`guess`]) - Guess strategy decoding with fallback on missing artifacts
//! - **Solvers** ([`solver`]) - Precision schedules and convergence thresholds
//! - **Occupancies** ([`occupancy`]) - The orbital occupation text grammar
//! - **Properties** ([`properties`]) - Property and plot requests
//! - **Collaborators** ([`config`], [`diagnostics`]) - Artifact probing, discovery and diagnostic reporting
//! - **Error Handling** ([`error`]) - Fatal resolution errors
//!
//! [`UserConfig`]: crate::core::input::UserConfig

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod guess;
pub mod method;
pub mod occupancy;
pub mod operators;
pub mod properties;
pub mod reaction;
pub mod solver;
