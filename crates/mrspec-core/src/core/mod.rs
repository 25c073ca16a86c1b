//! # Core Module
//!
//! This module provides the building blocks that every resolution step shares:
//! the typed user input, the normalized output records, the lookup tables of
//! recognized tokens, and the traits through which the outside world is queried.
//!
//! ## Architecture
//!
//! - **User Input** ([`input`]) - Immutable typed schema of the hierarchical input with documented defaults
//! - **Specification Records** ([`models`]) - Wavefunction descriptor, operator trees, guesses, solvers and response records
//! - **External Boundaries** ([`io`]) - Checkpoint probing and guess-vector discovery
//! - **Lookup Tables** ([`utils`]) - Closed tables of shorthand functionals and zeta codes
//!
//! ## Key Capabilities
//!
//! - **Schema-checked input**: unknown keys are rejected at deserialization time
//! - **Exhaustive operator handling**: operator presence is a tagged optional, never key membership
//! - **Substitutable collaborators**: filesystem and discovery access go through traits

pub mod input;
pub mod io;
pub mod models;
pub mod utils;
