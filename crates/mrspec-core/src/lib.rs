//! # MRSpec Core Library
//!
//! Resolves a hierarchical, human-authored electronic-structure input into the
//! fully normalized calculation specification consumed by a multiresolution
//! SCF and linear-response solver.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** The typed user input (`UserConfig`), the
//!   normalized output records (`FockOperatorSpec`, `GuessSpec`, ...), static
//!   lookup tables and the traits through which artifacts on disk are queried.
//!
//! - **[`engine`]: The Rules.** Pure resolvers for the method, the reaction field,
//!   the operator graph, initial guesses, solvers, occupancies and properties. The
//!   only blocking operations are single-shot artifact probes and discovery calls,
//!   routed through a substitutable `ResolveEnvironment`.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together to resolve
//!   a complete request: one ground-state calculation and zero or more response
//!   calculations.
//!
//! ## Example
//!
//! ```no_run
//! use mrspec::core::input::UserConfig;
//! use mrspec::engine::config::ResolveEnvironment;
//! use mrspec::workflows::resolve;
//!
//! # fn example(config: &UserConfig) -> Result<(), mrspec::engine::error::ResolveError> {
//! let spec = resolve::run(config, &ResolveEnvironment::default())?;
//! println!("{} response calculation(s)", spec.rsp_calculations.len());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
