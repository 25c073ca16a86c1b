use super::occupancy::OccupancyError;
use super::reaction::ReactionError;
use thiserror::Error;

/// Fatal resolution failures. Any of these aborts the whole request; no partial
/// specification is returned.
#[derive(Debug, Error, PartialEq, Clone)]
pub enum ResolveError {
    #[error("Invalid wavefunction method '{0}'")]
    InvalidMethod(String),

    #[error("DFT selected, but no exchange-correlation functional given")]
    MissingFunctional,

    #[error("Invalid functional line '{line}': coefficient is not a number")]
    InvalidFunctional { line: String },

    #[error("Invalid relativity '{0}'. Expected 'none', 'off', 'zora' or 'nzora'.")]
    InvalidRelativity(String),

    #[error("ZORA selected, but no ZORA potential included")]
    ZoraWithoutPotential,

    #[error("ZORA (V_xc) not available for unrestricted wavefunctions")]
    ZoraXcUnrestricted,

    #[error(transparent)]
    InvalidEnvironment(#[from] crate::core::models::wavefunction::ParseEnvironmentError),

    #[error("Electric field must have 3 components, got {0}")]
    InvalidExternalField(usize),

    #[error("Invalid zeta '{zeta}' in initial guess '{guess}'. Expected 'sz', 'dz', 'tz', 'qz' or 'gto'.")]
    InvalidZeta { guess: String, zeta: String },

    #[error("{feature} not available: {detail}")]
    UnsupportedCombination {
        feature: &'static str,
        detail: String,
    },

    #[error("ABORT: INVALID ORBITAL OCCUPANCIES: {source}")]
    Occupancy {
        #[from]
        source: OccupancyError,
    },

    #[error("Reaction field setup failed: {source}")]
    Reaction {
        #[from]
        source: ReactionError,
    },
}
