use serde::{Serialize, Serializer};
use std::fmt;

/// Strategy used to build the initial orbitals (or response vectors).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GuessType {
    /// Restart from checkpoint files of a previous run.
    Chk,
    /// Diagonalize the core Hamiltonian in a small basis of the given zeta level.
    Core,
    /// Superposition of atomic densities in a small basis of the given zeta level.
    Sad,
    /// Core Hamiltonian guess projected from a Gaussian basis.
    CoreGto,
    /// Superposition of atomic densities projected from a Gaussian basis.
    SadGto,
    /// Orbitals read from discovered cube files.
    Cube,
    /// Zero guess; only meaningful for response vectors.
    Zero,
    /// Any other strategy name, passed through verbatim (e.g. `mw`, `gto`).
    Literal(String),
}

impl GuessType {
    pub fn as_str(&self) -> &str {
        match self {
            GuessType::Chk => "chk",
            GuessType::Core => "core",
            GuessType::Sad => "sad",
            GuessType::CoreGto => "core_gto",
            GuessType::SadGto => "sad_gto",
            GuessType::Cube => "cube",
            GuessType::Zero => "none",
            GuessType::Literal(name) => name,
        }
    }
}

impl fmt::Display for GuessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for GuessType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Basis-contraction richness of a `core`/`sad` guess. Serialized as 0–4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ZetaLevel {
    #[default]
    Unset,
    Single,
    Double,
    Triple,
    Quadruple,
}

impl ZetaLevel {
    pub fn code(self) -> u8 {
        match self {
            ZetaLevel::Unset => 0,
            ZetaLevel::Single => 1,
            ZetaLevel::Double => 2,
            ZetaLevel::Triple => 3,
            ZetaLevel::Quadruple => 4,
        }
    }
}

impl Serialize for ZetaLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Resolved ground-state initial guess.
///
/// `prec` equals the world precision exactly when a checkpoint restart was
/// verified on disk; otherwise it is the user-requested guess precision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuessSpec {
    pub zeta: ZetaLevel,
    pub prec: f64,
    #[serde(rename = "type")]
    pub guess_type: GuessType,
    pub method: String,
    pub relativity: String,
    pub environment: String,
    pub external_field: String,
    pub screen: f64,
    pub localize: bool,
    pub rotate: bool,
    pub restricted: bool,
    pub file_chk: String,
    pub file_basis: String,
    pub file_gto_p: String,
    pub file_gto_a: String,
    pub file_gto_b: String,
    pub file_phi_p: String,
    pub file_phi_a: String,
    pub file_phi_b: String,
    #[serde(rename = "file_CUBE_p")]
    pub file_cube_p: String,
    #[serde(rename = "file_CUBE_a")]
    pub file_cube_a: String,
    #[serde(rename = "file_CUBE_b")]
    pub file_cube_b: String,
}

/// Resolved initial guess of one Cartesian response component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseGuessSpec {
    pub prec: f64,
    #[serde(rename = "type")]
    pub guess_type: GuessType,
    pub file_chk_x: String,
    pub file_chk_y: String,
    pub file_x_p: String,
    pub file_x_a: String,
    pub file_x_b: String,
    pub file_y_p: String,
    pub file_y_a: String,
    pub file_y_b: String,
    #[serde(rename = "file_CUBE_x_p")]
    pub file_cube_x_p: String,
    #[serde(rename = "file_CUBE_x_a")]
    pub file_cube_x_a: String,
    #[serde(rename = "file_CUBE_x_b")]
    pub file_cube_x_b: String,
    #[serde(rename = "file_CUBE_y_p")]
    pub file_cube_y_p: String,
    #[serde(rename = "file_CUBE_y_a")]
    pub file_cube_y_a: String,
    #[serde(rename = "file_CUBE_y_b")]
    pub file_cube_y_b: String,
}
