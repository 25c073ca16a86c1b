use super::guess::ResponseGuessSpec;
use super::operators::{FockOperatorSpec, ResponseFockOperatorSpec};
use super::solver::ResponseSolverSpec;
use serde::Serialize;
use std::fmt;

/// Cartesian direction of a perturbing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    X,
    Y,
    Z,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::X, Direction::Y, Direction::Z];

    /// Index used in artifact names (`X_rsp_0`, `X_rsp_1`, ...).
    pub fn index(self) -> usize {
        match self {
            Direction::X => 0,
            Direction::Y => 1,
            Direction::Z => 2,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Linear-response calculation at a single perturbing frequency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseCalculationSpec {
    pub frequency: f64,
    /// True for a frequency-dependent (dynamic) perturbation.
    pub dynamic: bool,
    pub fock_operator: ResponseFockOperatorSpec,
    pub unperturbed: UnperturbedSpec,
    /// One entry per Cartesian direction, always all three.
    pub components: [ResponseComponentSpec; 3],
}

/// The ground-state operator the response equations are linearized around.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnperturbedSpec {
    pub precision: f64,
    pub localize: bool,
    pub fock_operator: FockOperatorSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseComponentSpec {
    pub initial_guess: ResponseGuessSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_orbitals: Option<ResponseOrbitalFiles>,
    /// Present only for directions flagged to run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsp_solver: Option<ResponseSolverSpec>,
}

/// Where converged response vectors are written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseOrbitalFiles {
    pub file_x_p: String,
    pub file_x_a: String,
    pub file_x_b: String,
    pub file_y_p: String,
    pub file_y_a: String,
    pub file_y_b: String,
}
