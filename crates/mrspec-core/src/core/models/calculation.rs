use super::guess::GuessSpec;
use super::occupancy::OccupancyRecord;
use super::operators::FockOperatorSpec;
use super::properties::{PlotSpec, PropertySpec};
use super::response::ResponseCalculationSpec;
use super::solver::ScfSolverSpec;
use super::wavefunction::WaveFunctionSpec;
use serde::Serialize;

/// Everything the numerical engine needs for the ground-state SCF.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScfCalculationSpec {
    pub fock_operator: FockOperatorSpec,
    pub initial_guess: GuessSpec,
    pub scf_solver: ScfSolverSpec,
    pub properties: PropertySpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plots: Option<PlotSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub occupancies: Vec<OccupancyRecord>,
}

/// The complete normalized specification of one calculation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationSpec {
    /// Shared descriptor both branches were built from; not part of the wire tree.
    #[serde(skip)]
    pub wavefunction: WaveFunctionSpec,
    pub scf_calculation: ScfCalculationSpec,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rsp_calculations: Vec<ResponseCalculationSpec>,
}
