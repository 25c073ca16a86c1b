use crate::core::input::UserConfig;
use crate::core::io::artifacts::{response_checkpoints, scf_checkpoint_stem};
use crate::core::models::response::Direction;
use crate::core::models::solver::{PrecisionSchedule, ResponseSolverSpec, ScfSolverSpec};
use crate::core::models::wavefunction::WaveFunctionSpec;

/// Orthogonalization precision of response vectors against occupied orbitals.
const RESPONSE_ORTH_PREC: f64 = 1.0e-14;

/// Substitutes negative sentinels: `final_prec` falls back to `world_prec`,
/// then `start_prec` falls back to the resolved `final_prec`.
pub fn resolve_precisions(start_prec: f64, final_prec: f64, world_prec: f64) -> PrecisionSchedule {
    let final_prec = if final_prec < 0.0 { world_prec } else { final_prec };
    let start_prec = if start_prec < 0.0 { final_prec } else { start_prec };
    PrecisionSchedule {
        start_prec,
        final_prec,
    }
}

pub fn build_scf_solver(config: &UserConfig, wf: &WaveFunctionSpec) -> ScfSolverSpec {
    let scf = &config.scf;
    let schedule = resolve_precisions(scf.start_prec, scf.final_prec, config.world_prec);
    ScfSolverSpec {
        method: wf.method_name.clone(),
        relativity: wf.relativity_name.clone(),
        environment: wf.environment_name.clone(),
        external_field: wf.external_name.clone(),
        kain: scf.kain,
        max_iter: scf.max_iter,
        rotation: scf.rotation,
        localize: scf.localize,
        file_chk: scf_checkpoint_stem(&scf.path_checkpoint),
        checkpoint: scf.write_checkpoint,
        start_prec: schedule.start_prec,
        final_prec: schedule.final_prec,
        energy_thrs: scf.energy_thrs,
        orbital_thrs: scf.orbital_thrs,
        helmholtz_prec: config.helmholtz_prec(),
    }
}

pub fn build_rsp_solver(
    config: &UserConfig,
    wf: &WaveFunctionSpec,
    direction: Direction,
) -> ResponseSolverSpec {
    let rsp = &config.response;
    let schedule = resolve_precisions(rsp.start_prec, rsp.final_prec, config.world_prec);
    let (file_chk_x, file_chk_y) = response_checkpoints(&rsp.path_checkpoint, direction);
    ResponseSolverSpec {
        method: wf.method_name.clone(),
        kain: rsp.kain,
        max_iter: rsp.max_iter,
        file_chk_x,
        file_chk_y,
        checkpoint: rsp.write_checkpoint,
        start_prec: schedule.start_prec,
        final_prec: schedule.final_prec,
        orbital_thrs: rsp.orbital_thrs,
        property_thrs: rsp.property_thrs,
        helmholtz_prec: config.helmholtz_prec(),
        orth_prec: RESPONSE_ORTH_PREC,
    }
}
