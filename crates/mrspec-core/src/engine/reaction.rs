use crate::core::input::{Constants, UserConfig};
use crate::core::models::operators::ReactionOperatorSpec;
use crate::core::models::wavefunction::Environment;
use thiserror::Error;
use tracing::debug;

/// Temperature (K) at which the Debye length is evaluated.
const ROOM_TEMPERATURE: f64 = 298.15;

const GENERALIZED_POISSON: &str = "Generalized_Poisson";

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ReactionError {
    #[error("ionic strength must be positive for an ionic solvent model, got {0}")]
    NonPositiveIonicStrength(f64),
}

/// Which calculation the reaction operator is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldContext {
    GroundState,
    /// Linear response; only the electronic density is perturbed.
    Response,
}

/// Maps the user's density choice to the solver code: total 0, electronic 1, nuclear 2.
pub fn density_type_code(density_type: &str) -> u8 {
    match density_type {
        "total" => 0,
        "electronic" => 1,
        _ => 2,
    }
}

/// Inverse Debye screening length, in inverse bohr.
///
/// `permittivity` is the static relative permittivity of the solvent and
/// `ionic_strength` is given in mol/L.
pub fn compute_kappa(
    constants: &Constants,
    permittivity: f64,
    ionic_strength: f64,
) -> Result<f64, ReactionError> {
    if ionic_strength <= 0.0 {
        return Err(ReactionError::NonPositiveIonicStrength(ionic_strength));
    }

    let numerator = constants.e0 * permittivity * constants.boltzmann_constant * ROOM_TEMPERATURE;
    let denominator = 2.0
        * constants.elementary_charge.powi(2)
        * constants.avogadro
        * 1000.0
        * ionic_strength;
    let debye_length = (numerator / denominator).sqrt() * constants.meter2bohr;

    Ok(1.0 / debye_length)
}

pub fn build_reaction_operator(
    config: &UserConfig,
    environment: Environment,
    context: FieldContext,
) -> Result<ReactionOperatorSpec, ReactionError> {
    let scrf = &config.pcm.scrf;
    let permittivity = &config.pcm.solvent.permittivity;
    let debye_huckel = &config.pcm.solvent.debye_huckel;

    let density_type = match context {
        FieldContext::GroundState => density_type_code(&scrf.density_type),
        FieldContext::Response => 1,
    };

    let (solver_type, kappa_out) = match environment.ionic_model() {
        Some(model) => {
            let kappa = compute_kappa(
                &config.constants,
                permittivity.epsilon_out.static_permittivity,
                debye_huckel.ion_strength,
            )?;
            (model.solver_type(), kappa)
        }
        None => (GENERALIZED_POISSON, 0.0),
    };

    debug!(solver_type, density_type, kappa_out, "Built reaction field operator.");

    Ok(ReactionOperatorSpec {
        solver_type,
        poisson_prec: config.world_prec,
        kain: scrf.kain,
        max_iter: scrf.max_iter,
        dynamic_thrs: scrf.dynamic_thrs,
        density_type,
        epsilon_in: permittivity.epsilon_in,
        epsilon_static: permittivity.epsilon_out.static_permittivity,
        epsilon_dynamic: permittivity.epsilon_out.dynamic_permittivity,
        nonequilibrium: permittivity.epsilon_out.nonequilibrium,
        formulation: permittivity.formulation.clone(),
        kappa_out,
        ion_radius: debye_huckel.ion_radius,
        ion_width: debye_huckel.ion_width,
        dhs_formulation: debye_huckel.formulation.clone(),
    })
}
