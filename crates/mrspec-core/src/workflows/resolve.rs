use crate::core::input::UserConfig;
use crate::core::models::calculation::{CalculationSpec, ScfCalculationSpec};
use crate::core::models::response::{
    Direction, ResponseCalculationSpec, ResponseComponentSpec, ResponseOrbitalFiles,
    UnperturbedSpec,
};
use crate::core::models::wavefunction::WaveFunctionSpec;
use crate::engine::config::ResolveEnvironment;
use crate::engine::error::ResolveError;
use crate::engine::guess::{resolve_rsp_guess, resolve_scf_guess};
use crate::engine::method::resolve_wavefunction;
use crate::engine::occupancy::parse_occupancies;
use crate::engine::operators::{build_rsp_fock, build_scf_fock};
use crate::engine::properties::{build_plot, build_properties};
use crate::engine::solver::{build_rsp_solver, build_scf_solver};
use tracing::{debug, info, instrument};

/// Frequencies at or below this are treated as a static perturbation.
const STATIC_FREQUENCY_THRESHOLD: f64 = 1.0e-12;

#[instrument(skip_all, name = "resolve_workflow")]
pub fn run(config: &UserConfig, env: &ResolveEnvironment) -> Result<CalculationSpec, ResolveError> {
    info!("Resolving calculation specification.");

    let wavefunction = resolve_wavefunction(config)?;
    let scf_calculation = resolve_scf_calculation(config, &wavefunction, env)?;

    let rsp_calculations = if config.properties.polarizability {
        config
            .polarizability
            .frequency
            .iter()
            .map(|&omega| resolve_rsp_calculation(omega, config, &wavefunction, env))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        Vec::new()
    };

    info!(
        method = %wavefunction.method_name,
        response_calculations = rsp_calculations.len(),
        "Calculation specification resolved."
    );

    Ok(CalculationSpec {
        wavefunction,
        scf_calculation,
        rsp_calculations,
    })
}

pub fn resolve_scf_calculation(
    config: &UserConfig,
    wf: &WaveFunctionSpec,
    env: &ResolveEnvironment,
) -> Result<ScfCalculationSpec, ResolveError> {
    Ok(ScfCalculationSpec {
        fock_operator: build_scf_fock(config, wf)?,
        initial_guess: resolve_scf_guess(config, wf, env)?,
        scf_solver: build_scf_solver(config, wf),
        properties: build_properties(config),
        plots: build_plot(config),
        occupancies: parse_occupancies(&config.orbital_occupancies.occupancies)?,
    })
}

/// Builds the linear-response calculation at one frequency.
///
/// Relativistic (ZORA) wavefunctions are rejected. All three Cartesian components
/// are always present; only directions flagged in `Response.run` get a solver.
#[instrument(skip_all, name = "response_calculation", fields(frequency = omega))]
pub fn resolve_rsp_calculation(
    omega: f64,
    config: &UserConfig,
    wf: &WaveFunctionSpec,
    env: &ResolveEnvironment,
) -> Result<ResponseCalculationSpec, ResolveError> {
    if wf.zora.is_some() {
        return Err(ResolveError::UnsupportedCombination {
            feature: "Linear response",
            detail: wf.relativity_name.clone(),
        });
    }

    let rsp = &config.response;
    let components = Direction::ALL.map(|direction| ResponseComponentSpec {
        initial_guess: resolve_rsp_guess(config, direction, env),
        write_orbitals: rsp
            .write_orbitals
            .then(|| response_orbital_files(&rsp.path_orbitals, direction)),
        rsp_solver: rsp.run[direction.index()].then(|| build_rsp_solver(config, wf, direction)),
    });

    let calculation = ResponseCalculationSpec {
        frequency: omega,
        dynamic: omega > STATIC_FREQUENCY_THRESHOLD,
        fock_operator: build_rsp_fock(config, wf)?,
        unperturbed: UnperturbedSpec {
            precision: config.world_prec,
            localize: rsp.localize,
            fock_operator: build_scf_fock(config, wf)?,
        },
        components,
    };

    debug!(dynamic = calculation.dynamic, "Resolved response calculation.");
    Ok(calculation)
}

fn response_orbital_files(path_orbitals: &str, direction: Direction) -> ResponseOrbitalFiles {
    let file = |vector: &str| format!("{}/{}_rsp_{}", path_orbitals, vector, direction);
    ResponseOrbitalFiles {
        file_x_p: file("X_p"),
        file_x_a: file("X_a"),
        file_x_b: file("X_b"),
        file_y_p: file("Y_p"),
        file_y_a: file("Y_a"),
        file_y_b: file("Y_b"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::fixtures::minimal_config;

    fn resolve(config: &UserConfig) -> Result<CalculationSpec, ResolveError> {
        run(config, &ResolveEnvironment::default())
    }

    #[test]
    fn ground_state_only_without_polarizability() {
        let spec = resolve(&minimal_config()).unwrap();

        assert!(spec.rsp_calculations.is_empty());
        assert_eq!(spec.wavefunction.method_name, "Hartree-Fock");
        assert!(spec.scf_calculation.plots.is_none());
        assert!(spec.scf_calculation.occupancies.is_empty());
        assert!(spec.scf_calculation.properties.dipole_moment.is_some());
    }

    #[test]
    fn one_response_calculation_per_frequency() {
        let mut config = minimal_config();
        config.properties.polarizability = true;
        config.polarizability.frequency = vec![0.0, 0.0656];
        let spec = resolve(&config).unwrap();

        assert_eq!(spec.rsp_calculations.len(), 2);
        assert!(!spec.rsp_calculations[0].dynamic);
        assert!(spec.rsp_calculations[1].dynamic);
        assert_eq!(spec.rsp_calculations[1].frequency, 0.0656);
    }

    #[test]
    fn response_components_are_always_three() {
        let mut config = minimal_config();
        config.response.run = [false, true, false];
        let wf = resolve_wavefunction(&config).unwrap();
        let rsp = resolve_rsp_calculation(0.0, &config, &wf, &ResolveEnvironment::default())
            .unwrap();

        assert_eq!(rsp.components.len(), 3);
        assert!(rsp.components[0].rsp_solver.is_none());
        assert_eq!(
            rsp.components[1].rsp_solver.as_ref().unwrap().file_chk_x,
            "checkpoint/X_rsp_1"
        );
        assert!(rsp.components[2].rsp_solver.is_none());
        assert!(rsp.components.iter().all(|c| c.write_orbitals.is_none()));
    }

    #[test]
    fn write_orbitals_paths_are_indexed_by_direction() {
        let mut config = minimal_config();
        config.response.write_orbitals = true;
        config.response.path_orbitals = "rsp_orbs".to_string();
        let wf = resolve_wavefunction(&config).unwrap();
        let rsp = resolve_rsp_calculation(0.0, &config, &wf, &ResolveEnvironment::default())
            .unwrap();

        let files = rsp.components[2].write_orbitals.as_ref().unwrap();
        assert_eq!(files.file_x_p, "rsp_orbs/X_p_rsp_2");
        assert_eq!(files.file_y_b, "rsp_orbs/Y_b_rsp_2");
    }

    #[test]
    fn unperturbed_operator_matches_ground_state() {
        let mut config = minimal_config();
        config.response.localize = true;
        let wf = resolve_wavefunction(&config).unwrap();
        let rsp = resolve_rsp_calculation(0.0, &config, &wf, &ResolveEnvironment::default())
            .unwrap();

        assert_eq!(rsp.unperturbed.precision, config.world_prec);
        assert!(rsp.unperturbed.localize);
        assert_eq!(rsp.unperturbed.fock_operator, build_scf_fock(&config, &wf).unwrap());
    }

    #[test]
    fn relativistic_response_is_rejected() {
        let mut config = minimal_config();
        config.wavefunction.relativity = "nzora".to_string();
        config.properties.polarizability = true;

        assert_eq!(
            resolve(&config).unwrap_err(),
            ResolveError::UnsupportedCombination {
                feature: "Linear response",
                detail: "ZORA (V_nuc)".to_string(),
            }
        );
    }

    #[test]
    fn relativity_without_response_is_accepted() {
        let mut config = minimal_config();
        config.wavefunction.relativity = "nzora".to_string();
        assert!(resolve(&config).is_ok());
    }

    #[test]
    fn invalid_occupancies_abort_the_request() {
        let mut config = minimal_config();
        config.orbital_occupancies.occupancies = "1 2.0\nfoo".to_string();

        let err = resolve(&config).unwrap_err();
        assert!(matches!(err, ResolveError::Occupancy { .. }));
        assert!(err.to_string().starts_with("ABORT: INVALID ORBITAL OCCUPANCIES: "));
    }

    #[test]
    fn input_is_left_untouched() {
        let mut config = minimal_config();
        config.wavefunction.relativity = "zora".to_string();
        config.properties.polarizability = false;
        let before = config.clone();

        resolve(&config).unwrap();
        assert_eq!(config, before);
    }
}
