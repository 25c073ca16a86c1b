use super::config::ResolveEnvironment;
use super::diagnostics::Diagnostic;
use super::error::ResolveError;
use crate::core::input::UserConfig;
use crate::core::io::artifacts::{response_checkpoints, scf_checkpoint_marker, scf_checkpoint_stem};
use crate::core::models::guess::{GuessSpec, GuessType, ResponseGuessSpec, ZetaLevel};
use crate::core::models::response::Direction;
use crate::core::models::wavefunction::WaveFunctionSpec;
use crate::core::utils::identifiers::zeta_level;
use std::path::Path;
use tracing::debug;

const NO_CUBE_GUESS: &str = "No CUBE guess found in any of the 'initial_guess' sub-folders";

/// Resolves the ground-state initial guess.
///
/// The guess token is split on `_`; its first segment picks the strategy and, for
/// `core`/`sad`, the second segment picks the zeta level (or `gto`). A `gto` token
/// with further segments is passed through whole as a literal guess type. Missing
/// checkpoint or cube artifacts downgrade the strategy to `sad_gto` and raise a
/// diagnostic; they are never an error.
pub fn resolve_scf_guess(
    config: &UserConfig,
    wf: &WaveFunctionSpec,
    env: &ResolveEnvironment,
) -> Result<GuessSpec, ResolveError> {
    let scf = &config.scf;
    let token = scf.guess_type.to_lowercase();
    let mut segments = token.split('_');
    let strategy = segments.next().unwrap_or_default();

    let mut zeta = ZetaLevel::Unset;
    let mut prec = scf.guess_prec;

    let guess_type = match strategy {
        "chk" => {
            if env.artifact_exists(&scf_checkpoint_marker(&scf.path_checkpoint)) {
                prec = config.world_prec;
                GuessType::Chk
            } else {
                fall_back(
                    env,
                    None,
                    GuessType::Chk,
                    GuessType::SadGto,
                    format!("No checkpoint guess found in {}", scf.path_checkpoint),
                )
            }
        }
        "core" | "sad" => {
            let is_core = strategy == "core";
            let segment = segments.next();
            let has_trailing = segments.next().is_some();
            match segment {
                Some("gto") if has_trailing => GuessType::Literal(token.clone()),
                Some("gto") if is_core => GuessType::CoreGto,
                Some("gto") => GuessType::SadGto,
                segment => {
                    zeta = segment.and_then(zeta_level).ok_or_else(|| {
                        ResolveError::InvalidZeta {
                            guess: token.clone(),
                            zeta: segment.unwrap_or_default().to_string(),
                        }
                    })?;
                    if is_core { GuessType::Core } else { GuessType::Sad }
                }
            }
        }
        "cube" => {
            if env.discover(config, None) {
                GuessType::Cube
            } else {
                fall_back(env, None, GuessType::Cube, GuessType::SadGto, NO_CUBE_GUESS.to_string())
            }
        }
        other => passthrough(other),
    };

    debug!(guess_type = %guess_type, zeta = zeta.code(), prec, "Resolved ground-state guess.");

    let files = &config.files;
    let cube = |spin: &str| format!("{}CUBE_{}_vector.json", files.cube_vectors, spin);
    Ok(GuessSpec {
        zeta,
        prec,
        guess_type,
        method: wf.method_name.clone(),
        relativity: wf.relativity_name.clone(),
        environment: wf.environment_name.clone(),
        external_field: wf.external_name.clone(),
        screen: scf.guess_screen,
        localize: scf.localize,
        rotate: scf.guess_rotate,
        restricted: wf.restricted,
        file_chk: scf_checkpoint_stem(&scf.path_checkpoint),
        file_basis: files.guess_basis.clone(),
        file_gto_p: files.guess_gto_p.clone(),
        file_gto_a: files.guess_gto_a.clone(),
        file_gto_b: files.guess_gto_b.clone(),
        file_phi_p: format!("{}_scf", files.guess_phi_p),
        file_phi_a: format!("{}_scf", files.guess_phi_a),
        file_phi_b: format!("{}_scf", files.guess_phi_b),
        file_cube_p: cube("p"),
        file_cube_a: cube("a"),
        file_cube_b: cube("b"),
    })
}

/// Resolves the initial guess of one response direction.
///
/// Each direction is checked on its own: a missing X or Y checkpoint (or an
/// undiscovered cube vector) turns only that direction into a zero guess.
pub fn resolve_rsp_guess(
    config: &UserConfig,
    direction: Direction,
    env: &ResolveEnvironment,
) -> ResponseGuessSpec {
    let rsp = &config.response;
    let token = rsp.guess_type.to_lowercase();
    let strategy = token.split('_').next().unwrap_or_default();
    let (file_chk_x, file_chk_y) = response_checkpoints(&rsp.path_checkpoint, direction);

    let mut prec = rsp.guess_prec;
    let guess_type = match strategy {
        "chk" => {
            if env.artifact_exists(Path::new(&file_chk_x))
                && env.artifact_exists(Path::new(&file_chk_y))
            {
                prec = config.world_prec;
                GuessType::Chk
            } else {
                fall_back(
                    env,
                    Some(direction),
                    GuessType::Chk,
                    GuessType::Zero,
                    format!("No checkpoint guess found in {}", rsp.path_checkpoint),
                )
            }
        }
        "cube" => {
            if env.discover(config, Some(direction)) {
                GuessType::Cube
            } else {
                fall_back(
                    env,
                    Some(direction),
                    GuessType::Cube,
                    GuessType::Zero,
                    NO_CUBE_GUESS.to_string(),
                )
            }
        }
        other => passthrough(other),
    };

    debug!(%direction, guess_type = %guess_type, prec, "Resolved response guess.");

    let files = &config.files;
    let stem = |base: &str| format!("{}_rsp_{}", base, direction);
    let cube = |vector: &str| {
        format!("{}CUBE_{}_{}_vector.json", files.cube_vectors, vector, direction)
    };
    ResponseGuessSpec {
        prec,
        guess_type,
        file_chk_x,
        file_chk_y,
        file_x_p: stem(&files.guess_x_p),
        file_x_a: stem(&files.guess_x_a),
        file_x_b: stem(&files.guess_x_b),
        file_y_p: stem(&files.guess_y_p),
        file_y_a: stem(&files.guess_y_a),
        file_y_b: stem(&files.guess_y_b),
        file_cube_x_p: cube("x_p"),
        file_cube_x_a: cube("x_a"),
        file_cube_x_b: cube("x_b"),
        file_cube_y_p: cube("y_p"),
        file_cube_y_a: cube("y_a"),
        file_cube_y_b: cube("y_b"),
    }
}

fn fall_back(
    env: &ResolveEnvironment,
    direction: Option<Direction>,
    requested: GuessType,
    fallback: GuessType,
    reason: String,
) -> GuessType {
    env.report(Diagnostic::GuessFallback {
        direction,
        requested,
        fallback: fallback.clone(),
        reason,
    });
    fallback
}

fn passthrough(strategy: &str) -> GuessType {
    match strategy {
        "none" => GuessType::Zero,
        other => GuessType::Literal(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::fixtures::minimal_config;
    use crate::engine::diagnostics::DiagnosticReporter;
    use crate::engine::method::resolve_wavefunction;
    use std::fs;
    use std::sync::{Arc, Mutex};
    use tempfile::tempdir;

    fn scf_guess(config: &UserConfig, env: &ResolveEnvironment) -> Result<GuessSpec, ResolveError> {
        let wf = resolve_wavefunction(config).unwrap();
        resolve_scf_guess(config, &wf, env)
    }

    fn recording_env<'a>(
        sink: Arc<Mutex<Vec<Diagnostic>>>,
        probe: impl Fn(&Path) -> bool + 'a,
    ) -> ResolveEnvironment<'a> {
        ResolveEnvironment::builder()
            .probe(probe)
            .reporter(DiagnosticReporter::with_callback(Box::new(move |d| {
                sink.lock().unwrap().push(d.clone());
            })))
            .build()
    }

    #[test]
    fn zeta_segments_select_levels() {
        let env = ResolveEnvironment::default();
        let mut config = minimal_config();
        for (token, guess_type, zeta) in [
            ("core_sz", GuessType::Core, 1),
            ("sad_dz", GuessType::Sad, 2),
            ("SAD_TZ", GuessType::Sad, 3),
            ("core_qz", GuessType::Core, 4),
        ] {
            config.scf.guess_type = token.to_string();
            let guess = scf_guess(&config, &env).unwrap();
            assert_eq!(guess.guess_type, guess_type, "{}", token);
            assert_eq!(guess.zeta.code(), zeta, "{}", token);
            assert_eq!(guess.prec, config.scf.guess_prec);
        }
    }

    #[test]
    fn gto_segment_switches_strategy_and_leaves_zeta_unset() {
        let env = ResolveEnvironment::default();
        let mut config = minimal_config();

        config.scf.guess_type = "core_gto".to_string();
        let guess = scf_guess(&config, &env).unwrap();
        assert_eq!(guess.guess_type, GuessType::CoreGto);
        assert_eq!(guess.zeta, ZetaLevel::Unset);

        config.scf.guess_type = "sad_gto".to_string();
        assert_eq!(scf_guess(&config, &env).unwrap().guess_type, GuessType::SadGto);
    }

    #[test]
    fn gto_token_with_trailing_segments_is_kept_whole() {
        let env = ResolveEnvironment::default();
        let mut config = minimal_config();

        config.scf.guess_type = "SAD_GTO_extra".to_string();
        let guess = scf_guess(&config, &env).unwrap();
        assert_eq!(guess.guess_type, GuessType::Literal("sad_gto_extra".to_string()));
        assert_eq!(guess.zeta, ZetaLevel::Unset);

        config.scf.guess_type = "core_gto_dz".to_string();
        assert_eq!(
            scf_guess(&config, &env).unwrap().guess_type.as_str(),
            "core_gto_dz"
        );
    }

    #[test]
    fn unrecognized_or_missing_zeta_is_fatal() {
        let env = ResolveEnvironment::default();
        let mut config = minimal_config();

        config.scf.guess_type = "sad_5z".to_string();
        assert_eq!(
            scf_guess(&config, &env),
            Err(ResolveError::InvalidZeta {
                guess: "sad_5z".to_string(),
                zeta: "5z".to_string()
            })
        );

        config.scf.guess_type = "core".to_string();
        assert!(matches!(
            scf_guess(&config, &env),
            Err(ResolveError::InvalidZeta { .. })
        ));
    }

    #[test]
    fn other_strategies_pass_through_verbatim() {
        let env = ResolveEnvironment::default();
        let mut config = minimal_config();

        config.scf.guess_type = "mw".to_string();
        let guess = scf_guess(&config, &env).unwrap();
        assert_eq!(guess.guess_type, GuessType::Literal("mw".to_string()));
        assert_eq!(guess.zeta, ZetaLevel::Unset);

        config.scf.guess_type = "GTO".to_string();
        assert_eq!(scf_guess(&config, &env).unwrap().guess_type.as_str(), "gto");
    }

    #[test]
    fn missing_checkpoint_falls_back_to_sad_gto_keeping_precision() {
        let dir = tempdir().unwrap();
        let mut config = minimal_config();
        config.scf.guess_type = "chk_sz".to_string();
        config.scf.guess_prec = 1.0e-3;
        config.scf.path_checkpoint = dir.path().to_string_lossy().into_owned();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let env = recording_env(Arc::clone(&seen), |p: &Path| p.is_file());
        let guess = scf_guess(&config, &env).unwrap();

        assert_eq!(guess.guess_type, GuessType::SadGto);
        assert_eq!(guess.zeta, ZetaLevel::Unset);
        assert_eq!(guess.prec, 1.0e-3);
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(matches!(
            &seen[0],
            Diagnostic::GuessFallback { direction: None, fallback: GuessType::SadGto, .. }
        ));
    }

    #[test]
    fn present_checkpoint_elevates_precision_to_world_precision() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("phi_scf_idx_0.meta"), "").unwrap();

        let mut config = minimal_config();
        config.world_prec = 1.0e-6;
        config.scf.guess_type = "chk_sz".to_string();
        config.scf.path_checkpoint = dir.path().to_string_lossy().into_owned();

        let guess = scf_guess(&config, &ResolveEnvironment::default()).unwrap();
        assert_eq!(guess.guess_type, GuessType::Chk);
        assert_eq!(guess.prec, 1.0e-6);
        assert_eq!(guess.zeta, ZetaLevel::Unset);
        assert_eq!(guess.file_chk, format!("{}/phi_scf", config.scf.path_checkpoint));
    }

    #[test]
    fn undiscovered_cube_falls_back_to_sad_gto() {
        let mut config = minimal_config();
        config.scf.guess_type = "cube".to_string();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let env = recording_env(Arc::clone(&seen), |_: &Path| false);
        assert_eq!(scf_guess(&config, &env).unwrap().guess_type, GuessType::SadGto);
        assert_eq!(seen.lock().unwrap().len(), 1);

        let env = ResolveEnvironment::builder()
            .discovery(|_: &UserConfig, d: Option<Direction>| d.is_none())
            .build();
        assert_eq!(scf_guess(&config, &env).unwrap().guess_type, GuessType::Cube);
    }

    #[test]
    fn ground_state_file_names_follow_conventions() {
        let mut config = minimal_config();
        config.wavefunction.method = "b3lyp".to_string();
        let guess = scf_guess(&config, &ResolveEnvironment::default()).unwrap();

        assert_eq!(guess.method, "DFT (B3LYP)");
        assert_eq!(guess.relativity, "None");
        assert_eq!(guess.environment, "None");
        assert_eq!(guess.external_field, "None");
        assert_eq!(guess.file_chk, "checkpoint/phi_scf");
        assert_eq!(guess.file_basis, "initial_guess/mrchem.bas");
        assert_eq!(guess.file_phi_b, "initial_guess/phi_b_scf");
        assert_eq!(guess.file_cube_a, "cube_vectors/CUBE_a_vector.json");
    }

    #[test]
    fn response_checkpoint_requires_both_vectors_per_direction() {
        let dir = tempdir().unwrap();
        for name in ["X_rsp_0", "Y_rsp_0", "X_rsp_1"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let mut config = minimal_config();
        config.world_prec = 1.0e-5;
        config.response.guess_type = "chk".to_string();
        config.response.guess_prec = 1.0e-3;
        config.response.path_checkpoint = dir.path().to_string_lossy().into_owned();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let env = recording_env(Arc::clone(&seen), |p: &Path| p.is_file());
        let guesses = Direction::ALL.map(|d| resolve_rsp_guess(&config, d, &env));

        assert_eq!(guesses[0].guess_type, GuessType::Chk);
        assert_eq!(guesses[0].prec, 1.0e-5);
        assert_eq!(guesses[1].guess_type, GuessType::Zero);
        assert_eq!(guesses[1].prec, 1.0e-3);
        assert_eq!(guesses[2].guess_type, GuessType::Zero);

        let directions: Vec<_> = seen
            .lock()
            .unwrap()
            .iter()
            .map(|Diagnostic::GuessFallback { direction, .. }| *direction)
            .collect();
        assert_eq!(directions, vec![Some(Direction::Y), Some(Direction::Z)]);
    }

    #[test]
    fn response_cube_discovery_is_per_direction() {
        let mut config = minimal_config();
        config.response.guess_type = "cube".to_string();
        let env = ResolveEnvironment::builder()
            .discovery(|_: &UserConfig, d: Option<Direction>| d == Some(Direction::X))
            .build();

        let types = Direction::ALL.map(|d| resolve_rsp_guess(&config, d, &env).guess_type);
        assert_eq!(types, [GuessType::Cube, GuessType::Zero, GuessType::Zero]);
    }

    #[test]
    fn response_file_names_carry_direction_index() {
        let config = minimal_config();
        let guess = resolve_rsp_guess(&config, Direction::Z, &ResolveEnvironment::default());

        assert_eq!(guess.guess_type, GuessType::Zero);
        assert_eq!(guess.file_chk_x, "checkpoint/X_rsp_2");
        assert_eq!(guess.file_chk_y, "checkpoint/Y_rsp_2");
        assert_eq!(guess.file_y_a, "initial_guess/Y_a_rsp_2");
        assert_eq!(guess.file_cube_x_b, "cube_vectors/CUBE_x_b_2_vector.json");
    }
}
