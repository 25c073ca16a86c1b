use super::error::ResolveError;
use super::reaction::{FieldContext, build_reaction_operator};
use crate::core::input::UserConfig;
use crate::core::models::operators::{
    CoulombOperatorSpec, ExchangeOperatorSpec, ExternalOperatorSpec, FockOperatorSpec,
    FunctionalTerm, KineticOperatorSpec, NuclearOperatorSpec, ReactionOperatorSpec,
    ResponseFockOperatorSpec, XcFunctionalSpec, XcOperatorSpec,
};
use crate::core::models::wavefunction::WaveFunctionSpec;
use tracing::debug;

/// Assembles the ground-state Fock operator for a resolved wavefunction.
pub fn build_scf_fock(
    config: &UserConfig,
    wf: &WaveFunctionSpec,
) -> Result<FockOperatorSpec, ResolveError> {
    let terms = TwoElectronTerms::build(config, wf, FieldContext::GroundState)?;

    let fock = FockOperatorSpec {
        zora_operator: wf.zora,
        kinetic_operator: KineticOperatorSpec {
            derivative: config.derivatives.kinetic.clone(),
        },
        nuclear_operator: NuclearOperatorSpec {
            proj_prec: config.nuclear_prec(),
            smooth_prec: config.nuclear_prec(),
            nuclear_model: config.wavefunction.nuclear_model.clone(),
            shared_memory: config.mpi.share_nuclear_potential,
        },
        reaction_operator: terms.reaction,
        coulomb_operator: terms.coulomb,
        exchange_operator: terms.exchange,
        xc_operator: terms.xc,
        external_operator: wf.electric_field.map(|electric_field| ExternalOperatorSpec {
            electric_field,
            origin: config.world_origin,
        }),
    };

    debug!(
        zora = fock.zora_operator.is_some(),
        reaction = fock.reaction_operator.is_some(),
        coulomb = fock.coulomb_operator.is_some(),
        exchange = fock.exchange_operator.is_some(),
        xc = fock.xc_operator.is_some(),
        external = fock.external_operator.is_some(),
        "Assembled ground-state Fock operator."
    );
    Ok(fock)
}

/// Assembles the perturbed Fock operator of a linear-response calculation.
pub fn build_rsp_fock(
    config: &UserConfig,
    wf: &WaveFunctionSpec,
) -> Result<ResponseFockOperatorSpec, ResolveError> {
    let terms = TwoElectronTerms::build(config, wf, FieldContext::Response)?;
    Ok(ResponseFockOperatorSpec {
        coulomb_operator: terms.coulomb,
        exchange_operator: terms.exchange,
        xc_operator: terms.xc,
        reaction_operator: terms.reaction,
    })
}

/// Parses the functional text into weighted terms.
///
/// Each non-blank line is `<name> [coefficient ...]`. Every coefficient token must
/// be a number; the first one is used and defaults to 1.0. Names are lower-cased
/// and line order is preserved.
pub fn parse_functionals(text: &str) -> Result<Vec<FunctionalTerm>, ResolveError> {
    let mut terms = Vec::new();
    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            continue;
        };
        let coefficients = tokens
            .map(str::parse::<f64>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ResolveError::InvalidFunctional {
                line: line.trim().to_string(),
            })?;
        terms.push(FunctionalTerm {
            name: name.to_lowercase(),
            coefficient: coefficients.first().copied().unwrap_or(1.0),
        });
    }
    Ok(terms)
}

struct TwoElectronTerms {
    coulomb: Option<CoulombOperatorSpec>,
    exchange: Option<ExchangeOperatorSpec>,
    xc: Option<XcOperatorSpec>,
    reaction: Option<ReactionOperatorSpec>,
}

impl TwoElectronTerms {
    fn build(
        config: &UserConfig,
        wf: &WaveFunctionSpec,
        context: FieldContext,
    ) -> Result<Self, ResolveError> {
        let method = wf.method_type;

        let coulomb = method.has_coulomb().then(|| CoulombOperatorSpec {
            poisson_prec: config.poisson_prec(),
            shared_memory: config.mpi.share_coulomb_potential,
        });

        let exchange = method.has_exchange().then(|| ExchangeOperatorSpec {
            poisson_prec: config.poisson_prec(),
            exchange_prec: config.exchange_prec(),
        });

        let xc = if method.has_xc() {
            Some(XcOperatorSpec {
                shared_memory: config.mpi.share_xc_potential,
                xc_functional: XcFunctionalSpec {
                    spin: config.dft.spin,
                    cutoff: config.dft.density_cutoff,
                    functionals: parse_functionals(&wf.dft_funcs)?,
                },
            })
        } else {
            None
        };

        let reaction = if wf.environment.is_none() {
            None
        } else {
            Some(build_reaction_operator(config, wf.environment, context)?)
        };

        Ok(Self {
            coulomb,
            exchange,
            xc,
            reaction,
        })
    }
}
