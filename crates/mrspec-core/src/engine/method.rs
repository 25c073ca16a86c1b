use super::error::ResolveError;
use crate::core::input::{UserConfig, ZoraInput};
use crate::core::models::wavefunction::{Environment, MethodType, WaveFunctionSpec, ZoraTerms};
use crate::core::utils::identifiers::{is_hartree_fock_alias, is_shorthand_functional};
use tracing::{debug, instrument};

impl From<&ZoraInput> for ZoraTerms {
    fn from(input: &ZoraInput) -> Self {
        Self {
            include_nuclear: input.include_nuclear,
            include_coulomb: input.include_coulomb,
            include_xc: input.include_xc,
        }
    }
}

#[instrument(skip_all, name = "method_resolution", fields(method = %config.wavefunction.method))]
pub fn resolve_wavefunction(config: &UserConfig) -> Result<WaveFunctionSpec, ResolveError> {
    let wf = &config.wavefunction;

    let (method_type, method_name, dft_funcs) =
        classify_method(&wf.method, &config.dft.functionals)?;

    let zora = resolve_relativity(
        &wf.relativity,
        ZoraTerms::from(&config.zora),
        wf.restricted,
    )?;
    let relativity_name = match zora {
        Some(terms) => format!("ZORA ({})", terms.term_names().join(" + ")),
        None => "None".to_string(),
    };

    let environment: Environment = wf.environment.parse()?;
    let environment_name = if wf.environment.eq_ignore_ascii_case("pcm") {
        "PCM"
    } else {
        "None"
    };

    let electric_field = parse_electric_field(&config.external_fields.electric_field)?;
    let external_name = match electric_field {
        Some([x, y, z]) => format!(
            "Electric field ({}, {}, {})",
            format_component(x),
            format_component(y),
            format_component(z)
        ),
        None => "None".to_string(),
    };

    debug!(
        method_type = %method_type,
        method_name = %method_name,
        relativity = %relativity_name,
        environment = environment_name,
        "Resolved wavefunction descriptor."
    );

    Ok(WaveFunctionSpec {
        method_type,
        method_name,
        relativity_name,
        environment_name: environment_name.to_string(),
        external_name,
        dft_funcs,
        zora,
        environment,
        restricted: wf.restricted,
        electric_field,
    })
}

fn classify_method(
    token: &str,
    functionals: &str,
) -> Result<(MethodType, String, String), ResolveError> {
    let method = token.to_lowercase();
    let (method_type, method_name, dft_funcs) = match method.as_str() {
        "core" => (MethodType::Core, "Core Hamiltonian".to_string(), String::new()),
        "hartree" => (MethodType::Hartree, "Hartree".to_string(), String::new()),
        m if is_hartree_fock_alias(m) => {
            (MethodType::Hf, "Hartree-Fock".to_string(), String::new())
        }
        "dft" => (MethodType::Dft, "DFT".to_string(), functionals.to_lowercase()),
        "lda" => (
            MethodType::Dft,
            "DFT (SVWN5)".to_string(),
            "svwn5".to_string(),
        ),
        m if is_shorthand_functional(m) => (
            MethodType::Dft,
            format!("DFT ({})", m.to_uppercase()),
            m.to_string(),
        ),
        _ => return Err(ResolveError::InvalidMethod(token.to_string())),
    };

    if method_type == MethodType::Dft && dft_funcs.trim().is_empty() {
        return Err(ResolveError::MissingFunctional);
    }
    Ok((method_type, method_name, dft_funcs))
}

/// Normalizes the relativity token against the requested ZORA terms.
///
/// Returns `None` when no relativistic correction applies. The requested terms are
/// only honored for `zora`; `nzora` always means the nuclear potential alone.
pub fn resolve_relativity(
    token: &str,
    requested: ZoraTerms,
    restricted: bool,
) -> Result<Option<ZoraTerms>, ResolveError> {
    let terms = match token.to_lowercase().as_str() {
        "none" | "off" => return Ok(None),
        "nzora" => ZoraTerms::NUCLEAR_ONLY,
        "zora" => requested,
        _ => return Err(ResolveError::InvalidRelativity(token.to_string())),
    };

    if !terms.any() {
        return Err(ResolveError::ZoraWithoutPotential);
    }
    if terms.include_xc && !restricted {
        return Err(ResolveError::ZoraXcUnrestricted);
    }
    Ok(Some(terms))
}

/// Shortest round-trip form of a field component, with a signed, at least two-digit
/// exponent in scientific notation (`0.01`, `1e-05`, `2.5e+20`).
fn format_component(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

fn parse_electric_field(field: &[f64]) -> Result<Option<[f64; 3]>, ResolveError> {
    match *field {
        [] => Ok(None),
        [x, y, z] => Ok(Some([x, y, z])),
        _ => Err(ResolveError::InvalidExternalField(field.len())),
    }
}
