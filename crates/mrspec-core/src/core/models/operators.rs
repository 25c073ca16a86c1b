use super::wavefunction::ZoraTerms;
use serde::Serialize;

/// The ground-state Fock operator tree.
///
/// Kinetic and nuclear terms are always present; every other term is an optional
/// entry whose presence is decided by the resolved wavefunction. Field order is
/// the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FockOperatorSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zora_operator: Option<ZoraTerms>,
    pub kinetic_operator: KineticOperatorSpec,
    pub nuclear_operator: NuclearOperatorSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction_operator: Option<ReactionOperatorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coulomb_operator: Option<CoulombOperatorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_operator: Option<ExchangeOperatorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xc_operator: Option<XcOperatorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_operator: Option<ExternalOperatorSpec>,
}

/// The perturbed Fock operator of a linear-response calculation.
///
/// Only the density-dependent terms are carried here; the one-electron terms live
/// in the unperturbed operator embedded next to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseFockOperatorSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coulomb_operator: Option<CoulombOperatorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_operator: Option<ExchangeOperatorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xc_operator: Option<XcOperatorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction_operator: Option<ReactionOperatorSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KineticOperatorSpec {
    /// Name of the derivative operator, e.g. `abgv_55`.
    pub derivative: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NuclearOperatorSpec {
    pub proj_prec: f64,
    pub smooth_prec: f64,
    pub nuclear_model: String,
    pub shared_memory: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoulombOperatorSpec {
    pub poisson_prec: f64,
    pub shared_memory: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExchangeOperatorSpec {
    pub poisson_prec: f64,
    pub exchange_prec: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XcOperatorSpec {
    pub shared_memory: bool,
    pub xc_functional: XcFunctionalSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XcFunctionalSpec {
    pub spin: bool,
    pub cutoff: f64,
    pub functionals: Vec<FunctionalTerm>,
}

/// One weighted term of an exchange-correlation functional.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionalTerm {
    /// Lower-cased functional name.
    pub name: String,
    #[serde(rename = "coef")]
    pub coefficient: f64,
}

/// A static, homogeneous external electric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExternalOperatorSpec {
    pub electric_field: [f64; 3],
    /// Gauge origin.
    #[serde(rename = "r_O")]
    pub origin: [f64; 3],
}

/// Parameters of the continuum-solvent reaction-field operator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReactionOperatorSpec {
    /// `Generalized_Poisson`, `Poisson-Boltzmann` or `Linearized_Poisson-Boltzmann`.
    pub solver_type: &'static str,
    pub poisson_prec: f64,
    pub kain: u32,
    pub max_iter: u32,
    pub dynamic_thrs: bool,
    /// 0 = total, 1 = electronic, 2 = nuclear density.
    pub density_type: u8,
    pub epsilon_in: f64,
    pub epsilon_static: f64,
    pub epsilon_dynamic: f64,
    pub nonequilibrium: bool,
    pub formulation: String,
    /// Inverse Debye length; zero without ionic screening.
    pub kappa_out: f64,
    pub ion_radius: f64,
    pub ion_width: f64,
    #[serde(rename = "DHS-formulation")]
    pub dhs_formulation: String,
}
