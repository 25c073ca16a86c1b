use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The class of electronic-structure model, which decides the two-electron operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodType {
    /// Bare one-electron (core) Hamiltonian.
    Core,
    /// Coulomb repulsion only.
    Hartree,
    /// Coulomb plus exact exchange.
    Hf,
    /// Coulomb plus exchange-correlation functional (and possibly exact exchange).
    Dft,
}

impl MethodType {
    pub fn has_coulomb(self) -> bool {
        matches!(self, Self::Hartree | Self::Hf | Self::Dft)
    }

    pub fn has_exchange(self) -> bool {
        matches!(self, Self::Hf | Self::Dft)
    }

    pub fn has_xc(self) -> bool {
        matches!(self, Self::Dft)
    }
}

impl fmt::Display for MethodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                MethodType::Core => "core",
                MethodType::Hartree => "hartree",
                MethodType::Hf => "hf",
                MethodType::Dft => "dft",
            }
        )
    }
}

/// Potentials included in the ZORA kernel.
///
/// Serialized as the `zora_operator` entry of the ground-state Fock operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ZoraTerms {
    pub include_nuclear: bool,
    pub include_coulomb: bool,
    pub include_xc: bool,
}

impl ZoraTerms {
    /// No relativistic correction.
    pub const NONE: Self = Self {
        include_nuclear: false,
        include_coulomb: false,
        include_xc: false,
    };

    /// The `nzora` shorthand: nuclear potential only.
    pub const NUCLEAR_ONLY: Self = Self {
        include_nuclear: true,
        include_coulomb: false,
        include_xc: false,
    };

    pub fn any(&self) -> bool {
        self.include_nuclear || self.include_coulomb || self.include_xc
    }

    /// Included term names among `V_nuc`, `J`, `V_xc`, in that order.
    pub fn term_names(&self) -> Vec<&'static str> {
        [
            (self.include_nuclear, "V_nuc"),
            (self.include_coulomb, "J"),
            (self.include_xc, "V_xc"),
        ]
        .into_iter()
        .filter_map(|(included, name)| included.then_some(name))
        .collect()
    }
}

/// Ionic screening model of a continuum solvent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IonicModel {
    /// Full (nonlinear) Poisson-Boltzmann, token suffix `pb`.
    PoissonBoltzmann,
    /// Linearized Poisson-Boltzmann, token suffix `lpb`.
    LinearizedPoissonBoltzmann,
}

impl IonicModel {
    pub fn solver_type(self) -> &'static str {
        match self {
            IonicModel::PoissonBoltzmann => "Poisson-Boltzmann",
            IonicModel::LinearizedPoissonBoltzmann => "Linearized_Poisson-Boltzmann",
        }
    }
}

/// Solvent environment surrounding the molecule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    /// Vacuum.
    #[default]
    None,
    /// Continuum solvent solved with the generalized Poisson equation.
    Pcm,
    /// Continuum solvent with ionic screening.
    IonicPcm(IonicModel),
}

impl Environment {
    pub fn is_none(self) -> bool {
        matches!(self, Environment::None)
    }

    pub fn ionic_model(self) -> Option<IonicModel> {
        match self {
            Environment::IonicPcm(model) => Some(model),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Invalid environment '{0}'. Expected 'none', 'pcm', 'pcm_pb' or 'pcm_lpb'.")]
pub struct ParseEnvironmentError(pub String);

impl FromStr for Environment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Environment::None),
            "pcm" => Ok(Environment::Pcm),
            "pcm_pb" => Ok(Environment::IonicPcm(IonicModel::PoissonBoltzmann)),
            "pcm_lpb" => Ok(Environment::IonicPcm(IonicModel::LinearizedPoissonBoltzmann)),
            _ => Err(ParseEnvironmentError(s.to_string())),
        }
    }
}

/// Normalized description of the requested wavefunction.
///
/// Produced once per request by the method resolver and shared by every
/// downstream builder, so that ground-state and response specifications agree on
/// the method classification.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveFunctionSpec {
    pub method_type: MethodType,
    /// Human-readable method label, e.g. `Hartree-Fock` or `DFT (B3LYP)`.
    pub method_name: String,
    /// `None`, or `ZORA (<terms>)`.
    pub relativity_name: String,
    /// `PCM` or `None`.
    pub environment_name: String,
    /// `None`, or `Electric field (x, y, z)`.
    pub external_name: String,
    /// Lower-cased functional text. Non-empty exactly when `method_type` is DFT.
    pub dft_funcs: String,
    /// Normalized relativistic treatment; `Some` means a ZORA operator is built.
    pub zora: Option<ZoraTerms>,
    pub environment: Environment,
    pub restricted: bool,
    pub electric_field: Option<[f64; 3]>,
}
