use super::defaults;
use serde::Deserialize;

/// Length unit in which the user wrote coordinates and plot ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorldUnit {
    /// Atomic units; no conversion is applied.
    #[default]
    Bohr,
    /// Ångström; plot ranges are converted with `Constants::angstrom2bohrs`.
    Angstrom,
}

/// The `WaveFunction` section: which electronic-structure model to run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaveFunctionInput {
    /// Method token, e.g. `hf`, `dft`, `lda` or a shorthand functional like `b3lyp`.
    pub method: String,
    /// Relativity token: `none`, `off`, `zora` or `nzora`.
    #[serde(default = "defaults::relativity")]
    pub relativity: String,
    /// Environment token: `none`, `pcm`, `pcm_pb` or `pcm_lpb`.
    #[serde(default = "defaults::environment")]
    pub environment: String,
    /// Whether spin-up and spin-down orbitals share their spatial part.
    #[serde(default = "defaults::enabled")]
    pub restricted: bool,
    /// Nuclear charge model handed to the nuclear operator.
    #[serde(default = "defaults::nuclear_model")]
    pub nuclear_model: String,
}

/// The `ZORA` section: which potentials enter the relativistic kernel.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZoraInput {
    pub include_nuclear: bool,
    pub include_coulomb: bool,
    pub include_xc: bool,
}

impl Default for ZoraInput {
    fn default() -> Self {
        Self {
            include_nuclear: true,
            include_coulomb: true,
            include_xc: true,
        }
    }
}

/// The `DFT` section.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DftInput {
    /// Newline-delimited list of `<functional> [coefficient]` lines.
    pub functionals: String,
    pub spin: bool,
    pub density_cutoff: f64,
}

/// The `Precisions` section. Absent entries fall back to the world precision.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrecisionsInput {
    pub nuclear_prec: Option<f64>,
    pub poisson_prec: Option<f64>,
    pub exchange_prec: Option<f64>,
    pub helmholtz_prec: Option<f64>,
}

/// The `Derivatives` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DerivativesInput {
    pub kinetic: String,
}

impl Default for DerivativesInput {
    fn default() -> Self {
        Self {
            kinetic: defaults::kinetic_derivative(),
        }
    }
}

/// The `MPI` section: which potentials live in shared memory.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MpiInput {
    pub share_nuclear_potential: bool,
    pub share_coulomb_potential: bool,
    pub share_xc_potential: bool,
}

/// The `SCF` section: ground-state guess and solver settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScfInput {
    /// Compound guess token such as `sad_dz`, `core_gto`, `chk` or `cube`.
    pub guess_type: String,
    pub guess_prec: f64,
    pub guess_screen: f64,
    pub guess_rotate: bool,
    pub localize: bool,
    pub rotation: u32,
    pub kain: u32,
    pub max_iter: u32,
    /// Negative means "use `final_prec`".
    pub start_prec: f64,
    /// Negative means "use the world precision".
    pub final_prec: f64,
    pub energy_thrs: f64,
    pub orbital_thrs: f64,
    pub path_checkpoint: String,
    pub write_checkpoint: bool,
}

impl Default for ScfInput {
    fn default() -> Self {
        Self {
            guess_type: "sad_gto".to_string(),
            guess_prec: 1.0e-3,
            guess_screen: 12.0,
            guess_rotate: true,
            localize: false,
            rotation: 0,
            kain: 5,
            max_iter: 100,
            start_prec: -1.0,
            final_prec: -1.0,
            energy_thrs: -1.0,
            orbital_thrs: -1.0,
            path_checkpoint: defaults::checkpoint_dir(),
            write_checkpoint: false,
        }
    }
}

/// The `Response` section: linear-response guess and solver settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResponseInput {
    pub guess_type: String,
    pub guess_prec: f64,
    pub localize: bool,
    pub kain: u32,
    pub max_iter: u32,
    pub start_prec: f64,
    pub final_prec: f64,
    pub orbital_thrs: f64,
    pub property_thrs: f64,
    pub path_checkpoint: String,
    pub write_checkpoint: bool,
    pub write_orbitals: bool,
    pub path_orbitals: String,
    /// Which Cartesian directions (x, y, z) get a solver.
    pub run: [bool; 3],
}

impl Default for ResponseInput {
    fn default() -> Self {
        Self {
            guess_type: "none".to_string(),
            guess_prec: 1.0e-3,
            localize: false,
            kain: 5,
            max_iter: 100,
            start_prec: -1.0,
            final_prec: -1.0,
            orbital_thrs: -1.0,
            property_thrs: -1.0,
            path_checkpoint: defaults::checkpoint_dir(),
            write_checkpoint: false,
            write_orbitals: false,
            path_orbitals: "orbitals".to_string(),
            run: [true; 3],
        }
    }
}

/// The `PCM` section: continuum solvent model.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PcmInput {
    #[serde(rename = "SCRF")]
    pub scrf: ScrfInput,
    #[serde(rename = "Solvent")]
    pub solvent: SolventInput,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrfInput {
    /// `total`, `electronic`, or anything else (nuclear only).
    pub density_type: String,
    pub kain: u32,
    pub max_iter: u32,
    pub dynamic_thrs: bool,
}

impl Default for ScrfInput {
    fn default() -> Self {
        Self {
            density_type: "total".to_string(),
            kain: 5,
            max_iter: 100,
            dynamic_thrs: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolventInput {
    #[serde(rename = "Permittivity")]
    pub permittivity: PermittivityInput,
    #[serde(rename = "DebyeHuckelScreening")]
    pub debye_huckel: DebyeHuckelInput,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PermittivityInput {
    pub epsilon_in: f64,
    pub epsilon_out: EpsilonOutInput,
    pub formulation: String,
}

impl Default for PermittivityInput {
    fn default() -> Self {
        Self {
            epsilon_in: 1.0,
            epsilon_out: EpsilonOutInput::default(),
            formulation: "exponential".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EpsilonOutInput {
    #[serde(rename = "static")]
    pub static_permittivity: f64,
    #[serde(rename = "dynamic")]
    pub dynamic_permittivity: f64,
    pub nonequilibrium: bool,
}

impl Default for EpsilonOutInput {
    fn default() -> Self {
        Self {
            static_permittivity: 1.0,
            dynamic_permittivity: 1.0,
            nonequilibrium: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DebyeHuckelInput {
    /// Ionic strength in mol/L.
    pub ion_strength: f64,
    pub ion_radius: f64,
    pub ion_width: f64,
    pub formulation: String,
}

impl Default for DebyeHuckelInput {
    fn default() -> Self {
        Self {
            ion_strength: 1.0,
            ion_radius: 0.0,
            ion_width: 0.2,
            formulation: "variable".to_string(),
        }
    }
}

/// The `ExternalFields` section. An empty list means no field.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExternalFieldsInput {
    pub electric_field: Vec<f64>,
}

/// The `Properties` section: what to compute after convergence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PropertiesInput {
    pub dipole_moment: bool,
    pub quadrupole_moment: bool,
    pub geometric_derivative: bool,
    pub polarizability: bool,
    pub plot_density: bool,
    pub plot_orbitals: Vec<i64>,
}

impl Default for PropertiesInput {
    fn default() -> Self {
        Self {
            dipole_moment: true,
            quadrupole_moment: false,
            geometric_derivative: false,
            polarizability: false,
            plot_density: false,
            plot_orbitals: Vec::new(),
        }
    }
}

/// The `Polarizability` section: perturbing field frequencies.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolarizabilityInput {
    pub frequency: Vec<f64>,
}

impl Default for PolarizabilityInput {
    fn default() -> Self {
        Self {
            frequency: vec![0.0],
        }
    }
}

/// The `Plotter` section: the parallelepiped sampled by cube plots.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotterInput {
    pub points: [u32; 3],
    #[serde(rename = "O")]
    pub origin: [f64; 3],
    #[serde(rename = "A")]
    pub a: [f64; 3],
    #[serde(rename = "B")]
    pub b: [f64; 3],
    #[serde(rename = "C")]
    pub c: [f64; 3],
}

impl Default for PlotterInput {
    fn default() -> Self {
        Self {
            points: [20, 20, 20],
            origin: [-4.0, -4.0, -4.0],
            a: [8.0, 0.0, 0.0],
            b: [0.0, 8.0, 0.0],
            c: [0.0, 0.0, 8.0],
        }
    }
}

/// The `Files` section: path stems of guess artifacts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilesInput {
    pub guess_basis: String,
    pub guess_gto_p: String,
    pub guess_gto_a: String,
    pub guess_gto_b: String,
    pub guess_phi_p: String,
    pub guess_phi_a: String,
    pub guess_phi_b: String,
    pub guess_x_p: String,
    pub guess_x_a: String,
    pub guess_x_b: String,
    pub guess_y_p: String,
    pub guess_y_a: String,
    pub guess_y_b: String,
    /// Directory prefix (with trailing separator) of discovered cube vectors.
    pub cube_vectors: String,
}

impl Default for FilesInput {
    fn default() -> Self {
        let guess = |stem: &str| format!("{}/{}", defaults::GUESS_DIR, stem);
        Self {
            guess_basis: guess("mrchem.bas"),
            guess_gto_p: guess("mrchem.mop"),
            guess_gto_a: guess("mrchem.moa"),
            guess_gto_b: guess("mrchem.mob"),
            guess_phi_p: guess("phi_p"),
            guess_phi_a: guess("phi_a"),
            guess_phi_b: guess("phi_b"),
            guess_x_p: guess("X_p"),
            guess_x_a: guess("X_a"),
            guess_x_b: guess("X_b"),
            guess_y_p: guess("Y_p"),
            guess_y_a: guess("Y_a"),
            guess_y_b: guess("Y_b"),
            cube_vectors: "cube_vectors/".to_string(),
        }
    }
}

/// The `OrbitalOccupancies` section.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrbitalOccupanciesInput {
    pub occupancies: String,
}

/// Physical constants and unit conversions, always supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Constants {
    /// J/K
    pub boltzmann_constant: f64,
    /// C
    pub elementary_charge: f64,
    /// Vacuum permittivity, F/m.
    pub e0: f64,
    /// Avogadro's number, 1/mol.
    #[serde(rename = "N_a")]
    pub avogadro: f64,
    pub meter2bohr: f64,
    pub angstrom2bohrs: f64,
}
