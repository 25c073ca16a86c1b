//! Typed schema of the user-authored input.
//!
//! Every section of the hierarchical input is a record with explicit fields and
//! documented defaults, so the resolvers never probe a nested map by string key.
//! The schema derives [`serde::Deserialize`]; reading and parsing the input file
//! itself is left to the caller.

mod defaults;
mod sections;

pub use sections::*;

use serde::Deserialize;

/// The complete, frozen user input for one calculation request.
///
/// Resolution borrows this value immutably; nothing in the crate rewrites it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    /// Relative precision of the multiresolution representation.
    pub world_prec: f64,
    #[serde(default)]
    pub world_unit: WorldUnit,
    /// Gauge origin for field and property operators, in bohr.
    #[serde(default)]
    pub world_origin: [f64; 3],
    #[serde(rename = "WaveFunction")]
    pub wavefunction: WaveFunctionInput,
    #[serde(rename = "ZORA", default)]
    pub zora: ZoraInput,
    #[serde(rename = "DFT", default)]
    pub dft: DftInput,
    #[serde(rename = "Precisions", default)]
    pub precisions: PrecisionsInput,
    #[serde(rename = "Derivatives", default)]
    pub derivatives: DerivativesInput,
    #[serde(rename = "MPI", default)]
    pub mpi: MpiInput,
    #[serde(rename = "SCF", default)]
    pub scf: ScfInput,
    #[serde(rename = "Response", default)]
    pub response: ResponseInput,
    #[serde(rename = "PCM", default)]
    pub pcm: PcmInput,
    #[serde(rename = "ExternalFields", default)]
    pub external_fields: ExternalFieldsInput,
    #[serde(rename = "Properties", default)]
    pub properties: PropertiesInput,
    #[serde(rename = "Polarizability", default)]
    pub polarizability: PolarizabilityInput,
    #[serde(rename = "Plotter", default)]
    pub plotter: PlotterInput,
    #[serde(rename = "Files", default)]
    pub files: FilesInput,
    #[serde(rename = "OrbitalOccupancies", default)]
    pub orbital_occupancies: OrbitalOccupanciesInput,
    #[serde(rename = "Constants")]
    pub constants: Constants,
}

impl UserConfig {
    pub fn nuclear_prec(&self) -> f64 {
        self.precisions.nuclear_prec.unwrap_or(self.world_prec)
    }

    pub fn poisson_prec(&self) -> f64 {
        self.precisions.poisson_prec.unwrap_or(self.world_prec)
    }

    pub fn exchange_prec(&self) -> f64 {
        self.precisions.exchange_prec.unwrap_or(self.world_prec)
    }

    pub fn helmholtz_prec(&self) -> f64 {
        self.precisions.helmholtz_prec.unwrap_or(self.world_prec)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{MINIMAL_INPUT, minimal_config};
    use super::*;

    #[test]
    fn minimal_input_fills_every_section_with_defaults() {
        let config = minimal_config();

        assert_eq!(config.world_unit, WorldUnit::Bohr);
        assert_eq!(config.world_origin, [0.0; 3]);
        assert_eq!(config.wavefunction.relativity, "none");
        assert_eq!(config.wavefunction.environment, "none");
        assert!(config.wavefunction.restricted);
        assert_eq!(config.scf.guess_type, "sad_gto");
        assert_eq!(config.scf.final_prec, -1.0);
        assert_eq!(config.response.run, [true; 3]);
        assert_eq!(config.pcm.scrf.density_type, "total");
        assert!(config.external_fields.electric_field.is_empty());
        assert_eq!(config.polarizability.frequency, vec![0.0]);
        assert_eq!(config.files.guess_phi_p, "initial_guess/phi_p");
    }

    #[test]
    fn absent_precisions_fall_back_to_world_precision() {
        let mut config = minimal_config();
        config.precisions.poisson_prec = Some(1.0e-6);

        assert_eq!(config.nuclear_prec(), 1.0e-4);
        assert_eq!(config.poisson_prec(), 1.0e-6);
        assert_eq!(config.exchange_prec(), 1.0e-4);
        assert_eq!(config.helmholtz_prec(), 1.0e-4);
    }

    #[test]
    fn nested_solvent_section_is_read_with_wire_names() {
        let input = format!(
            "{}\n{}",
            MINIMAL_INPUT,
            r#"
            [PCM.SCRF]
            density_type = "electronic"

            [PCM.Solvent.Permittivity.epsilon_out]
            static = 78.39
            dynamic = 1.776

            [PCM.Solvent.DebyeHuckelScreening]
            ion_strength = 0.5
            "#
        );
        let config: UserConfig = toml::from_str(&input).unwrap();

        assert_eq!(config.pcm.scrf.density_type, "electronic");
        let eps = config.pcm.solvent.permittivity.epsilon_out;
        assert_eq!(eps.static_permittivity, 78.39);
        assert_eq!(eps.dynamic_permittivity, 1.776);
        assert_eq!(config.pcm.solvent.debye_huckel.ion_strength, 0.5);
        assert_eq!(config.pcm.solvent.debye_huckel.formulation, "variable");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let input = format!("{}\n[SCF]\nguess_typo = \"chk\"\n", MINIMAL_INPUT);
        let result: Result<UserConfig, _> = toml::from_str(&input);
        assert!(result.is_err());
    }

    #[test]
    fn missing_constants_are_rejected() {
        let input = "world_prec = 1.0e-4\n[WaveFunction]\nmethod = \"hf\"\n";
        let result: Result<UserConfig, _> = toml::from_str(input);
        assert!(result.is_err());
    }
}
