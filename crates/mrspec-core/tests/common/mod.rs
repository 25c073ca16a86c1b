use mrspec::core::input::UserConfig;

const BASE_INPUT: &str = r#"
world_prec = 1.0e-4

[Constants]
boltzmann_constant = 1.380649e-23
elementary_charge = 1.602176634e-19
e0 = 8.8541878128e-12
N_a = 6.02214076e+23
meter2bohr = 18897261246.22279
angstrom2bohrs = 1.8897261246257702
"#;

/// Parses `sections` on top of a minimal input carrying only the precision and constants.
pub fn config(sections: &str) -> UserConfig {
    toml::from_str(&format!("{}\n{}", BASE_INPUT, sections)).unwrap()
}
