use crate::core::models::guess::ZetaLevel;
use phf::{Map, Set, phf_map, phf_set};

/// Functional names accepted directly as a method token.
pub static SHORTHAND_FUNCTIONALS: Set<&'static str> = phf_set! {
    "svwn3", "svwn5", "pbe", "pbe0", "bpw91", "bp86", "b3p86", "b3p86-g",
    "blyp", "b3lyp", "b3lyp-g", "olyp", "kt1", "kt2", "kt3",
};

static ZETA_CODES: Map<&'static str, ZetaLevel> = phf_map! {
    "sz" => ZetaLevel::Single,
    "dz" => ZetaLevel::Double,
    "tz" => ZetaLevel::Triple,
    "qz" => ZetaLevel::Quadruple,
};

static HARTREE_FOCK_ALIASES: Set<&'static str> = phf_set! {
    "hf", "hartree-fock", "hartreefock",
};

pub fn is_shorthand_functional(token: &str) -> bool {
    SHORTHAND_FUNCTIONALS.contains(token)
}

pub fn is_hartree_fock_alias(token: &str) -> bool {
    HARTREE_FOCK_ALIASES.contains(token)
}

pub fn zeta_level(code: &str) -> Option<ZetaLevel> {
    ZETA_CODES.get(code).copied()
}
