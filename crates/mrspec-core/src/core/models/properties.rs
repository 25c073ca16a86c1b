use serde::Serialize;

/// Post-convergence properties requested for the ground state.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PropertySpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dipole_moment: Option<DipoleMomentSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quadrupole_moment: Option<QuadrupoleMomentSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometric_derivative: Option<GeometricDerivativeSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DipoleMomentSpec {
    #[serde(rename = "dip-1")]
    pub dip_1: MomentOperatorSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadrupoleMomentSpec {
    #[serde(rename = "quad-1")]
    pub quad_1: MomentOperatorSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometricDerivativeSpec {
    #[serde(rename = "geom-1")]
    pub geom_1: NuclearGradientSpec,
}

/// A multipole operator evaluated about a gauge origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MomentOperatorSpec {
    pub operator: &'static str,
    pub precision: f64,
    #[serde(rename = "r_O")]
    pub origin: [f64; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NuclearGradientSpec {
    pub operator: &'static str,
    pub precision: f64,
    pub smoothing: f64,
}

/// Cube plots of orbitals and/or the density.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSpec {
    pub orbitals: Vec<i64>,
    pub density: bool,
    pub plotter: PlotterSpec,
}

/// Sampling parallelepiped, in bohr.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotterSpec {
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
