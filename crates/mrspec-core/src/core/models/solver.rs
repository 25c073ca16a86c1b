use serde::Serialize;

/// Start and final precision of an iterative solve, with sentinels already resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecisionSchedule {
    pub start_prec: f64,
    pub final_prec: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScfSolverSpec {
    pub method: String,
    pub relativity: String,
    pub environment: String,
    pub external_field: String,
    pub kain: u32,
    pub max_iter: u32,
    pub rotation: u32,
    pub localize: bool,
    pub file_chk: String,
    pub checkpoint: bool,
    pub start_prec: f64,
    pub final_prec: f64,
    pub energy_thrs: f64,
    pub orbital_thrs: f64,
    pub helmholtz_prec: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseSolverSpec {
    pub method: String,
    pub kain: u32,
    pub max_iter: u32,
    pub file_chk_x: String,
    pub file_chk_y: String,
    pub checkpoint: bool,
    pub start_prec: f64,
    pub final_prec: f64,
    pub orbital_thrs: f64,
    pub property_thrs: f64,
    pub helmholtz_prec: f64,
    pub orth_prec: f64,
}
