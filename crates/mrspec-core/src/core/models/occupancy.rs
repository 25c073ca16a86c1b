use serde::Serialize;

/// Occupation of one orbital. Serialized as a one- or two-element list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Occupation {
    /// Shared occupation of a restricted orbital.
    Restricted([f64; 1]),
    /// Separate alpha and beta occupations.
    Unrestricted([f64; 2]),
}

/// A user override of the occupation of a single orbital.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OccupancyRecord {
    pub orbital: usize,
    pub occupancy: Occupation,
}
