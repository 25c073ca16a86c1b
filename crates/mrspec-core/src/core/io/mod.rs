//! Boundaries to the filesystem and to guess-vector discovery.
//!
//! Resolution only ever asks two questions of the outside world: does a
//! checkpoint artifact exist, and can guess vectors be discovered. Both are
//! expressed as traits so callers can substitute their own collaborators.

pub mod artifacts;
pub mod traits;
