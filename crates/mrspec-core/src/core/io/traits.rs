use crate::core::input::UserConfig;
use crate::core::models::response::Direction;
use std::path::Path;

/// Checks whether a guess artifact exists on disk.
///
/// The check is single-shot: a negative answer is final for the current
/// resolution and selects a fallback strategy, it is never retried.
pub trait ArtifactProbe {
    /// Returns `true` if a regular file exists at `path`.
    ///
    /// # Arguments
    ///
    /// * `path` - The artifact path to check.
    fn exists(&self, path: &Path) -> bool;
}

/// Locates cube-file guess vectors for a calculation.
///
/// Implementors may stage the discovered vectors (for example convert them into
/// the files referenced by `Files.cube_vectors`) as a side effect, so that the
/// numerical engine finds them later.
pub trait GuessDiscovery {
    /// Searches for guess vectors.
    ///
    /// # Arguments
    ///
    /// * `config` - The frozen user input.
    /// * `direction` - `None` for ground-state orbitals, or the Cartesian direction
    ///   of a response component.
    ///
    /// # Return
    ///
    /// Returns `true` if matching guess vectors were found.
    fn discover(&self, config: &UserConfig, direction: Option<Direction>) -> bool;
}

impl<F> ArtifactProbe for F
where
    F: Fn(&Path) -> bool,
{
    fn exists(&self, path: &Path) -> bool {
        self(path)
    }
}

impl<F> GuessDiscovery for F
where
    F: Fn(&UserConfig, Option<Direction>) -> bool,
{
    fn discover(&self, config: &UserConfig, direction: Option<Direction>) -> bool {
        self(config, direction)
    }
}
