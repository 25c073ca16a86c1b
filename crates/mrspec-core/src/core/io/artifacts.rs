use super::traits::{ArtifactProbe, GuessDiscovery};
use crate::core::input::UserConfig;
use crate::core::models::response::Direction;
use std::path::{Path, PathBuf};

/// Probes the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemProbe;

impl ArtifactProbe for FileSystemProbe {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// A discovery collaborator that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiscovery;

impl GuessDiscovery for NoDiscovery {
    fn discover(&self, _config: &UserConfig, _direction: Option<Direction>) -> bool {
        false
    }
}

/// Path stem of ground-state orbital checkpoints.
pub fn scf_checkpoint_stem(checkpoint_dir: &str) -> String {
    format!("{}/phi_scf", checkpoint_dir)
}

/// Metadata file of the first checkpointed orbital; its presence marks a usable restart.
pub fn scf_checkpoint_marker(checkpoint_dir: &str) -> PathBuf {
    PathBuf::from(format!("{}_idx_0.meta", scf_checkpoint_stem(checkpoint_dir)))
}

/// Checkpoint paths of the X and Y response vectors of one direction.
pub fn response_checkpoints(checkpoint_dir: &str, direction: Direction) -> (String, String) {
    (
        format!("{}/X_rsp_{}", checkpoint_dir, direction),
        format!("{}/Y_rsp_{}", checkpoint_dir, direction),
    )
}
