use super::diagnostics::{Diagnostic, DiagnosticReporter};
use crate::core::input::UserConfig;
use crate::core::io::artifacts::{FileSystemProbe, NoDiscovery};
use crate::core::io::traits::{ArtifactProbe, GuessDiscovery};
use crate::core::models::response::Direction;
use std::path::Path;

/// External collaborators consulted during resolution.
///
/// The resolvers never touch the filesystem directly; artifact checks, cube
/// discovery and fallback diagnostics all go through this value, which lets
/// callers substitute any of them.
pub struct ResolveEnvironment<'a> {
    probe: Box<dyn ArtifactProbe + 'a>,
    discovery: Box<dyn GuessDiscovery + 'a>,
    reporter: DiagnosticReporter<'a>,
}

impl<'a> ResolveEnvironment<'a> {
    pub fn builder() -> ResolveEnvironmentBuilder<'a> {
        ResolveEnvironmentBuilder::new()
    }

    pub fn artifact_exists(&self, path: &Path) -> bool {
        self.probe.exists(path)
    }

    pub fn discover(&self, config: &UserConfig, direction: Option<Direction>) -> bool {
        self.discovery.discover(config, direction)
    }

    pub fn report(&self, diagnostic: Diagnostic) {
        self.reporter.report(diagnostic);
    }
}

impl Default for ResolveEnvironment<'_> {
    fn default() -> Self {
        ResolveEnvironmentBuilder::new().build()
    }
}

#[derive(Default)]
pub struct ResolveEnvironmentBuilder<'a> {
    probe: Option<Box<dyn ArtifactProbe + 'a>>,
    discovery: Option<Box<dyn GuessDiscovery + 'a>>,
    reporter: Option<DiagnosticReporter<'a>>,
}

impl<'a> ResolveEnvironmentBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn probe(mut self, probe: impl ArtifactProbe + 'a) -> Self {
        self.probe = Some(Box::new(probe));
        self
    }
    pub fn discovery(mut self, discovery: impl GuessDiscovery + 'a) -> Self {
        self.discovery = Some(Box::new(discovery));
        self
    }
    pub fn reporter(mut self, reporter: DiagnosticReporter<'a>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Fills unset collaborators with the filesystem probe, a discovery that
    /// never finds anything, and a reporter that only logs.
    pub fn build(self) -> ResolveEnvironment<'a> {
        ResolveEnvironment {
            probe: self.probe.unwrap_or_else(|| Box::new(FileSystemProbe)),
            discovery: self.discovery.unwrap_or_else(|| Box::new(NoDiscovery)),
            reporter: self.reporter.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::fixtures::minimal_config;
    use std::cell::Cell;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_probe_real_files_and_find_no_cubes() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("X_rsp_0");
        fs::write(&file_path, "").unwrap();

        let env = ResolveEnvironment::default();
        assert!(env.artifact_exists(&file_path));
        assert!(!env.artifact_exists(&dir.path().join("Y_rsp_0")));
        assert!(!env.discover(&minimal_config(), None));
    }

    #[test]
    fn builder_installs_closure_collaborators() {
        let calls = Cell::new(0);
        let env = ResolveEnvironment::builder()
            .probe(|_: &Path| true)
            .discovery(|_: &UserConfig, direction: Option<Direction>| {
                calls.set(calls.get() + 1);
                direction == Some(Direction::Y)
            })
            .build();

        let config = minimal_config();
        assert!(env.artifact_exists(Path::new("does/not/exist")));
        assert!(!env.discover(&config, None));
        assert!(env.discover(&config, Some(Direction::Y)));
        drop(env);
        assert_eq!(calls.get(), 2);
    }
}
