//! Environment checks that run before any argument is looked at.

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DependencyRegistry, DomainError, Platform},
    error::MarbleResult,
};

/// Verifies the platform and the presence of required binaries.
pub struct Preflight<'a> {
    dependencies: &'a DependencyRegistry,
    filesystem: &'a dyn Filesystem,
}

impl<'a> Preflight<'a> {
    pub fn new(dependencies: &'a DependencyRegistry, filesystem: &'a dyn Filesystem) -> Self {
        Self {
            dependencies,
            filesystem,
        }
    }

    /// Fail on the first unmet precondition.
    #[instrument(skip(self))]
    pub fn check(&self, platform: &Platform) -> MarbleResult<()> {
        if !platform.is_supported() {
            return Err(DomainError::UnsupportedPlatform {
                platform: platform.to_string(),
            }
            .into());
        }

        for dependency in self.dependencies.iter() {
            let path = dependency.location_for(platform).ok_or_else(|| {
                DomainError::UnsupportedPlatform {
                    platform: platform.to_string(),
                }
            })?;

            if !self.filesystem.exists(path) {
                return Err(ApplicationError::DependencyMissing {
                    name: dependency.name.to_string(),
                    path: path.to_path_buf(),
                }
                .into());
            }
            debug!(dependency = dependency.name, path = %path.display(), "Dependency found");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::{
        application::ports::MockFilesystem,
        domain::DependencySpec,
        error::MarbleError,
    };

    #[test]
    fn unsupported_platform_fails_before_lookups() {
        let fs = MockFilesystem::new();
        let deps = DependencyRegistry::builtin();
        let err = Preflight::new(&deps, &fs)
            .check(&Platform::MacOs)
            .unwrap_err();
        assert!(matches!(
            err,
            MarbleError::Domain(DomainError::UnsupportedPlatform { .. })
        ));
    }

    #[test]
    fn all_present_passes() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().times(2).return_const(true);
        let deps = DependencyRegistry::builtin();
        assert!(Preflight::new(&deps, &fs).check(&Platform::Linux).is_ok());
    }

    #[test]
    fn missing_binary_is_named() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p != Path::new("/usr/bin/yarnpkg"));
        let deps = DependencyRegistry::builtin();
        let err = Preflight::new(&deps, &fs)
            .check(&Platform::Linux)
            .unwrap_err();
        assert_eq!(
            err,
            MarbleError::Application(ApplicationError::DependencyMissing {
                name: "yarn".into(),
                path: PathBuf::from("/usr/bin/yarnpkg"),
            })
        );
    }

    #[test]
    fn dependency_without_location_for_platform_is_unsupported() {
        let fs = MockFilesystem::new();
        let deps = DependencyRegistry::new(vec![DependencySpec::new("jq")]);
        let err = Preflight::new(&deps, &fs)
            .check(&Platform::Linux)
            .unwrap_err();
        assert!(matches!(
            err,
            MarbleError::Domain(DomainError::UnsupportedPlatform { .. })
        ));
    }

    #[test]
    fn empty_registry_passes_on_linux() {
        let fs = MockFilesystem::new();
        let deps = DependencyRegistry::default();
        assert!(Preflight::new(&deps, &fs).check(&Platform::Linux).is_ok());
    }
}
