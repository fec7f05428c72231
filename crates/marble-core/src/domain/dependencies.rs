//! External binaries Marble expects to find before it does anything.

use std::path::Path;

use crate::domain::value_objects::Platform;

/// One required binary and where it lives on each platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    pub name: &'static str,
    pub locations: Vec<(Platform, &'static str)>,
}

impl DependencySpec {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            locations: Vec::new(),
        }
    }

    pub fn at(mut self, platform: Platform, path: &'static str) -> Self {
        self.locations.push((platform, path));
        self
    }

    /// Expected location on `platform`, if one is known.
    pub fn location_for(&self, platform: &Platform) -> Option<&Path> {
        self.locations
            .iter()
            .find(|(p, _)| p == platform)
            .map(|(_, path)| Path::new(*path))
    }
}

/// Immutable list of required binaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyRegistry {
    dependencies: Vec<DependencySpec>,
}

impl DependencyRegistry {
    pub fn new(dependencies: Vec<DependencySpec>) -> Self {
        Self { dependencies }
    }

    /// `jq` and `yarn`, at their Debian/Ubuntu package locations.
    pub fn builtin() -> Self {
        Self::new(vec![
            DependencySpec::new("jq").at(Platform::Linux, "/usr/bin/jq"),
            DependencySpec::new("yarn").at(Platform::Linux, "/usr/bin/yarnpkg"),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &DependencySpec> {
        self.dependencies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_locations_are_linux_only() {
        let registry = DependencyRegistry::builtin();
        let jq = registry.iter().find(|d| d.name == "jq").unwrap();
        assert_eq!(
            jq.location_for(&Platform::Linux),
            Some(Path::new("/usr/bin/jq"))
        );
        assert_eq!(jq.location_for(&Platform::MacOs), None);
    }

    #[test]
    fn yarn_is_looked_up_as_yarnpkg() {
        let registry = DependencyRegistry::builtin();
        let yarn = registry.iter().find(|d| d.name == "yarn").unwrap();
        assert_eq!(
            yarn.location_for(&Platform::Linux),
            Some(Path::new("/usr/bin/yarnpkg"))
        );
    }
}
