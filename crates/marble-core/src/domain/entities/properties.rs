use crate::domain::error::DomainError;

/// Per-project properties handed to a generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Properties {
    /// Directory name of the new project.
    pub name: String,
}

impl Properties {
    /// Build properties without validating them.
    ///
    /// Generators re-check what they depend on, so this is safe to use in
    /// tests and programmatic callers.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Build properties from the raw project-name positional.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        validate_project_name(name)?;
        Ok(Self::new(name))
    }
}

/// A project name must be non-empty and must not look like a flag.
///
/// The second check catches `marble express --use-nodemon`, where the name
/// was forgotten and a flag slid into its position.
pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with("--") {
        return Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason: "do not start with dashes".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(
            Properties::parse(""),
            Err(DomainError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn flag_like_name_is_invalid() {
        assert!(matches!(
            Properties::parse("--use-nodemon"),
            Err(DomainError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn single_dash_is_allowed() {
        assert!(Properties::parse("-app").is_ok());
    }

    #[test]
    fn valid_names_pass() {
        for name in &["myapp", "my-app", "my_app", "App2"] {
            assert_eq!(Properties::parse(name).unwrap().name, *name);
        }
    }
}
