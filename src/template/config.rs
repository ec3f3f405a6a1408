//! Configuration for template rendering

/// What to do with a placeholder that has no binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// Fail with `TemplateError::MissingBinding` naming the first unresolved placeholder
    #[default]
    Strict,
    /// Leave the `${name}` token verbatim in the output
    Keep,
}

/// Configuration options for rendering
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Policy for unresolved placeholders
    pub missing: MissingPolicy,
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy for unresolved placeholders
    pub fn with_missing_policy(mut self, policy: MissingPolicy) -> Self {
        self.missing = policy;
        self
    }

    /// Fail on unresolved placeholders
    pub fn strict() -> Self {
        Self::new().with_missing_policy(MissingPolicy::Strict)
    }

    /// Keep unresolved placeholders verbatim
    pub fn lenient() -> Self {
        Self::new().with_missing_policy(MissingPolicy::Keep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_strict() {
        assert_eq!(RenderConfig::default().missing, MissingPolicy::Strict);
    }

    #[test]
    fn test_builder_pattern() {
        let config = RenderConfig::new().with_missing_policy(MissingPolicy::Keep);
        assert_eq!(config.missing, MissingPolicy::Keep);
        assert_eq!(RenderConfig::lenient().missing, MissingPolicy::Keep);
        assert_eq!(RenderConfig::strict().missing, MissingPolicy::Strict);
    }
}
