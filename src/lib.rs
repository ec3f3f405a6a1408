//! BDD Templates - named code snippets with placeholder substitution
//!
//! This library provides a template registry, a parser for `${name}`
//! placeholders, and a built-in catalog of JUnit 5 snippets for writing
//! tests in Given/When/Then style.
//!
//! # Example
//!
//! ```rust
//! use bdd_templates::{render, Bindings};
//!
//! let bindings = Bindings::new()
//!     .with("actual", "result")
//!     .with("expected", "42");
//! let java = render("assertthat", &bindings).unwrap();
//! assert_eq!(java, "assertThat(result).isEqualTo(42);");
//! ```

use std::sync::OnceLock;

pub mod catalog;
pub mod error;
pub mod parser;
pub mod template;

pub use catalog::{Catalog, CatalogEntry, CatalogError};
pub use error::ParseError;
pub use template::{
    BindingError, Bindings, MissingPolicy, RenderConfig, Template, TemplateError,
    TemplateRegistry,
};

/// Render a template from the built-in catalog with the strict policy
///
/// # Example
///
/// ```rust
/// use bdd_templates::{render, Bindings, TemplateError};
///
/// let err = render("assertthat", &Bindings::new()).unwrap_err();
/// assert!(matches!(err, TemplateError::MissingBinding { .. }));
/// ```
pub fn render(name: &str, bindings: &Bindings) -> Result<String, TemplateError> {
    render_with_config(name, bindings, &RenderConfig::default())
}

/// Render a template from the built-in catalog with a custom configuration
///
/// # Example
///
/// ```rust
/// use bdd_templates::{render_with_config, Bindings, RenderConfig};
///
/// let java = render_with_config(
///     "assertthat",
///     &Bindings::new().with("actual", "total"),
///     &RenderConfig::lenient(),
/// )
/// .unwrap();
/// assert_eq!(java, "assertThat(total).isEqualTo(${expected});");
/// ```
pub fn render_with_config(
    name: &str,
    bindings: &Bindings,
    config: &RenderConfig,
) -> Result<String, TemplateError> {
    builtin_registry()?.render_with(name, bindings, config)
}

/// The built-in registry, built on first use and shared afterwards
fn builtin_registry() -> Result<&'static TemplateRegistry, TemplateError> {
    static BUILTIN: OnceLock<TemplateRegistry> = OnceLock::new();

    if let Some(registry) = BUILTIN.get() {
        return Ok(registry);
    }
    let registry = TemplateRegistry::builtin()?;
    Ok(BUILTIN.get_or_init(|| registry))
}
