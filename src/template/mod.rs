//! Template system: named snippets with `${name}` placeholders
//!
//! Templates are registered once, then looked up by name and rendered with a
//! set of bindings that supply a value for each placeholder.
//!
//! # Example
//!
//! ```rust
//! use bdd_templates::{Bindings, TemplateRegistry};
//!
//! let mut registry = TemplateRegistry::new();
//! registry.register("greet", "Hello, ${name}!", None).unwrap();
//!
//! let bindings = Bindings::new().with("name", "World");
//! assert_eq!(registry.render("greet", &bindings).unwrap(), "Hello, World!");
//! ```

mod bindings;
mod config;
mod registry;

pub use bindings::{BindingError, Bindings};
pub use config::{MissingPolicy, RenderConfig};
pub use registry::{Template, TemplateError, TemplateRegistry};
