//! Template registry for storing, retrieving and rendering template definitions

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, warn};

use crate::error::ParseError;
use crate::parser::{self, Segment};

use super::bindings::Bindings;
use super::config::{MissingPolicy, RenderConfig};

/// Errors that can occur during template operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// Duplicate template definition
    #[error("duplicate template definition: {name}")]
    DuplicateName { name: String },

    /// Template not found in registry
    #[error("unknown template: {name}")]
    NotFound { name: String },

    /// Placeholder without a binding under the strict policy
    #[error("missing binding for placeholder '{placeholder}' in template {template}")]
    MissingBinding {
        template: String,
        placeholder: String,
    },

    /// Template body contains an invalid placeholder token
    #[error("malformed placeholder in template {template}: {source}")]
    MalformedPlaceholder {
        template: String,
        body: String,
        #[source]
        source: ParseError,
    },
}

impl TemplateError {
    /// Annotated source report for errors that point into a template body
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            TemplateError::MalformedPlaceholder {
                template,
                body,
                source,
            } => Some(source.format(body, template)),
            _ => None,
        }
    }
}

/// A stored template definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    body: String,
    description: Option<String>,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a body and build a template from it
    pub fn new(
        name: impl Into<String>,
        body: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, TemplateError> {
        let name = name.into();
        let body = body.into();
        let segments = match parser::parse(&body) {
            Ok(segments) => segments,
            Err(source) => {
                return Err(TemplateError::MalformedPlaceholder {
                    template: name,
                    body,
                    source,
                })
            }
        };

        Ok(Self {
            name,
            body,
            description,
            segments,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The body exactly as registered
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Distinct placeholder identifiers in order of first appearance
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder { name, .. } = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Substitute bindings into the body
    pub fn render(
        &self,
        bindings: &Bindings,
        config: &RenderConfig,
    ) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(self.body.len());

        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Placeholder { name, span } => match bindings.get(name) {
                    Some(value) => out.push_str(value),
                    None => match config.missing {
                        MissingPolicy::Strict => {
                            return Err(TemplateError::MissingBinding {
                                template: self.name.clone(),
                                placeholder: name.clone(),
                            })
                        }
                        MissingPolicy::Keep => {
                            warn!(
                                template = %self.name,
                                placeholder = %name,
                                "leaving placeholder unresolved"
                            );
                            out.push_str(&self.body[span.clone()]);
                        }
                    },
                },
            }
        }

        Ok(out)
    }
}

/// Registry for storing template definitions
///
/// Registration needs `&mut self`; lookups and rendering only need `&self`,
/// so a fully built registry can be shared behind an `Arc` and read from any
/// number of threads without locking.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, Template>,
    config: RenderConfig,
}

impl TemplateRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty registry with a render configuration
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            templates: BTreeMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Set the render configuration used by [`TemplateRegistry::render`]
    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
    }

    /// Register a template from its parts
    pub fn register(
        &mut self,
        name: impl Into<String>,
        body: impl Into<String>,
        description: Option<String>,
    ) -> Result<(), TemplateError> {
        let name = name.into();
        if self.templates.contains_key(&name) {
            return Err(TemplateError::DuplicateName { name });
        }

        let template = Template::new(name, body, description)?;
        self.insert(template);
        Ok(())
    }

    /// Register an already parsed template
    pub fn register_template(&mut self, template: Template) -> Result<(), TemplateError> {
        if self.templates.contains_key(template.name()) {
            return Err(TemplateError::DuplicateName {
                name: template.name,
            });
        }
        self.insert(template);
        Ok(())
    }

    fn insert(&mut self, template: Template) {
        debug!(
            template = %template.name,
            placeholders = template.placeholders().len(),
            "registered template"
        );
        self.templates.insert(template.name.clone(), template);
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Result<&Template, TemplateError> {
        self.templates.get(name).ok_or_else(|| TemplateError::NotFound {
            name: name.to_string(),
        })
    }

    /// Check if a template exists
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// All template names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(|s| s.as_str())
    }

    /// All templates in name order
    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Render a template with the registry's configuration
    pub fn render(&self, name: &str, bindings: &Bindings) -> Result<String, TemplateError> {
        self.render_with(name, bindings, &self.config)
    }

    /// Render a template with an explicit configuration
    pub fn render_with(
        &self,
        name: &str,
        bindings: &Bindings,
        config: &RenderConfig,
    ) -> Result<String, TemplateError> {
        let template = self.get(name)?;
        debug!(template = name, bindings = bindings.len(), "rendering template");
        template.render(bindings, config)
    }
}
