//! Template catalogs loaded from TOML
//!
//! A catalog is a list of template definitions. The default catalog carries
//! the JUnit 5 snippets for writing tests in Given/When/Then style; extra
//! catalogs can be layered on top from files.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::template::{Template, TemplateError, TemplateRegistry};

/// Errors that can occur when loading catalogs
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse catalog TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// A single template definition in a catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogEntry {
    pub name: String,
    pub description: Option<String>,
    pub body: String,
}

/// A list of template definitions with optional metadata
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Optional name for the catalog
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Template definitions in file order
    pub entries: Vec<CatalogEntry>,
}

/// TOML structure for deserializing catalogs
#[derive(Deserialize)]
struct TomlCatalog {
    metadata: Option<TomlMetadata>,
    #[serde(default, rename = "template")]
    templates: Vec<CatalogEntry>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// JUnit 5 code templates for BDD-style tests
const DEFAULT_CATALOG: &str = r#"
[metadata]
name = "junit5-bdd"
description = "JUnit 5 code templates for Behavior-Driven-Development style tests"

[[template]]
name = "bddtest"
description = "Test method with Given/When/Then sections"
body = '''
@Test
@DisplayName("${display_name}")
void ${method_name}() {
    // Given
    ${given}

    // When
    ${when}

    // Then
    ${then}
}'''

[[template]]
name = "should"
description = "Test method named should_<expected behavior>_when_<state under test>"
body = '''
@Test
void should_${expected_behavior}_when_${state_under_test}() {
    // Given
    ${given}

    // When
    ${when}

    // Then
    ${then}
}'''

[[template]]
name = "testclass"
description = "Test class with a display name describing the unit under test"
body = '''
@DisplayName("${subject}")
class ${class_name}Test {

    ${body}
}'''

[[template]]
name = "nested"
description = "Nested test class grouping tests that share a context"
body = '''
@Nested
@DisplayName("when ${context}")
class When${context_class} {

    ${body}
}'''

[[template]]
name = "beforeeach"
description = "Setup method run before each test"
body = '''
@BeforeEach
void setUp() {
    ${setup}
}'''

[[template]]
name = "thenthrows"
description = "Then section asserting that the action throws"
body = '''
// Then
${exception_type} thrown = assertThrows(${exception_type}.class, () -> ${action});
assertEquals("${message}", thrown.getMessage());'''

[[template]]
name = "assertthat"
description = "AssertJ equality assertion"
body = '''assertThat(${actual}).isEqualTo(${expected});'''

[[template]]
name = "given"
description = "BDDMockito stubbing in the Given section"
body = '''given(${mock}.${method}(${args})).willReturn(${result});'''

[[template]]
name = "then"
description = "BDDMockito verification in the Then section"
body = '''then(${mock}).should().${method}(${args});'''

[[template]]
name = "paramtest"
description = "Parameterized test fed from a value source"
body = '''
@ParameterizedTest(name = "${display_name} [{index}] {0}")
@ValueSource(${source_kind} = {${values}})
void ${method_name}(${param_type} ${param_name}) {
    ${body}
}'''

[[template]]
name = "bddimports"
description = "Static imports used by the other snippets"
body = '''
import static org.assertj.core.api.Assertions.assertThat;
import static org.junit.jupiter.api.Assertions.assertEquals;
import static org.junit.jupiter.api.Assertions.assertThrows;
import static org.mockito.BDDMockito.given;
import static org.mockito.BDDMockito.then;'''
"#;

impl Catalog {
    /// Load catalog from TOML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_str(&content)?;
        debug!(path = %path.display(), templates = catalog.entries.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Load catalog from TOML string
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let parsed: TomlCatalog = toml::from_str(content)?;

        Ok(Catalog {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            entries: parsed.templates,
        })
    }

    /// Look up an entry by name
    pub fn entry(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_str(DEFAULT_CATALOG).expect("Default catalog should be valid TOML")
    }
}

impl TemplateRegistry {
    /// Register every entry of a catalog
    ///
    /// All entries are parsed and checked for duplicates, against the
    /// registry and within the catalog, before any is inserted. On error the
    /// registry is left unchanged.
    pub fn extend_from_catalog(&mut self, catalog: &Catalog) -> Result<(), TemplateError> {
        let mut seen = HashSet::new();
        let mut staged = Vec::with_capacity(catalog.entries.len());

        for entry in &catalog.entries {
            if self.contains(&entry.name) || !seen.insert(entry.name.as_str()) {
                return Err(TemplateError::DuplicateName {
                    name: entry.name.clone(),
                });
            }
            staged.push(Template::new(
                entry.name.clone(),
                entry.body.clone(),
                entry.description.clone(),
            )?);
        }

        for template in staged {
            self.register_template(template)?;
        }
        Ok(())
    }

    /// Build a registry from a single catalog
    pub fn from_catalog(catalog: &Catalog) -> Result<Self, TemplateError> {
        let mut registry = Self::new();
        registry.extend_from_catalog(catalog)?;
        Ok(registry)
    }

    /// Build a registry holding the default JUnit 5 catalog
    pub fn builtin() -> Result<Self, TemplateError> {
        Self::from_catalog(&Catalog::default())
    }

    /// Load a catalog file and register its entries
    pub fn load_file(&mut self, path: &Path) -> Result<(), CatalogError> {
        let catalog = Catalog::from_file(path)?;
        self.extend_from_catalog(&catalog)?;
        Ok(())
    }
}
