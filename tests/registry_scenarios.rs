//! Integration tests for registering, looking up and rendering templates

use std::sync::Arc;
use std::thread;

use bdd_templates::{Bindings, RenderConfig, TemplateError, TemplateRegistry};
use pretty_assertions::assert_eq;

fn registry_with(templates: &[(&str, &str)]) -> TemplateRegistry {
    let mut registry = TemplateRegistry::new();
    for (name, body) in templates {
        registry.register(*name, *body, None).expect("Should register");
    }
    registry
}

#[test]
fn test_greet_renders_with_binding() {
    let registry = registry_with(&[("greet", "Hello, ${name}!")]);
    let bindings = Bindings::new().with("name", "World");
    assert_eq!(registry.render("greet", &bindings).unwrap(), "Hello, World!");
}

#[test]
fn test_greet_without_binding_names_placeholder() {
    let registry = registry_with(&[("greet", "Hello, ${name}!")]);
    let err = registry.render("greet", &Bindings::new()).unwrap_err();
    assert_eq!(
        err,
        TemplateError::MissingBinding {
            template: "greet".to_string(),
            placeholder: "name".to_string(),
        }
    );
    assert!(err.to_string().contains("'name'"));
}

#[test]
fn test_get_unknown_template() {
    let registry = TemplateRegistry::new();
    assert_eq!(
        registry.get("missing").unwrap_err(),
        TemplateError::NotFound {
            name: "missing".to_string()
        }
    );
}

#[test]
fn test_duplicate_registration_keeps_first() {
    let mut registry = TemplateRegistry::new();
    registry
        .register("greet", "Hello, ${name}!", Some("first".to_string()))
        .unwrap();

    let err = registry
        .register("greet", "Howdy, ${name}!", Some("second".to_string()))
        .unwrap_err();
    assert!(matches!(err, TemplateError::DuplicateName { ref name } if name == "greet"));

    let template = registry.get("greet").unwrap();
    assert_eq!(template.body(), "Hello, ${name}!");
    assert_eq!(template.description(), Some("first"));
}

#[test]
fn test_two_distinct_placeholders() {
    let registry = registry_with(&[("pair", "${a}-${b}")]);
    let bindings = Bindings::new().with("a", "1").with("b", "2");
    assert_eq!(registry.render("pair", &bindings).unwrap(), "1-2");
}

#[test]
fn test_get_returns_registered_parts() {
    let mut registry = TemplateRegistry::new();
    let cases = [
        ("plain", "no placeholders here", None),
        ("described", "${x}", Some("with a description")),
        ("empty", "", Some("")),
    ];
    for (name, body, description) in cases {
        registry
            .register(name, body, description.map(str::to_string))
            .unwrap();
    }

    for (name, body, description) in cases {
        let template = registry.get(name).unwrap();
        assert_eq!(template.body(), body);
        assert_eq!(template.description(), description);
    }
}

#[test]
fn test_render_is_idempotent() {
    let registry = registry_with(&[("pair", "${a} and ${b} and ${a}")]);
    let bindings = Bindings::new().with("a", "x").with("b", "y");
    let first = registry.render("pair", &bindings).unwrap();
    let second = registry.render("pair", &bindings).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_body_without_placeholders_ignores_bindings() {
    let body = "void run() {\n    // $ is fine\n}";
    let registry = registry_with(&[("plain", body)]);
    let bindings = Bindings::new().with("unused", "value");
    assert_eq!(registry.render("plain", &bindings).unwrap(), body);
    assert_eq!(registry.render("plain", &Bindings::new()).unwrap(), body);
}

#[test]
fn test_values_are_not_rescanned() {
    let registry = registry_with(&[("greet", "Hello, ${name}!")]);
    let bindings = Bindings::new().with("name", "${other}");
    assert_eq!(registry.render("greet", &bindings).unwrap(), "Hello, ${other}!");
}

#[test]
fn test_lenient_policy_keeps_only_unbound() {
    let registry = registry_with(&[("pair", "${a}-${b}")]);
    let bindings = Bindings::new().with("a", "1");
    let rendered = registry
        .render_with("pair", &bindings, &RenderConfig::lenient())
        .unwrap();
    assert_eq!(rendered, "1-${b}");
}

#[test]
fn test_malformed_bodies_rejected_at_registration() {
    let mut registry = TemplateRegistry::new();
    for body in [
        "${",
        "${a",
        "${a}${b",
        "void ${method(",
        "a ${}",
        "${not valid}",
        "${a${b}}",
    ] {
        let err = registry.register("bad", body, None).unwrap_err();
        assert!(
            matches!(err, TemplateError::MalformedPlaceholder { .. }),
            "{body:?} gave {err:?}"
        );
    }
    assert!(registry.is_empty());
}

#[test]
fn test_malformed_diagnostic_points_at_token() {
    let mut registry = TemplateRegistry::new();
    let err = registry
        .register("greet", "Hello, ${first name}!", None)
        .unwrap_err();
    let report = err.diagnostic().expect("Should have a diagnostic");
    assert!(report.contains("greet"));
    assert!(report.contains("first name"));
}

#[test]
fn test_concurrent_renders_agree() {
    let registry = Arc::new(registry_with(&[
        ("greet", "Hello, ${name}!"),
        ("pair", "${a}-${b}"),
    ]));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let bindings = Bindings::new()
                    .with("name", format!("thread {i}"))
                    .with("a", i.to_string())
                    .with("b", "x");
                (
                    registry.render("greet", &bindings).unwrap(),
                    registry.render("pair", &bindings).unwrap(),
                )
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (greet, pair) = handle.join().unwrap();
        assert_eq!(greet, format!("Hello, thread {i}!"));
        assert_eq!(pair, format!("{i}-x"));
    }
}
