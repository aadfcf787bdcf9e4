use serde_json::json;
use skel::error::Error;
use skel::renderer::{MiniJinjaRenderer, TemplateRenderer};

#[test]
fn test_variable_interpolation() {
    let engine = MiniJinjaRenderer::new();
    let context = json!({
        "name": "test",
        "value": 42
    });

    let result = engine.render("Hello {{ name }}!", &context).unwrap();
    assert_eq!(result, "Hello test!");

    let result = engine.render("Value: {{ value }}", &context).unwrap();
    assert_eq!(result, "Value: 42");
}

#[test]
fn test_conditionals() {
    let engine = MiniJinjaRenderer::new();

    let template = "{% if debug %}debug{% else %}release{% endif %}";
    let result = engine.render(template, &json!({"debug": true})).unwrap();
    assert_eq!(result, "debug");

    let result = engine.render(template, &json!({"debug": false})).unwrap();
    assert_eq!(result, "release");
}

#[test]
fn test_loops() {
    let engine = MiniJinjaRenderer::new();
    let context = json!({"services": ["api", "worker"]});

    let result = engine
        .render("{% for s in services %}{{ s }};{% endfor %}", &context)
        .unwrap();
    assert_eq!(result, "api;worker;");
}

#[test]
fn test_nested_key_access() {
    let engine = MiniJinjaRenderer::new();
    let context = json!({"owner": {"team": "storage"}});

    let result = engine.render("{{ owner.team }}", &context).unwrap();
    assert_eq!(result, "storage");
}

#[test]
fn test_builtin_filters() {
    let engine = MiniJinjaRenderer::new();
    let context = json!({"name": "test"});

    let result = engine.render("{{ name | upper }}", &context).unwrap();
    assert_eq!(result, "TEST");
}

#[test]
fn test_inflection_filters() {
    let engine = MiniJinjaRenderer::new();
    let context = json!({"name": "my_project", "word": "template"});

    let result = engine.render("{{ name | camel_case }}", &context).unwrap();
    assert_eq!(result, "myProject");

    let result = engine.render("{{ name | pascal_case }}", &context).unwrap();
    assert_eq!(result, "MyProject");

    let result = engine.render("{{ name | kebab_case }}", &context).unwrap();
    assert_eq!(result, "my-project");

    let result = engine.render("{{ word | plural }}", &context).unwrap();
    assert_eq!(result, "templates");
}

#[test]
fn test_undefined_variable_renders_empty() {
    let engine = MiniJinjaRenderer::new();

    let result = engine.render("Hello {{ missing }}!", &json!({})).unwrap();
    assert_eq!(result, "Hello !");
}

#[test]
fn test_rendering_is_deterministic() {
    let engine = MiniJinjaRenderer::new();
    let context = json!({
        "name": "db",
        "features": ["a", "b", "c"],
        "owner": {"team": "storage", "oncall": "primary"}
    });
    let template =
        "{{ name }}: {% for f in features %}{{ f }} {% endfor %}{{ owner.team }}/{{ owner.oncall }}";

    let first = engine.render(template, &context).unwrap();
    let second = engine.render(template, &context).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_invalid_syntax_is_an_error() {
    let engine = MiniJinjaRenderer::new();

    let result = engine.render("{% if %}", &json!({}));
    match result {
        Err(Error::RenderError(_)) => (),
        other => panic!("Expected RenderError, got {:?}", other.map(|_| ())),
    }
}
