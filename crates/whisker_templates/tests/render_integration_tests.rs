//! Integration tests for rendering templates over JSON and YAML data.

use std::fs;
use std::sync::Arc;
use std::thread;

use serde_json::json;
use tempfile::tempdir;
use whisker_formats::{standard_registry, DataDocument, DataFormat, JsonFormat, JsonProperty};
use whisker_templates::{RenderSettings, Renderer, TemplateError};

fn render_json(template: &str, data: serde_json::Value) -> String {
    let renderer = Renderer::builder().with_format(JsonFormat).build();
    renderer.render(template, &data).unwrap()
}

#[test]
fn test_simple_variable() {
    assert_eq!(render_json("{{foo}}", json!({ "foo": "bar" })), "bar");
}

#[test]
fn test_missing_variable_renders_empty() {
    assert_eq!(render_json("{{foo2}}", json!({ "foo": "bar" })), "");
}

#[test]
fn test_null_renders_empty() {
    assert_eq!(render_json("[{{foo}}]", json!({ "foo": null })), "[]");
}

#[test]
fn test_section_over_array_of_objects() {
    let data = json!({ "foo": [{ "bar": "foobar" }] });
    assert_eq!(render_json("{{#foo}}{{bar}}{{/foo}}", data), "foobar");
}

#[test]
fn test_section_over_array_of_strings() {
    let data = json!({ "foo": ["a", "b", "c"] });
    assert_eq!(render_json("{{#foo}}{{.}}{{/foo}}", data), "abc");
}

#[test]
fn test_dotted_path() {
    let data = json!({ "foo": { "bar": "foobar" } });
    assert_eq!(render_json("{{foo.bar}}", data), "foobar");
}

#[test]
fn test_section_over_object() {
    let data = json!({ "foo": { "bar": "foobar", "zar": "zoo" } });
    assert_eq!(render_json("{{#foo}}{{bar}}{{/foo}}", data.clone()), "foobar");
    assert_eq!(render_json("{{#foo}}{{bar}},{{zar}}{{/foo}}", data), "foobar,zoo");
}

#[test]
fn test_false_section_and_inverted_section() {
    let data = json!({ "showme": false, "foo": { "bar": "foobar" } });
    assert_eq!(render_json("{{#showme}}{{foo.bar}}{{/showme}}", data.clone()), "");
    assert_eq!(render_json("{{^showme}}{{foo.bar}}{{/showme}}", data), "foobar");
}

#[test]
fn test_falsy_values() {
    let data = json!({ "off": false, "list": [], "nothing": null });
    let template = "{{#off}}f{{/off}}{{#list}}l{{/list}}\
                    {{#nothing}}n{{/nothing}}{{#missing}}m{{/missing}}";
    assert_eq!(render_json(template, data.clone()), "");

    let inverted = "{{^off}}f{{/off}}{{^list}}l{{/list}}\
                    {{^nothing}}n{{/nothing}}{{^missing}}m{{/missing}}";
    assert_eq!(render_json(inverted, data), "flnm");
}

#[test]
fn test_zero_empty_string_and_empty_object_are_truthy() {
    let data = json!({ "zero": 0, "empty": "", "obj": {} });
    let template = "{{#zero}}[{{.}}]{{/zero}}{{#empty}}[{{.}}]{{/empty}}{{#obj}}o{{/obj}}";
    assert_eq!(render_json(template, data.clone()), "[0][]o");

    let inverted = "{{^zero}}z{{/zero}}{{^empty}}e{{/empty}}{{^obj}}o{{/obj}}";
    assert_eq!(render_json(inverted, data), "");
}

#[test]
fn test_scalar_rendering() {
    let data = json!({ "int": 1, "float": 1.01, "flag": true, "when": "2009-02-15T00:00:00Z" });
    assert_eq!(
        render_json("{{int}} {{float}} {{flag}} {{when}}", data),
        "1 1.01 true 2009-02-15T00:00:00Z"
    );
}

#[test]
fn test_outer_keys_visible_inside_sections() {
    let data = json!({ "name": "outer", "items": [{ "id": 1 }, { "id": 2, "name": "inner" }] });
    assert_eq!(
        render_json("{{#items}}{{id}}:{{name}};{{/items}}", data),
        "1:outer;2:inner;"
    );
}

#[test]
fn test_dotted_path_root_falls_back_to_outer_frame() {
    let data = json!({ "a": { "x": 1 }, "b": { "c": "root" } });
    assert_eq!(render_json("{{#a}}{{b.c}}{{/a}}", data.clone()), "root");
    assert_eq!(render_json("{{#a}}{{x}}:{{b.c}}{{/a}}", data), "1:root");
}

#[test]
fn test_null_in_inner_frame_shadows_outer_key() {
    let data = json!({ "name": "outer", "items": [{ "name": null }] });
    assert_eq!(render_json("{{#items}}[{{name}}]{{/items}}", data), "[]");
}

#[test]
fn test_ignore_case() {
    let data = json!({ "Foo": { "Bar": "x" } });
    let strict = Renderer::builder().with_format(JsonFormat).build();
    let loose = Renderer::builder()
        .with_format(JsonFormat)
        .ignore_case(true)
        .build();

    assert_eq!(strict.render("{{foo.bar}}", &data).unwrap(), "");
    assert_eq!(loose.render("{{foo.bar}}", &data).unwrap(), "x");
    assert_eq!(loose.render("{{#FOO}}{{bar}}{{/FOO}}", &data).unwrap(), "x");
}

#[test]
fn test_json_and_yaml_render_identically() {
    let json = DataDocument::from_str(
        r#"{ "showme": true, "foo": { "bar": "foobar" }, "list": [1, 2.5, "c"] }"#,
        DataFormat::Json,
    )
    .unwrap();
    let yaml = DataDocument::from_str(
        "showme: true\nfoo:\n  bar: foobar\nlist: [1, 2.5, c]\n",
        DataFormat::Yaml,
    )
    .unwrap();

    let renderer = Renderer::standard(RenderSettings::default());
    let template = renderer
        .compile("{{#showme}}{{foo.bar}}{{/showme}}|{{#list}}<{{.}}>{{/list}}")
        .unwrap();

    let from_json = renderer.render_template(&template, json.as_node()).unwrap();
    let from_yaml = renderer.render_template(&template, yaml.as_node()).unwrap();
    assert_eq!(from_json, "foobar|<1><2.5><c>");
    assert_eq!(from_json, from_yaml);
}

#[test]
fn test_property_as_root() {
    let data = json!({ "foo": "bar" });
    let property = JsonProperty::from_object(data.as_object().unwrap(), "foo").unwrap();
    let renderer = Renderer::builder().with_format(JsonFormat).build();

    assert_eq!(renderer.render("{{foo}}|{{other}}", &property).unwrap(), "bar|");
}

#[test]
fn test_unregistered_root_renders_empty() {
    let renderer = Renderer::builder().build();
    let data = json!({ "foo": "bar" });

    assert_eq!(renderer.render("[{{foo}}]", &data).unwrap(), "[]");
}

#[test]
fn test_template_errors() {
    let renderer = Renderer::standard(RenderSettings::default());
    let data = json!({});

    assert!(matches!(
        renderer.render("{{#foo}}", &data),
        Err(TemplateError::UnclosedSection { .. })
    ));
    assert!(matches!(
        renderer.render("{{foo..bar}}", &data),
        Err(TemplateError::InvalidTag { line: 1, .. })
    ));
}

#[test]
fn test_settings_from_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("whisker.toml");
    fs::write(&path, "ignore_case = true\n").unwrap();

    let renderer = Renderer::standard(RenderSettings::load(&path).unwrap());
    let data = json!({ "Name": "x" });
    assert_eq!(renderer.render("{{name}}", &data).unwrap(), "x");
}

#[test]
fn test_renderer_shared_between_threads() {
    let renderer = Arc::new(Renderer::new(
        Arc::new(standard_registry()),
        RenderSettings::default(),
    ));
    let template = Arc::new(renderer.compile("{{#items}}{{.}}{{/items}}").unwrap());

    thread::scope(|s| {
        for i in 0..4 {
            let renderer = Arc::clone(&renderer);
            let template = Arc::clone(&template);
            s.spawn(move || {
                let data = json!({ "items": [i, i] });
                let out = renderer.render_template(&template, &data).unwrap();
                assert_eq!(out, format!("{i}{i}"));
            });
        }
    });
}
