//! Integration tests for path resolution and sections over the value model.

use std::sync::Arc;
use std::thread;

use whisker_core::{
    ContextStack, FormatSupport, GetterRegistry, Lookup, Mapping, Pass, Path, Resolver, Section,
    Value,
};

fn object<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::from(entries.into_iter().collect::<Mapping>())
}

/// Minimal environment-style node: a flat list of string pairs.
struct EnvVars(Vec<(String, String)>);

struct EnvFormat;

impl FormatSupport for EnvFormat {
    fn name(&self) -> &str {
        "env"
    }

    fn register(&self, registry: &mut GetterRegistry) {
        registry.register::<EnvVars, _>(|vars, key, ignore_case| {
            whisker_core::find_entry(
                vars.0.iter().map(|(k, v)| (k.as_str(), v)),
                key,
                ignore_case,
            )
            .map_or(Lookup::NotFound, |v| Lookup::Found(Value::from(v.as_str())))
        });
    }
}

/// Walk a section the way the renderer does and collect what `.` resolves to.
fn collect_current(
    stack: &mut ContextStack<'_>,
    registry: &GetterRegistry,
    path: &str,
) -> Vec<Lookup> {
    let lookup = stack.resolve(&Path::parse(path).unwrap(), registry, false);
    let section = Section::plan(lookup, false);
    let mut seen = Vec::new();
    for pass in section.passes() {
        match pass {
            Pass::Unchanged => seen.push(stack.resolve(&Path::Current, registry, false)),
            Pass::Push(value) => {
                let scope = stack.scope_value(value.clone()).unwrap();
                seen.push(scope.resolve(&Path::Current, registry, false));
            }
        }
    }
    seen
}

#[test]
fn test_foreign_root_with_value_frames() {
    let registry = GetterRegistry::new().with_format(EnvFormat);
    let env = EnvVars(vec![
        ("HOME".to_string(), "/root".to_string()),
        ("user".to_string(), "whisker".to_string()),
    ]);
    let mut stack = ContextStack::with_root(&env);

    let scope = stack
        .scope_value(object([("user", Value::from("inner"))]))
        .unwrap();
    let resolver = Resolver::new(&registry, true);

    assert_eq!(
        resolver.resolve_str("home", &scope).unwrap(),
        Lookup::Found(Value::from("/root"))
    );
    assert_eq!(
        resolver.resolve_str("USER", &scope).unwrap(),
        Lookup::Found(Value::from("inner"))
    );
    assert_eq!(resolver.resolve_str("shell", &scope).unwrap(), Lookup::NotFound);
}

#[test]
fn test_sequence_section_binds_current_value_in_order() {
    let registry = GetterRegistry::new();
    let root = object([("foo", Value::from(vec!["a", "b", "c"]))]);
    let mut stack = ContextStack::with_root(&root);

    let seen = collect_current(&mut stack, &registry, "foo");

    assert_eq!(
        seen,
        vec![
            Lookup::Found(Value::from("a")),
            Lookup::Found(Value::from("b")),
            Lookup::Found(Value::from("c")),
        ]
    );
    assert_eq!(stack.depth(), 1);
}

#[test]
fn test_null_elements_resolve_as_found_null() {
    let registry = GetterRegistry::new();
    let root = object([("items", Value::Sequence(vec![Value::from(1), Value::Null]))]);
    let mut stack = ContextStack::with_root(&root);

    let seen = collect_current(&mut stack, &registry, "items");

    assert_eq!(seen, vec![Lookup::Found(Value::from(1)), Lookup::FoundNull]);
}

#[test]
fn test_sections_nest_and_fall_back_to_outer_frames() {
    let registry = GetterRegistry::new();
    let root = object([
        ("title", Value::from("root title")),
        ("rows", Value::from(vec![object([("name", Value::from("r1"))])])),
    ]);
    let mut stack = ContextStack::with_root(&root);

    let rows = stack.resolve(&Path::parse("rows").unwrap(), &registry, false);
    let section = Section::plan(rows, false);
    let Some(Pass::Push(row)) = section.passes().next() else {
        panic!("expected one pushed row");
    };
    let scope = stack.scope_value(row.clone()).unwrap();

    assert_eq!(
        scope.resolve(&Path::parse("name").unwrap(), &registry, false),
        Lookup::Found(Value::from("r1"))
    );
    assert_eq!(
        scope.resolve(&Path::parse("title").unwrap(), &registry, false),
        Lookup::Found(Value::from("root title"))
    );
}

#[test]
fn test_registry_is_shared_across_threads() {
    let registry = Arc::new(GetterRegistry::new());
    let root = Arc::new(object([("n", Value::from(42))]));

    let results: Vec<Lookup> = thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let root = Arc::clone(&root);
                s.spawn(move || {
                    let stack = ContextStack::with_root(root.as_ref());
                    stack.resolve(&Path::parse("n").unwrap(), &registry, false)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(results
        .iter()
        .all(|lookup| *lookup == Lookup::Found(Value::from(42))));
}
