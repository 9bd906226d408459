//! Property-based tests for resolution precedence.

use std::borrow::Cow;

use super::{Resolver, ValueSource};
use crate::config::ConfigurationTree;
use crate::env::MapEnv;
use crate::profile::ProfileId;
use crate::property::{PropertyDescriptor, PropertyRegistry};
use crate::value::{Mapping, Value};
use proptest::prelude::*;

const PROFILE: &str = "team1";

/// One property's situation across every layer.
#[derive(Debug, Clone)]
struct Layers {
    from_env: bool,
    env: Option<String>,
    /// `None`: key absent. `Some(None)`: key present with null.
    profile: Option<Option<String>>,
    root: Option<String>,
    default: Option<String>,
}

fn layers_strategy() -> impl Strategy<Value = Layers> {
    (
        any::<bool>(),
        prop::option::of("[a-z]{0,8}"),
        prop::option::of(prop::option::of("[a-z]{1,8}")),
        prop::option::of("[a-z]{1,8}"),
        prop::option::of("[a-z]{1,8}"),
    )
        .prop_map(|(from_env, env, profile, root, default)| Layers {
            from_env,
            env,
            profile,
            root,
            default,
        })
}

fn opt_value(s: Option<&String>) -> Value {
    s.map_or(Value::Null, |s| Value::String(s.clone()))
}

/// Builds registry, tree and environment with one property per entry.
fn build(cases: &[Layers]) -> (PropertyRegistry, ConfigurationTree, MapEnv) {
    let mut descriptors = Vec::new();
    let mut root = Mapping::new();
    let mut section = Mapping::new();
    let mut env = MapEnv::new();

    for (i, case) in cases.iter().enumerate() {
        let name = format!("prop_{i}");
        let mut descriptor =
            PropertyDescriptor::new(name.clone()).default_value(opt_value(case.default.as_ref()));
        if case.from_env {
            descriptor = descriptor.read_from_env();
        }
        if let Some(raw) = &case.env {
            env.set(format!("OOD_PROP_{i}"), raw.clone());
        }
        if let Some(value) = &case.profile {
            section.insert(Value::from(name.clone()), opt_value(value.as_ref()));
        }
        if let Some(value) = &case.root {
            root.insert(Value::from(name), Value::from(value.clone()));
        }
        descriptors.push(descriptor);
    }

    let mut profiles = Mapping::new();
    profiles.insert(Value::from(PROFILE), Value::Mapping(section));
    root.insert(Value::from("profiles"), Value::Mapping(profiles));

    let registry = PropertyRegistry::new(descriptors).unwrap();
    (registry, ConfigurationTree::new(root), env)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every property resolves from the highest layer that has it.
    #[test]
    fn resolution_follows_layer_order(cases in prop::collection::vec(layers_strategy(), 1..12)) {
        let (registry, tree, env) = build(&cases);
        let resolver = Resolver::new(&registry, &tree, &env);
        let profile = ProfileId::new(PROFILE);

        for (i, case) in cases.iter().enumerate() {
            let name = format!("prop_{i}");
            let r = resolver.resolve_with_source(&name, Some(&profile)).unwrap();

            if let (true, Some(raw)) = (case.from_env, &case.env) {
                prop_assert_eq!(r.value.as_ref(), &Value::String(raw.clone()));
                prop_assert_eq!(r.source, ValueSource::Environment(format!("OOD_PROP_{i}")));
            } else if let Some(value) = &case.profile {
                prop_assert_eq!(r.value.as_ref(), &opt_value(value.as_ref()));
                prop_assert_eq!(r.source, ValueSource::Profile(profile.clone()));
            } else if let Some(value) = &case.root {
                prop_assert_eq!(r.value.as_ref(), &Value::from(value.clone()));
                prop_assert_eq!(r.source, ValueSource::Root);
            } else {
                prop_assert_eq!(r.source, ValueSource::Default);
                let is_registry_default = matches!(
                    &r.value,
                    Cow::Borrowed(v) if std::ptr::eq(*v, registry.get(&name).unwrap().default())
                );
                prop_assert!(is_registry_default);
            }
        }
    }

    // Without a profile, the profile section is never consulted.
    #[test]
    fn no_profile_skips_profile_section(cases in prop::collection::vec(layers_strategy(), 1..12)) {
        let (registry, tree, env) = build(&cases);
        let resolver = Resolver::new(&registry, &tree, &env);

        for (i, _) in cases.iter().enumerate() {
            let r = resolver.resolve_with_source(&format!("prop_{i}"), None).unwrap();
            prop_assert!(!matches!(r.source, ValueSource::Profile(_)));
        }
    }

    // Resolution is repeatable.
    #[test]
    fn resolution_is_deterministic(cases in prop::collection::vec(layers_strategy(), 1..8)) {
        let (registry, tree, env) = build(&cases);
        let resolver = Resolver::new(&registry, &tree, &env);
        let profile = ProfileId::new(PROFILE);

        let first = resolver.resolve_all(Some(&profile)).unwrap();
        let second = resolver.resolve_all(Some(&profile)).unwrap();
        prop_assert_eq!(first, second);
    }
}
