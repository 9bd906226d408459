use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dashconf::env::MapEnv;
use dashconf::{ConfigurationTree, ProfileId, PropertyRegistry, Resolver, UserConfiguration};

const CONFIG: &str = r#"
dashboard_title: "Campus HPC"
dashboard_logo: "/public/campus.png"
pinned_apps: [sys/jupyter, sys/rstudio, sys/desktop]
pinned_apps_group_by: category
public_url: /assets
profiles:
  team1:
    dashboard_title: "Team One"
    dashboard_logo: ~
    navbar_type: inverse
"#;

/// A tree with `count` extra profiles alongside `team1`.
fn tree_with_profiles(count: usize) -> ConfigurationTree {
    let mut yaml = String::from(CONFIG);
    for i in 0..count {
        yaml.push_str(&format!("  extra{i}:\n    dashboard_title: \"Extra {i}\"\n"));
    }
    ConfigurationTree::from_yaml_str(&yaml).unwrap()
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    let registry = PropertyRegistry::dashboard().unwrap();
    let tree = tree_with_profiles(0);
    let env = MapEnv::new().with("OOD_DASHBOARD_LOGO_HEIGHT", "40");
    let resolver = Resolver::new(&registry, &tree, &env);
    let team1 = ProfileId::new("team1");

    // Value found in the environment
    group.bench_function("environment", |b| {
        b.iter(|| resolver.resolve(black_box("dashboard_logo_height"), Some(&team1)));
    });

    // Value found in the profile section
    group.bench_function("profile", |b| {
        b.iter(|| resolver.resolve(black_box("dashboard_title"), Some(&team1)));
    });

    // Value found at the root
    group.bench_function("root", |b| {
        b.iter(|| resolver.resolve(black_box("pinned_apps"), Some(&team1)));
    });

    // Nothing configured
    group.bench_function("default", |b| {
        b.iter(|| resolver.resolve(black_box("profile_links"), None));
    });

    group.bench_function("all_properties", |b| {
        b.iter(|| resolver.resolve_all(black_box(Some(&team1))));
    });

    group.finish();
}

fn bench_profile_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("profile_count");
    let registry = PropertyRegistry::dashboard().unwrap();
    let env = MapEnv::new();
    let team1 = ProfileId::new("team1");

    for count in [0, 10, 100, 1000] {
        let tree = tree_with_profiles(count);
        let resolver = Resolver::new(&registry, &tree, &env);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| resolver.resolve(black_box("dashboard_title"), Some(&team1)));
        });
    }

    group.finish();
}

fn bench_derived(c: &mut Criterion) {
    let mut group = c.benchmark_group("derived");

    let registry = PropertyRegistry::dashboard().unwrap();
    let tree = tree_with_profiles(0);
    let env = MapEnv::new();
    let config = UserConfiguration::with_profile(&registry, &tree, &env, Some("team1".into()));

    group.bench_function("navbar_type", |b| {
        b.iter(|| black_box(&config).navbar_type());
    });

    group.bench_function("pinned_apps_group_by", |b| {
        b.iter(|| black_box(&config).pinned_apps_group_by());
    });

    group.bench_function("public_url", |b| {
        b.iter(|| black_box(&config).public_url());
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_config", |b| {
        b.iter(|| ConfigurationTree::from_yaml_str(black_box(CONFIG)));
    });
}

criterion_group!(
    benches,
    bench_resolve,
    bench_profile_count,
    bench_derived,
    bench_parse
);
criterion_main!(benches);
