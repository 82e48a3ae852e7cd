mod helper;

use rstest::rstest;

use dotnet_ibm_installer::catalog::filter_and_sort;
use dotnet_ibm_installer::resolve::{Resolution, find_nearest_by_version, reconcile, resolve};
use dotnet_ibm_installer::version::error::ResolveError;
use dotnet_ibm_installer::version::normalize::{RegistryVersionSet, normalized_key};
use dotnet_ibm_installer::version::sdk::{Stage, Version};

use helper::{catalog, mirror_catalog};

fn nuget() -> RegistryVersionSet {
    RegistryVersionSet::new([
        "8.0.0",
        "9.0.0-preview.7.24407.12",
        "9.0.0-rc.1.24452.12",
        "9.0.0-rc.2.24474.11",
        "9.0.0",
        "10.0.0-preview.1.25080.5",
    ])
}

#[test]
fn render_round_trips_full_pattern() {
    let version = Version::parse("v9.0.100-preview.7.25351.106").unwrap();

    assert_eq!(version.to_string(), "9.0.100-preview.7.25351.106");
    assert_eq!(normalized_key(&version), "9.0.0-preview.7.25351.106");
    assert_eq!(
        version,
        Version::new(9, 0, 100).with_stage(Stage::Preview, 7, vec![25351, 106])
    );
}

#[test]
fn filter_and_sort_lists_major_line_newest_first() {
    let tags = mirror_catalog();

    let names: Vec<&str> = filter_and_sort(&tags, Some("v9.0"))
        .into_iter()
        .map(|tag| tag.tag_name.as_str())
        .collect();

    assert_eq!(
        names,
        vec![
            "v9.0.102",
            "v9.0.101",
            "v9.0.100",
            "v9.0.100-rtm.24503.15",
            "v9.0.100-rc.2.24474.11",
            "v9.0.100-rc.1.24452.12",
            "v9.0.100-preview.7.24407.12",
        ]
    );
}

#[rstest]
#[case("9.0.100", Resolution::exact("v9.0.100"))]
#[case("v9.0.102", Resolution::exact("v9.0.102"))]
#[case("9.0.100-rc.2.24474.11", Resolution::exact("v9.0.100-rc.2.24474.11"))]
#[case("8.0.404", Resolution::exact("v8.0.404"))]
#[case("9.0.103", Resolution::approximate("v9.0.102"))]
// the rtm build has no NuGet key, so the stable release next to it wins
#[case("9.0.100-rc.2.24474.12", Resolution::approximate("v9.0.100"))]
#[case("10.0.100", Resolution::approximate("v10.0.100-preview.1.25080.5"))]
fn reconcile_against_mirror_and_nuget(#[case] requested: &str, #[case] expected: Resolution) {
    let tags = mirror_catalog();

    let result = reconcile(&Version::parse(requested).unwrap(), &tags, &nuget()).unwrap();

    assert_eq!(result, expected);
}

#[test]
fn reconcile_stable_key_covers_every_patch() {
    let tags = catalog(&["v9.0.100", "v9.0.101", "v9.0.102"]);
    let registry = RegistryVersionSet::new([normalized_key(&Version::new(9, 0, 101))]);

    let result = reconcile(&Version::new(9, 0, 100), &tags, &registry);

    assert_eq!(result.unwrap(), Resolution::exact("v9.0.100"));
}

#[test]
fn reconcile_nearest_skips_versions_missing_from_registry() {
    let tags = catalog(&[
        "v9.0.100-rc.1.100",
        "v9.0.100-rc.1.101",
        "v9.0.100-rc.1.102",
    ]);
    let registry = RegistryVersionSet::new(["9.0.0-rc.1.101"]);

    let result = reconcile(&Version::parse("9.0.100-rc.1.100").unwrap(), &tags, &registry);

    assert_eq!(result.unwrap(), Resolution::approximate("v9.0.100-rc.1.101"));
}

#[test]
fn reconcile_fails_for_major_without_releases() {
    let tags = catalog(&["v9.0.100", "v9.0.101"]);

    let result = reconcile(&Version::new(10, 0, 100), &tags, &nuget());

    assert!(matches!(result, Err(ResolveError::NoReleasesForMajor(10))));
}

#[test]
fn reconcile_fails_when_registry_has_nothing_for_major() {
    let tags = mirror_catalog();
    let registry = RegistryVersionSet::new(["9.0.0"]);

    let result = reconcile(&Version::new(8, 0, 404), &tags, &registry);

    assert!(matches!(result, Err(ResolveError::NotFound(_))));
}

#[rstest]
#[case("v9.0.101", Resolution::exact("v9.0.101"))]
#[case("v9.0.100-rc", Resolution::approximate("v9.0.100-rc.2.24474.11"))]
#[case("v8", Resolution::approximate("v8.0.404"))]
fn resolve_exact_then_prefix(#[case] candidate: &str, #[case] expected: Resolution) {
    assert_eq!(resolve(candidate, &mirror_catalog()).unwrap(), expected);
}

#[rstest]
#[case("9.0.100", "v9.0.100")]
#[case("8.0.500", "v8.0.404")]
#[case("9.0.100-rc.3.1", "v9.0.100-rc.2.24474.11")]
#[case("1.0.0", "v8.0.100")]
fn find_nearest_by_version_prefers_lower_neighbour(#[case] target: &str, #[case] expected: &str) {
    assert_eq!(
        find_nearest_by_version(&mirror_catalog(), target).unwrap(),
        expected
    );
}
