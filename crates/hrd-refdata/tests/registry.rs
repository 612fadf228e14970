//! Integration tests for manifest verification and registry loading.

use std::fs;
use std::path::{Path, PathBuf};

use hrd_model::{CityId, CountryId, StateId};
use hrd_refdata::{GeoRegistry, Orphan, RefdataError, sha256_hex};

const COUNTRIES: &str = "id,name,iso_code,phone_code\n1,Nigeria,NG,234\n2,Ghana,GH,233\n";
const STATES: &str = "id,name,country_id\n5,Lagos,1\n6,Kano,1\n7,Ashanti,2\n";
const CITIES: &str = "id,name,state_id\n50,Ikeja,5\n51,Badagry,5\n52,Kumasi,7\n";

fn fixture_dir(label: &str) -> PathBuf {
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("hrd_refdata_{label}_{stamp}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn file_entry(path: &str, role: &str, contents: &str) -> String {
    format!(
        "[[files]]\npath = \"{path}\"\nsha256 = \"{}\"\nkind = \"csv\"\nrole = \"{role}\"\n\n",
        sha256_hex(contents.as_bytes())
    )
}

fn write_manifest(dir: &Path, entries: &str) {
    let manifest = format!(
        "[manifest]\nschema = \"hr-directory.refdata-manifest\"\nschema_version = 1\n\n\
         [pins]\ndataset = \"2025-06\"\n\n{entries}"
    );
    fs::write(dir.join("manifest.toml"), manifest).expect("write manifest");
}

/// Standard three-file fixture with the given seed contents.
fn write_fixture(label: &str, countries: &str, states: &str, cities: &str) -> PathBuf {
    let dir = fixture_dir(label);
    fs::write(dir.join("countries.csv"), countries).expect("write countries");
    fs::write(dir.join("states.csv"), states).expect("write states");
    fs::write(dir.join("cities.csv"), cities).expect("write cities");
    let entries = [
        file_entry("countries.csv", "countries", countries),
        file_entry("states.csv", "states", states),
        file_entry("cities.csv", "cities", cities),
    ]
    .concat();
    write_manifest(&dir, &entries);
    dir
}

#[test]
fn loads_and_indexes_seed_data() -> anyhow::Result<()> {
    let dir = write_fixture("ok", COUNTRIES, STATES, CITIES);
    let (registry, summary) = GeoRegistry::verify_and_load(&dir)?;

    assert_eq!(summary.file_count, 3);
    assert_eq!(summary.country_count, 2);
    assert_eq!(summary.state_count, 3);
    assert_eq!(summary.city_count, 3);
    assert_eq!(summary.orphan_count, 0);

    assert_eq!(
        registry.country(CountryId::new(1)).map(|c| c.name.as_str()),
        Some("Nigeria")
    );
    assert_eq!(
        registry.state(StateId::new(7)).map(|s| s.name.as_str()),
        Some("Ashanti")
    );
    assert_eq!(
        registry.city(CityId::new(52)).map(|c| c.name.as_str()),
        Some("Kumasi")
    );

    let nigerian_states: Vec<&str> = registry
        .states_in_country(CountryId::new(1))
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(nigerian_states, vec!["Lagos", "Kano"]);

    let lagos_cities: Vec<&str> = registry
        .cities_in_state(StateId::new(5))
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(lagos_cities, vec!["Ikeja", "Badagry"]);

    assert_eq!(registry.states_in_country(CountryId::new(99)).count(), 0);

    let _ = fs::remove_dir_all(&dir);
    Ok(())
}

#[test]
fn collects_orphans_without_failing() {
    let states = "id,name,country_id\n5,Lagos,1\n9,Atlantis,99\n";
    let cities = "id,name,state_id\n50,Ikeja,5\n60,Nowhere,88\n";
    let dir = write_fixture("orphans", COUNTRIES, states, cities);
    let (registry, summary) = GeoRegistry::verify_and_load(&dir).expect("load registry");

    assert_eq!(summary.orphan_count, 2);
    assert!(registry.orphans.iter().any(|o| matches!(
        o,
        Orphan::State { id, .. } if *id == StateId::new(9)
    )));
    assert!(registry.orphans.iter().any(|o| matches!(
        o,
        Orphan::City { id, .. } if *id == CityId::new(60)
    )));

    // Orphaned records are loaded but never listed under a parent.
    assert!(registry.state(StateId::new(9)).is_some());
    assert_eq!(registry.states_in_country(CountryId::new(99)).count(), 0);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn rejects_digest_mismatch() {
    let dir = write_fixture("tamper", COUNTRIES, STATES, CITIES);
    fs::write(dir.join("states.csv"), "id,name,country_id\n5,Tampered,1\n")
        .expect("tamper states");

    let err = GeoRegistry::verify_and_load(&dir).expect_err("tampered file must fail");
    assert!(matches!(err, RefdataError::Sha256Mismatch { .. }), "{err}");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn rejects_missing_role() {
    let dir = fixture_dir("missing_role");
    fs::write(dir.join("countries.csv"), COUNTRIES).expect("write countries");
    fs::write(dir.join("states.csv"), STATES).expect("write states");
    let entries = [
        file_entry("countries.csv", "countries", COUNTRIES),
        file_entry("states.csv", "states", STATES),
    ]
    .concat();
    write_manifest(&dir, &entries);

    let err = GeoRegistry::verify_and_load(&dir).expect_err("missing role must fail");
    assert!(
        matches!(err, RefdataError::MissingRole { ref role } if role == "cities"),
        "{err}"
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn rejects_unexpected_file() {
    let dir = write_fixture("stray", COUNTRIES, STATES, CITIES);
    fs::write(dir.join("extra.csv"), "id\n1\n").expect("write stray file");

    let err = GeoRegistry::verify_and_load(&dir).expect_err("stray file must fail");
    assert!(matches!(err, RefdataError::UnexpectedFile { .. }), "{err}");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn rejects_malformed_seed_rows() {
    let bad_cities = "id,name,state_id\nfifty,Ikeja,5\n";
    let dir = write_fixture("bad_rows", COUNTRIES, STATES, bad_cities);

    let err = GeoRegistry::verify_and_load(&dir).expect_err("bad id must fail");
    assert!(matches!(err, RefdataError::Csv { .. }), "{err}");

    let _ = fs::remove_dir_all(&dir);
}
