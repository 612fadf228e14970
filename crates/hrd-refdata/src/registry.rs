#![deny(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path, PathBuf};

use hrd_model::{City, CityId, Country, CountryId, State, StateId};

use crate::csv::cities::parse_cities_csv;
use crate::csv::countries::parse_countries_csv;
use crate::csv::states::parse_states_csv;
use crate::error::RefdataError;
use crate::hash::sha256_hex;
use crate::manifest::{Manifest, ManifestFile};

/// Manifest schema accepted by this loader.
pub const MANIFEST_SCHEMA: &str = "hr-directory.refdata-manifest";

const REQUIRED_ROLES: &[&str] = &["countries", "states", "cities"];

const ALLOWED_KINDS: &[&str] = &["csv", "toml", "other"];

/// A seed record whose parent id matches no loaded parent record.
///
/// Orphans are collected rather than rejected: the registry still loads, and
/// the affected records simply never appear in any hierarchy listing.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Orphan {
    State { id: StateId, country_id: CountryId },
    City { id: CityId, state_id: StateId },
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct VerifySummary {
    pub refdata_dir: PathBuf,
    pub manifest_pins: crate::manifest::Pins,
    pub file_count: usize,
    pub country_count: usize,
    pub state_count: usize,
    pub city_count: usize,
    pub orphan_count: usize,
}

/// Verified, indexed snapshot of the geographic reference data.
#[derive(Debug, Clone)]
pub struct GeoRegistry {
    pub manifest: Manifest,
    pub files: Vec<ManifestFile>,
    pub orphans: Vec<Orphan>,
    countries: BTreeMap<CountryId, Country>,
    states: BTreeMap<StateId, State>,
    cities: BTreeMap<CityId, City>,
    states_by_country: BTreeMap<CountryId, Vec<StateId>>,
    cities_by_state: BTreeMap<StateId, Vec<CityId>>,
}

impl GeoRegistry {
    /// Verify every pinned file under `refdata_dir` against the manifest,
    /// then parse and index the three seed files.
    pub fn verify_and_load(refdata_dir: &Path) -> Result<(Self, VerifySummary), RefdataError> {
        let manifest = load_manifest(&refdata_dir.join("manifest.toml"))?;

        validate_manifest(&manifest, refdata_dir)?;

        let mut files = manifest.files.clone();
        files.sort_by(|a, b| a.path.cmp(&b.path));

        for file in &files {
            verify_file(refdata_dir, file)?;
        }

        let countries = parse_countries_csv(&resolve_role_path(refdata_dir, &files, "countries")?)?;
        let states = parse_states_csv(&resolve_role_path(refdata_dir, &files, "states")?)?;
        let cities = parse_cities_csv(&resolve_role_path(refdata_dir, &files, "cities")?)?;

        let registry = Self::from_records(manifest, files, countries, states, cities);

        let summary = VerifySummary {
            refdata_dir: refdata_dir.to_path_buf(),
            manifest_pins: registry.manifest.pins.clone(),
            file_count: registry.files.len(),
            country_count: registry.countries.len(),
            state_count: registry.states.len(),
            city_count: registry.cities.len(),
            orphan_count: registry.orphans.len(),
        };

        Ok((registry, summary))
    }

    fn from_records(
        manifest: Manifest,
        files: Vec<ManifestFile>,
        countries: Vec<Country>,
        states: Vec<State>,
        cities: Vec<City>,
    ) -> Self {
        let countries: BTreeMap<CountryId, Country> =
            countries.into_iter().map(|c| (c.id, c)).collect();
        let states: BTreeMap<StateId, State> = states.into_iter().map(|s| (s.id, s)).collect();
        let cities: BTreeMap<CityId, City> = cities.into_iter().map(|c| (c.id, c)).collect();

        let mut orphans = Vec::new();
        let mut states_by_country: BTreeMap<CountryId, Vec<StateId>> = BTreeMap::new();
        for state in states.values() {
            if countries.contains_key(&state.country_id) {
                states_by_country
                    .entry(state.country_id)
                    .or_default()
                    .push(state.id);
            } else {
                orphans.push(Orphan::State {
                    id: state.id,
                    country_id: state.country_id,
                });
            }
        }

        let mut cities_by_state: BTreeMap<StateId, Vec<CityId>> = BTreeMap::new();
        for city in cities.values() {
            if states.contains_key(&city.state_id) {
                cities_by_state
                    .entry(city.state_id)
                    .or_default()
                    .push(city.id);
            } else {
                orphans.push(Orphan::City {
                    id: city.id,
                    state_id: city.state_id,
                });
            }
        }

        Self {
            manifest,
            files,
            orphans,
            countries,
            states,
            cities,
            states_by_country,
            cities_by_state,
        }
    }

    pub fn country(&self, id: CountryId) -> Option<&Country> {
        self.countries.get(&id)
    }

    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(&id)
    }

    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.get(&id)
    }

    /// All countries in id order.
    pub fn countries(&self) -> impl Iterator<Item = &Country> {
        self.countries.values()
    }

    /// States of one country in id order. Unknown countries yield nothing.
    pub fn states_in_country(&self, country_id: CountryId) -> impl Iterator<Item = &State> {
        self.states_by_country
            .get(&country_id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.states.get(id))
    }

    /// Cities of one state in id order. Unknown states yield nothing.
    pub fn cities_in_state(&self, state_id: StateId) -> impl Iterator<Item = &City> {
        self.cities_by_state
            .get(&state_id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.cities.get(id))
    }
}

fn load_manifest(path: &Path) -> Result<Manifest, RefdataError> {
    let contents = std::fs::read_to_string(path).map_err(|e| RefdataError::io(path, e))?;
    toml::from_str(&contents).map_err(|e| RefdataError::Toml {
        path: path.to_path_buf(),
        source: e,
    })
}

fn validate_manifest(manifest: &Manifest, refdata_dir: &Path) -> Result<(), RefdataError> {
    if manifest.manifest.schema != MANIFEST_SCHEMA {
        return Err(RefdataError::InvalidManifest {
            message: format!("unsupported schema: {}", manifest.manifest.schema),
        });
    }
    if manifest.manifest.schema_version != 1 {
        return Err(RefdataError::InvalidManifest {
            message: format!(
                "unsupported schema_version: {}",
                manifest.manifest.schema_version
            ),
        });
    }

    let mut roles: BTreeSet<&str> = BTreeSet::new();
    let mut manifest_paths: BTreeSet<PathBuf> = BTreeSet::new();

    for file in &manifest.files {
        if roles.contains(file.role.as_str()) {
            return Err(RefdataError::DuplicateRole {
                role: file.role.clone(),
            });
        }
        roles.insert(file.role.as_str());

        if !ALLOWED_KINDS.contains(&file.kind.as_str()) {
            return Err(RefdataError::InvalidManifest {
                message: format!("unsupported kind '{}' for {}", file.kind, file.path),
            });
        }

        validate_sha(&file.sha256, &file.path)?;

        let path = validate_path(&file.path)?;
        manifest_paths.insert(path);
    }

    for role in REQUIRED_ROLES {
        if !roles.contains(role) {
            return Err(RefdataError::MissingRole {
                role: (*role).to_string(),
            });
        }
    }

    let actual_files = list_files_under(refdata_dir)?;
    let manifest_paths: BTreeSet<PathBuf> = manifest_paths
        .into_iter()
        .map(|p| normalize_path(&p))
        .collect();

    for path in actual_files {
        if path == PathBuf::from("manifest.toml") {
            continue;
        }
        let normalized = normalize_path(&path);
        if !manifest_paths.contains(&normalized) {
            return Err(RefdataError::UnexpectedFile {
                path: refdata_dir.join(path),
            });
        }
    }

    Ok(())
}

fn verify_file(refdata_dir: &Path, file: &ManifestFile) -> Result<(), RefdataError> {
    let full_path = refdata_dir.join(&file.path);
    let bytes = std::fs::read(&full_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RefdataError::MissingFile {
                path: full_path.clone(),
            }
        } else {
            RefdataError::io(full_path.clone(), e)
        }
    })?;

    let actual = sha256_hex(&bytes);
    let expected = file.sha256.to_ascii_lowercase();
    if actual != expected {
        return Err(RefdataError::Sha256Mismatch {
            path: full_path,
            expected,
            actual,
        });
    }
    Ok(())
}

fn resolve_role_path(
    refdata_dir: &Path,
    files: &[ManifestFile],
    role: &str,
) -> Result<PathBuf, RefdataError> {
    let f = files
        .iter()
        .find(|f| f.role == role)
        .ok_or_else(|| RefdataError::MissingRole {
            role: role.to_string(),
        })?;
    Ok(refdata_dir.join(&f.path))
}

fn validate_sha(sha: &str, path: &str) -> Result<(), RefdataError> {
    if sha.len() != 64 || !sha.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(RefdataError::InvalidSha256 {
            path: PathBuf::from(path),
            message: "sha256 must be 64 hex characters".to_string(),
        });
    }
    Ok(())
}

fn validate_path(path: &str) -> Result<PathBuf, RefdataError> {
    if path.contains('\\') {
        return Err(RefdataError::InvalidPath {
            path: PathBuf::from(path),
            message: "manifest path must use '/' separators".to_string(),
        });
    }

    let p = PathBuf::from(path);
    if p.is_absolute() {
        return Err(RefdataError::InvalidPath {
            path: p,
            message: "manifest path must be relative".to_string(),
        });
    }

    for c in p.components() {
        if matches!(c, Component::ParentDir) {
            return Err(RefdataError::InvalidPath {
                path: PathBuf::from(path),
                message: "manifest path must not traverse out of the refdata directory".to_string(),
            });
        }
    }

    Ok(p)
}

fn list_files_under(root: &Path) -> Result<BTreeSet<PathBuf>, RefdataError> {
    let mut stack = vec![root.to_path_buf()];
    let mut files = BTreeSet::new();

    while let Some(dir) = stack.pop() {
        for entry in std::fs::read_dir(&dir).map_err(|e| RefdataError::io(&dir, e))? {
            let entry = entry.map_err(|e| RefdataError::io(&dir, e))?;
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.is_file() {
                let rel = path
                    .strip_prefix(root)
                    .map_err(|e| RefdataError::InvalidPath {
                        path: path.clone(),
                        message: format!("failed to relativize path: {e}"),
                    })?
                    .to_path_buf();
                files.insert(rel);
            }
        }
    }

    Ok(files)
}

fn normalize_path(p: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for c in p.components() {
        match c {
            Component::CurDir => {}
            _ => out.push(c.as_os_str()),
        }
    }
    out
}
