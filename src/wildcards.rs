//! Wildcard resolution: mapping names to candidate value lists
//!
//! Wildcards name externally provided value collections. The engine asks a
//! [`WildcardResolver`] for candidates by name and treats every value that
//! comes back as a template text in its own right. Resolution is
//! infallible at the trait boundary: problems surface as an empty list and
//! the generator's empty-wildcard policy decides what that means.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use regex::Regex;

/// Source of wildcard candidate values
pub trait WildcardResolver: Send + Sync {
    /// All candidates for `name`, in a stable order. May be empty.
    fn resolve(&self, name: &str) -> Vec<String>;
}

/// In-memory resolver backed by a sorted map
///
/// Collections keep their insertion order under exact lookups. A name
/// containing `*` glob-matches the registered collection names; matched
/// collections are merged, sorted, and deduplicated.
#[derive(Debug, Clone, Default)]
pub struct MemoryResolver {
    collections: BTreeMap<String, Vec<String>>,
}

impl MemoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named collection, replacing any existing one.
    pub fn insert<I, V>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.collections
            .insert(name.into(), values.into_iter().map(Into::into).collect());
    }

    /// Registered collection names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }
}

impl WildcardResolver for MemoryResolver {
    fn resolve(&self, name: &str) -> Vec<String> {
        if !name.contains('*') {
            return self.collections.get(name).cloned().unwrap_or_default();
        }
        let matcher = match glob_regex(name) {
            Some(matcher) => matcher,
            None => return Vec::new(),
        };
        let mut merged: Vec<String> = self
            .collections
            .iter()
            .filter(|(key, _)| matcher.is_match(key))
            .flat_map(|(_, values)| values.iter().cloned())
            .collect();
        merged.sort();
        merged.dedup();
        merged
    }
}

/// Filesystem resolver over a directory of collection files
///
/// A name maps to `<root>/<name>.txt`, `.json`, or `.yaml`; nested names
/// use `/` separators. Text files contribute their non-blank,
/// non-`#`-comment lines; JSON files must hold a string array and YAML
/// files a string list. Values from every matching file are merged,
/// sorted, and deduplicated. Unreadable or malformed files log a warning
/// and contribute nothing.
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
    root: PathBuf,
}

const COLLECTION_EXTENSIONS: [&str; 3] = ["txt", "json", "yaml"];

impl DirectoryResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All collection names under the root, `/`-separated and sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .collection_files()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        names.sort();
        names.dedup();
        names
    }

    fn collection_files(&self) -> Vec<(String, PathBuf)> {
        let mut files = Vec::new();
        collect_files(&self.root, &self.root, &mut files);
        files
    }
}

impl WildcardResolver for DirectoryResolver {
    fn resolve(&self, name: &str) -> Vec<String> {
        let name = normalize_name(name);
        if name.is_empty() {
            return Vec::new();
        }
        let mut values = if name.contains('*') {
            let matcher = match glob_regex(&name) {
                Some(matcher) => matcher,
                None => return Vec::new(),
            };
            let mut merged = Vec::new();
            for (candidate, path) in self.collection_files() {
                if matcher.is_match(&candidate) {
                    merged.extend(load_collection(&path));
                }
            }
            merged
        } else {
            let mut merged = Vec::new();
            for extension in COLLECTION_EXTENSIONS {
                let path = self.root.join(format!("{}.{}", name, extension));
                if path.is_file() {
                    merged.extend(load_collection(&path));
                }
            }
            merged
        };
        values.sort();
        values.dedup();
        values
    }
}

/// The resolver-facing form of a wildcard name: surrounding wildcard wrap
/// characters trimmed, path separators normalized to `/`.
fn normalize_name(name: &str) -> String {
    name.trim_matches('_').replace('\\', "/")
}

/// A `*` glob as an anchored regex over whole names.
fn glob_regex(pattern: &str) -> Option<Regex> {
    let escaped = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    Regex::new(&format!("\\A{}\\z", escaped)).ok()
}

fn collect_files(root: &Path, dir: &Path, files: &mut Vec<(String, PathBuf)>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("Cannot read wildcard directory {}: {}", dir.display(), err);
            return;
        }
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        // Hidden files and directories are not collections.
        if file_name.starts_with('.') {
            continue;
        }
        if path.is_dir() {
            collect_files(root, &path, files);
            continue;
        }
        let supported = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map_or(false, |extension| {
                COLLECTION_EXTENSIONS.contains(&extension)
            });
        if !supported {
            continue;
        }
        if let Some(name) = relative_name(root, &path) {
            files.push((name, path));
        }
    }
}

/// `<root>/animals/cats.txt` -> `animals/cats`
fn relative_name(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let stem = relative.with_extension("");
    let mut parts = Vec::new();
    for component in stem.components() {
        parts.push(component.as_os_str().to_str()?.to_string());
    }
    Some(parts.join("/"))
}

fn load_collection(path: &Path) -> Vec<String> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            warn!("Cannot read wildcard file {}: {}", path.display(), err);
            return Vec::new();
        }
    };
    match path.extension().and_then(|extension| extension.to_str()) {
        Some("txt") => text
            .lines()
            .map(str::trim)
            .filter(|line| !is_skippable_line(line))
            .map(str::to_string)
            .collect(),
        Some("json") => match serde_json::from_str::<Vec<String>>(&text) {
            Ok(values) => values,
            Err(err) => {
                warn!(
                    "Wildcard file {} is not a JSON string array: {}",
                    path.display(),
                    err
                );
                Vec::new()
            }
        },
        Some("yaml") => match serde_yaml::from_str::<Vec<String>>(&text) {
            Ok(values) => values,
            Err(err) => {
                warn!(
                    "Wildcard file {} is not a YAML string list: {}",
                    path.display(),
                    err
                );
                Vec::new()
            }
        },
        _ => Vec::new(),
    }
}

/// Blank lines and `#` comment lines carry no values.
fn is_skippable_line(line: &str) -> bool {
    line.is_empty() || line.starts_with('#')
}
