use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory discovery for controller and route source trees.
///
/// Controllers live flat in one directory; routes form a tree of the shape
/// `routes/{public|private}/{Feature}/*.js`. For route files the scanner derives
/// the traversal context (URL prefix, owning feature, route name) directly from
/// each file's relative path, so no mutable state survives between files and the
/// visit order cannot change the result.
///
/// Missing directories are not an error: they simply contribute nothing.

/// A route source file together with its position-derived context.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteFile {
    /// Absolute (or scan-root-relative) path to the file
    pub path: PathBuf,
    /// Relative path below the routes dir, `/`-joined, extension stripped.
    /// Used as the scope key for route-level enum rules.
    pub route_name: String,
    /// URL prefix contributed by feature directories, e.g. `/classes/departments`
    pub prefix: String,
    /// Original-case name of the innermost feature directory, if any
    pub schema_name: Option<String>,
}

/// Lists `.js` files directly inside a controllers directory.
///
/// Non-recursive, matching how controller modules are laid out. Entries are
/// sorted by file name so repeated scans are deterministic.
pub fn controller_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        debug!("Controllers directory missing: {}", dir.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(e) => {
                    warn!("Failed to read controllers entry: {}", e);
                    None
                }
            })
            .filter(|path| path.is_file() && has_js_extension(path))
            .collect(),
        Err(e) => {
            warn!("Failed to read controllers directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };
    files.sort();
    debug!("Found {} controller files in {}", files.len(), dir.display());
    files
}

/// Walks a routes directory and returns every `.js` file with its context.
///
/// `public` and `private` directories are transparent: they neither contribute
/// a URL segment nor a feature name. Every other directory contributes its
/// lower-cased name to the prefix and sets the feature schema name; nested
/// feature directories stack the prefix, with the innermost one winning the
/// schema name. Hidden directories and `node_modules` are skipped.
pub fn route_files(dir: &Path) -> Vec<RouteFile> {
    if !dir.is_dir() {
        debug!("Routes directory missing: {}", dir.display());
        return Vec::new();
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            if e.path() == dir {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            !name.starts_with('.') && name != "node_modules"
        })
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Failed to access path: {}", e);
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() || !has_js_extension(path) {
            continue;
        }
        let Ok(relative) = path.strip_prefix(dir) else {
            continue;
        };

        let components: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .collect();
        let (dirs, file_name) = match components.split_last() {
            Some((file_name, dirs)) => (dirs, file_name.clone()),
            None => continue,
        };

        let feature_dirs: Vec<&String> = dirs
            .iter()
            .filter(|d| d.as_str() != "public" && d.as_str() != "private")
            .collect();
        let prefix: String = feature_dirs
            .iter()
            .map(|d| format!("/{}", d.to_lowercase()))
            .collect();
        let schema_name = feature_dirs.last().map(|d| (*d).clone());

        let mut route_name = dirs.join("/");
        let stem = file_name.trim_end_matches(".js");
        if route_name.is_empty() {
            route_name = stem.to_string();
        } else {
            route_name = format!("{}/{}", route_name, stem);
        }

        files.push(RouteFile {
            path: path.to_path_buf(),
            route_name,
            prefix,
            schema_name,
        });
    }

    debug!("Found {} route files in {}", files.len(), dir.display());
    files
}

fn has_js_extension(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("js")
}
