//! Tree Scanner
//!
//! Recursive walks over the asset root. Symbolic links are followed; a link
//! that points back at one of its ancestors is reported as skipped instead of
//! being entered again.

use std::path::{Component, Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};

/// Result of one walk: the matching paths plus entries that could not be visited
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TreeScan {
    pub paths: Vec<PathBuf>,
    pub skipped: Vec<String>,
}

/// Every directory under `root`, `root` included
pub fn list_directories(root: &Path) -> TreeScan {
    walk(root, |entry| entry.file_type().is_some_and(|ft| ft.is_dir()))
}

/// Every regular file under `root` with the given extension
pub fn list_source_files(root: &Path, extension: &str) -> TreeScan {
    walk(root, |entry| {
        entry.file_type().is_some_and(|ft| ft.is_file())
            && entry.path().extension().is_some_and(|ext| ext == extension)
    })
}

fn walk(root: &Path, keep: impl Fn(&DirEntry) -> bool) -> TreeScan {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(true)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut scan = TreeScan::default();
    for entry in walker {
        match entry {
            Ok(entry) if keep(&entry) => scan.paths.push(normalize(entry.path())),
            Ok(_) => {}
            Err(err) => scan.skipped.push(err.to_string()),
        }
    }
    scan
}

/// Make `path` absolute and drop `.` and `..` components without touching
/// the filesystem; symbolic links are left unresolved
pub fn normalize(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn lists_root_and_nested_directories() {
        let dir = tempdir().unwrap();
        let root = normalize(dir.path());
        fs::create_dir_all(root.join("Plaisio/Form")).unwrap();
        fs::create_dir_all(root.join(".hidden")).unwrap();
        fs::write(root.join("Plaisio/a.ts"), "").unwrap();

        let scan = list_directories(&root);

        assert_eq!(
            scan.paths,
            vec![
                root.clone(),
                root.join(".hidden"),
                root.join("Plaisio"),
                root.join("Plaisio/Form"),
            ]
        );
        assert!(scan.skipped.is_empty());
    }

    #[test]
    fn lists_only_source_files() {
        let dir = tempdir().unwrap();
        let root = normalize(dir.path());
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("a.ts"), "").unwrap();
        fs::write(root.join("a.js"), "").unwrap();
        fs::write(root.join("sub/b.ts"), "").unwrap();
        fs::create_dir_all(root.join("dir.ts")).unwrap();

        let scan = list_source_files(&root, "ts");

        assert_eq!(scan.paths, vec![root.join("a.ts"), root.join("sub/b.ts")]);
    }

    #[test]
    fn normalize_removes_dot_segments() {
        assert_eq!(
            normalize(Path::new("/www/js/./Plaisio/../Form")),
            PathBuf::from("/www/js/Form")
        );
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinks_without_looping() {
        let dir = tempdir().unwrap();
        let root = normalize(dir.path());
        let outside = tempdir().unwrap();
        fs::write(outside.path().join("lib.ts"), "").unwrap();
        std::os::unix::fs::symlink(outside.path(), root.join("linked")).unwrap();
        std::os::unix::fs::symlink(&root, root.join("loop")).unwrap();

        let dirs = list_directories(&root);
        let files = list_source_files(&root, "ts");

        assert!(dirs.paths.contains(&root.join("linked")));
        assert!(!dirs.paths.contains(&root.join("loop")));
        assert_eq!(dirs.skipped.len(), 1);
        assert_eq!(files.paths, vec![root.join("linked/lib.ts")]);
    }
}
