use checklist_core::paths;
use std::path::{Path, PathBuf};

/// Resolve the checklist root directory.
///
/// Priority:
/// 1. `--root` flag / `CHECKLIST_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `.checklist/`
/// 3. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_marked_ancestor(&cwd).unwrap_or(cwd)
}

fn find_marked_ancestor(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| paths::checklist_dir(dir).is_dir())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_root_wins() {
        let dir = TempDir::new().unwrap();
        let result = resolve_root(Some(dir.path()));
        assert_eq!(result, dir.path());
    }

    #[test]
    fn finds_checklist_dir_above() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".checklist")).unwrap();
        let subdir = dir.path().join("builds/deep");
        std::fs::create_dir_all(&subdir).unwrap();

        assert_eq!(find_marked_ancestor(&subdir).as_deref(), Some(dir.path()));
    }

    #[test]
    fn unmarked_tree_finds_nothing() {
        let dir = TempDir::new().unwrap();
        let subdir = dir.path().join("a/b");
        std::fs::create_dir_all(&subdir).unwrap();
        // Ancestors above the tempdir may be marked on a dev machine, so only
        // check that nothing inside the tree matched.
        let found = find_marked_ancestor(&subdir);
        assert!(found.map_or(true, |p| !p.starts_with(dir.path())));
    }
}
