//! Directory scanner.
//!
//! Walks the certificate directory in file-name order and posts every file
//! whose name ends with the configured suffix. Results are produced lazily;
//! the first error ends the sequence.

use crate::client::LintClient;
use crate::error::{HarnessError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One linted file and the raw response returned for it.
#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub response: String,
}

/// Lazy walk that lints one matching file per `next`.
pub struct Scanner<'a, C: LintClient + ?Sized> {
    root: PathBuf,
    suffix: String,
    client: &'a C,
    walker: walkdir::IntoIter,
    done: bool,
}

/// Start a scan of `root`. Each call makes fresh requests.
pub fn scan<'a, C: LintClient + ?Sized>(
    root: &Path,
    suffix: &str,
    client: &'a C,
) -> Scanner<'a, C> {
    Scanner {
        root: root.to_path_buf(),
        suffix: suffix.to_string(),
        client,
        walker: WalkDir::new(root).sort_by_file_name().into_iter(),
        done: false,
    }
}

impl<'a, C: LintClient + ?Sized> Scanner<'a, C> {
    fn matches(&self, entry: &walkdir::DirEntry) -> bool {
        entry.file_type().is_file()
            && entry
                .file_name()
                .to_string_lossy()
                .ends_with(self.suffix.as_str())
    }
}

impl<'a, C: LintClient + ?Sized> Iterator for Scanner<'a, C> {
    type Item = Result<ScannedFile>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let entry = match self.walker.next()? {
                Ok(e) => e,
                Err(e) => {
                    self.done = true;
                    return Some(Err(HarnessError::Walk {
                        root: self.root.clone(),
                        message: e.to_string(),
                    }));
                }
            };
            if !self.matches(&entry) {
                continue;
            }
            let path = entry.into_path();
            tracing::debug!(path = %path.display(), "linting");
            let result = self.client.lint(&path).map(|response| ScannedFile { path, response });
            if result.is_err() {
                self.done = true;
            }
            return Some(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::tempdir;

    /// Records requested paths and echoes the file name back.
    struct EchoClient {
        seen: RefCell<Vec<PathBuf>>,
        fail_on: Option<&'static str>,
    }

    impl LintClient for EchoClient {
        fn lint(&self, path: &Path) -> Result<String> {
            self.seen.borrow_mut().push(path.to_path_buf());
            let name = path.file_name().unwrap().to_string_lossy().to_string();
            if self.fail_on == Some(name.as_str()) {
                return Err(HarnessError::Network {
                    path: path.to_path_buf(),
                    message: "connection refused".into(),
                });
            }
            Ok(name)
        }
    }

    fn fixture() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("nested/deeper")).unwrap();
        fs::create_dir_all(root.join("dir.pem")).unwrap();
        fs::write(root.join("b.pem"), "b").unwrap();
        fs::write(root.join("a.pem"), "a").unwrap();
        fs::write(root.join("notes.txt"), "t").unwrap();
        fs::write(root.join("a.pem.bak"), "x").unwrap();
        fs::write(root.join("nested/c.pem"), "c").unwrap();
        fs::write(root.join("nested/deeper/d.pem"), "d").unwrap();
        dir
    }

    #[test]
    fn test_scan_visits_matching_files_recursively_in_order() {
        let dir = fixture();
        let client = EchoClient {
            seen: RefCell::new(Vec::new()),
            fail_on: None,
        };
        let names: Vec<String> = scan(dir.path(), ".pem", &client)
            .map(|r| r.unwrap().response)
            .collect();
        assert_eq!(names, vec!["a.pem", "b.pem", "c.pem", "d.pem"]);
    }

    #[test]
    fn test_scan_stops_after_first_error() {
        let dir = fixture();
        let client = EchoClient {
            seen: RefCell::new(Vec::new()),
            fail_on: Some("b.pem"),
        };
        let results: Vec<_> = scan(dir.path(), ".pem", &client).collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(HarnessError::Network { .. })));
        assert_eq!(client.seen.borrow().len(), 2);
    }

    #[test]
    fn test_scan_is_lazy() {
        let dir = fixture();
        let client = EchoClient {
            seen: RefCell::new(Vec::new()),
            fail_on: None,
        };
        let mut it = scan(dir.path(), ".pem", &client);
        assert!(client.seen.borrow().is_empty());
        it.next().unwrap().unwrap();
        assert_eq!(client.seen.borrow().len(), 1);
    }

    #[test]
    fn test_scan_missing_root_is_walk_error() {
        let dir = tempdir().unwrap();
        let client = EchoClient {
            seen: RefCell::new(Vec::new()),
            fail_on: None,
        };
        let results: Vec<_> = scan(&dir.path().join("missing"), ".pem", &client).collect();
        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], Err(HarnessError::Walk { .. })));
    }
}
