//! On-disk project fixtures

use std::fs;
use std::path::{Path, PathBuf};

use rasalint::engine::ProjectRoot;
use tempfile::TempDir;

pub const DOMAIN: &str = "\
version: \"3.1\"
intents:
  - greet
  - goodbye
responses:
  utter_greet:
    - text: Hey!
  utter_goodbye:
    - text: Bye
";

pub const NLU: &str = "\
nlu:
  - intent: greet
    examples: |
      - hi
  - intent: goodbye
    examples: |
      - bye
";

pub const STORIES: &str = "\
stories:
  - story: greet
    steps:
      - intent: greet
      - action: utter_greet
  - story: goodbye
    steps:
      - intent: goodbye
      - action: utter_goodbye
";

pub fn write(root: &Path, rel: &str, text: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

/// An initialized, fully consistent project in a fresh temporary directory.
pub fn project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "domain.yml", DOMAIN);
    write(root, "data/nlu.yml", NLU);
    write(root, "data/stories.yml", STORIES);
    write(root, "config.yml", "language: en\npipeline: []\n");
    ProjectRoot::init(root).unwrap();
    dir
}

/// The project directory as sessions report it: absolute, symlinks resolved.
pub fn canonical_root(dir: &TempDir) -> PathBuf {
    fs::canonicalize(dir.path()).unwrap()
}

/// A relative path from the current directory to `path`.
#[cfg(unix)]
pub fn relative_to_cwd(path: &Path) -> PathBuf {
    let cwd = std::env::current_dir().unwrap();
    let mut rel = PathBuf::new();
    for _ in cwd.components().skip(1) {
        rel.push("..");
    }
    rel.join(path.strip_prefix("/").unwrap())
}
