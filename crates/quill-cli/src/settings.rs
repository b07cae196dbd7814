//! Runtime settings for the `quill` binary.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use quill_store_sqlite::DATABASE_FILE_NAME;
use serde::Deserialize;

/// Settings resolved from the config file and `QUILL_*` environment
/// variables.
#[derive(Debug, Deserialize, Clone)]
pub struct CliConfig {
  pub store_path: PathBuf,
}

/// Load configuration from `path` (optional on disk) and the environment.
///
/// `store_override` comes from the command line and wins over both.
pub fn load(
  path: &Path,
  store_override: Option<PathBuf>,
) -> anyhow::Result<CliConfig> {
  let settings = config::Config::builder()
    .set_default("store_path", DATABASE_FILE_NAME)?
    .add_source(config::File::from(path.to_path_buf()).required(false))
    .add_source(config::Environment::with_prefix("QUILL"))
    .build()
    .with_context(|| format!("failed to read config file {}", path.display()))?;

  let mut cfg: CliConfig = settings
    .try_deserialize()
    .context("failed to deserialise CliConfig")?;

  if let Some(store) = store_override {
    cfg.store_path = store;
  }
  cfg.store_path = expand_tilde(&cfg.store_path);

  Ok(cfg)
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use std::io::Write as _;

  use super::*;

  #[test]
  fn missing_file_falls_back_to_default_store() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = load(&dir.path().join("absent.toml"), None).unwrap();
    // QUILL_STORE_PATH in the test environment would legitimately win.
    if std::env::var_os("QUILL_STORE_PATH").is_none() {
      assert_eq!(cfg.store_path, PathBuf::from(DATABASE_FILE_NAME));
    }
  }

  #[test]
  fn command_line_store_wins() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quill.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "store_path = \"from-file.db\"").unwrap();

    let cfg = load(&path, Some(PathBuf::from("cli.db"))).unwrap();
    assert_eq!(cfg.store_path, PathBuf::from("cli.db"));
  }

  #[test]
  fn file_value_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quill.toml");
    std::fs::write(&path, "store_path = \"/tmp/quill/notes.db\"\n").unwrap();

    let cfg = load(&path, None).unwrap();
    if std::env::var_os("QUILL_STORE_PATH").is_none() {
      assert_eq!(cfg.store_path, PathBuf::from("/tmp/quill/notes.db"));
    }
  }

  #[test]
  fn tilde_is_expanded_against_home() {
    let Ok(home) = std::env::var("HOME") else { return };
    assert_eq!(
      expand_tilde(Path::new("~/notes.db")),
      PathBuf::from(home).join("notes.db")
    );
    assert_eq!(expand_tilde(Path::new("rel/notes.db")), PathBuf::from("rel/notes.db"));
  }
}
