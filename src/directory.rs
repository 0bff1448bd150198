use std::env;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Result, SchoolbookError};

const CONTENT_DIR_NAME: &str = ".schoolbook";
const CONTENT_DIR_ENV: &str = "SCHOOLBOOK_DIR";

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| SchoolbookError::General("could not find home directory".to_string()))
}

/// Resolve the content directory with priority:
/// 1. --content-dir CLI flag (highest)
/// 2. SCHOOLBOOK_DIR environment variable
/// 3. Config file contentDirectory
/// 4. Default ~/.schoolbook/ (lowest)
pub fn resolve_content_directory(cli_content_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(custom) = custom_directory_candidate(cli_content_dir)? {
        let resolved = parse_directory(&custom);
        if !resolved.is_dir() {
            return Err(SchoolbookError::InvalidDirectory(format!(
                "{custom}: no such directory"
            )));
        }
        return Ok(resolved);
    }

    let home = home_dir()?;
    Ok(home.join(CONTENT_DIR_NAME))
}

fn custom_directory_candidate(cli_content_dir: Option<&Path>) -> Result<Option<String>> {
    // Priority 1: CLI flag
    if let Some(dir) = cli_content_dir {
        let dir_str = dir.to_string_lossy().to_string();
        if dir_str.trim().is_empty() {
            return Err(SchoolbookError::MissingContentDirValue);
        }
        return Ok(Some(dir_str));
    }

    // Priority 2: Environment variable
    if let Ok(env_dir) = env::var(CONTENT_DIR_ENV) {
        if !env_dir.trim().is_empty() {
            return Ok(Some(env_dir));
        }
    }

    // Priority 3: Config file
    if let Ok(config) = Config::load() {
        let configured = config.content_directory.trim();
        if !configured.is_empty() && configured != "~" {
            return Ok(Some(configured.to_string()));
        }
    }

    Ok(None)
}

fn parse_directory(directory: &str) -> PathBuf {
    let expanded = expand_directory(directory);
    PathBuf::from(&expanded)
        .canonicalize()
        .unwrap_or_else(|_| PathBuf::from(&expanded))
}

fn expand_directory(directory: &str) -> String {
    if directory.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            let rest = directory.trim_start_matches('~');
            return format!("{}{}", home.to_string_lossy(), rest);
        }
    }
    directory.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilde_expands_to_home() {
        let home = dirs::home_dir().unwrap().to_string_lossy().to_string();
        assert_eq!(expand_directory("~/content"), format!("{home}/content"));
    }

    #[test]
    fn test_plain_paths_pass_through() {
        assert_eq!(expand_directory("/srv/school"), "/srv/school");
    }

    #[test]
    fn test_empty_cli_flag_is_an_error() {
        let err = resolve_content_directory(Some(Path::new(""))).unwrap_err();
        assert!(matches!(err, SchoolbookError::MissingContentDirValue));
    }
}
