//! デスクリプタファイルの発見

use crate::error::{Result, StackError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 探索対象のファイル名（優先順）
const CANDIDATES: [&str; 6] = [
    "stackfile.yml",
    "stackfile.yaml",
    "compose.yml",
    "compose.yaml",
    "docker-compose.yml",
    "docker-compose.yaml",
];

/// デスクリプタファイルを探す
///
/// 以下の優先順位で検索:
/// 1. 環境変数 STACK_FILE (直接パス指定)
/// 2. 指定ディレクトリ内: stackfile.yml, stackfile.yaml, compose.yml,
///    compose.yaml, docker-compose.yml, docker-compose.yaml
pub fn find_descriptor(dir: &Path) -> Result<PathBuf> {
    // 1. 環境変数で直接指定
    if let Ok(config_path) = std::env::var("STACK_FILE") {
        let path = PathBuf::from(config_path);
        if path.exists() {
            debug!(path = %path.display(), "Descriptor from STACK_FILE");
            return Ok(path);
        }
    }

    // 2. 候補ファイル名で検索
    for filename in &CANDIDATES {
        let path = dir.join(filename);
        if path.exists() {
            debug!(path = %path.display(), "Descriptor found");
            return Ok(path);
        }
    }

    Err(StackError::DescriptorNotFound(dir.to_path_buf()))
}

/// カレントディレクトリからデスクリプタファイルを探す
pub fn find_descriptor_in_current_dir() -> Result<PathBuf> {
    let current_dir = std::env::current_dir()?;
    find_descriptor(&current_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_descriptor_prefers_stackfile() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("docker-compose.yml"), "").unwrap();
        fs::write(dir.path().join("stackfile.yml"), "").unwrap();

        let found = find_descriptor(dir.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), "stackfile.yml");
    }

    #[test]
    fn test_find_descriptor_compose_fallback() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("compose.yaml"), "").unwrap();

        let found = find_descriptor(dir.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), "compose.yaml");
    }

    #[test]
    fn test_find_descriptor_not_found() {
        let dir = TempDir::new().unwrap();
        let result = find_descriptor(dir.path());
        assert!(matches!(result, Err(StackError::DescriptorNotFound(_))));
    }
}
