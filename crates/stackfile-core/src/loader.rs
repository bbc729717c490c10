//! 統合ローダー
//!
//! ファイル発見、パース、整合性検証を統合

use crate::discovery::find_descriptor_in_current_dir;
use crate::error::Result;
use crate::model::Descriptor;
use crate::parser::parse_yaml_file;
use crate::validate::validate;
use std::path::Path;
use tracing::{debug, info, instrument};

/// デスクリプタファイルをロードして検証済みのDescriptorを生成
///
/// 以下の処理を実行:
/// 1. ファイルの読み込みとパース
/// 2. 整合性検証（ボリューム参照、ホストポートの一意性）
///
/// ランタイムに引き渡せるのはこの関数を通過したモデルのみです。
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_descriptor<P: AsRef<Path>>(path: P) -> Result<Descriptor> {
    debug!("Step 1: Parsing descriptor");
    let descriptor = parse_yaml_file(path.as_ref())?;

    debug!("Step 2: Validating descriptor");
    validate(&descriptor)?;

    info!(
        services = descriptor.services.len(),
        volumes = descriptor.volumes.len(),
        "Descriptor loaded successfully"
    );

    Ok(descriptor)
}

/// カレントディレクトリからデスクリプタを発見してロード
#[instrument]
pub fn load_from_current_dir() -> Result<Descriptor> {
    info!("Starting descriptor load");
    let path = find_descriptor_in_current_dir()?;
    load_descriptor(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StackError;
    use std::fs;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"
version: "3.8"
services:
  db:
    image: postgres
    ports:
      - "5432:5432"
    volumes:
      - data:/var/lib/postgresql/data
volumes:
  data:
"#;

    #[test]
    fn test_load_descriptor() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stackfile.yml");
        fs::write(&path, MINIMAL).unwrap();

        let descriptor = load_descriptor(&path).unwrap();
        assert_eq!(descriptor.services.len(), 1);
        assert_eq!(descriptor.volumes.len(), 1);
    }

    // パースは通るが検証で落ちるケースもロード時に同期的に報告される
    #[test]
    fn test_load_descriptor_rejects_dangling_volume() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stackfile.yml");
        fs::write(
            &path,
            r#"
version: "3.8"
services:
  db:
    image: postgres
    volumes:
      - data:/var/lib/postgresql/data
"#,
        )
        .unwrap();

        let err = load_descriptor(&path).unwrap_err();
        assert!(matches!(err, StackError::MalformedConfig { .. }));
    }

    #[test]
    fn test_load_descriptor_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_descriptor(dir.path().join("stackfile.yml"));
        assert!(matches!(result, Err(StackError::IoError { .. })));
    }
}
