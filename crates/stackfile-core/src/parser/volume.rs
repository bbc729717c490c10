//! ボリューム定義・マウントのパース

use crate::error::{Result, StackError};
use crate::model::{Mount, Volume};
use serde_yaml::Value;
use std::collections::HashMap;
use std::path::PathBuf;

/// トップレベルの volumes マッピングをパース
///
/// 各エントリの値は null または空マッピングのみ許容されます
/// （ドライバーオプション等は対象外）。
pub fn parse_volumes(value: &Value) -> Result<HashMap<String, Volume>> {
    let mapping = value.as_mapping().ok_or_else(|| {
        StackError::malformed("volumes", "volumes はマッピングである必要があります")
    })?;

    let mut volumes = HashMap::new();
    for (name, body) in mapping {
        let name = name.as_str().ok_or_else(|| {
            StackError::malformed("volumes", "ボリューム名は文字列である必要があります")
        })?;

        let is_empty = match body {
            Value::Null => true,
            Value::Mapping(m) => m.is_empty(),
            _ => false,
        };
        if !is_empty {
            return Err(StackError::malformed(
                format!("volumes.{name}"),
                "ボリューム定義は空である必要があります",
            ));
        }

        volumes.insert(name.to_string(), Volume::default());
    }

    Ok(volumes)
}

/// `"名前:パス[:ro]"` 形式のマウント文字列をパース
pub fn parse_mount(spec: &str, key_path: &str) -> Result<Mount> {
    let (source, rest) = spec.split_once(':').ok_or_else(|| {
        StackError::malformed(
            key_path,
            format!("\"{spec}\" は \"名前:パス\" 形式ではありません"),
        )
    })?;

    if source.is_empty() {
        return Err(StackError::malformed(key_path, "ボリューム名が空です"));
    }

    let (target, read_only) = match rest.strip_suffix(":ro") {
        Some(target) => (target, true),
        None => (rest, false),
    };

    if !target.starts_with('/') {
        return Err(StackError::malformed(
            key_path,
            format!("マウントパス \"{target}\" は絶対パスである必要があります"),
        ));
    }

    Ok(Mount {
        source: source.to_string(),
        target: PathBuf::from(target),
        read_only,
    })
}
