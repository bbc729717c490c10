//! YAMLパーサー
//!
//! Stackfileのデスクリプタファイルをパースします。
//! 各エントリ種別のパース処理はモジュールに分離されています。

mod port;
mod service;
mod volume;


// 内部で使用するパース関数
use service::parse_service;
use volume::parse_volumes;

// 外部クレートから再利用可能なパース関数
pub use port::parse_port;
pub use volume::parse_mount;

use crate::error::{Result, StackError};
use crate::model::Descriptor;
use serde_yaml::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// デスクリプタファイルをパースしてDescriptorを生成
pub fn parse_yaml_file<P: AsRef<Path>>(path: P) -> Result<Descriptor> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| StackError::IoError {
        path: path.as_ref().to_path_buf(),
        message: e.to_string(),
    })?;
    parse_yaml_str(&content)
}

/// デスクリプタ文字列をパース
pub fn parse_yaml_str(content: &str) -> Result<Descriptor> {
    let doc: Value = serde_yaml::from_str(content)?;

    let root = doc
        .as_mapping()
        .ok_or_else(|| StackError::malformed(".", "デスクリプタはマッピングである必要があります"))?;

    let mut version: Option<String> = None;
    let mut services = HashMap::new();
    let mut volumes = HashMap::new();

    for (key, value) in root {
        let key = key
            .as_str()
            .ok_or_else(|| StackError::malformed(".", "トップレベルのキーは文字列である必要があります"))?;

        match key {
            "version" => {
                version = Some(scalar_to_string(value).ok_or_else(|| {
                    StackError::malformed("version", "バージョンは文字列である必要があります")
                })?);
            }
            "services" => {
                let mapping = value.as_mapping().ok_or_else(|| {
                    StackError::malformed("services", "services はマッピングである必要があります")
                })?;
                for (name, body) in mapping {
                    let name = name.as_str().ok_or_else(|| {
                        StackError::malformed("services", "サービス名は文字列である必要があります")
                    })?;
                    let service = parse_service(name, body)?;
                    services.insert(name.to_string(), service);
                }
            }
            "volumes" => {
                volumes = parse_volumes(value)?;
            }
            other => {
                return Err(StackError::malformed(
                    other,
                    "不明なトップレベルキーです（version / services / volumes のみ使用できます）",
                ));
            }
        }
    }

    let version = version
        .ok_or_else(|| StackError::malformed("version", "必須キーが定義されていません"))?;

    if services.is_empty() {
        return Err(StackError::malformed(
            "services",
            "少なくとも1つのサービスが必要です",
        ));
    }

    Ok(Descriptor {
        version,
        services,
        volumes,
    })
}

/// スカラー値を文字列化（"3.8" のようなクォートなし数値も許容）
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
