//! サービスエントリのパース

use super::port::parse_port;
use super::volume::parse_mount;
use crate::error::{Result, StackError};
use crate::model::Service;
use serde_yaml::Value;

/// services 配下の1エントリをパース
pub fn parse_service(name: &str, body: &Value) -> Result<Service> {
    let base_path = format!("services.{name}");

    let mapping = body.as_mapping().ok_or_else(|| {
        StackError::malformed(&base_path, "サービス定義はマッピングである必要があります")
    })?;

    let mut service = Service::default();
    let mut image_seen = false;

    for (key, value) in mapping {
        let key = key.as_str().ok_or_else(|| {
            StackError::malformed(&base_path, "サービスのキーは文字列である必要があります")
        })?;

        match key {
            "image" => {
                service.image = value
                    .as_str()
                    .ok_or_else(|| {
                        StackError::malformed(
                            format!("{base_path}.image"),
                            "イメージ参照は文字列である必要があります",
                        )
                    })?
                    .to_string();
                image_seen = true;
            }
            "container_name" => {
                service.container_name = Some(
                    value
                        .as_str()
                        .ok_or_else(|| {
                            StackError::malformed(
                                format!("{base_path}.container_name"),
                                "コンテナ名は文字列である必要があります",
                            )
                        })?
                        .to_string(),
                );
            }
            "ports" => {
                let entries = as_string_sequence(value, &format!("{base_path}.ports"))?;
                for (i, entry) in entries.iter().enumerate() {
                    let key_path = format!("{base_path}.ports[{i}]");
                    service.ports.push(parse_port(entry, &key_path)?);
                }
            }
            "volumes" => {
                let entries = as_string_sequence(value, &format!("{base_path}.volumes"))?;
                for (i, entry) in entries.iter().enumerate() {
                    let key_path = format!("{base_path}.volumes[{i}]");
                    service.volumes.push(parse_mount(entry, &key_path)?);
                }
            }
            "environment" => {
                parse_environment(value, &base_path, &mut service)?;
            }
            other => {
                return Err(StackError::malformed(
                    format!("{base_path}.{other}"),
                    "不明なサービスキーです（image / container_name / ports / volumes / environment のみ使用できます）",
                ));
            }
        }
    }

    if !image_seen {
        return Err(StackError::malformed(
            format!("{base_path}.image"),
            "必須キーが定義されていません",
        ));
    }

    Ok(service)
}

/// environment をパース
///
/// `- KEY=value` のリスト形式と `KEY: value` のマッピング形式の両方をサポート。
fn parse_environment(value: &Value, base_path: &str, service: &mut Service) -> Result<()> {
    match value {
        Value::Sequence(entries) => {
            for (i, entry) in entries.iter().enumerate() {
                let key_path = format!("{base_path}.environment[{i}]");
                let entry = entry.as_str().ok_or_else(|| {
                    StackError::malformed(&key_path, "環境変数は文字列である必要があります")
                })?;
                let (k, v) = entry.split_once('=').ok_or_else(|| {
                    StackError::malformed(
                        &key_path,
                        format!("\"{entry}\" は \"KEY=value\" 形式ではありません"),
                    )
                })?;
                service
                    .environment
                    .insert(k.trim().to_string(), v.trim().to_string());
            }
        }
        Value::Mapping(entries) => {
            for (k, v) in entries {
                let key_path = format!("{base_path}.environment");
                let k = k.as_str().ok_or_else(|| {
                    StackError::malformed(&key_path, "環境変数名は文字列である必要があります")
                })?;
                let v = match v {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    _ => {
                        return Err(StackError::malformed(
                            format!("{key_path}.{k}"),
                            "環境変数の値はスカラーである必要があります",
                        ));
                    }
                };
                service.environment.insert(k.to_string(), v);
            }
        }
        _ => {
            return Err(StackError::malformed(
                format!("{base_path}.environment"),
                "environment はリストまたはマッピングである必要があります",
            ));
        }
    }

    Ok(())
}

/// 文字列のシーケンスとして取り出す
fn as_string_sequence(value: &Value, key_path: &str) -> Result<Vec<String>> {
    let seq = value.as_sequence().ok_or_else(|| {
        StackError::malformed(key_path, "リストである必要があります")
    })?;

    seq.iter()
        .enumerate()
        .map(|(i, v)| {
            v.as_str().map(|s| s.to_string()).ok_or_else(|| {
                StackError::malformed(
                    format!("{key_path}[{i}]"),
                    "エントリは文字列である必要があります",
                )
            })
        })
        .collect()
}
