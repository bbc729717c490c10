//! デスクリプタのYAML書き出し
//!
//! モデルをファイル上の文字列形式（`"ホスト:コンテナ"` 等）に戻します。
//! 書き出した文字列を再パースすると同一のモデルが得られます（冪等性）。

use crate::error::Result;
use crate::model::{Descriptor, Service};
use serde_yaml::{Mapping, Value};

/// DescriptorをYAML文字列に書き出す
pub fn to_yaml_string(descriptor: &Descriptor) -> Result<String> {
    let mut root = Mapping::new();
    root.insert(
        Value::from("version"),
        Value::from(descriptor.version.as_str()),
    );

    // キー順を決定的にするためソートして書き出す
    let mut services = Mapping::new();
    for name in descriptor.service_names() {
        services.insert(
            Value::from(name),
            service_to_value(&descriptor.services[name]),
        );
    }
    root.insert(Value::from("services"), Value::Mapping(services));

    if !descriptor.volumes.is_empty() {
        let mut volumes = Mapping::new();
        for name in descriptor.volume_names() {
            volumes.insert(Value::from(name), Value::Null);
        }
        root.insert(Value::from("volumes"), Value::Mapping(volumes));
    }

    Ok(serde_yaml::to_string(&Value::Mapping(root))?)
}

fn service_to_value(service: &Service) -> Value {
    let mut body = Mapping::new();
    body.insert(Value::from("image"), Value::from(service.image.as_str()));

    if let Some(container_name) = &service.container_name {
        body.insert(
            Value::from("container_name"),
            Value::from(container_name.as_str()),
        );
    }

    if !service.ports.is_empty() {
        let ports: Vec<Value> = service
            .ports
            .iter()
            .map(|p| Value::from(p.to_string()))
            .collect();
        body.insert(Value::from("ports"), Value::Sequence(ports));
    }

    if !service.environment.is_empty() {
        let mut entries: Vec<String> = service
            .environment
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        entries.sort_unstable();
        let entries: Vec<Value> = entries.into_iter().map(Value::from).collect();
        body.insert(Value::from("environment"), Value::Sequence(entries));
    }

    if !service.volumes.is_empty() {
        let mounts: Vec<Value> = service
            .volumes
            .iter()
            .map(|m| Value::from(m.to_string()))
            .collect();
        body.insert(Value::from("volumes"), Value::Sequence(mounts));
    }

    Value::Mapping(body)
}
