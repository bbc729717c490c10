//! デスクリプタの整合性検証
//!
//! パース後・ランタイム引き渡し前に実行される静的チェック。
//! 違反はすべてロード時に同期的に報告されます。

use crate::error::{Result, StackError};
use crate::model::Descriptor;
use std::collections::HashMap;
use tracing::debug;

/// デスクリプタ全体の整合性を検証
///
/// チェック内容:
/// - 各マウントの参照先がトップレベルの volumes に宣言されていること
/// - ホストポートがデプロイメント全体で一意であること
/// - container_name がサービス間で重複していないこと
pub fn validate(descriptor: &Descriptor) -> Result<()> {
    debug!(
        services = descriptor.services.len(),
        volumes = descriptor.volumes.len(),
        "Validating descriptor"
    );

    let mut host_ports: HashMap<u16, &str> = HashMap::new();
    let mut container_names: HashMap<&str, &str> = HashMap::new();

    // サービス名順に走査（エラーメッセージを決定的にするため）
    for name in descriptor.service_names() {
        let service = &descriptor.services[name];

        for (i, mount) in service.volumes.iter().enumerate() {
            if !descriptor.volumes.contains_key(&mount.source) {
                return Err(StackError::malformed(
                    format!("services.{name}.volumes[{i}]"),
                    format!(
                        "ボリューム \"{}\" はトップレベルの volumes に宣言されていません",
                        mount.source
                    ),
                ));
            }
        }

        for (i, port) in service.ports.iter().enumerate() {
            if let Some(holder) = host_ports.insert(port.host, name) {
                return Err(StackError::malformed(
                    format!("services.{name}.ports[{i}]"),
                    format!(
                        "ホストポート {} はサービス \"{holder}\" と重複しています",
                        port.host
                    ),
                ));
            }
        }

        if let Some(container_name) = service.container_name.as_deref() {
            if let Some(holder) = container_names.insert(container_name, name) {
                return Err(StackError::malformed(
                    format!("services.{name}.container_name"),
                    format!(
                        "コンテナ名 \"{container_name}\" はサービス \"{holder}\" と重複しています"
                    ),
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Mount, Port, Protocol, Service, Volume};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn descriptor_with(services: Vec<(&str, Service)>, volumes: Vec<&str>) -> Descriptor {
        Descriptor {
            version: "3.8".to_string(),
            services: services
                .into_iter()
                .map(|(n, s)| (n.to_string(), s))
                .collect(),
            volumes: volumes
                .into_iter()
                .map(|n| (n.to_string(), Volume::default()))
                .collect(),
        }
    }

    #[test]
    fn test_validate_ok() {
        let descriptor = descriptor_with(
            vec![(
                "db",
                Service {
                    image: "postgres".to_string(),
                    ports: vec![Port {
                        host: 5432,
                        container: 5432,
                        protocol: Protocol::Tcp,
                    }],
                    volumes: vec![Mount {
                        source: "data".to_string(),
                        target: PathBuf::from("/var/lib/postgresql/data"),
                        read_only: false,
                    }],
                    ..Default::default()
                },
            )],
            vec!["data"],
        );

        assert!(validate(&descriptor).is_ok());
    }

    #[test]
    fn test_validate_dangling_volume() {
        let descriptor = descriptor_with(
            vec![(
                "db",
                Service {
                    image: "postgres".to_string(),
                    volumes: vec![Mount {
                        source: "missing".to_string(),
                        target: PathBuf::from("/data"),
                        read_only: false,
                    }],
                    ..Default::default()
                },
            )],
            vec![],
        );

        let err = validate(&descriptor).unwrap_err();
        match err {
            StackError::MalformedConfig { path, message } => {
                assert_eq!(path, "services.db.volumes[0]");
                assert!(message.contains("missing"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_duplicate_host_port() {
        let web = Service {
            image: "nginx".to_string(),
            ports: vec![Port {
                host: 8080,
                container: 80,
                protocol: Protocol::Tcp,
            }],
            ..Default::default()
        };
        let api = Service {
            image: "myapp".to_string(),
            ports: vec![Port {
                host: 8080,
                container: 3000,
                protocol: Protocol::Tcp,
            }],
            ..Default::default()
        };
        let descriptor = descriptor_with(vec![("api", api), ("web", web)], vec![]);

        let err = validate(&descriptor).unwrap_err();
        assert!(matches!(err, StackError::MalformedConfig { .. }));
        assert!(err.to_string().contains("8080"));
    }

    // 同一サービス内でのホストポート重複も拒否される
    #[test]
    fn test_validate_duplicate_host_port_same_service() {
        let db = Service {
            image: "postgres".to_string(),
            ports: vec![
                Port {
                    host: 5432,
                    container: 5432,
                    protocol: Protocol::Tcp,
                },
                Port {
                    host: 5432,
                    container: 5433,
                    protocol: Protocol::Tcp,
                },
            ],
            ..Default::default()
        };
        let descriptor = descriptor_with(vec![("db", db)], vec![]);

        assert!(validate(&descriptor).is_err());
    }

    #[test]
    fn test_validate_duplicate_container_name() {
        let a = Service {
            image: "nginx".to_string(),
            container_name: Some("front".to_string()),
            ..Default::default()
        };
        let b = Service {
            image: "caddy".to_string(),
            container_name: Some("front".to_string()),
            ..Default::default()
        };
        let descriptor = descriptor_with(vec![("a", a), ("b", b)], vec![]);

        let err = validate(&descriptor).unwrap_err();
        assert!(err.to_string().contains("front"));
    }

    // 未参照のトップレベルボリュームは許容される（サービスから独立したライフサイクル）
    #[test]
    fn test_validate_unreferenced_volume_ok() {
        let descriptor = descriptor_with(
            vec![(
                "db",
                Service {
                    image: "postgres".to_string(),
                    ..Default::default()
                },
            )],
            vec!["orphan"],
        );

        assert!(validate(&descriptor).is_ok());
    }
}
