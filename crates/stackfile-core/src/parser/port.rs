//! ポートマッピングのパース

use crate::error::{Result, StackError};
use crate::model::{Port, Protocol};

/// `"ホスト:コンテナ[/プロトコル]"` 形式の文字列をパース
///
/// `key_path` はエラーメッセージに使用するキーパス
/// （例: `services.postgres-oauth.ports[0]`）。
pub fn parse_port(spec: &str, key_path: &str) -> Result<Port> {
    let (mapping, protocol) = match spec.split_once('/') {
        Some((mapping, proto)) => (mapping, Protocol::parse(proto)),
        None => (spec, Protocol::Tcp),
    };

    let (host, container) = mapping.split_once(':').ok_or_else(|| {
        StackError::malformed(
            key_path,
            format!("\"{spec}\" は \"ホスト:コンテナ\" 形式ではありません"),
        )
    })?;

    let host: u16 = host.trim().parse().map_err(|_| {
        StackError::malformed(key_path, format!("ホストポート \"{host}\" が整数ではありません"))
    })?;
    let container: u16 = container.trim().parse().map_err(|_| {
        StackError::malformed(
            key_path,
            format!("コンテナポート \"{container}\" が整数ではありません"),
        )
    })?;

    Ok(Port {
        host,
        container,
        protocol,
    })
}
