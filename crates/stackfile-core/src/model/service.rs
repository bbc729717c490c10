//! サービス定義

use super::port::Port;
use super::volume::Mount;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// サービス定義
///
/// YAML形式：
/// ```yaml
/// services:
///   postgres-oauth:
///     image: postgres
///     container_name: postgres-oauth
///     ports:
///       - "5432:5432"
///     environment:
///       - POSTGRES_USER=admin
///     volumes:
///       - progresDB:/var/lib/postgresql/data
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// コンテナイメージ参照（必須）
    pub image: String,
    /// コンテナ名（未指定時はランタイム側で自動命名）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
    /// 公開ポートマッピング
    #[serde(default)]
    pub ports: Vec<Port>,
    /// 名前付きボリュームのマウント
    #[serde(default)]
    pub volumes: Vec<Mount>,
    /// 環境変数
    #[serde(default)]
    pub environment: HashMap<String, String>,
}
