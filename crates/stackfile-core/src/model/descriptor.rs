//! デスクリプタ定義

use super::service::Service;
use super::volume::Volume;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// デスクリプタ - デプロイメントの設計図
///
/// 1つのデプロイメントを構成するサービス群と名前付きボリュームを定義し、
/// 外部のコンテナランタイムに引き渡される静的な構成を記述します。
/// パース時に生成され、以降は変更されません。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    /// フォーマットバージョン（例: "3.8"）
    pub version: String,
    /// このデプロイメントで定義されるサービス
    pub services: HashMap<String, Service>,
    /// トップレベルの名前付きボリューム
    #[serde(default)]
    pub volumes: HashMap<String, Volume>,
}

impl Descriptor {
    /// サービス名をソート済みで返す（表示用）
    pub fn service_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.services.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// ボリューム名をソート済みで返す（表示用）
    pub fn volume_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.volumes.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}
