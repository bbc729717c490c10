//! ボリューム定義

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// トップレベルの名前付きボリューム
///
/// 名前はデスクリプタの `volumes` マップのキーが保持します。
/// ボリューム自体はデプロイメントの存続期間中永続し、
/// 個々のサービスのライフサイクルから独立しています。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {}

/// サービスからのボリュームマウント
///
/// デスクリプタ上では `"名前:パス"` 形式の文字列で表現されます
/// （例: `"progresDB:/var/lib/postgresql/data"`、末尾 `:ro` で読み取り専用）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mount {
    /// 参照する名前付きボリューム名
    pub source: String,
    /// コンテナ内のマウントパス
    pub target: PathBuf,
    #[serde(default)]
    pub read_only: bool,
}

impl fmt::Display for Mount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.target.display())?;
        if self.read_only {
            write!(f, ":ro")?;
        }
        Ok(())
    }
}
