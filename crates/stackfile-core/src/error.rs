use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StackError {
    #[error("YAMLパースエラー: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("ファイル読み込みエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("IO エラー: {path}\n理由: {message}")]
    IoError { path: PathBuf, message: String },

    #[error("無効な設定: {path}\n理由: {message}")]
    MalformedConfig { path: String, message: String },

    #[error(
        "デスクリプタが見つかりません\n探索開始位置: {0}\nヒント: stackfile.yml または compose.yml を含むディレクトリで実行してください"
    )]
    DescriptorNotFound(PathBuf),
}

impl StackError {
    /// キーパス付きの MalformedConfig を生成
    pub fn malformed(path: impl Into<String>, message: impl Into<String>) -> Self {
        StackError::MalformedConfig {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StackError>;
