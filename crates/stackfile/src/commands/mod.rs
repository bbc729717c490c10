pub mod config;
pub mod list;
pub mod validate;

use std::path::{Path, PathBuf};

/// 引数のパスを解決（未指定ならカレントディレクトリから自動発見）
pub fn resolve_descriptor(file: Option<&Path>) -> stackfile_core::Result<PathBuf> {
    match file {
        Some(path) => Ok(path.to_path_buf()),
        None => stackfile_core::find_descriptor_in_current_dir(),
    }
}
