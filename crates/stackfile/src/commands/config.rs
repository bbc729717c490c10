use anyhow::Context;
use std::path::Path;

/// 正規化したデスクリプタを標準出力へ書き出す
pub fn handle(file: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let path = super::resolve_descriptor(file)?;
    let descriptor =
        stackfile_core::load_descriptor(&path).context("デスクリプタのロードに失敗しました")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
    } else {
        print!("{}", stackfile_core::to_yaml_string(&descriptor)?);
    }

    Ok(())
}
