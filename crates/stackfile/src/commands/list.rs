use anyhow::Context;
use std::path::Path;

/// サービス名を1行ずつ表示
pub fn handle_services(file: Option<&Path>) -> anyhow::Result<()> {
    let descriptor = load(file)?;
    for name in descriptor.service_names() {
        println!("{name}");
    }
    Ok(())
}

/// ボリューム名を1行ずつ表示
pub fn handle_volumes(file: Option<&Path>) -> anyhow::Result<()> {
    let descriptor = load(file)?;
    for name in descriptor.volume_names() {
        println!("{name}");
    }
    Ok(())
}

fn load(file: Option<&Path>) -> anyhow::Result<stackfile_core::Descriptor> {
    let path = super::resolve_descriptor(file)?;
    stackfile_core::load_descriptor(&path).context("デスクリプタのロードに失敗しました")
}
