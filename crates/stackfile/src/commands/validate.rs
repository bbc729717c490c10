use colored::Colorize;
use std::path::Path;

pub fn handle(file: Option<&Path>) -> anyhow::Result<()> {
    println!("{}", "デスクリプタを検証中...".blue());

    // デスクリプタファイルを解決
    let path = match super::resolve_descriptor(file) {
        Ok(path) => path,
        Err(e) => {
            eprintln!();
            eprintln!("{}", "✗ デスクリプタが見つかりません".red().bold());
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    println!("デスクリプタ: {}", path.display().to_string().cyan());

    match stackfile_core::load_descriptor(&path) {
        Ok(descriptor) => {
            println!("{}", "✓ デスクリプタは正常です！".green().bold());
            println!();
            println!("サマリー:");
            println!("  バージョン: {}", descriptor.version);
            println!("  サービス: {}個", descriptor.services.len());
            for name in descriptor.service_names() {
                let service = &descriptor.services[name];
                let ports: Vec<String> =
                    service.ports.iter().map(|p| p.to_string()).collect();
                let port_info = if ports.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", ports.join(", "))
                };
                println!("    - {} ({}){}", name.cyan(), service.image, port_info);
            }
            println!("  ボリューム: {}個", descriptor.volumes.len());
            for name in descriptor.volume_names() {
                println!("    - {}", name.cyan());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!();
            eprintln!("{}", "✗ 設定エラー".red().bold());
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
