mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stack")]
#[command(about = "デプロイメントデスクリプタのロードと検証", long_about = None)]
struct Cli {
    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// デスクリプタを検証してサマリーを表示
    Validate {
        /// デスクリプタファイル（省略時は自動発見、STACK_FILE 環境変数も可）
        file: Option<PathBuf>,
    },
    /// 正規化したデスクリプタを出力
    Config {
        /// デスクリプタファイル（省略時は自動発見）
        file: Option<PathBuf>,
        /// YAMLではなくJSONでモデルを出力
        #[arg(long)]
        json: bool,
    },
    /// サービス名の一覧を表示
    Services {
        /// デスクリプタファイル（省略時は自動発見）
        file: Option<PathBuf>,
    },
    /// ボリューム名の一覧を表示
    Volumes {
        /// デスクリプタファイル（省略時は自動発見）
        file: Option<PathBuf>,
    },
    /// バージョンを表示
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ログはstderrに出力（stdoutはconfigの出力に使う）
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Validate { file } => commands::validate::handle(file.as_deref()),
        Commands::Config { file, json } => commands::config::handle(file.as_deref(), json),
        Commands::Services { file } => commands::list::handle_services(file.as_deref()),
        Commands::Volumes { file } => commands::list::handle_volumes(file.as_deref()),
        Commands::Version => {
            println!("stackfile {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
