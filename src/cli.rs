//! CLIモジュール

use crate::config::{CliArgs, Config};
use crate::estimate::{ALL_MODES, ELECTRICITY_FACTOR, WASTE_FACTOR};
use crate::persist::Persister;
use crate::pipeline;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::info;

/// Eco One - カーボンフットプリント記録ツール
#[derive(Parser, Debug)]
#[command(name = "eco")]
#[command(about = "日々の活動からカーボンフットプリントを推定するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// サブコマンド
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 今日の活動を記録して排出量を計算
    Track {
        /// レコードの保存先ファイルパス
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// 排出係数の一覧を表示
    Factors,
}

/// CLIエントリポイント
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Track { output } => {
            let cli_args = CliArgs { output };
            let config = match Config::load(&cli_args) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("設定の読み込みに失敗しました: {}", e);
                    return Ok(());
                }
            };

            info!("記録を開始します: 保存先 {}", config.output_path.display());
            let persister = Persister::new(config.output_path);

            let stdin = io::stdin();
            let stdout = io::stdout();
            // 失敗はすべてメッセージとして報告済み。出力チャネル自体の
            // エラーだけがここに届くため、報告して正常終了する
            if let Err(e) = pipeline::run(stdin.lock(), stdout.lock(), &persister) {
                eprintln!("出力エラー: {}", e);
            }
        }
        Commands::Factors => {
            print_factors();
        }
    }

    Ok(())
}

/// 排出係数の一覧を表示
fn print_factors() {
    println!("=== 排出係数 ===");
    println!("--- 移動（kg CO2 / km） ---");
    for mode in ALL_MODES {
        println!("{}: {:.2}", mode, mode.factor());
    }
    println!("--- その他 ---");
    println!("電力 (kg CO2 / kWh): {:.2}", ELECTRICITY_FACTOR);
    println!("廃棄物 (kg CO2 / kg): {:.2}", WASTE_FACTOR);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_command_no_args() {
        let cli = Cli::try_parse_from(["eco", "track"]);
        assert!(cli.is_ok());

        if let Commands::Track { output } = cli.unwrap().command {
            assert_eq!(output, None);
        } else {
            panic!("Expected Track command");
        }
    }

    #[test]
    fn test_track_command_with_output() {
        let cli = Cli::try_parse_from(["eco", "track", "--output", "/tmp/out.json"]);
        assert!(cli.is_ok());

        if let Commands::Track { output } = cli.unwrap().command {
            assert_eq!(output, Some(PathBuf::from("/tmp/out.json")));
        } else {
            panic!("Expected Track command");
        }
    }

    #[test]
    fn test_factors_command() {
        let cli = Cli::try_parse_from(["eco", "factors"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Factors));
    }

    #[test]
    fn test_unknown_command_fails() {
        let cli = Cli::try_parse_from(["eco", "report"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_missing_subcommand_fails() {
        let cli = Cli::try_parse_from(["eco"]);
        assert!(cli.is_err());
    }
}
