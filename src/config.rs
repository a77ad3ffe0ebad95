//! 設定モジュール

use crate::error::ConfigError;
use crate::persist::DEFAULT_FILENAME;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// アプリケーション設定
///
/// 起動時に一度だけ読み込み、以降は変更しない。
#[derive(Debug, Clone)]
pub struct Config {
    /// レコードの保存先ファイルパス
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_FILENAME),
        }
    }
}

/// TOML設定ファイル用構造体
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    output_path: Option<String>,
}

/// CLI引数
#[derive(Debug, Default)]
pub struct CliArgs {
    pub output: Option<PathBuf>,
}

impl Config {
    /// 設定を読み込む
    ///
    /// 優先順位: CLI引数 > 設定ファイル > デフォルト値
    pub fn load(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // 設定ファイルを読み込む
        let config_path = config.config_file_path();
        if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            let file_config: FileConfig = toml::from_str(&content)?;
            config.merge_file_config(&file_config);
        }

        // CLI引数で上書き
        config.merge_cli_args(cli_args);

        Ok(config)
    }

    /// 設定ファイルのパスを取得
    fn config_file_path(&self) -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".eco-one").join("config.toml")
    }

    /// ファイル設定をマージ
    fn merge_file_config(&mut self, file_config: &FileConfig) {
        if let Some(ref path) = file_config.output_path {
            self.output_path = PathBuf::from(path);
        }
    }

    /// CLI引数をマージ
    fn merge_cli_args(&mut self, cli_args: &CliArgs) {
        if let Some(ref path) = cli_args.output {
            self.output_path = path.clone();
        }
    }
}
