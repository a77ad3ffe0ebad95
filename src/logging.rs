//! ログインフラモジュール

use tracing_subscriber::EnvFilter;

/// ログシステムを初期化
///
/// RUST_LOG環境変数でログレベルを設定可能（デフォルト: info）。
/// プロンプトと混ざらないよう、ログは標準エラー出力へ書き出す。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
