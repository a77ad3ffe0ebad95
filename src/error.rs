//! エラー型定義モジュール

use std::io;
use thiserror::Error;

/// 設定エラー
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IOエラー: {0}")]
    IoError(#[from] io::Error),

    #[error("TOML解析エラー: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// 入力収集エラー
#[derive(Error, Debug)]
pub enum CollectError {
    #[error("{field} を数値として解釈できません: \"{value}\"")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} に負の値は指定できません: {value}")]
    NegativeNumber { field: &'static str, value: f64 },

    #[error("入力が途中で終了しました")]
    UnexpectedEof,

    #[error("入力の読み取りに失敗しました: {0}")]
    IoError(#[from] io::Error),
}

/// 排出量計算エラー
#[derive(Error, Debug)]
pub enum EstimateError {
    #[error("未対応の移動手段です: \"{0}\"（car/bike/public/walk のいずれかを指定してください）")]
    UnknownMode(String),
}

/// レコード保存エラー
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("IOエラー: {0}")]
    IoError(#[from] io::Error),

    #[error("シリアライズエラー: {0}")]
    SerializeError(#[from] serde_json::Error),
}
