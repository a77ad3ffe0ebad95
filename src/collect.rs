//! 入力収集モジュール

use crate::error::CollectError;
use crate::record::ActivityRecord;
use std::io::{BufRead, Write};

/// 対話入力から活動記録を収集する
///
/// 入出力をジェネリクスで受け取り、テストではCursor/Vec<u8>を注入する。
pub struct Collector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Collector<R, W> {
    /// 新しいCollectorを作成
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// 4項目を固定順で質問し、活動記録を作成
    ///
    /// いずれかの項目で失敗した場合、部分的な記録は作成されない。
    pub fn collect(&mut self) -> Result<ActivityRecord, CollectError> {
        writeln!(
            self.output,
            "今日の活動を入力してカーボンフットプリントを記録しましょう。"
        )?;

        let transport_mode = self
            .prompt("移動手段 (car/bike/public/walk): ")?
            .trim()
            .to_lowercase();
        let distance_km = self.prompt_number("移動距離", "今日の移動距離 (km): ")?;
        let electricity_kwh = self.prompt_number("電力使用量", "今日の電力使用量 (kWh): ")?;
        let waste_kg = self.prompt_number("廃棄物量", "今日の廃棄物量 (kg): ")?;

        Ok(ActivityRecord {
            transport_mode,
            distance_km,
            electricity_kwh,
            waste_kg,
        })
    }

    /// プロンプトを表示して1行読み取る
    fn prompt(&mut self, message: &str) -> Result<String, CollectError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        let bytes_read = self.input.read_line(&mut line)?;
        if bytes_read == 0 {
            return Err(CollectError::UnexpectedEof);
        }

        Ok(line)
    }

    /// 数値項目を質問し、非負のf64として解釈する
    fn prompt_number(&mut self, field: &'static str, message: &str) -> Result<f64, CollectError> {
        let line = self.prompt(message)?;
        let trimmed = line.trim();

        let value: f64 = trimmed.parse().map_err(|_| CollectError::InvalidNumber {
            field,
            value: trimmed.to_string(),
        })?;

        if value < 0.0 {
            return Err(CollectError::NegativeNumber { field, value });
        }

        Ok(value)
    }
}
