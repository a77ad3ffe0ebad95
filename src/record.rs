//! 活動記録モデルモジュール

use serde::{Deserialize, Serialize};

/// 1日分の活動入力
///
/// Collectorが作成し、以降のステージでは変更されない。
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    /// 移動手段（トリム・小文字化済みのトークン）
    pub transport_mode: String,
    /// 移動距離（km）
    pub distance_km: f64,
    /// 電力使用量（kWh）
    pub electricity_kwh: f64,
    /// 廃棄物量（kg）
    pub waste_kg: f64,
}

/// 保存用レコード（排出量計算後の完全な形）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintRecord {
    pub transport_mode: String,
    pub distance_km: f64,
    pub electricity_kwh: f64,
    pub waste_kg: f64,
    /// 排出量合計（kg CO2）
    pub total_emissions_kg: f64,
    /// 記録日時（ローカル時刻、YYYY-MM-DDTHH:MM:SS形式）
    pub recorded_at: String,
}

impl ActivityRecord {
    /// 排出量合計と記録日時を付与して保存用レコードへ変換
    pub fn into_footprint(self, total_emissions_kg: f64, recorded_at: String) -> FootprintRecord {
        FootprintRecord {
            transport_mode: self.transport_mode,
            distance_km: self.distance_km,
            electricity_kwh: self.electricity_kwh,
            waste_kg: self.waste_kg,
            total_emissions_kg,
            recorded_at,
        }
    }
}
