//! 排出量計算モジュール

use crate::error::EstimateError;
use crate::record::ActivityRecord;
use std::fmt;
use std::str::FromStr;

/// 電力の排出係数（kg CO2 / kWh）
pub const ELECTRICITY_FACTOR: f64 = 0.85;

/// 廃棄物の排出係数（kg CO2 / kg）
pub const WASTE_FACTOR: f64 = 1.00;

/// 移動手段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    Car,
    Bike,
    Public,
    Walk,
}

/// 全移動手段の一覧（係数表示用）
pub const ALL_MODES: [TransportMode; 4] = [
    TransportMode::Car,
    TransportMode::Bike,
    TransportMode::Public,
    TransportMode::Walk,
];

impl TransportMode {
    /// 距離あたりの排出係数（kg CO2 / km）
    pub fn factor(self) -> f64 {
        match self {
            TransportMode::Car => 0.21,
            TransportMode::Bike => 0.05,
            TransportMode::Public => 0.10,
            TransportMode::Walk => 0.00,
        }
    }
}

impl FromStr for TransportMode {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car" => Ok(TransportMode::Car),
            "bike" => Ok(TransportMode::Bike),
            "public" => Ok(TransportMode::Public),
            "walk" => Ok(TransportMode::Walk),
            other => Err(EstimateError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportMode::Car => "car",
            TransportMode::Bike => "bike",
            TransportMode::Public => "public",
            TransportMode::Walk => "walk",
        };
        write!(f, "{}", name)
    }
}

/// 活動記録から排出量合計（kg CO2）を計算
///
/// 移動手段が未対応トークンの場合はEstimateError::UnknownModeを返す。
/// 副作用なしの純粋関数。
pub fn estimate(record: &ActivityRecord) -> Result<f64, EstimateError> {
    let mode: TransportMode = record.transport_mode.parse()?;

    let transport = mode.factor() * record.distance_km;
    let electricity = ELECTRICITY_FACTOR * record.electricity_kwh;
    let waste = WASTE_FACTOR * record.waste_kg;

    Ok(transport + electricity + waste)
}
