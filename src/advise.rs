//! アドバイス生成モジュール

use std::io::{self, Write};

/// 排出量の深刻度ティア
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Low,
    Moderate,
    High,
}

impl Tier {
    /// 排出量合計からティアを判定
    ///
    /// 高い閾値から順に評価する。ちょうど50.0はModerate、ちょうど20.0はLow。
    pub fn from_total(total: f64) -> Self {
        if total > 50.0 {
            Tier::High
        } else if total > 20.0 {
            Tier::Moderate
        } else {
            Tier::Low
        }
    }

    /// ティアの見出しメッセージ
    pub fn headline(self) -> &'static str {
        match self {
            Tier::High => "排出量を減らすための提案:",
            Tier::Moderate => "良い調子ですが、改善の余地があります:",
            Tier::Low => "素晴らしい！今日のカーボンフットプリントは少なめです。",
        }
    }

    /// ティア別のアドバイス（Lowには改善提案はなく、維持を促す一言のみ）
    pub fn suggestions(self) -> &'static [&'static str] {
        match self {
            Tier::High => &[
                "できるだけ公共交通機関やカープールを利用しましょう。",
                "使っていない機器はコンセントから抜いて節電しましょう。",
                "リサイクルとコンポストでごみを減らしましょう。",
            ],
            Tier::Moderate => &[
                "短い距離は徒歩や自転車で移動しましょう。",
                "省エネ家電を使いましょう。",
                "使い捨てプラスチックを避けましょう。",
            ],
            Tier::Low => &["このまま持続可能な生活を続けましょう。"],
        }
    }
}

/// 排出量合計とティア別アドバイスを出力
///
/// 合計は小数点以下2桁で表示する。下流へ値は返さない。
pub fn print_advice<W: Write>(output: &mut W, total: f64) -> io::Result<()> {
    writeln!(output, "本日の排出量合計: {:.2} kg CO2", total)?;

    let tier = Tier::from_total(total);
    writeln!(output, "{}", tier.headline())?;
    for suggestion in tier.suggestions() {
        writeln!(output, "- {}", suggestion)?;
    }

    Ok(())
}
