//! パイプライン実行モジュール

use crate::advise;
use crate::collect::Collector;
use crate::estimate;
use crate::persist::Persister;
use chrono::Local;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

/// 収集→計算→アドバイス→保存を順に実行する
///
/// 各ステージの失敗はユーザー向けメッセージとして出力し、
/// 後続のステージは実行しない。ステージのエラーは呼び出し元へ伝播させず、
/// 出力チャネル自体のIOエラーのみをResultで返す。
pub fn run<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    persister: &Persister,
) -> io::Result<()> {
    // 収集
    let collected = Collector::new(input, &mut output).collect();
    let record = match collected {
        Ok(record) => record,
        Err(e) => {
            warn!("入力収集に失敗: {}", e);
            writeln!(output, "{}", e)?;
            return Ok(());
        }
    };
    info!("活動記録を収集しました: {:?}", record);

    // 計算
    let total = match estimate::estimate(&record) {
        Ok(total) => total,
        Err(e) => {
            warn!("排出量計算に失敗: {}", e);
            writeln!(output, "{}", e)?;
            return Ok(());
        }
    };
    info!("排出量合計: {:.2} kg CO2", total);

    // アドバイス
    advise::print_advice(&mut output, total)?;

    // 保存（失敗してもアドバイスまでの結果は表示済み）
    let recorded_at = Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
    let footprint = record.into_footprint(total, recorded_at);
    match persister.save(&footprint) {
        Ok(()) => {
            info!("レコードを保存しました: {}", persister.path().display());
            writeln!(output, "記録を {} に保存しました。", persister.path().display())?;
        }
        Err(e) => {
            warn!("レコード保存に失敗: {}", e);
            writeln!(output, "記録の保存に失敗しました: {}", e)?;
        }
    }

    Ok(())
}
