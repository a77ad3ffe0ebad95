//! レコード保存モジュール

use crate::error::PersistError;
use crate::record::FootprintRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// 既定の保存先ファイル名
pub const DEFAULT_FILENAME: &str = "carbon_footprint.json";

/// 保存先ファイルを管理する
pub struct Persister {
    path: PathBuf,
}

impl Persister {
    /// 新しいPersisterを作成
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// 保存先パスを取得
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// レコードをJSONで保存する
    ///
    /// 既存の内容は完全に上書きする（追記・マージはしない）。
    pub fn save(&self, record: &FootprintRecord) -> Result<(), PersistError> {
        // 親ディレクトリが存在しない場合は作成
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_record(total: f64) -> FootprintRecord {
        FootprintRecord {
            transport_mode: "car".to_string(),
            distance_km: 20.0,
            electricity_kwh: 5.0,
            waste_kg: 2.0,
            total_emissions_kg: total,
            recorded_at: "2025-01-15T08:30:00".to_string(),
        }
    }

    #[test]
    fn test_save_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let persister = Persister::new(temp_dir.path().join("footprint.json"));

        persister.save(&sample_record(10.45)).unwrap();

        let content = fs::read_to_string(persister.path()).unwrap();
        let restored: FootprintRecord = serde_json::from_str(&content).unwrap();
        assert_eq!(restored, sample_record(10.45));
    }

    #[test]
    fn test_save_overwrites_previous_record() {
        let temp_dir = TempDir::new().unwrap();
        let persister = Persister::new(temp_dir.path().join("footprint.json"));

        persister.save(&sample_record(10.45)).unwrap();
        persister.save(&sample_record(99.9)).unwrap();

        let content = fs::read_to_string(persister.path()).unwrap();
        let restored: FootprintRecord = serde_json::from_str(&content).unwrap();

        // 2回目の内容だけが残る
        assert_eq!(restored.total_emissions_kg, 99.9);
        assert_eq!(content.matches("total_emissions_kg").count(), 1);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("footprint.json");
        let persister = Persister::new(path.clone());

        persister.save(&sample_record(1.0)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_to_unwritable_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        // ディレクトリ自体をパスとして指定すると書き込みは失敗する
        let persister = Persister::new(temp_dir.path().to_path_buf());

        let err = persister.save(&sample_record(1.0)).unwrap_err();
        assert!(matches!(err, PersistError::IoError(_)));
    }

    #[test]
    fn test_persisted_json_field_names() {
        let temp_dir = TempDir::new().unwrap();
        let persister = Persister::new(temp_dir.path().join("footprint.json"));

        persister.save(&sample_record(10.45)).unwrap();

        let content = fs::read_to_string(persister.path()).unwrap();
        for field in [
            "transport_mode",
            "distance_km",
            "electricity_kwh",
            "waste_kg",
            "total_emissions_kg",
            "recorded_at",
        ] {
            assert!(content.contains(field), "missing field: {}", field);
        }
    }
}
