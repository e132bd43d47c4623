use crate::error::Result;
use label_lens_common::Error;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub tesseract_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            tesseract_path: "tesseract".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 設定ファイルを読む。ファイルがなければ既定値、読めなければ Error::Config
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let unreadable = |e: &dyn std::fmt::Display| {
            Error::Config(format!("{}: {}", config_path.display(), e))
        };
        let content = std::fs::read_to_string(config_path).map_err(|e| unreadable(&e))?;
        let config: Config = serde_json::from_str(&content).map_err(|e| unreadable(&e))?;
        Ok(config)
    }

    /// 壊れた設定でも修復用のコマンドが動くように既定値で続行する
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from_or_default(&path),
            Err(e) => {
                tracing::warn!("設定を読めないため既定値を使います: {}", e);
                Self::default()
            }
        }
    }

    fn load_from_or_default(config_path: &Path) -> Self {
        Self::load_from(config_path).unwrap_or_else(|e| {
            tracing::warn!("設定を読めないため既定値を使います: {}", e);
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("label-lens").join("config.json"))
    }

    /// APIキー（環境変数を優先）。未設定なら None
    ///
    /// 未設定の扱いは解析時に判定する（通信前に MissingApiKey）
    pub fn api_key(&self) -> Option<String> {
        Self::resolve_api_key(std::env::var(API_KEY_ENV).ok(), self.api_key.clone())
    }

    fn resolve_api_key(from_env: Option<String>, from_file: Option<String>) -> Option<String> {
        from_env
            .filter(|k| !k.trim().is_empty())
            .or_else(|| from_file.filter(|k| !k.trim().is_empty()))
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }
}
