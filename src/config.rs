use crate::error::{CardsError, Result};
use hanzi_cards_common::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENDPOINT_ENV: &str = "HANZI_CARDS_ENDPOINT";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 翻訳APIのエンドポイント
    pub endpoint: String,
    /// カード保存先（未指定ならデータディレクトリ）
    pub store_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            store_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CardsError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("hanzi-cards").join("config.json"))
    }

    /// 環境変数を優先したエンドポイント
    pub fn endpoint(&self) -> String {
        match std::env::var(ENDPOINT_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self.endpoint.clone(),
        }
    }

    /// カード保存先
    pub fn store_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.store_path {
            return Ok(path.clone());
        }
        let data = dirs::data_dir()
            .ok_or_else(|| CardsError::Config("データディレクトリが見つかりません".into()))?;
        Ok(data.join("hanzi-cards").join("store.json"))
    }

    pub fn set_endpoint(&mut self, url: String) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CardsError::Config(format!("URLではありません: {}", url)));
        }
        self.endpoint = url;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.store_path.is_none());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"store_path": "/tmp/cards.json"}"#).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.store_path, Some(PathBuf::from("/tmp/cards.json")));
    }

    #[test]
    fn test_explicit_store_path() {
        let config = Config {
            store_path: Some(PathBuf::from("deck.json")),
            ..Default::default()
        };
        assert_eq!(config.store_path().unwrap(), PathBuf::from("deck.json"));
    }
}
