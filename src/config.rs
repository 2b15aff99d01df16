use serde::Deserialize;
use std::fs;
use std::io;
use thiserror::Error;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Listing page the collector fetches, one GET per run.
    pub listings_url: String,
    /// Sent as-is; the board serves a captcha page to the default reqwest UA.
    pub user_agent: String,
    /// CSV artifact shared by the three binaries.
    pub raw_data_path: String,
    /// Directory for exported recommendation files.
    pub output_dir: String,
    pub heatmap_skills_per_title: usize,
    pub bar_chart_skills: usize,
    pub co_skill_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listings_url: "https://remoteok.com/remote-dev-jobs".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            raw_data_path: "raw_jobs.csv".to_string(),
            output_dir: "outputs".to_string(),
            heatmap_skills_per_title: 5,
            bar_chart_skills: 10,
            co_skill_limit: 5,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config read error: {0}")]
    Io(#[from] io::Error),
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads `config.json`; a missing file is not an error, every field has a
/// working default.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(serde_json::from_str(&content)?),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config("no-such-config.json").unwrap();
        assert_eq!(config.raw_data_path, "raw_jobs.csv");
        assert_eq!(config.co_skill_limit, 5);
    }

    #[test]
    fn partial_config_keeps_defaults_for_absent_fields() {
        let config: AppConfig =
            serde_json::from_str(r#"{"raw_data_path": "jobs.csv"}"#).unwrap();
        assert_eq!(config.raw_data_path, "jobs.csv");
        assert_eq!(config.bar_chart_skills, 10);
    }
}
