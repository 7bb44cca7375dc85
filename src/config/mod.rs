/// 统一配置系统
///
/// 提供TOML/JSON配置文件、环境变量覆盖和验证
use crate::impl_default;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod menu;
pub mod starfield;

pub use menu::{MenuConfig, MenuTheme};
pub use starfield::StarfieldConfig;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读取错误
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 验证错误
    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 应用主配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 星空配置
    #[serde(default)]
    pub starfield: StarfieldConfig,

    /// 菜单配置
    #[serde(default)]
    pub menu: MenuConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从TOML文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_toml_str(&content)
    }

    /// 从TOML字符串解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 从JSON文件加载配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_json_str(&content)
    }

    /// 从JSON字符串解析配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 保存为TOML文件
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 保存为JSON文件
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 从环境变量覆盖配置，无法解析的值被忽略
    pub fn apply_env_overrides(&mut self) {
        if let Some(count) = env_parse("STARFIELD_COUNT") {
            self.starfield.star_count = count;
        }
        if let Some(speed) = env_parse("STARFIELD_SPEED") {
            self.starfield.speed_multiplier = speed;
        }
        if let Some(seed) = env_parse("STARFIELD_SEED") {
            self.starfield.seed = Some(seed);
        }
        if let Some(width) = env_parse("MENU_WIDTH") {
            self.menu.width = width;
        }
        if let Some(height) = env_parse("MENU_HEIGHT") {
            self.menu.height = height;
        }
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        self.starfield.validate()?;
        self.menu.validate()?;
        Ok(())
    }

    /// 自动查找并加载配置文件
    ///
    /// 按以下顺序查找：
    /// 1. ./starfield.toml
    /// 2. ./starfield.json
    /// 3. <config_dir>/starfield/config.toml
    /// 4. 使用默认配置
    ///
    /// 日志系统此时尚未初始化，所以返回实际使用的文件路径由调用方记录。
    pub fn load_or_default() -> (Self, Option<PathBuf>) {
        let mut candidates = vec![
            PathBuf::from("starfield.toml"),
            PathBuf::from("starfield.json"),
        ];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join("starfield").join("config.toml"));
        }

        for path in candidates {
            let loaded = match path.extension().and_then(|e| e.to_str()) {
                Some("json") => Self::from_json_file(&path),
                _ => Self::from_toml_file(&path),
            };
            if let Ok(config) = loaded {
                return (config, Some(path));
            }
        }

        (Self::default(), None)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|val| val.parse().ok())
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别（RUST_LOG 未设置时使用）
    pub level: LogLevel,
}

impl_default!(LoggingConfig {
    level: LogLevel::Info,
});

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    /// 跟踪
    Trace,
    /// 调试
    Debug,
    /// 信息
    Info,
    /// 警告
    Warn,
    /// 错误
    Error,
}

impl LogLevel {
    /// `EnvFilter` 指令字符串
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.starfield.star_count, 500);
        assert_eq!(config.menu.width, 1920);
    }

    #[test]
    fn test_toml_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.menu.height, parsed.menu.height);
        assert_eq!(config.starfield.tint, parsed.starfield.tint);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [starfield]
            star_count = 42
            speed_multiplier = 2.0
            tint = { r = 0, g = 255, b = 0 }
            seed = 9
            "#,
        )
        .unwrap();
        assert_eq!(config.starfield.star_count, 42);
        assert_eq!(config.starfield.seed, Some(9));
        assert_eq!(config.menu.width, 1920);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_json_serialization() {
        let config = AppConfig::default();
        let json_str = serde_json::to_string(&config).unwrap();
        let parsed = AppConfig::from_json_str(&json_str).unwrap();
        assert_eq!(config.starfield.star_count, parsed.starfield.star_count);
    }

    #[test]
    fn test_validation_errors() {
        let mut config = AppConfig::default();
        config.menu.width = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));

        let mut config = AppConfig::default();
        config.starfield.speed_multiplier = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.menu.max_frame_dt = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_speed_is_valid() {
        let mut config = AppConfig::default();
        config.starfield.speed_multiplier = -1.5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("starfield.toml");
        let mut config = AppConfig::default();
        config.starfield.star_count = 77;
        config.save_toml(&path).unwrap();
        let loaded = AppConfig::from_toml_file(&path).unwrap();
        assert_eq!(loaded.starfield.star_count, 77);

        let json_path = dir.path().join("starfield.json");
        config.save_json(&json_path).unwrap();
        assert_eq!(
            AppConfig::from_json_file(&json_path).unwrap().starfield.star_count,
            77
        );
    }

    #[test]
    fn test_missing_file_is_file_error() {
        let err = AppConfig::from_toml_file("/nonexistent/starfield.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileError(_)));
    }
}
