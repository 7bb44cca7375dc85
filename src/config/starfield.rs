use super::{ConfigError, ConfigResult};
use crate::impl_default;
use crate::render::color::Rgb;
use serde::{Deserialize, Serialize};

/// 星空配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// 星星数量（密度）
    pub star_count: usize,

    /// 全局速度倍率，负值反向滚动
    pub speed_multiplier: f32,

    /// 随机种子（None = 系统熵）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// 全局色调
    pub tint: Rgb,
}

impl_default!(StarfieldConfig {
    star_count: 500,
    speed_multiplier: 1.0,
    seed: None,
    tint: Rgb::new(255, 252, 220),
});

impl StarfieldConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.speed_multiplier.is_finite() {
            return Err(ConfigError::ValidationError(
                "Speed multiplier must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
