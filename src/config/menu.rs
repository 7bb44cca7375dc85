use super::{ConfigError, ConfigResult};
use crate::impl_default;
use crate::render::color::Rgb;
use serde::{Deserialize, Serialize};

/// 菜单配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// 画面宽度（像素）
    pub width: u32,

    /// 画面高度（像素）
    pub height: u32,

    /// 单帧时间上限（秒），避免卡顿后星星跳跃
    pub max_frame_dt: f32,

    /// 帧间延迟（毫秒），0 = 不等待
    pub frame_delay_ms: u64,

    /// 标题
    pub title: String,

    /// 副标题
    pub subtitle: String,

    /// 配色
    pub theme: MenuTheme,
}

impl_default!(MenuConfig {
    width: 1920,
    height: 1080,
    max_frame_dt: 0.05,
    frame_delay_ms: 16,
    title: "GALAXIAN".to_string(),
    subtitle: "BY BRYSEN LANDIS".to_string(),
    theme: MenuTheme::default(),
});

impl MenuConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ValidationError(
                "Invalid resolution".to_string(),
            ));
        }
        if self.max_frame_dt.is_nan() || self.max_frame_dt <= 0.0 {
            return Err(ConfigError::ValidationError(
                "max_frame_dt must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// 菜单配色与字号
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuTheme {
    pub title_size: u32,
    pub subtitle_size: u32,
    pub item_size: u32,
    pub title_color: Rgb,
    pub subtitle_color: Rgb,
    pub item_color: Rgb,
    pub item_hover_color: Rgb,
    pub button_bg_color: Rgb,
    pub button_bg_hover_color: Rgb,
    pub background_color: Rgb,
}

impl_default!(MenuTheme {
    title_size: 150,
    subtitle_size: 50,
    item_size: 75,
    title_color: Rgb::new(0, 0, 255),
    subtitle_color: Rgb::new(255, 255, 255),
    item_color: Rgb::new(0, 200, 225),
    item_hover_color: Rgb::new(255, 230, 100),
    button_bg_color: Rgb::new(20, 60, 120),
    button_bg_hover_color: Rgb::new(50, 100, 180),
    background_color: Rgb::BLACK,
});
