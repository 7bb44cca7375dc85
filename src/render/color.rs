//! 8 位 RGB 颜色
//!
//! 星空与菜单共用的颜色类型，提供色调（tint）乘法。

use serde::{Deserialize, Serialize};

/// 三通道 8 位颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 按通道乘以色调：`channel * tint / 255`，整数截断
    ///
    /// 色调为 255 时通道不变，为 0 时通道归零。
    pub fn scale_by(self, tint: Rgb) -> Rgb {
        Rgb {
            r: scale_channel(self.r, tint.r),
            g: scale_channel(self.g, tint.g),
            b: scale_channel(self.b, tint.b),
        }
    }

    /// 转换为 `image` 的 RGBA 像素（不透明）
    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, 255])
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

fn scale_channel(channel: u8, tint: u8) -> u8 {
    // 255 * 255 / 255 最大为 255，不会溢出 u8
    (u16::from(channel) * u16::from(tint) / 255) as u8
}
