//! 渲染模块
//!
//! - `color` - 8 位颜色与色调乘法
//! - `surface` - 可锁定像素表面与锁守卫
//! - `particles` - 视差星空
//! - `text` - 文本渲染协作接口

pub mod color;
pub mod particles;
pub mod surface;
pub mod text;

pub use color::Rgb;
pub use particles::{DepthLayer, SpawnRegion, Star, StarField, DEFAULT_STAR_COUNT};
pub use surface::{ImageSurface, PixelSurface, SurfaceLock};
pub use text::{BlockTextRenderer, TextRenderer};
