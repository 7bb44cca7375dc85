//! 星空粒子模块
//!
//! 菜单背景的视差星空，完全在 CPU 上模拟并逐像素绘制。
//!
//! ## 架构设计
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      StarField                           │
//! ├─────────────────────────────────────────────────────────┤
//! │  1. Spawn                                                │
//! │     - 深度层 1..3 决定半径与速度                           │
//! │     - 初始化铺满屏幕，重生出现在屏幕外                      │
//! │                                                          │
//! │  2. Update (每帧)                                        │
//! │     - y += speed * dt * multiplier                       │
//! │     - 越过底边 H + 10 后原地重生                           │
//! │                                                          │
//! │  3. Render (每帧)                                        │
//! │     - 色调乘法                                            │
//! │     - 半径 0 画单像素，否则画实心圆                         │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod star;
pub mod starfield;

pub use star::{DepthLayer, SpawnRegion, Star, RESPAWN_OFFSET_MAX};
pub use starfield::{StarField, DEFAULT_STAR_COUNT, RESPAWN_MARGIN};
