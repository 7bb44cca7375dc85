//! 星星粒子与生成策略
//!
//! 深度层决定半径与速度的分布；初始化与重生共用同一套生成函数，
//! 只有初始位置的区域不同。

use crate::render::color::Rgb;
use glam::Vec2;
use rand::Rng;
use std::ops::RangeInclusive;

/// 重生时距离屏幕边缘的最大偏移（像素）
pub const RESPAWN_OFFSET_MAX: i32 = 20;

/// 视差深度层
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthLayer {
    /// 1: 最近，大而快
    Near,
    /// 2: 中间
    Mid,
    /// 3: 最远，小而慢
    Far,
}

impl DepthLayer {
    pub const ALL: [DepthLayer; 3] = [DepthLayer::Near, DepthLayer::Mid, DepthLayer::Far];

    /// 深度编号（1 = 最近）
    pub fn index(self) -> u8 {
        match self {
            DepthLayer::Near => 1,
            DepthLayer::Mid => 2,
            DepthLayer::Far => 3,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(DepthLayer::Near),
            2 => Some(DepthLayer::Mid),
            3 => Some(DepthLayer::Far),
            _ => None,
        }
    }

    /// 可选半径（0 表示单像素）
    pub fn radius_range(self) -> RangeInclusive<i32> {
        match self {
            DepthLayer::Near => 1..=2,
            DepthLayer::Mid => 1..=1,
            DepthLayer::Far => 0..=0,
        }
    }

    /// 基础下落速度（像素/秒）
    pub fn base_speed(self) -> f32 {
        match self {
            DepthLayer::Near => 80.0,
            DepthLayer::Mid => 45.0,
            DepthLayer::Far => 20.0,
        }
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// 生成区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnRegion {
    /// 整个可见区域 `[0,W) × [0,H)`
    Anywhere,
    /// 屏幕上方 `y ∈ [-20, -1]`
    AboveTop,
    /// 屏幕下方 `y ∈ [H+1, H+20]`
    BelowBottom,
}

/// 单颗星星
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// 亚像素位置
    pub position: Vec2,
    /// 下落速度（像素/秒），使用时再乘以全局倍率
    pub speed: f32,
    /// 绘制半径，0 表示单像素
    pub radius: i32,
    pub depth: DepthLayer,
    pub color: Rgb,
}

impl Star {
    /// 按生成策略随机生成一颗星星，所有字段一起重新抽取
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: u32, height: u32, region: SpawnRegion) -> Self {
        let x = rng.gen_range(0..width.max(1)) as f32;
        let y = match region {
            SpawnRegion::Anywhere => rng.gen_range(0..height.max(1)) as f32,
            SpawnRegion::AboveTop => -(rng.gen_range(1..=RESPAWN_OFFSET_MAX) as f32),
            SpawnRegion::BelowBottom => {
                height as f32 + rng.gen_range(1..=RESPAWN_OFFSET_MAX) as f32
            }
        };

        let depth = DepthLayer::random(rng);
        let radius = rng.gen_range(depth.radius_range());
        let speed = depth.base_speed() * rng.gen_range(0.5f32..1.5);
        let color = random_star_color(rng);

        Self {
            position: Vec2::new(x, y),
            speed,
            radius,
            depth,
            color,
        }
    }

    /// 检查各字段是否与某次合法生成一致
    pub fn is_consistent(&self) -> bool {
        let base = self.depth.base_speed();
        self.depth.radius_range().contains(&self.radius)
            && self.speed >= base * 0.5
            && self.speed <= base * 1.5
            && channel_in_spawn_range(self.color.r, 8)
            && channel_in_spawn_range(self.color.g, 8)
            && channel_in_spawn_range(self.color.b, 16)
    }
}

/// 偏白到偏蓝的星星颜色
fn random_star_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    let base: i32 = rng.gen_range(200..=255);
    let mut jitter = |spread: i32| (base + rng.gen_range(-spread..spread)).clamp(0, 255) as u8;
    let r = jitter(8);
    let g = jitter(8);
    let b = jitter(16);
    Rgb::new(r, g, b)
}

fn channel_in_spawn_range(channel: u8, spread: i32) -> bool {
    i32::from(channel) >= 200 - spread
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_depth_index_round_trip() {
        for depth in DepthLayer::ALL {
            assert_eq!(DepthLayer::from_index(depth.index()), Some(depth));
        }
        assert_eq!(DepthLayer::from_index(0), None);
        assert_eq!(DepthLayer::from_index(4), None);
    }

    #[test]
    fn test_depth_tables() {
        assert_eq!(DepthLayer::Near.radius_range(), 1..=2);
        assert_eq!(DepthLayer::Mid.radius_range(), 1..=1);
        assert_eq!(DepthLayer::Far.radius_range(), 0..=0);
        assert_eq!(DepthLayer::Near.base_speed(), 80.0);
        assert_eq!(DepthLayer::Mid.base_speed(), 45.0);
        assert_eq!(DepthLayer::Far.base_speed(), 20.0);
    }

    #[test]
    fn test_spawn_regions() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let s = Star::spawn(&mut rng, 100, 50, SpawnRegion::Anywhere);
            assert!((0.0..100.0).contains(&s.position.x));
            assert!((0.0..50.0).contains(&s.position.y));

            let s = Star::spawn(&mut rng, 100, 50, SpawnRegion::AboveTop);
            assert!((-20.0..=-1.0).contains(&s.position.y));

            let s = Star::spawn(&mut rng, 100, 50, SpawnRegion::BelowBottom);
            assert!((51.0..=70.0).contains(&s.position.y));
        }
    }

    #[test]
    fn test_spawned_stars_are_consistent() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let s = Star::spawn(&mut rng, 640, 480, SpawnRegion::Anywhere);
            assert!(s.is_consistent(), "{:?}", s);
        }
    }

    #[test]
    fn test_all_depths_appear() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 3];
        for _ in 0..300 {
            let s = Star::spawn(&mut rng, 10, 10, SpawnRegion::Anywhere);
            seen[(s.depth.index() - 1) as usize] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }
}
