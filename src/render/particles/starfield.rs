//! 视差星空
//!
//! 管理固定数量的星星：按帧时间推进位置，回收离开屏幕的星星，
//! 并绘制到调用方提供的像素表面上。

use crate::render::color::Rgb;
use crate::render::particles::star::{SpawnRegion, Star};
use crate::render::surface::{PixelSurface, SurfaceLock};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 默认星星数量
pub const DEFAULT_STAR_COUNT: usize = 200;

/// 星星越过屏幕边缘多少像素后才会被回收
pub const RESPAWN_MARGIN: f32 = 10.0;

/// 星空模拟与渲染器
///
/// 随机数生成器由星空自己持有，构造时播种一次；测试可以通过
/// [`StarField::with_seed`] 或 [`StarField::with_rng`] 注入固定种子。
///
/// # 示例
///
/// ```
/// use starfield_menu::render::{ImageSurface, StarField};
///
/// let mut surface = ImageSurface::new(320, 240);
/// let mut stars = StarField::with_seed(320, 240, 100, 7);
/// stars.update(0.016);
/// stars.render(&mut surface);
/// ```
pub struct StarField<R: Rng = StdRng> {
    width: u32,
    height: u32,
    stars: Vec<Star>,
    speed_multiplier: f32,
    tint: Rgb,
    rng: R,
}

impl StarField<StdRng> {
    /// 以系统熵播种创建星空
    pub fn new(width: u32, height: u32, count: usize) -> Self {
        Self::with_rng(width, height, count, StdRng::from_entropy())
    }

    /// 以固定种子创建星空，结果可复现
    pub fn with_seed(width: u32, height: u32, count: usize, seed: u64) -> Self {
        Self::with_rng(width, height, count, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> StarField<R> {
    pub fn with_rng(width: u32, height: u32, count: usize, rng: R) -> Self {
        let mut field = Self {
            width,
            height,
            stars: Vec::new(),
            speed_multiplier: 1.0,
            tint: Rgb::WHITE,
            rng,
        };
        field.init(count);
        field
    }

    /// 丢弃所有星星并在整个可见区域内重新生成 `count` 颗
    pub fn init(&mut self, count: usize) {
        self.stars.clear();
        self.stars.reserve_exact(count);
        for _ in 0..count {
            let star = Star::spawn(&mut self.rng, self.width, self.height, SpawnRegion::Anywhere);
            self.stars.push(star);
        }
        tracing::debug!(
            target: "starfield",
            count,
            width = self.width,
            height = self.height,
            "Starfield seeded"
        );
    }

    /// 推进 `dt_seconds` 秒
    ///
    /// 向下滚动时越过底边 `H + 10` 的星星在屏幕上方重生；倍率为负时，
    /// 越过顶边 `-10` 的星星在屏幕下方重生。底边检查只在向下滚动时生效。
    pub fn update(&mut self, dt_seconds: f32) {
        let scale = dt_seconds * self.speed_multiplier;
        let bottom = self.height as f32 + RESPAWN_MARGIN;

        for star in &mut self.stars {
            let step = star.speed * scale;
            star.position.y += step;

            if step >= 0.0 && star.position.y > bottom {
                *star = Star::spawn(&mut self.rng, self.width, self.height, SpawnRegion::AboveTop);
            } else if step < 0.0 && star.position.y < -RESPAWN_MARGIN {
                *star =
                    Star::spawn(&mut self.rng, self.width, self.height, SpawnRegion::BelowBottom);
            }
        }
    }

    /// 锁定表面并绘制全部星星，返回时解锁
    pub fn render<S: PixelSurface + ?Sized>(&self, surface: &mut S) {
        let mut frame = SurfaceLock::acquire(surface);
        self.render_unlocked(&mut frame);
    }

    /// 在调用方已持有的锁内绘制，便于与其他图层合成同一帧
    pub fn render_unlocked<S: PixelSurface + ?Sized>(&self, frame: &mut SurfaceLock<'_, S>) {
        let width = self.width as i32;
        let height = self.height as i32;

        for star in &self.stars {
            let color = star.color.scale_by(self.tint);
            let x = star.position.x.round() as i32;
            let y = star.position.y.round() as i32;

            if star.radius <= 0 {
                if (0..width).contains(&x) && (0..height).contains(&y) {
                    frame.put_pixel(x, y, color);
                }
            } else if y + star.radius >= 0 && y - star.radius < height {
                // 水平方向的裁剪交给表面
                frame.put_circle(x, y, star.radius, color);
            }
        }
    }

    /// 设置全局速度倍率，下一次 `update` 生效；负值使星星反向移动
    pub fn set_speed_multiplier(&mut self, multiplier: f32) {
        self.speed_multiplier = multiplier;
    }

    /// 设置全局色调，下一次渲染生效
    pub fn set_color_tint(&mut self, r: u8, g: u8, b: u8) {
        self.tint = Rgb::new(r, g, b);
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    pub fn color_tint(&self) -> Rgb {
        self.tint
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// 直接修改星星（用于强制特定状态）
    pub fn stars_mut(&mut self) -> &mut [Star] {
        &mut self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::particles::star::DepthLayer;
    use crate::render::surface::ImageSurface;
    use glam::Vec2;
    use proptest::prelude::*;

    fn far_star(x: f32, y: f32) -> Star {
        Star {
            position: Vec2::new(x, y),
            speed: 20.0,
            radius: 0,
            depth: DepthLayer::Far,
            color: Rgb::new(200, 200, 200),
        }
    }

    #[test]
    fn test_default_state() {
        let field = StarField::with_seed(100, 100, DEFAULT_STAR_COUNT, 1);
        assert_eq!(field.len(), DEFAULT_STAR_COUNT);
        assert_eq!(field.speed_multiplier(), 1.0);
        assert_eq!(field.color_tint(), Rgb::WHITE);
    }

    #[test]
    fn test_init_replaces_all_stars() {
        let mut field = StarField::with_seed(100, 100, 10, 1);
        field.init(25);
        assert_eq!(field.len(), 25);
        field.init(0);
        assert!(field.is_empty());
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = StarField::with_seed(320, 200, 50, 99);
        let b = StarField::with_seed(320, 200, 50, 99);
        assert_eq!(a.stars(), b.stars());
    }

    #[test]
    fn test_update_moves_down() {
        let mut field = StarField::with_seed(100, 100, 1, 5);
        field.stars_mut()[0] = far_star(50.0, 50.0);
        field.update(1.0);
        assert_eq!(field.stars()[0].position, Vec2::new(50.0, 70.0));
    }

    #[test]
    fn test_respawn_boundary() {
        let mut field = StarField::with_seed(100, 100, 1, 5);

        // 恰好位于 H + 10 不重生
        field.stars_mut()[0] = far_star(50.0, 110.0);
        field.update(0.0);
        assert_eq!(field.stars()[0].position.y, 110.0);

        field.stars_mut()[0] = far_star(50.0, 110.0);
        field.update(0.01);
        let y = field.stars()[0].position.y;
        assert!((-20.0..=-1.0).contains(&y), "y = {}", y);
    }

    #[test]
    fn test_reverse_motion_respawns_at_bottom() {
        let mut field = StarField::with_seed(100, 100, 1, 5);
        field.set_speed_multiplier(-1.0);
        field.stars_mut()[0] = far_star(50.0, 0.0);
        field.update(1.0);
        let y = field.stars()[0].position.y;
        assert!((101.0..=120.0).contains(&y), "y = {}", y);

        // 继续反向滚动：从下方进入，不会被送回顶部
        for _ in 0..10 {
            field.update(0.016);
            let y = field.stars()[0].position.y;
            assert!(y > 0.0 && y < 120.0, "y = {}", y);
        }
    }

    #[test]
    fn test_reverse_respawns_stay_below_until_scrolled_in() {
        let mut field = StarField::with_seed(100, 100, 200, 11);
        field.set_speed_multiplier(-1.0);
        for star in field.stars_mut() {
            star.position.y = 0.0;
        }
        // 最慢的星星 10 px/s，两秒后全部越过 -10
        field.update(2.0);
        for star in field.stars() {
            assert!((101.0..=120.0).contains(&star.position.y), "y = {}", star.position.y);
        }

        for _ in 0..10 {
            field.update(0.016);
        }
        for star in field.stars() {
            assert!(star.position.y > 80.0, "y = {}", star.position.y);
        }
    }

    #[test]
    fn test_fresh_top_respawn_is_not_recycled_again() {
        let mut field = StarField::with_seed(100, 100, 1, 5);
        field.stars_mut()[0] = far_star(10.0, -20.0);
        field.update(0.016);
        assert!(field.stars()[0].position.y < 0.0);
        assert_eq!(field.stars()[0].position.x, 10.0);
    }

    #[test]
    fn test_render_pixel_and_tint() {
        let mut field = StarField::with_seed(100, 100, 1, 5);
        field.stars_mut()[0] = far_star(50.0, 70.0);
        field.set_color_tint(0, 255, 0);

        let mut surface = ImageSurface::new(100, 100);
        field.render(&mut surface);
        assert!(!surface.is_locked());
        assert_eq!(surface.pixel(50, 70), Some(Rgb::new(0, 200, 0)));
    }

    #[test]
    fn test_render_rounds_to_nearest_pixel() {
        let mut field = StarField::with_seed(10, 10, 1, 5);
        field.stars_mut()[0] = far_star(2.6, 3.4);

        let mut surface = ImageSurface::new(10, 10);
        field.render(&mut surface);
        assert_eq!(surface.pixel(3, 3), Some(Rgb::new(200, 200, 200)));
    }

    proptest! {
        #[test]
        fn test_init_invariants(count in 0usize..300, seed in any::<u64>()) {
            let field = StarField::with_seed(640, 480, count, seed);
            prop_assert_eq!(field.len(), count);
            for star in field.stars() {
                prop_assert!(star.is_consistent());
                prop_assert!((0.0..640.0).contains(&star.position.x));
                prop_assert!((0.0..480.0).contains(&star.position.y));
            }
        }

        #[test]
        fn test_updates_keep_stars_consistent(
            seed in any::<u64>(),
            steps in prop::collection::vec(0.0f32..0.5, 1..60),
        ) {
            let mut field = StarField::with_seed(200, 150, 64, seed);
            for dt in steps {
                field.update(dt);
                prop_assert_eq!(field.len(), 64);
                for star in field.stars() {
                    prop_assert!(star.is_consistent());
                    prop_assert!(star.position.y <= 150.0 + RESPAWN_MARGIN);
                }
            }
        }

        #[test]
        fn test_displacement_scales_with_multiplier(
            multiplier in 0.1f32..4.0,
            dt in 0.001f32..0.05,
        ) {
            let mut single = StarField::with_seed(1000, 100_000, 1, 11);
            let mut double = StarField::with_seed(1000, 100_000, 1, 11);
            single.stars_mut()[0] = far_star(5.0, 0.0);
            double.stars_mut()[0] = far_star(5.0, 0.0);
            single.set_speed_multiplier(multiplier);
            double.set_speed_multiplier(multiplier * 2.0);

            single.update(dt);
            double.update(dt);

            let a = single.stars()[0].position.y;
            let b = double.stars()[0].position.y;
            prop_assert!((b - 2.0 * a).abs() <= 1e-4 * b.abs().max(1.0));
        }
    }
}
