//! 菜单主循环
//!
//! 定义 `MenuApp`：轮询事件、计算帧间隔、推进星空，并在一次加锁内
//! 依次绘制背景、星空和菜单，最后呈现。

use crate::config::{AppConfig, LoggingConfig};
use crate::platform::{frame_delta, EventSource, TickSource};
use crate::render::particles::StarField;
use crate::render::surface::{PixelSurface, SurfaceLock};
use crate::render::text::TextRenderer;
use crate::ui::{Menu, MenuAction};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use super::error::AppResult;

/// 初始化日志系统
///
/// `RUST_LOG` 设置时优先使用，否则使用配置中的级别。
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_directive()));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 主菜单应用
///
/// `MenuApp` 持有表面、事件源和时钟这些外部协作者，并负责：
/// - 每帧轮询全部事件并分发给菜单
/// - 按时钟计算帧间隔（带上限）推进星空
/// - 在同一把锁内合成星空与菜单，避免撕裂
///
/// # 示例
///
/// ```
/// use starfield_menu::config::AppConfig;
/// use starfield_menu::core::MenuApp;
/// use starfield_menu::platform::{ManualClock, ScriptedEvents};
/// use starfield_menu::render::{BlockTextRenderer, ImageSurface};
///
/// let mut config = AppConfig::default();
/// config.menu.width = 320;
/// config.menu.height = 240;
/// config.menu.frame_delay_ms = 0;
/// config.starfield.seed = Some(1);
///
/// let surface = ImageSurface::new(320, 240);
/// let mut app = MenuApp::new(
///     &config,
///     surface,
///     ScriptedEvents::new(),
///     ManualClock::new(16),
///     BlockTextRenderer,
/// );
/// assert_eq!(app.run(Some(3)).unwrap(), 3);
/// ```
pub struct MenuApp<S, E, C, T>
where
    S: PixelSurface,
    E: EventSource,
    C: TickSource,
    T: TextRenderer,
{
    surface: S,
    events: E,
    clock: C,
    stars: StarField,
    menu: Menu<T>,
    max_frame_dt: f32,
    frame_delay: Duration,
    last_ticks: u64,
    frames_drawn: u64,
    last_action: Option<MenuAction>,
}

impl<S, E, C, T> MenuApp<S, E, C, T>
where
    S: PixelSurface,
    E: EventSource,
    C: TickSource,
    T: TextRenderer,
{
    pub fn new(config: &AppConfig, surface: S, events: E, mut clock: C, text: T) -> Self {
        let star_config = &config.starfield;
        let (width, height) = (config.menu.width, config.menu.height);
        let mut stars = match star_config.seed {
            Some(seed) => StarField::with_seed(width, height, star_config.star_count, seed),
            None => StarField::new(width, height, star_config.star_count),
        };
        stars.set_speed_multiplier(star_config.speed_multiplier);
        let tint = star_config.tint;
        stars.set_color_tint(tint.r, tint.g, tint.b);

        if surface.width() != width || surface.height() != height {
            tracing::warn!(
                target: "menu",
                surface_width = surface.width(),
                surface_height = surface.height(),
                width,
                height,
                "Surface size differs from configured menu size"
            );
        }

        let last_ticks = clock.ticks_ms();
        Self {
            surface,
            events,
            clock,
            stars,
            menu: Menu::new(&config.menu, text),
            max_frame_dt: config.menu.max_frame_dt,
            frame_delay: Duration::from_millis(config.menu.frame_delay_ms),
            last_ticks,
            frames_drawn: 0,
            last_action: None,
        }
    }

    /// 执行一帧：事件、更新、绘制、呈现
    pub fn run_frame(&mut self) -> AppResult<()> {
        while let Some(event) = self.events.poll_event() {
            if let Some(action) = self.menu.handle_event(&event) {
                self.last_action = Some(action);
            }
        }

        let now = self.clock.ticks_ms();
        let dt = frame_delta(self.last_ticks, now, self.max_frame_dt);
        self.last_ticks = now;

        self.stars.update(dt);

        {
            let mut frame = SurfaceLock::acquire(&mut self.surface);
            frame.fill(self.menu.theme().background_color);
            self.stars.render_unlocked(&mut frame);
            self.menu.draw(&mut frame);
        }
        self.surface.flip()?;

        self.frames_drawn += 1;
        Ok(())
    }

    /// 运行直到菜单请求退出或达到帧数上限，返回本次绘制的帧数
    pub fn run(&mut self, max_frames: Option<u64>) -> AppResult<u64> {
        tracing::info!(target: "menu", stars = self.stars.len(), "Menu loop starting");
        let mut drawn = 0;
        while !self.menu.should_quit() && max_frames.map_or(true, |max| drawn < max) {
            self.run_frame()?;
            drawn += 1;
            if !self.frame_delay.is_zero() {
                std::thread::sleep(self.frame_delay);
            }
        }
        tracing::info!(target: "menu", frames = drawn, quit = self.menu.should_quit(), "Menu loop finished");
        Ok(drawn)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// 事件源（例如向脚本化队列追加事件）
    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    pub fn stars_mut(&mut self) -> &mut StarField {
        &mut self.stars
    }

    pub fn menu(&self) -> &Menu<T> {
        &self.menu
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// 最近一次点击触发的菜单动作
    pub fn last_action(&self) -> Option<MenuAction> {
        self.last_action
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
