//! 时间源
//!
//! 菜单循环通过单调毫秒计数器计算帧间隔，星空只接收算好的秒数。

use std::time::Instant;

/// 单调毫秒计数器
pub trait TickSource {
    fn ticks_ms(&mut self) -> u64;
}

/// 基于 `Instant` 的系统时钟
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for SystemClock {
    fn ticks_ms(&mut self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// 手动推进的时钟
///
/// 每次读取后自动前进 `step_ms`，无窗口运行时模拟固定帧率。
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now_ms: u64,
    step_ms: u64,
}

impl ManualClock {
    pub fn new(step_ms: u64) -> Self {
        Self { now_ms: 0, step_ms }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
    }
}

impl TickSource for ManualClock {
    fn ticks_ms(&mut self) -> u64 {
        let now = self.now_ms;
        self.now_ms += self.step_ms;
        now
    }
}

/// 两次读数之间的秒数，上限为 `max_dt`
///
/// 时钟回退时返回 0。
pub fn frame_delta(last_ms: u64, now_ms: u64, max_dt: f32) -> f32 {
    let dt = now_ms.saturating_sub(last_ms) as f32 / 1000.0;
    dt.min(max_dt)
}
