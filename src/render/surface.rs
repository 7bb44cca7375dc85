//! 像素表面抽象
//!
//! 星空和菜单只通过 [`PixelSurface`] 绘制。绘制必须发生在锁定期间，
//! 锁定由 [`SurfaceLock`] 守卫对象表示：创建时 `lock()`，析构时 `unlock()`。
//!
//! ```ignore
//! let mut frame = SurfaceLock::acquire(&mut surface);
//! frame.fill(Rgb::BLACK);
//! starfield.render_unlocked(&mut frame);
//! drop(frame);
//! surface.flip()?;
//! ```

use crate::core::error::{RenderError, RenderResult};
use crate::render::color::Rgb;
use image::RgbaImage;
use std::ops::{Deref, DerefMut};
use std::path::Path;

/// 可锁定的像素表面
pub trait PixelSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// 获取像素缓冲区的独占访问
    fn lock(&mut self);
    /// 释放独占访问
    fn unlock(&mut self);

    /// 写入单个像素；越界写入由实现自行丢弃
    fn put_pixel(&mut self, x: i32, y: i32, color: Rgb);
    /// 以 `(x, y)` 为中心绘制实心圆，实现负责裁剪
    fn put_circle(&mut self, x: i32, y: i32, radius: i32, color: Rgb);
    /// 绘制实心矩形，实现负责裁剪
    fn put_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb);
    /// 用单色填充整个表面
    fn fill(&mut self, color: Rgb);

    /// 呈现当前帧
    fn flip(&mut self) -> RenderResult<()>;
}

/// 表面独占访问守卫
///
/// 持有守卫即表示表面处于锁定状态；`render_unlocked` 一类的函数接收
/// `&mut SurfaceLock` 而不是裸表面，因此调用方无法忘记加锁。
pub struct SurfaceLock<'a, S: PixelSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: PixelSurface + ?Sized> SurfaceLock<'a, S> {
    pub fn acquire(surface: &'a mut S) -> Self {
        surface.lock();
        Self { surface }
    }
}

impl<S: PixelSurface + ?Sized> Deref for SurfaceLock<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: PixelSurface + ?Sized> DerefMut for SurfaceLock<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: PixelSurface + ?Sized> Drop for SurfaceLock<'_, S> {
    fn drop(&mut self) {
        self.surface.unlock();
    }
}

/// 基于 `image::RgbaImage` 的软件表面
///
/// 绘制写入后缓冲，`flip` 将后缓冲复制到前缓冲。
pub struct ImageSurface {
    back: RgbaImage,
    front: RgbaImage,
    lock_depth: u32,
    frames_presented: u64,
}

impl ImageSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            back: RgbaImage::from_pixel(width, height, Rgb::BLACK.to_rgba()),
            front: RgbaImage::from_pixel(width, height, Rgb::BLACK.to_rgba()),
            lock_depth: 0,
            frames_presented: 0,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.lock_depth > 0
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// 读取后缓冲中的像素（越界返回 `None`）
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.back.width() || y >= self.back.height() {
            return None;
        }
        let p = self.back.get_pixel(x, y);
        Some(Rgb::new(p[0], p[1], p[2]))
    }

    /// 最近一次呈现的帧
    pub fn front_buffer(&self) -> &RgbaImage {
        &self.front
    }

    /// 将前缓冲保存为 PNG
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let path = path.as_ref();
        self.front
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| RenderError::SaveFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
    }

    fn write_clipped(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.back.width() && y < self.back.height() {
            self.back.put_pixel(x, y, color.to_rgba());
        }
    }
}

impl PixelSurface for ImageSurface {
    fn width(&self) -> u32 {
        self.back.width()
    }

    fn height(&self) -> u32 {
        self.back.height()
    }

    fn lock(&mut self) {
        self.lock_depth += 1;
    }

    fn unlock(&mut self) {
        self.lock_depth = self.lock_depth.saturating_sub(1);
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        debug_assert!(self.is_locked(), "put_pixel on an unlocked surface");
        self.write_clipped(x, y, color);
    }

    fn put_circle(&mut self, x: i32, y: i32, radius: i32, color: Rgb) {
        debug_assert!(self.is_locked(), "put_circle on an unlocked surface");
        if radius < 0 {
            return;
        }
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    self.write_clipped(x + dx, y + dy, color);
                }
            }
        }
    }

    fn put_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        debug_assert!(self.is_locked(), "put_rect on an unlocked surface");
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.back.width() as i32);
        let y1 = y.saturating_add(h).min(self.back.height() as i32);
        for py in y0..y1 {
            for px in x0..x1 {
                self.back.put_pixel(px as u32, py as u32, color.to_rgba());
            }
        }
    }

    fn fill(&mut self, color: Rgb) {
        debug_assert!(self.is_locked(), "fill on an unlocked surface");
        let rgba = color.to_rgba();
        for p in self.back.pixels_mut() {
            *p = rgba;
        }
    }

    fn flip(&mut self) -> RenderResult<()> {
        if self.is_locked() {
            return Err(RenderError::Surface(
                "flip called while the surface is locked".to_string(),
            ));
        }
        self.front.copy_from_slice(&self.back);
        self.frames_presented += 1;
        tracing::trace!(target: "surface", frame = self.frames_presented, "Frame presented");
        Ok(())
    }
}
