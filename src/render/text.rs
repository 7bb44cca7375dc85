// ============================================================================
// 文本渲染协作接口
// 菜单只需要测量和绘制单行文本；字体光栅化由实现方负责
// ============================================================================

use crate::render::color::Rgb;
use crate::render::surface::{PixelSurface, SurfaceLock};

/// 单行文本渲染器
pub trait TextRenderer {
    /// 返回文本在给定字号下的像素尺寸 `(w, h)`
    fn measure(&self, text: &str, font_size: u32) -> (i32, i32);

    /// 以 `(x, y)` 为左上角绘制文本
    fn draw<S: PixelSurface + ?Sized>(
        &self,
        frame: &mut SurfaceLock<'_, S>,
        text: &str,
        font_size: u32,
        x: i32,
        y: i32,
        color: Rgb,
    );
}

/// 等宽方块文本渲染器
///
/// 每个字形占 `0.6 × size` 宽、`size` 高的单元格，字形画成实心块，
/// 空白字符只占位。没有字体资源时菜单用它完成布局和绘制。
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockTextRenderer;

impl BlockTextRenderer {
    fn cell_size(font_size: u32) -> (i32, i32) {
        let h = font_size.max(1) as i32;
        let w = ((font_size as f32 * 0.6).round() as i32).max(1);
        (w, h)
    }
}

impl TextRenderer for BlockTextRenderer {
    fn measure(&self, text: &str, font_size: u32) -> (i32, i32) {
        let (cell_w, cell_h) = Self::cell_size(font_size);
        (cell_w * text.chars().count() as i32, cell_h)
    }

    fn draw<S: PixelSurface + ?Sized>(
        &self,
        frame: &mut SurfaceLock<'_, S>,
        text: &str,
        font_size: u32,
        x: i32,
        y: i32,
        color: Rgb,
    ) {
        let (cell_w, cell_h) = Self::cell_size(font_size);
        let pad = cell_w / 8;
        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let gx = x + i as i32 * cell_w;
            frame.put_rect(gx + pad, y + pad, cell_w - 2 * pad, cell_h - 2 * pad, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::ImageSurface;

    #[test]
    fn test_measure_scales_with_length() {
        let text = BlockTextRenderer;
        assert_eq!(text.measure("PLAY", 75), (45 * 4, 75));
        assert_eq!(text.measure("", 50), (0, 50));
    }

    #[test]
    fn test_spaces_are_not_drawn() {
        let text = BlockTextRenderer;
        let mut surface = ImageSurface::new(40, 20);
        {
            let mut frame = SurfaceLock::acquire(&mut surface);
            text.draw(&mut frame, "A B", 10, 0, 0, Rgb::WHITE);
        }
        // 第一个字形单元 [0,6)，第二个 [6,12) 为空格
        assert_eq!(surface.pixel(2, 5), Some(Rgb::WHITE));
        assert_eq!(surface.pixel(8, 5), Some(Rgb::BLACK));
        assert_eq!(surface.pixel(14, 5), Some(Rgb::WHITE));
    }
}
