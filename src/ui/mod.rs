//! UI 系统模块
//!
//! 主菜单：标题、副标题和三个按钮纵向居中排列。
//!
//! ## 功能特性
//!
//! - 布局计算（居中堆叠、按钮内边距）
//! - 包围盒命中测试
//! - 悬停状态切换
//! - 点击分发

use crate::config::{MenuConfig, MenuTheme};
use crate::platform::InputEvent;
use crate::render::surface::{PixelSurface, SurfaceLock};
use crate::render::text::TextRenderer;

/// 按钮内水平边距
pub const PAD_X: i32 = 12;
/// 按钮内垂直边距
pub const PAD_Y: i32 = 8;
/// 标题与副标题间距
pub const TITLE_TO_SUBTITLE: i32 = 10;
/// 副标题与第一个按钮间距
pub const SUBTITLE_TO_BUTTON: i32 = 20;
/// 按钮之间的间距
pub const BUTTON_SPACING: i32 = 18;

/// 轴对齐矩形（像素）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// 半开区间命中测试：`[x, x+w) × [y, y+h)`
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    /// 向四周扩展边距
    pub fn padded(&self, pad_x: i32, pad_y: i32) -> Rect {
        Rect::new(
            self.x - pad_x,
            self.y - pad_y,
            self.w + 2 * pad_x,
            self.h + 2 * pad_y,
        )
    }
}

/// 菜单动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Play,
    Help,
    Quit,
}

impl MenuAction {
    /// 自上而下的按钮顺序
    pub const ALL: [MenuAction; 3] = [MenuAction::Play, MenuAction::Help, MenuAction::Quit];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Play => "PLAY",
            MenuAction::Help => "HELP",
            MenuAction::Quit => "QUIT",
        }
    }
}

/// 单个按钮的布局
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonLayout {
    pub action: MenuAction,
    /// 文字区域
    pub label: Rect,
    /// 带内边距的背景，也是点击区域
    pub background: Rect,
}

/// 菜单布局
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLayout {
    pub title: Rect,
    pub subtitle: Rect,
    pub buttons: [ButtonLayout; 3],
}

impl MenuLayout {
    /// 根据各文本尺寸 `(w, h)` 计算布局
    ///
    /// 整体在垂直方向以 `height / 2` 居中，每个元素在水平方向以 `width / 2` 居中。
    pub fn from_sizes(
        width: u32,
        height: u32,
        title: (i32, i32),
        subtitle: (i32, i32),
        buttons: [(i32, i32); 3],
    ) -> Self {
        let center_x = width as i32 / 2;
        let center_y = height as i32 / 2;

        let total_height = title.1
            + TITLE_TO_SUBTITLE
            + subtitle.1
            + SUBTITLE_TO_BUTTON
            + buttons.iter().map(|b| b.1).sum::<i32>()
            + BUTTON_SPACING * (buttons.len() as i32 - 1);

        let mut y = center_y - total_height / 2;
        let mut place = |(w, h): (i32, i32), gap: i32| {
            let rect = Rect::new(center_x - w / 2, y, w, h);
            y += h + gap;
            rect
        };

        let title = place(title, TITLE_TO_SUBTITLE);
        let subtitle = place(subtitle, SUBTITLE_TO_BUTTON);
        let buttons = [
            place(buttons[0], BUTTON_SPACING),
            place(buttons[1], BUTTON_SPACING),
            place(buttons[2], 0),
        ];
        let buttons = [0, 1, 2].map(|i| ButtonLayout {
            action: MenuAction::ALL[i],
            label: buttons[i],
            background: buttons[i].padded(PAD_X, PAD_Y),
        });

        Self {
            title,
            subtitle,
            buttons,
        }
    }

    /// 用文本渲染器测量标题与按钮文字后计算布局
    pub fn measure<T: TextRenderer>(config: &MenuConfig, text: &T) -> Self {
        let theme = &config.theme;
        Self::from_sizes(
            config.width,
            config.height,
            text.measure(&config.title, theme.title_size),
            text.measure(&config.subtitle, theme.subtitle_size),
            MenuAction::ALL.map(|a| text.measure(a.label(), theme.item_size)),
        )
    }

    /// 第一个（自上而下）背景包含该点的按钮
    pub fn hit_test(&self, x: i32, y: i32) -> Option<MenuAction> {
        self.buttons
            .iter()
            .find(|b| b.background.contains(x, y))
            .map(|b| b.action)
    }
}

/// 主菜单
pub struct Menu<T: TextRenderer> {
    layout: MenuLayout,
    hovered: [bool; 3],
    quit: bool,
    title: String,
    subtitle: String,
    theme: MenuTheme,
    text: T,
}

impl<T: TextRenderer> Menu<T> {
    pub fn new(config: &MenuConfig, text: T) -> Self {
        Self {
            layout: MenuLayout::measure(config, &text),
            hovered: [false; 3],
            quit: false,
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            theme: config.theme.clone(),
            text,
        }
    }

    pub fn layout(&self) -> &MenuLayout {
        &self.layout
    }

    pub fn is_hovered(&self, action: MenuAction) -> bool {
        self.layout
            .buttons
            .iter()
            .zip(self.hovered)
            .any(|(b, hovered)| b.action == action && hovered)
    }

    pub fn theme(&self) -> &MenuTheme {
        &self.theme
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// 处理一个输入事件，点击命中按钮时返回对应动作
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<MenuAction> {
        match *event {
            InputEvent::MouseMoved { x, y } => {
                let (mx, my) = (x.floor() as i32, y.floor() as i32);
                for (hovered, button) in self.hovered.iter_mut().zip(&self.layout.buttons) {
                    *hovered = button.background.contains(mx, my);
                }
                None
            }
            InputEvent::MouseButtonReleased { x, y, .. } => {
                let action = self.layout.hit_test(x.floor() as i32, y.floor() as i32)?;
                tracing::info!(target: "menu", action = action.label(), "Button clicked");
                if action == MenuAction::Quit {
                    self.quit = true;
                }
                Some(action)
            }
            InputEvent::WindowCloseRequested => {
                tracing::info!(target: "menu", "Window close requested");
                self.quit = true;
                None
            }
            _ => None,
        }
    }

    /// 绘制标题、副标题和按钮（调用方负责加锁与背景）
    pub fn draw<S: PixelSurface + ?Sized>(&self, frame: &mut SurfaceLock<'_, S>) {
        let theme = &self.theme;
        let layout = &self.layout;

        self.text.draw(
            frame,
            &self.title,
            theme.title_size,
            layout.title.x,
            layout.title.y,
            theme.title_color,
        );
        self.text.draw(
            frame,
            &self.subtitle,
            theme.subtitle_size,
            layout.subtitle.x,
            layout.subtitle.y,
            theme.subtitle_color,
        );

        for (button, hovered) in layout.buttons.iter().zip(self.hovered) {
            let (bg, fg) = if hovered {
                (theme.button_bg_hover_color, theme.item_hover_color)
            } else {
                (theme.button_bg_color, theme.item_color)
            };
            let bg_rect = button.background;
            frame.put_rect(bg_rect.x, bg_rect.y, bg_rect.w, bg_rect.h, bg);
            self.text.draw(
                frame,
                button.action.label(),
                theme.item_size,
                button.label.x,
                button.label.y,
                fg,
            );
        }
    }
}
