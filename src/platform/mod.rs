pub mod clock;

pub use clock::{frame_delta, ManualClock, SystemClock, TickSource};

use std::collections::VecDeque;

// ============================================================================
// Input Abstraction
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    // Mouse
    MouseMoved { x: f32, y: f32 },
    MouseButtonPressed { button: MouseButton, x: f32, y: f32 },
    MouseButtonReleased { button: MouseButton, x: f32, y: f32 },

    // Window
    WindowCloseRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left, Right, Middle, Other(u16),
}

/// 事件源抽象 - 由窗口层实现，菜单每帧轮询直到返回 `None`
pub trait EventSource {
    fn poll_event(&mut self) -> Option<InputEvent>;
}

/// 预先排好的事件队列，用于无窗口运行和测试
#[derive(Debug, Default, Clone)]
pub struct ScriptedEvents {
    queue: VecDeque<InputEvent>,
}

impl ScriptedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl FromIterator<InputEvent> for ScriptedEvents {
    fn from_iter<I: IntoIterator<Item = InputEvent>>(iter: I) -> Self {
        Self {
            queue: iter.into_iter().collect(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.queue.pop_front()
    }
}
