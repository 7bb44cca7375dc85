//! 核心模块
//!
//! 包含应用的核心功能：
//! - `engine` - 菜单主循环与日志初始化
//! - `error` - 错误类型定义
//! - `macros` - 配置默认值宏

pub mod engine;
pub mod error;
#[macro_use]
pub mod macros;

// 重新导出错误类型
pub use error::{AppError, AppResult, RenderError, RenderResult};

// 重新导出主要类型
pub use engine::{init_logging, MenuApp};
