//! 统一错误处理模块
//!
//! 星空本身不产生错误；错误只出现在外围：配置加载、画面导出和 IO。
//!
//! ## 错误类型分层
//!
//! - [`RenderError`]: 表面呈现与图像导出错误
//! - [`crate::config::ConfigError`]: 配置文件读取、解析与验证错误
//!
//! `AppError` 汇总以上两类错误以及 IO 错误。

use crate::config::ConfigError;
use thiserror::Error;

/// 应用顶层错误类型
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 渲染错误
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to save frame to {path}: {reason}")]
    SaveFailed { path: String, reason: String },

    #[error("Image encode error: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Surface error: {0}")]
    Surface(String),
}

pub type AppResult<T> = Result<T, AppError>;
pub type RenderResult<T> = Result<T, RenderError>;
