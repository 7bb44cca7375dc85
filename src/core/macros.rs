//! 核心宏定义
//!
//! 配置结构体的默认值集中声明，减少样板代码

/// 为结构体实现 Default trait 的宏
///
/// 使用示例:
/// ```rust
/// use starfield_menu::impl_default;
///
/// struct Layer {
///     count: usize,
///     speed: f32,
/// }
///
/// impl_default!(Layer {
///     count: 200,
///     speed: 1.0,
/// });
///
/// assert_eq!(Layer::default().count, 200);
/// ```
#[macro_export]
macro_rules! impl_default {
    ($struct_name:ident {
        $($field:ident: $value:expr),* $(,)?
    }) => {
        impl Default for $struct_name {
            fn default() -> Self {
                Self {
                    $($field: $value),*
                }
            }
        }
    };
}
