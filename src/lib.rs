//! # Starfield Menu
//!
//! A parallax starfield background and the main menu that sits on top of it,
//! rendered on a lockable software pixel surface.
//!
//! ## Features
//!
//! - **Starfield**: depth-layered particles with parallax speeds, respawn and color tint
//! - **Surface abstraction**: lock guard so several layers compose into one frame
//! - **Menu**: centered layout, hover highlighting and click dispatch
//! - **Config**: TOML/JSON configuration with environment overrides
//!
//! ### Example
//!
//! ```
//! use starfield_menu::render::{ImageSurface, StarField, SurfaceLock, PixelSurface, Rgb};
//!
//! let mut surface = ImageSurface::new(200, 100);
//! let mut stars = StarField::with_seed(200, 100, 64, 42);
//! stars.set_color_tint(255, 252, 220);
//! stars.update(0.016);
//!
//! {
//!     let mut frame = SurfaceLock::acquire(&mut surface);
//!     frame.fill(Rgb::BLACK);
//!     stars.render_unlocked(&mut frame);
//! }
//! surface.flip().unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Menu loop, errors and logging
//! - [`render`]: Colors, pixel surfaces, starfield and text
//! - [`platform`]: Event and tick sources
//! - [`ui`]: Menu layout and interaction
//! - [`config`]: Configuration system

/// Menu loop, error types and logging setup
pub mod core;
/// Configuration system
pub mod config;
/// Event sources and clocks
pub mod platform;
/// Pixel surfaces, colors, starfield and text rendering
pub mod render;
/// Main menu layout and interaction
pub mod ui;
