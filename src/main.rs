use starfield_menu::config::AppConfig;
use starfield_menu::core::{init_logging, AppResult, MenuApp};
use starfield_menu::platform::{InputEvent, ManualClock, MouseButton, ScriptedEvents};
use starfield_menu::render::{BlockTextRenderer, ImageSurface};
use starfield_menu::ui::{MenuLayout, Rect};

/// 无窗口演示：模拟鼠标悬停在 PLAY 上运行若干帧，然后点击 QUIT，
/// 最后一帧保存为 PNG。
fn run() -> AppResult<()> {
    let (mut config, source) = AppConfig::load_or_default();
    config.apply_env_overrides();
    init_logging(&config.logging);

    match source {
        Some(path) => tracing::info!(target: "config", path = %path.display(), "Loaded config"),
        None => tracing::info!(target: "config", "Using default configuration"),
    }
    config.validate()?;

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "starfield_menu.png".to_string());

    let layout = MenuLayout::measure(&config.menu, &BlockTextRenderer);
    let play = layout.buttons[0].background;
    let quit = layout.buttons[2].background;
    let center = |r: Rect| ((r.x + r.w / 2) as f32, (r.y + r.h / 2) as f32);

    let (px, py) = center(play);
    let (qx, qy) = center(quit);
    let mut events = ScriptedEvents::new();
    events.push(InputEvent::MouseMoved { x: px, y: py });

    let surface = ImageSurface::new(config.menu.width, config.menu.height);
    let frame_ms = config.menu.frame_delay_ms.max(1);
    let mut app = MenuApp::new(
        &config,
        surface,
        events,
        ManualClock::new(frame_ms),
        BlockTextRenderer,
    );
    app.run(Some(120))?;

    let events = app.events_mut();
    events.push(InputEvent::MouseMoved { x: qx, y: qy });
    events.push(InputEvent::MouseButtonReleased {
        button: MouseButton::Left,
        x: qx,
        y: qy,
    });
    app.run(None)?;

    app.surface().save_png(&output)?;
    tracing::info!(target: "menu", path = %output, "Saved last frame");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Starfield menu failed: {}", e);
        std::process::exit(1);
    }
}
