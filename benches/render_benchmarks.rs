//! 星空性能基准测试
//!
//! 测试星空更新、渲染以及完整菜单帧的开销

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use starfield_menu::config::AppConfig;
use starfield_menu::core::MenuApp;
use starfield_menu::platform::{ManualClock, ScriptedEvents};
use starfield_menu::render::{BlockTextRenderer, ImageSurface, StarField};

fn bench_starfield_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("starfield_update");

    for star_count in [200, 500, 5000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(star_count),
            star_count,
            |b, &count| {
                let mut field = StarField::with_seed(1920, 1080, count, 1);
                b.iter(|| {
                    field.update(black_box(0.016));
                });
            },
        );
    }

    group.finish();
}

fn bench_starfield_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("starfield_render");

    for star_count in [200, 500, 5000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(star_count),
            star_count,
            |b, &count| {
                let field = StarField::with_seed(1920, 1080, count, 1);
                let mut surface = ImageSurface::new(1920, 1080);
                b.iter(|| {
                    field.render(black_box(&mut surface));
                });
            },
        );
    }

    group.finish();
}

fn bench_menu_frame(c: &mut Criterion) {
    let mut config = AppConfig::default();
    config.menu.frame_delay_ms = 0;
    config.starfield.seed = Some(1);

    let mut app = MenuApp::new(
        &config,
        ImageSurface::new(config.menu.width, config.menu.height),
        ScriptedEvents::new(),
        ManualClock::new(16),
        BlockTextRenderer,
    );

    c.bench_function("menu_frame_1080p", |b| {
        b.iter(|| {
            app.run_frame().unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_starfield_update,
    bench_starfield_render,
    bench_menu_frame
);
criterion_main!(benches);
