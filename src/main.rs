use std::path::PathBuf;
use std::time::Duration;
use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;
use raylib::prelude::*;

mod engine;
mod slide;
mod texture_loader;

use hero_slider::constants::*;
use hero_slider::SliderConfig;
use crate::engine::HeroEngine;
use crate::slide::Slide;
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

/// Autoplaying hero slider over a directory of images
#[derive(Parser)]
#[command(name = "hero-slider")]
struct Args {
    /// Directory holding the slide images, shown in file name order
    image_directory: PathBuf,

    /// TOML file with slider settings (slide_duration_ms, swipe_threshold_px, autoplay)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Time each slide stays active, overrides the config file
    #[arg(long)]
    slide_duration_ms: Option<u64>,

    /// Window width
    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    width: i32,

    /// Window height
    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    height: i32,
}

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("hero_slider", LevelFilter::Debug)
        .init();
}

// Shows a message for a few seconds before giving up
fn show_error(rl: &mut RaylibHandle, thread: &RaylibThread, message: &str) {
    let mut d = rl.begin_drawing(thread);
    d.clear_background(Color::BLACK);
    d.draw_text(message, 20, 20, 20, Color::RED);
    drop(d);
    std::thread::sleep(Duration::from_secs(5));
}

fn load_config(args: &Args) -> Result<SliderConfig> {
    let mut config = match &args.config {
        Some(path) => SliderConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SliderConfig::default(),
    };
    if let Some(ms) = args.slide_duration_ms {
        config.slide_duration_ms = ms;
    }
    Ok(config)
}

fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let args = Args::parse();
    let config = load_config(&args)?;
    log::info!("Input path: {}", args.image_directory.display());

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Hero Slider")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Preload every slide before the first frame ---
    let image_paths = match load_sorted_image_paths(&args.image_directory) {
        Ok(paths) => paths,
        Err(e) => {
            log::error!("{:#}", e);
            show_error(&mut rl, &thread, &format!("Error: {}", e));
            return Err(e);
        }
    };

    let zoom_duration = config.slide_duration().as_secs_f32();
    let mut slides: Vec<Slide> = Vec::new();
    for path in image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, &path) {
            Ok(texture) => slides.push(Slide::new(texture, Slide::caption_for(&path), zoom_duration)),
            Err(e) => log::warn!("Skipping {}: {:#}", path.display(), e),
        }
    }

    if slides.is_empty() {
        show_error(&mut rl, &thread, "Error: No slides loaded.");
        anyhow::bail!("No slides could be loaded from {}", args.image_directory.display());
    }

    let mut engine = HeroEngine::new(slides, &config);

    let mut framebuffer = rl.load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow::anyhow!("Failed to create render texture: {}", e))?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        engine.update(&rl, dt);
        engine.render_frame(&mut rl, &thread, &mut framebuffer);

        // Draw the fixed size framebuffer scaled to the window, flipped back upright
        let mut d = rl.begin_drawing(&thread);

        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;

        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE
        );
    }

    engine.shutdown();
    Ok(())
}
