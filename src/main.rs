use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{error, info, Level};

use carousel::constants::*;
use carousel::i18n::Dictionary;
use carousel::logging;
use carousel::slider::{SliderController, SliderSettings};

mod ffmpeg;
mod viewer;

use crate::ffmpeg::Ffmpeg;
use crate::viewer::{to_render_space, Hit, WindowTarget};

#[derive(Parser, Debug)]
#[command(name = "carousel", about = "Interactive testimonial carousel")]
struct Args {
    /// Translation dictionary, a JSON object keyed by language code
    #[arg(short, long, default_value = "assets/translations.json")]
    translations: PathBuf,

    /// Preferred language; unknown codes fall back to the default
    #[arg(short, long)]
    lang: Option<String>,

    /// Autoplay period in milliseconds
    #[arg(long, default_value_t = AUTOPLAY_INTERVAL.as_millis() as u64)]
    interval_ms: u64,

    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,

    /// Record every rendered frame into this video file (needs ffmpeg)
    #[arg(long)]
    record: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_level);

    // --- Load Content ---
    let dictionary = match Dictionary::load(&args.translations) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            error!(error = %e, "translations unavailable, slider stays empty");
            Dictionary::default()
        }
    };
    let languages: Vec<String> = dictionary.languages().into_iter().map(String::from).collect();
    let mut language = dictionary.resolve_language(args.lang.as_deref()).to_string();
    info!(%language, "starting viewer");

    let mut slider = SliderController::new(SliderSettings::with_interval_ms(args.interval_ms));
    slider.render(dictionary.testimonials(&language));

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Testimonials")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("failed to create render texture: {e}"))?;

    let mut ffmpeg = match &args.record {
        Some(path) => Some(Ffmpeg::new(RENDER_WIDTH, RENDER_HEIGHT, FPS, path)?),
        None => None,
    };

    let mut target = WindowTarget::new();
    let mut hovered = false;

    // --- Main Loop ---
    while !rl.window_should_close() {
        // Recording runs on a fixed step so the video plays back at real speed
        let dt = if ffmpeg.is_some() { FRAME_TIME } else { rl.get_frame_time() };

        // 1. Translate input into slider events
        let mouse = to_render_space(
            rl.get_mouse_position(),
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
        );

        let over = target.is_over_slider(mouse);
        if over && !hovered {
            slider.on_pointer_enter();
        } else if !over && hovered {
            slider.on_pointer_leave();
        }
        hovered = over;

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            match target.hit_test(mouse) {
                Some(Hit::Prev) => slider.on_prev(),
                Some(Hit::Next) => slider.on_next(),
                Some(Hit::Indicator(i)) => slider.on_indicator_activated(i),
                None => {}
            }
        }

        if rl.is_key_pressed(KeyboardKey::KEY_L) && !languages.is_empty() {
            let current = languages.iter().position(|l| *l == language).unwrap_or(0);
            language = languages[(current + 1) % languages.len()].clone();
            info!(%language, "language switched");
            slider.render(dictionary.testimonials(&language));
        }

        // 2. Advance autoplay and push changes to the window
        slider.advance(Duration::from_secs_f32(dt));
        slider.sync(&mut target);
        target.update(dt);

        // 3. Render into the fixed size framebuffer
        let autoplay_remaining = slider.autoplay_remaining();
        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(&thread);
            target.draw(&mut d, &language, autoplay_remaining);
        });

        let mut d2 = rl.begin_drawing(&thread);
        let sw = d2.get_screen_width() as f32;
        let sh = d2.get_screen_height() as f32;
        d2.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
        drop(d2);

        if let Some(recorder) = ffmpeg.as_mut() {
            let image = framebuffer
                .load_image()
                .map_err(|e| anyhow!("failed to read framebuffer: {e}"))?;
            recorder.write(&image)?;
        }

        // 4. The frame is on screen
        slider.on_frame();
    }

    Ok(())
}
