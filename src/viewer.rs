use std::time::Duration;

use raylib::prelude::*;

use carousel::constants::*;
use carousel::engine::{RenderTarget, SliderFrame};
use carousel::slide::{Slide, SliderView};
use carousel::strip::Motion;

const SLIDER_AREA: Rectangle = Rectangle { x: 160.0, y: 300.0, width: 1600.0, height: 400.0 };
const PREV_BUTTON: Rectangle = Rectangle { x: 40.0, y: 450.0, width: 100.0, height: 100.0 };
const NEXT_BUTTON: Rectangle = Rectangle { x: 1780.0, y: 450.0, width: 100.0, height: 100.0 };
const DOT_Y: f32 = 760.0;
const DOT_SPACING: f32 = 40.0;
const DOT_RADIUS: f32 = 10.0;

const QUOTE_FONT_SIZE: i32 = 40;
const ATTRIBUTION_FONT_SIZE: i32 = 28;

const BACKGROUND: Color = Color { r: 24, g: 24, b: 32, a: 255 };
const CARD: Color = Color { r: 44, g: 44, b: 60, a: 255 };
const ACCENT: Color = Color { r: 220, g: 60, b: 60, a: 255 };

/// What a click in render space landed on.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Hit {
    Prev,
    Next,
    Indicator(usize),
}

/// Draws the slider strip with raylib and eases the strip between offsets.
pub struct WindowTarget {
    slides: Vec<Slide>,
    active: Vec<bool>,

    displayed_offset: f32,
    target_offset: f32,

    tween: Option<ease::Tween>,
    animation_timer: f32,
}

impl WindowTarget {
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            active: Vec::new(),
            displayed_offset: 0.0,
            target_offset: 0.0,
            tween: None,
            animation_timer: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        let Some(tween) = self.tween.as_mut() else {
            return;
        };
        self.animation_timer += dt;
        self.displayed_offset = tween.apply(dt);

        if self.animation_timer >= STRIP_TRANSITION {
            self.displayed_offset = self.target_offset;
            self.tween = None;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn is_over_slider(&self, point: Vector2) -> bool {
        SLIDER_AREA.check_collision_point_rec(point)
    }

    pub fn hit_test(&self, point: Vector2) -> Option<Hit> {
        if PREV_BUTTON.check_collision_point_rec(point) {
            return Some(Hit::Prev);
        }
        if NEXT_BUTTON.check_collision_point_rec(point) {
            return Some(Hit::Next);
        }
        (0..self.active.len()).find_map(|i| {
            let center = self.dot_center(i);
            let dx = point.x - center.x;
            let dy = point.y - center.y;
            (dx * dx + dy * dy <= DOT_RADIUS * DOT_RADIUS * 4.0).then_some(Hit::Indicator(i))
        })
    }

    fn dot_center(&self, i: usize) -> Vector2 {
        let total = (self.active.len().saturating_sub(1)) as f32 * DOT_SPACING;
        let first_x = RENDER_WIDTH as f32 * 0.5 - total * 0.5;
        Vector2::new(first_x + i as f32 * DOT_SPACING, DOT_Y)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, language: &str, autoplay_remaining: Option<Duration>) {
        d.clear_background(BACKGROUND);
        d.draw_text(&format!("lang: {language}  (L to switch)"), 40, 40, 30, Color::LIGHTGRAY);
        let status = match autoplay_remaining {
            Some(left) => format!("next slide in {:.1}s", left.as_secs_f32()),
            None => "autoplay paused".to_string(),
        };
        d.draw_text(&status, 40, 80, 24, Color::GRAY);

        if self.slides.is_empty() {
            d.draw_text("No testimonials.", 160, 480, 40, Color::GRAY);
            return;
        }

        d.draw_rectangle_rec(SLIDER_AREA, CARD);
        {
            let mut s = d.begin_scissor_mode(
                SLIDER_AREA.x as i32,
                SLIDER_AREA.y as i32,
                SLIDER_AREA.width as i32,
                SLIDER_AREA.height as i32,
            );
            for (i, slide) in self.slides.iter().enumerate() {
                // Each slide sits one full viewport to the right of the previous one
                let x = SLIDER_AREA.x + (i as f32 * 100.0 - self.displayed_offset) / 100.0 * SLIDER_AREA.width;
                if x + SLIDER_AREA.width < SLIDER_AREA.x || x > SLIDER_AREA.x + SLIDER_AREA.width {
                    continue;
                }
                let mut y = SLIDER_AREA.y as i32 + 60;
                for line in wrap(&slide.quote, 60) {
                    s.draw_text(&line, x as i32 + 60, y, QUOTE_FONT_SIZE, Color::WHITE);
                    y += QUOTE_FONT_SIZE + 10;
                }
                s.draw_text(&slide.attribution, x as i32 + 60, y + 30, ATTRIBUTION_FONT_SIZE, Color::LIGHTGRAY);
            }
        }

        for rec in [PREV_BUTTON, NEXT_BUTTON] {
            d.draw_rectangle_lines_ex(rec, 3.0, Color::LIGHTGRAY);
        }
        d.draw_text("<", PREV_BUTTON.x as i32 + 35, PREV_BUTTON.y as i32 + 25, 50, Color::LIGHTGRAY);
        d.draw_text(">", NEXT_BUTTON.x as i32 + 35, NEXT_BUTTON.y as i32 + 25, 50, Color::LIGHTGRAY);

        for (i, active) in self.active.iter().enumerate() {
            let center = self.dot_center(i);
            let color = if *active { ACCENT } else { Color::GRAY };
            d.draw_circle(center.x as i32, center.y as i32, DOT_RADIUS, color);
        }
    }
}

impl RenderTarget for WindowTarget {
    fn rebuild(&mut self, view: &SliderView) {
        self.slides = view.slides.clone();
        self.active = view.indicators.iter().map(|d| d.active).collect();
        self.displayed_offset = view.offset_percent as f32;
        self.target_offset = self.displayed_offset;
        self.tween = None;
    }

    fn present(&mut self, frame: &SliderFrame) {
        self.active = frame.active.clone();
        let target = frame.offset_percent as f32;
        let animated = frame.motion == Motion::Animated && frame.transition_enabled;
        if animated && target == self.target_offset && self.tween.is_some() {
            return;
        }
        self.target_offset = target;

        if animated {
            self.tween = Some(ease::Tween::new(ease::cubic_out, self.displayed_offset, target, STRIP_TRANSITION));
            self.animation_timer = 0.0;
        } else {
            self.displayed_offset = target;
            self.tween = None;
        }
    }
}

/// Maps a window position onto the framebuffer, which is stretched on each axis.
pub fn to_render_space(window_pos: Vector2, screen_width: f32, screen_height: f32) -> Vector2 {
    Vector2::new(
        window_pos.x * RENDER_WIDTH as f32 / screen_width.max(1.0),
        window_pos.y * RENDER_HEIGHT as f32 / screen_height.max(1.0),
    )
}

/// Greedy word wrap on character count; raylib's default font is monospace enough.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
