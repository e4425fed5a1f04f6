use std::path::Path;
use rand::Rng;
use raylib::prelude::*;
use hero_slider::constants::*;
use hero_slider::Renderer;

// Directions of the slow pan while a slide is active
const PAN_DIRECTIONS: [(f32, f32); 4] = [
    ( 1.0,  0.0), // left-to-right
    (-1.0,  0.0), // right-to-left
    ( 0.0,  1.0), // top-to-bottom
    ( 0.0, -1.0), // bottom-to-top
];
const PAN_DISTANCE: f32 = 40.0; // px covered by the pan over one slide duration

pub fn with_opacity(color: Color, opacity: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * opacity.clamp(0.0, 1.0)) as u8)
}

pub struct Slide {
    image: Texture2D,
    caption: String,

    active: bool,
    opacity: f32,

    // Scale that covers the whole frame
    cover_scale: f32,

    zoom_timer: f32,
    zoom_duration: f32,
    pan_direction: Vector2,

    // 1.0 = caption below its resting place, 0.0 = in place
    text_offset: f32,

    tween_fade: ease::Tween,
    tween_text: ease::Tween,
}

impl Slide {
    pub fn new(image: Texture2D, caption: String, zoom_duration: f32) -> Self {
        let cover_scale = (RENDER_WIDTH as f32 / image.width() as f32)
            .max(RENDER_HEIGHT as f32 / image.height() as f32);

        Self {
            image,
            caption,
            active: false,
            opacity: 0.0,
            cover_scale,
            zoom_timer: 0.0,
            zoom_duration: zoom_duration.max(f32::EPSILON),
            pan_direction: Vector2::new(0.0, 0.0),
            text_offset: 1.0,
            tween_fade: ease::Tween::new(ease::linear_none, 0.0, 0.0, ENTRANCE_DURATION),
            tween_text: ease::Tween::new(ease::linear_none, 1.0, 1.0, ENTRANCE_DURATION),
        }
    }

    /// Caption shown over the slide: file stem without its ordering prefix
    /// (`010-Harbour at dusk.jpg` becomes `Harbour at dusk`).
    pub fn caption_for(path: &Path) -> String {
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
        let trimmed = stem.trim_start_matches(|c: char| c.is_ascii_digit());
        let trimmed = trimmed.trim_start_matches(['-', '_', ' ']);
        if trimmed.is_empty() { stem.to_string() } else { trimmed.to_string() }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_visible(&self) -> bool {
        self.active || self.opacity > 0.0
    }

    /// Shows the slide and restarts its entrance animation.
    pub fn activate(&mut self) {
        let (dx, dy) = PAN_DIRECTIONS[rand::rng().random_range(0..PAN_DIRECTIONS.len())];
        self.active = true;
        self.zoom_timer = 0.0;
        self.pan_direction = Vector2::new(dx, dy);
        self.text_offset = 1.0;
        self.tween_fade = ease::Tween::new(ease::cubic_out, self.opacity, 1.0, ENTRANCE_DURATION);
        self.tween_text = ease::Tween::new(ease::cubic_out, 1.0, 0.0, ENTRANCE_DURATION);
    }

    /// Fades the slide out.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.tween_fade = ease::Tween::new(ease::cubic_out, self.opacity, 0.0, ENTRANCE_DURATION);
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_visible() {
            return;
        }
        self.opacity = self.tween_fade.apply(dt);
        if self.active {
            self.text_offset = self.tween_text.apply(dt);
            self.zoom_timer = (self.zoom_timer + dt).min(self.zoom_duration);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        if !self.is_visible() {
            return;
        }
        let t = self.zoom_timer / self.zoom_duration;

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;

        let scale = self.cover_scale * (1.0 + ZOOM_AMOUNT * t);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let center = Vector2::new(
            RENDER_WIDTH as f32 * 0.5 + self.pan_direction.x * PAN_DISTANCE * t,
            RENDER_HEIGHT as f32 * 0.5 + self.pan_direction.y * PAN_DISTANCE * t,
        );
        let origin = Vector2::new(scaled_width * 0.5, scaled_height * 0.5);

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(center.x, center.y, scaled_width, scaled_height),
            origin,
            0.0,
            with_opacity(Color::WHITE, self.opacity),
        );

        if self.active && !self.caption.is_empty() {
            let text_alpha = (1.0 - self.text_offset) * self.opacity;
            let y = RENDER_HEIGHT - 220 + (self.text_offset * 60.0) as i32;
            d.draw_text(&self.caption, 122, y + 3, 64, with_opacity(Color::BLACK, text_alpha * 0.6));
            d.draw_text(&self.caption, 120, y, 64, with_opacity(Color::WHITE, text_alpha));
        }
    }
}

/// Render surface of the hero slider: every slide texture, in carousel order.
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    /// The first slide starts active, matching the carousel's initial index.
    pub fn new(mut slides: Vec<Slide>) -> Self {
        if let Some(first) = slides.first_mut() {
            first.activate();
        }
        Self { slides }
    }

    pub fn update(&mut self, dt: f32) {
        for slide in self.slides.iter_mut() {
            slide.update(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        // Outgoing slides first so the active one fades in on top
        for slide in self.slides.iter().filter(|s| s.is_visible() && !s.is_active()) {
            slide.draw(d);
        }
        for slide in self.slides.iter().filter(|s| s.is_active()) {
            slide.draw(d);
        }
    }
}

impl Renderer for SlideDeck {
    fn render(&mut self, new_index: usize, previous_index: usize) {
        if let Some(slide) = self.slides.get_mut(previous_index) {
            slide.deactivate();
        }
        if let Some(slide) = self.slides.get_mut(new_index) {
            slide.activate();
        }
    }
}
