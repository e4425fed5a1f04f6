use std::time::Duration;
use raylib::prelude::*;
use hero_slider::constants::*;
use hero_slider::{FrameScheduler, InputAdapter, InputEvent, Key, SlideCarousel, SliderConfig};
use crate::slide::{with_opacity, Slide, SlideDeck};

const BUTTON_SIZE: f32 = 72.0;
const BUTTON_MARGIN: f32 = 40.0;
const DOT_RADIUS: f32 = 9.0;
const DOT_SPACING: f32 = 36.0;
const DOT_BASELINE: f32 = 70.0;       // Distance of the dot row from the bottom edge
const PROGRESS_HEIGHT: i32 = 6;

fn prev_button() -> Rectangle {
    Rectangle::new(BUTTON_MARGIN, (RENDER_HEIGHT as f32 - BUTTON_SIZE) * 0.5, BUTTON_SIZE, BUTTON_SIZE)
}

fn next_button() -> Rectangle {
    Rectangle::new(
        RENDER_WIDTH as f32 - BUTTON_MARGIN - BUTTON_SIZE,
        (RENDER_HEIGHT as f32 - BUTTON_SIZE) * 0.5,
        BUTTON_SIZE,
        BUTTON_SIZE,
    )
}

fn dot_center(index: usize, count: usize) -> Vector2 {
    let row_width = DOT_SPACING * (count.saturating_sub(1)) as f32;
    Vector2::new(
        (RENDER_WIDTH as f32 - row_width) * 0.5 + DOT_SPACING * index as f32,
        RENDER_HEIGHT as f32 - DOT_BASELINE,
    )
}

/// Page controller of the hero slider: turns raylib input into carousel
/// events, forwards the frame clock and draws the deck with its controls.
pub struct HeroEngine {
    carousel: SlideCarousel<SlideDeck, FrameScheduler>,
    input: InputAdapter,
    autoplay: bool,
    hovered: bool,
    dragging: bool,
}

impl HeroEngine {
    pub fn new(slides: Vec<Slide>, config: &SliderConfig) -> Self {
        let count = slides.len();
        let mut carousel = SlideCarousel::new(
            count,
            Some(config.slide_duration()),
            SlideDeck::new(slides),
            FrameScheduler::new(),
        );
        if config.autoplay {
            carousel.play();
        }
        log::info!(
            "Hero slider ready: {} slides, {:?} per slide, autoplay {}",
            count,
            carousel.slide_duration(),
            config.autoplay
        );

        Self {
            carousel,
            input: InputAdapter::new(config.swipe_threshold_px),
            autoplay: config.autoplay,
            hovered: false,
            dragging: false,
        }
    }

    // Mouse position in framebuffer coordinates
    fn pointer(rl: &RaylibHandle) -> Vector2 {
        let mouse = rl.get_mouse_position();
        Vector2::new(
            mouse.x * RENDER_WIDTH as f32 / rl.get_screen_width().max(1) as f32,
            mouse.y * RENDER_HEIGHT as f32 / rl.get_screen_height().max(1) as f32,
        )
    }

    fn collect_events(&mut self, rl: &RaylibHandle) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            events.push(InputEvent::KeyPressed(Key::ArrowLeft));
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            events.push(InputEvent::KeyPressed(Key::ArrowRight));
        }

        // Hovering only suspends autoplay, it must not start it
        if self.autoplay {
            let hovered = rl.is_cursor_on_screen();
            if hovered != self.hovered {
                self.hovered = hovered;
                events.push(if hovered { InputEvent::PointerEnter } else { InputEvent::PointerLeave });
            }
        }

        let pointer = Self::pointer(rl);
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let dot = (0..self.carousel.slide_count())
                .find(|&i| dot_center(i, self.carousel.slide_count()).distance_to(pointer) <= DOT_RADIUS * 1.8);

            if prev_button().check_collision_point_rec(pointer) {
                events.push(InputEvent::PreviousClicked);
            } else if next_button().check_collision_point_rec(pointer) {
                events.push(InputEvent::NextClicked);
            } else if let Some(index) = dot {
                events.push(InputEvent::DotClicked(index));
            } else {
                // Anything else on the slider may start a swipe
                self.dragging = true;
                events.push(InputEvent::TouchStart { x: pointer.x });
            }
        }
        if self.dragging && rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            self.dragging = false;
            events.push(InputEvent::TouchEnd { x: pointer.x });
        }

        events
    }

    pub fn update(&mut self, rl: &RaylibHandle, dt: f32) {
        for event in self.collect_events(rl) {
            log::trace!("input {:?}", event);
            self.input.dispatch(&mut self.carousel, event);
        }

        if self.carousel.is_ticking() {
            self.carousel.on_tick(Duration::from_secs_f64(rl.get_time()));
        }

        self.carousel.renderer_mut().update(dt);
    }

    pub fn render_frame(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) {
        let carousel = &self.carousel;

        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            d.clear_background(Color::BLACK);

            carousel.renderer().draw(&mut d);

            let count = carousel.slide_count();
            if count > 1 {
                for (rect, label) in [(prev_button(), "<"), (next_button(), ">")] {
                    d.draw_rectangle_rec(rect, with_opacity(Color::BLACK, 0.45));
                    d.draw_text(label, (rect.x + rect.width * 0.32) as i32, (rect.y + 10.0) as i32, 52, Color::WHITE);
                }

                for i in 0..count {
                    let center = dot_center(i, count);
                    if i == carousel.current_index() {
                        d.draw_circle_v(center, DOT_RADIUS, Color::WHITE);
                    } else {
                        d.draw_circle_v(center, DOT_RADIUS, with_opacity(Color::WHITE, 0.4));
                    }
                }
            }

            if carousel.is_ticking() {
                let width = (RENDER_WIDTH as f32 * carousel.progress()) as i32;
                d.draw_rectangle(0, RENDER_HEIGHT - PROGRESS_HEIGHT, width, PROGRESS_HEIGHT, Color::GOLD);
            }
        });
    }

    /// Stops autoplay for good; later frames only redraw the last state.
    pub fn shutdown(&mut self) {
        self.carousel.destroy();
        log::debug!("Hero slider destroyed on slide {}", self.carousel.current_index());
    }
}
