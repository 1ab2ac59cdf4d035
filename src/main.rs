// src/main.rs
use nannou::event::{TouchEvent, TouchPhase};
use nannou::prelude::*;

use squarerotpath::{
    config::{self, Config, Settings},
    views::SquareRotPathView,
};

struct Model {
    view: SquareRotPathView,
    continuous: bool,
}

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config, fall back to the built-in defaults if it's unusable
    let settings = match Config::load().and_then(|config| config.resolve()) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Invalid config, using defaults: {}", e);
            Settings::default()
        }
    };
    config::init(settings);
    let settings = config::get();

    // Create window
    let window_id = app
        .new_window()
        .title(&settings.window.title)
        .size(settings.window.width, settings.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .touch(touch)
        .build()
        .expect("Failed to create window");

    if settings.window.fullscreen {
        if let Some(window) = app.window(window_id) {
            window.set_fullscreen(true);
        }
    }

    // Nothing moves until the first tap
    app.set_loop_mode(LoopMode::Wait);
    let view = SquareRotPathView::new(settings);
    log::info!(
        "squarerotpath ready: {} nodes, tick every {:?}",
        config::PALETTE_SIZE,
        view.tick_interval()
    );

    Model {
        view,
        continuous: false,
    }
}

fn mouse_pressed(app: &App, model: &mut Model, _button: MouseButton) {
    tap(app, model);
}

fn touch(app: &App, model: &mut Model, touch: TouchEvent) {
    if touch.phase == TouchPhase::Started {
        tap(app, model);
    }
}

fn tap(app: &App, model: &mut Model) {
    if model.view.handle_tap() {
        sync_loop_mode(app, model);
    }
}

fn update(app: &App, model: &mut Model, update: Update) {
    model.view.advance(update.since_last);
    sync_loop_mode(app, model);
}

// Redraw every frame while animating, only on events otherwise
fn sync_loop_mode(app: &App, model: &mut Model) {
    let animating = model.view.is_animating();
    if animating != model.continuous {
        model.continuous = animating;
        app.set_loop_mode(if animating {
            LoopMode::RefreshSync
        } else {
            LoopMode::Wait
        });
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    model.view.render(&draw, app.window_rect());

    if let Err(e) = draw.to_frame(app, &frame) {
        log::error!("Failed to draw frame: {:?}", e);
    }
}
