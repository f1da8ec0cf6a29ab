// src/main.rs
use nannou::prelude::*;

use kaleidoscope::{
    config::Config,
    controllers::Kaleidoscope,
    render::{KaleidoscopeRenderer, Surface, SYMMETRY},
    services::{FrameExporter, PatternGenerator},
    views::{ControlAction, Controls},
};

struct Model {
    // Core components:
    kaleidoscope: Kaleidoscope,
    renderer: KaleidoscopeRenderer,

    // Rendering components:
    draw: nannou::Draw,
    surface: Surface,

    // UI & export:
    controls: Controls,
    exporter: FrameExporter,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");
    let (width, height) = (config.canvas.width, config.canvas.height);

    // Create window
    let window_id = app
        .new_window()
        .title("Kaleidoscope Generator")
        .size(width, height)
        .resizable(false)
        .msaa_samples(1)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .build()
        .expect("Failed to create window");
    let window = app.window(window_id).expect("Window missing after creation");

    let surface = Surface::new(&window, width, height, config.rendering.texture_samples);

    let generator = match config.generator.seed {
        Some(seed) => {
            tracing::info!("Using fixed pattern seed {}", seed);
            PatternGenerator::from_seed(seed, width, height)
        }
        None => PatternGenerator::from_entropy(width, height),
    };

    let output_dir = config.resolve_output_dir();
    tracing::info!("Exports will be saved to {}", output_dir.display());

    Model {
        kaleidoscope: Kaleidoscope::new(generator),
        renderer: KaleidoscopeRenderer::new(SYMMETRY, config.style.stroke_weight),

        draw: nannou::Draw::new(),
        surface,

        controls: Controls::new(width as f32, height as f32),
        exporter: FrameExporter::new(output_dir),
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::G | Key::Space => handle_action(app, model, ControlAction::Generate),
        Key::D | Key::S => handle_action(app, model, ControlAction::Download),
        Key::Q => app.quit(),
        _ => (),
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    if let Some(action) = model.controls.hit(app.mouse.position()) {
        handle_action(app, model, action);
    }
}

fn handle_action(app: &App, model: &mut Model, action: ControlAction) {
    match action {
        ControlAction::Generate => {
            model.kaleidoscope.generate_new_pattern();
            model
                .controls
                .set_download_enabled(model.kaleidoscope.can_export());
        }
        ControlAction::Download => {
            let window = app.main_window();
            let source = model.surface.frame_source(&window);
            // best effort: failures are logged, never retried
            if let Err(e) = model.kaleidoscope.download(&source, &model.exporter) {
                tracing::error!("Export failed: {}", e);
            }
        }
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let draw = &model.draw;
    draw.reset();

    // Black only on a new pattern; otherwise the texture keeps its contents
    if model.kaleidoscope.take_clear_request() {
        draw.background().color(BLACK);
    }

    // Full redraw of the current pattern every frame
    model.renderer.draw(draw, model.kaleidoscope.pattern());

    let window = app.main_window();
    model.surface.render(&window, &model.draw);
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    // resize texture to screen
    model.surface.present(&frame);

    // controls go over the window only, never into the texture
    let draw = app.draw();
    model.controls.draw(&draw);
    if let Err(e) = draw.to_frame(app, &frame) {
        tracing::warn!("Failed to draw controls: {:?}", e);
    }
}
