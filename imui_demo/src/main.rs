//! Headless imui demo
//!
//! Replays a scripted pointer session against a small settings window and
//! feeds every frame to a batching backend. Useful for watching the frame
//! protocol in the logs without a window:
//!
//! ```text
//! RUST_LOG=trace cargo run -p imui_demo -- imui_demo/demo.toml
//! ```

mod batch;

use imui::config::{Config, ConfigError, UIConfig};
use imui::foundation::logging;
use imui::foundation::math::v2i;
use imui::foundation::time::FrameClock;
use imui::ui::{InputEvent, Layout, MouseButton, Rect, UIContext, UIError, WidgetId};

use batch::MeshBatchBackend;

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("UI error: {0}")]
    UI(#[from] UIError),
}

/// Application state the widgets edit
#[derive(Debug, Default)]
struct Settings {
    applied: u32,
    muted: bool,
    volume: f32,
}

fn settings_window(ui: &mut UIContext, settings: &mut Settings) {
    ui.begin_container("settings", v2i(20, 20), Layout::Column);

    if ui.button("apply", Rect::new(0, 0, 120, 24)) {
        settings.applied += 1;
    }
    ui.checkbox("mute", Rect::new(0, 0, 20, 20), &mut settings.muted);
    ui.slider("volume", Rect::new(0, 0, 200, 16), &mut settings.volume);

    ui.begin_container("presets", v2i(0, 0), Layout::Row);
    for index in 0..3 {
        ui.button(WidgetId::from("preset").with_index(index), Rect::new(0, 0, 60, 20));
    }
    ui.end_container();

    ui.end_container();
}

/// One frame's worth of input per entry
///
/// With the default 4px margin the window lays out as:
/// apply (24,24 120x24), mute (24,52 20x20), volume (24,76 200x16).
fn script() -> Vec<Vec<InputEvent>> {
    let left_down = InputEvent::ButtonPressed(MouseButton::Left);
    let left_up = InputEvent::ButtonReleased(MouseButton::Left);
    let to = |x, y| InputEvent::PointerMoved { x, y };

    vec![
        vec![],
        // click "apply"
        vec![to(80, 36)],
        vec![left_down],
        vec![left_up],
        // toggle "mute"
        vec![to(34, 62)],
        vec![left_down],
        vec![left_up],
        // drag "volume" across and past the track
        vec![to(24, 84)],
        vec![left_down],
        vec![to(124, 84)],
        vec![to(224, 84)],
        vec![to(400, 84)],
        vec![left_up],
        // press "apply" but release outside
        vec![to(80, 36)],
        vec![left_down],
        vec![to(500, 500)],
        vec![left_up],
    ]
}

fn load_config() -> Result<UIConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => UIConfig::load_from_file(&path),
        None => Ok(UIConfig::default()),
    }
}

fn run() -> Result<(), DemoError> {
    let config = load_config()?;
    logging::init_with_level(&config.log_level);
    log::info!("Starting imui demo");

    let mut ui = UIContext::new(config)?;
    let mut backend = MeshBatchBackend::new();
    let mut clock = FrameClock::new();
    let mut settings = Settings::default();

    for input in script() {
        ui.handle_events(input);
        ui.begin_frame(clock.tick());
        settings_window(&mut ui, &mut settings);
        ui.end_frame();

        for event in ui.events() {
            log::info!("frame {}: {:?}", ui.frame_number(), event);
        }
        ui.render(&mut backend)?;
    }

    let stats = ui.stats();
    log::info!(
        "Done after {} frames: {} widgets, {} rects per frame ({} vertices, {} draw ranges in the last batch), {} bytes uploaded",
        stats.frame,
        stats.widgets,
        stats.commands,
        backend.vertices().len(),
        backend.draws().len(),
        backend.total_bytes()
    );
    log::info!(
        "Settings: applied {} time(s), muted {}, volume {:.2}",
        settings.applied,
        settings.muted,
        settings.volume
    );
    log::debug!("{} batches submitted, {:.1} fps average", backend.frames(), clock.average_fps());

    ui.shutdown();
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        log::error!("Demo failed: {}", e);
        eprintln!("Demo failed: {}", e);
        std::process::exit(1);
    }
}
