//! Checkbox and slider behavior

use approx::assert_relative_eq;

use super::{frame, move_to, DOWN, UP};
use crate::config::UIConfig;
use crate::ui::context::UIContext;
use crate::ui::events::UIEvent;
use crate::ui::geometry::Rect;
use crate::ui::id::WidgetId;
use crate::ui::widget::WidgetKind;

const CHECK: WidgetId = WidgetId::new(10);
const VOLUME: WidgetId = WidgetId::new(11);

fn click(ui: &mut UIContext, x: i32, y: i32, mut body: impl FnMut(&mut UIContext)) {
    frame(ui, &[move_to(x, y)], &mut body);
    frame(ui, &[DOWN], &mut body);
    frame(ui, &[UP], &mut body);
}

#[test]
fn test_checkbox_toggles_on_commit() {
    let mut ui = UIContext::with_defaults();
    let mut checked = false;
    let mut toggles = 0;

    click(&mut ui, 10, 10, |ui| {
        if ui.checkbox(CHECK, Rect::new(0, 0, 20, 20), &mut checked) {
            toggles += 1;
        }
    });
    assert!(checked);
    assert_eq!(toggles, 1);
    assert_eq!(ui.widget(CHECK).map(|w| w.kind), Some(WidgetKind::Checkbox { checked: true }));

    click(&mut ui, 10, 10, |ui| {
        ui.checkbox(CHECK, Rect::new(0, 0, 20, 20), &mut checked);
    });
    assert!(!checked);
}

#[test]
fn test_checkbox_reports_toggle_event() {
    let mut ui = UIContext::with_defaults();
    let mut checked = false;
    let mut body = |ui: &mut UIContext| {
        ui.checkbox(CHECK, Rect::new(0, 0, 20, 20), &mut checked);
    };
    frame(&mut ui, &[move_to(5, 5)], &mut body);
    frame(&mut ui, &[DOWN], &mut body);
    frame(&mut ui, &[UP], &mut body);
    assert_eq!(ui.events(), &[UIEvent::Toggled { id: CHECK, checked: true }]);
}

#[test]
fn test_checkbox_draws_frame_and_indicator() {
    let mut ui = UIContext::with_defaults();
    let mut checked = true;
    frame(&mut ui, &[], |ui| {
        ui.checkbox(CHECK, Rect::new(0, 0, 20, 20), &mut checked);
    });
    let commands = ui.draw_commands();
    assert_eq!(commands.len(), 2);
    assert_eq!(Rect::from_pos_dim(commands[0].pos, commands[0].dim), Rect::new(0, 0, 20, 20));
    assert_eq!(Rect::from_pos_dim(commands[1].pos, commands[1].dim), Rect::new(5, 5, 10, 10));
}

#[test]
fn test_slider_drag_clamps_to_range() {
    let mut ui = UIContext::with_defaults();
    let track = Rect::new(400, 300, 200, 20);
    let mut value = 0.0_f32;

    frame(&mut ui, &[move_to(400, 310)], |ui| ui.slider(VOLUME, track, &mut value));
    assert_relative_eq!(value, 0.0);

    let changed = frame(&mut ui, &[DOWN], |ui| ui.slider(VOLUME, track, &mut value));
    assert!(changed);
    assert_relative_eq!(value, -1.0);

    frame(&mut ui, &[move_to(600, 310)], |ui| ui.slider(VOLUME, track, &mut value));
    assert_eq!(value, 1.0);

    // Past the end of the track: still captured, still clamped
    let changed = frame(&mut ui, &[move_to(900, 310)], |ui| ui.slider(VOLUME, track, &mut value));
    assert!(!changed);
    assert_eq!(value, 1.0);
    assert!(ui.interaction().is_active(VOLUME));

    frame(&mut ui, &[move_to(100, 310)], |ui| ui.slider(VOLUME, track, &mut value));
    assert_eq!(value, -1.0);

    frame(&mut ui, &[move_to(500, 310)], |ui| ui.slider(VOLUME, track, &mut value));
    assert_relative_eq!(value, 0.0);
}

#[test]
fn test_slider_release_stops_tracking() {
    let mut ui = UIContext::with_defaults();
    let track = Rect::new(400, 300, 200, 20);
    let mut value = 0.0_f32;

    frame(&mut ui, &[move_to(450, 310)], |ui| ui.slider(VOLUME, track, &mut value));
    frame(&mut ui, &[DOWN], |ui| ui.slider(VOLUME, track, &mut value));
    assert_relative_eq!(value, -0.5);

    frame(&mut ui, &[UP], |ui| ui.slider(VOLUME, track, &mut value));
    assert_eq!(ui.interaction().active(), None);

    let changed = frame(&mut ui, &[move_to(550, 310)], |ui| ui.slider(VOLUME, track, &mut value));
    assert!(!changed);
    assert_relative_eq!(value, -0.5);
    assert!(ui.events().is_empty());
}

#[test]
fn test_slider_custom_range() {
    let mut ui = UIContext::with_defaults();
    let track = Rect::new(400, 300, 200, 20);
    let mut value = 0.0_f32;

    frame(&mut ui, &[move_to(450, 310)], |ui| ui.slider_range(VOLUME, track, &mut value, 0.0, 10.0));
    frame(&mut ui, &[DOWN], |ui| {
        ui.slider_range(VOLUME, track, &mut value, 0.0, 10.0);
        assert_eq!(ui.events(), &[UIEvent::ValueChanged { id: VOLUME, value: 2.5 }]);
    });
    assert_relative_eq!(value, 2.5);
    assert_eq!(ui.widget(VOLUME).map(|w| w.kind), Some(WidgetKind::Slider { value: 2.5 }));
}

#[test]
fn test_slider_uses_configured_range() {
    let config = UIConfig::default().with_slider_range(0.0, 100.0);
    let mut ui = UIContext::new(config).unwrap();
    let track = Rect::new(0, 0, 100, 10);
    let mut value = 0.0_f32;

    frame(&mut ui, &[move_to(75, 5)], |ui| ui.slider(VOLUME, track, &mut value));
    frame(&mut ui, &[DOWN], |ui| ui.slider(VOLUME, track, &mut value));
    assert_relative_eq!(value, 75.0);
}
