use std::cell::Cell;
use std::rc::Rc;

use anyhow::{Context, Result};
use headroom_engine::logging::{init_logging, LoggingConfig};
use headroom_ui::prelude::*;
use log::info;

const VIEWPORT: Vec2 = Vec2::new(360.0, 640.0);
const ROWS: usize = 40;

/// One scripted frame of host input.
struct Step {
    label: &'static str,
    input: UiInput,
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let offset = Rc::new(Cell::new(0.0_f32));
    let progress = Rc::new(Cell::new(1.0_f32));
    let mut root = build_screen(HeaderExtents::default(), Rc::clone(&offset), Rc::clone(&progress))
        .context("mounting collapsible header screen")?;

    let mut scene = UiScene::new();
    for (i, step) in script().iter().enumerate() {
        let draw_list = scene.frame_ref(&mut root, VIEWPORT, &step.input);
        info!(
            "frame {:>2} {:<14} progress {:.3}  body offset {:>6.1}  draw items {}",
            i,
            step.label,
            progress.get(),
            offset.get(),
            draw_list.len()
        );
    }

    // Settle frame: paint the state left by the last input.
    let draw_list = scene.frame_ref(&mut root, VIEWPORT, &UiInput::default());
    info!(
        "final progress {:.3}, body offset {:.1}, {} draw items",
        progress.get(),
        offset.get(),
        draw_list.len()
    );
    Ok(())
}

fn build_screen(
    extents: HeaderExtents,
    offset: Rc<Cell<f32>>,
    progress: Rc<Cell<f32>>,
) -> Result<Element> {
    let state = CollapsibleHeaderState::expanded(extents)?;

    let collapsed = Color::from_straight(0.08, 0.10, 0.14, 1.0);
    let expanded = Color::from_straight(0.20, 0.45, 0.95, 1.0);
    let header = move |frame: HeaderFrame| -> Element {
        Block::new(collapsed.lerp(expanded, frame.progress)).into()
    };

    let rows = (0..ROWS).map(|i| {
        let shade = if i % 2 == 0 { 0.18 } else { 0.22 };
        Block::new(Color::from_straight(shade, shade, shade, 1.0)).height(56.0)
    });
    let body = ScrollView::new(Column::new().children(rows).gap(1.0))
        .line_height(32.0)
        .on_scroll(move |o| offset.set(o));

    Ok(CollapsibleHeader::new(state, header, body)
        .on_progress(move |f| progress.set(f.progress))
        .into())
}

fn script() -> Vec<Step> {
    let wheel = |lines: f32| UiInput { scroll_delta: lines, ..Default::default() };
    let fling = |dy: f32| UiInput { fling_delta: Vec2::new(0.0, dy), ..Default::default() };
    let start = Vec2::new(180.0, 600.0);
    let drag = |y: f32| UiInput {
        mouse_pos: Vec2::new(180.0, y),
        mouse_pressed: true,
        drag_start: Some(start),
        ..Default::default()
    };
    let release = UiInput {
        mouse_pos: Vec2::new(180.0, 380.0),
        drag_start: Some(start),
        drag_released: true,
        ..Default::default()
    };

    vec![
        Step { label: "wheel down", input: wheel(2.0) },
        Step { label: "wheel down", input: wheel(3.0) },
        Step { label: "wheel up", input: wheel(-4.0) },
        Step { label: "drag", input: drag(540.0) },
        Step { label: "drag", input: drag(460.0) },
        Step { label: "drag", input: drag(380.0) },
        Step { label: "release", input: release },
        Step { label: "fling up", input: fling(-120.0) },
        Step { label: "fling up", input: fling(-60.0) },
        Step { label: "fling down", input: fling(90.0) },
        Step { label: "fling down", input: fling(400.0) },
        Step { label: "fling down", input: fling(400.0) },
    ]
}
