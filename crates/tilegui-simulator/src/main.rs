//! Desktop demo for tilegui.
//!
//! Draws a small widget gallery onto an 80x45 cell canvas and letterboxes it
//! into an SDL2 window via `embedded-graphics-simulator`. The panel tiles come
//! from an atlas generated at startup, so no asset files are needed.
//!
//! # Key bindings
//!
//! | Key | Action           |
//! |-----|------------------|
//! | T   | Next theme       |
//! | Q   | Quit             |
//!
//! The mouse drives the pointer; the left button is the primary button.

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::{IntoStorage, Rgb565};
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
    sdl2::{Keycode, MouseButton},
};
use log::{error, info};

use tilegui::canvas::Canvas;
use tilegui::config::GuiConfig;
use tilegui::ui::styling::{DARK_GRAY, GOLD, GREEN, SKY_BLUE, WHITE};
use tilegui::ui::{
    AtlasPos, DisplayRenderer, Frame, Gui, HAlign, PanelKit, Placement, PointerInput, Renderer,
    Result, Theme, TileAtlas, VAlign,
};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

/// Window size in pixels. Deliberately not a multiple of the canvas so the
/// letterbox bars are visible.
const WINDOW_WIDTH: u32 = 1366;
const WINDOW_HEIGHT: u32 = 800;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Panel tiles occupy the 3x4 block at the atlas origin.
const PANEL_KIT: PanelKit = PanelKit::block(AtlasPos::new(0, 0));

/// Checkerboard tile beside the panel block.
const CHECKER: AtlasPos = AtlasPos::new(3, 0);

// ---------------------------------------------------------------------------
// Atlas generation
// ---------------------------------------------------------------------------

/// Build a 4x4 tile atlas of `cell`-sized tiles as big-endian RGB565 bytes.
///
/// Columns 0-2 hold the panel kit: each tile gets a border on the sides that
/// face outward in a nine-slice, and the bottom row holds the one-row caps
/// and strip. Column 3 row 0 is a checkerboard.
fn generate_atlas(cell: u32) -> Vec<u8> {
    let (cols, rows) = (4u32, 4u32);
    let width = cols * cell;
    let height = rows * cell;
    let border = Rgb565::new(0x1c, 0x38, 0x1c).into_storage().to_be_bytes();
    let fill = Rgb565::new(0x04, 0x0c, 0x06).into_storage().to_be_bytes();
    let blank = Rgb565::BLACK.into_storage().to_be_bytes();

    let mut data = Vec::with_capacity((width * height * 2) as usize);
    for y in 0..height {
        for x in 0..width {
            let (col, row) = (x / cell, y / cell);
            let (px, py) = (x % cell, y % cell);
            let (left, right) = (px == 0, px == cell - 1);
            let (top, bottom) = (py == 0, py == cell - 1);

            let color = match (col, row) {
                (0..=2, 0..=2) => {
                    let edge = (col == 0 && left)
                        || (col == 2 && right)
                        || (row == 0 && top)
                        || (row == 2 && bottom);
                    if edge { border } else { fill }
                }
                (0..=2, 3) => {
                    let edge = top || bottom || (col == 0 && left) || (col == 2 && right);
                    if edge { border } else { fill }
                }
                (3, 0) => {
                    if ((px / 2) + (py / 2)) % 2 == 0 { border } else { blank }
                }
                _ => blank,
            };
            data.extend_from_slice(&color);
        }
    }
    data
}

// ---------------------------------------------------------------------------
// Demo UI
// ---------------------------------------------------------------------------

struct DemoState {
    clicks: u32,
    theme: usize,
}

fn themes() -> [(&'static str, Theme); 4] {
    [
        ("terminal", Theme::terminal().with_panel_kit(PANEL_KIT)),
        ("basic", Theme::basic().with_panel_kit(PANEL_KIT)),
        ("mono", Theme::mono().with_panel_kit(PANEL_KIT)),
        ("console", Theme::console().with_panel_kit(PANEL_KIT)),
    ]
}

/// Layout calls fail without a renderer, so their errors are widened to the
/// renderer's error type.
fn draw_ui<R: Renderer>(
    frame: &mut Frame<'_>,
    renderer: &mut R,
    state: &mut DemoState,
) -> Result<(), R::Error> {
    let (theme_name, theme) = themes()[state.theme];
    frame.set_theme(theme);
    frame.set_spacing(1);

    // Title bar
    frame.panel(renderer, Placement::rect(1, 1, 78, 1))?;
    frame.text(renderer, "tilegui demo", Point::new(3, 1), GOLD)?;

    // Button column
    frame.panel(renderer, Placement::rect(1, 3, 24, 20))?;
    frame
        .vbox(Placement::rect(3, 5, 20, 16))
        .map_err(|e| e.widen())?;
    frame.label(renderer, "Buttons", Placement::auto())?;
    if frame.button(renderer, "Click me", Placement::auto())?.clicked {
        state.clicks += 1;
        info!("Clicked {} times", state.clicks);
    }
    if frame.button(renderer, "Next theme", Placement::auto())?.clicked {
        state.theme = (state.theme + 1) % themes().len();
        info!("Theme -> {}", themes()[state.theme].0);
    }
    let wide = frame.button(renderer, "Wide", Placement::auto().fill_width())?;
    if wide.clicked {
        info!("Wide button clicked at {:?}", wide.rect);
    }
    frame.end_box();

    // Horizontal row, as in the layout tests
    frame.hbox(Placement::at(27, 4)).map_err(|e| e.widen())?;
    for name in ["Left", "A", "Right", "B"] {
        if frame.button(renderer, name, Placement::auto())?.clicked {
            info!("{} clicked", name);
        }
    }
    frame.end_box();

    // Alignment showcase
    frame.rect(renderer, Placement::rect(27, 7, 30, 9))?;
    for (h, v, text) in [
        (HAlign::Left, VAlign::Top, "top-left"),
        (HAlign::Center, VAlign::Center, "center"),
        (HAlign::Right, VAlign::Bottom, "bottom-right"),
    ] {
        frame.align(h);
        frame.valign(v);
        frame.label(renderer, text, Placement::rect(28, 8, 28, 7))?;
    }
    frame.align(HAlign::Left);
    frame.valign(VAlign::Top);

    // Status
    let pointer = frame.pointer();
    frame.text(
        renderer,
        &format!("theme: {}", theme_name),
        Point::new(27, 18),
        WHITE,
    )?;
    frame.text(
        renderer,
        &format!("clicks: {}", state.clicks),
        Point::new(27, 19),
        GREEN,
    )?;
    frame.text(
        renderer,
        &format!("pointer: ({}, {})", pointer.cell.x, pointer.cell.y),
        Point::new(27, 20),
        SKY_BLUE,
    )?;

    // Tiles
    for x in 60..70 {
        frame.tile(renderer, CHECKER, Point::new(x, 18), None)?;
    }
    frame.rect(renderer, Placement::rect(60, 22, 15, 15))?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();

    let config = GuiConfig::default();
    let mut gui = Gui::new(config);
    let metrics = gui.metrics();
    info!("Starting tilegui simulator");
    info!(
        "Canvas: {}x{} cells, window {}x{}",
        metrics.columns, metrics.rows, WINDOW_WIDTH, WINDOW_HEIGHT
    );
    info!("Keys: T=next theme  Q=Quit");

    let atlas_data = generate_atlas(config.cell_width);
    let atlas = match TileAtlas::new(
        &atlas_data,
        4 * config.cell_width,
        Size::new(config.cell_width, config.cell_height),
    ) {
        Ok(atlas) => atlas,
        Err(e) => {
            error!("Bad atlas: {}", e);
            return;
        }
    };

    let mut canvas = Canvas::new(&metrics, config.transparent);
    let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new("tilegui Simulator", &output_settings);

    let mut state = DemoState {
        clicks: 0,
        theme: 0,
    };
    let mut pointer = PointerInput::new(Point::new(-1, -1), false);

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    window.update(&display);

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Q | Keycode::Escape => break 'running,
                    Keycode::T => {
                        state.theme = (state.theme + 1) % themes().len();
                        info!("Theme -> {}", themes()[state.theme].0);
                    }
                    _ => {}
                },

                SimulatorEvent::MouseMove { point } => pointer.position = point,

                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    point,
                } => pointer.press(point),

                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    point,
                } => pointer.release(point),

                _ => {}
            }
        }

        // --- Render -------------------------------------------------------
        {
            let mut renderer = DisplayRenderer::new(canvas.begin()).with_atlas(&atlas);
            let mut frame = gui.frame(pointer);
            pointer.clear_events();
            if let Err(e) = draw_ui(&mut frame, &mut renderer, &mut state) {
                error!("Draw error: {}", e);
            }
        }

        let _ = display.clear(DARK_GRAY);
        match canvas.present(&mut display) {
            Ok(transform) => gui.set_transform(transform),
            Err(e) => error!("Present error: {:?}", e),
        }
        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
