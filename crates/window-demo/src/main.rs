// File: crates/window-demo/src/main.rs
// Summary: Windowed viewer: a 540x540 scrollable view of the graph canvas via RGBA blit (CPU) using winit + softbuffer.

use std::num::NonZeroU32;

use anyhow::{anyhow, Result};
use clap::Parser;
use graph_core::types::{CONTAINER_PX, DEFAULT_SCALE};
use graph_core::{theme, Color, GraphEngine, GraphSession, RenderOptions, SkiaCanvas, SlotInput, Trigger};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const MIN_SCALE: f64 = 5.0;
const MAX_SCALE: f64 = 150.0;
const SCALE_STEP: f64 = 5.0;

#[derive(Parser, Debug)]
#[command(name = "graph-window")]
#[command(about = "Interactive viewer for linear/quadratic function graphs", long_about = None)]
struct Args {
    /// Initial pixels per unit
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    scale: f64,

    /// Function slot as kind[:c0,c1,c2[:#color[:weight]]]
    #[arg(long = "fn", value_name = "SLOT")]
    functions: Vec<SlotInput>,

    /// Theme preset (light, dark, high-contrast-dark)
    #[arg(long, default_value = "light")]
    theme: String,
}

/// Last rendered canvas, kept as RGBA so scrolling does not re-render.
struct Frame {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    stride: usize,
}

impl Frame {
    fn capture(session: &mut GraphSession<SkiaCanvas>) -> Result<Self> {
        let (pixels, width, height, stride) = session.canvas_mut().rgba8()?;
        Ok(Self { pixels, width, height, stride })
    }

    /// Pixel at canvas coordinates packed as softbuffer's 0RGB.
    fn sample(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.stride + x as usize * 4;
        let px = &self.pixels[i..i + 4];
        Some(((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
    }
}

enum Action {
    Render(Trigger),
    Scroll { dx: i64, dy: i64 },
}

fn key_action(key: VirtualKeyCode, scale: f64) -> Option<Action> {
    let unit = scale.round() as i64;
    match key {
        VirtualKeyCode::Return | VirtualKeyCode::NumpadEnter => Some(Action::Render(Trigger::Enter)),
        VirtualKeyCode::G => Some(Action::Render(Trigger::Graph)),
        VirtualKeyCode::Plus | VirtualKeyCode::Equals | VirtualKeyCode::NumpadAdd => {
            Some(Action::Render(Trigger::ScaleChanged((scale + SCALE_STEP).min(MAX_SCALE))))
        }
        VirtualKeyCode::Minus | VirtualKeyCode::NumpadSubtract => {
            Some(Action::Render(Trigger::ScaleChanged((scale - SCALE_STEP).max(MIN_SCALE))))
        }
        VirtualKeyCode::Left => Some(Action::Scroll { dx: -unit, dy: 0 }),
        VirtualKeyCode::Right => Some(Action::Scroll { dx: unit, dy: 0 }),
        VirtualKeyCode::Up => Some(Action::Scroll { dx: 0, dy: -unit }),
        VirtualKeyCode::Down => Some(Action::Scroll { dx: 0, dy: unit }),
        _ => None,
    }
}

fn pack(color: Color) -> u32 {
    ((color.r() as u32) << 16) | ((color.g() as u32) << 8) | color.b() as u32
}

fn title(session: &GraphSession<SkiaCanvas>) -> String {
    format!("Function graph | scale {}", session.scale_label())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let theme = theme::find(&args.theme);
    let background = pack(theme.background);
    let engine = GraphEngine::new(RenderOptions { theme, ..RenderOptions::default() });
    let mut session = GraphSession::new(engine, SkiaCanvas::with_background(theme.background)?);
    for (i, slot) in args.functions.iter().cloned().enumerate() {
        session.set_slot(i, slot);
    }

    session.handle(Trigger::ScaleChanged(args.scale))?;
    let mut frame = Frame::capture(&mut session)?;
    let mut scroll = session.centered_scroll(CONTAINER_PX, CONTAINER_PX).unwrap_or((0, 0));

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title(&session))
        .with_inner_size(winit::dpi::LogicalSize::new(CONTAINER_PX as f64, CONTAINER_PX as f64))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e:?}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e:?}"))?;
    let mut size = window.inner_size();
    info!("keys: +/- zoom, Enter/G re-graph, arrows scroll");

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    let Some(action) = key_action(key, session.scale()) else { return };
                    match action {
                        Action::Render(trigger) => match session.handle(trigger) {
                            Ok(_) => match Frame::capture(&mut session) {
                                Ok(f) => {
                                    frame = f;
                                    scroll = session.centered_scroll(size.width, size.height).unwrap_or((0, 0));
                                    window.set_title(&title(&session));
                                }
                                Err(e) => warn!("frame capture failed: {e}"),
                            },
                            Err(e) => warn!("render rejected: {e}"),
                        },
                        Action::Scroll { dx, dy } => {
                            if let Some(vp) = session.viewport() {
                                scroll = vp.clamp_scroll(scroll.0 as i64 + dx, scroll.1 as i64 + dy, size.width, size.height);
                            }
                        }
                    }
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let (w, h) = (size.width.max(1), size.height.max(1));
                if let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) {
                    if let Err(e) = surface.resize(nw, nh) {
                        warn!("surface resize failed: {e:?}");
                        return;
                    }
                }
                let mut buffer = match surface.buffer_mut() {
                    Ok(b) => b,
                    Err(e) => {
                        warn!("no frame buffer: {e:?}");
                        return;
                    }
                };
                for y in 0..h {
                    for x in 0..w {
                        let i = (y * w + x) as usize;
                        if i < buffer.len() {
                            buffer[i] = frame.sample(scroll.0 + x, scroll.1 + y).unwrap_or(background);
                        }
                    }
                }
                if let Err(e) = buffer.present() {
                    warn!("present error: {e:?}");
                }
            }
            _ => {}
        }
    });
}
