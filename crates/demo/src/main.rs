// File: crates/demo/src/main.rs
// Summary: Headless demo: reads function slots from flags or a CSV file and renders the graph to PNG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use graph_core::types::{DEFAULT_SCALE, SLOT_COUNT};
use graph_core::{theme, GraphEngine, GraphSession, RenderOptions, SkiaCanvas, SlotInput, Trigger};
use tracing::{info, warn, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "graph-demo")]
#[command(about = "Render linear/quadratic functions on a unit grid to PNG", long_about = None)]
struct Args {
    /// Pixels per unit; the canvas is 100 units wide
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    scale: f64,

    /// Function slot as kind[:c0,c1,c2[:#color[:weight]]], e.g. quadratic:1,0,-2:#3366ff:3
    #[arg(long = "fn", value_name = "SLOT")]
    functions: Vec<SlotInput>,

    /// CSV file with columns kind,c0,c1,c2,color,weight (one slot per row)
    #[arg(long, value_name = "CSV")]
    slots: Option<PathBuf>,

    /// Theme preset (light, dark, high-contrast-dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// Output PNG path
    #[arg(long, default_value = "target/out/graph.png")]
    out: PathBuf,

    /// Enable debug logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_deref())?;

    let mut slots = args.functions.clone();
    if let Some(path) = &args.slots {
        let from_csv = load_slots_csv(path).with_context(|| format!("failed to load slots from '{}'", path.display()))?;
        println!("Loaded {} slot(s) from {}", from_csv.len(), path.display());
        slots.extend(from_csv);
    }
    if slots.len() > SLOT_COUNT {
        warn!(given = slots.len(), kept = SLOT_COUNT, "too many function slots; extra ones ignored");
        slots.truncate(SLOT_COUNT);
    }

    let theme = theme::find(&args.theme);
    let engine = GraphEngine::new(RenderOptions { theme, ..RenderOptions::default() });
    let canvas = SkiaCanvas::with_background(theme.background)?;
    let mut session = GraphSession::new(engine, canvas);
    for (i, slot) in slots.into_iter().enumerate() {
        session.set_slot(i, slot);
    }

    let summary = session
        .handle(Trigger::ScaleChanged(args.scale))
        .with_context(|| format!("render at scale {}", args.scale))?
        .clone();
    for curve in &summary.curves {
        println!("  slot {} [{}]: {} ({} segments)", curve.slot, curve.kind.name(), curve.kind, curve.segments);
    }

    session.canvas_mut().write_png(&args.out).with_context(|| format!("writing {}", args.out.display()))?;
    println!(
        "Wrote {} ({}x{}, scale {})",
        args.out.display(),
        summary.viewport.width_px,
        summary.viewport.height_px,
        session.scale_label()
    );
    info!(path = %args.out.display(), "done");
    Ok(())
}

fn init_logging(log: Option<&Path>) -> Result<()> {
    if let Some(log_path) = log {
        let log_path = log_path.to_path_buf();
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_path)
            .with_context(|| format!("opening log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }
    Ok(())
}

/// Read one slot per row. Header names are matched case-insensitively; missing columns are empty.
fn load_slots_csv(path: &Path) -> Result<Vec<SlotInput>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_kind = idx(&["kind", "type", "function"]).context("CSV needs a kind/type column")?;
    let i_coeffs = [idx(&["c0", "a", "m"]), idx(&["c1", "b"]), idx(&["c2", "c"])];
    let i_color = idx(&["color", "colour"]);
    let i_weight = idx(&["weight", "width"]);

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let field = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).unwrap_or("").to_string();
        let mut slot = SlotInput { kind: field(Some(i_kind)), ..SlotInput::default() };
        for (dst, i) in slot.coefficients.iter_mut().zip(i_coeffs) {
            *dst = field(i);
        }
        slot.color = field(i_color);
        slot.weight = field(i_weight);
        out.push(slot);
    }
    Ok(out)
}
