use clap::Args;
use dragboard::config::Settings;
use dragboard::correct::{NullCorrector, SpellCorrector, WordListCorrector};
use dragboard::engine::Engine;
use dragboard::error::{DbResult, DragboardError};
use dragboard::geometry::{path_length, Point};
use dragboard::grid::Bounds;
use dragboard::speech::LogSpeech;
use serde::Deserialize;
use std::fs;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// CSV trace with header `event,t_ms,x,y`; event is start, sample, or end
    #[arg(long)]
    pub trace: String,

    /// Physical board width the trace was recorded against
    #[arg(long, default_value_t = 500.0)]
    pub width: f32,

    /// Physical board height the trace was recorded against
    #[arg(long, default_value_t = 900.0)]
    pub height: f32,

    /// Word list for autocorrect, one word per line
    #[arg(long)]
    pub words: Option<String>,

    #[command(flatten)]
    pub settings: Settings,
}

#[derive(Debug, Deserialize)]
struct TraceRow {
    event: String,
    t_ms: u64,
    x: Option<f32>,
    y: Option<f32>,
}

pub fn run(args: ReplayArgs) -> DbResult<()> {
    let corrector: Box<dyn SpellCorrector> = match &args.words {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            Box::new(WordListCorrector::new(content.lines().map(str::to_owned)))
        }
        None => Box::new(NullCorrector),
    };

    let mut engine = Engine::new(args.settings.clone(), corrector, Box::new(LogSpeech));
    let bounds = Bounds::new(args.width, args.height);
    let base = Instant::now();

    let mut reader = csv::Reader::from_path(&args.trace)?;
    let mut points = Vec::new();
    for row in reader.deserialize() {
        let row: TraceRow = row?;
        match row.event.as_str() {
            "start" => engine.on_gesture_start(),
            "end" => engine.on_gesture_end(),
            "sample" => {
                let (Some(x), Some(y)) = (row.x, row.y) else {
                    return Err(DragboardError::Validation(format!(
                        "sample row at {}ms is missing coordinates",
                        row.t_ms
                    )));
                };
                let point = Point::new(x, y);
                points.push(point);
                engine.sample_at(point, bounds, base + Duration::from_millis(row.t_ms));
            }
            other => {
                return Err(DragboardError::Validation(format!(
                    "unknown trace event '{}'",
                    other
                )))
            }
        }
    }

    // A trace that stops mid-gesture still gets its last word committed
    engine.on_gesture_end();

    info!(
        samples = points.len(),
        path = path_length(&points),
        "trace replayed"
    );
    println!("Sentence: {}", engine.sentence().trim_end());
    Ok(())
}
