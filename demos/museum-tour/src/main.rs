//! museum-tour — a guided tour of a small gallery, run headless.
//!
//! Loads an embedded five-stop tour (plus one pass-through point), drives it
//! at 30 ticks per second with a simulated visitor who mostly follows the
//! guide, and writes `tour_snapshots.csv` / `tour_events.csv` to
//! `output/museum_tour`.  One narration has no audio asset on purpose, to
//! show the missing-asset diagnostic.
//!
//! Pass a JSON file as the first argument to override the embedded config.
//! Set `RUST_LOG=debug` to see the sequencer's phase log.

mod visitor;

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;

use tg_audio::ScriptedAudio;
use tg_core::{NarrationId, Point3, TourConfig, TourError};
use tg_output::{CsvWriter, OutputWriter, TourLogObserver};
use tg_sequence::load_sequence_reader;
use tg_tour::{TickResult, TourBuilder, TourObserver, TourPhase};

use visitor::Visitor;

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output/museum_tour";

// ── Embedded data ─────────────────────────────────────────────────────────────

const TOUR_CSV: &str = "\
x,y,z,look_x,look_y,look_z,artwork_id,min_duration_ms,narration_id,is_transition\n\
0,0.5,-6,0,2.5,-9,welcome-plaque,2000,welcome,false\n\
-6,0.5,-10,-6,2.5,-13,mona-lisa,4000,mona-lisa-story,false\n\
-3,0.5,-14,,,,,0,,true\n\
2,0.5,-16,2,2.5,-19,night-watch,3000,night-watch-story,false\n\
8,0.5,-12,11,2.5,-12,starry-night,3000,starry-night-story,false\n\
4,0.5,-4,4,1.0,-2,gift-shop,1000,farewell,false\n\
";

/// Narration lengths in ms.  `night-watch-story` is missing on purpose.
const NARRATIONS: &[(&str, f32)] = &[
    ("welcome",            6_000.0),
    ("mona-lisa-story",   12_000.0),
    ("starry-night-story", 9_000.0),
    ("farewell",           3_000.0),
];

const CONFIG_JSON: &str = r#"{
    "tour": {
        "speed": 1.4,
        "rotation_speed": 2.5,
        "arrival_epsilon": 0.1,
        "proximity_threshold": 2.5,
        "start_position": { "x": 0.0, "y": 0.5, "z": 0.0 },
        "absent_visitor": "wait",
        "pause_policy": "pause_narration"
    },
    "seed": 7,
    "tick_ms": 33.3,
    "max_ticks": 20000,
    "visitor_speed": 1.2,
    "follow_distance": 1.5,
    "wander_chance": 0.004,
    "question_at_tick": 900,
    "question_ticks": 120
}"#;

// ── Demo config ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct DemoConfig {
    #[serde(default)]
    tour:             TourConfig,
    seed:             u64,
    tick_ms:          f32,
    max_ticks:        u64,
    visitor_speed:    f32,
    follow_distance:  f32,
    wander_chance:    f64,
    /// Tick at which the visitor stops the guide with a question (pause).
    question_at_tick: u64,
    question_ticks:   u64,
}

fn load_config() -> Result<DemoConfig> {
    let json = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading config {path}"))?,
        None => CONFIG_JSON.to_owned(),
    };
    Ok(serde_json::from_str(&json)?)
}

// ── Observer wrapper to print progress ────────────────────────────────────────

struct ConsoleObserver<W: OutputWriter> {
    inner:       TourLogObserver<W>,
    tick:        u64,
    stops:       usize,
    narrations:  usize,
    diagnostics: usize,
    completed:   bool,
}

impl<W: OutputWriter> ConsoleObserver<W> {
    fn new(inner: TourLogObserver<W>) -> Self {
        Self { inner, tick: 0, stops: 0, narrations: 0, diagnostics: 0, completed: false }
    }
}

impl<W: OutputWriter> TourObserver for ConsoleObserver<W> {
    fn on_phase_changed(&mut self, from: TourPhase, to: TourPhase) {
        if to == TourPhase::AtWaypoint {
            self.stops += 1;
        }
        self.inner.on_phase_changed(from, to);
    }

    fn on_speaking_changed(&mut self, speaking: bool) {
        self.inner.on_speaking_changed(speaking);
    }

    fn on_waypoint_reached(&mut self, index: usize) {
        println!("  [T{:>5}] reached waypoint {index}", self.tick + 1);
        self.inner.on_waypoint_reached(index);
    }

    fn on_tour_completed(&mut self) {
        println!("  [T{:>5}] tour completed", self.tick + 1);
        self.completed = true;
        self.inner.on_tour_completed();
    }

    fn on_narration_requested(&mut self, narration: &NarrationId) {
        println!("  [T{:>5}] narrating {narration}", self.tick + 1);
        self.narrations += 1;
        self.inner.on_narration_requested(narration);
    }

    fn on_narration_stop_requested(&mut self) {
        self.inner.on_narration_stop_requested();
    }

    fn on_diagnostic(&mut self, diagnostic: &TourError) {
        println!("  [T{:>5}] warning: {diagnostic}", self.tick + 1);
        self.diagnostics += 1;
        self.inner.on_diagnostic(diagnostic);
    }

    fn on_tick_end(&mut self, result: &TickResult) {
        self.tick = result.tick;
        self.inner.on_tick_end(result);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let demo = load_config()?;
    println!("=== museum-tour — tour_guide playback engine ===");
    println!(
        "Tick: {} ms  |  Seed: {}  |  Max ticks: {}",
        demo.tick_ms, demo.seed, demo.max_ticks
    );
    println!();

    // 1. Load the tour.
    let sequence = load_sequence_reader(
        Cursor::new(TOUR_CSV),
        "Highlights of the Collection",
        Some("masterpieces"),
    )?;
    println!(
        "Tour '{}': {} waypoints, {} stops, at least {:.1} s of dwell",
        sequence.name(),
        sequence.len(),
        sequence.stop_count(),
        sequence.min_duration_from(0) as f64 / 1_000.0
    );

    println!("{:<6} {:<16} {:<12} {:>24}", "Index", "Artwork", "Kind", "Position");
    println!("{}", "-".repeat(61));
    for (i, w) in sequence.iter().enumerate() {
        println!(
            "{:<6} {:<16} {:<12} {:>24}",
            i,
            w.artwork_id.as_ref().map_or("-", |a| a.as_str()),
            if w.is_transition { "transition" } else { "stop" },
            w.position.to_string(),
        );
    }
    println!();

    // 2. Audio.
    let mut audio = ScriptedAudio::new();
    for (id, ms) in NARRATIONS {
        audio.insert(*id, *ms);
    }

    // 3. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let observer = ConsoleObserver::new(TourLogObserver::new(writer));

    // 4. Build the sequencer.
    let start = demo.tour.start_position;
    let mut tour = TourBuilder::new(demo.tour, audio)
        .observer(observer)
        .sequence(sequence)
        .build()?;

    let mut visitor = Visitor::new(
        start + Point3::new(0.0, 0.0, 2.0),
        demo.seed,
        demo.visitor_speed,
        demo.follow_distance,
        demo.wander_chance,
    );

    // 5. Run.
    tour.play()?;
    let t0 = Instant::now();
    let mut waiting_ticks = 0u64;
    let mut wander_ticks  = 0u64;

    for tick in 1..=demo.max_ticks {
        if tick == demo.question_at_tick {
            println!("  [T{tick:>5}] visitor asks a question, pausing");
            tour.pause()?;
        }
        if tick == demo.question_at_tick + demo.question_ticks {
            println!("  [T{tick:>5}] resuming");
            tour.resume()?;
        }

        let guide = tour.agent().position;
        let seen  = visitor.step(guide, demo.tick_ms);
        if visitor.is_wandering() {
            wander_ticks += 1;
        }

        let frame = tour.tick(demo.tick_ms, Some(seen));
        if frame.phase == TourPhase::AwaitingVisitor {
            waiting_ticks += 1;
        }
        if !tour.is_active() {
            break;
        }
    }

    if tour.is_active() {
        println!("Tick limit reached; stopping tour");
        tour.stop();
    }
    let elapsed = t0.elapsed();

    if let Err(e) = tour.observer_mut().inner.finish() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    let obs = tour.observer();
    println!();
    println!("Run complete in {:.3} s (engine time {})", elapsed.as_secs_f64(), tour.clock());
    println!("  completed           : {}", if obs.completed { "yes" } else { "no" });
    println!("  stops visited       : {}", obs.stops);
    println!("  narrations started  : {}", obs.narrations);
    println!("  missing narrations  : {}", obs.diagnostics);
    println!("  ticks awaiting      : {waiting_ticks}");
    println!("  visitor wandering   : {wander_ticks} ticks");
    println!("  output              : {OUTPUT_DIR}/tour_snapshots.csv, tour_events.csv");

    Ok(())
}
