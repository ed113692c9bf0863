//! placement — run the detect-and-freeze sensor grid from the terminal.
//!
//! ```text
//! placement [SCENARIO_CSV | --random SEED] [--config CONFIG_TOML] [--out DIR]
//! ```
//!
//! Without arguments the embedded 20 × 20 layout below is used with the
//! embedded configuration.  `RUST_LOG=wsn_sim=debug` shows every thief's
//! detection history as it grows.

mod board;

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;

use wsn_core::{SimConfig, SimRng};
use wsn_detect::{CountingRule, Thresholds};
use wsn_grid::BfsNavigator;
use wsn_output::{CsvWriter, OutputWriter, SimOutputObserver};
use wsn_scenario::{ScatterCounts, Scenario, load_scenario_csv, load_scenario_reader, scatter};
use wsn_sim::{AgentSnapshot, SimBuilder, SimObserver, TickSummary};

use board::StatusBoard;

// ── Embedded inputs ───────────────────────────────────────────────────────────

const CONFIG_TOML: &str = "\
width            = 20
height           = 20
sensor_radius    = 2
k_detection      = 3
c_groups         = 3
tick_interval_ms = 1000
max_ticks        = 200
";

const SCENARIO_CSV: &str = "\
kind,x,y\n\
sensor,5,5\n\
sensor,6,5\n\
sensor,7,5\n\
sensor,5,8\n\
sensor,6,8\n\
sensor,7,8\n\
sensor,12,12\n\
sensor,13,12\n\
sensor,14,14\n\
sensor,15,9\n\
sensor,16,11\n\
sensor,17,9\n\
thief,1,6\n\
thief,1,15\n\
thief,9,18\n\
wall,10,3\n\
wall,10,4\n\
wall,10,5\n\
wall,10,6\n\
wall,10,7\n\
wall,3,12\n\
wall,4,12\n\
wall,5,12\n\
wall,6,12\n\
exit,19,10\n\
exit,19,2\n\
";

// ── Command line ──────────────────────────────────────────────────────────────

enum Source {
    Embedded,
    File(PathBuf),
    Random(u64),
}

struct Args {
    source: Source,
    config: Option<PathBuf>,
    out:    Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args { source: Source::Embedded, config: None, out: None };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--random" => {
                let seed = it.next().context("--random needs a seed")?;
                args.source = Source::Random(seed.parse().context("seed must be a u64")?);
            }
            "--config" => args.config = Some(it.next().context("--config needs a path")?.into()),
            "--out"    => args.out = Some(it.next().context("--out needs a directory")?.into()),
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            path => args.source = Source::File(path.into()),
        }
    }
    Ok(args)
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let text = match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?,
        None => CONFIG_TOML.to_owned(),
    };
    let config: SimConfig = toml::from_str(&text).context("parsing configuration")?;
    config.validate()?;
    Ok(config)
}

fn load_scenario(source: &Source, config: &SimConfig) -> Result<Scenario> {
    let scenario = match source {
        Source::Embedded => load_scenario_reader(Cursor::new(SCENARIO_CSV), config)?,
        Source::File(p) => {
            load_scenario_csv(p, config).with_context(|| format!("loading {}", p.display()))?
        }
        Source::Random(seed) => scatter(config, ScatterCounts::default(), &mut SimRng::new(*seed))?,
    };
    Ok(scenario)
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Status board always; CSV output when `--out` is given.
struct DemoObserver<W: OutputWriter> {
    board:  StatusBoard,
    output: Option<SimOutputObserver<W>>,
}

impl<W: OutputWriter> SimObserver for DemoObserver<W> {
    fn on_tick_start(&mut self, tick: wsn_core::Tick) {
        self.board.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, tick: wsn_core::Tick, summary: &TickSummary) {
        self.board.on_tick_end(tick, summary);
        if let Some(out) = &mut self.output {
            out.on_tick_end(tick, summary);
        }
    }

    fn on_snapshot(&mut self, tick: wsn_core::Tick, agents: &[AgentSnapshot]) {
        self.board.on_snapshot(tick, agents);
        if let Some(out) = &mut self.output {
            out.on_snapshot(tick, agents);
        }
    }

    fn on_sim_end(&mut self, final_tick: wsn_core::Tick) {
        self.board.on_sim_end(final_tick);
        if let Some(out) = &mut self.output {
            out.on_sim_end(final_tick);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args()?;
    let config = load_config(args.config.as_deref())?;
    let scenario = load_scenario(&args.source, &config)?;

    println!("=== placement — sensor grid detect & freeze ===");
    println!(
        "Grid: {}x{}  |  Sensors: {} (radius {})  |  Thieves: {}  |  Walls: {}  |  Exits: {}",
        config.width,
        config.height,
        scenario.sensors().len(),
        config.sensor_radius,
        scenario.thieves().len(),
        scenario.walls().len(),
        scenario.exits().len(),
    );

    let thresholds = Thresholds::from_config(&config)?;
    let mut sim = SimBuilder::new(config.clone(), scenario, BfsNavigator, CountingRule).build()?;

    let output = match &args.out {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Some(SimOutputObserver::new(CsvWriter::new(dir)?, &config))
        }
        None => None,
    };
    let mut observer = DemoObserver { board: StatusBoard::new(thresholds), output };

    let t0 = Instant::now();
    let summary = sim.run(&mut observer)?;
    let elapsed = t0.elapsed();

    if let Some(err) = observer.output.as_mut().and_then(|o| o.take_error()) {
        eprintln!("Output error: {err}");
    }

    println!();
    println!(
        "Frozen: {}  |  Escaped: {}  |  Still moving: {}  |  Wall time: {:.1}s",
        summary.frozen,
        summary.escaped,
        summary.active(),
        elapsed.as_secs_f64()
    );
    if let Some(dir) = &args.out {
        println!("Output written to {}", dir.display());
    }
    Ok(())
}
