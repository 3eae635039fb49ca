//! plantready: headless PlantReady dashboard.
//!
//! Usage:
//!   plantready --seed 12345 --month Jun
//!   plantready --seed 12345 --select 28.1,-1.8 --select 27.9,-2.0
//!   plantready --config sim.json --ipc-mode
//!
//! Text mode prints every panel of the dashboard. IPC mode reads one
//! JSON command per line on stdin and answers each with the dashboard
//! state as one JSON line on stdout. `--select` clicks are applied
//! before either mode starts.

use anyhow::Result;
use chrono::Month;
use plantready_core::{
    config::SimConfig,
    dashboard::{Dashboard, LOADING_MESSAGE},
    overlay::{BASEMAP, MAP_CENTER, MAP_MAX_ZOOM, MAP_MIN_ZOOM, MAP_ZOOM},
    rng::RngBank,
    simulator::DataSimulator,
    types::{month_label, parse_month, LonLat},
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    SelectArea { coordinates: Vec<LonLat> },
    Quit,
}

struct RunnerOptions {
    ipc_mode:    bool,
    seed:        Option<u64>,
    month:       Option<Month>,
    config_path: Option<String>,
    selections:  Vec<LonLat>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let options = parse_options(&args)?;
    let mut dashboard = build_dashboard(&options)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if options.ipc_mode {
        let stdin = io::stdin();
        run_ipc_loop(&mut dashboard, stdin.lock(), &mut out)?;
    } else {
        render_text(&dashboard, &mut out)?;
    }
    Ok(())
}

fn parse_options(args: &[String]) -> Result<RunnerOptions> {
    let seed = match find_arg(args, "--seed") {
        Some(raw) => Some(
            raw.parse()
                .map_err(|e| anyhow::anyhow!("Invalid --seed '{raw}': {e}"))?,
        ),
        None => None,
    };
    let month = find_arg(args, "--month").map(parse_month).transpose()?;
    let selections = args
        .windows(2)
        .filter(|w| w[0] == "--select")
        .map(|w| parse_lon_lat(&w[1]))
        .collect::<Result<Vec<LonLat>>>()?;

    Ok(RunnerOptions {
        ipc_mode: args.iter().any(|a| a == "--ipc-mode"),
        seed,
        month,
        config_path: find_arg(args, "--config").map(str::to_string),
        selections,
    })
}

/// Start the dashboard and replay every `--select` click, in order.
fn build_dashboard(options: &RunnerOptions) -> Result<Dashboard> {
    let config = match &options.config_path {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    let rng_bank = match options.seed {
        Some(seed) => RngBank::new(seed),
        None => RngBank::from_entropy(),
    };

    let mut dashboard = Dashboard::new(DataSimulator::new(config), rng_bank);
    if let Some(month) = options.month {
        dashboard = dashboard.with_month(month);
    }
    log::info!("seed={} (pass --seed to replay)", dashboard.seed());

    dashboard.start();
    for coords in &options.selections {
        dashboard.on_area_select(std::slice::from_ref(coords))?;
    }
    Ok(dashboard)
}

fn run_ipc_loop<R: BufRead, W: Write>(
    dashboard: &mut Dashboard,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = input.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Unknown IPC command: {}", buffer.trim());
                write_error(out, &e.to_string())?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState => {
                writeln!(out, "{}", serde_json::to_string(&dashboard.state())?)?;
            }
            IpcCommand::SelectArea { coordinates } => {
                if let Err(e) = dashboard.on_area_select(&coordinates) {
                    write_error(out, &e.to_string())?;
                    continue;
                }
                writeln!(out, "{}", serde_json::to_string(&dashboard.state())?)?;
            }
        }
        out.flush()?;
    }
    Ok(())
}

fn write_error<W: Write>(out: &mut W, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(out, "{}", err_json)?;
    out.flush()?;
    Ok(())
}

fn render_text<W: Write>(dashboard: &Dashboard, out: &mut W) -> Result<()> {
    writeln!(out, "PlantReady - Smart Planting Decision Support")?;
    writeln!(out, "  seed:      {}", dashboard.seed())?;
    writeln!(
        out,
        "  map:       {BASEMAP} @ [{:.1}, {:.1}] zoom {MAP_ZOOM} ({MAP_MIN_ZOOM}-{MAP_MAX_ZOOM})",
        MAP_CENTER[0], MAP_CENTER[1]
    )?;
    writeln!(out)?;

    let Some(view) = dashboard.view() else {
        writeln!(out, "{LOADING_MESSAGE}")?;
        return Ok(());
    };

    let card = &view.card;
    writeln!(out, "=== PLANTING READINESS ===")?;
    writeln!(out, "  score:          {}/100", card.score)?;
    writeln!(out, "  conditions:     {}", card.headline)?;
    writeln!(out, "  recommendation: {}", card.recommendation)?;
    writeln!(out, "  note:           {}", card.note)?;

    writeln!(out)?;
    writeln!(out, "=== KEY METRICS ===")?;
    for row in &view.metrics {
        writeln!(
            out,
            "  {:<17} {:>8}  [{:<7}] optimal {:<10} bar {}%",
            row.label,
            row.display_value,
            row.status.badge(),
            row.optimal_range,
            row.status.bar_fill_pct()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "=== RAINFALL TREND ===")?;
    for point in view.chart.series.points() {
        let bar = "█".repeat((point.rainfall_mm / 5) as usize);
        writeln!(out, "  {} {:>4}mm {bar}", month_label(point.month), point.rainfall_mm)?;
    }
    match view.chart.stats {
        Some(stats) => writeln!(
            out,
            "  average {}mm | peak {}mm | trend {}{}%",
            stats.average_mm,
            stats.peak_mm,
            stats.direction.arrow(),
            stats.change_pct
        )?,
        None => writeln!(out, "  (no rainfall data)")?,
    }

    writeln!(out)?;
    writeln!(out, "=== FARM AREA ANALYSIS ===")?;
    if let Some(area) = dashboard.selected_area() {
        writeln!(out, "  selected:       {:?}", area)?;
    }
    writeln!(
        out,
        "  cluster center: [{:.3}, {:.3}]",
        view.overlay.center[0], view.overlay.center[1]
    )?;
    for (level, count) in view.overlay.level_counts() {
        writeln!(out, "  {:<10} {count} polygon(s)", level.legend_label())?;
    }
    writeln!(out, "  legend:")?;
    for entry in &view.legend {
        writeln!(out, "    {}", entry.label)?;
    }

    writeln!(out)?;
    writeln!(out, "Powered by simulated Digital Earth Africa data")?;
    Ok(())
}

fn parse_lon_lat(raw: &str) -> Result<LonLat> {
    let (lon, lat) = raw
        .split_once(',')
        .ok_or_else(|| anyhow::anyhow!("Invalid --select '{raw}': expected lon,lat"))?;
    let lon: f64 = lon.trim().parse()?;
    let lat: f64 = lat.trim().parse()?;
    Ok([lon, lat])
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
