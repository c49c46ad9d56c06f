// SPDX-License-Identifier: MPL-2.0
use playback_overlay::config::{self, Config};
use playback_overlay::scenario::{Scenario, ScenarioReport};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: playback-overlay [OPTIONS] <SCENARIO>

Replays a scripted playback session and prints the rendered controls
after every step.

Options:
  --config <PATH>      Settings file (defaults to the user config directory)
  --log-level <LEVEL>  Log filter, e.g. `debug` or `playback_overlay=trace`
  -h, --help           Print this help";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let config_path: Option<PathBuf> = match args.opt_value_from_str("--config") {
        Ok(path) => path,
        Err(err) => return usage_error(&err.to_string()),
    };
    let log_level: Option<String> = match args.opt_value_from_str("--log-level") {
        Ok(level) => level,
        Err(err) => return usage_error(&err.to_string()),
    };
    let Some(scenario_path) = args.finish().into_iter().next().map(PathBuf::from) else {
        return usage_error("missing scenario path");
    };

    init_tracing(log_level.as_deref());

    let config = match config_path {
        Some(path) => config::load_from_path(&path),
        None => config::load(),
    };
    let config = config.unwrap_or_else(|err| {
        tracing::warn!("failed to load settings, using defaults: {err}");
        Config::default()
    });

    let report = Scenario::load(&scenario_path).and_then(|scenario| scenario.run(config.settings()));
    match report {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(path = %scenario_path.display(), "scenario failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn usage_error(message: &str) -> ExitCode {
    eprintln!("error: {message}\n\n{USAGE}");
    ExitCode::from(2)
}

fn print_report(report: &ScenarioReport) {
    for step in &report.steps {
        let view = &step.view;
        println!(
            "{:>7} ms  {:<28} {:?}/{:?} center={} fwd={} back={} pos={:.1}/{:.1} vol={:?}:{} fullscreen={}",
            step.at_ms,
            format!("{:?}", step.action),
            view.play_glyph,
            view.center_glyph,
            view.center_visible,
            view.forward_visible,
            view.backward_visible,
            view.scrubber_position_secs,
            view.scrubber_max_secs,
            view.volume_glyph,
            view.volume_slider,
            view.is_full_screen,
        );
    }
    let state = &report.final_state;
    println!(
        "final: paused={} position={:.1}s duration={:.1}s volume={} muted={} fullscreen={}",
        state.is_paused,
        state.position_secs,
        state.duration_secs,
        state.volume.value(),
        state.is_muted,
        state.is_full_screen,
    );
}
