use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use balloon_sim::atmosphere;
use balloon_sim::io::{write_summary, write_trajectory};
use balloon_sim::{simulate, AscentResult, FlightParams, Registry};

/// Free-lift flight of a sounding balloon up to envelope burst
#[derive(Parser, Debug)]
#[command(name = "balloon-sim")]
#[command(about = "Sounding balloon ascent and burst simulation", long_about = None)]
struct Args {
    /// Simulated duration in seconds
    #[arg(short, long, default_value_t = 10_800.0)]
    duration: f64,

    /// Envelope mass in kg
    #[arg(short, long, default_value_t = 3.0)]
    mass: f64,

    /// Unstretched envelope diameter in m
    #[arg(long, default_value_t = 2.164)]
    diameter: f64,

    /// Envelope material name
    #[arg(long, default_value = "rubber")]
    material: String,

    /// Lifting gas name
    #[arg(long, default_value = "helium")]
    gas: String,

    /// Payload mass in kg
    #[arg(short, long, default_value_t = 0.0)]
    payload: f64,

    /// Output format on stdout
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Csv,
    Json,
    None,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let params = FlightParams {
        duration: args.duration,
        envelope_mass: args.mass,
        diameter: args.diameter,
        material: args.material,
        gas: args.gas,
        payload: args.payload,
    };

    let result = match simulate(&params, &Registry::standard()) {
        Ok(r) => r,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(e.exit_code());
        }
    };

    let mut out = io::stdout().lock();
    let written = match args.format {
        Format::Table => print_report(&mut out, &params, &result),
        Format::Csv => write_trajectory(&mut out, result.samples()),
        Format::Json => write_summary(&mut out, &params, &result),
        Format::None => {
            warn!("all output disabled");
            Ok(())
        }
    };
    if let Err(e) = written {
        error!("failed to write output: {e}");
        return ExitCode::from(4);
    }

    ExitCode::SUCCESS
}

fn print_report<W: Write>(w: &mut W, params: &FlightParams, result: &AscentResult) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "====================================================================")?;
    writeln!(w, "  SOUNDING BALLOON FREE LIFT")?;
    writeln!(w, "====================================================================")?;
    writeln!(w)?;
    writeln!(w, "  Balloon")?;
    writeln!(w, "  ──────────────────────────────────────────────────────────────────")?;
    writeln!(
        w,
        "  Envelope:      {:>8.2} kg    Diameter:     {:>8.3} m",
        params.envelope_mass, params.diameter
    )?;
    writeln!(
        w,
        "  Material:      {:>8}       Gas:          {:>8}",
        params.material, params.gas
    )?;
    writeln!(w, "  Payload:       {:>8.2} kg", params.payload)?;
    writeln!(w)?;

    writeln!(w, "  Flight Events")?;
    writeln!(w, "  ──────────────────────────────────────────────────────────────────")?;
    for e in &result.events {
        writeln!(w, "  {:<28} t={:>8.0}s   alt={:>8.0}m", format!("{:?}", e.kind), e.time, e.altitude)?;
    }
    writeln!(w)?;

    let apex_atm = atmosphere::isa(result.apex_altitude);
    writeln!(w, "  Summary")?;
    writeln!(w, "  ──────────────────────────────────────────────────────────────────")?;
    writeln!(w, "  Exit status:   {}", result.exit_status)?;
    writeln!(
        w,
        "  Max altitude:  {:>8.0} m   ({:.2} km)   p={:.1} Pa",
        result.apex_altitude,
        result.apex_altitude / 1000.0,
        apex_atm.pressure
    )?;
    writeln!(
        w,
        "  Time to apex:  {:>8.0} s   ({:.1} min)",
        result.time_to_apex,
        result.time_to_apex / 60.0
    )?;
    match result.burst_altitude {
        Some(h) => writeln!(w, "  Burst at:      {:>8.0} m", h)?,
        None => writeln!(w, "  Burst at:      (none)")?,
    }
    writeln!(w, "  Peak speed:    {:>8.2} m/s", result.peak_speed())?;
    writeln!(w)?;

    writeln!(w, "  Trajectory")?;
    writeln!(w, "  ──────────────────────────────────────────────────────────────────")?;
    writeln!(w, "  {:>8}  {:>9}  {:>9}", "t (min)", "alt (km)", "vel (m/s)")?;
    writeln!(w, "  {}", "─".repeat(32))?;

    let samples = result.samples();
    let sample_interval = (samples.len() / 30).max(1);
    for (i, s) in samples.iter().enumerate() {
        if i % sample_interval != 0 && i != samples.len() - 1 {
            continue;
        }
        writeln!(w, "  {:>8.1}  {:>9.2}  {:>9.2}", s.time / 60.0, s.altitude / 1000.0, s.velocity)?;
    }
    writeln!(w, "====================================================================")?;
    writeln!(w)?;
    Ok(())
}
