use clap::Parser;
use log::debug;
use splcore::math::AxisRange;
use splcore::prelude::{
    SENSITIVITY_MAX, SENSITIVITY_MIN, SENSITIVITY_STEP, TARGET_MAX, TARGET_MIN, TARGET_STEP,
};
use std::path::PathBuf;
use workflow::config::{ChartConfig, DEFAULT_OUTPUT};
use workflow::runner::Runner;

mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Amplifier watts vs. target SPL surface chart")]
struct Args {
    /// Load chart settings from YAML (overrides the range flags)
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = SENSITIVITY_MIN, allow_negative_numbers = true)]
    sensitivity_min: i32,
    #[arg(long, default_value_t = SENSITIVITY_MAX, allow_negative_numbers = true)]
    sensitivity_max: i32,
    #[arg(long, default_value_t = SENSITIVITY_STEP, allow_negative_numbers = true)]
    sensitivity_step: i32,
    #[arg(long, default_value_t = TARGET_MIN, allow_negative_numbers = true)]
    target_min: i32,
    #[arg(long, default_value_t = TARGET_MAX, allow_negative_numbers = true)]
    target_max: i32,
    #[arg(long, default_value_t = TARGET_STEP, allow_negative_numbers = true)]
    target_step: i32,
    /// Destination HTML file, overwritten if present
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let chart_config = if let Some(path) = args.config {
        ChartConfig::load(path)?
    } else {
        ChartConfig::from_args(
            AxisRange::new(args.sensitivity_min, args.sensitivity_max, args.sensitivity_step),
            AxisRange::new(args.target_min, args.target_max, args.target_step),
            args.output,
        )
    };

    debug!("chart config {:?}", chart_config);

    let report = Runner::new(chart_config).execute()?;
    let summary = &report.summary;

    println!(
        "Chart -> grid {}x{}, watts {:.4}..{:.1} (mean normalized {:.4}), bands green {} yellow {} red {}, degenerate {}, wrote {} bytes to {}",
        summary.target_points,
        summary.sensitivity_points,
        summary.min_watts,
        summary.max_watts,
        summary.mean_normalized,
        summary.bands.green,
        summary.bands.yellow,
        summary.bands.red,
        summary.degenerate_cells,
        report.bytes_written,
        report.output.display()
    );

    Ok(())
}
