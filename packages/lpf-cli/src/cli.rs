use clap::{Args, Parser, Subcommand};
use lpf_rs::{FilterOrder, FilterRequest, LpfError};

#[derive(Parser)]
#[command(
    name = "lpf",
    version,
    about = "Low-pass IIR filter coefficient designer",
    long_about = "Compute first-order or second-order Butterworth low-pass coefficients\n\
                  using the bilinear transform with frequency prewarping.\n\
                  Coefficients follow y[k] = N0*x[k] + N1*x[k-1] + N2*x[k-2] - D1*y[k-1] - D2*y[k-2]."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Design a filter and print its coefficients
    Design(DesignArgs),
    /// Evaluate the designed filter's frequency response
    Response(ResponseArgs),
    /// Design every request found in JSON files
    Batch(BatchArgs),
}

/// The three design inputs shared by `design` and `response`
#[derive(Args, Clone, Debug)]
pub struct FilterArgs {
    /// Filter order (1 = single pole, 2 = Butterworth)
    #[arg(long, env = "LPF_ORDER", default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub order: u8,

    /// Cutoff (-3 dB) frequency in Hz
    #[arg(long, alias = "fc", allow_negative_numbers = true)]
    pub cutoff: f64,

    /// Sampling interval in seconds
    #[arg(long, env = "LPF_SAMPLE_PERIOD", allow_negative_numbers = true)]
    pub ts: f64,
}

impl FilterArgs {
    pub fn to_request(&self) -> Result<FilterRequest, LpfError> {
        let order = FilterOrder::try_from(self.order)?;
        Ok(FilterRequest::new(order, self.cutoff, self.ts))
    }
}

#[derive(Args)]
pub struct DesignArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Compact JSON output (no indentation)
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Suppress progress messages on stderr
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct ResponseArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Frequencies in Hz at which to evaluate the response
    #[arg(long, num_args = 1.., required = true, allow_negative_numbers = true)]
    pub freqs: Vec<f64>,

    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args)]
pub struct BatchArgs {
    /// Request files, each holding a JSON array of requests
    #[arg(long, num_args = 1.., conflicts_with = "glob")]
    pub files: Option<Vec<String>>,

    /// Glob pattern selecting request files (e.g. "requests/*.json")
    #[arg(long)]
    pub glob: Option<String>,

    /// Write one <stem>_lpf.json per input file here instead of JSON Lines on stdout
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Keep going after an unreadable or malformed request file
    #[arg(long, default_value_t = false)]
    pub continue_on_error: bool,

    /// List the resolved input files and exit
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Compact JSON in --output-dir files
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Suppress progress messages on stderr
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}
