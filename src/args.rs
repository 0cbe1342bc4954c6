use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Clone)]
#[command(
    display_name = "AMR Processor",
    author = "AtCoder Marathon Replay",
    long_about = "Replays marathon contest history to derive per-contest performances, \
    rating-band borders, and decayed user ratings"
)]
pub struct Args {
    /// Directory holding the normalized contest data: contests.json plus
    /// standings/<slug>.json and optionally aperfs/<slug>.json per contest
    #[arg(short, long, env = "DATA_DIR", help = "Normalized contest data directory")]
    pub data_dir: PathBuf,

    /// Directory the result documents are written to
    #[arg(short, long, env = "OUT_DIR", default_value = "out", help = "Output directory")]
    pub out_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
