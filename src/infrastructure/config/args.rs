use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Default file the console host writes image replies to.
pub const DEFAULT_OUTPUT: &str = "oxisym-output.png";

/// Command-line arguments for the console host.
#[derive(Debug, Parser)]
#[command(
    name = "oxisym",
    version,
    about = "Mirror an image left-right, top-bottom or around its center",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Command token the handler answers to.
    #[arg(long, value_name = "NAME")]
    pub command: Option<String>,

    /// Remote download timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub fetch_timeout: Option<u64>,

    /// Directory for temporary output images.
    #[arg(long, value_name = "DIR")]
    pub temp_dir: Option<PathBuf>,

    /// JSON message file. Overrides TEXT, --image and --quote.
    #[arg(short, long, value_name = "FILE")]
    pub message: Option<PathBuf>,

    /// Image source (URL, path or base64://) attached to the message.
    #[arg(short, long, value_name = "SRC")]
    pub image: Vec<String>,

    /// Image source attached to the quoted message.
    #[arg(short, long, value_name = "SRC")]
    pub quote: Vec<String>,

    /// Where image replies are written.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Message text, e.g. `/sym lr`.
    #[arg(value_name = "TEXT", trailing_var_arg = true)]
    pub text: Vec<String>,
}
