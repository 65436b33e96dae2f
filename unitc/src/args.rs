use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "unitc")]
#[command(about = "Free-text unit converter", long_about = None)]
pub struct Cli {
    /// Expression like: "3 ft to cm" or "5 kg in lb"
    pub expr: Vec<String>,

    /// List categories, or units of one category
    #[arg(long, value_name = "CATEGORY", num_args = 0..=1, default_missing_value = "")]
    pub list: Option<String>,

    /// Run the interactive REPL
    #[arg(long)]
    pub repl: bool,

    /// Treat trig arguments in the value as degrees
    #[arg(long)]
    pub deg: bool,

    /// Convert a file line by line
    #[arg(long, value_name = "FILE")]
    pub batch: Option<PathBuf>,

    /// Emit the conversion result as JSON
    #[arg(long)]
    pub json: bool,
}
