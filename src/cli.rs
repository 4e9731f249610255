use clap::{ArgGroup, Parser};
use std::num::NonZeroU32;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pdfsplit")]
#[command(about = "Split a large PDF into smaller PDFs")]
#[command(version)]
#[command(group(
    ArgGroup::new("method")
        .required(true)
        .multiple(false)
        .args(["pages_per_file", "page_ranges"])
))]
pub struct Cli {
    /// Path to the input PDF file
    pub input_pdf: PathBuf,

    /// Directory to save output files
    #[arg(long, default_value = "split_output")]
    pub output_dir: PathBuf,

    /// Prefix for output filenames
    #[arg(long, default_value = "part")]
    pub prefix: String,

    /// Number of pages per output file
    #[arg(long, value_parser = parse_pages_per_file)]
    pub pages_per_file: Option<NonZeroU32>,

    /// Specific page ranges (e.g., "1-5" "6-10" "11-15")
    #[arg(long, num_args = 1.., value_name = "RANGE", allow_negative_numbers = true)]
    pub page_ranges: Option<Vec<String>>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// How the input is divided into output files
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitMethod {
    ByCount(NonZeroU32),
    ByRanges(Vec<String>),
}

impl Cli {
    /// The chosen split method; clap guarantees exactly one was given
    pub fn method(&self) -> Option<SplitMethod> {
        match (&self.pages_per_file, &self.page_ranges) {
            (Some(n), _) => Some(SplitMethod::ByCount(*n)),
            (None, Some(ranges)) => Some(SplitMethod::ByRanges(ranges.clone())),
            (None, None) => None,
        }
    }
}

fn parse_pages_per_file(s: &str) -> Result<NonZeroU32, String> {
    let n: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a positive integer", s))?;
    NonZeroU32::new(n).ok_or_else(|| "must be at least 1".to_string())
}
