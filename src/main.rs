use clap::Parser;
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use win_picker::{FileFilter, PickerOptions, SelectMode, Selection};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// What to pick: file, folder or multi-files
    mode: String,

    /// Dialog title
    #[clap(short, long)]
    title: Option<String>,

    /// Directory the dialog opens in (a leading ~ is expanded)
    #[clap(short = 'd', long)]
    start_dir: Option<PathBuf>,

    /// File type filter as NAME=ext1,ext2 (repeatable)
    #[clap(short, long = "filter")]
    filters: Vec<FileFilter>,

    /// Do not add the built-in All/CSV/Text filters
    #[clap(long)]
    no_default_filters: bool,

    /// JSON file with picker options; flags override it
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Print the selection as JSON instead of one path per line (non-Unicode paths are written lossily)
    #[clap(long)]
    json: bool,
}

impl Args {
    fn options(&self) -> Result<PickerOptions, Box<dyn Error>> {
        let mut options = match &self.config {
            Some(path) => PickerOptions::from_json_file(path)?,
            None => PickerOptions::default(),
        };
        if self.title.is_some() {
            options.title = self.title.clone();
        }
        if self.start_dir.is_some() {
            options.start_dir = self.start_dir.clone();
        }
        if !self.filters.is_empty() {
            options.filters = self.filters.clone();
        }
        if self.no_default_filters {
            options.use_default_filters = false;
        }
        Ok(options)
    }
}

fn print_selection(selection: &Selection, json: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer(&mut out, selection)?;
        writeln!(out)?;
    } else {
        for path in selection.paths() {
            writeln!(out, "{}", path.display())?;
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let args = Args::parse();

    let mode: SelectMode = args.mode.parse()?;
    let options = args.options()?;

    let selection = win_picker::select(mode, &options)?;
    print_selection(&selection, args.json)?;
    Ok(())
}
