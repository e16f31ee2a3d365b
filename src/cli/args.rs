use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "emblem-resize",
    version,
    about = "Resize emblem icons to a standard height"
)]
pub struct CliArgs {
    /// Directory containing `{name}_fullres.png` sources; outputs are written alongside
    #[arg(short = 'd', long)]
    pub base_dir: Option<PathBuf>,

    /// Emblem names to process, in order (comma-separated, e.g. bronze,silver,gold)
    #[arg(short, long, value_delimiter = ',')]
    pub names: Option<Vec<String>>,

    /// Output height in pixels (default: 64)
    #[arg(long)]
    pub target_height: Option<u32>,

    /// JSON config file with `base_dir`, `names` and `target_height`; flags override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable diagnostic logging on stderr
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
