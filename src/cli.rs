use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vitae")]
#[command(author = "Alberto Cavalcante")]
#[command(version)]
#[command(about = "Build a resume step by step, preview it and export it", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file (default: ~/.config/vitae/config.toml)
    #[arg(long, global = true, env = "VITAE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the interactive resume wizard
    New(NewArgs),

    /// Print a saved resume with a layout
    Preview(PreviewArgs),

    /// Export a saved resume to PDF, HTML or text
    Export(ExportArgs),

    /// List the available preview layouts
    Layouts,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

// ============================================================================
// Arguments
// ============================================================================

#[derive(Parser)]
pub struct NewArgs {
    /// Seed the session from a saved resume (JSON)
    #[arg(long, value_name = "FILE")]
    pub from: Option<PathBuf>,

    /// Initial preview layout
    #[arg(short, long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Skip location auto-detection
    #[arg(long)]
    pub no_locate: bool,

    /// Directory for downloads
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Saved resume (JSON)
    pub file: PathBuf,

    /// Layout to render with
    #[arg(short, long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Wrap width (default: terminal width)
    #[arg(short, long)]
    pub width: Option<usize>,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Saved resume (JSON)
    pub file: PathBuf,

    /// Layout to render with
    #[arg(short, long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Document format
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Output directory
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LayoutArg {
    Simple,
    TwoColumn,
    Comprehensive,
}

impl From<LayoutArg> for layout::LayoutId {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Simple => Self::Simple,
            LayoutArg::TwoColumn => Self::TwoColumn,
            LayoutArg::Comprehensive => Self::Comprehensive,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Pdf,
    Html,
    Text,
}

impl From<FormatArg> for export::ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Pdf => Self::Pdf,
            FormatArg::Html => Self::Html,
            FormatArg::Text => Self::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_new() {
        let cli = Cli::parse_from([
            "vitae",
            "new",
            "--from",
            "cv.json",
            "--layout",
            "two-column",
            "--no-locate",
            "-vv",
        ]);
        assert_eq!(cli.verbose, 2);
        let Command::New(args) = cli.command else {
            panic!("expected new");
        };
        assert_eq!(args.from, Some(PathBuf::from("cv.json")));
        assert!(matches!(args.layout, Some(LayoutArg::TwoColumn)));
        assert!(args.no_locate);
    }

    #[test]
    fn test_parse_export() {
        let cli = Cli::parse_from(["vitae", "export", "cv.json", "-f", "text", "-o", "out"]);
        let Command::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert!(matches!(args.format, Some(FormatArg::Text)));
        assert_eq!(args.output, Some(PathBuf::from("out")));
    }
}
