use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::Color;
use crate::mapping::{parse_pair, Preset};
use crate::pipeline::family::HueFamily;

/// Find and recolor the RGBA colors inside Lottie animation files.
#[derive(Parser, Debug)]
#[command(name = "lottie-recolor", version, about)]
pub struct Args {
    /// Show every recolored node and the mapping in use
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress log output on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the distinct colors used in an animation
    Extract(ExtractArgs),
    /// Replace colors according to a mapping and save the animation
    Rewrite(RewriteArgs),
}

#[derive(clap::Args, Debug)]
pub struct ExtractArgs {
    /// Path to the animation JSON
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ListFormat::List)]
    pub format: ListFormat,

    /// Only show colors of this hue family
    #[arg(long, value_enum)]
    pub family: Option<HueFamily>,

    /// Show how many color nodes use each color
    #[arg(long)]
    pub counts: bool,
}

#[derive(clap::Args, Debug)]
pub struct RewriteArgs {
    /// Path to the animation JSON
    pub file: PathBuf,

    /// Start from a built-in mapping table
    #[arg(short, long, value_enum)]
    pub preset: Option<Preset>,

    /// JSON file of "#OLD": "#NEW" pairs, applied over the preset
    #[arg(short, long)]
    pub map: Option<PathBuf>,

    /// Single OLD=NEW pair, applied last (repeatable)
    #[arg(short, long = "set", value_name = "OLD=NEW", value_parser = parse_pair)]
    pub set: Vec<(Color, Color)>,

    /// Write the result here instead of overwriting the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the written JSON
    #[arg(long)]
    pub pretty: bool,

    /// Count the changes without writing anything
    #[arg(long, conflicts_with = "output")]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ListFormat {
    /// Numbered list
    List,
    /// CSS custom properties
    Css,
    /// JSON array
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_rewrite_pairs() {
        let args = Args::parse_from([
            "lottie-recolor",
            "rewrite",
            "anim.json",
            "--preset",
            "pink-to-teal",
            "--set",
            "#FF0000=#00ff00",
            "-s",
            "000000=FFFFFF",
        ]);
        let Command::Rewrite(rewrite) = args.command else {
            panic!("expected rewrite");
        };
        assert_eq!(rewrite.preset, Some(Preset::PinkToTeal));
        assert_eq!(
            rewrite.set,
            vec![
                (Color::new(255, 0, 0), Color::new(0, 255, 0)),
                (Color::new(0, 0, 0), Color::new(255, 255, 255)),
            ]
        );
    }

    #[test]
    fn rejects_bad_pair() {
        let result = Args::try_parse_from(["lottie-recolor", "rewrite", "a.json", "--set", "#FF0000"]);
        assert!(result.is_err());
    }

    #[test]
    fn extract_defaults() {
        let args = Args::parse_from(["lottie-recolor", "-q", "extract", "anim.json"]);
        assert!(args.quiet);
        let Command::Extract(extract) = args.command else {
            panic!("expected extract");
        };
        assert_eq!(extract.format, ListFormat::List);
        assert_eq!(extract.family, None);
        assert!(!extract.counts);
    }

    #[test]
    fn dry_run_conflicts_with_output() {
        let result = Args::try_parse_from([
            "lottie-recolor",
            "rewrite",
            "a.json",
            "--dry-run",
            "-o",
            "b.json",
        ]);
        assert!(result.is_err());
    }
}
