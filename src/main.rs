//! Logseq Today - Entry Point

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use logseq_today::config::loader::ENV_TAG_COLOR;
use logseq_today::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    ResolvedConfig,
};
use logseq_today::format::format_document;
use logseq_today::integration::{self, RefreshSettings};
use logseq_today::launch::Launcher;
use logseq_today::model::{AppError, TagColor};
use logseq_today::prefs::PreferenceStore;
use logseq_today::source::JOURNALS_DIR;
use logseq_today::view::{self, ColorConfig, ViewerOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Logseq Today - today's Logseq journal in the terminal
#[derive(Parser, Debug)]
#[command(name = "logseq-today")]
#[command(version)]
#[command(about = "Show today's Logseq journal page with tags and links highlighted")]
pub struct Args {
    /// Store a preference instead of showing the journal
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Logseq graph directory (overrides the saved one)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Show the journal for this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Highlight colour for tags and links (#RRGGBB or #AARRGGBB)
    #[arg(long)]
    pub tag_color: Option<TagColor>,

    /// Print the rendered journal to stdout and exit
    #[arg(long, conflicts_with = "json")]
    pub print: bool,

    /// Print the rendered journal as JSON and exit
    #[arg(long)]
    pub json: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Preference subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Remember the Logseq graph directory (the folder containing `journals/`)
    SetDir {
        /// Graph directory
        path: PathBuf,
    },

    /// Remember the highlight colour for tags and links
    SetColor {
        /// Colour as #RRGGBB or #AARRGGBB
        color: TagColor,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = load_config_with_precedence(args.config.clone())?;
    let merged = merge_config(config_file);
    let with_env = apply_env_overrides(merged);
    Ok(apply_cli_overrides(with_env, args.dir.clone(), args.tag_color))
}

fn run(args: Args) -> Result<(), AppError> {
    let config = resolve_config(&args)?;

    // Log to a file so output never lands on the terminal the viewer owns
    logseq_today::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    if let Some(value) = &config.invalid_tag_color {
        warn!(value = %value, var = ENV_TAG_COLOR, "Ignoring invalid tag colour");
        eprintln!("Warning: ignoring {ENV_TAG_COLOR}={value:?}: expected #RRGGBB or #AARRGGBB");
    }

    let store = PreferenceStore::new(&config.prefs_path);
    match args.command {
        Some(Command::SetDir { path }) => return set_dir(&store, &path),
        Some(Command::SetColor { color }) => {
            store.set_tag_color(color)?;
            println!("Tag colour set to {color}");
            return Ok(());
        }
        None => {}
    }

    let colors = ColorConfig::from_env_and_args(args.no_color);
    let settings = RefreshSettings::from_config(&config);

    if args.print || args.json {
        let date = args.date.unwrap_or_else(|| Local::now().date_naive());
        let snapshot = integration::refresh(&settings, date);
        let lines = format_document(&snapshot.document, &snapshot.render);

        let mut out = io::stdout().lock();
        if args.json {
            view::print::write_json(&mut out, &snapshot, &lines)?;
        } else {
            view::print::write_lines(&mut out, &lines, colors)?;
        }
        return Ok(());
    }

    let refresh_interval = (config.refresh_interval_secs > 0)
        .then(|| Duration::from_secs(config.refresh_interval_secs));

    view::run_viewer(ViewerOptions {
        settings,
        pinned_date: args.date,
        launcher: Launcher::new(config.launch_command),
        refresh_interval,
        colors,
    })?;

    Ok(())
}

fn set_dir(store: &PreferenceStore, path: &Path) -> Result<(), AppError> {
    if !path.is_dir() {
        return Err(AppError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    let directory = path.canonicalize()?;
    if !directory.join(JOURNALS_DIR).is_dir() {
        warn!(directory = %directory.display(), "Selected folder has no journals directory");
        eprintln!(
            "Warning: {} has no '{JOURNALS_DIR}' folder; today's journal will not be found",
            directory.display()
        );
    }

    store.set_journal_path(directory.to_string_lossy())?;
    println!("Journal directory set to {}", directory.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["logseq-today", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["logseq-today", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["logseq-today"]);
        assert_eq!(args.command, None);
        assert_eq!(args.dir, None);
        assert_eq!(args.date, None);
        assert_eq!(args.tag_color, None);
        assert!(!args.print);
        assert!(!args.json);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_dir_flag() {
        let args = Args::parse_from(["logseq-today", "--dir", "/notes/graph"]);
        assert_eq!(args.dir, Some(PathBuf::from("/notes/graph")));
    }

    #[test]
    fn test_date_flag_parses_iso_date() {
        let args = Args::parse_from(["logseq-today", "--date", "2026-10-18"]);
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2026, 10, 18));
    }

    #[test]
    fn test_date_flag_rejects_other_formats() {
        let result = Args::try_parse_from(["logseq-today", "--date", "18/10/2026"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_tag_color_flag() {
        let args = Args::parse_from(["logseq-today", "--tag-color", "#FF8800"]);
        assert_eq!(args.tag_color, Some(TagColor::rgb(0xff, 0x88, 0x00)));
    }

    #[test]
    fn test_tag_color_invalid_rejects() {
        let result = Args::try_parse_from(["logseq-today", "--tag-color", "orange"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_print_and_json_conflict() {
        let result = Args::try_parse_from(["logseq-today", "--print", "--json"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_no_color_flag() {
        let args = Args::parse_from(["logseq-today", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["logseq-today", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_set_dir_subcommand() {
        let args = Args::parse_from(["logseq-today", "set-dir", "/notes/graph"]);
        assert_eq!(
            args.command,
            Some(Command::SetDir {
                path: PathBuf::from("/notes/graph")
            })
        );
    }

    #[test]
    fn test_set_color_subcommand() {
        let args = Args::parse_from(["logseq-today", "set-color", "#80112233"]);
        assert_eq!(
            args.command,
            Some(Command::SetColor {
                color: TagColor::rgb(0x11, 0x22, 0x33)
            })
        );
    }

    #[test]
    fn test_cli_overrides_flow_through_precedence_chain() {
        use logseq_today::config::ConfigFile;

        let config_file = ConfigFile {
            refresh_interval_secs: Some(5),
            ..ConfigFile::default()
        };
        let merged = merge_config(Some(config_file));
        assert_eq!(merged.refresh_interval_secs, 5);

        let color = TagColor::rgb(1, 2, 3);
        let with_cli = apply_cli_overrides(merged, Some(PathBuf::from("/graph")), Some(color));
        assert_eq!(with_cli.journal_dir_override, Some(PathBuf::from("/graph")));
        assert_eq!(with_cli.tag_color_override, Some(color));
        assert_eq!(with_cli.refresh_interval_secs, 5);
    }

    #[test]
    fn test_set_dir_rejects_missing_directory() {
        let store = PreferenceStore::new(std::env::temp_dir().join("logseq_today_main_unused.toml"));
        let result = set_dir(&store, Path::new("/definitely/not/here"));
        assert!(matches!(result, Err(AppError::NotADirectory { .. })));
    }

    #[test]
    fn test_set_dir_saves_canonical_path() {
        let root = std::env::temp_dir().join("logseq_today_main_set_dir");
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(root.join("graph").join("journals")).unwrap();
        let store = PreferenceStore::new(root.join("prefs.toml"));

        set_dir(&store, &root.join("graph").join(".")).unwrap();

        let saved = store.load().unwrap().journal_path.unwrap();
        let expected = root.join("graph").canonicalize().unwrap();
        assert_eq!(PathBuf::from(saved), expected);
    }
}
