// Workshop runner: prints the transcript of every requested lesson.
//
// Usage: workshop [--config <path>] [-h|--help] [-v|--version] [lesson ...]

use anyhow::{bail, Context, Result};
use colored::Colorize;
use fp_workshop::lesson::Lesson;
use fp_workshop::matching::Command;
use fp_workshop::WorkshopConfig;
use itertools::Itertools;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    commands: Vec<Command>,
    lessons: Vec<Lesson>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                let path = args.next().context("--config expects a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with('-') => parsed.commands.push(Command::parse(flag)?),
            name => parsed.lessons.push(name.parse()?),
        }
    }

    if !parsed.commands.is_empty() && !parsed.lessons.is_empty() {
        bail!(
            "-h/-v cannot be combined with lesson names ({})",
            parsed.lessons.iter().join(", ")
        );
    }

    Ok(parsed)
}

fn usage() -> String {
    format!(
        "Usage: workshop [--config <path>] [-h|--help] [-v|--version] [lesson ...]\n\n\
         Lessons: {}\n\
         With no lesson given, every lesson runs.\n\
         -h and -v print and exit; they cannot be combined with lesson names.",
        Lesson::ALL.iter().join(", ")
    )
}

/// `RUST_LOG` wins over the configured filter unless it is unset or blank.
fn filter_directive(from_env: Option<String>, configured: &str) -> String {
    from_env
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| configured.to_string())
}

fn init_tracing(configured: &str) {
    let directive = filter_directive(std::env::var(EnvFilter::DEFAULT_ENV).ok(), configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(configured));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    let config = WorkshopConfig::load_or_default(args.config.as_deref())
        .context("Failed to load workshop configuration")?;
    init_tracing(&config.log.filter);
    debug!(?config, "configuration loaded");

    if !args.commands.is_empty() {
        for command in args.commands {
            match command {
                Command::Help => println!("{}", usage()),
                Command::Version => println!("workshop {}", env!("CARGO_PKG_VERSION")),
            }
        }
        return Ok(());
    }

    let lessons = if args.lessons.is_empty() {
        Lesson::ALL.to_vec()
    } else {
        args.lessons
    };

    let mut failed = 0;
    for lesson in lessons {
        println!("{}", format!("=== {} ===", lesson.title()).bold().cyan());
        match lesson.run(&config) {
            Ok(transcript) => {
                for line in transcript.into_lines() {
                    println!("{line}");
                }
            }
            Err(err) => {
                println!("{}", format!("✗ {lesson} failed: {err}").red());
                failed += 1;
            }
        }
        println!();
    }

    if failed > 0 {
        bail!("{failed} lesson(s) failed");
    }
    println!("{}", "✓ All lessons completed".green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_runs_everything() {
        assert_eq!(parse_args(args(&[])).unwrap(), Args::default());
    }

    #[test]
    fn test_lessons_and_config() {
        let parsed = parse_args(args(&["--config", "w.toml", "stream", "validators"])).unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("w.toml")));
        assert_eq!(parsed.lessons, vec![Lesson::Stream, Lesson::Validators]);
    }

    #[test]
    fn test_flags_dispatch_through_pattern_matching() {
        let parsed = parse_args(args(&["-h", "--version"])).unwrap();
        assert_eq!(parsed.commands, vec![Command::Help, Command::Version]);
    }

    #[test]
    fn test_unknown_flag_is_illegal_argument() {
        let err = parse_args(args(&["--frobnicate"])).unwrap_err();
        assert!(err.to_string().contains("--frobnicate"));
    }

    #[test]
    fn test_flags_and_lessons_do_not_mix() {
        let err = parse_args(args(&["-v", "stream"])).unwrap_err();
        assert!(err.to_string().contains("stream"));
        assert!(parse_args(args(&["stream", "--help"])).is_err());
    }

    #[test]
    fn test_rust_log_wins_over_config() {
        assert_eq!(filter_directive(Some("debug".into()), "info"), "debug");
        assert_eq!(filter_directive(Some("  ".into()), "info"), "info");
        assert_eq!(filter_directive(None, "warn"), "warn");
    }

    #[test]
    fn test_config_without_path() {
        assert!(parse_args(args(&["--config"])).is_err());
    }

    #[test]
    fn test_usage_lists_lessons() {
        assert!(usage().contains("pattern_matching"));
    }
}
