// SPDX-License-Identifier: MPL-2.0
use icon_forge::config::{self, CliOverrides, Config, EnvOverrides, Settings};
use icon_forge::error::Result;
use icon_forge::export::{verify_iconset, write_preview, Exporter, IconSource, MasterImage, RenderedSource};
use icon_forge::logging::{self, Verbosity};
use icon_forge::media::{has_source_extension, load_source};
use icon_forge::render::BadgeText;
use std::convert::Infallible;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
icon_forge - build a macOS iconset

USAGE:
  icon_forge [OPTIONS] [SOURCE]

ARGS:
  SOURCE                  source image (default: icon_source.png); ignored with --render

OPTIONS:
  --render                draw the icon procedurally instead of loading SOURCE
  --style <NAME>          artwork style for --render: cool-mac (default) | retro
  --output-dir <DIR>      iconset directory (default: AppIcon.appiconset)
  --preview <PATH>        preview PNG path (default: icon_preview.png)
  --font <PATH>           badge font file tried before the built-in candidates
  --config <PATH>         settings file (TOML)
  --write-config <PATH>   write a settings file with every default and exit
  --check                 verify an existing iconset against its manifest
  -v, --verbose           debug output
  -q, --quiet             errors only
  -h, --help              print this help

ENVIRONMENT:
  ICON_FORGE_CONFIG       settings file path
  ICON_FORGE_OUTPUT_DIR   iconset directory
  ICON_FORGE_LOG          log filter, e.g. icon_forge=debug
";

#[derive(Debug, Default)]
struct Cli {
    render: bool,
    check: bool,
    verbose: bool,
    quiet: bool,
    config: Option<PathBuf>,
    write_config: Option<PathBuf>,
    overrides: CliOverrides,
}

enum Command {
    Help,
    Run(Cli),
}

fn path(value: &OsStr) -> std::result::Result<PathBuf, Infallible> {
    Ok(PathBuf::from(value))
}

fn parse_args(mut args: pico_args::Arguments) -> std::result::Result<Command, String> {
    if args.contains(["-h", "--help"]) {
        return Ok(Command::Help);
    }

    let mut cli = Cli {
        render: args.contains("--render"),
        check: args.contains("--check"),
        verbose: args.contains(["-v", "--verbose"]),
        quiet: args.contains(["-q", "--quiet"]),
        ..Cli::default()
    };
    cli.config = args
        .opt_value_from_os_str("--config", path)
        .map_err(|e| e.to_string())?;
    cli.write_config = args
        .opt_value_from_os_str("--write-config", path)
        .map_err(|e| e.to_string())?;
    cli.overrides.style = args
        .opt_value_from_str("--style")
        .map_err(|e| e.to_string())?;
    cli.overrides.output_dir = args
        .opt_value_from_os_str("--output-dir", path)
        .map_err(|e| e.to_string())?;
    cli.overrides.preview_path = args
        .opt_value_from_os_str("--preview", path)
        .map_err(|e| e.to_string())?;
    cli.overrides.badge_font = args
        .opt_value_from_os_str("--font", path)
        .map_err(|e| e.to_string())?;

    let mut free: Vec<OsString> = args.finish();
    if let Some(flag) = free
        .iter()
        .find(|arg| arg.to_string_lossy().starts_with('-'))
    {
        return Err(format!("unknown option '{}'", flag.to_string_lossy()));
    }
    if free.len() > 1 {
        return Err("expected at most one SOURCE argument".to_string());
    }
    cli.overrides.source_image = free.pop().map(PathBuf::from);

    Ok(Command::Run(cli))
}

fn main() -> ExitCode {
    let cli = match parse_args(pico_args::Arguments::from_env()) {
        Ok(Command::Help) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Ok(Command::Run(cli)) => cli,
        Err(message) => {
            eprintln!("error: {message}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_input_error() => {
            tracing::error!("{err}");
            eprintln!("Run with --help for usage.");
            ExitCode::FAILURE
        }
        Err(err) => {
            tracing::error!("export failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.write_config {
        config::save_to_path(&Config::documented_defaults(), path)?;
        tracing::info!("settings written to {}", path.display());
        return Ok(());
    }

    let config = config::load(cli.config.as_deref())?;
    let settings = Settings::resolve(&config, &cli.overrides, &EnvOverrides::from_env())?;

    if cli.check {
        let report = verify_iconset(&settings.output_dir, &settings.icon_set)?;
        report.into_result()?;
        tracing::info!("{} is consistent", settings.output_dir.display());
        return Ok(());
    }

    if cli.render {
        if cli.overrides.source_image.is_some() {
            tracing::warn!("SOURCE is ignored with --render");
        }
        let badge = BadgeText::locate(&settings.font_candidates);
        let artwork = settings.style.artwork();
        export_all(&RenderedSource::new(artwork.as_ref(), &badge), &settings)
    } else {
        if cli.overrides.style.is_some() {
            tracing::warn!("--style only applies with --render");
        }
        if !has_source_extension(&settings.source_image) {
            tracing::warn!(
                "{} does not look like an image file, trying anyway",
                settings.source_image.display()
            );
        }
        // Loaded before the exporter creates any directory.
        let image = load_source(&settings.source_image, settings.icon_set.max_physical_px())?;
        export_all(&MasterImage::from_image(&image), &settings)
    }
}

fn export_all(source: &dyn IconSource, settings: &Settings) -> Result<()> {
    let report = Exporter::new(settings.icon_set.clone(), &settings.output_dir).export(source)?;
    write_preview(source, &settings.preview_path, settings.preview_size)?;
    tracing::info!(
        "done: {} icons in {}",
        report.icons.len(),
        settings.output_dir.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Command, String> {
        parse_args(pico_args::Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    fn parse_run(args: &[&str]) -> Cli {
        match parse(args) {
            Ok(Command::Run(cli)) => cli,
            Ok(Command::Help) => panic!("unexpected help for {args:?}"),
            Err(err) => panic!("parse failed for {args:?}: {err}"),
        }
    }

    #[test]
    fn no_arguments_means_image_mode_with_defaults() {
        let cli = parse_run(&[]);
        assert!(!cli.render);
        assert!(cli.overrides.source_image.is_none());
        assert!(cli.overrides.output_dir.is_none());
    }

    #[test]
    fn positional_source_and_flags() {
        let cli = parse_run(&["--render", "--style", "retro", "-v", "logo.png"]);
        assert!(cli.render);
        assert!(cli.verbose);
        assert_eq!(cli.overrides.style.as_deref(), Some("retro"));
        assert_eq!(cli.overrides.source_image, Some(PathBuf::from("logo.png")));
    }

    #[test]
    fn help_short_circuits() {
        assert!(matches!(parse(&["--render", "-h"]), Ok(Command::Help)));
    }

    #[test]
    fn unknown_option_is_rejected() {
        assert!(parse(&["--frobnicate"]).is_err());
    }

    #[test]
    fn two_sources_are_rejected() {
        assert!(parse(&["a.png", "b.png"]).is_err());
    }

    #[test]
    fn missing_option_value_is_rejected() {
        assert!(parse(&["--output-dir"]).is_err());
    }
}
