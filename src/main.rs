// SPDX-License-Identifier: MPL-2.0
use iced_atelier::app::{self, Flags};
use iced_atelier::error::{Error, Result};
use iced_atelier::ui::theming::ThemeMode;

const HELP: &str = "\
Iced Atelier - UI component showcase

USAGE:
  iced_atelier [OPTIONS]

OPTIONS:
  --config-dir <DIR>       Directory holding settings.toml
  --theme <MODE>           light, dark or system
  --toast-duration <MS>    Toast lifetime in milliseconds
  -h, --help               Print this help

ENVIRONMENT:
  ICED_ATELIER_CONFIG_DIR  Config directory (overridden by --config-dir)
  RUST_LOG                 Log filter, e.g. iced_atelier=debug
";

/// Parses CLI arguments. Returns `None` when help was requested.
fn parse_flags(mut args: pico_args::Arguments) -> Result<Option<Flags>> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let cli = |err: pico_args::Error| Error::Config(err.to_string());
    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir").map_err(cli)?,
        theme: args
            .opt_value_from_str::<_, ThemeMode>("--theme")
            .map_err(cli)?,
        toast_duration_ms: args.opt_value_from_str("--toast-duration").map_err(cli)?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(Error::Config(format!(
            "unexpected arguments: {remaining:?}"
        )));
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    env_logger::init();

    let flags = match parse_flags(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    log::debug!("Starting with {flags:?}");
    app::run(flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn args(raw: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(raw.iter().map(OsString::from).collect())
    }

    #[test]
    fn no_arguments_yield_default_flags() {
        let flags = parse_flags(args(&[])).unwrap().unwrap();
        assert!(flags.config_dir.is_none());
        assert!(flags.theme.is_none());
        assert!(flags.toast_duration_ms.is_none());
    }

    #[test]
    fn all_options_are_parsed() {
        let flags = parse_flags(args(&[
            "--config-dir",
            "/tmp/atelier",
            "--theme",
            "dark",
            "--toast-duration",
            "1500",
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(flags.config_dir.as_deref(), Some("/tmp/atelier"));
        assert_eq!(flags.theme, Some(ThemeMode::Dark));
        assert_eq!(flags.toast_duration_ms, Some(1500));
    }

    #[test]
    fn help_short_circuits() {
        assert!(parse_flags(args(&["--help"])).unwrap().is_none());
        assert!(parse_flags(args(&["-h"])).unwrap().is_none());
    }

    #[test]
    fn invalid_theme_is_an_error() {
        let err = parse_flags(args(&["--theme", "sepia"])).unwrap_err();
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn unknown_arguments_are_rejected() {
        assert!(parse_flags(args(&["--frobnicate"])).is_err());
    }
}
