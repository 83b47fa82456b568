// SPDX-License-Identifier: MPL-2.0
use iced_flix::app::{self, paths, Flags};
use iced_flix::config;

const HELP: &str = "\
IcedFlix - streaming-style home page demo

USAGE:
  iced_flix [OPTIONS]

OPTIONS:
  --lang <ID>          UI language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  --seed <N>           Seed for the generated catalog
  --write-config       Write the effective settings.toml and exit
  -h, --help           Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("iced_flix=info"))
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let write_config = args.contains("--write-config");
    let flags = Flags {
        lang: parse_option(&mut args, "--lang"),
        config_dir: parse_option(&mut args, "--config-dir"),
        seed: parse_option(&mut args, "--seed"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }

    paths::init_cli_overrides(flags.config_dir.clone());

    if write_config {
        let (mut effective, warning) = config::load();
        if let Some(warning) = warning {
            log::warn!("{warning}");
        }
        if flags.lang.is_some() {
            effective.general.language = flags.lang.clone();
        }
        if flags.seed.is_some() {
            effective.catalog.seed = flags.seed;
        }
        match config::save(&effective) {
            Ok(()) => log::info!("settings written"),
            Err(err) => log::error!("failed to write settings: {err}"),
        }
        return Ok(());
    }

    app::run(flags)
}

fn parse_option<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("invalid value for {key}: {err}");
            None
        }
    }
}
