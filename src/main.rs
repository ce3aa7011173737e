// SPDX-License-Identifier: MPL-2.0
use pain_map::app::{self, paths, Flags};
use pain_map::domain::body::{Gender, Side};

const HELP: &str = "\
Pain Map

USAGE:
  pain_map [OPTIONS]

OPTIONS:
  -h, --help              Print help information
      --lang <id>         Interface language (e.g. en-US, ru)
      --assets-dir <dir>  Directory containing pain-map/*.svg
      --base-url <url>    Base URL serving pain-map/*.svg
      --gender <g>        Initial gender: male or female
      --side <s>          Initial side: front or back
      --config-dir <dir>  Directory holding settings.toml
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {}\n\n{}", err, HELP);
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {:?}", remaining);
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        assets_dir: args.opt_value_from_str("--assets-dir")?,
        base_url: args.opt_value_from_str("--base-url")?,
        gender: args.opt_value_from_str::<_, Gender>("--gender")?,
        side: args.opt_value_from_str::<_, Side>("--side")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
