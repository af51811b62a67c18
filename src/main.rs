// SPDX-License-Identifier: MPL-2.0
use maintech_ui::app::{self, Flags};
use maintech_ui::config::paths;

const HELP: &str = "\
MainTech maintenance console

USAGE:
  maintech_ui [OPTIONS]

OPTIONS:
  --lang <LOCALE>        Interface language (en-US, es)
  --config-dir <PATH>    Directory holding settings.toml
  -h, --help             Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    // RUST_LOG overrides the default filter
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_else(|error| {
            log::warn!("ignoring --lang: {error}");
            None
        }),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|error| {
            log::warn!("ignoring --config-dir: {error}");
            None
        }),
    };

    let unused = args.finish();
    if !unused.is_empty() {
        log::warn!("unrecognized arguments: {unused:?}");
    }

    paths::init_cli_override(flags.config_dir.clone());
    log::info!("maintech console starting up");
    app::run(flags)
}
