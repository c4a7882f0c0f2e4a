// SPDX-License-Identifier: MPL-2.0
use iced_invoice::app::{self, paths, Flags};

const HELP: &str = "\
iced_invoice - invoice builder with live preview and PDF export

USAGE:
  iced_invoice [OPTIONS]

OPTIONS:
  --lang <code>        Interface language (e.g. fr, pt-BR)
  --data-dir <path>    Directory for the invoice record and window state
  --config-dir <path>  Directory for settings.toml
  -h, --help           Print this help
  -V, --version        Print the version
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }
    if args.contains(["-V", "--version"]) {
        println!("iced_invoice {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        data_dir: args.opt_value_from_str("--data-dir").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
    };

    // Path overrides must be in place before any load touches the disk.
    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    app::run(flags)
}
