// SPDX-License-Identifier: MPL-2.0
use adena::app::{self, paths, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
Adena jewelry storefront

USAGE:
  adena [OPTIONS]

OPTIONS:
  -h, --help               Print this help
  --lang <ID>              Interface language (e.g. en-US, fr)
  --data-dir <PATH>        Directory for the cart and wishlist file
  --config-dir <PATH>      Directory for settings.toml
  --route <PATH>           Start page, e.g. /product or /shop/rings
";

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adena=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        data_dir: opt_value(&mut args, "--data-dir"),
        config_dir: opt_value(&mut args, "--config-dir"),
        route: opt_value(&mut args, "--route"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}

fn opt_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, %err, "ignoring invalid argument");
            None
        }
    }
}
