// SPDX-License-Identifier: MPL-2.0
use iced_mockup::app::{self, Flags};
use iced_mockup::domain::LayoutMode;
use iced_mockup::logging;
use std::path::PathBuf;

const HELP: &str = "\
iced_mockup - preview a web page on device mockups

USAGE:
  iced_mockup [OPTIONS] [URL]

OPTIONS:
  --url <URL>            Page to preview (same as the positional URL)
  --lang <LOCALE>        Interface language (en-US, fr)
  --layout <LAYOUT>      Start in `grid` or `carousel`
  --config-dir <DIR>     Read settings.toml from DIR
  -h, --help             Print this help
";

fn main() -> iced::Result {
    logging::init_logger();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };
    log::debug!("starting with {flags:?}");

    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let layout: Option<LayoutMode> = args.opt_value_from_str("--layout")?;
    let config_dir: Option<PathBuf> = args.opt_value_from_os_str("--config-dir", |s| {
        Ok::<_, std::convert::Infallible>(PathBuf::from(s))
    })?;
    let url: Option<String> = args.opt_value_from_str("--url")?;
    let positional = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Flags {
        lang,
        url: url.or(positional),
        layout,
        config_dir,
    })
}
