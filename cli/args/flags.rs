use libs::clap;
use libs::clap::ColorChoice;
use libs::clap::ValueHint;
use libs::clap::{Arg, ArgAction, Command};
use libs::log::Level;
use libs::once_cell::sync::Lazy;

static LONG_VERSION: Lazy<String> = Lazy::new(crate::version::engage);

static SHORT_VERSION: Lazy<String> = Lazy::new(|| {
    let version = crate::version::engage();
    match version.split_once('+') {
        Some((semver, _)) => semver.to_string(),
        None => version,
    }
});

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct ServeFlags {
    pub port: Option<u16>,
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct InfoFlags {}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EngageSubcommand {
    Info(InfoFlags),
    Serve(ServeFlags),
}

impl Default for EngageSubcommand {
    fn default() -> EngageSubcommand {
        EngageSubcommand::Serve(ServeFlags::default())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct Flags {
    pub subcommand: EngageSubcommand,
    pub log_level: Option<Level>,
    /// `--debug`, same as `DEMO_DEBUG=1`.
    pub debug: bool,
}

impl Flags {
    pub fn port(&self) -> Option<u16> {
        match &self.subcommand {
            EngageSubcommand::Serve(serve_flags) => serve_flags.port,
            EngageSubcommand::Info(_) => None,
        }
    }
}

fn clap_root() -> Command {
    Command::new("engage")
        .bin_name("engage")
        .color(ColorChoice::Never)
        .max_term_width(80)
        .version(SHORT_VERSION.as_str())
        .long_version(LONG_VERSION.as_str())
        .about("LinkedIn login demo with simulated post engagement")
        .arg(
            Arg::new("log-level")
                .short('L')
                .long("log-level")
                .help("Set log level")
                .hide(true)
                .num_args(1)
                .value_parser(["debug", "info"])
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress diagnostic output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable token injection and debug logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(serve_subcommand())
        .subcommand(info_subcommand())
}

fn serve_subcommand() -> Command {
    Command::new("serve")
        .about("Start the webserver (default)")
        .arg(port_arg())
}

fn info_subcommand() -> Command {
    Command::new("info").about("Show which settings are configured")
}

fn port_arg() -> Arg {
    Arg::new("port")
        .short('p')
        .long("port")
        .value_name("PORT")
        .help("Port the webserver listens on, overrides PORT")
        .num_args(1)
        .value_parser(clap::value_parser!(u16))
        .value_hint(ValueHint::Other)
}

/// Main entry point for parsing engage's command line flags.
pub fn flags_from_vec(args: Vec<String>) -> clap::error::Result<Flags> {
    let mut app = clap_root();
    let matches = app.try_get_matches_from_mut(&args)?;

    let mut flags = Flags {
        debug: matches.get_flag("debug"),
        ..Flags::default()
    };

    if matches.get_flag("quiet") {
        flags.log_level = Some(Level::Error);
    } else if let Some(log_level) = matches.get_one::<String>("log-level") {
        flags.log_level = match log_level.as_str() {
            "debug" => Some(Level::Debug),
            _ => Some(Level::Info),
        }
    }

    match matches.subcommand() {
        Some(("info", _)) => flags.subcommand = EngageSubcommand::Info(InfoFlags {}),
        Some(("serve", m)) => serve(&mut flags, m),
        _ => {}
    }

    Ok(flags)
}

fn serve(flags: &mut Flags, matches: &clap::ArgMatches) {
    flags.subcommand = EngageSubcommand::Serve(ServeFlags {
        port: matches.get_one::<u16>("port").copied(),
    });
}
