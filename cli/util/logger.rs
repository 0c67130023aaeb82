use libs::env_logger;
use libs::log;
use std::io::Write;

/// Crates that get chatty at debug level.
const QUIET_MODULES: [&str; 3] = ["hyper", "reqwest", "tracing"];

struct CliLogger(env_logger::Logger);

impl CliLogger {
    pub fn new(logger: env_logger::Logger) -> Self {
        Self(logger)
    }

    pub fn filter(&self) -> log::LevelFilter {
        self.0.filter()
    }
}

impl log::Log for CliLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.0.enabled(metadata)
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            self.0.log(record);
        }
    }

    fn flush(&self) {
        self.0.flush();
    }
}

pub fn init(maybe_level: Option<log::Level>) {
    let log_level = maybe_level.unwrap_or(log::Level::Info);
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level.to_level_filter().to_string()),
    );
    if log_level > log::Level::Info {
        for module in QUIET_MODULES {
            builder.filter_module(module, log::LevelFilter::Info);
        }
    }

    let logger = builder
        .format(|buf, record| {
            if record.level() <= log::Level::Info {
                writeln!(buf, "{}", record.args())
            } else {
                // Add prefix to DEBUG or TRACE logs
                let mut target = record.target().to_string();
                if let Some(line_no) = record.line() {
                    target.push(':');
                    target.push_str(&line_no.to_string());
                }
                writeln!(
                    buf,
                    "{} RS - {} - {}",
                    record.level(),
                    target,
                    record.args()
                )
            }
        })
        .build();

    let cli_logger = CliLogger::new(logger);
    let max_level = cli_logger.filter();
    if log::set_boxed_logger(Box::new(cli_logger)).is_ok() {
        log::set_max_level(max_level);
    } else {
        eprintln!("A logger was already installed, keeping it.");
    }
}
