use env_logger::{Builder, Env};
use log::LevelFilter;

/// Install the stderr logger. `RUST_LOG` wins over the flags when set.
pub fn init(verbose: u8, quiet: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(level_for(verbose, quiet).as_str()));
    builder.format_timestamp(None).format_target(false);
    // Tests may call this more than once in the same process.
    let _ = builder.try_init();
}

pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
