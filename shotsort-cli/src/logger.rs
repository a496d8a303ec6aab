//! `env_logger` setup for the `--quiet` / `--verbose` flags.

use std::io::Write;

use log::LevelFilter;

/// Install the global logger.
///
/// Normal output is message-only so `log::info!` lines read like plain
/// console output; `--verbose` adds a timestamp and level. `RUST_LOG`
/// overrides the level when set.
pub(crate) fn init(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }

    builder.target(env_logger::Target::Stdout).init();
}
