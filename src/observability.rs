//! This module wires the crate's `log` output to a concrete backend.
//!
//! The encoder only ever talks to the `log` facade. Hosts that already install a
//! logger need nothing from here; everyone else can call `init_logging` once to
//! get plain `[LEVEL] message` lines on stderr.

use std::sync::Once;

use log::LevelFilter;

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` backend at the given level. Safe to call more than
/// once; only the first call has any effect, and an already installed global
/// logger is left alone.
pub fn init_logging(level: LevelFilter) {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(cfg!(test));
        builder.filter_level(level);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())
        });

        let _ = builder.try_init();
    });
}
