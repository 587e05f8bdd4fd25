//! Logger set-up for binaries built on the crate

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

/// Guards the one-time logger installation
static INIT: Once = Once::new();

/// Installs an `env_logger` backend for the `log` macros used by the table.
///
/// Defaults to `info` with millisecond timestamps; `RUST_LOG` overrides the levels,
/// e.g. `RUST_LOG=chaintable=trace` to see every insertion and removal. Calling it more
/// than once, or after another logger was installed, is a no-op.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("chaintable", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed
        let _ = builder.try_init();
    });
}

#[cfg(test)]
mod tests {
    use log::{debug, info};

    use super::*;

    #[test]
    fn test_initialize_twice() {
        initialize_logger();
        initialize_logger();
        debug!("Debug message in test");
        info!("Info message in test");
    }
}
