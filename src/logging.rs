// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Invest Gate - Browser Console Logging

//! `log` backend for wasm32 hosts. Native binaries install `env_logger`
//! instead; this module compiles to a no-op there.

/// Install the panic hook and the console dispatcher. Safe to call from every
/// constructor: only the first call takes effect.
pub fn init_console_logger() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();

        let (global_level, gate_level) = if cfg!(debug_assertions) {
            (log::LevelFilter::Warn, log::LevelFilter::Debug)
        } else {
            (log::LevelFilter::Error, log::LevelFilter::Info)
        };

        // Err once a logger is already installed
        let _ = fern::Dispatch::new()
            .level(global_level)
            .level_for(env!("CARGO_CRATE_NAME"), gate_level)
            .chain(fern::Output::call(|record| {
                let msg = format!("{}: {}", record.target(), record.args());
                match record.level() {
                    log::Level::Error => web_sys::console::error_1(&msg.into()),
                    log::Level::Warn => web_sys::console::warn_1(&msg.into()),
                    log::Level::Info => web_sys::console::info_1(&msg.into()),
                    log::Level::Debug | log::Level::Trace => web_sys::console::log_1(&msg.into()),
                }
            }))
            .apply();
    }
}

