//! Wallet demo - direct and encapsulated wallet buttons.
//!
//! Tab / Shift+Tab to move, Enter to press, q to quit.
//! Set `SPARK_SLOTS_LOG=debug` and redirect stderr to see registry traffic.
//!
//! Run with: cargo run --bin wallet-demo 2>slots.log

use std::process::ExitCode;

use spark_slots::pipeline::mount;
use spark_slots::widgets::wallet_app;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("SPARK_SLOTS_LOG"))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let handle = match mount::mount(wallet_app) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Failed to mount: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = mount::run(&handle);
    let restored = mount::unmount(handle);

    match result.and(restored) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
