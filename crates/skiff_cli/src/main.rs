//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `skiff_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use skiff_core::{
    default_launch_continuation, run_launch_sequence, ExtensionRegistry, MethodCall,
    MethodChannelHost, DIAGNOSTICS_CHANNEL, DIAGNOSTICS_PING_METHOD, PREFERENCES_CHANNEL,
    PREFERENCES_GET_ALL_METHOD,
};

fn main() {
    // Exercises the core launch path without Flutter or FFI runtime setup.
    println!("skiff_core version={}", skiff_core::core_version());

    let mut host = MethodChannelHost::new();
    let mut registry = ExtensionRegistry::new();
    let outcome = match run_launch_sequence(&mut host, &mut registry, default_launch_continuation) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("launch failed: {err}");
            std::process::exit(1);
        }
    };
    println!(
        "launch proceed={} extensions={}",
        outcome.proceed, outcome.extensions_registered
    );

    let get_all = host.dispatch(
        PREFERENCES_CHANNEL,
        &MethodCall::without_arguments(PREFERENCES_GET_ALL_METHOD),
    );
    println!("{PREFERENCES_CHANNEL}#{PREFERENCES_GET_ALL_METHOD} reply={}", get_all.kind());

    let ping = host.dispatch(
        DIAGNOSTICS_CHANNEL,
        &MethodCall::without_arguments(DIAGNOSTICS_PING_METHOD),
    );
    println!("{DIAGNOSTICS_CHANNEL}#{DIAGNOSTICS_PING_METHOD} reply={}", ping.kind());
}
