use std::process::exit;
use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;

static RUNTIME_HAS_CONTROL: AtomicBool = AtomicBool::new(false);
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Mark the child runtime as the owner of the terminal
///
/// Called immediately before spawning: from that point on, an interrupt is
/// the child's to handle, and the launcher only mirrors the resulting exit
/// status.
pub fn pass_control_to_runtime() {
    RUNTIME_HAS_CONTROL.store(true, Ordering::SeqCst);
}

pub fn setup_signal_handler() {
    let result = ctrlc::set_handler(|| {
        if !RUNTIME_HAS_CONTROL.load(Ordering::SeqCst) {
            exit(INTERRUPTED_EXIT_CODE);
        }
    });

    if result.is_err() {
        debug!("Unable to set Ctrl+C handler, SIGINT will not be handled correctly");
    }
}
