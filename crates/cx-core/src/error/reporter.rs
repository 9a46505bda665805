use std::env;
use std::error::Error;

use super::CxError;
use crate::style::format_error_cause;
use log::error;

const CX_DEV: &str = "CX_DEV";

/// Report an error to the terminal
///
/// The cause chain and launcher version are included when `CX_DEV` is set,
/// since they are only useful for diagnosing launcher bugs.
pub fn report_error(cx_version: &str, err: &CxError) {
    error!("{}", err);

    if env::var_os(CX_DEV).is_some() {
        if let Some(details) = compose_error_details(err) {
            eprintln!();
            eprintln!("{}", details);
            eprintln!();
            eprintln!("cx v{}", cx_version);
        }
    }
}

fn compose_error_details(err: &CxError) -> Option<String> {
    // Only compose details if there is an underlying cause for the error
    let mut current = err.source()?;
    let mut details = String::new();

    // Walk up the tree of causes and include all of them
    loop {
        details.push_str(&format_error_cause(current));

        match current.source() {
            Some(cause) => {
                details.push_str("\n\n");
                current = cause;
            }
            None => {
                break;
            }
        };
    }

    Some(details)
}
