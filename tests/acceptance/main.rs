
// test files

#[cfg(unix)]
mod launch;
#[cfg(unix)]
mod startup_errors;
