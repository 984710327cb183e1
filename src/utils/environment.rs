use std::env;

/// File name of the running executable, if it can be determined
///
/// Used to keep the binary itself out of the index when it lives in the
/// scanned directory.
pub fn current_exe_name() -> Option<String> {
    let exe = env::current_exe().ok()?;
    exe.file_name().map(|name| name.to_string_lossy().into_owned())
}
