pub mod environment;
pub mod format;

pub use environment::current_exe_name;
pub use format::{DATE_FORMAT, format_local_date, format_size_mb};
