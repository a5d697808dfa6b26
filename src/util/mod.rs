mod format;

pub use format::format_commit_time;
