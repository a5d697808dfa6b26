use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::model::CommitTime;

/// Format a commit time in its own offset, e.g.
/// `Tue, 14 Nov 2023 23:13:20 +0100`
pub fn format_commit_time(time: CommitTime) -> String {
    let offset = UtcOffset::from_whole_seconds(time.offset_minutes.saturating_mul(60))
        .unwrap_or(UtcOffset::UTC);
    let format = format_description!(
        "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] [offset_hour sign:mandatory][offset_minute]"
    );

    OffsetDateTime::from_unix_timestamp(time.seconds)
        .ok()
        .and_then(|dt| dt.to_offset(offset).format(&format).ok())
        .unwrap_or_else(|| "unknown".to_string())
}
