/// Formats a length in seconds as `m:ss`. Minutes are not wrapped into hours.
pub fn format_duration(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Formats a view count for display, abbreviating thousands and millions to
/// one decimal place (`1.5K views`, `2.0M views`).
///
/// Rounding is half-up on the exact decimal value, so `1150` renders as
/// `1.2K views` rather than the `1.1K` a binary float would round to.
pub fn format_views(views: u64) -> String {
    if views >= 1_000_000 {
        format!("{}M views", one_decimal(views, 1_000_000))
    } else if views >= 1_000 {
        format!("{}K views", one_decimal(views, 1_000))
    } else {
        format!("{views} views")
    }
}

/// `value / unit` rounded half-up to one decimal place.
fn one_decimal(value: u64, unit: u64) -> String {
    let tenths = (u128::from(value) * 10 + u128::from(unit) / 2) / u128::from(unit);
    format!("{}.{}", tenths / 10, tenths % 10)
}
