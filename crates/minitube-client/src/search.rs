use minitube_core::Video;

/// Returns the videos whose title or description contains `query`,
/// ignoring case, in input order.
///
/// A blank query matches everything. Otherwise the query is used as given,
/// surrounding whitespace included.
pub fn filter_by_query<'a>(videos: &'a [Video], query: &str) -> Vec<&'a Video> {
    if query.trim().is_empty() {
        return videos.iter().collect();
    }

    let needle = query.to_lowercase();
    videos
        .iter()
        .filter(|video| {
            video.title.to_lowercase().contains(&needle)
                || video.description.to_lowercase().contains(&needle)
        })
        .collect()
}
