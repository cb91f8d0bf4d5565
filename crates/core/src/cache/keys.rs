use chrono::NaiveDate;

/// Returns the cache key for aggregated availability of a place on a day.
///
/// This is the partition key both the aggregator and the invalidation
/// processor derive: `"<placeId>-<YYYY-MM-DD>"`. The date is rendered at
/// calendar-day granularity so a write and a later selective delete always
/// agree on identity.
pub fn availability_key(place_id: &str, date: NaiveDate) -> String {
    format!("{}-{}", place_id, date.format("%Y-%m-%d"))
}

/// Returns the cache key for the club list of a place.
pub fn clubs_key(place_id: &str) -> String {
    format!("clubs-{}", place_id)
}

/// Returns the cache key for the court list of a club.
pub fn courts_key(club_id: i64) -> String {
    format!("courts-{}", club_id)
}
