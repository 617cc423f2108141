//! Record ID type definition.

use time::OffsetDateTime;

/// Alias for the integer type used to identify stored records.
///
/// IDs are creation timestamps in milliseconds since the Unix epoch.
pub type RecordId = i64;

/// Pick the ID for a record created at `now`.
///
/// The ID is `now` in milliseconds, unless a record in `existing_ids` already
/// has that ID or a later one, in which case the ID is one more than the
/// largest existing ID so that IDs stay unique.
pub fn next_record_id(
    existing_ids: impl IntoIterator<Item = RecordId>,
    now: OffsetDateTime,
) -> RecordId {
    let timestamp = (now.unix_timestamp_nanos() / 1_000_000) as RecordId;

    match existing_ids.into_iter().max() {
        Some(max_id) if max_id >= timestamp => max_id + 1,
        _ => timestamp,
    }
}

#[cfg(test)]
mod record_id_tests {
    use time::macros::datetime;

    use super::next_record_id;

    #[test]
    fn uses_creation_timestamp_in_milliseconds() {
        let now = datetime!(2024-06-01 12:00:00.123 UTC);

        let id = next_record_id([], now);

        assert_eq!(id, 1_717_243_200_123);
    }

    #[test]
    fn stays_unique_within_the_same_millisecond() {
        let now = datetime!(2024-06-01 12:00:00.123 UTC);
        let first = next_record_id([], now);

        let second = next_record_id([first], now);

        assert_eq!(second, first + 1);
    }

    #[test]
    fn ignores_older_ids() {
        let now = datetime!(2024-06-01 12:00:00.123 UTC);

        let id = next_record_id([1, 2, 3], now);

        assert_eq!(id, 1_717_243_200_123);
    }
}
