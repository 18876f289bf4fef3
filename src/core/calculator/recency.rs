use crate::models::Record;
use crate::utils::date::parse_timestamp;
use chrono::NaiveDateTime;

/// Records whose `moment_field` is strictly later than `cutoff`, in input order.
///
/// Rows where the field is missing or not a valid timestamp are skipped.
pub fn recency_filter<'a>(
    records: &'a [Record],
    moment_field: &str,
    cutoff: NaiveDateTime,
) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|r| is_newer(r, moment_field, cutoff))
        .collect()
}

/// Same as `recency_filter`, keeping each record's 1-based row number.
pub fn recency_filter_rows<'a>(
    records: &'a [Record],
    moment_field: &str,
    cutoff: NaiveDateTime,
) -> Vec<(usize, &'a Record)> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| is_newer(r, moment_field, cutoff))
        .map(|(i, r)| (i + 1, r))
        .collect()
}

fn is_newer(record: &Record, moment_field: &str, cutoff: NaiveDateTime) -> bool {
    record
        .get(moment_field)
        .and_then(parse_timestamp)
        .is_some_and(|moment| moment > cutoff)
}
