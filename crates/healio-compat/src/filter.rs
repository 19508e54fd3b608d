//! Free-text filtering over the compatibility table.

use crate::records::CompatibilityRecord;

/// Does a single record match a non-empty query?
///
/// The query matches case-insensitively against the drug name, excipient
/// name and excipient CID, and case-sensitively against the drug CID
/// (CIDs are numeric strings, so case only matters for junk input).
pub fn matches_query(record: &CompatibilityRecord, query: &str) -> bool {
    let needle = query.to_lowercase();
    record.drug_name.to_lowercase().contains(&needle)
        || record.drug_cid.contains(query)
        || record.excipient_name.to_lowercase().contains(&needle)
        || record.excipient_cid.to_lowercase().contains(&needle)
}

/// Return the records matching `query`, preserving source order.
///
/// The empty query means "no filter" and returns every record. Filtering
/// never mutates the source; it always selects from the full collection,
/// so narrowing and re-widening a query restores previously hidden rows.
pub fn filter_records(records: &[CompatibilityRecord], query: &str) -> Vec<CompatibilityRecord> {
    if query.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| matches_query(r, query))
        .cloned()
        .collect()
}
