use crate::domain::model::SongRecord;
use std::collections::HashSet;

/// Dedup by song title (first one wins) and drop albums containing
/// `exclude_marker`. A single record, which is what an empty search turns
/// into, is passed through untouched. An empty marker filters nothing.
pub fn postprocess(records: Vec<SongRecord>, exclude_marker: &str) -> Vec<SongRecord> {
    if records.len() == 1 {
        return records;
    }

    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.song.clone()))
        .filter(|record| !is_excluded(record, exclude_marker))
        .collect()
}

fn is_excluded(record: &SongRecord, marker: &str) -> bool {
    if marker.is_empty() {
        return false;
    }
    record
        .album
        .as_deref()
        .map(|album| album.contains(marker))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(song: &str, album: Option<&str>) -> SongRecord {
        SongRecord::new(song, album.map(str::to_string))
    }

    #[test]
    fn unique_titles_are_kept_in_order() {
        let input = vec![
            rec("Cheli", Some("Kushi")),
            rec("Nuvvu", Some("Nuvve Nuvve")),
            rec("Sravani", None),
        ];
        assert_eq!(postprocess(input.clone(), "Hits"), input);
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let input = vec![
            rec("Cheli", Some("Kushi")),
            rec("Nuvvu", Some("Nuvve Nuvve")),
            rec("Cheli", Some("Other")),
            rec("Nuvvu", None),
        ];
        assert_eq!(
            postprocess(input, "Hits"),
            vec![rec("Cheli", Some("Kushi")), rec("Nuvvu", Some("Nuvve Nuvve"))]
        );
    }

    #[test]
    fn marker_albums_are_removed() {
        let input = vec![
            rec("Cheli", Some("Cheli")),
            rec("Cheli", Some("Cheli Hits")),
            rec("Prema", Some("Telugu Hits Vol 2")),
            rec("Gaali", None),
        ];
        assert_eq!(
            postprocess(input, "Hits"),
            vec![rec("Cheli", Some("Cheli")), rec("Gaali", None)]
        );
    }

    #[test]
    fn dedup_happens_before_filter() {
        // the first "Cheli" is a compilation, so no "Cheli" survives
        let input = vec![rec("Cheli", Some("Cheli Hits")), rec("Cheli", Some("Cheli"))];
        assert!(postprocess(input, "Hits").is_empty());
    }

    #[test]
    fn marker_is_case_sensitive() {
        let input = vec![rec("A", Some("greatest hits")), rec("B", Some("Greatest Hits"))];
        assert_eq!(postprocess(input, "Hits"), vec![rec("A", Some("greatest hits"))]);
    }

    #[test]
    fn single_record_is_never_filtered() {
        let sentinel = vec![SongRecord::not_found("love")];
        assert_eq!(postprocess(sentinel.clone(), "Hits"), sentinel);

        let lone = vec![rec("Cheli", Some("Cheli Hits"))];
        assert_eq!(postprocess(lone.clone(), "Hits"), lone);
    }

    #[test]
    fn empty_marker_only_dedups() {
        let input = vec![rec("A", Some("Hits")), rec("A", None), rec("B", Some("x"))];
        assert_eq!(
            postprocess(input, ""),
            vec![rec("A", Some("Hits")), rec("B", Some("x"))]
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(postprocess(Vec::new(), "Hits").is_empty());
    }

    #[test]
    fn idempotent() {
        let input = vec![
            rec("Cheli", Some("Cheli")),
            rec("Cheli", Some("Cheli Hits")),
            rec("Nuvvu", Some("Hits Only")),
            rec("Prema", Some("Prema")),
            rec("Gaali", None),
        ];
        let once = postprocess(input, "Hits");
        let twice = postprocess(once.clone(), "Hits");
        assert_eq!(once, twice);
    }
}
