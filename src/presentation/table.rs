use crate::domain::model::SongRecord;
use crate::presentation::theme::Theme;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 2] = ["Song", "Album"];
const MISSING_ALBUM: &str = "None";
const GAP: &str = "  ";

/// Render records as a two-column `Song | Album` table.
///
/// Columns are padded by display width, so Telugu titles line up with
/// Latin ones. Padding is computed on the raw text before the theme adds
/// any color escapes.
pub fn render_table(records: &[SongRecord], theme: &Theme) -> String {
    let song_width = records
        .iter()
        .map(|r| r.song.width())
        .chain(std::iter::once(HEADERS[0].width()))
        .max()
        .unwrap_or(0);
    let album_width = records
        .iter()
        .map(|r| r.album.as_deref().unwrap_or(MISSING_ALBUM).width())
        .chain(std::iter::once(HEADERS[1].width()))
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    writeln!(
        output,
        "{}{}{}",
        (theme.header)(&pad(HEADERS[0], song_width)),
        GAP,
        (theme.header)(HEADERS[1])
    )
    .ok();

    let cutoff = format!("{}{}{}", "─".repeat(song_width), GAP, "─".repeat(album_width));
    writeln!(output, "{}", (theme.line)(&cutoff)).ok();

    for record in records {
        let album = match &record.album {
            Some(album) => (theme.album)(album),
            None => (theme.missing)(MISSING_ALBUM),
        };
        writeln!(
            output,
            "{}{}{}",
            (theme.song)(&pad(&record.song, song_width)),
            GAP,
            album
        )
        .ok();
    }

    output
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_and_rows() {
        let records = vec![
            SongRecord::new("Cheli", Some("Kushi".to_string())),
            SongRecord::new("Nuvvu Nuvvu", Some("Khadgam".to_string())),
        ];
        let table = render_table(&records, &Theme::plain());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Song         Album");
        assert_eq!(lines[1], format!("{}  {}", "─".repeat(11), "─".repeat(7)));
        assert_eq!(lines[2], "Cheli        Kushi");
        assert_eq!(lines[3], "Nuvvu Nuvvu  Khadgam");
    }

    #[test]
    fn absent_album_prints_none() {
        let table = render_table(&[SongRecord::not_found("love")], &Theme::plain());
        let last = table.lines().last().unwrap();
        assert_eq!(last, "Couldn't find any songs with word love  None");
    }

    #[test]
    fn pads_by_display_width() {
        let records = vec![
            SongRecord::new("ప్రేమ", None),
            SongRecord::new("Prema Desam", None),
        ];
        let table = render_table(&records, &Theme::plain());

        let album_columns: Vec<usize> = table
            .lines()
            .skip(2)
            .map(|line| line.rfind("None").map(|i| line[..i].width()).unwrap())
            .collect();
        assert_eq!(album_columns[0], album_columns[1]);
    }

    #[test]
    fn empty_result_is_header_only() {
        let table = render_table(&[], &Theme::plain());
        assert_eq!(table.lines().count(), 2);
        assert!(table.starts_with("Song  Album"));
    }
}
