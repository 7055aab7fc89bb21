use everynoise_scraping_utils::selector;
use itertools::Itertools;
use log::{debug, warn};
use scraper::{ElementRef, Html};
use thiserror::Error;

use crate::everynoise::schema::{GenreMap, GenreName, PlaylistId};

/// Where to find things among a row's anchors.  The playlist link is always
/// the first anchor; the position of the genre label depends on the page's
/// column layout, so it is configuration rather than a constant.
#[derive(Clone, Copy, Debug)]
pub struct ColumnLayout {
    pub genre_anchor_index: usize,
}
impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            genre_anchor_index: 2,
        }
    }
}

#[derive(Debug, Default)]
pub struct GenreList {
    pub genres: GenreMap,
    pub skipped: Vec<SkippedRow>,
}

/// A row that contributed no entry, with the first failure encountered.
#[derive(Debug)]
pub struct SkippedRow {
    pub row_index: usize,
    pub reason: SkipReason,
}

#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum SkipReason {
    #[error("No anchor in the row")]
    AnchorNotFound,
    #[error("Playlist anchor has no href attribute")]
    HrefNotFound,
    #[error("No playlist id after the last colon in href {0:?}")]
    MalformedPlaylistHref(String),
    #[error("No genre anchor at index {0}")]
    GenreAnchorNotFound(usize),
    #[error("Genre anchor has no text")]
    EmptyGenreName,
}

/// Collects `genre name => playlist id` from every `tr` of the document.
/// Rows that cannot be extracted are reported in `skipped` and never abort
/// the parse; whether anything was extracted at all is for the caller to
/// judge.
pub fn parse(html: &Html, columns: ColumnLayout) -> GenreList {
    let mut ret = GenreList::default();
    for (row_index, row) in html.select(selector!("tr")).enumerate() {
        match parse_row(row, columns) {
            Ok((genre, playlist)) => {
                debug!("Row {row_index}: {genre:?} => {playlist:?}");
                ret.genres.insert(genre, playlist);
            }
            Err(reason) => {
                warn!("Skipping row {row_index}: {reason}");
                ret.skipped.push(SkippedRow { row_index, reason });
            }
        }
    }
    ret
}

fn parse_row(
    row: ElementRef,
    columns: ColumnLayout,
) -> Result<(GenreName, PlaylistId), SkipReason> {
    let anchors = row.select(selector!("a")).collect_vec();
    let playlist_anchor = anchors.first().ok_or(SkipReason::AnchorNotFound)?;
    let href = playlist_anchor
        .attr("href")
        .ok_or(SkipReason::HrefNotFound)?;
    let playlist_id = match href.rsplit_once(':') {
        Some((_, id)) if !id.is_empty() => id,
        _ => return Err(SkipReason::MalformedPlaylistHref(href.to_owned())),
    };
    let genre_anchor = anchors
        .get(columns.genre_anchor_index)
        .ok_or(SkipReason::GenreAnchorNotFound(columns.genre_anchor_index))?;
    let genre_name = genre_anchor.text().collect::<String>().trim().to_owned();
    if genre_name.is_empty() {
        return Err(SkipReason::EmptyGenreName);
    }
    Ok((genre_name.into(), playlist_id.to_owned().into()))
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use scraper::Html;

    use super::{parse, ColumnLayout, SkipReason};
    use crate::everynoise::schema::GenreMap;

    fn page(rows: &[String]) -> Html {
        Html::parse_document(&format!(
            "<html><body><table>{}</table></body></html>",
            rows.join("\n")
        ))
    }

    fn row(rank: u32, playlist_href: &str, genre: &str) -> String {
        format!(
            r#"<tr><td class="note"><a href="{playlist_href}" title="play"><div class="play">&#9654;</div></a></td><td class="note">{rank}</td><td><a class="note" href="everynoise1d-{rank}.html">&#8803;</a></td><td><a onclick="playme({rank})" href="engenremap.html#{rank}">{genre}</a><a class="note" href="everynoise1d.cgi?root={rank}">&#187;</a></td></tr>"#
        )
    }

    fn expected(entries: &[(&str, &str)]) -> GenreMap {
        entries
            .iter()
            .map(|&(genre, playlist)| (genre.to_owned().into(), playlist.to_owned().into()))
            .collect()
    }

    #[test]
    fn test_well_formed_rows() {
        let html = page(&[
            row(1, "spotify:playlist:6gS3HhOiI17QNojjPuPzqc", "pop"),
            row(2, "spotify:playlist:6s5MoZzR70Qef7x4bVxDO1", "dance pop"),
            row(3, "spotify:playlist:37i9dQZF1DX4dyzvuaRJ0n", "electro house"),
        ]);
        let list = parse(&html, ColumnLayout::default());
        assert!(list.skipped.is_empty());
        assert_eq!(
            list.genres,
            expected(&[
                ("pop", "6gS3HhOiI17QNojjPuPzqc"),
                ("dance pop", "6s5MoZzR70Qef7x4bVxDO1"),
                ("electro house", "37i9dQZF1DX4dyzvuaRJ0n"),
            ])
        );
        assert_eq!(
            list.genres.keys().map(|g| format!("{g}")).collect_vec(),
            ["pop", "dance pop", "electro house"]
        );
    }

    #[test]
    fn test_colonless_href_is_skipped() {
        let html = page(&[
            row(1, "spotify:playlist:6gS3HhOiI17QNojjPuPzqc", "pop"),
            row(2, "not-a-playlist-link", "dance pop"),
            row(3, "spotify:playlist:37i9dQZF1DX4dyzvuaRJ0n", "electro house"),
        ]);
        let list = parse(&html, ColumnLayout::default());
        assert_eq!(
            list.genres,
            expected(&[
                ("pop", "6gS3HhOiI17QNojjPuPzqc"),
                ("electro house", "37i9dQZF1DX4dyzvuaRJ0n"),
            ])
        );
        assert_eq!(list.skipped.len(), 1);
        assert_eq!(list.skipped[0].row_index, 1);
        assert_eq!(
            list.skipped[0].reason,
            SkipReason::MalformedPlaylistHref("not-a-playlist-link".to_owned())
        );
    }

    #[test]
    fn test_empty_id_after_colon_is_skipped() {
        let html = page(&[row(1, "spotify:playlist:", "pop")]);
        let list = parse(&html, ColumnLayout::default());
        assert!(list.genres.is_empty());
        assert_eq!(
            list.skipped[0].reason,
            SkipReason::MalformedPlaylistHref("spotify:playlist:".to_owned())
        );
    }

    #[test]
    fn test_later_duplicate_overwrites() {
        let html = page(&[
            row(1, "spotify:playlist:6gS3HhOiI17QNojjPuPzqc", "pop"),
            row(2, "spotify:playlist:6s5MoZzR70Qef7x4bVxDO1", "dance pop"),
            row(3, "spotify:playlist:0JQ5DAqbMKFEC4WFtoNRpw", "pop"),
        ]);
        let list = parse(&html, ColumnLayout::default());
        assert!(list.skipped.is_empty());
        // Later value wins; the entry stays at its first position.
        assert_eq!(
            list.genres,
            expected(&[
                ("pop", "0JQ5DAqbMKFEC4WFtoNRpw"),
                ("dance pop", "6s5MoZzR70Qef7x4bVxDO1"),
            ])
        );
        assert_eq!(
            list.genres.keys().map(|g| format!("{g}")).collect_vec(),
            ["pop", "dance pop"]
        );
    }

    #[test]
    fn test_anchorless_rows_are_skipped() {
        let html = page(&[
            "<tr><th>play</th><th>rank</th><th>genre</th></tr>".to_owned(),
            row(1, "spotify:playlist:6gS3HhOiI17QNojjPuPzqc", "pop"),
        ]);
        let list = parse(&html, ColumnLayout::default());
        assert_eq!(list.genres, expected(&[("pop", "6gS3HhOiI17QNojjPuPzqc")]));
        assert_eq!(list.skipped[0].row_index, 0);
        assert_eq!(list.skipped[0].reason, SkipReason::AnchorNotFound);
    }

    #[test]
    fn test_missing_genre_anchor() {
        let html = page(&[
            r#"<tr><td><a href="spotify:playlist:6gS3HhOiI17QNojjPuPzqc">&#9654;</a></td><td>1</td></tr>"#
                .to_owned(),
        ]);
        let list = parse(&html, ColumnLayout::default());
        assert!(list.genres.is_empty());
        assert_eq!(list.skipped[0].reason, SkipReason::GenreAnchorNotFound(2));
    }

    #[test]
    fn test_genre_column_is_configurable() {
        let html = Html::parse_document(
            r#"<table><tr><td><a href="spotify:playlist:6gS3HhOiI17QNojjPuPzqc">&#9654;</a></td><td><a href="engenremap.html">pop</a></td></tr></table>"#,
        );
        let list = parse(
            &html,
            ColumnLayout {
                genre_anchor_index: 1,
            },
        );
        assert!(list.skipped.is_empty());
        assert_eq!(list.genres, expected(&[("pop", "6gS3HhOiI17QNojjPuPzqc")]));
    }
}
