use std::{fmt::Debug, path::PathBuf};

use everynoise_scraping_utils::fs_json_util::{read_json, write_text_atomically};

use crate::everynoise::schema::GenreMap;

/// Renders the map as a JSON object, two-space indent, one entry per line,
/// in insertion order.  An empty map renders as `{}`.
pub fn serialize(genres: &GenreMap) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(genres)?)
}

/// Writes the serialized map, atomically: a previous artifact either
/// survives untouched or is replaced by a complete new one.
pub fn write<P: Into<PathBuf> + Debug>(path: P, genres: &GenreMap) -> anyhow::Result<()> {
    write_text_atomically(path, &serialize(genres)?)
}

pub fn read<P: Into<PathBuf> + Debug>(path: P) -> anyhow::Result<GenreMap> {
    read_json(path)
}
