use std::{fmt::Debug, io::BufReader, path::PathBuf};

use anyhow::Context;
use fs_err::File;
use serde::Deserialize;

pub fn read_json<P: Into<PathBuf> + Debug, T: for<'de> Deserialize<'de>>(
    path: P,
) -> anyhow::Result<T> {
    let path = path.into();
    (|| serde_json::from_reader(BufReader::new(File::open(&path)?)).map_err(anyhow::Error::new))()
        .with_context(|| {
            format!(
                "While trying to parse {path:?} as {}",
                std::any::type_name::<T>()
            )
        })
}

pub fn read_toml<P: Into<PathBuf> + Debug, T: for<'de> Deserialize<'de>>(
    path: P,
) -> anyhow::Result<T> {
    let path = path.into();
    (|| toml::from_str(&fs_err::read_to_string(&path)?).map_err(anyhow::Error::new))().with_context(
        || {
            format!(
                "While trying to parse {path:?} as {}",
                std::any::type_name::<T>()
            )
        },
    )
}

/// Writes to a sibling temporary file and renames it over the destination,
/// so the destination is never left half-written.
pub fn write_text_atomically<P: Into<PathBuf> + Debug>(
    path: P,
    contents: &str,
) -> anyhow::Result<()> {
    let path = path.into();
    let file_name = path
        .file_name()
        .with_context(|| format!("No file name in {path:?}"))?;
    let mut tmp_name = file_name.to_owned();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);
    fs_err::write(&tmp_path, contents)?;
    Ok(fs_err::rename(&tmp_path, &path)?)
}
