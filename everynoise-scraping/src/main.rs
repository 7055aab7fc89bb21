use std::path::PathBuf;

use anyhow::ensure;
use clap::Parser;
use everynoise_scraping::api::EveryNoiseClient;
use everynoise_scraping::config::Config;
use everynoise_scraping::everynoise::genre_file;
use everynoise_scraping::everynoise::parser::genre_list;
use everynoise_scraping::everynoise::parser::genre_list::ColumnLayout;
use everynoise_scraping::everynoise::DEFAULT_SCOPE;
use everynoise_scraping_utils::fs_json_util::read_toml;
use log::info;
use scraper::Html;

#[derive(Parser)]
struct Opts {
    /// Where to save the genre-to-playlist map.
    output_path: Option<PathBuf>,
    /// Scope query parameter of the genre list page.
    #[arg(long)]
    scope: Option<String>,
    /// Index of the anchor in each row that holds the genre name.
    #[arg(long)]
    genre_column: Option<usize>,
    #[arg(long)]
    config_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    let config: Config = match &opts.config_path {
        Some(path) => read_toml(path)?,
        None => Config::default(),
    };
    let scope = opts
        .scope
        .or(config.scope)
        .unwrap_or_else(|| DEFAULT_SCOPE.to_owned());
    let output_path = opts
        .output_path
        .or(config.output_path)
        .unwrap_or_else(|| PathBuf::from("genres.json"));
    let columns = match opts.genre_column.or(config.genre_column) {
        Some(genre_anchor_index) => ColumnLayout { genre_anchor_index },
        None => ColumnLayout::default(),
    };

    let client = EveryNoiseClient::new()?;
    let html = client.fetch_genre_list(&scope).await?;
    info!("Got the genre list page ({} bytes).  Parsing...", html.len());

    let list = genre_list::parse(&Html::parse_document(&html), columns);
    if !list.skipped.is_empty() {
        info!(
            "Skipped {} of {} rows.",
            list.skipped.len(),
            list.genres.len() + list.skipped.len()
        );
    }
    ensure!(
        !list.genres.is_empty(),
        "No genre was extracted from the genre list page; \
         check the scope and the genre column configuration"
    );

    genre_file::write(&output_path, &list.genres)?;
    info!(
        "Successfully saved {} genres to {:?}.",
        list.genres.len(),
        output_path
    );
    Ok(())
}
