use std::path::PathBuf;

use clap::Parser;
use everynoise_scraping::everynoise::parser::genre_list;
use everynoise_scraping::everynoise::parser::genre_list::ColumnLayout;
use scraper::Html;

#[derive(Parser)]
struct Opts {
    input_file: PathBuf,
    #[arg(long)]
    genre_column: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    let html = Html::parse_document(&fs_err::read_to_string(opts.input_file)?);
    let columns = match opts.genre_column {
        Some(genre_anchor_index) => ColumnLayout { genre_anchor_index },
        None => ColumnLayout::default(),
    };
    let list = genre_list::parse(&html, columns);
    for (genre, playlist) in &list.genres {
        println!("{genre} => {playlist}");
    }
    for skipped in &list.skipped {
        println!("Skipped row {}: {}", skipped.row_index, skipped.reason);
    }
    println!(
        "{} genres, {} rows skipped",
        list.genres.len(),
        list.skipped.len()
    );
    Ok(())
}
