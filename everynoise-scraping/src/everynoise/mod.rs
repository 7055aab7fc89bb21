pub mod genre_file;
pub mod parser;
pub mod schema;

pub const GENRE_LIST_URL: &str = "https://everynoise.com/everynoise1d.cgi";
pub const DEFAULT_SCOPE: &str = "all";
