pub mod io;

pub use self::io::{parse_match_detail, read_match_detail_file};
