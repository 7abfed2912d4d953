//! Input collection: one line of comma-separated URLs.

use std::io::{self, BufRead};

/// Separator between URLs on the input line.
pub const URL_SEPARATOR: char = ',';

/// Splits `line` on commas, trims each piece, and drops empty pieces.
///
/// Order is preserved and duplicates are kept; each entry is one request.
pub fn parse_url_list(line: &str) -> Vec<String> {
    line.split(URL_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads a single line from `reader` and parses it with [`parse_url_list`].
/// EOF before any input yields an empty list.
pub fn read_url_list<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(parse_url_list(&line))
}

/// Flattens URL arguments, splitting each on commas like a typed line.
pub fn collect_url_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .flat_map(|a| parse_url_list(a.as_ref()))
        .collect()
}
