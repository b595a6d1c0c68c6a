//! Headless mode - render a view as JSON instead of drawing the TUI
//!
//! Loads the content document, navigates to the requested location and
//! writes a single JSON object to stdout:
//!
//! ```json
//! {"description":"Field Notes","location":{"kind":"home"},"elements":[...]}
//! ```

use std::io::{self, Write};

use folio_app::{ContentCache, DocumentSource, Element, Location, Navigator, Selection};
use folio_core::prelude::*;
use serde::Serialize;

/// The rendered view as written to stdout
#[derive(Debug, Serialize)]
pub struct HeadlessView<'a> {
    pub description: &'a str,
    pub location: &'a Location,
    pub elements: &'a [Element],
}

/// Load content, navigate along `at` (if given) and print the view
pub async fn run(source: &DocumentSource, at: Option<&str>) -> Result<()> {
    let tree = ContentCache::global().load(source).await?;
    let mut nav = Navigator::new(tree)?;

    for selection in parse_path(at.unwrap_or(""))? {
        nav.select(selection)
            .with_context(|| format!("No such location: {}", at.unwrap_or("")))?;
    }

    let view = HeadlessView {
        description: &nav.tree().description,
        location: nav.location(),
        elements: nav.view(),
    };

    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &view)?;
    writeln!(stdout)?;
    Ok(())
}

/// Parse `category/subcategory/article-index` into selections from Home.
///
/// Empty segments are skipped, so `""` and `"/"` mean Home. A name that
/// contains `/` is written with `\/`, and a literal backslash as `\\`.
pub fn parse_path(path: &str) -> Result<Vec<Selection>> {
    let segments: Vec<String> = split_segments(path)?
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if segments.len() > 3 {
        return Err(Error::config(format!(
            "location {path:?} is deeper than category/subcategory/article"
        )));
    }

    segments
        .iter()
        .enumerate()
        .map(|(depth, segment)| match depth {
            0 => Ok(Selection::Category(segment.clone())),
            1 => Ok(Selection::Subcategory(segment.clone())),
            _ => segment.parse::<usize>().map(Selection::Article).map_err(|_| {
                Error::config(format!("article must be an index, got {segment:?}"))
            }),
        })
        .collect()
}

/// Split on unescaped `/`, unescaping `\/` and `\\`
fn split_segments(path: &str) -> Result<Vec<String>> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some(escaped @ ('/' | '\\')) => current.push(escaped),
                other => {
                    return Err(Error::config(format!(
                        "location {path:?} has an invalid escape \\{}",
                        other.map(String::from).unwrap_or_default()
                    )))
                }
            },
            '/' => segments.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    segments.push(current);
    Ok(segments)
}
