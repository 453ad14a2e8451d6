//! Per-source HTML extraction strategies
//!
//! Each source publishes its address list in a different part of the page:
//! a `<textarea>` blob, table rows, or plain list items. The strategy for a
//! source is fixed up front by URL (see [`strategy_for_url`]) rather than
//! sniffed from the markup, so a redesigned page yields nothing instead of
//! garbage.
//!
//! Extraction is purely lexical: every maximal run shaped like a dotted
//! quad is returned, including semantically invalid ones such as
//! `999.1.1.1`. Range and blacklist checks belong to
//! [`crate::validator::is_valid_ip`], applied by the caller.

use regex::Regex;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Four groups of 1-3 digits separated by literal dots, no range checking
#[allow(clippy::expect_used)]
static IP_CANDIDATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,3}(?:\.\d{1,3}){3}").expect("candidate pattern compiles"));

/// Where in a page a source publishes its addresses
///
/// A closed set: adding a source with a new layout means adding a variant
/// here, not teaching the extractor to guess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractionStrategy {
    /// Addresses appear in `<tr>` table rows, possibly several per row
    Table,
    /// Addresses appear one per line inside a single `<textarea>`
    Textarea,
    /// Addresses appear in `<li>` list items (the fallback for unknown pages)
    #[default]
    ListItem,
}

/// Map a source URL to its extraction strategy.
///
/// Exact string match against the known publishers; anything unrecognized
/// gets [`ExtractionStrategy::ListItem`].
pub fn strategy_for_url(url: &str) -> ExtractionStrategy {
    match url {
        "https://cf.vvhan.com/" => ExtractionStrategy::Textarea,
        "https://api.uouin.com/cloudflare.html" | "https://ip.164746.xyz" => {
            ExtractionStrategy::Table
        }
        _ => ExtractionStrategy::ListItem,
    }
}

/// Extract candidate tokens from raw markup using the given strategy.
///
/// Returns raw tokens in document order, duplicates included; performs no
/// validation and no I/O. Missing containers (no textarea, no rows) yield
/// an empty list.
pub fn extract(strategy: ExtractionStrategy, markup: &str) -> Vec<String> {
    let document = Html::parse_document(markup);
    match strategy {
        ExtractionStrategy::Textarea => extract_textarea(&document),
        ExtractionStrategy::Table => extract_elements(&document, "tr"),
        ExtractionStrategy::ListItem => extract_elements(&document, "li"),
    }
}

/// Textarea strategy: one distinguished container, matched line by line.
///
/// The class-qualified `textarea.form-control` is the canonical location;
/// the bare-tag fallback keeps the source working if the class attribute
/// disappears. Tokens never span line breaks.
fn extract_textarea(document: &Html) -> Vec<String> {
    let container = ["textarea.form-control", "textarea"]
        .iter()
        .filter_map(|css| Selector::parse(css).ok())
        .find_map(|sel| document.select(&sel).next());

    let Some(element) = container else {
        return Vec::new();
    };

    let content = element.text().collect::<String>();
    content
        .lines()
        .flat_map(|line| {
            IP_CANDIDATE
                .find_iter(line)
                .map(|m| m.as_str().to_string())
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Table and list-item strategies: visible text per element, all matches kept.
fn extract_elements(document: &Html, tag: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(tag) else {
        return Vec::new();
    };

    let mut tokens = Vec::new();
    for element in document.select(&selector) {
        let text = element.text().collect::<String>();
        tokens.extend(IP_CANDIDATE.find_iter(&text).map(|m| m.as_str().to_string()));
    }
    tokens
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_yield_embedded_tokens() {
        let markup = r#"
            <html><body><table>
                <tr><td>Server: 1.2.3.4 online</td></tr>
                <tr><td>Node</td><td>5.6.7.8</td><td>9.9.9.9</td></tr>
            </table></body></html>
        "#;
        let tokens = extract(ExtractionStrategy::Table, markup);
        assert_eq!(tokens, vec!["1.2.3.4", "5.6.7.8", "9.9.9.9"]);
    }

    #[test]
    fn textarea_matches_per_line() {
        let markup = "<html><body><textarea>5.6.7.8\nbad line 999.1.1.1</textarea></body></html>";
        let tokens = extract(ExtractionStrategy::Textarea, markup);
        // 999.1.1.1 is lexically a candidate; rejecting it is the
        // validator's job, not the extractor's.
        assert_eq!(tokens, vec!["5.6.7.8", "999.1.1.1"]);
    }

    #[test]
    fn textarea_prefers_class_qualified_container() {
        let markup = r#"
            <html><body>
                <textarea>1.1.1.1</textarea>
                <textarea class="form-control">2.2.2.2</textarea>
            </body></html>
        "#;
        let tokens = extract(ExtractionStrategy::Textarea, markup);
        assert_eq!(tokens, vec!["2.2.2.2"]);
    }

    #[test]
    fn textarea_falls_back_to_bare_tag() {
        let markup = "<html><body><textarea>3.3.3.3</textarea></body></html>";
        let tokens = extract(ExtractionStrategy::Textarea, markup);
        assert_eq!(tokens, vec!["3.3.3.3"]);
    }

    #[test]
    fn missing_textarea_yields_empty() {
        let markup = "<html><body><p>4.4.4.4</p></body></html>";
        assert!(extract(ExtractionStrategy::Textarea, markup).is_empty());
    }

    #[test]
    fn list_items_are_the_fallback_structure() {
        let markup = r#"
            <html><body><ul>
                <li>endpoint 10.0.0.1</li>
                <li>nothing here</li>
                <li>10.0.0.2 and 10.0.0.3</li>
            </ul></body></html>
        "#;
        let tokens = extract(ExtractionStrategy::ListItem, markup);
        assert_eq!(tokens, vec!["10.0.0.1", "10.0.0.2", "10.0.0.3"]);
    }

    #[test]
    fn markup_inside_rows_is_ignored() {
        let markup = "<table><tr><td><b>1.2</b>.3.4</td></tr></table>";
        // Visible text of the row is "1.2.3.4" once tags are stripped.
        let tokens = extract(ExtractionStrategy::Table, markup);
        assert_eq!(tokens, vec!["1.2.3.4"]);
    }

    #[test]
    fn duplicates_are_preserved_at_this_layer() {
        let markup = "<ul><li>8.8.8.8</li><li>8.8.8.8</li></ul>";
        let tokens = extract(ExtractionStrategy::ListItem, markup);
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn known_urls_map_to_their_strategies() {
        assert_eq!(
            strategy_for_url("https://cf.vvhan.com/"),
            ExtractionStrategy::Textarea
        );
        assert_eq!(
            strategy_for_url("https://api.uouin.com/cloudflare.html"),
            ExtractionStrategy::Table
        );
        assert_eq!(
            strategy_for_url("https://ip.164746.xyz"),
            ExtractionStrategy::Table
        );
        assert_eq!(
            strategy_for_url("https://somewhere-else.example"),
            ExtractionStrategy::ListItem
        );
    }
}
