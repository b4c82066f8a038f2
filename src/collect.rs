// src/collect.rs
//
// Listing page -> records, in document order.
// Page shape (pokemondb national dex):
//   <div class="infocard">
//     <span class="infocard-lg-img"><a><img src="..."></a></span>
//     <span class="infocard-lg-data"><small>#0001</small> <a class="ent-name">Bulbasaur</a> ...</span>
//   </div>

use std::sync::LazyLock;

use log::info;
use regex::Regex;
use scraper::Html;

use crate::core::html::{attr_of, selector, text_of, trimmed_text_of};
use crate::core::net::DocumentSource;
use crate::error::Result;
use crate::record::Record;

static DEX_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#(\d+)").expect("valid id pattern"));

const CARD: &str = ".infocard";
const DATA: &str = ".infocard-lg-data";
const NAME: &str = ".ent-name";
const IMG: &str = ".infocard-lg-img img";

/// Leading `#<digits>` of the data blob. None when absent or out of range.
pub fn parse_dex_id(text: &str) -> Option<u32> {
    DEX_ID.captures(text.trim())?.get(1)?.as_str().parse().ok()
}

/// One pass over the document; every `.infocard` yields a record.
/// Names are trimmed but otherwise kept as the page spells them.
pub fn parse_records(html: &str) -> Result<Vec<Record>> {
    let doc = Html::parse_document(html);
    let card = selector(CARD)?;
    let data = selector(DATA)?;
    let name = selector(NAME)?;
    let img = selector(IMG)?;

    let records = doc
        .select(&card)
        .map(|el| Record {
            id: parse_dex_id(&text_of(el, &data)),
            name: trimmed_text_of(el, &name),
            image: attr_of(el, &img, "src"),
        })
        .collect();
    Ok(records)
}

/// Fetch `url` and extract. A failed fetch propagates before anything is parsed.
pub fn collect(source: &dyn DocumentSource, url: &str) -> Result<Vec<Record>> {
    info!("Fetching {url} ...");
    let html = source.fetch_document(url)?;
    let records = parse_records(&html)?;
    info!("Scraped {} Pokémon.", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dex_id_variants() {
        assert_eq!(parse_dex_id("#0001 Bulbasaur Grass · Poison"), Some(1));
        assert_eq!(parse_dex_id("  #025 Pikachu"), Some(25));
        assert_eq!(parse_dex_id("#1025"), Some(1025));
        assert_eq!(parse_dex_id("Bulbasaur #001"), None);
        assert_eq!(parse_dex_id("#"), None);
        assert_eq!(parse_dex_id(""), None);
        assert_eq!(parse_dex_id("#99999999999999"), None);
    }

    #[test]
    fn card_without_image_or_number() {
        let html = r#"<div class="infocard">
            <span class="infocard-lg-data"><a class="ent-name">MissingNo.</a></span>
        </div>"#;
        let recs = parse_records(html).unwrap();
        assert_eq!(recs, vec![Record::new(None, "MissingNo.", None)]);
    }

    #[test]
    fn name_is_trimmed_not_collapsed() {
        let html = r#"<div class="infocard">
            <span class="infocard-lg-data"><small>#0122</small>
              <a class="ent-name">  Mr.   Mime
              </a></span>
        </div>"#;
        let recs = parse_records(html).unwrap();
        assert_eq!(recs, vec![Record::new(Some(122), "Mr.   Mime", None)]);
    }

    #[test]
    fn empty_page_yields_nothing() {
        assert!(parse_records("<html><body><p>maintenance</p></body></html>").unwrap().is_empty());
    }
}
