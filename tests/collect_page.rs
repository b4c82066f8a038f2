// tests/collect_page.rs
//
// Listing page extraction and the collect run, against a saved page.
//
use std::fs;
use std::path::PathBuf;

use dex_sheet::collect::parse_records;
use dex_sheet::config::CollectOptions;
use dex_sheet::core::DocumentSource;
use dex_sheet::runner::run_collect;
use dex_sheet::store::load_records;
use dex_sheet::{Record, Result, SheetError};

const PAGE: &str = include_str!("fixtures/national.html");

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("dex_sheet_collect_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

struct FixturePage(&'static str);
impl DocumentSource for FixturePage {
    fn fetch_document(&self, _url: &str) -> Result<String> {
        Ok(self.0.to_string())
    }
}

struct Unavailable;
impl DocumentSource for Unavailable {
    fn fetch_document(&self, url: &str) -> Result<String> {
        Err(SheetError::Status { url: url.to_string(), status: 503 })
    }
}

#[test]
fn extracts_cards_in_document_order() {
    let recs = parse_records(PAGE).unwrap();
    assert_eq!(
        recs,
        vec![
            Record::new(
                Some(1),
                "Bulbasaur",
                Some("https://img.pokemondb.net/sprites/scarlet-violet/icon/bulbasaur.png".into()),
            ),
            Record::new(
                Some(29),
                "Nidoran♀",
                Some("https://img.pokemondb.net/sprites/scarlet-violet/icon/nidoran-f.png".into()),
            ),
            Record::new(Some(122), "Mr. Mime", None),
            Record::new(None, "MissingNo", Some("https://img.pokemondb.net/sprites/missingno.png".into())),
        ]
    );
}

#[test]
fn collect_writes_pretty_json() {
    let dir = tmp_dir("ok");
    let opts = CollectOptions { out_path: dir.join("pokemon_data.json"), ..CollectOptions::default() };

    let summary = run_collect(&opts, &FixturePage(PAGE), None).unwrap();
    assert_eq!(summary.records, 4);
    assert_eq!(summary.files_written, vec![opts.out_path.clone()]);

    let text = fs::read_to_string(&opts.out_path).unwrap();
    assert!(text.starts_with("[\n  {\n    \"id\": 1,"));
    assert!(text.contains("\"image\": null"));
    assert!(text.contains("\"id\": null"));

    let back = load_records(&opts.out_path).unwrap();
    assert_eq!(back, parse_records(PAGE).unwrap());
}

#[test]
fn collect_overwrites_previous_data() {
    let dir = tmp_dir("overwrite");
    let opts = CollectOptions { out_path: dir.join("pokemon_data.json"), ..CollectOptions::default() };
    fs::write(&opts.out_path, "[{\"id\": 999, \"name\": \"Stale\", \"image\": null}]").unwrap();

    run_collect(&opts, &FixturePage(PAGE), None).unwrap();
    let back = load_records(&opts.out_path).unwrap();
    assert_eq!(back.len(), 4);
    assert!(back.iter().all(|r| r.name != "Stale"));
}

#[test]
fn failed_fetch_writes_nothing() {
    let dir = tmp_dir("fail");
    let opts = CollectOptions { out_path: dir.join("pokemon_data.json"), ..CollectOptions::default() };

    let err = run_collect(&opts, &Unavailable, None).unwrap_err();
    assert!(matches!(err, SheetError::Status { status: 503, .. }));
    assert!(err.to_string().contains("pokemondb.net/pokedex/national"));
    assert!(!opts.out_path.exists());
}
