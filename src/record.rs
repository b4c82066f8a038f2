// src/record.rs
use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize};

/// One entity scraped from the listing page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// National dex number. A negative, fractional or out-of-range number in
    /// the data file fails deserialization, which rejects the whole file.
    pub id: Option<u32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

fn null_as_empty<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(d).map(Option::unwrap_or_default)
}

impl Record {
    pub fn new(id: Option<u32>, name: impl Into<String>, image: Option<String>) -> Self {
        Self { id, name: name.into(), image }
    }
}

/// Ascending id, records without an id after all numbered ones.
pub fn by_id(a: &Record, b: &Record) -> Ordering {
    match (a.id, b.id) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort, so equal and missing ids keep their scrape order.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by(by_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: Option<u32>, name: &str) -> Record {
        Record::new(id, name, None)
    }

    #[test]
    fn sorts_ascending_with_missing_ids_last() {
        let mut v = vec![rec(None, "a"), rec(Some(25), "Pikachu"), rec(Some(1), "Bulbasaur"), rec(None, "b")];
        sort_records(&mut v);
        let names: Vec<&str> = v.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Bulbasaur", "Pikachu", "a", "b"]);
    }

    #[test]
    fn equal_ids_keep_input_order() {
        // Regional forms share a number on the listing page
        let mut v = vec![rec(Some(19), "Rattata"), rec(Some(1), "Bulbasaur"), rec(Some(19), "Rattata Alolan")];
        sort_records(&mut v);
        let names: Vec<&str> = v.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Bulbasaur", "Rattata", "Rattata Alolan"]);
    }

    #[test]
    fn null_fields_deserialize() {
        let r: Record = serde_json::from_str(r#"{"id":null,"name":null,"image":null}"#).unwrap();
        assert_eq!(r, Record::default());

        let r: Record = serde_json::from_str(r#"{"id":7}"#).unwrap();
        assert_eq!(r.id, Some(7));
        assert!(r.name.is_empty());
        assert!(r.image.is_none());
    }

    #[test]
    fn unrepresentable_ids_reject_the_file() {
        for id in ["-1", "1.5", "4294967296"] {
            let json = format!(r#"[{{"id":1,"name":"Bulbasaur"}},{{"id":{id},"name":"Bad"}}]"#);
            assert!(serde_json::from_str::<Vec<Record>>(&json).is_err(), "id {id}");
        }
    }
}
