//! In-memory record store: the live records plus the seed snapshot they were loaded from.

use crate::error::StoreError;
use serde_json::{Map, Value};

/// One row of the dataset. Keys keep the order they were inserted in.
pub type Record = Map<String, Value>;

pub const ID_FIELD: &str = "id";
pub const NAME_FIELD: &str = "name";

/// Width of the zero-padded decimal ids handed out by [`RecordStore::append`].
const ID_WIDTH: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    seed: Vec<Record>,
}

impl RecordStore {
    /// Build a store whose live records start as a copy of `seed`.
    pub fn new(seed: Vec<Record>) -> Self {
        Self {
            records: seed.clone(),
            seed,
        }
    }

    pub fn get_all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn seed_len(&self) -> usize {
        self.seed.len()
    }

    /// Exact string match on `id`.
    pub fn get_by_id(&self, id: &str) -> Option<&Record> {
        self.records
            .iter()
            .find(|r| r.get(ID_FIELD).and_then(Value::as_str) == Some(id))
    }

    /// Records whose numeric id lies in `[low, high]`. Bounds are swapped when given out of order.
    pub fn get_by_range(&self, low: i64, high: i64) -> Vec<Record> {
        let (low, high) = if low > high { (high, low) } else { (low, high) };
        self.records
            .iter()
            .filter(|r| {
                numeric_id(r)
                    .map(|n| n >= low && n <= high)
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }

    /// Field names of the first record, or `None` when the store is empty.
    pub fn property_names(&self) -> Option<Vec<String>> {
        self.records.first().map(|r| r.keys().cloned().collect())
    }

    /// The id the next appended record will receive.
    pub fn next_id(&self) -> String {
        let max = self
            .records
            .iter()
            .filter_map(|r| match r.get(ID_FIELD) {
                None | Some(Value::Null) => Some(0),
                Some(Value::String(s)) if s.is_empty() => Some(0),
                Some(Value::String(s)) => parse_int_prefix(s),
                Some(Value::Number(n)) => n.as_i64(),
                Some(_) => None,
            })
            .max()
            .unwrap_or(0)
            .max(0);
        format!("{:0width$}", max.saturating_add(1), width = ID_WIDTH)
    }

    /// Append a record built from `fields` under a freshly derived id.
    ///
    /// `name` must be present and truthy. Any `id` in `fields` is discarded.
    pub fn append(&mut self, fields: Record) -> Result<Record, StoreError> {
        if !fields.get(NAME_FIELD).map(is_truthy).unwrap_or(false) {
            return Err(StoreError::Validation(
                "Invalid input: name is required".into(),
            ));
        }
        let mut record = Record::new();
        record.insert(ID_FIELD.into(), Value::String(self.next_id()));
        for (k, v) in fields {
            if k != ID_FIELD {
                record.insert(k, v);
            }
        }
        self.records.push(record.clone());
        Ok(record)
    }

    /// Pop the last record by position (not by id).
    pub fn remove_last(&mut self) -> Result<Record, StoreError> {
        self.records.pop().ok_or(StoreError::Empty)
    }

    /// Discard every mutation and return to the seed snapshot.
    pub fn reset(&mut self) {
        self.records = self.seed.clone();
    }
}

/// Numeric value of a record's id, read with the same leading-integer rule as range bounds and `next_id`.
pub fn numeric_id(record: &Record) -> Option<i64> {
    match record.get(ID_FIELD)? {
        Value::String(s) => parse_int_prefix(s),
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
}

/// Leading-integer parse: optional whitespace and sign, then decimal digits; trailing text is ignored.
/// Returns `None` when no digit is found. Values beyond `i64` saturate at `i64::MAX` / `i64::MIN`.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let n = rest.as_bytes()[..digits_end].iter().fold(0i64, |acc, b| {
        let d = i64::from(*b - b'0');
        let acc = acc.saturating_mul(10);
        if negative {
            acc.saturating_sub(d)
        } else {
            acc.saturating_add(d)
        }
    });
    Some(n)
}

/// Render a field for human-readable messages: strings without quotes, everything else as JSON.
pub fn display_value(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rec(v: Value) -> Record {
        match v {
            Value::Object(m) => m,
            _ => panic!("test record must be an object"),
        }
    }

    fn seeded(n: usize) -> RecordStore {
        let seed = (1..=n)
            .map(|i| rec(json!({ "id": format!("{:03}", i), "name": format!("Country {}", i), "birth_rate_per_1000": "12,5" })))
            .collect();
        RecordStore::new(seed)
    }

    fn ids(records: &[Record]) -> Vec<&str> {
        records
            .iter()
            .map(|r| r.get(ID_FIELD).and_then(Value::as_str).unwrap())
            .collect()
    }

    #[test]
    fn get_by_id_finds_every_record() {
        let store = seeded(5);
        for r in store.get_all() {
            let id = r.get(ID_FIELD).and_then(Value::as_str).unwrap();
            assert_eq!(store.get_by_id(id), Some(r));
        }
        assert!(store.get_by_id("6").is_none());
        assert!(store.get_by_id("1").is_none(), "match is on the exact string");
    }

    #[test]
    fn range_is_inclusive_and_order_insensitive() {
        let store = seeded(5);
        assert_eq!(ids(&store.get_by_range(2, 4)), vec!["002", "003", "004"]);
        assert_eq!(ids(&store.get_by_range(4, 2)), vec!["002", "003", "004"]);
        assert_eq!(ids(&store.get_by_range(3, 3)), vec!["003"]);
        assert!(store.get_by_range(6, 9).is_empty());
    }

    #[test]
    fn range_compares_numerically() {
        let store = seeded(12);
        assert_eq!(ids(&store.get_by_range(9, 10)), vec!["009", "010"]);
    }

    #[test]
    fn property_names_follow_first_record() {
        let mut store = RecordStore::new(vec![
            rec(json!({ "id": "001", "name": "A", "x": "1" })),
            rec(json!({ "id": "002", "name": "B", "y": "2", "z": "3" })),
        ]);
        assert_eq!(store.property_names().unwrap(), vec!["id", "name", "x"]);
        store.remove_last().unwrap();
        store.remove_last().unwrap();
        assert!(store.property_names().is_none());
    }

    #[test]
    fn append_derives_next_id() {
        let mut store = seeded(9);
        let added = store.append(rec(json!({ "name": "X" }))).unwrap();
        assert_eq!(added.get(ID_FIELD), Some(&json!("010")));
        assert_eq!(store.get_by_id("010"), Some(&added));
        assert_eq!(store.len(), 10);
    }

    #[test]
    fn append_on_empty_store_starts_at_001() {
        let mut store = RecordStore::default();
        let added = store.append(rec(json!({ "name": "First" }))).unwrap();
        assert_eq!(added.get(ID_FIELD), Some(&json!("001")));
    }

    #[test]
    fn append_uses_max_id_not_length() {
        let mut store = RecordStore::new(vec![
            rec(json!({ "id": "007", "name": "A" })),
            rec(json!({ "id": "002", "name": "B" })),
        ]);
        let added = store.append(rec(json!({ "name": "C" }))).unwrap();
        assert_eq!(added.get(ID_FIELD), Some(&json!("008")));
    }

    #[test]
    fn append_ignores_client_id_and_puts_id_first() {
        let mut store = seeded(3);
        let added = store
            .append(rec(json!({ "name": "X", "id": "001", "area": 12 })))
            .unwrap();
        assert_eq!(added.keys().collect::<Vec<_>>(), vec!["id", "name", "area"]);
        assert_eq!(added.get(ID_FIELD), Some(&json!("004")));
        assert_eq!(added.get("area"), Some(&json!(12)));
    }

    #[test]
    fn append_without_name_is_rejected() {
        let mut store = seeded(3);
        for body in [json!({}), json!({ "name": "" }), json!({ "name": null }), json!({ "capital": "X" })] {
            let err = store.append(rec(body)).unwrap_err();
            assert!(matches!(err, StoreError::Validation(_)));
        }
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn remove_last_is_positional() {
        let mut store = RecordStore::new(vec![
            rec(json!({ "id": "005", "name": "High" })),
            rec(json!({ "id": "001", "name": "Low" })),
        ]);
        let removed = store.remove_last().unwrap();
        assert_eq!(removed.get(NAME_FIELD), Some(&json!("Low")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_last_on_empty_store() {
        let mut store = RecordStore::default();
        assert_eq!(store.remove_last(), Err(StoreError::Empty));
    }

    #[test]
    fn reset_restores_seed() {
        let mut store = seeded(3);
        let before = store.get_all().to_vec();
        store.remove_last().unwrap();
        store.remove_last().unwrap();
        store.append(rec(json!({ "name": "X" }))).unwrap();
        store.reset();
        assert_eq!(store.get_all(), before.as_slice());
        assert_eq!(store.seed_len(), 3);
    }

    #[test]
    fn worked_example() {
        let mut store = seeded(3);
        let added = store.append(rec(json!({ "name": "X" }))).unwrap();
        assert_eq!(added.get(ID_FIELD), Some(&json!("004")));
        assert_eq!(ids(&store.get_by_range(2, 1)), vec!["001", "002"]);
        assert_eq!(ids(&store.get_by_range(3, 2)), vec!["002", "003"]);
        let removed = store.remove_last().unwrap();
        assert_eq!(removed.get(ID_FIELD), Some(&json!("004")));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn parse_int_prefix_matches_lenient_parsing() {
        assert_eq!(parse_int_prefix("12"), Some(12));
        assert_eq!(parse_int_prefix("  007"), Some(7));
        assert_eq!(parse_int_prefix("12abc"), Some(12));
        assert_eq!(parse_int_prefix("-3"), Some(-3));
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("-"), None);
    }

    #[test]
    fn parse_int_prefix_saturates_on_overflow() {
        assert_eq!(parse_int_prefix("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int_prefix("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(parse_int_prefix("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_int_prefix("-9223372036854775808"), Some(i64::MIN));
    }

    #[test]
    fn range_with_huge_upper_bound_reaches_every_record() {
        let store = seeded(3);
        let high = parse_int_prefix("99999999999999999999").unwrap();
        assert_eq!(ids(&store.get_by_range(1, high)), vec!["001", "002", "003"]);
    }

    #[test]
    fn next_id_ignores_negative_ids() {
        let mut store = RecordStore::new(vec![rec(json!({ "id": "-5", "name": "Odd" }))]);
        assert_eq!(store.next_id(), "001");
        let added = store.append(rec(json!({ "name": "X" }))).unwrap();
        assert_eq!(added.get(ID_FIELD), Some(&json!("001")));
    }

    #[test]
    fn range_and_next_id_read_ids_alike() {
        let store = RecordStore::new(vec![
            rec(json!({ "id": "012a", "name": "Suffixed" })),
            rec(json!({ "id": "abc", "name": "Opaque" })),
        ]);
        assert_eq!(ids(&store.get_by_range(12, 12)), vec!["012a"]);
        assert_eq!(store.next_id(), "013");
    }
}
