use crate::error::{HrDeskError, Result};
use crate::model::keys;
use crate::store::{StorageBackend, Store};
use serde_json::Value;

/// Prefixed, zero-padded codes such as `EMP007`.
///
/// The next code is derived from the previous one only, so this assumes every
/// code in the collection came from the same sequence and in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSequence {
    prefix: String,
    width: usize,
}

impl CodeSequence {
    pub fn new(prefix: &str, width: usize) -> Self {
        Self {
            prefix: prefix.to_string(),
            width,
        }
    }

    pub fn employee() -> Self {
        Self::new("EMP", 3)
    }

    pub fn format(&self, n: u64) -> String {
        format!("{}{:0width$}", self.prefix, n, width = self.width)
    }

    /// Code following `last`; the first code when there is none.
    /// Padding is a minimum: `EMP999` is followed by `EMP1000`.
    pub fn next_after(&self, last: Option<&str>) -> Result<String> {
        let n = match last {
            None => 0,
            Some(code) => self.number_of(code)?,
        };
        let next = n.checked_add(1).ok_or_else(|| {
            HrDeskError::InvalidCode(format!("{} overflows", last.unwrap_or("")))
        })?;
        Ok(self.format(next))
    }

    fn number_of(&self, code: &str) -> Result<u64> {
        code.strip_prefix(self.prefix.as_str())
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
            .ok_or_else(|| {
                HrDeskError::InvalidCode(format!(
                    "'{}' is not a {}-prefixed code",
                    code, self.prefix
                ))
            })
    }
}

impl Default for CodeSequence {
    fn default() -> Self {
        Self::employee()
    }
}

/// Next id for a record of `collection`: `max(id) + 1`, or `1` when empty.
pub fn next_id<B: StorageBackend>(store: &Store<B>, collection: &str) -> Result<u64> {
    store.next_id(collection)
}

/// Next employee code, continuing from the last employee in the collection.
pub fn next_employee_code<B: StorageBackend>(
    store: &Store<B>,
    codes: &CodeSequence,
) -> Result<String> {
    let employees: Vec<Value> = store.load(keys::EMPLOYEES).unwrap_or_default();
    let last = employees
        .last()
        .map(|emp| {
            emp.get("empCode")
                .and_then(Value::as_str)
                .ok_or_else(|| HrDeskError::InvalidCode("last employee has no empCode".into()))
        })
        .transpose()?;
    codes.next_after(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use serde_json::json;

    #[test]
    fn test_next_after_none_starts_at_one() {
        assert_eq!(CodeSequence::employee().next_after(None).unwrap(), "EMP001");
    }

    #[test]
    fn test_next_after_increments_and_pads() {
        let seq = CodeSequence::employee();
        assert_eq!(seq.next_after(Some("EMP009")).unwrap(), "EMP010");
        assert_eq!(seq.next_after(Some("EMP099")).unwrap(), "EMP100");
        assert_eq!(seq.next_after(Some("EMP999")).unwrap(), "EMP1000");
    }

    #[test]
    fn test_next_after_rejects_foreign_codes() {
        let seq = CodeSequence::employee();
        assert!(matches!(
            seq.next_after(Some("STF001")),
            Err(HrDeskError::InvalidCode(_))
        ));
        assert!(seq.next_after(Some("EMP")).is_err());
        assert!(seq.next_after(Some("EMP-12")).is_err());
    }

    #[test]
    fn test_next_employee_code_empty_store() {
        let store = InMemoryStore::new();
        assert_eq!(
            next_employee_code(&store, &CodeSequence::employee()).unwrap(),
            "EMP001"
        );
    }

    #[test]
    fn test_next_employee_code_uses_last_element() {
        let fixture = StoreFixture::new().with_employees(4);
        assert_eq!(
            next_employee_code(&fixture.store, &CodeSequence::employee()).unwrap(),
            "EMP005"
        );
    }

    #[test]
    fn test_next_employee_code_is_positional_not_max() {
        let mut store = InMemoryStore::new();
        store
            .save(
                keys::EMPLOYEES,
                &json!([{"id": 1, "empCode": "EMP010"}, {"id": 2, "empCode": "EMP002"}]),
            )
            .unwrap();
        assert_eq!(
            next_employee_code(&store, &CodeSequence::employee()).unwrap(),
            "EMP003"
        );
    }

    #[test]
    fn test_next_employee_code_missing_field() {
        let mut store = InMemoryStore::new();
        store.save(keys::EMPLOYEES, &json!([{"id": 1}])).unwrap();
        assert!(next_employee_code(&store, &CodeSequence::employee()).is_err());
    }

    #[test]
    fn test_next_id_delegates_to_store() {
        let fixture = StoreFixture::new().with_employees(2);
        assert_eq!(next_id(&fixture.store, keys::EMPLOYEES).unwrap(), 3);
        assert_eq!(next_id(&fixture.store, "leaves").unwrap(), 1);
    }
}
