use super::mem_backend::MemBackend;
use super::Store;

pub type InMemoryStore = Store<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Store::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{keys, Employee, SessionUser};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_employees(mut self, count: usize) -> Self {
            for i in 0..count {
                let emp = Employee::new(
                    format!("EMP{:03}", i + 1),
                    format!("Employee {}", i + 1),
                    format!("employee{}@example.com", i + 1),
                    "ABCDE1234F",
                    "123412341234",
                );
                self.store.insert(keys::EMPLOYEES, emp).unwrap();
            }
            self
        }

        pub fn with_user(mut self, username: &str, role: &str) -> Self {
            self.store
                .save(keys::CURRENT_USER, &SessionUser::new(username, role))
                .unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use crate::model::{keys, Employee};

    #[test]
    fn test_fixture_with_employees() {
        let fixture = StoreFixture::new().with_employees(3);
        let all: Vec<Employee> = fixture.store.list(keys::EMPLOYEES).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[2].emp_code, "EMP003");
        assert_eq!(all[2].id, 3);
    }

    #[test]
    fn test_stores_are_isolated() {
        let a = StoreFixture::new().with_employees(2);
        let b = StoreFixture::new();
        assert_eq!(a.store.next_id(keys::EMPLOYEES).unwrap(), 3);
        assert_eq!(b.store.next_id(keys::EMPLOYEES).unwrap(), 1);
    }
}
