use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::keys;
use crate::store::{StorageBackend, Store};

/// Mark the namespace as initialized. Running it again is a no-op.
pub fn run<B: StorageBackend>(store: &mut Store<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if is_initialized(store)? {
        result.add_message(CmdMessage::info("Already initialized."));
        return Ok(result);
    }

    store.backend().set_item(keys::INITIALIZED, "true")?;
    result.add_message(CmdMessage::success("Initialized."));
    Ok(result)
}

pub fn is_initialized<B: StorageBackend>(store: &Store<B>) -> Result<bool> {
    Ok(store.backend().get_item(keys::INITIALIZED)?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_init_sets_flag_once() {
        let mut store = InMemoryStore::new();
        assert!(!is_initialized(&store).unwrap());

        let first = run(&mut store).unwrap();
        assert!(first.has_level(MessageLevel::Success));
        assert!(is_initialized(&store).unwrap());

        let second = run(&mut store).unwrap();
        assert_eq!(second.messages[0].content, "Already initialized.");
    }
}
