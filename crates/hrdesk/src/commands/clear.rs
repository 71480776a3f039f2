use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{StorageBackend, Store};

/// Delete every key, backups included. Does nothing unless `confirmed`.
pub fn run<B: StorageBackend>(store: &mut Store<B>, confirmed: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !confirmed {
        result.add_message(CmdMessage::warning(
            "This will delete all data. Re-run with confirmation to proceed.",
        ));
        return Ok(result);
    }

    let count = store.keys()?.len();
    store.clear_all()?;
    result.add_message(CmdMessage::success(format!(
        "All data has been cleared ({} keys).",
        count
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_clear_requires_confirmation() {
        let mut fixture = StoreFixture::new().with_employees(2);
        let res = run(&mut fixture.store, false).unwrap();

        assert!(res.has_level(MessageLevel::Warning));
        assert_eq!(fixture.store.keys().unwrap(), vec!["employees"]);
    }

    #[test]
    fn test_clear_wipes_everything() {
        let mut fixture = StoreFixture::new()
            .with_employees(2)
            .with_user("admin", "HR Manager");
        let res = run(&mut fixture.store, true).unwrap();

        assert!(res.messages[0].content.contains("2 keys"));
        assert!(fixture.store.keys().unwrap().is_empty());
        assert!(fixture.store.backend().keys().unwrap().is_empty());
    }
}
