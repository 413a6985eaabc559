//! List recorded beers

use brewlog_core::render::render_history;
use brewlog_store::HistoryStore;

use super::{CommandResult, GlobalArgs};

pub fn execute(global: &GlobalArgs) -> CommandResult {
    let store = HistoryStore::open(&global.db)?;
    let records = store.list_all()?;
    print!("{}", render_history(&records));
    Ok(())
}
