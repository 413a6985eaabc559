//! Show one recorded beer

use brewlog_core::model::RecordId;
use brewlog_core::render::render_detail;
use brewlog_core::view::BeerView;
use brewlog_engine::load_history;
use brewlog_store::HistoryStore;
use clap::Args;

use super::{CommandResult, GlobalArgs};

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Record id as printed by `history`
    #[arg(long)]
    pub id: i64,
}

pub fn execute(args: ShowArgs, global: &GlobalArgs) -> CommandResult {
    let store = HistoryStore::open(&global.db)?;
    let mut view = BeerView::new();
    load_history(&store, &mut view)?;

    let detail = view.select_by_id(RecordId(args.id))?;
    print!("{}", render_detail(detail));
    Ok(())
}
