//! One fetch cycle from the command line

use brewlog_core::render::render_view;
use brewlog_core::view::BeerView;
use brewlog_engine::{load_history, trigger_fetch};

use super::{CommandResult, GlobalArgs};

/// Fetch failures are reported on the outcome line, not as an exit code
pub fn execute(global: &GlobalArgs) -> CommandResult {
    let source = global.http_source()?;
    let store = global.open_store_optional();
    let mut view = BeerView::new();

    if let Some(store) = &store {
        if let Err(e) = load_history(store, &mut view) {
            eprintln!("Could not load history: {}", e);
        }
    }

    let outcome = trigger_fetch(&source, store.as_ref(), &mut view);

    println!("{}", outcome);
    println!();
    print!("{}", render_view(&view));
    Ok(())
}
