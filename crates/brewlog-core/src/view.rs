//! In-memory projections bound to the screen
//!
//! `BeerView` holds the current-detail view and the history list. Neither
//! has an identity of its own: the history is always replaced wholesale with
//! the result of a fresh `list_all`, never patched in place.

use crate::errors::{BeerError, Result};
use crate::model::{Beer, BeerRecord, CurrentDetail, RecordId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeerView {
    current: Option<CurrentDetail>,
    history: Vec<BeerRecord>,
}

impl BeerView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&CurrentDetail> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &[BeerRecord] {
        &self.history
    }

    /// Show a freshly fetched beer, persisted or not
    pub fn show_fetched(&mut self, beer: Beer) {
        self.current = Some(CurrentDetail::Fetched(beer));
    }

    /// Replace the history list with a freshly read snapshot of the table
    pub fn replace_history(&mut self, records: Vec<BeerRecord>) {
        self.history = records;
    }

    /// Make a historical entry the current detail view
    ///
    /// Pure projection: no network or storage access.
    pub fn select_from_history(&mut self, record: &BeerRecord) {
        self.current = Some(CurrentDetail::Recorded(record.clone()));
    }

    /// Select a history entry by id from the already loaded list
    ///
    /// Leaves the view untouched when the id is not in the list.
    pub fn select_by_id(&mut self, id: RecordId) -> Result<&CurrentDetail> {
        let record = self
            .history
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(BeerError::RecordNotFound { record_id: id })?;
        Ok(self.current.insert(CurrentDetail::Recorded(record)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, brand: &str) -> BeerRecord {
        BeerRecord::new(RecordId(id), Beer::new(brand, "Name", "Style"))
    }

    #[test]
    fn test_new_view_is_empty() {
        let view = BeerView::new();
        assert!(view.current().is_none());
        assert!(view.history().is_empty());
    }

    #[test]
    fn test_show_fetched_leaves_history_alone() {
        let mut view = BeerView::new();
        view.replace_history(vec![record(1, "A")]);

        view.show_fetched(Beer::new("B", "n", "s"));

        assert_eq!(
            view.current(),
            Some(&CurrentDetail::Fetched(Beer::new("B", "n", "s")))
        );
        assert_eq!(view.history().len(), 1);
    }

    #[test]
    fn test_select_from_history_sets_exact_record() {
        let mut view = BeerView::new();
        let history = vec![record(1, "A"), record(2, "B")];
        view.replace_history(history.clone());

        view.select_from_history(&history[0]);

        let current = view.current().unwrap();
        assert_eq!(current.record_id(), Some(RecordId(1)));
        assert_eq!(current.beer(), &history[0].beer);
        assert_eq!(view.history(), history.as_slice());
    }

    #[test]
    fn test_select_by_id_unknown_leaves_view_untouched() {
        let mut view = BeerView::new();
        view.replace_history(vec![record(1, "A")]);
        view.show_fetched(Beer::new("X", "Y", "Z"));
        let before = view.clone();

        let err = view.select_by_id(RecordId(42)).unwrap_err();

        assert_eq!(
            err,
            BeerError::RecordNotFound {
                record_id: RecordId(42)
            }
        );
        assert_eq!(view, before);
    }

    #[test]
    fn test_select_by_id_known() {
        let mut view = BeerView::new();
        view.replace_history(vec![record(1, "A"), record(2, "B")]);

        let current = view.select_by_id(RecordId(2)).unwrap();
        assert_eq!(current.beer().brand, "B");
    }
}
