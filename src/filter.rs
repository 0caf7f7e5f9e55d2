//! User-controlled filter state: the date range and the selected event names.
//!
//! Any combination of bounds and selection is valid input to the projector.
//! Nothing here validates one bound against the other.

use chrono::NaiveDate;

use crate::domain::{DateBound, DateRange};

/// Selected event names. Insertion order is kept for rendering; membership is
/// all that matters for filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedEvents {
    names: Vec<String>,
}

impl SelectedEvents {
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SelectedEvents {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selected = SelectedEvents::default();
        for name in iter {
            let name = name.into();
            if !selected.contains(&name) {
                selected.names.push(name);
            }
        }
        selected
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    range: DateRange,
    selected: SelectedEvents,
}

impl FilterState {
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            selected: SelectedEvents::default(),
        }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn selected(&self) -> &SelectedEvents {
        &self.selected
    }

    /// Replace exactly one bound, leaving the other untouched.
    pub fn set_date_bound(&mut self, which: DateBound, value: NaiveDate) {
        match which {
            DateBound::Start => self.range.start = value,
            DateBound::End => self.range.end = value,
        }
    }

    /// Remove `name` if selected, otherwise append it.
    pub fn toggle_event(&mut self, name: &str) {
        if let Some(pos) = self.selected.names.iter().position(|n| n == name) {
            self.selected.names.remove(pos);
        } else {
            self.selected.names.push(name.to_string());
        }
    }

    /// Reset the selection to exactly `names`, as happens when events arrive.
    pub fn select_all<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = names.into_iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn set_date_bound_replaces_only_one_side() {
        let mut state = FilterState::default();
        let end = state.range().end;

        state.set_date_bound(DateBound::Start, d(1995, 3, 1));
        assert_eq!(state.range().start, d(1995, 3, 1));
        assert_eq!(state.range().end, end);

        state.set_date_bound(DateBound::End, d(1990, 1, 1));
        assert_eq!(state.range().start, d(1995, 3, 1));
        assert_eq!(state.range().end, d(1990, 1, 1));
    }

    #[test]
    fn set_date_bound_does_not_clamp() {
        let mut state = FilterState::default();
        state.set_date_bound(DateBound::End, d(2050, 1, 1));
        assert_eq!(state.range().end, d(2050, 1, 1));
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut state = FilterState::default();
        state.toggle_event("Gulf War");
        assert!(state.selected().contains("Gulf War"));
        state.toggle_event("Gulf War");
        assert!(!state.selected().contains("Gulf War"));
    }

    #[test]
    fn toggle_appends_to_render_order() {
        let mut state = FilterState::default();
        state.select_all(["A", "B", "C"]);
        state.toggle_event("A");
        state.toggle_event("A");
        let order: Vec<&str> = state.selected().iter().collect();
        assert_eq!(order, vec!["B", "C", "A"]);
    }

    #[test]
    fn select_all_replaces_and_dedups() {
        let mut state = FilterState::default();
        state.toggle_event("Old");
        state.select_all(["A", "B", "A"]);
        assert_eq!(state.selected().len(), 2);
        assert!(!state.selected().contains("Old"));
    }

    #[quickcheck]
    fn double_toggle_restores_membership(initial: Vec<String>, name: String) -> bool {
        let mut state = FilterState::default();
        state.select_all(initial);
        let before: Vec<String> = {
            let mut v: Vec<String> = state.selected().iter().map(str::to_string).collect();
            v.sort();
            v
        };

        state.toggle_event(&name);
        state.toggle_event(&name);

        let mut after: Vec<String> = state.selected().iter().map(str::to_string).collect();
        after.sort();
        before == after
    }
}
