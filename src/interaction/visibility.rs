/// How the active region is picked when several are visible at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivationPolicy {
    /// Earliest region in document order wins, regardless of scroll direction.
    #[default]
    FirstVisible,
    /// The region that most recently entered the viewport wins.
    LastEntered,
}

/// One flag per tracked region, in document order.
#[derive(Clone, Debug)]
pub struct VisibilityState {
    visible: Vec<bool>,
    entered_at: Vec<u64>,
    tick: u64,
    policy: ActivationPolicy,
}

impl VisibilityState {
    pub fn new(regions: usize, policy: ActivationPolicy) -> Self {
        Self {
            visible: vec![false; regions],
            entered_at: vec![0; regions],
            tick: 0,
            policy,
        }
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[cfg(test)]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Records a transition and reports whether anything changed.
    ///
    /// Unknown indices and repeats of the current value are no-ops.
    pub fn set(&mut self, index: usize, visible: bool) -> bool {
        let Some(slot) = self.visible.get_mut(index) else {
            return false;
        };
        if *slot == visible {
            return false;
        }
        *slot = visible;
        if visible {
            self.tick += 1;
            self.entered_at[index] = self.tick;
        }
        true
    }

    pub fn clear(&mut self) {
        self.visible.iter_mut().for_each(|v| *v = false);
    }

    pub fn active_index(&self) -> Option<usize> {
        let mut visible = self
            .visible
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(|(i, _)| i);
        match self.policy {
            ActivationPolicy::FirstVisible => visible.next(),
            ActivationPolicy::LastEntered => visible.max_by_key(|&i| self.entered_at[i]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_has_no_active_region() {
        let state = VisibilityState::new(4, ActivationPolicy::FirstVisible);
        assert_eq!(state.active_index(), None);
        assert_eq!(VisibilityState::new(0, ActivationPolicy::FirstVisible).active_index(), None);
    }

    #[test]
    fn first_visible_prefers_document_order() {
        let mut state = VisibilityState::new(4, ActivationPolicy::FirstVisible);
        state.set(2, true);
        assert_eq!(state.active_index(), Some(2));
        state.set(3, true);
        assert_eq!(state.active_index(), Some(2));
        // Scrolling back up: region 1 enters after 2 and 3 but still wins.
        state.set(1, true);
        assert_eq!(state.active_index(), Some(1));
        state.set(1, false);
        state.set(2, false);
        assert_eq!(state.active_index(), Some(3));
        state.set(3, false);
        assert_eq!(state.active_index(), None);
    }

    #[test]
    fn last_entered_follows_scroll_direction() {
        let mut state = VisibilityState::new(3, ActivationPolicy::LastEntered);
        state.set(0, true);
        state.set(1, true);
        assert_eq!(state.active_index(), Some(1));
        state.set(2, true);
        assert_eq!(state.active_index(), Some(2));
        state.set(2, false);
        assert_eq!(state.active_index(), Some(1));
        // Re-entering refreshes recency.
        state.set(0, false);
        state.set(0, true);
        assert_eq!(state.active_index(), Some(0));
    }

    #[test]
    fn repeated_and_out_of_range_events_are_ignored() {
        let mut state = VisibilityState::new(2, ActivationPolicy::FirstVisible);
        assert!(state.set(1, true));
        assert!(!state.set(1, true));
        assert!(!state.set(5, true));
        assert!(!state.set(0, false));
        assert_eq!(state.active_index(), Some(1));
        assert!(!state.is_visible(5));
    }

    #[test]
    fn scripted_sequence_matches_lowest_visible() {
        let script: &[(usize, bool)] = &[
            (0, true),
            (1, true),
            (0, false),
            (2, true),
            (1, false),
            (3, true),
            (2, false),
            (0, true),
            (3, false),
            (0, false),
        ];
        let mut state = VisibilityState::new(4, ActivationPolicy::FirstVisible);
        let mut model = [false; 4];
        for &(index, visible) in script {
            state.set(index, visible);
            model[index] = visible;
            let expected = model.iter().position(|v| *v);
            assert_eq!(state.active_index(), expected);
        }
    }
}
