use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use ratatui::widgets::ListState;
use std::collections::HashSet;

/// State of the object-finder popup: a fuzzy query over the scene roster and
/// the set of names the user has picked for the next host selection.
#[derive(Default)]
pub struct FinderState {
    pub list_state: ListState,
    pub query: String,
    pub filtered_objects: Vec<String>,
    pub all_objects: Vec<String>,
    pub picked: HashSet<String>,
    pub matcher: SkimMatcherV2,
}

impl FinderState {
    /// Open over the scene roster, seeding the picks from the host's current
    /// selection so accepting without changes is a no-op.
    pub fn open(&mut self, objects: Vec<String>, current_selection: &[String]) {
        self.all_objects = objects;
        self.picked = current_selection.iter().cloned().collect();
        self.query.clear();
        self.refilter();
    }

    pub fn input_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn backspace(&mut self) {
        if !self.query.is_empty() {
            self.query.pop();
            self.refilter();
        }
    }

    pub fn select_next(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= self.filtered_objects.len().saturating_sub(1) {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.filtered_objects.len().saturating_sub(1)
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Toggle the highlighted object in and out of the pick set.
    pub fn toggle_picked(&mut self) {
        if let Some(index) = self.list_state.selected() {
            if let Some(name) = self.filtered_objects.get(index) {
                if !self.picked.remove(name) {
                    self.picked.insert(name.clone());
                }
            }
        }
    }

    /// The picks in scene order, ready for `SceneHost::set_selection`.
    pub fn picked_in_scene_order(&self) -> Vec<String> {
        self.all_objects
            .iter()
            .filter(|name| self.picked.contains(*name))
            .cloned()
            .collect()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.all_objects.clear();
        self.filtered_objects.clear();
        self.picked.clear();
        self.list_state.select(None);
    }

    fn refilter(&mut self) {
        if self.query.is_empty() {
            self.filtered_objects = self.all_objects.clone();
        } else {
            let mut matches: Vec<(String, i64)> = self
                .all_objects
                .iter()
                .filter_map(|name| {
                    self.matcher
                        .fuzzy_match(name, &self.query)
                        .map(|score| (name.clone(), score))
                })
                .collect();
            matches.sort_by(|a, b| b.1.cmp(&a.1));
            self.filtered_objects = matches.into_iter().map(|(name, _)| name).collect();
        }

        match self.list_state.selected() {
            Some(selected) if selected < self.filtered_objects.len() => {}
            _ if self.filtered_objects.is_empty() => self.list_state.select(None),
            _ => self.list_state.select(Some(0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn open_finder() -> FinderState {
        let mut state = FinderState::default();
        state.open(
            names(&["arm_L_ctrl", "arm_R_ctrl", "leg_L_ctrl", "camera1"]),
            &names(&["camera1"]),
        );
        state
    }

    #[test]
    fn test_open_seeds_picks_from_selection() {
        let state = open_finder();
        assert_eq!(state.filtered_objects.len(), 4);
        assert!(state.picked.contains("camera1"));
        assert_eq!(state.list_state.selected(), Some(0));
    }

    #[test]
    fn test_query_filters_fuzzily() {
        let mut state = open_finder();
        for c in "armL".chars() {
            state.input_char(c);
        }
        assert!(state
            .filtered_objects
            .contains(&"arm_L_ctrl".to_string()));
        assert!(!state.filtered_objects.contains(&"camera1".to_string()));

        state.backspace();
        state.backspace();
        state.backspace();
        state.backspace();
        assert_eq!(state.filtered_objects.len(), 4);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut state = open_finder();
        state.select_previous();
        assert_eq!(state.list_state.selected(), Some(3));
        state.select_next();
        assert_eq!(state.list_state.selected(), Some(0));
    }

    #[test]
    fn test_toggle_picked() {
        let mut state = open_finder();
        state.toggle_picked();
        assert!(state.picked.contains("arm_L_ctrl"));
        state.toggle_picked();
        assert!(!state.picked.contains("arm_L_ctrl"));
    }

    #[test]
    fn test_picks_come_back_in_scene_order() {
        let mut state = open_finder();
        // Pick leg_L_ctrl then arm_L_ctrl; scene order must win.
        state.list_state.select(Some(2));
        state.toggle_picked();
        state.list_state.select(Some(0));
        state.toggle_picked();
        assert_eq!(
            state.picked_in_scene_order(),
            names(&["arm_L_ctrl", "leg_L_ctrl", "camera1"])
        );
    }
}
