/*
 * Copyright 2025 Andrey Kutejko <andy128k@gmail.com>
 *
 * This program is free software; you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation; either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program; if not, see <http://www.gnu.org/licenses/>.
 *
 * For more details see the file COPYING.
 */

use std::cell::{Cell, RefCell};

/// Bounded list of visited entries, most recent first, with a cursor.
///
/// Index 0 is the newest entry. `back` moves towards older entries
/// (higher indices), `forward` towards newer ones.
pub struct History<T> {
    max: usize,
    is_locked: Cell<bool>,
    entries: RefCell<Vec<T>>,
    position: Cell<usize>,
}

impl<T: PartialEq + Clone> History<T> {
    pub fn new(max: usize) -> Self {
        Self {
            max,
            is_locked: Default::default(),
            entries: Default::default(),
            position: Default::default(),
        }
    }

    pub fn add(&self, item: T) {
        if self.is_locked() {
            return;
        }

        let mut entries = self.entries.borrow_mut();
        if let Some(position) = entries.iter().position(|i| *i == item) {
            // if the same value has been given before move it first in the list
            let item = entries.remove(position);
            entries.insert(0, item);
        } else {
            entries.insert(0, item);
        }
        // don't let the history get too long
        entries.truncate(self.max);
        self.position.set(0);
    }

    pub fn is_locked(&self) -> bool {
        self.is_locked.get()
    }

    pub fn lock(&self) {
        self.is_locked.set(true);
    }

    pub fn unlock(&self) {
        self.is_locked.set(false);
    }

    pub fn size(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn front(&self) -> Option<T> {
        self.entries.borrow().first().cloned()
    }

    /// Entry under the cursor.
    pub fn current(&self) -> Option<T> {
        self.entries.borrow().get(self.position.get()).cloned()
    }

    pub fn can_back(&self) -> bool {
        self.position.get() + 1 < self.entries.borrow().len()
    }

    pub fn can_forward(&self) -> bool {
        !self.entries.borrow().is_empty() && self.position.get() > 0
    }

    pub fn first(&self) -> Option<T> {
        let len = self.entries.borrow().len();
        if len == 0 {
            return None;
        }
        self.position.set(len - 1);
        self.current()
    }

    pub fn back(&self) -> Option<T> {
        if !self.can_back() {
            return None;
        }
        self.position.set(self.position.get() + 1);
        self.current()
    }

    pub fn forward(&self) -> Option<T> {
        if !self.can_forward() {
            return None;
        }
        self.position.set(self.position.get() - 1);
        self.current()
    }

    pub fn last(&self) -> Option<T> {
        if self.entries.borrow().is_empty() {
            return None;
        }
        self.position.set(0);
        self.current()
    }

    pub fn reverse(&self) {
        self.entries.borrow_mut().reverse();
        self.position.set(0);
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
        self.position.set(0);
    }

    pub fn export(&self) -> Vec<T> {
        self.entries.borrow().clone()
    }

    /// Replaces the entries with a previously exported list.
    pub fn import(&self, items: impl IntoIterator<Item = T>) {
        let mut entries = self.entries.borrow_mut();
        entries.clear();
        for item in items {
            if !entries.contains(&item) {
                entries.push(item);
            }
        }
        entries.truncate(self.max);
        self.position.set(0);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn history_of(max: usize, items: &[&str]) -> History<String> {
        let history = History::new(max);
        for item in items {
            history.add(item.to_string());
        }
        history
    }

    #[test]
    fn test_add_puts_entry_first() {
        let history = History::new(3);
        for item in ["a", "b", "c", "d", "e"] {
            history.add(item.to_string());
            assert_eq!(history.front().as_deref(), Some(item));
            assert_eq!(history.current().as_deref(), Some(item));
            assert!(history.size() <= 3);
        }
        assert_eq!(history.export(), vec!["e", "d", "c"]);
    }

    #[test]
    fn test_empty() {
        let history = History::<String>::new(10);
        assert!(history.is_empty());
        assert!(!history.can_back());
        assert!(!history.can_forward());
        assert_eq!(history.front(), None);
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), None);
        assert_eq!(history.first(), None);
        assert_eq!(history.last(), None);
    }

    #[test]
    fn test_single_entry() {
        let history = history_of(10, &["a"]);
        assert!(!history.can_back());
        assert!(!history.can_forward());
        assert_eq!(history.back(), None);
        assert_eq!(history.current().as_deref(), Some("a"));
    }

    #[test]
    fn test_back_and_forward() {
        let history = history_of(10, &["a", "b", "c"]);
        assert_eq!(history.front().as_deref(), Some("c"));

        assert_eq!(history.back().as_deref(), Some("b"));
        assert_eq!(history.back().as_deref(), Some("a"));
        assert!(!history.can_back());
        assert_eq!(history.back(), None);

        assert_eq!(history.forward().as_deref(), Some("b"));
        assert_eq!(history.forward().as_deref(), Some("c"));
        assert!(!history.can_forward());
        assert_eq!(history.forward(), None);
        assert_eq!(history.current().as_deref(), Some("c"));
    }

    #[test]
    fn test_first_and_last() {
        let history = history_of(10, &["a", "b", "c"]);
        assert_eq!(history.first().as_deref(), Some("a"));
        assert!(history.can_forward());
        assert!(!history.can_back());
        assert_eq!(history.last().as_deref(), Some("c"));
        assert!(history.can_back());
        assert!(!history.can_forward());
    }

    #[test]
    fn test_bounded() {
        let history = history_of(2, &["a", "b", "c"]);
        assert_eq!(history.size(), 2);
        assert_eq!(history.export(), vec!["c", "b"]);
    }

    #[test]
    fn test_locked_add_is_ignored() {
        let history = history_of(10, &["a", "b", "c"]);
        history.back();

        history.lock();
        assert!(history.is_locked());
        history.add("d".to_string());
        assert_eq!(history.size(), 3);
        assert_eq!(history.front().as_deref(), Some("c"));
        assert_eq!(history.current().as_deref(), Some("b"));

        history.unlock();
        history.add("d".to_string());
        assert_eq!(history.front().as_deref(), Some("d"));
        assert_eq!(history.current().as_deref(), Some("d"));
    }

    #[test]
    fn test_repeated_entry_moves_first() {
        let history = history_of(10, &["a", "b", "c", "a"]);
        assert_eq!(history.export(), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_add_after_back_resets_cursor() {
        let history = history_of(10, &["a", "b", "c"]);
        history.back();
        history.back();
        history.add("d".to_string());
        assert!(!history.can_forward());
        assert_eq!(history.back().as_deref(), Some("c"));
    }

    #[test]
    fn test_reverse() {
        let history = history_of(10, &["a", "b", "c"]);
        history.back();
        history.reverse();
        assert_eq!(history.export(), vec!["a", "b", "c"]);
        assert_eq!(history.current().as_deref(), Some("a"));
        assert_eq!(history.back().as_deref(), Some("b"));
    }

    #[test]
    fn test_import() {
        let history = History::new(3);
        history.import(["x", "y", "x", "z", "w"].map(String::from));
        assert_eq!(history.export(), vec!["x", "y", "z"]);
        assert_eq!(history.current().as_deref(), Some("x"));

        history.clear();
        assert!(history.is_empty());
        assert!(!history.can_back());
    }
}
