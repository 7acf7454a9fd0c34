use super::Turn;

/// Ordered history of turns for one session.
///
/// Turns are only ever appended or cleared wholesale. Alternation between
/// user and assistant is not enforced; two adjacent user turns are valid.
#[derive(Debug, Clone, Default)]
pub struct TranscriptStore {
    turns: Vec<Turn>,
}

impl TranscriptStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    #[test]
    fn starts_empty() {
        let store = TranscriptStore::new();
        assert!(store.is_empty());
        assert!(store.all().is_empty());
        assert!(store.last().is_none());
    }

    #[test]
    fn preserves_insertion_order_without_dedup() {
        let mut store = TranscriptStore::new();
        let turns = vec![
            Turn::user("a"),
            Turn::user("a"),
            Turn::assistant("b"),
            Turn::user("c"),
        ];
        for turn in &turns {
            store.append(turn.clone());
        }

        assert_eq!(store.len(), 4);
        assert_eq!(store.all(), turns.as_slice());
        assert_eq!(store.last().map(|t| t.content()), Some("c"));
    }

    #[test]
    fn accepts_consecutive_user_turns() {
        let mut store = TranscriptStore::new();
        store.append(Turn::user("first"));
        store.append(Turn::user("second"));

        let roles: Vec<Role> = store.all().iter().map(|t| t.role()).collect();
        assert_eq!(roles, vec![Role::User, Role::User]);
    }

    #[test]
    fn clear_empties_regardless_of_size() {
        let mut store = TranscriptStore::new();
        store.clear();
        assert!(store.all().is_empty());

        for i in 0..50 {
            store.append(Turn::user(format!("msg {i}")));
        }
        store.clear();
        assert!(store.all().is_empty());
        assert_eq!(store.len(), 0);
    }
}
