use std::fmt;

/// Identifier of one of the project cards in the gallery.
///
/// Only `all` hands these out, so every value lies in `1..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(u8);

impl ProjectId {
    pub const MAX: u8 = 3;

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every card id, in gallery order.
    pub fn all() -> impl Iterator<Item = ProjectId> {
        (1..=Self::MAX).map(ProjectId)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEvent {
    Enter(ProjectId),
    Leave(ProjectId),
}

/// Highlight slot shared by the project cards. At most one card owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverSlot(Option<ProjectId>);

impl HoverSlot {
    pub fn is_owned_by(self, id: ProjectId) -> bool {
        self.0 == Some(id)
    }

    /// Claims the slot, supplanting any previous owner.
    pub fn enter(&mut self, id: ProjectId) {
        self.0 = Some(id);
    }

    /// Releases the slot if `id` still owns it. Returns whether it was released.
    pub fn leave(&mut self, id: ProjectId) -> bool {
        if self.is_owned_by(id) {
            self.0 = None;
            true
        } else {
            false
        }
    }

    pub fn apply(&mut self, event: HoverEvent) {
        match event {
            HoverEvent::Enter(id) => self.enter(id),
            HoverEvent::Leave(id) => {
                self.leave(id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u8) -> ProjectId {
        ProjectId::all()
            .find(|id| id.get() == n)
            .expect("card id should exist")
    }

    #[test]
    fn test_project_ids() {
        let all: Vec<u8> = ProjectId::all().map(ProjectId::get).collect();
        assert_eq!(all, vec![1, 2, 3]);
        assert_eq!(id(2).to_string(), "2");
    }

    #[test]
    fn test_enter_then_leave() {
        let mut slot = HoverSlot::default();
        assert!(ProjectId::all().all(|p| !slot.is_owned_by(p)));
        slot.enter(id(1));
        assert!(slot.is_owned_by(id(1)));
        assert!(slot.leave(id(1)));
        assert_eq!(slot, HoverSlot::default());
    }

    #[test]
    fn test_enter_supersedes_previous_owner() {
        let mut slot = HoverSlot::default();
        slot.enter(id(1));
        slot.enter(id(3));
        assert!(slot.is_owned_by(id(3)));
        assert!(!slot.is_owned_by(id(1)));
    }

    #[test]
    fn test_stale_leave_is_ignored() {
        // enter for the next card can arrive before leave for the previous one
        let mut slot = HoverSlot::default();
        slot.apply(HoverEvent::Enter(id(1)));
        slot.apply(HoverEvent::Enter(id(2)));
        slot.apply(HoverEvent::Leave(id(1)));
        assert!(slot.is_owned_by(id(2)));
        slot.apply(HoverEvent::Leave(id(2)));
        assert_eq!(slot, HoverSlot::default());
    }

    #[test]
    fn test_leave_without_owner() {
        let mut slot = HoverSlot::default();
        assert!(!slot.leave(id(2)));
        assert_eq!(slot, HoverSlot::default());
    }
}
