//! The list of bed groups the user maintains, plus the current selection.

use gardenkit_core::{BedGroup, BedGroupId, Result, ValidationError};
use tracing::{debug, warn};

use crate::selection_manager::SelectionManager;

/// Ordered list of bed groups with a single selected entry.
///
/// Whenever groups exist one of them is selected; an empty list has no
/// selection.
#[derive(Debug, Clone, Default)]
pub struct BedGroupList {
    groups: Vec<BedGroup>,
    selection: SelectionManager,
}

impl BedGroupList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from persisted groups, selecting the first one.
    pub fn from_groups(groups: Vec<BedGroup>) -> Self {
        let mut list = Self {
            groups,
            selection: SelectionManager::new(),
        };
        list.sync_selection();
        list
    }

    pub fn groups(&self) -> &[BedGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&BedGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.id.as_str())
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selection.selected_id()
    }

    pub fn selected(&self) -> Option<&BedGroup> {
        self.selected_id().and_then(|id| self.get(id))
    }

    /// A fresh group with default dimensions, ready to be edited and added.
    pub fn draft() -> BedGroup {
        BedGroup::with_new_id()
    }

    /// Appends a validated group and selects it.
    pub fn add(&mut self, group: BedGroup) -> Result<()> {
        group.validate()?;
        if self.get(&group.id).is_some() {
            return Err(ValidationError::out_of_range("id", "already exists").into());
        }
        debug!("Adding bed group {} ({})", group.id, group.label);
        self.selection.select(group.id.clone());
        self.groups.push(group);
        Ok(())
    }

    /// Replaces the group with the same id. Returns `false` if no such group exists.
    pub fn update(&mut self, group: BedGroup) -> Result<bool> {
        group.validate()?;
        match self.groups.iter_mut().find(|g| g.id == group.id) {
            Some(existing) => {
                debug!("Updating bed group {}", group.id);
                *existing = group;
                Ok(true)
            }
            None => {
                warn!("Ignoring update of unknown bed group {}", group.id);
                Ok(false)
            }
        }
    }

    /// Removes a group. The selection then moves to the first remaining group.
    pub fn delete(&mut self, id: &str) -> Option<BedGroup> {
        let index = self.groups.iter().position(|g| g.id == id)?;
        let removed = self.groups.remove(index);
        debug!("Deleted bed group {}", removed.id);
        self.selection.clear();
        self.sync_selection();
        Some(removed)
    }

    /// Selects an existing group. Unknown ids are ignored.
    pub fn select(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.selection.select(id)
    }

    fn sync_selection(&mut self) {
        let ids: Vec<BedGroupId> = self.groups.iter().map(|g| g.id.clone()).collect();
        self.selection.ensure_valid(ids.iter().map(String::as_str));
    }
}
