use gardenkit_core::BedGroupId;

/// Tracks which bed group is the active one.
///
/// At most one bed group is selected at a time. The selection lives only for
/// the current session and is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionManager {
    /// The ID of the selected bed group, if any
    selected_id: Option<BedGroupId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use gardenkit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }

    /// Selects `id`. Returns `true` if the selection changed.
    pub fn select(&mut self, id: impl Into<BedGroupId>) -> bool {
        let id = id.into();
        if self.selected_id.as_ref() == Some(&id) {
            return false;
        }
        self.selected_id = Some(id);
        true
    }

    pub fn clear(&mut self) {
        self.selected_id = None;
    }

    /// Keeps the selection pointing at an existing id.
    ///
    /// A selection whose id disappeared is dropped. When nothing is selected
    /// and ids exist, the first one becomes selected. An empty id list always
    /// clears the selection.
    pub fn ensure_valid<'a, I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut ids = ids.into_iter().peekable();
        let Some(first) = ids.peek().copied() else {
            self.selected_id = None;
            return;
        };
        let still_present = match self.selected_id.as_deref() {
            Some(selected) => std::iter::once(first).chain(ids).any(|id| id == selected),
            None => false,
        };
        if !still_present {
            self.selected_id = Some(first.to_string());
        }
    }
}
