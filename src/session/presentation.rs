/// View-facing flags derived from the session: details panel and row menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiPresentationState {
    modal_open: bool,
    active_menu_index: Option<usize>,
}

impl UiPresentationState {
    pub const fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub const fn active_menu_index(&self) -> Option<usize> {
        self.active_menu_index
    }

    pub const fn open_modal(&mut self) {
        self.modal_open = true;
    }

    /// Hide the details panel; its row menu goes with it.
    pub const fn close_modal(&mut self) {
        self.modal_open = false;
        self.active_menu_index = None;
    }

    pub const fn toggle_modal(&mut self) {
        if self.modal_open {
            self.close_modal();
        } else {
            self.open_modal();
        }
    }

    /// Open the menu of row `index`, or close it if it is already open.
    ///
    /// Rows outside `0..len` are ignored.
    pub const fn toggle_menu(&mut self, index: usize, len: usize) {
        if index >= len {
            return;
        }
        self.active_menu_index = match self.active_menu_index {
            Some(current) if current == index => None,
            _ => Some(index),
        };
    }

    pub const fn close_menu(&mut self) {
        self.active_menu_index = None;
    }

    /// Drop a menu reference that no longer points into a sequence of `len`.
    pub const fn reconcile(&mut self, len: usize) {
        if let Some(idx) = self.active_menu_index
            && idx >= len
        {
            self.active_menu_index = None;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
