// Mobile navigation drawer. One open/close bit; the host maps SetMenuOpen
// to the `open` class, aria-expanded on the toggle, aria-hidden on the
// menu, and the body scroll lock together, so ARIA can never drift out of
// sync with the class.

use crate::types::UiCommand;

/// Mobile drawer state machine.
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        MobileMenu { open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger tap. Idempotent: re-opening emits nothing.
    pub fn open(&mut self, out: &mut Vec<UiCommand>) {
        if self.open {
            return;
        }
        self.open = true;
        out.push(UiCommand::SetMenuOpen { open: true });
    }

    /// Close button, or any link inside the drawer.
    pub fn close(&mut self, out: &mut Vec<UiCommand>) {
        if !self.open {
            return;
        }
        self.open = false;
        out.push(UiCommand::SetMenuOpen { open: false });
    }
}

impl Default for MobileMenu {
    fn default() -> Self {
        Self::new()
    }
}
