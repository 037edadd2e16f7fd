//! Shared access to one session's store from many UI components.

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::WizardState;

/// Cheap-to-clone handle to the session's [`WizardState`].
///
/// The wizard runs on a single UI thread, so the handle is `!Send`. Closures
/// passed to [`read`](Self::read) / [`update`](Self::update) must not call back
/// into the same handle.
#[derive(Debug, Clone, Default)]
pub struct WizardHandle {
    inner: Rc<RefCell<WizardState>>,
}

impl WizardHandle {
    pub fn new(state: WizardState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(state)),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&WizardState) -> R) -> R {
        f(&self.inner.borrow())
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut WizardState) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }

    /// Whether two handles point at the same store.
    pub fn same_store(&self, other: &WizardHandle) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_store() {
        let stepper = WizardHandle::new(WizardState::new());
        let pricing = stepper.clone();

        stepper.update(|state| state.next_step());
        assert_eq!(pricing.read(|state| state.current_step()), 2);
        assert!(stepper.same_store(&pricing));
        assert!(!stepper.same_store(&WizardHandle::default()));
    }
}
