//! Modal stack for managing overlays
//!
//! Only the top modal receives input; everything below it is drawn but inert.

/// An overlay drawn on top of the active screen
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Blocking message that must be dismissed before anything else
    Alert { message: String },
    /// Key binding reference
    Help,
}

/// A stack of modal overlays
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    /// Push `modal` unless the same kind is already on top
    pub fn push_unique(&mut self, modal: Modal) {
        let same_kind = self
            .top()
            .is_some_and(|top| std::mem::discriminant(top) == std::mem::discriminant(&modal));
        if !same_kind {
            self.push(modal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::Help);
        stack.push(Modal::QuitConfirm);
        assert_eq!(stack.top(), Some(&Modal::QuitConfirm));

        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert_eq!(stack.pop(), Some(Modal::Help));
        assert!(stack.top().is_none());
    }

    #[test]
    fn test_push_unique_skips_repeated_alert() {
        let mut stack = ModalStack::new();
        stack.push_unique(Modal::Alert {
            message: "one".into(),
        });
        stack.push_unique(Modal::Alert {
            message: "two".into(),
        });
        assert_eq!(
            stack.top(),
            Some(&Modal::Alert {
                message: "one".into()
            })
        );
        stack.pop();
        assert!(stack.top().is_none());
    }
}
