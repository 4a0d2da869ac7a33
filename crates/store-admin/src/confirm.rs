//! Confirmation capability for destructive dashboard actions.
//!
//! The browser dashboard gated deletion behind `window.confirm`. Here the
//! prompt is an injected capability so deletion logic stays testable and
//! embedders can wire a real prompt, a policy check, or nothing at all.

/// A blocking yes/no decision asked before a destructive action.
pub trait ConfirmPrompt: Send + Sync {
	/// Returns true if the action should proceed.
	fn confirm(&self, prompt: &str) -> bool;
}

/// Confirmation that always answers yes.
///
/// Used by the HTTP service, where issuing the DELETE request is itself the
/// confirmation step.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl ConfirmPrompt for AutoConfirm {
	fn confirm(&self, _prompt: &str) -> bool {
		true
	}
}
