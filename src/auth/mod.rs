//! Members-only gate. Failing the check puts a sign-in prompt on the modal
//! stack instead of running the action.

use leptos::prelude::*;

use crate::modal::{use_modal, ModalContext, ModalId};
use crate::prompts::open_login_required;
use crate::state::{AppContext, AppState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GuardOutcome {
    Allowed,
    Prompted,
    /// A prompt from an earlier check is still on screen.
    AlreadyPrompting,
}

pub(crate) fn decide(logged_in: bool, prompt_open: bool) -> GuardOutcome {
    match (logged_in, prompt_open) {
        (true, _) => GuardOutcome::Allowed,
        (false, true) => GuardOutcome::AlreadyPrompting,
        (false, false) => GuardOutcome::Prompted,
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AuthGuard {
    modal: ModalContext,
    is_logged_in: Signal<bool>,
    app: AppState,
    prompt: StoredValue<Option<ModalId>>,
}

impl AuthGuard {
    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in.get_untracked()
    }

    pub fn check(&self) -> GuardOutcome {
        let prompt_open = self
            .prompt
            .get_value()
            .is_some_and(|id| self.modal.is_open(id));

        let outcome = decide(self.is_logged_in(), prompt_open);
        if outcome == GuardOutcome::Prompted {
            let prompt = self.prompt;
            let id = open_login_required(self.modal, self.app.login_path(), move || {
                let _ = prompt.try_set_value(None);
            });
            self.prompt.set_value(Some(id));
        }
        tracing::debug!(?outcome, "auth check");
        outcome
    }

    pub fn require_auth(&self) -> bool {
        self.check() == GuardOutcome::Allowed
    }

    /// Wrap `action` so it only runs for a signed-in user.
    pub fn guarded<T>(
        self,
        action: impl Fn(T) + Send + Sync + 'static,
    ) -> impl Fn(T) + Send + Sync + 'static {
        move |arg| {
            if self.require_auth() {
                action(arg);
            }
        }
    }
}

pub(crate) fn use_auth_guard() -> AuthGuard {
    let app = expect_context::<AppContext>().0;
    let session = app.session_token;

    AuthGuard {
        modal: use_modal(),
        is_logged_in: Signal::derive(move || session.with(|t| t.is_some())),
        app,
        prompt: StoredValue::new(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_in_is_allowed_even_with_prompt_open() {
        assert_eq!(decide(true, false), GuardOutcome::Allowed);
        assert_eq!(decide(true, true), GuardOutcome::Allowed);
    }

    #[test]
    fn test_prompt_is_not_stacked_twice() {
        assert_eq!(decide(false, false), GuardOutcome::Prompted);
        assert_eq!(decide(false, true), GuardOutcome::AlreadyPrompting);
    }
}
