use leptos::prelude::*;
use strum::AsRefStr;
use tw_merge::*;

use crate::components::ui::button::{Button, ButtonVariant};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, AsRefStr)]
pub enum ModalVariant {
    #[default]
    Info,
    Danger,
}

impl ModalVariant {
    fn default_confirm_text(self) -> &'static str {
        match self {
            ModalVariant::Info => "Confirm",
            ModalVariant::Danger => "Discard",
        }
    }

    fn default_cancel_text(self) -> &'static str {
        match self {
            ModalVariant::Info => "Cancel",
            ModalVariant::Danger => "Keep writing",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, AsRefStr)]
pub enum ModalActions {
    #[default]
    Single,
    Dual,
}

/// Title, optional description, and one or two action buttons.
///
/// Only the surface; opening and closing belong to whoever put it on the
/// modal stack.
#[component]
pub fn ConfirmModal(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] variant: ModalVariant,
    #[prop(optional)] actions: ModalActions,
    #[prop(optional, into)] confirm_text: Option<String>,
    #[prop(optional, into)] cancel_text: Option<String>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(optional, into)] on_cancel: Option<Callback<()>>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "bg-background border rounded-2xl shadow-lg p-6 flex flex-col gap-6 w-[calc(100vw-2rem)] max-w-sm",
        class
    );

    let confirm_text = confirm_text.unwrap_or_else(|| variant.default_confirm_text().to_string());
    let cancel_text = cancel_text.unwrap_or_else(|| variant.default_cancel_text().to_string());
    let confirm_variant = match variant {
        ModalVariant::Info => ButtonVariant::Default,
        ModalVariant::Danger => ButtonVariant::Destructive,
    };

    let cancel_button = (actions == ModalActions::Dual).then(move || {
        let label = cancel_text.clone();
        view! {
            <Button
                class="flex-1"
                variant=ButtonVariant::Outline
                attr:aria-label=cancel_text
                on:click=move |_| {
                    if let Some(cb) = on_cancel {
                        cb.run(());
                    }
                }
            >
                {label}
            </Button>
        }
    });
    let confirm_label = confirm_text.clone();

    view! {
        <div
            data-name="ConfirmModal"
            data-variant=variant.as_ref().to_string()
            data-actions=actions.as_ref().to_string()
            class=merged_class
        >
            <div class="flex flex-col gap-2 text-center">
                <h2 class="text-lg leading-none font-semibold">{title}</h2>
                {description.map(|d| view! { <p class="text-muted-foreground text-sm">{d}</p> })}
            </div>
            <footer class="flex gap-2 justify-center">
                {cancel_button}
                <Button
                    class="flex-1"
                    variant=confirm_variant
                    attr:aria-label=confirm_text
                    attr:data-testid="modal-confirm-button"
                    on:click=move |_| on_confirm.run(())
                >
                    {confirm_label}
                </Button>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_texts_follow_variant() {
        assert_eq!(ModalVariant::Info.default_confirm_text(), "Confirm");
        assert_eq!(ModalVariant::Info.default_cancel_text(), "Cancel");
        assert_eq!(ModalVariant::Danger.default_confirm_text(), "Discard");
        assert_eq!(ModalVariant::Danger.default_cancel_text(), "Keep writing");
    }
}
