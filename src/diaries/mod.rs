//! Diary composition dialog.

use std::str::FromStr;

use icons::X;
use leptos::prelude::*;
use strum::IntoEnumIterator;
use wasm_bindgen::JsCast;

use crate::components::ui::{Button, ButtonSize, ButtonVariant, Input, Label, Textarea};
use crate::modal::{use_modal, ModalContext, ModalId};
use crate::models::{DiaryDraft, Mood};
use crate::prompts::open_discard_confirmation;

/// Put the composer on the stack. `on_save` receives a complete draft; the
/// composer stays open underneath whatever `on_save` opens next.
pub(crate) fn open_diary_composer(modal: ModalContext, on_save: Callback<DiaryDraft>) -> ModalId {
    modal.open_with_close(
        move || view! { <DiaryComposeModal on_save=on_save /> },
        || tracing::debug!("diary composer closed"),
    )
}

#[component]
fn DiaryComposeModal(on_save: Callback<DiaryDraft>) -> impl IntoView {
    let modal = use_modal();

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let mood = RwSignal::new(Mood::default());
    let saved = RwSignal::new(false);

    let draft = move || DiaryDraft {
        title: title.get(),
        content: content.get(),
        mood: mood.get(),
    };
    let can_save = move || !saved.get() && draft().is_complete();

    let on_mood_change = move |ev: web_sys::Event| {
        let value = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            .map(|el| el.value());
        if let Some(m) = value.and_then(|v| Mood::from_str(&v).ok()) {
            mood.set(m);
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let d = draft();
        if saved.get_untracked() || !d.is_complete() {
            return;
        }
        saved.set(true);
        on_save.run(d);
    };

    // Closing asks first, on top of this dialog.
    let on_close = move |_| {
        open_discard_confirmation(modal);
    };

    view! {
        <form
            data-name="DiaryComposeModal"
            class="bg-background border rounded-2xl shadow-lg p-6 flex flex-col gap-5 w-[calc(100vw-2rem)] max-w-xl"
            on:submit=on_submit
        >
            <header class="flex items-center justify-between">
                <h2 class="text-lg leading-none font-semibold">"New diary"</h2>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    attr:r#type="button"
                    attr:aria-label="Close"
                    on:click=on_close
                >
                    <X />
                </Button>
            </header>

            <fieldset class="flex flex-col gap-2">
                <Label html_for="diary_mood">"How do you feel today?"</Label>
                <select
                    id="diary_mood"
                    class="h-9 rounded-md border border-input bg-transparent px-3 text-sm"
                    on:change=on_mood_change
                >
                    {Mood::iter()
                        .map(|m| {
                            view! {
                                <option value=m.as_ref().to_string() selected=move || mood.get() == m>
                                    {format!("{} {}", m.emoji(), m.label())}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </fieldset>

            <fieldset class="flex flex-col gap-2">
                <Label html_for="diary_title">"Title"</Label>
                <Input id="diary_title" placeholder="Give today a title" bind_value=title />
            </fieldset>

            <fieldset class="flex flex-col gap-2">
                <Label html_for="diary_content">"Entry"</Label>
                <Textarea id="diary_content" placeholder="Write it down" bind_value=content />
            </fieldset>

            <footer class="flex gap-2 justify-end">
                <Button variant=ButtonVariant::Outline attr:r#type="button" on:click=on_close>
                    "Close"
                </Button>
                <Button attr:r#type="submit" attr:disabled=move || !can_save()>
                    "Save"
                </Button>
            </footer>
        </form>
    }
}
