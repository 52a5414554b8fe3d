use crate::auth::use_auth_guard;
use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardItem, CardList, CardTitle, Input, Label,
};
use crate::diaries::open_diary_composer;
use crate::modal::use_modal;
use crate::models::{Diary, DiaryDraft};
use crate::prompts::{open_delete_confirmation, open_notice, Dismiss};
use crate::state::AppContext;
use crate::util::{format_date_local, now_ms, safe_return_path};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[component]
pub fn LoginPage() -> impl IntoView {
    let email: RwSignal<String> = RwSignal::new(String::new());
    let password: RwSignal<String> = RwSignal::new(String::new());
    let error: RwSignal<Option<String>> = RwSignal::new(None);

    let app = expect_context::<AppContext>().0;
    let query = use_query_map();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if email.get().trim().is_empty() || password.get().is_empty() {
            error.set(Some("Enter your email and password.".to_string()));
            return;
        }
        error.set(None);

        // Remote sign-in lives outside this app; the session is local.
        app.sign_in(format!("session-{}", now_ms()));

        let next = query.with_untracked(|q| q.get("next"));
        if let Err(e) = window().location().set_href(&safe_return_path(next.as_deref())) {
            tracing::warn!(error = ?e, "navigation after sign-in failed");
        }
    };

    view! {
        <div class="min-h-screen bg-background flex items-center justify-center px-4">
            <Card class="w-full max-w-sm">
                <CardHeader>
                    <CardTitle>"Sign in"</CardTitle>
                    <CardDescription>"Sign in to write and manage your diary."</CardDescription>
                </CardHeader>
                <CardContent>
                    <form class="flex flex-col gap-4" on:submit=on_submit>
                        <div class="flex flex-col gap-2">
                            <Label html_for="login_email">"Email"</Label>
                            <Input id="login_email" r#type="email" placeholder="you@example.com" bind_value=email />
                        </div>
                        <div class="flex flex-col gap-2">
                            <Label html_for="login_password">"Password"</Label>
                            <Input id="login_password" r#type="password" bind_value=password />
                        </div>

                        <Show when=move || error.get().is_some() fallback=|| ().into_view()>
                            {move || {
                                error.get().map(|e| view! {
                                    <Alert class="border-destructive/30">
                                        <AlertDescription class="text-destructive">{e}</AlertDescription>
                                    </Alert>
                                })
                            }}
                        </Show>

                        <Button attr:r#type="submit" class="w-full">"Sign in"</Button>
                    </form>
                </CardContent>
            </Card>
        </div>
    }
}

#[component]
fn DiaryItem(diary: Diary, on_delete: Callback<Diary>) -> impl IntoView {
    let date = format_date_local(diary.created_ms);
    let mood = diary.mood;
    let title = diary.title.clone();
    let content = diary.content.clone();

    view! {
        <CardItem class="flex items-start gap-3 rounded-md border px-4 py-3">
            <span class="text-2xl" aria-label=mood.label()>{mood.emoji()}</span>
            <div class="flex flex-1 flex-col gap-1 min-w-0">
                <div class="flex items-center gap-2 text-xs text-muted-foreground">
                    <span data-mood=mood.as_ref().to_string()>{mood.label()}</span>
                    <span>{date}</span>
                </div>
                <div class="text-sm font-medium truncate">{title}</div>
                <div class="text-xs text-muted-foreground line-clamp-2">{content}</div>
            </div>
            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::Sm
                attr:aria-label="Delete entry"
                on:click=move |_| on_delete.run(diary.clone())
            >
                "Delete"
            </Button>
        </CardItem>
    }
}

#[component]
pub fn DiariesPage() -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let modal = use_modal();
    let guard = use_auth_guard();

    let diaries = app.diaries;
    let signed_in = move || app.session_token.with(|t| t.is_some());

    let on_save = Callback::new(move |draft: DiaryDraft| {
        let diary = app.add_diary(draft);
        // Stacked on the composer; confirming clears both.
        open_notice(
            modal,
            "Saved",
            format!("\"{}\" was added to your diary.", diary.title),
            Dismiss::All,
        );
    });

    let on_write = guard.guarded(move |_: web_sys::MouseEvent| {
        open_diary_composer(modal, on_save);
    });

    let on_delete = Callback::new(move |diary: Diary| {
        if !guard.require_auth() {
            return;
        }
        let id = diary.id;
        open_delete_confirmation(
            modal,
            diary.title,
            Callback::new(move |_| {
                app.delete_diary(id);
                open_notice(modal, "Deleted", "The entry was removed.", Dismiss::Own);
            }),
        );
    });

    let newest_first = move || {
        let mut list = diaries.get();
        list.reverse();
        list
    };

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto w-full max-w-3xl px-4 py-8 flex flex-col gap-6">
                <header class="flex items-center justify-between">
                    <h1 class="text-xl font-semibold">"Mood diary"</h1>
                    <div class="flex items-center gap-2">
                        <Show
                            when=signed_in
                            fallback=move || view! {
                                <a href=app.login_path() class="text-sm text-muted-foreground hover:underline">
                                    "Sign in"
                                </a>
                            }
                        >
                            <Button variant=ButtonVariant::Ghost on:click=move |_| app.sign_out()>
                                "Sign out"
                            </Button>
                        </Show>
                        <Button on:click=on_write>"Write diary"</Button>
                    </div>
                </header>

                <Card>
                    <CardHeader>
                        <CardTitle>"Entries"</CardTitle>
                        <CardDescription>
                            {move || format!("{} total", diaries.with(|d| d.len()))}
                        </CardDescription>
                    </CardHeader>

                    <CardContent>
                        <Show
                            when=move || diaries.with(|d| !d.is_empty())
                            fallback=|| view! {
                                <div class="text-xs text-muted-foreground">"No entries yet."</div>
                            }
                        >
                            <CardList>
                                <For
                                    each=newest_first
                                    key=|d| d.id
                                    children=move |d: Diary| view! { <DiaryItem diary=d on_delete=on_delete /> }
                                />
                            </CardList>
                        </Show>
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}
