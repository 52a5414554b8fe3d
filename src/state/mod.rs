use crate::config::EnvConfig;
use crate::models::{Diary, DiaryDraft};
use crate::storage::{clear_token, load_diaries, load_token, save_diaries, save_token};
use crate::util::{next_diary_id, now_ms};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub(crate) struct AppState {
    pub config: StoredValue<EnvConfig>,

    /// Present while signed in; mirrors localStorage.
    pub session_token: RwSignal<Option<String>>,

    /// Oldest first, as stored.
    pub diaries: RwSignal<Vec<Diary>>,
}

impl AppState {
    pub fn new(config: EnvConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            session_token: RwSignal::new(load_token()),
            diaries: RwSignal::new(load_diaries()),
        }
    }

    pub fn login_path(&self) -> String {
        self.config.with_value(|c| c.login_path.clone())
    }

    pub fn sign_in(&self, token: String) {
        save_token(&token);
        self.session_token.set(Some(token));
    }

    pub fn sign_out(&self) {
        clear_token();
        self.session_token.set(None);
    }

    pub fn add_diary(&self, draft: DiaryDraft) -> Diary {
        let id = self.diaries.with_untracked(|list| next_diary_id(list));
        let diary = draft.into_diary(id, now_ms());
        self.diaries.update(|list| {
            list.push(diary.clone());
            save_diaries(list);
        });
        tracing::debug!(diary_id = diary.id, "diary saved");
        diary
    }

    pub fn delete_diary(&self, id: u64) {
        self.diaries.update(|list| {
            list.retain(|d| d.id != id);
            save_diaries(list);
        });
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);
