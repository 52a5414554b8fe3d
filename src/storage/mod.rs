use crate::models::Diary;
use serde::{Deserialize, Serialize};

pub(crate) const TOKEN_KEY: &str = "mood_diary_token";
pub(crate) const DIARIES_KEY: &str = "mood_diary_diaries";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(crate) fn load_json_from_storage<T: for<'de> Deserialize<'de>>(key: &str) -> Option<T> {
    let json = local_storage()?.get_item(key).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

pub(crate) fn save_json_to_storage<T: Serialize>(key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.set_item(key, &json) {
                tracing::warn!(key, error = ?e, "localStorage write failed");
            }
        }
    }
}

pub(crate) fn load_token() -> Option<String> {
    local_storage()?
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|t| !t.trim().is_empty())
}

pub(crate) fn save_token(token: &str) {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.set_item(TOKEN_KEY, token) {
            tracing::warn!(key = TOKEN_KEY, error = ?e, "localStorage write failed");
        }
    }
}

pub(crate) fn clear_token() {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.remove_item(TOKEN_KEY) {
            tracing::warn!(key = TOKEN_KEY, error = ?e, "localStorage remove failed");
        }
    }
}

pub(crate) fn load_diaries() -> Vec<Diary> {
    load_json_from_storage::<Vec<Diary>>(DIARIES_KEY).unwrap_or_default()
}

pub(crate) fn save_diaries(diaries: &[Diary]) {
    save_json_to_storage(DIARIES_KEY, &diaries);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::models::Mood;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_token_roundtrip() {
        clear_token();
        assert!(load_token().is_none());

        save_token("t1");
        assert_eq!(load_token().as_deref(), Some("t1"));

        clear_token();
        assert!(load_token().is_none());
    }

    #[wasm_bindgen_test]
    fn test_diaries_roundtrip() {
        let diaries = vec![Diary {
            id: 1,
            title: "t".to_string(),
            content: "c".to_string(),
            mood: Mood::Angry,
            created_ms: 5,
        }];
        save_diaries(&diaries);
        assert_eq!(load_diaries(), diaries);
    }
}
