use crate::models::Diary;

pub(crate) fn now_ms() -> i64 {
    js_sys::Date::now().round() as i64
}

pub(crate) fn next_diary_id(existing: &[Diary]) -> u64 {
    existing
        .iter()
        .map(|d| d.id)
        .max()
        .map_or(1, |m| m.saturating_add(1))
}

/// `YYYY.MM.DD` in the browser's local timezone.
pub(crate) fn format_date_local(ms: i64) -> String {
    let d = js_sys::Date::new(&(ms as f64).into());
    format!(
        "{:04}.{:02}.{:02}",
        d.get_full_year(),
        d.get_month() + 1,
        d.get_date()
    )
}

/// Login URL carrying the page to come back to.
pub(crate) fn login_url(login_path: &str, return_to: &str) -> String {
    if return_to.is_empty() || return_to == "/" {
        return login_path.to_string();
    }
    format!("{}?next={}", login_path, urlencoding::encode(return_to))
}

/// Only same-origin absolute paths are honoured as a return target.
pub(crate) fn safe_return_path(next: Option<&str>) -> String {
    match next {
        // Browsers read `/\host` as `//host`.
        Some(p) if p.starts_with('/') && !p.starts_with("//") && !p.starts_with("/\\") => {
            p.to_string()
        }
        _ => "/".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mood;

    fn diary(id: u64) -> Diary {
        Diary {
            id,
            title: String::new(),
            content: String::new(),
            mood: Mood::Happy,
            created_ms: 0,
        }
    }

    #[test]
    fn test_next_diary_id() {
        assert_eq!(next_diary_id(&[]), 1);
        assert_eq!(next_diary_id(&[diary(4), diary(2)]), 5);
    }

    #[test]
    fn test_login_url_encodes_return_path() {
        assert_eq!(login_url("/auth/login", "/"), "/auth/login");
        assert_eq!(
            login_url("/auth/login", "/diaries?mood=Sad"),
            "/auth/login?next=%2Fdiaries%3Fmood%3DSad"
        );
    }

    #[test]
    fn test_safe_return_path() {
        assert_eq!(safe_return_path(Some("/diaries")), "/diaries");
        assert_eq!(safe_return_path(Some("//evil.example")), "/");
        assert_eq!(safe_return_path(Some("https://evil.example")), "/");
        assert_eq!(safe_return_path(Some("/\\evil.example")), "/");
        assert_eq!(safe_return_path(Some("/diaries\\1")), "/diaries\\1");
        assert_eq!(safe_return_path(None), "/");
    }
}
