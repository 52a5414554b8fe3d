use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Display,
    AsRefStr,
    EnumIter,
    EnumString,
)]
pub(crate) enum Mood {
    #[default]
    Happy,
    Sad,
    Angry,
    Surprise,
    Etc,
}

impl Mood {
    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Angry => "😠",
            Mood::Surprise => "😮",
            Mood::Etc => "🙂",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Surprise => "Surprised",
            Mood::Etc => "Something else",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct Diary {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub mood: Mood,
    pub created_ms: i64,
}

/// What the composition dialog hands back on save.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct DiaryDraft {
    pub title: String,
    pub content: String,
    pub mood: Mood,
}

impl DiaryDraft {
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    pub fn into_diary(self, id: u64, created_ms: i64) -> Diary {
        Diary {
            id,
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            mood: self.mood,
            created_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_mood_select_values_round_trip() {
        for mood in Mood::iter() {
            assert_eq!(Mood::from_str(mood.as_ref()).ok(), Some(mood));
        }
    }

    #[test]
    fn test_draft_requires_title_and_content() {
        let mut d = DiaryDraft::default();
        assert!(!d.is_complete());
        d.title = "  ".to_string();
        d.content = "walked by the river".to_string();
        assert!(!d.is_complete());
        d.title = "Sunday".to_string();
        assert!(d.is_complete());
    }

    #[test]
    fn test_diary_deserializes_stored_shape() {
        let json = r#"{"id":3,"title":"t","content":"c","mood":"Sad","created_ms":10}"#;
        let d: Diary = serde_json::from_str(json).expect("stored diary should parse");
        assert_eq!(d.mood, Mood::Sad);
        assert_eq!(d.id, 3);
    }
}
