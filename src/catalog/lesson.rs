use rust_embed::Embed;
use serde::Deserialize;

#[derive(Embed)]
#[folder = "assets/lessons/"]
struct LessonAssets;

/// One day of the writing course, loaded from an embedded TOML asset.
#[derive(Clone, Debug, Deserialize)]
pub struct Lesson {
    pub day: u32,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub overview: Vec<Section>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub practice: Vec<Section>,
}

/// A heading plus a block of instructional text.
#[derive(Clone, Debug, Deserialize)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

/// An interactive activity: intro text plus multiple-choice questions scored
/// against a fixed answer key.
#[derive(Clone, Debug, Deserialize)]
pub struct Activity {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Question {
    /// Stable key used for answer state, unique within the lesson.
    pub key: String,
    pub prompt: String,
    #[serde(default)]
    pub passage: Option<String>,
    pub options: Vec<String>,
    /// Index into `options` of the correct choice.
    pub answer: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LessonTab {
    Overview,
    Activities,
    Practice,
}

impl LessonTab {
    pub const ALL: [LessonTab; 3] = [
        LessonTab::Overview,
        LessonTab::Activities,
        LessonTab::Practice,
    ];

    pub fn title(self) -> &'static str {
        match self {
            LessonTab::Overview => "Overview",
            LessonTab::Activities => "Activities",
            LessonTab::Practice => "Practice",
        }
    }

    pub fn next(self) -> Self {
        match self {
            LessonTab::Overview => LessonTab::Activities,
            LessonTab::Activities => LessonTab::Practice,
            LessonTab::Practice => LessonTab::Overview,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            LessonTab::Overview => LessonTab::Practice,
            LessonTab::Activities => LessonTab::Overview,
            LessonTab::Practice => LessonTab::Activities,
        }
    }
}

impl Lesson {
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.activities.iter().flat_map(|a| a.questions.iter())
    }
}

/// Load the full catalogue from embedded assets, sorted by day.
/// Assets that fail to parse are skipped rather than failing startup.
pub fn load_all() -> Vec<Lesson> {
    let mut lessons: Vec<Lesson> = LessonAssets::iter()
        .filter_map(|name| {
            let file = LessonAssets::get(&name)?;
            let content = std::str::from_utf8(file.data.as_ref()).ok()?;
            toml::from_str::<Lesson>(content).ok()
        })
        .collect();
    lessons.sort_by_key(|l| l.day);
    lessons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_loads_and_is_sorted() {
        let lessons = load_all();
        assert!(!lessons.is_empty());
        for pair in lessons.windows(2) {
            assert!(pair[0].day <= pair[1].day);
        }
    }

    #[test]
    fn test_every_question_has_valid_answer_index_and_unique_key() {
        for lesson in load_all() {
            let mut keys = std::collections::HashSet::new();
            for q in lesson.questions() {
                assert!(
                    q.answer < q.options.len(),
                    "{}: answer index out of range for {}",
                    lesson.slug,
                    q.key
                );
                assert!(
                    keys.insert(q.key.clone()),
                    "{}: duplicate question key {}",
                    lesson.slug,
                    q.key
                );
            }
        }
    }

    #[test]
    fn test_day27_quiz_present() {
        let lessons = load_all();
        let day27 = lessons.iter().find(|l| l.day == 27).unwrap();
        assert_eq!(day27.slug, "persuasive-language-devices");
        assert_eq!(day27.questions().count(), 7);
    }

    #[test]
    fn test_tab_cycle_round_trips() {
        for tab in LessonTab::ALL {
            assert_eq!(tab.next().prev(), tab);
        }
        assert_eq!(LessonTab::Practice.next(), LessonTab::Overview);
    }
}
