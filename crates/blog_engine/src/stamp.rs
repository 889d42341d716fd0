use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};
use uuid::Uuid;

use crate::GeneratedArticle;

/// Source of "now" for article timestamps; swapped out in tests.
pub type Clock = Arc<dyn Fn() -> DateTime<Local> + Send + Sync>;

const ID_SUFFIX_LEN: usize = 9;

/// Builds `article-{unix_millis}-{9 random lowercase alphanumerics}`.
pub fn new_article_id(timestamp_ms: i64) -> String {
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(ID_SUFFIX_LEN)
        .collect();
    format!("article-{timestamp_ms}-{suffix}")
}

/// Long US date, e.g. "October 19, 2026".
pub fn format_display_date<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    at.format("%B %-d, %Y").to_string()
}

/// Turns a completion into an article: id, trimmed title, timestamp and date.
#[derive(Clone)]
pub struct ArticleStamper {
    clock: Clock,
}

impl ArticleStamper {
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    pub fn system() -> Self {
        Self::new(Arc::new(Local::now))
    }

    pub fn stamp(&self, title: &str, content: String) -> GeneratedArticle {
        let now = (self.clock)();
        let timestamp_ms = now.timestamp_millis();
        GeneratedArticle {
            id: new_article_id(timestamp_ms),
            title: title.trim().to_string(),
            content,
            timestamp_ms,
            date: format_display_date(&now),
        }
    }
}

impl fmt::Debug for ArticleStamper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArticleStamper").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn ids_carry_timestamp_and_random_suffix() {
        let id = new_article_id(1_760_000_000_000);
        let suffix = id
            .strip_prefix("article-1760000000000-")
            .expect("prefix with timestamp");
        assert_eq!(suffix.len(), 9);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert_ne!(new_article_id(1), new_article_id(1));
    }

    #[test]
    fn date_uses_long_month_without_padding() {
        let at = Utc.with_ymd_and_hms(2026, 3, 7, 12, 0, 0).unwrap();
        assert_eq!(format_display_date(&at), "March 7, 2026");

        let offset = FixedOffset::east_opt(3600).unwrap();
        let at = offset.with_ymd_and_hms(2026, 10, 19, 23, 30, 0).unwrap();
        assert_eq!(format_display_date(&at), "October 19, 2026");
    }

    #[test]
    fn stamp_trims_title_and_keeps_content() {
        let fixed = Local.timestamp_millis_opt(1_760_000_000_000).unwrap();
        let stamper = ArticleStamper::new(Arc::new(move || fixed));

        let article = stamper.stamp("  Lifetimes  ", "  body\n".to_string());
        assert_eq!(article.title, "Lifetimes");
        assert_eq!(article.content, "  body\n");
        assert_eq!(article.timestamp_ms, 1_760_000_000_000);
        assert!(article.id.starts_with("article-1760000000000-"));
        assert_eq!(article.date, format_display_date(&fixed));
    }
}
