use crate::core::frontmatter;
use crate::core::markdown;
use crate::core::selector::{LinkEntry, TargetDate};
use crate::core::template;
use crate::error::Result;
use crate::utils::file;
use std::path::{Path, PathBuf};

/// What a render run ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostOutcome {
    Written(PathBuf),
    /// No links for the date, nothing written
    Empty,
}

pub fn file_name(date: &TargetDate) -> String {
    format!("{}-twitter-links.md", date.as_str())
}

pub fn post_path(posts_dir: &Path, date: &TargetDate) -> PathBuf {
    posts_dir.join(file_name(date))
}

/// Full document text: front matter followed by the link list
pub fn render(date: &TargetDate, entries: &[LinkEntry]) -> String {
    let mut vars = frontmatter::vars(date);
    vars.insert("body", markdown::bullet_list(entries));
    template::render(template::POST, &vars)
}

/// Write the post for `date` into `posts_dir`, replacing any previous one.
///
/// An empty `entries` slice writes nothing and returns [`PostOutcome::Empty`].
pub fn render_and_persist(
    posts_dir: &Path,
    date: &TargetDate,
    entries: &[LinkEntry],
) -> Result<PostOutcome> {
    if entries.is_empty() {
        tracing::debug!(date = date.as_str(), "no entries, skipping write");
        return Ok(PostOutcome::Empty);
    }

    let path = post_path(posts_dir, date);
    let content = render(date, entries);
    file::write_post(&path, &content)?;
    tracing::info!(path = %path.display(), entries = entries.len(), "post written");

    Ok(PostOutcome::Written(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinksError;
    use std::fs;
    use tempfile::TempDir;

    fn entry(title: &str, link: &str) -> LinkEntry {
        LinkEntry {
            title: title.to_string(),
            original_link: link.to_string(),
        }
    }

    #[test]
    fn test_render_document() {
        let date = TargetDate::parse("2024-03-10").unwrap();
        let doc = render(&date, &[entry("A|B", "link1"), entry("C", "link2")]);
        assert_eq!(
            doc,
            "---\nlayout: post\ntitle: \"Links for 2024-03-10\"\ndate: 2024-03-10\n---\n\n- [A\\|B](link1)\n- [C](link2)\n\n"
        );
    }

    #[test]
    fn test_render_title_with_placeholder_text() {
        let date = TargetDate::parse("2024-03-10").unwrap();
        let doc = render(&date, &[entry("see {{date}}", "l")]);
        assert!(doc.ends_with("- [see {{date}}](l)\n\n"));
    }

    #[test]
    fn test_empty_entries_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let date = TargetDate::parse("2099-01-01").unwrap();

        let outcome = render_and_persist(temp.path(), &date, &[]).unwrap();

        assert_eq!(outcome, PostOutcome::Empty);
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_overwrites_existing_post() {
        let temp = TempDir::new().unwrap();
        let date = TargetDate::parse("2024-03-10").unwrap();
        let path = post_path(temp.path(), &date);
        fs::write(&path, "old content that is much longer than the new one").unwrap();

        let outcome = render_and_persist(temp.path(), &date, &[entry("C", "l")]).unwrap();

        assert_eq!(outcome, PostOutcome::Written(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), render(&date, &[entry("C", "l")]));
    }

    #[test]
    fn test_missing_posts_dir_is_io_failure() {
        let temp = TempDir::new().unwrap();
        let posts = temp.path().join("_posts");
        let date = TargetDate::parse("2024-03-10").unwrap();

        let err = render_and_persist(&posts, &date, &[entry("C", "l")]).unwrap_err();

        match err {
            LinksError::Io { path, .. } => assert_eq!(path, post_path(&posts, &date)),
            other => panic!("unexpected {:?}", other),
        }
        assert!(!posts.exists());
    }
}
