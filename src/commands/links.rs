use crate::core::post::{self, PostOutcome};
use crate::core::selector;
use crate::error::Result;
use crate::store::PublicationStore;
use crate::utils::cli::RunSettings;

/// Select the day's links and write the post, reporting to the console
pub fn run(settings: &RunSettings, store: &dyn PublicationStore) -> Result<PostOutcome> {
    let (date, entries) = selector::select(&settings.date, &settings.service, store)?;

    let outcome = post::render_and_persist(&settings.posts_dir, &date, &entries)?;
    match &outcome {
        PostOutcome::Empty => println!(
            "No {} links found for {}. No post created.",
            display_service(&settings.service),
            date.as_str()
        ),
        PostOutcome::Written(path) => {
            println!("Successfully created Jekyll post: {}", path.display())
        }
    }

    Ok(outcome)
}

/// "twitter" -> "Twitter"
fn display_service(service: &str) -> String {
    let mut chars = service.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_service() {
        assert_eq!(display_service("twitter"), "Twitter");
        assert_eq!(display_service("Mastodon"), "Mastodon");
        assert_eq!(display_service(""), "");
    }
}
