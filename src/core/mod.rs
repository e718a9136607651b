pub mod config;
pub mod frontmatter;
pub mod markdown;
pub mod post;
pub mod selector;
pub mod template;
