use crate::core::selector::TargetDate;
use std::collections::BTreeMap;

/// Post title shown by Jekyll
pub fn title(date: &TargetDate) -> String {
    format!("Links for {}", date.as_str())
}

/// Template variables for the front matter block (title, date)
pub fn vars(date: &TargetDate) -> BTreeMap<&'static str, String> {
    let mut vars = BTreeMap::new();
    vars.insert("title", title(date));
    vars.insert("date", date.as_str().to_string());
    vars
}
