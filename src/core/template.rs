use std::collections::BTreeMap;

/// Jekyll post layout; `{{body}}` already ends in a newline, so the file ends in a blank line
pub const POST: &str = "---
layout: post
title: \"{{title}}\"
date: {{date}}
---

{{body}}
";

/// Replace `{{var}}` placeholders in one pass.
///
/// Substituted values are never scanned again, so a publication title that
/// happens to contain `{{date}}` stays literal. Unknown placeholders are kept.
pub fn render(template: &str, vars: &BTreeMap<&str, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = &after[..end];
                match vars.get(key) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(key);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&'static str, &str)]) -> BTreeMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn test_render_post_layout() {
        let out = render(
            POST,
            &vars(&[("title", "Links for 2024-03-10"), ("date", "2024-03-10"), ("body", "- [C](l2)\n")]),
        );
        assert_eq!(
            out,
            "---\nlayout: post\ntitle: \"Links for 2024-03-10\"\ndate: 2024-03-10\n---\n\n- [C](l2)\n\n"
        );
    }

    #[test]
    fn test_render_does_not_reexpand_values() {
        let out = render("{{body}} {{date}}", &vars(&[("body", "{{date}}"), ("date", "D")]));
        assert_eq!(out, "{{date}} D");
    }

    #[test]
    fn test_render_keeps_unknown_and_unclosed() {
        assert_eq!(render("a {{nope}} b", &vars(&[])), "a {{nope}} b");
        assert_eq!(render("a {{open", &vars(&[("open", "x")])), "a {{open");
    }
}
