//! Placeholder substitution.
//!
//! `{{name}}` and `{{ name }}` are replaced with the value of `name` in a
//! single left-to-right pass. Inserted values are never scanned again, and
//! placeholders without a value stay as written.

use std::borrow::Cow;

use super::Variables;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Replace every known placeholder in `text`.
///
/// Borrows `text` when nothing was replaced.
pub fn substitute<'a>(text: &'a str, variables: &Variables) -> Cow<'a, str> {
    if !text.contains(OPEN) {
        return Cow::Borrowed(text);
    }

    let mut output = String::with_capacity(text.len());
    let mut rest = text;
    let mut replaced = false;

    while let Some(start) = rest.find(OPEN) {
        output.push_str(&rest[..start]);
        let candidate = &rest[start..];

        match resolve(&candidate[OPEN.len()..], variables) {
            Some((value, consumed)) => {
                output.push_str(value);
                rest = &candidate[OPEN.len() + consumed..];
                replaced = true;
            }
            None => {
                // Step over one brace so `{{{name}}}` still finds `{{name}}`
                output.push('{');
                rest = &candidate[1..];
            }
        }
    }

    if !replaced {
        return Cow::Borrowed(text);
    }

    output.push_str(rest);
    Cow::Owned(output)
}

/// Look up the placeholder whose body starts `after_open`. Returns the
/// value and the number of bytes consumed including the closing braces.
fn resolve<'v>(after_open: &str, variables: &'v Variables) -> Option<(&'v str, usize)> {
    let end = after_open.find(CLOSE)?;
    let inner = &after_open[..end];

    let value = variables.get(inner).or_else(|| {
        inner
            .strip_prefix(' ')
            .and_then(|s| s.strip_suffix(' '))
            .and_then(|key| variables.get(key))
    })?;

    Some((value, end + CLOSE.len()))
}

/// Names of all placeholders in `text`, in order of appearance.
pub fn placeholders(text: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(OPEN) {
        let after_open = &rest[start + OPEN.len()..];
        match after_open.find(CLOSE) {
            Some(end) => {
                let name = after_open[..end].trim();
                if !name.is_empty() && !name.contains(OPEN) {
                    names.push(name.to_string());
                }
                rest = &after_open[end + CLOSE.len()..];
            }
            None => break,
        }
    }

    names
}
