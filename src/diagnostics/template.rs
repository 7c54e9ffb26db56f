//! Positional rendering of `{name}` message templates.

use std::fmt::{Display, Write};

/// Render `template`, substituting each `{name}` placeholder with the next
/// argument in order.
///
/// `{{` and `}}` produce literal braces. Placeholders beyond the supplied
/// arguments, and unterminated `{`, are copied through verbatim.
pub fn render_template(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }
        let Some(end) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };
        let placeholder = &tail[..=end];
        match args.next() {
            // Writing to a String cannot fail.
            Some(arg) => {
                let _ = write!(out, "{arg}");
            }
            None => out.push_str(placeholder),
        }
        rest = &tail[end + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    fn substitutes_placeholders_in_order() {
        let rendered = render_template(
            "Sentry rejected the envelope {eventId}. Status code: {statusCode}.",
            &[&"abc", &429],
        );
        assert_eq!(rendered, "Sentry rejected the envelope abc. Status code: 429.");
    }

    #[rstest]
    #[case("{{literal}}", "{literal}")]
    #[case("missing {arg}", "missing {arg}")]
    #[case("dangling {brace", "dangling {brace")]
    #[case("stray } brace", "stray } brace")]
    fn leaves_non_placeholders_alone(#[case] template: &str, #[case] expected: &str) {
        assert_eq!(render_template(template, &[]), expected);
    }

    proptest! {
        #[test]
        fn text_without_braces_is_unchanged(text in "[^{}]*") {
            prop_assert_eq!(render_template(&text, &[&1]), text);
        }
    }
}
