//! `<head>` markup for attached unfurl tags.
//!
//! Open Graph and Facebook tags use `property=`; Twitter cards use `name=`.

use crate::page::{Tags, Unfurl};
use crate::utils::html::escape_attr;
use std::fmt::Write;

/// Render all attached tags as `<head>` elements, one per line.
pub fn render_head(unfurl: &Unfurl) -> String {
    let mut out = String::new();

    for tags in [&unfurl.og, &unfurl.fb].into_iter().flatten() {
        push_meta(&mut out, "property", tags);
    }
    if let Some(tags) = &unfurl.twitter {
        push_meta(&mut out, "name", tags);
    }
    if let Some(oembed) = &unfurl.oembed {
        writeln!(
            out,
            r#"<link rel="alternate" type="application/json+oembed" href="{}">"#,
            escape_attr(&oembed.url)
        )
        .ok();
    }

    out
}

fn push_meta(out: &mut String, attr: &str, tags: &Tags) {
    for (key, value) in tags {
        writeln!(
            out,
            r#"<meta {attr}="{}" content="{}">"#,
            escape_attr(key),
            escape_attr(value)
        )
        .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::OEmbedLink;

    fn tags(pairs: &[(&str, &str)]) -> Tags {
        pairs
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty() {
        assert_eq!(render_head(&Unfurl::default()), "");
    }

    #[test]
    fn test_property_and_name() {
        let unfurl = Unfurl {
            og: Some(tags(&[("og:title", "Hello"), ("og:type", "article")])),
            fb: Some(tags(&[("fb:app_id", "123")])),
            twitter: Some(tags(&[("twitter:card", "summary")])),
            oembed: None,
        };

        assert_eq!(
            render_head(&unfurl),
            concat!(
                "<meta property=\"og:title\" content=\"Hello\">\n",
                "<meta property=\"og:type\" content=\"article\">\n",
                "<meta property=\"fb:app_id\" content=\"123\">\n",
                "<meta name=\"twitter:card\" content=\"summary\">\n",
            )
        );
    }

    #[test]
    fn test_oembed_link() {
        let unfurl = Unfurl {
            oembed: Some(OEmbedLink {
                save_as: "posts/x.json".into(),
                url: "http://example.com/posts/x.json".into(),
            }),
            ..Default::default()
        };

        assert_eq!(
            render_head(&unfurl),
            "<link rel=\"alternate\" type=\"application/json+oembed\" href=\"http://example.com/posts/x.json\">\n"
        );
    }

    #[test]
    fn test_escapes_values() {
        let unfurl = Unfurl {
            og: Some(tags(&[("og:title", r#"Tom & "Jerry" <3"#)])),
            ..Default::default()
        };

        let head = render_head(&unfurl);
        assert!(head.contains(r#"content="Tom &amp; &quot;Jerry&quot; &lt;3""#));
    }
}
