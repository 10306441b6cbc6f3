//! Markup stripping for user-supplied text.
//!
//! Everything that looks like a tag is dropped along with its attributes.
//! The bodies of `script` and `style` elements and HTML comments are
//! dropped entirely; all other text content is kept.

/// Elements whose content is never rendered as text.
const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

/// True when `raw` has nothing but whitespace.
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// Strip all markup from `raw`, returning trimmed plain text.
pub fn clean(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw.trim();

    while let Some(pos) = rest.find('<') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if !starts_markup(tail) {
            out.push('<');
            rest = &tail[1..];
            continue;
        }

        if let Some(comment) = tail.strip_prefix("<!--") {
            rest = match comment.find("-->") {
                Some(end) => &comment[end + 3..],
                None => "",
            };
            continue;
        }

        let Some(end) = tag_end(tail) else {
            // Unterminated tag swallows the remainder.
            rest = "";
            break;
        };
        let tag = &tail[1..end];
        rest = &tail[end + 1..];

        if let Some(name) = opening_raw_text_element(tag) {
            rest = skip_raw_text(rest, name);
        }
    }
    out.push_str(rest);

    out.trim().to_string()
}

fn starts_markup(tail: &str) -> bool {
    matches!(
        tail[1..].chars().next(),
        Some(c) if c.is_ascii_alphabetic() || c == '/' || c == '!' || c == '?'
    )
}

/// Index of the `>` closing the tag at the start of `tail`, honouring quoted
/// attribute values.
fn tag_end(tail: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, c) in tail.char_indices().skip(1) {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"') | (None, '\'') => quote = Some(c),
            (None, '>') => return Some(i),
            _ => {}
        }
    }
    None
}

fn opening_raw_text_element(tag: &str) -> Option<&'static str> {
    if tag.starts_with('/') || tag.ends_with('/') {
        return None;
    }
    let name: String = tag
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    RAW_TEXT_ELEMENTS.into_iter().find(|el| *el == name)
}

/// Skip past the matching `</name>`; an unclosed element swallows the rest.
fn skip_raw_text<'a>(rest: &'a str, name: &str) -> &'a str {
    let lower = rest.to_ascii_lowercase();
    let closing = format!("</{}", name);
    let Some(start) = lower.find(&closing) else {
        return "";
    };
    match rest[start..].find('>') {
        Some(end) => &rest[start + end + 1..],
        None => "",
    }
}
