use crate::common_models::issue::ContextId;
use crate::localizer::Localizer;

/// Strips markup from display strings and escapes what is left as HTML text.
///
/// Entities already present in the input are decoded first so that
/// `&amp;` is not escaped a second time.
#[derive(Debug, Default, Clone)]
pub struct PlainTextLocalizer;

impl Localizer for PlainTextLocalizer {
    fn format_display_string(&self, raw: &str, _context_id: ContextId) -> String {
        let text = strip_tags(raw);
        let text = html_escape::decode_html_entities(&text);
        html_escape::encode_text(text.trim()).into_owned()
    }
}

/// Removes `<tag ...>`, `</tag>` and `<!-- ... -->` sequences. A `<` that does
/// not open a tag, or has no closing `>`, is kept as text.
fn strip_tags(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find('<') {
        result.push_str(&rest[..start]);
        let candidate = &rest[start..];

        match tag_len(candidate) {
            Some(len) => rest = &candidate[len..],
            None => {
                result.push('<');
                rest = &candidate[1..];
            }
        }
    }
    result.push_str(rest);

    result
}

fn tag_len(candidate: &str) -> Option<usize> {
    let opens_tag = candidate[1..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!');
    if !opens_tag {
        return None;
    }

    candidate.find('>').map(|end| end + 1)
}
