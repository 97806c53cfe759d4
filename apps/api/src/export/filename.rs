use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const FALLBACK_STEM: &str = "cv";

/// RFC 5987 `attr-char`: everything else in an extended parameter is percent-encoded.
const ATTR_CHAR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// `cv-<name-slug>-<YYYYMMDD-HHMMSS>.pdf`, UTC.
///
/// The slug keeps letters and digits of any script (Arabic names survive),
/// lowercases what has case, and collapses everything else into single dashes.
pub fn derive_filename(full_name: &str, at: DateTime<Utc>) -> String {
    let slug = slugify(full_name);
    let stamp = at.format("%Y%m%d-%H%M%S");
    if slug.is_empty() {
        format!("{FALLBACK_STEM}-{stamp}.pdf")
    } else {
        format!("{FALLBACK_STEM}-{slug}-{stamp}.pdf")
    }
}

/// `Content-Disposition` for an attachment (RFC 6266): a plain ASCII
/// `filename` for old clients plus the exact UTF-8 name in `filename*`.
pub fn content_disposition(filename: &str) -> String {
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        ascii_fallback(filename),
        utf8_percent_encode(filename, ATTR_CHAR)
    )
}

/// Drops non-ASCII characters and the dashes they leave doubled.
fn ascii_fallback(filename: &str) -> String {
    let mut out = String::with_capacity(filename.len());
    for c in filename.chars() {
        if !(c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_')) {
            continue;
        }
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }
    out
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
