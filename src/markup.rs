//! Conversion between the simple and the advanced inline formatting of Chat.
//!
//! Simple: `*bold*`, `_italic_`, `~strike~`, `<url|label>`.
//! Advanced: `<b>`, `<i>`, `<strike>`, `<a href>`, `<br>`, `<u>`, `<font color>`.
//!
//! `.` never matches a newline, so a delimiter pair only matches within one line.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SIMPLE_LINK: Regex = Regex::new(r"<([^<>|\n]+?)\|([^<>\n]+?)>").unwrap();
    static ref SIMPLE_BOLD: Regex = Regex::new(r"\*(.+?)\*").unwrap();
    static ref SIMPLE_ITALIC: Regex = Regex::new(r"_(.+?)_").unwrap();
    static ref SIMPLE_STRIKE: Regex = Regex::new(r"~(.+?)~").unwrap();

    static ref ADVANCED_BOLD: Regex = Regex::new(r"<b>(.*?)</b>").unwrap();
    static ref ADVANCED_ITALIC: Regex = Regex::new(r"<i>(.*?)</i>").unwrap();
    static ref ADVANCED_STRIKE: Regex = Regex::new(r"<strike>(.*?)</strike>").unwrap();
    static ref ADVANCED_LINK: Regex = Regex::new(r#"<a href="(.*?)">(.*?)</a>"#).unwrap();
    static ref ADVANCED_UNDERLINE: Regex = Regex::new(r"<u>(.*?)</u>").unwrap();
    static ref ADVANCED_FONT: Regex = Regex::new(r#"<font color="[^"]*">(.*?)</font>"#).unwrap();
    static ref ADVANCED_BREAK: Regex = Regex::new(r"<br\s*/?>").unwrap();
}

/// Rewrites simple formatting into the HTML subset used by card widgets.
pub fn simple_to_advanced(text: &str) -> String {
    // Links go first, they share `<` and `>` with the generated tags.
    let text = SIMPLE_LINK.replace_all(text, r#"<a href="${1}">${2}</a>"#);
    let text = SIMPLE_BOLD.replace_all(&text, "<b>${1}</b>");
    let text = SIMPLE_ITALIC.replace_all(&text, "<i>${1}</i>");
    let text = SIMPLE_STRIKE.replace_all(&text, "<strike>${1}</strike>");
    text.into_owned()
}

/// Rewrites the HTML subset into simple formatting.
///
/// Underline and font color have no simple equivalent and are dropped,
/// keeping the inner text.
pub fn advanced_to_simple(text: &str) -> String {
    let text = ADVANCED_BOLD.replace_all(text, "*${1}*");
    let text = ADVANCED_ITALIC.replace_all(&text, "_${1}_");
    let text = ADVANCED_STRIKE.replace_all(&text, "~${1}~");
    let text = ADVANCED_LINK.replace_all(&text, "<${1}|${2}>");
    let text = ADVANCED_UNDERLINE.replace_all(&text, "${1}");
    let text = ADVANCED_FONT.replace_all(&text, "${1}");
    // Last, so the rules above still see a single line.
    let text = ADVANCED_BREAK.replace_all(&text, "\n");
    text.into_owned()
}
