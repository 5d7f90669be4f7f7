use scraper::Html;

/// Text content of an HTML title fragment: highlight tags are dropped and
/// character references decoded, so the result is safe for a terminal.
pub fn plain_text(raw: &str) -> String {
    let fragment = Html::parse_fragment(raw);
    fragment.root_element().text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_highlight_markup() {
        assert_eq!(
            plain_text("Learning <em class='highlight'>Kotlin</em> coroutines"),
            "Learning Kotlin coroutines"
        );
    }

    #[test]
    fn literal_less_than_survives_next_to_highlight() {
        assert_eq!(
            plain_text("Compare a < b in <em class='highlight'>Kotlin</em> generics"),
            "Compare a < b in Kotlin generics"
        );
    }

    #[test]
    fn decodes_named_and_numeric_references() {
        assert_eq!(plain_text("A &amp; B &lt;3"), "A & B <3");
        assert_eq!(plain_text("&amp;lt;"), "&lt;");
        assert_eq!(plain_text("It&#x27;s Rust&#8217;s turn"), "It's Rust\u{2019}s turn");
    }

    #[test]
    fn keeps_lone_greater_than() {
        assert_eq!(plain_text("a > b"), "a > b");
    }
}
