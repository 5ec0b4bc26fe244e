use scraper::{Html, Selector};

pub(crate) const WATCH_PATH_PREFIX: &str = "/watch?v=";

const ANCHOR_SELECTOR: &str = "a[href]";

/// Returns the `href` of the first anchor element in document order that
/// points at a watch page. Anchors inside comments or script text are not
/// elements and never match.
pub(crate) fn first_watch_href(html: &str) -> Option<String> {
    let anchors = Selector::parse(ANCHOR_SELECTOR).expect("the anchor selector is valid");
    let document = Html::parse_document(html);

    document
        .select(&anchors)
        .filter_map(|anchor| anchor.value().attr("href"))
        .find(|href| href.starts_with(WATCH_PATH_PREFIX))
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_watch_link_in_document_order() {
        let html = r#"
            <a href="/feed/trending">Trending</a>
            <a class="thumb" href="/watch?v=FGBhQbmPwH8">One More Time</a>
            <a href="/watch?v=second">Other</a>
        "#;

        assert_eq!(first_watch_href(html).as_deref(), Some("/watch?v=FGBhQbmPwH8"));
    }

    #[test]
    fn none_without_watch_links() {
        let html = r#"<html><body><a href="/results?x=1">x</a><a>empty</a></body></html>"#;

        assert_eq!(first_watch_href(html), None);
        assert_eq!(first_watch_href(""), None);
    }

    #[test]
    fn prefix_must_start_the_href() {
        let html = r#"
            <a href="https://www.youtube.com/watch?v=absolute">abs</a>
            <a href="/shorts/watch?v=nested">nested</a>
            <a href='/watch?v=quoted'>quoted</a>
        "#;

        assert_eq!(first_watch_href(html).as_deref(), Some("/watch?v=quoted"));
    }

    #[test]
    fn accepts_unquoted_and_uppercase_markup() {
        let html = r#"<A ID=x HREF=/watch?v=upper>u</A>"#;

        assert_eq!(first_watch_href(html).as_deref(), Some("/watch?v=upper"));
    }

    #[test]
    fn ignores_other_elements_and_similar_attributes() {
        let html = r#"
            <link href="/watch?v=link">
            <abbr href="/watch?v=abbr"></abbr>
            <a data-href="/watch?v=data" href="/watch?v=real">r</a>
        "#;

        assert_eq!(first_watch_href(html).as_deref(), Some("/watch?v=real"));
    }

    #[test]
    fn skips_anchors_in_comments() {
        let html = r#"<!-- <a href="/watch?v=commented"> --><a href="/watch?v=real">r</a>"#;

        assert_eq!(first_watch_href(html).as_deref(), Some("/watch?v=real"));
    }

    #[test]
    fn skips_anchors_in_script_text() {
        let html = r#"
            <script>var s = '<a href="/watch?v=inscript">';</script>
            <a href="/watch?v=real">r</a>
        "#;

        assert_eq!(first_watch_href(html).as_deref(), Some("/watch?v=real"));
    }

    #[test]
    fn angle_bracket_in_earlier_attribute() {
        let html = r#"<a title="1 > 0" href="/watch?v=real">r</a>"#;

        assert_eq!(first_watch_href(html).as_deref(), Some("/watch?v=real"));
    }

    #[test]
    fn decodes_entities_in_href() {
        let html = r#"
            <a href="/watch?v=abc&amp;list=RD&amp;index=2">x</a>
            <a href="&#47;watch?v=numeric">y</a>
        "#;

        assert_eq!(
            first_watch_href(html).as_deref(),
            Some("/watch?v=abc&list=RD&index=2")
        );
        assert_eq!(
            first_watch_href(r#"<a href="&#47;watch?v=numeric">y</a>"#).as_deref(),
            Some("/watch?v=numeric")
        );
    }
}
