//! Word-confidence tallying over String elements.

use alto_core::ConfidenceTally;
use roxmltree::Document;

use crate::document::is_named;

/// Sum the WC attribute over every String element. Strings whose WC is
/// missing or does not parse as a float contribute to neither the sum nor
/// the count.
pub(crate) fn tally(doc: &Document, ns: Option<&str>) -> ConfidenceTally {
    let mut tally = ConfidenceTally::new();
    for word in doc.descendants().filter(|n| is_named(*n, ns, "String")) {
        if let Some(wc) = word.attribute("WC").and_then(|v| v.parse::<f64>().ok()) {
            tally.add(wc);
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use crate::Alto;

    const NS: &str = "http://www.loc.gov/standards/alto/ns-v3#";

    fn page(body: &str) -> String {
        format!(
            r#"<alto xmlns="{NS}"><Layout><Page><TextLine>{body}</TextLine></Page></Layout></alto>"#
        )
    }

    #[test]
    fn mean_over_three_words() {
        let xml = page(concat!(
            r#"<String CONTENT="a" WC="0.9"/>"#,
            r#"<String CONTENT="b" WC="0.8"/>"#,
            r#"<String CONTENT="c" WC="0.7"/>"#,
        ));
        let doc = Alto::parse(&xml).unwrap();
        assert_eq!(doc.mean_confidence(), 80.0);
    }

    #[test]
    fn document_without_strings_reports_zero() {
        let xml = format!(r#"<alto xmlns="{NS}"/>"#);
        let doc = Alto::parse(&xml).unwrap();
        assert_eq!(doc.mean_confidence(), 0.0);
        assert_eq!(doc.confidence_tally().count(), 0);
    }

    #[test]
    fn missing_wc_is_left_out_of_the_denominator() {
        let xml = page(concat!(
            r#"<String CONTENT="a" WC="1.0"/>"#,
            r#"<String CONTENT="b"/>"#,
            r#"<String CONTENT="c" WC="0.5"/>"#,
        ));
        let doc = Alto::parse(&xml).unwrap();
        let tally = doc.confidence_tally();
        assert_eq!(tally.count(), 2);
        assert_eq!(tally.mean_percent(), 75.0);
    }

    #[test]
    fn unparseable_wc_is_skipped() {
        let xml = page(concat!(
            r#"<String CONTENT="a" WC="n/a"/>"#,
            r#"<String CONTENT="b" WC="0.6"/>"#,
        ));
        let doc = Alto::parse(&xml).unwrap();
        let tally = doc.confidence_tally();
        assert_eq!(tally.count(), 1);
        assert_eq!(tally.mean_percent(), 60.0);
    }
}
