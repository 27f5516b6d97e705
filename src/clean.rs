use select::document::Document;
use select::node::{Data, Node};

/// Elements whose content is never readable prose.
pub const NON_CONTENT_TAGS: [&str; 2] = ["script", "style"];

/// Element whose content the parser hands out as unparsed markup.
const RAW_MARKUP_TAG: &str = "noscript";

pub trait DocumentCleaner {
    /// Whether the node and its whole subtree should be dropped.
    fn is_non_content(node: &Node) -> bool {
        node.name()
            .map(|name| NON_CONTENT_TAGS.contains(&name))
            .unwrap_or_default()
    }

    /// Concatenate all text of the node and its descendants in document
    /// order, skipping dropped subtrees. Whitespace is kept as is.
    fn clean_node_text(node: &Node) -> String {
        let mut txt = String::new();
        recur_text::<Self>(node, &mut txt);
        txt
    }

    /// Extract the text of the whole document.
    fn clean_document_text(doc: &Document) -> String {
        let mut txt = String::new();
        recur_document::<Self>(doc, &mut txt);
        txt
    }
}

fn recur_document<T: DocumentCleaner + ?Sized>(doc: &Document, string: &mut String) {
    for root in doc.find(|node: &Node| node.parent().is_none()) {
        recur_text::<T>(&root, string);
    }
}

fn recur_text<T: DocumentCleaner + ?Sized>(node: &Node, string: &mut String) {
    match node.data() {
        Data::Text(text) => string.push_str(text),
        Data::Element(..) if !T::is_non_content(node) => {
            // with scripting enabled the parser keeps `noscript` content as
            // raw markup
            let raw_markup = node.name() == Some(RAW_MARKUP_TAG);
            for child in node.children() {
                match child.as_text() {
                    Some(markup) if raw_markup => {
                        recur_document::<T>(&Document::from(markup), string)
                    }
                    _ => recur_text::<T>(&child, string),
                }
            }
        }
        _ => {}
    }
}

/// Drops `script` and `style` subtrees, keeps everything else.
pub struct DefaultDocumentCleaner;

impl DocumentCleaner for DefaultDocumentCleaner {}

/// Parse the `markup` permissively and return its plain text.
///
/// Malformed markup never fails, it results in partial or empty text.
pub fn strip(markup: &str) -> String {
    DefaultDocumentCleaner::clean_document_text(&Document::from(markup))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_scripts_and_styles() {
        let html = r#"<html><head><style>body { color: red; }</style>
<script>var x = "hidden";</script><title>Title</title></head>
<body><p>Hello <b>world</b></p><script type="text/javascript">alert(1)</script></body></html>"#;
        let txt = strip(html);
        assert!(txt.contains("Title"));
        assert!(txt.contains("Hello world"));
        assert!(!txt.contains("hidden"));
        assert!(!txt.contains("color"));
        assert!(!txt.contains("alert"));
    }

    #[test]
    fn keeps_whitespace_between_nodes() {
        let txt = strip("<p>one</p>\n<p>two</p>");
        assert_eq!(txt, "one\ntwo");
    }

    #[test]
    fn skips_comments() {
        let txt = strip("<div>a<!-- not text -->b</div>");
        assert_eq!(txt, "ab");
    }

    #[test]
    fn malformed_markup_is_lenient() {
        assert_eq!(strip(""), "");
        let txt = strip("<div><p>unclosed <span>text");
        assert_eq!(txt, "unclosed text");
    }

    #[test]
    fn noscript_markup_is_parsed() {
        let html = r#"<html><head><noscript><link rel="stylesheet" href="x.css"></noscript></head><body><noscript><iframe src="https://www.googletagmanager.com/ns.html?id=GTM-ABC" height="0"></iframe></noscript><p>Hello</p></body></html>"#;
        let txt = strip(html);
        assert!(!txt.contains('<'));
        assert!(!txt.contains("googletagmanager"));
        assert_eq!(txt, "Hello");
    }

    #[test]
    fn noscript_text_is_kept() {
        let txt = strip("<body><noscript>Please enable <b>JavaScript</b></noscript><p>!</p></body>");
        assert_eq!(txt, "Please enable JavaScript!");
    }

    #[test]
    fn scripts_inside_noscript_are_dropped() {
        let txt = strip("<body><noscript><script>track()</script>plain</noscript></body>");
        assert_eq!(txt, "plain");
    }

    #[test]
    fn custom_cleaner() {
        struct NoHeadings;
        impl DocumentCleaner for NoHeadings {
            fn is_non_content(node: &Node) -> bool {
                node.name() == Some("h1")
            }
        }
        let doc = Document::from("<h1>Heading</h1><p>Body</p>");
        assert_eq!(NoHeadings::clean_document_text(&doc), "Body");
    }
}
