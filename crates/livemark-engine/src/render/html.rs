use std::sync::OnceLock;

use regex::Regex;

use super::clean::{CleanNode, CleanTree};

/// Serializes the clean view to static markup.
pub fn to_html(tree: &CleanTree) -> String {
    let mut out = String::new();
    for node in &tree.children {
        push_node(node, &mut out);
    }
    out
}

fn push_node(node: &CleanNode, out: &mut String) {
    match node {
        CleanNode::Text(text) => out.push_str(&html_escape::encode_text(text)),
        CleanNode::Element(element) => {
            let name = element.tag.name();
            out.push('<');
            out.push_str(name);
            for (attr, value) in &element.attributes {
                out.push(' ');
                out.push_str(attr);
                out.push_str("=\"");
                out.push_str(&html_escape::encode_double_quoted_attribute(value));
                out.push('"');
            }
            out.push('>');
            if element.tag.is_void() {
                return;
            }
            for child in &element.children {
                push_node(child, out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
    }
}

fn closing_tag_regex() -> &'static Regex {
    static CLOSING_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    CLOSING_TAG_REGEX.get_or_init(|| {
        Regex::new(r"(</(?:p|blockquote|ul|ol|li|h[1-6]|pre|table|thead|tbody|tr)>)")
            .expect("Invalid closing tag regex")
    })
}

fn opening_tag_regex() -> &'static Regex {
    static OPENING_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    OPENING_TAG_REGEX.get_or_init(|| {
        Regex::new(r"(<(?:pre[^>]+|ul|ol|table|thead|tbody)>)").expect("Invalid opening tag regex")
    })
}

/// Breaks markup after block closing tags and container opening tags so the
/// exported file reads one block per line.
pub fn readable(html: &str) -> String {
    let closed = closing_tag_regex().replace_all(html, "$1\n");
    opening_tag_regex().replace_all(&closed, "$1\n").into_owned()
}

/// A standalone page around the clean view.
pub fn export_document(title: &str, stylesheet: &str, tree: &CleanTree) -> String {
    let body = readable(&to_html(tree));
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
         <link rel=\"stylesheet\" href=\"{}\"/>\n</head>\n\
         <body class=\"writer\">\n{body}</body>\n</html>",
        html_escape::encode_text(title),
        html_escape::encode_double_quoted_attribute(stylesheet),
    )
}
