use crate::oval_extraction::domain::NodeAttributes;
use crate::shared::error::OvalError;
use roxmltree::{Document, Node};

/// Namespace of the OVAL definitions document structure
pub const OVAL_DEFINITIONS_NS: &str = "http://oval.mitre.org/XMLSchema/oval-definitions-5";

/// Parses an OVAL document, mapping XML syntax errors to `DocumentParseError`
pub fn parse_document(content: &str) -> Result<Document<'_>, OvalError> {
    Document::parse(content).map_err(|e| OvalError::DocumentParseError {
        details: e.to_string(),
    })
}

/// Local tag name with the namespace stripped
pub fn local_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// True for an element `<name>` in the OVAL definitions namespace
///
/// Documents without a default namespace are accepted as well.
pub fn is_oval_element(node: Node<'_, '_>, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && matches!(node.tag_name().namespace(), None | Some(OVAL_DEFINITIONS_NS))
}

/// Direct element children in document order
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// First direct child element with the given local name, in any namespace
///
/// Vendor extensions such as `<advisory>` are not always in the OVAL namespace.
pub fn child_element<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    element_children(node).find(|child| local_name(*child) == name)
}

/// Raw text content, `None` when the element has no text
pub fn raw_text(node: Node<'_, '_>) -> Option<String> {
    node.text()
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// All un-namespaced attributes except the listed ones
pub fn attributes_except(node: Node<'_, '_>, excluded: &[&str]) -> NodeAttributes {
    node.attributes()
        .filter(|attr| attr.namespace().is_none() && !excluded.contains(&attr.name()))
        .map(|attr| (attr.name().to_string(), attr.value().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    const DOC: &str = r#"<root xmlns="http://oval.mitre.org/XMLSchema/oval-definitions-5"
        xmlns:red-def="http://oval.mitre.org/XMLSchema/oval-definitions-5#linux">
        <criteria operator="OR" negate="true" comment="c"/>
        <red-def:rpminfo_test id="t1"/>
        <title>  Padded title  </title>
        <empty></empty>
    </root>"#;

    #[test]
    fn test_parse_document_rejects_malformed_xml() {
        let err = parse_document("<oval_definitions><definitions>").unwrap_err();
        assert!(matches!(err, OvalError::DocumentParseError { .. }));
        assert!(err.to_string().contains("Failed to parse OVAL document"));
    }

    #[test]
    fn test_parse_document_accepts_empty_root() {
        let doc = parse_document("<oval_definitions/>").unwrap();
        assert_eq!(local_name(doc.root_element()), "oval_definitions");
    }

    #[test]
    fn test_local_name_strips_namespace() {
        let doc = Document::parse(DOC).unwrap();
        let test = element_children(doc.root_element()).nth(1).unwrap();
        assert_eq!(local_name(test), "rpminfo_test");
        assert!(!is_oval_element(test, "rpminfo_test"));
    }

    #[test]
    fn test_is_oval_element_accepts_default_namespace() {
        let doc = Document::parse(DOC).unwrap();
        let criteria = element_children(doc.root_element()).next().unwrap();
        assert!(is_oval_element(criteria, "criteria"));
        assert!(!is_oval_element(criteria, "criterion"));
    }

    #[test]
    fn test_is_oval_element_accepts_no_namespace() {
        let doc = Document::parse("<criteria/>").unwrap();
        assert!(is_oval_element(doc.root_element(), "criteria"));
    }

    #[test]
    fn test_attributes_except_skips_excluded() {
        let doc = Document::parse(DOC).unwrap();
        let criteria = element_children(doc.root_element()).next().unwrap();
        let attributes = attributes_except(criteria, &["operator"]);
        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes.get("negate").map(String::as_str), Some("true"));
        assert!(!attributes.contains_key("operator"));
    }

    #[test]
    fn test_raw_text_keeps_padding() {
        let doc = Document::parse(DOC).unwrap();
        let title = child_element(doc.root_element(), "title").unwrap();
        assert_eq!(raw_text(title).as_deref(), Some("  Padded title  "));

        let empty = child_element(doc.root_element(), "empty").unwrap();
        assert!(raw_text(empty).is_none());
    }
}
