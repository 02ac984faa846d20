use super::xml::{element_children, is_oval_element};
use crate::shared::error::{OvalError, Section};
use roxmltree::{Document, Node};
use std::collections::HashMap;

type Index<'a, 'input> = HashMap<&'a str, Node<'a, 'input>>;

/// Id-indexed lookup tables over the referenceable sections of one document
///
/// Built once per document in a single pass over each section; read-only
/// afterwards, so it can be shared freely while definitions are resolved.
#[derive(Debug)]
pub struct ReferenceTables<'a, 'input> {
    definitions: Index<'a, 'input>,
    tests: Index<'a, 'input>,
    objects: Index<'a, 'input>,
    states: Index<'a, 'input>,
}

impl<'a, 'input> ReferenceTables<'a, 'input> {
    /// Indexes `<definitions>`, `<tests>`, `<objects>` and `<states>`
    ///
    /// A missing section produces an empty table. When two elements share an
    /// id, the first one in document order wins.
    pub fn build(document: &'a Document<'input>) -> Self {
        let tables = Self {
            definitions: Self::index_section(document, Section::Definitions),
            tests: Self::index_section(document, Section::Tests),
            objects: Self::index_section(document, Section::Objects),
            states: Self::index_section(document, Section::States),
        };

        log::debug!(
            "indexed {} definitions, {} tests, {} objects, {} states",
            tables.definitions.len(),
            tables.tests.len(),
            tables.objects.len(),
            tables.states.len()
        );

        tables
    }

    fn index_section(document: &'a Document<'input>, section: Section) -> Index<'a, 'input> {
        let mut index = HashMap::new();

        let Some(container) = document
            .root_element()
            .descendants()
            .find(|node| is_oval_element(*node, section.tag()))
        else {
            return index;
        };

        for element in element_children(container) {
            if let Some(id) = element.attribute("id") {
                index.entry(id).or_insert(element);
            }
        }

        index
    }

    fn table(&self, section: Section) -> &Index<'a, 'input> {
        match section {
            Section::Definitions => &self.definitions,
            Section::Tests => &self.tests,
            Section::Objects => &self.objects,
            Section::States => &self.states,
        }
    }

    /// Returns the element of `section` whose `id` attribute equals `id`
    ///
    /// # Errors
    /// `ReferenceNotFound` when the section has no such element
    pub fn lookup(&self, section: Section, id: &str) -> Result<Node<'a, 'input>, OvalError> {
        self.table(section)
            .get(id)
            .copied()
            .ok_or_else(|| OvalError::ReferenceNotFound {
                section,
                id: id.to_string(),
            })
    }

    /// Number of indexed elements in a section
    pub fn len(&self, section: Section) -> usize {
        self.table(section).len()
    }

    pub fn is_empty(&self, section: Section) -> bool {
        self.table(section).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<oval_definitions xmlns="http://oval.mitre.org/XMLSchema/oval-definitions-5"
        xmlns:lin="http://oval.mitre.org/XMLSchema/oval-definitions-5#linux">
      <tests>
        <lin:rpminfo_test id="oval:t:tst:1" check="all"/>
        <lin:rpminfo_test id="oval:t:tst:2" check="at least one"/>
        <lin:rpminfo_test id="oval:t:tst:1" check="none satisfy"/>
      </tests>
      <objects>
        <lin:rpminfo_object id="oval:t:obj:1"/>
      </objects>
    </oval_definitions>"#;

    #[test]
    fn test_lookup_existing_ids() {
        let doc = Document::parse(DOC).unwrap();
        let tables = ReferenceTables::build(&doc);

        let test = tables.lookup(Section::Tests, "oval:t:tst:2").unwrap();
        assert_eq!(test.attribute("check"), Some("at least one"));
        assert!(tables.lookup(Section::Objects, "oval:t:obj:1").is_ok());
    }

    #[test]
    fn test_first_duplicate_wins() {
        let doc = Document::parse(DOC).unwrap();
        let tables = ReferenceTables::build(&doc);

        assert_eq!(tables.len(Section::Tests), 2);
        let test = tables.lookup(Section::Tests, "oval:t:tst:1").unwrap();
        assert_eq!(test.attribute("check"), Some("all"));
    }

    #[test]
    fn test_lookup_missing_id() {
        let doc = Document::parse(DOC).unwrap();
        let tables = ReferenceTables::build(&doc);

        let err = tables.lookup(Section::Tests, "oval:t:tst:404").unwrap_err();
        assert!(matches!(
            err,
            OvalError::ReferenceNotFound { section: Section::Tests, ref id } if id == "oval:t:tst:404"
        ));
    }

    #[test]
    fn test_missing_section_is_empty() {
        let doc = Document::parse(DOC).unwrap();
        let tables = ReferenceTables::build(&doc);

        assert!(tables.is_empty(Section::States));
        assert!(matches!(
            tables.lookup(Section::States, "oval:t:ste:1"),
            Err(OvalError::ReferenceNotFound { section: Section::States, .. })
        ));
    }
}
