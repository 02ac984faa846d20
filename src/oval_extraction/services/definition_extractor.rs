use super::criteria_resolver::CriteriaResolver;
use super::reference_tables::ReferenceTables;
use super::xml::{child_element, element_children, is_oval_element, local_name, raw_text};
use crate::oval_extraction::domain::{CveReference, VulnerabilityDefinition, VulnerabilityList};
use crate::shared::error::OvalError;
use roxmltree::{Document, Node};

/// Placeholder used for a definition without an `id`
const ANONYMOUS_DEFINITION: &str = "<definition without id>";

/// DefinitionExtractor service for assembling vulnerability definitions
///
/// Reads definition metadata and attaches the resolved criteria tree.
pub struct DefinitionExtractor;

impl DefinitionExtractor {
    /// Extracts the first `limit` definitions (all when `None`) in document order
    ///
    /// Builds the reference tables once and fails on the first definition that
    /// cannot be fully resolved. This is the library entry point for callers
    /// that already hold a parsed document and need no progress reporting.
    pub fn extract(
        document: &Document<'_>,
        limit: Option<usize>,
    ) -> Result<VulnerabilityList, OvalError> {
        let tables = ReferenceTables::build(document);

        Self::select(document, limit)
            .into_iter()
            .map(|definition| Self::extract_definition(&tables, definition))
            .collect()
    }

    /// Selects `<definition>` elements in document order, truncated by `limit`
    pub fn select<'a, 'input>(
        document: &'a Document<'input>,
        limit: Option<usize>,
    ) -> Vec<Node<'a, 'input>> {
        document
            .root_element()
            .descendants()
            .filter(|node| is_oval_element(*node, "definition"))
            .take(limit.unwrap_or(usize::MAX))
            .collect()
    }

    /// The `id` of a `<definition>` element, or a placeholder when it has none
    pub fn definition_id<'a>(definition: Node<'a, '_>) -> &'a str {
        definition.attribute("id").unwrap_or(ANONYMOUS_DEFINITION)
    }

    /// Builds one VulnerabilityDefinition from a `<definition>` element
    ///
    /// # Errors
    /// - `MissingMetadata` when id, class, title, description, family or
    ///   criteria is absent
    /// - any resolution error raised while resolving the criteria tree
    pub fn extract_definition<'a, 'input>(
        tables: &ReferenceTables<'a, 'input>,
        definition: Node<'a, 'input>,
    ) -> Result<VulnerabilityDefinition, OvalError> {
        let id = definition
            .attribute("id")
            .ok_or_else(|| Self::missing(ANONYMOUS_DEFINITION, "@id"))?;
        let class = definition
            .attribute("class")
            .ok_or_else(|| Self::missing(id, "@class"))?;

        let metadata =
            child_element(definition, "metadata").ok_or_else(|| Self::missing(id, "metadata"))?;

        let title = child_element(metadata, "title")
            .and_then(raw_text)
            .ok_or_else(|| Self::missing(id, "metadata/title"))?;
        let description = child_element(metadata, "description")
            .and_then(raw_text)
            .ok_or_else(|| Self::missing(id, "metadata/description"))?;
        let family = child_element(metadata, "affected")
            .and_then(|affected| affected.attribute("family"))
            .ok_or_else(|| Self::missing(id, "metadata/affected/@family"))?;

        let cve = Self::cve_references(id, metadata)?;

        let criteria = child_element(definition, "criteria")
            .ok_or_else(|| Self::missing(id, "criteria"))?;
        let criteria = CriteriaResolver::new(tables).resolve_root(id, criteria)?;

        log::debug!(
            "{}: {} cve(s), {} test(s) in criteria",
            id,
            cve.len(),
            criteria.leaf_count()
        );

        Ok(VulnerabilityDefinition {
            id: id.to_string(),
            class: class.to_uppercase(),
            title,
            description,
            family: family.to_string(),
            cve,
            criteria,
        })
    }

    /// Reads every `metadata/advisory/cve`; a missing advisory yields no CVEs
    fn cve_references(id: &str, metadata: Node<'_, '_>) -> Result<Vec<CveReference>, OvalError> {
        let Some(advisory) = child_element(metadata, "advisory") else {
            return Ok(Vec::new());
        };

        element_children(advisory)
            .filter(|child| local_name(*child) == "cve")
            .map(|cve| -> Result<CveReference, OvalError> {
                let cve_id =
                    raw_text(cve).ok_or_else(|| Self::missing(id, "metadata/advisory/cve"))?;
                Ok(CveReference::new(
                    cve_id,
                    cve.attribute("cvss3").map(str::to_string),
                ))
            })
            .collect()
    }

    fn missing(definition: &str, field: &str) -> OvalError {
        OvalError::MissingMetadata {
            definition: definition.to_string(),
            field: field.to_string(),
        }
    }
}
