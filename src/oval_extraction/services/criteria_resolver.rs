use super::leaf_resolver::LeafResolver;
use super::reference_tables::ReferenceTables;
use super::xml::{attributes_except, child_element, element_children, is_oval_element, local_name};
use crate::oval_extraction::domain::{CriteriaGroup, CriteriaNode, DEFAULT_OPERATOR};
use crate::shared::error::{OvalError, Section};
use roxmltree::Node;

/// Nesting limit protobuf decoders apply to embedded messages
const WIRE_RECURSION_LIMIT: usize = 100;

/// Messages on the path from the root message down to the root `Criteria`
/// (`Vulnerability`, `Criteria`)
const ROOT_MESSAGE_DEPTH: usize = 2;

/// Messages below the deepest group down to a leaf field value
/// (`CriteriaNode`, `Criterion`, `Test`, `Object`, map entry, `Field`)
const LEAF_MESSAGE_DEPTH: usize = 6;

/// Maximum nesting of criteria groups
///
/// Each nested group adds a `CriteriaNode` and a `Criteria` message; an
/// `extend_definition` adds one more and counts as two levels. Trees within
/// this limit decode again under the wire recursion limit.
pub const MAX_CRITERIA_DEPTH: usize = 32;

const _: () = assert!(
    ROOT_MESSAGE_DEPTH + 2 * (MAX_CRITERIA_DEPTH - 1) + LEAF_MESSAGE_DEPTH <= WIRE_RECURSION_LIMIT
);

/// The element kinds allowed inside a criteria tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriteriaElementKind {
    /// `<criteria>` boolean group
    Group,
    /// `<criterion test_ref=".."/>`
    Leaf,
    /// `<extend_definition definition_ref=".."/>`
    Extension,
}

impl CriteriaElementKind {
    /// Classifies an element by its namespace-qualified tag
    pub fn classify(node: Node<'_, '_>) -> Option<Self> {
        if is_oval_element(node, "criteria") {
            Some(Self::Group)
        } else if is_oval_element(node, "criterion") {
            Some(Self::Leaf)
        } else if is_oval_element(node, "extend_definition") {
            Some(Self::Extension)
        } else {
            None
        }
    }
}

/// CriteriaResolver service for turning a criteria element into a resolved tree
///
/// The document is reached only through the borrowed reference tables; the
/// resolver itself holds no state between calls.
pub struct CriteriaResolver<'t, 'a, 'input> {
    tables: &'t ReferenceTables<'a, 'input>,
}

/// Per-definition bookkeeping threaded through the recursion
struct Resolution {
    /// Definition whose tree is being resolved (for error messages)
    root: String,
    /// Definitions currently being expanded via `extend_definition`
    in_progress: Vec<String>,
}

impl<'t, 'a, 'input> CriteriaResolver<'t, 'a, 'input> {
    pub fn new(tables: &'t ReferenceTables<'a, 'input>) -> Self {
        Self { tables }
    }

    /// Resolves any criteria element (group, criterion or extension)
    ///
    /// `definition_id` names the owning definition; it seeds cycle detection
    /// and appears in error messages.
    pub fn resolve(
        &self,
        definition_id: &str,
        element: Node<'a, 'input>,
    ) -> Result<CriteriaNode, OvalError> {
        let mut resolution = Resolution {
            root: definition_id.to_string(),
            in_progress: vec![definition_id.to_string()],
        };
        self.resolve_node(element, &mut resolution, 1)
    }

    /// Resolves the root `<criteria>` of a definition, which must be a group
    pub fn resolve_root(
        &self,
        definition_id: &str,
        element: Node<'a, 'input>,
    ) -> Result<CriteriaGroup, OvalError> {
        match self.resolve(definition_id, element)? {
            CriteriaNode::Group(group) => Ok(group),
            _ => Err(OvalError::UnsupportedCriteriaElement {
                definition: definition_id.to_string(),
                tag: local_name(element).to_string(),
            }),
        }
    }

    fn resolve_node(
        &self,
        element: Node<'a, 'input>,
        resolution: &mut Resolution,
        depth: usize,
    ) -> Result<CriteriaNode, OvalError> {
        match CriteriaElementKind::classify(element) {
            Some(CriteriaElementKind::Group) => self
                .resolve_group(element, resolution, depth)
                .map(CriteriaNode::Group),
            Some(CriteriaElementKind::Leaf) => self.resolve_leaf(element, resolution),
            Some(CriteriaElementKind::Extension) => {
                self.resolve_extension(element, resolution, depth)
            }
            None => Err(OvalError::UnsupportedCriteriaElement {
                definition: resolution.root.clone(),
                tag: local_name(element).to_string(),
            }),
        }
    }

    fn resolve_group(
        &self,
        element: Node<'a, 'input>,
        resolution: &mut Resolution,
        depth: usize,
    ) -> Result<CriteriaGroup, OvalError> {
        if depth > MAX_CRITERIA_DEPTH {
            return Err(OvalError::CriteriaTooDeep {
                definition: resolution.root.clone(),
                max_depth: MAX_CRITERIA_DEPTH,
            });
        }

        let operator = element
            .attribute("operator")
            .unwrap_or(DEFAULT_OPERATOR)
            .to_string();

        let children = element_children(element)
            .map(|child| self.resolve_node(child, resolution, depth + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CriteriaGroup::new(
            operator,
            attributes_except(element, &["operator"]),
            children,
        ))
    }

    fn resolve_leaf(
        &self,
        element: Node<'a, 'input>,
        resolution: &Resolution,
    ) -> Result<CriteriaNode, OvalError> {
        let test_ref = element
            .attribute("test_ref")
            .ok_or_else(|| OvalError::MissingReference {
                definition: resolution.root.clone(),
                element: "criterion".to_string(),
                attribute: "test_ref".to_string(),
            })?;

        Ok(CriteriaNode::Leaf {
            attributes: attributes_except(element, &["test_ref"]),
            test: LeafResolver::resolve_test(self.tables, test_ref)?,
        })
    }

    fn resolve_extension(
        &self,
        element: Node<'a, 'input>,
        resolution: &mut Resolution,
        depth: usize,
    ) -> Result<CriteriaNode, OvalError> {
        let definition_ref = element
            .attribute("definition_ref")
            .ok_or_else(|| OvalError::MissingReference {
                definition: resolution.root.clone(),
                element: "extend_definition".to_string(),
                attribute: "definition_ref".to_string(),
            })?;

        if resolution.in_progress.iter().any(|id| id == definition_ref) {
            return Err(OvalError::ReferenceCycle {
                id: definition_ref.to_string(),
            });
        }

        let definition = self.tables.lookup(Section::Definitions, definition_ref)?;
        let criteria = child_element(definition, "criteria")
            .filter(|node| is_oval_element(*node, "criteria"))
            .ok_or_else(|| OvalError::MissingMetadata {
                definition: definition_ref.to_string(),
                field: "criteria".to_string(),
            })?;

        log::trace!(
            "{}: inlining criteria of extended definition {}",
            resolution.root,
            definition_ref
        );

        // The ExtendDefinition wrapper costs one level of its own
        resolution.in_progress.push(definition_ref.to_string());
        let group = self.resolve_group(criteria, resolution, depth + 1);
        resolution.in_progress.pop();

        Ok(CriteriaNode::Extension {
            definition_ref: definition_ref.to_string(),
            attributes: attributes_except(element, &["definition_ref"]),
            criteria: group?,
        })
    }
}
