use super::reference_tables::ReferenceTables;
use super::xml::{element_children, local_name, raw_text};
use crate::oval_extraction::domain::{
    normalize_token, Behaviors, FieldDescriptor, ObjectDescriptor, StateDescriptor,
    TestResolution,
};
use crate::shared::error::{OvalError, Section};
use roxmltree::Node;
use std::collections::BTreeMap;

/// Object entity whose attributes are boolean flags rather than a value
const BEHAVIORS_TAG: &str = "behaviors";

/// LeafResolver service for dereferencing tests, objects and states
///
/// Each call starts from an id, looks the element up in the reference tables
/// and flattens it into a self-contained descriptor.
pub struct LeafResolver;

impl LeafResolver {
    /// Resolves a `state_ref` into its entity descriptors
    pub fn resolve_state(
        tables: &ReferenceTables<'_, '_>,
        state_ref: &str,
    ) -> Result<StateDescriptor, OvalError> {
        let state = tables.lookup(Section::States, state_ref)?;

        let fields = element_children(state)
            .map(|entity| (local_name(entity).to_string(), Self::field_descriptor(entity)))
            .collect();

        Ok(StateDescriptor::new(fields))
    }

    /// Resolves an `object_ref`; a `<behaviors>` entity becomes boolean flags
    pub fn resolve_object(
        tables: &ReferenceTables<'_, '_>,
        object_ref: &str,
    ) -> Result<ObjectDescriptor, OvalError> {
        let object = tables.lookup(Section::Objects, object_ref)?;

        let mut fields = BTreeMap::new();
        let mut behaviors = None;

        for entity in element_children(object) {
            let name = local_name(entity);
            if name == BEHAVIORS_TAG {
                behaviors = Some(Self::behaviors(entity));
            } else {
                fields.insert(name.to_string(), Self::field_descriptor(entity));
            }
        }

        Ok(ObjectDescriptor::new(fields, behaviors))
    }

    /// Resolves a `test_ref` together with the object and state it points to
    ///
    /// # Errors
    /// - `ReferenceNotFound` if the test, its object or its state is missing
    /// - `MalformedTest` if the test lacks a `check` attribute or does not
    ///   hold exactly one object reference and exactly one state reference
    pub fn resolve_test(
        tables: &ReferenceTables<'_, '_>,
        test_ref: &str,
    ) -> Result<TestResolution, OvalError> {
        let test = tables.lookup(Section::Tests, test_ref)?;

        let check = test
            .attribute("check")
            .map(normalize_token)
            .ok_or_else(|| OvalError::MalformedTest {
                id: test_ref.to_string(),
                reason: "missing check attribute".to_string(),
            })?;

        let object_ref = Self::single_reference(test, test_ref, "object_ref")?;
        let state_ref = Self::single_reference(test, test_ref, "state_ref")?;

        log::trace!(
            "resolving test {} -> object {}, state {}",
            test_ref,
            object_ref,
            state_ref
        );

        Ok(TestResolution {
            check_type: local_name(test).to_string(),
            check,
            object: Self::resolve_object(tables, object_ref)?,
            state: Self::resolve_state(tables, state_ref)?,
        })
    }

    /// Finds the one child element carrying `attribute` (`object_ref` / `state_ref`)
    fn single_reference<'a>(
        test: Node<'a, '_>,
        test_ref: &str,
        attribute: &str,
    ) -> Result<&'a str, OvalError> {
        let mut references = element_children(test).filter_map(|child| child.attribute(attribute));

        match (references.next(), references.next()) {
            (Some(reference), None) => Ok(reference),
            (None, _) => Err(OvalError::MalformedTest {
                id: test_ref.to_string(),
                reason: format!("no child element with a {} attribute", attribute),
            }),
            (Some(_), Some(_)) => Err(OvalError::MalformedTest {
                id: test_ref.to_string(),
                reason: format!("more than one child element with a {} attribute", attribute),
            }),
        }
    }

    fn field_descriptor(entity: Node<'_, '_>) -> FieldDescriptor {
        FieldDescriptor::new(
            entity.attribute("datatype"),
            entity.attribute("operation"),
            raw_text(entity),
        )
    }

    fn behaviors(entity: Node<'_, '_>) -> Behaviors {
        entity
            .attributes()
            .map(|attr| (attr.name().to_string(), attr.value() == "true"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    const DOC: &str = r#"<oval_definitions xmlns="http://oval.mitre.org/XMLSchema/oval-definitions-5"
        xmlns:lin="http://oval.mitre.org/XMLSchema/oval-definitions-5#linux"
        xmlns:ind="http://oval.mitre.org/XMLSchema/oval-definitions-5#independent">
      <tests>
        <lin:rpminfo_test id="oval:t:tst:1" check="at least one" version="1">
          <lin:object object_ref="oval:t:obj:1"/>
          <lin:state state_ref="oval:t:ste:1"/>
        </lin:rpminfo_test>
        <lin:rpminfo_test id="oval:t:tst:no-state" check="all">
          <lin:object object_ref="oval:t:obj:1"/>
        </lin:rpminfo_test>
        <lin:rpminfo_test id="oval:t:tst:two-states" check="all">
          <lin:object object_ref="oval:t:obj:1"/>
          <lin:state state_ref="oval:t:ste:1"/>
          <lin:state state_ref="oval:t:ste:1"/>
        </lin:rpminfo_test>
        <lin:rpminfo_test id="oval:t:tst:no-check">
          <lin:object object_ref="oval:t:obj:1"/>
          <lin:state state_ref="oval:t:ste:1"/>
        </lin:rpminfo_test>
        <lin:rpminfo_test id="oval:t:tst:dangling" check="all">
          <lin:object object_ref="oval:t:obj:404"/>
          <lin:state state_ref="oval:t:ste:1"/>
        </lin:rpminfo_test>
      </tests>
      <objects>
        <lin:rpminfo_object id="oval:t:obj:1" version="1">
          <lin:name>openssl</lin:name>
        </lin:rpminfo_object>
        <ind:textfilecontent54_object id="oval:t:obj:2" version="1">
          <ind:behaviors multiline="true" singleline="false" max_depth="1"/>
          <ind:filepath operation="pattern match">/etc/ssl/openssl.cnf</ind:filepath>
        </ind:textfilecontent54_object>
      </objects>
      <states>
        <lin:rpminfo_state id="oval:t:ste:1" version="1">
          <lin:arch datatype="string" operation="pattern match">aarch64|x86_64</lin:arch>
          <lin:evr datatype="evr_string" operation="less than">1:3.0.7-27.el9</lin:evr>
          <lin:signature_keyid/>
        </lin:rpminfo_state>
      </states>
    </oval_definitions>"#;

    #[test]
    fn test_resolve_state_normalizes_fields() {
        let doc = Document::parse(DOC).unwrap();
        let tables = ReferenceTables::build(&doc);

        let state = LeafResolver::resolve_state(&tables, "oval:t:ste:1").unwrap();
        let evr = state.field("evr").unwrap();
        assert_eq!(evr.datatype(), Some("EVR_STRING"));
        assert_eq!(evr.operation(), Some("LESS_THAN"));
        assert_eq!(evr.value(), Some("1:3.0.7-27.el9"));

        let arch = state.field("arch").unwrap();
        assert_eq!(arch.operation(), Some("PATTERN_MATCH"));
    }

    #[test]
    fn test_resolve_state_omits_absent_keys() {
        let doc = Document::parse(DOC).unwrap();
        let tables = ReferenceTables::build(&doc);

        let state = LeafResolver::resolve_state(&tables, "oval:t:ste:1").unwrap();
        let keyid = state.field("signature_keyid").unwrap();
        assert!(keyid.is_empty());
    }

    #[test]
    fn test_resolve_state_is_deterministic() {
        let doc = Document::parse(DOC).unwrap();
        let tables = ReferenceTables::build(&doc);

        let first = LeafResolver::resolve_state(&tables, "oval:t:ste:1").unwrap();
        let second = LeafResolver::resolve_state(&tables, "oval:t:ste:1").unwrap();
        assert_eq!(first, second);

        let first = LeafResolver::resolve_object(&tables, "oval:t:obj:2").unwrap();
        let second = LeafResolver::resolve_object(&tables, "oval:t:obj:2").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_object_behaviors() {
        let doc = Document::parse(DOC).unwrap();
        let tables = ReferenceTables::build(&doc);

        let object = LeafResolver::resolve_object(&tables, "oval:t:obj:2").unwrap();
        let behaviors = object.behaviors().unwrap();
        assert_eq!(behaviors.get("multiline"), Some(&true));
        assert_eq!(behaviors.get("singleline"), Some(&false));
        assert_eq!(behaviors.get("max_depth"), Some(&false));
        assert!(object.field("behaviors").is_none());

        let filepath = object.field("filepath").unwrap();
        assert_eq!(filepath.operation(), Some("PATTERN_MATCH"));
        assert_eq!(filepath.value(), Some("/etc/ssl/openssl.cnf"));
    }

    #[test]
    fn test_resolve_object_without_behaviors() {
        let doc = Document::parse(DOC).unwrap();
        let tables = ReferenceTables::build(&doc);

        let object = LeafResolver::resolve_object(&tables, "oval:t:obj:1").unwrap();
        assert!(object.behaviors().is_none());
        assert_eq!(
            object.field("name").and_then(|f| f.value()),
            Some("openssl")
        );
    }

    #[test]
    fn test_resolve_test() {
        let doc = Document::parse(DOC).unwrap();
        let tables = ReferenceTables::build(&doc);

        let test = LeafResolver::resolve_test(&tables, "oval:t:tst:1").unwrap();
        assert_eq!(test.check_type, "rpminfo_test");
        assert_eq!(test.check, "AT_LEAST_ONE");
        assert!(test.object.field("name").is_some());
        assert!(test.state.field("evr").is_some());
    }

    #[test]
    fn test_resolve_test_missing_state_is_malformed() {
        let doc = Document::parse(DOC).unwrap();
        let tables = ReferenceTables::build(&doc);

        let err = LeafResolver::resolve_test(&tables, "oval:t:tst:no-state").unwrap_err();
        assert!(matches!(err, OvalError::MalformedTest { .. }));
        assert!(err.to_string().contains("state_ref"));
    }

    #[test]
    fn test_resolve_test_two_states_is_malformed() {
        let doc = Document::parse(DOC).unwrap();
        let tables = ReferenceTables::build(&doc);

        let err = LeafResolver::resolve_test(&tables, "oval:t:tst:two-states").unwrap_err();
        assert!(err.to_string().contains("more than one"));
    }

    #[test]
    fn test_resolve_test_missing_check_is_malformed() {
        let doc = Document::parse(DOC).unwrap();
        let tables = ReferenceTables::build(&doc);

        let err = LeafResolver::resolve_test(&tables, "oval:t:tst:no-check").unwrap_err();
        assert!(err.to_string().contains("check"));
    }

    #[test]
    fn test_resolve_test_dangling_object() {
        let doc = Document::parse(DOC).unwrap();
        let tables = ReferenceTables::build(&doc);

        let err = LeafResolver::resolve_test(&tables, "oval:t:tst:dangling").unwrap_err();
        assert!(matches!(
            err,
            OvalError::ReferenceNotFound { section: Section::Objects, .. }
        ));
    }

    #[test]
    fn test_resolve_unknown_test() {
        let doc = Document::parse(DOC).unwrap();
        let tables = ReferenceTables::build(&doc);

        assert!(matches!(
            LeafResolver::resolve_test(&tables, "oval:t:tst:404"),
            Err(OvalError::ReferenceNotFound { section: Section::Tests, .. })
        ));
    }
}
