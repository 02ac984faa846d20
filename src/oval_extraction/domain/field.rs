use std::collections::BTreeMap;

/// Normalizes an OVAL enumeration value into its canonical token form
///
/// `"less than"` becomes `"LESS_THAN"`. Normalizing an already normalized
/// token returns it unchanged.
pub fn normalize_token(raw: &str) -> String {
    raw.to_uppercase().replace(' ', "_")
}

/// Typed description of one object or state entity (e.g. `<name>`, `<evr>`)
///
/// Attributes absent in the document stay `None` and are never encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDescriptor {
    datatype: Option<String>,
    operation: Option<String>,
    value: Option<String>,
}

impl FieldDescriptor {
    /// Builds a descriptor, normalizing `datatype` and `operation`
    pub fn new(datatype: Option<&str>, operation: Option<&str>, value: Option<String>) -> Self {
        Self {
            datatype: datatype.map(normalize_token),
            operation: operation.map(normalize_token),
            value,
        }
    }

    pub fn datatype(&self) -> Option<&str> {
        self.datatype.as_deref()
    }

    pub fn operation(&self) -> Option<&str> {
        self.operation.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.datatype.is_none() && self.operation.is_none() && self.value.is_none()
    }
}

/// Flags carried by an object's `<behaviors>` element
pub type Behaviors = BTreeMap<String, bool>;

/// Resolved OVAL object: entity name to descriptor, plus optional behaviors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectDescriptor {
    fields: BTreeMap<String, FieldDescriptor>,
    behaviors: Option<Behaviors>,
}

impl ObjectDescriptor {
    pub fn new(fields: BTreeMap<String, FieldDescriptor>, behaviors: Option<Behaviors>) -> Self {
        Self { fields, behaviors }
    }

    pub fn fields(&self) -> &BTreeMap<String, FieldDescriptor> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    pub fn behaviors(&self) -> Option<&Behaviors> {
        self.behaviors.as_ref()
    }
}

/// Resolved OVAL state: entity name to descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateDescriptor {
    fields: BTreeMap<String, FieldDescriptor>,
}

impl StateDescriptor {
    pub fn new(fields: BTreeMap<String, FieldDescriptor>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &BTreeMap<String, FieldDescriptor> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }
}
