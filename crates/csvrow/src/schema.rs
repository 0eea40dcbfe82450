//! Record shape descriptors.
//!
//! A [`Schema`] is the ordered field list of one record type. Each entry is
//! either a [`Leaf`] that occupies exactly one slot, or an embedded record
//! whose own fields are spliced into the parent at that position. Layout
//! resolution and row projection both walk this tree depth-first, so a leaf's
//! slot index is simply its position in that walk.

/// Marker name that excludes a field from every layout.
pub const EXCLUDE_MARKER: &str = "-";

/// How a field's value is turned into a cell string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatKind {
    /// Generic `Display` stringification.
    #[default]
    Plain,
    /// Canonical `YYYY-MM-DD HH:MM:SS` date-time.
    Timestamp,
    /// Optional timestamp: unwrap one level, then format as [`FormatKind::Timestamp`].
    NullableTimestamp,
    /// Optional scalar: unwrap one level, then stringify the inner value.
    Nullable,
}

impl FormatKind {
    /// The kind of an optional wrapper around a value of this kind.
    pub const fn nullable(self) -> Self {
        match self {
            FormatKind::Timestamp | FormatKind::NullableTimestamp => FormatKind::NullableTimestamp,
            FormatKind::Plain | FormatKind::Nullable => FormatKind::Nullable,
        }
    }

    /// Returns `true` for the two timestamp kinds.
    pub fn is_timestamp(self) -> bool {
        matches!(self, FormatKind::Timestamp | FormatKind::NullableTimestamp)
    }

    /// Returns `true` for the wrapper kinds.
    pub fn is_nullable(self) -> bool {
        matches!(self, FormatKind::Nullable | FormatKind::NullableTimestamp)
    }
}

/// A single-slot field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    /// Declared field name.
    pub name: String,
    /// Declared column name, if any.
    pub rename: Option<String>,
    /// Formatting rule derived from the field's type.
    pub kind: FormatKind,
}

impl Leaf {
    pub fn new(name: impl Into<String>, rename: Option<&str>, kind: FormatKind) -> Self {
        Leaf {
            name: name.into(),
            rename: rename.map(str::to_string),
            kind,
        }
    }

    /// The header name: the trimmed rename when it is non-empty, otherwise
    /// the declared field name.
    pub fn column_name(&self) -> &str {
        match self.rename.as_deref().map(str::trim) {
            Some(rename) if !rename.is_empty() => rename,
            _ => &self.name,
        }
    }

    /// Returns `true` when the resolved name is the exclusion marker.
    pub fn is_excluded(&self) -> bool {
        self.column_name() == EXCLUDE_MARKER
    }
}

/// One entry of a record's field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSchema {
    Leaf(Leaf),
    /// An embedded record, flattened into the parent's columns.
    Embedded(Schema),
}

impl FieldSchema {
    /// Number of slots this field occupies.
    pub fn slot_count(&self) -> usize {
        match self {
            FieldSchema::Leaf(_) => 1,
            FieldSchema::Embedded(schema) => schema.slot_count(),
        }
    }
}

/// Ordered field list of a record type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldSchema>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Schema { fields }
    }

    /// Appends a leaf field.
    pub fn leaf(mut self, name: &str, rename: Option<&str>, kind: FormatKind) -> Self {
        self.fields.push(FieldSchema::Leaf(Leaf::new(name, rename, kind)));
        self
    }

    /// Appends an embedded record.
    pub fn embed(mut self, schema: Schema) -> Self {
        self.fields.push(FieldSchema::Embedded(schema));
        self
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total slots across all fields, embedded records included.
    pub fn slot_count(&self) -> usize {
        self.fields.iter().map(FieldSchema::slot_count).sum()
    }

    /// Leaves in slot order.
    pub fn leaves(&self) -> Vec<&Leaf> {
        let mut out = Vec::with_capacity(self.slot_count());
        collect_leaves(self, &mut out);
        out
    }
}

fn collect_leaves<'s>(schema: &'s Schema, out: &mut Vec<&'s Leaf>) {
    for field in &schema.fields {
        match field {
            FieldSchema::Leaf(leaf) => out.push(leaf),
            FieldSchema::Embedded(nested) => collect_leaves(nested, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_name_prefers_rename() {
        let leaf = Leaf::new("name", Some("Full Name"), FormatKind::Plain);
        assert_eq!(leaf.column_name(), "Full Name");
    }

    #[test]
    fn blank_rename_falls_back_to_field_name() {
        let leaf = Leaf::new("name", Some("   "), FormatKind::Plain);
        assert_eq!(leaf.column_name(), "name");
    }

    #[test]
    fn rename_is_trimmed() {
        let leaf = Leaf::new("secret", Some(" - "), FormatKind::Plain);
        assert!(leaf.is_excluded());
    }

    #[test]
    fn nullable_kind_mapping() {
        assert_eq!(FormatKind::Plain.nullable(), FormatKind::Nullable);
        assert_eq!(FormatKind::Timestamp.nullable(), FormatKind::NullableTimestamp);
        assert!(FormatKind::NullableTimestamp.is_timestamp());
        assert!(!FormatKind::Plain.is_nullable());
    }

    #[test]
    fn embedded_fields_count_their_leaves() {
        let inner = Schema::default()
            .leaf("a", None, FormatKind::Plain)
            .leaf("b", None, FormatKind::Plain);
        let outer = Schema::default()
            .leaf("id", None, FormatKind::Plain)
            .embed(inner)
            .leaf("c", None, FormatKind::Plain);

        assert_eq!(outer.slot_count(), 4);
        let names: Vec<_> = outer.leaves().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["id", "a", "b", "c"]);
    }
}
