/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Static schemas for generated shapes.
//!
//! Every structure expanded by [`shape!`](crate::shape!) carries a [`StructureSchema`]
//! listing its members in declaration order. The order is significant: diagnostic
//! rendering and structural hashing both walk members in this order.

use std::borrow::Cow;
use std::fmt;

/// A Smithy Shape ID.
///
/// Format: `namespace#shapeName` or `namespace#shapeName$memberName`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeId {
    value: Cow<'static, str>,
}

impl ShapeId {
    /// Creates a new ShapeId from a string.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Cow::Owned(value.into()),
        }
    }

    /// Creates a ShapeId in `const` context.
    ///
    /// ```
    /// use smithy_types::schema::ShapeId;
    ///
    /// const ID: ShapeId = ShapeId::from_static("com.amazonaws.rds#Tag");
    /// assert_eq!(ID.shape_name(), Some("Tag"));
    /// ```
    pub const fn from_static(value: &'static str) -> Self {
        Self {
            value: Cow::Borrowed(value),
        }
    }

    /// Returns the string representation of this ShapeId.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the namespace portion of the ShapeId.
    pub fn namespace(&self) -> Option<&str> {
        self.value.split_once('#').map(|(ns, _)| ns)
    }

    /// Returns the shape name portion of the ShapeId.
    pub fn shape_name(&self) -> Option<&str> {
        self.value
            .split_once('#')
            .map(|(_, rest)| rest.split_once('$').map_or(rest, |(name, _)| name))
    }

    /// Returns the member name if this is a member shape ID.
    pub fn member_name(&self) -> Option<&str> {
        self.value
            .split_once('#')
            .and_then(|(_, rest)| rest.split_once('$').map(|(_, member)| member))
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<&'static str> for ShapeId {
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

/// Smithy shape types that can appear as structure members in generated model crates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ShapeType {
    /// Boolean type
    Boolean,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    Long,
    /// 64-bit floating point
    Double,
    /// UTF-8 string
    String,
    /// Timestamp
    Timestamp,
    /// List type
    List,
    /// Structure type
    Structure,
}

impl ShapeType {
    /// Returns true if this is a simple type.
    #[inline]
    pub fn is_simple(&self) -> bool {
        !self.is_aggregate()
    }

    /// Returns true if this is an aggregate type.
    #[inline]
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::List | Self::Structure)
    }
}

/// One member of a structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberSchema {
    /// Member name on the wire, e.g. `DBClusterIdentifier`.
    pub name: &'static str,
    /// Rust field name, e.g. `db_cluster_identifier`.
    pub field: &'static str,
    /// Shape type of the member's target.
    pub target: ShapeType,
    /// Sensitive members are redacted from `Debug` and `Display`.
    pub sensitive: bool,
}

/// Schema of a generated structure: its shape ID and members in declaration order.
#[derive(Debug)]
pub struct StructureSchema {
    id: ShapeId,
    members: &'static [MemberSchema],
}

impl StructureSchema {
    /// Creates a schema. Used by `shape!` expansions.
    pub const fn new(id: ShapeId, members: &'static [MemberSchema]) -> Self {
        Self { id, members }
    }

    /// Returns the shape ID.
    pub fn shape_id(&self) -> &ShapeId {
        &self.id
    }

    /// Always [`ShapeType::Structure`].
    pub fn shape_type(&self) -> ShapeType {
        ShapeType::Structure
    }

    /// Members in declaration order.
    pub fn members(&self) -> &'static [MemberSchema] {
        self.members
    }

    /// Looks a member up by wire name or Rust field name.
    pub fn member(&self, name: &str) -> Option<&'static MemberSchema> {
        self.members
            .iter()
            .find(|member| member.name == name || member.field == name)
    }

    /// Wire names of the members, in declaration order.
    pub fn member_names(&self) -> impl Iterator<Item = &'static str> {
        self.members.iter().map(|member| member.name)
    }
}

/// Implemented by every structure expanded by [`shape!`](crate::shape!).
pub trait StructureShape {
    /// Returns the static schema of this structure.
    fn schema() -> &'static StructureSchema;
}

#[cfg(test)]
mod test {
    use super::{MemberSchema, ShapeId, ShapeType, StructureSchema};

    static MEMBERS: [MemberSchema; 2] = [
        MemberSchema {
            name: "Key",
            field: "key",
            target: ShapeType::String,
            sensitive: false,
        },
        MemberSchema {
            name: "Values",
            field: "values",
            target: ShapeType::List,
            sensitive: false,
        },
    ];

    #[test]
    fn test_shape_id_parsing() {
        let id = ShapeId::new("smithy.api#String");
        assert_eq!(id.namespace(), Some("smithy.api"));
        assert_eq!(id.shape_name(), Some("String"));
        assert_eq!(id.member_name(), None);
    }

    #[test]
    fn test_shape_id_with_member() {
        let id = ShapeId::from_static("com.amazonaws.rds#Tag$Key");
        assert_eq!(id.namespace(), Some("com.amazonaws.rds"));
        assert_eq!(id.shape_name(), Some("Tag"));
        assert_eq!(id.member_name(), Some("Key"));
        assert_eq!(id.to_string(), "com.amazonaws.rds#Tag$Key");
    }

    #[test]
    fn test_shape_id_without_namespace() {
        let id = ShapeId::new("NoNamespace");
        assert_eq!(id.namespace(), None);
        assert_eq!(id.shape_name(), None);
        assert_eq!(id.member_name(), None);
    }

    #[test]
    fn owned_and_static_ids_compare_equal() {
        assert_eq!(
            ShapeId::new("com.amazonaws.rds#Tag"),
            ShapeId::from_static("com.amazonaws.rds#Tag")
        );
    }

    #[test]
    fn member_lookup() {
        let schema = StructureSchema::new(ShapeId::from_static("com.example#Filter"), &MEMBERS);
        assert_eq!(schema.member("Values").map(|m| m.field), Some("values"));
        assert_eq!(schema.member("key").map(|m| m.name), Some("Key"));
        assert!(schema.member("Missing").is_none());
        assert_eq!(
            schema.member_names().collect::<Vec<_>>(),
            vec!["Key", "Values"]
        );
        assert!(schema.shape_type().is_aggregate());
    }

    #[test]
    fn test_shape_type_simple() {
        assert!(ShapeType::String.is_simple());
        assert!(ShapeType::Timestamp.is_simple());
        assert!(!ShapeType::Structure.is_simple());
        assert!(!ShapeType::List.is_simple());
    }
}
