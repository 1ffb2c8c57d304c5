//! Validated text fields and the capabilities built on them
//!
//! Every rules entity is composed from the same handful of fields:
//! - `Name` - non-empty, at most 50 characters
//! - `Description` - non-empty, no length cap
//! - `NameInEnglish` - may be blank, at most 50 characters
//! - a `SourceId` pointing at the rulebook the entry comes from
//!
//! The `Named`, `Described`, `EnglishNamed` and `Sourced` traits give an
//! aggregate the matching accessor and guarded `new_*` mutator once it
//! exposes the underlying field. Mutators reject a value equal to the current
//! one with `DomainError::Idempotent`, then validate the replacement exactly
//! like construction does.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DomainError, DomainResult};
use crate::ids::SourceId;
use crate::value_objects::invariants::ensure_changed;

/// Maximum length, in characters, of names and English names
pub const MAX_NAME_LENGTH: usize = 50;

fn check_length(text: &str, field: &str) -> DomainResult<()> {
    if text.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::invalid_data(format!(
            "{} cannot exceed {} characters",
            field, MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

// ============================================================================
// Name
// ============================================================================

/// A validated entity name (non-empty, <=50 chars)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Create a new validated name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidData` if:
    /// - The name is empty or whitespace only
    /// - The name exceeds 50 characters
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_data("Name cannot be empty"));
        }
        check_length(&name, "Name")?;
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> String {
        name.0
    }
}

// ============================================================================
// Description
// ============================================================================

/// A validated, non-empty description of any length
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Create a new validated description.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidData` if the description is empty.
    pub fn new(text: impl Into<String>) -> DomainResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::invalid_data("Description cannot be empty"));
        }
        Ok(Self(text))
    }

    /// Returns the description as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Description {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Description> for String {
    fn from(desc: Description) -> String {
        desc.0
    }
}

// ============================================================================
// NameInEnglish
// ============================================================================

/// The English name of an entity (may be blank, <=50 chars)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NameInEnglish(String);

impl NameInEnglish {
    /// Create a new validated English name.
    ///
    /// Empty strings are valid.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidData` if the name exceeds 50 characters.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        check_length(&name, "Name in English")?;
        Ok(Self(name))
    }

    /// Create a blank English name.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NameInEnglish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for NameInEnglish {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<NameInEnglish> for String {
    fn from(name: NameInEnglish) -> String {
        name.0
    }
}

// ============================================================================
// Capabilities
// ============================================================================

/// An aggregate with a unique `Name`.
pub trait Named {
    fn name_field(&self) -> &Name;
    fn name_field_mut(&mut self) -> &mut Name;

    fn name(&self) -> &str {
        self.name_field().as_str()
    }

    fn new_name(&mut self, name: &str) -> DomainResult<()> {
        ensure_changed(self.name(), name, "name")?;
        *self.name_field_mut() = Name::new(name)?;
        Ok(())
    }
}

/// An aggregate with a `Description`.
pub trait Described {
    fn description_field(&self) -> &Description;
    fn description_field_mut(&mut self) -> &mut Description;

    fn description(&self) -> &str {
        self.description_field().as_str()
    }

    fn new_description(&mut self, description: &str) -> DomainResult<()> {
        ensure_changed(self.description(), description, "description")?;
        *self.description_field_mut() = Description::new(description)?;
        Ok(())
    }
}

/// An aggregate with a `NameInEnglish`.
pub trait EnglishNamed {
    fn name_in_english_field(&self) -> &NameInEnglish;
    fn name_in_english_field_mut(&mut self) -> &mut NameInEnglish;

    fn name_in_english(&self) -> &str {
        self.name_in_english_field().as_str()
    }

    fn new_name_in_english(&mut self, name: &str) -> DomainResult<()> {
        ensure_changed(self.name_in_english(), name, "name in English")?;
        *self.name_in_english_field_mut() = NameInEnglish::new(name)?;
        Ok(())
    }
}

/// An aggregate that cites a rulebook source.
pub trait Sourced {
    fn source_id(&self) -> SourceId;
    fn source_id_mut(&mut self) -> &mut SourceId;

    fn new_source_id(&mut self, source_id: SourceId) -> DomainResult<()> {
        ensure_changed(&self.source_id(), &source_id, "source id")?;
        *self.source_id_mut() = source_id;
        Ok(())
    }
}

/// Implement the field capabilities for an aggregate by naming its fields.
///
/// ```ignore
/// impl_fields!(Race { name: name, description: description, name_in_english: name_in_english, source: source_id });
/// ```
macro_rules! impl_fields {
    (@one $ty:ty, name: $field:ident) => {
        impl $crate::value_objects::Named for $ty {
            fn name_field(&self) -> &$crate::value_objects::Name {
                &self.$field
            }
            fn name_field_mut(&mut self) -> &mut $crate::value_objects::Name {
                &mut self.$field
            }
        }
    };
    (@one $ty:ty, description: $field:ident) => {
        impl $crate::value_objects::Described for $ty {
            fn description_field(&self) -> &$crate::value_objects::Description {
                &self.$field
            }
            fn description_field_mut(&mut self) -> &mut $crate::value_objects::Description {
                &mut self.$field
            }
        }
    };
    (@one $ty:ty, name_in_english: $field:ident) => {
        impl $crate::value_objects::EnglishNamed for $ty {
            fn name_in_english_field(&self) -> &$crate::value_objects::NameInEnglish {
                &self.$field
            }
            fn name_in_english_field_mut(&mut self) -> &mut $crate::value_objects::NameInEnglish {
                &mut self.$field
            }
        }
    };
    (@one $ty:ty, source: $field:ident) => {
        impl $crate::value_objects::Sourced for $ty {
            fn source_id(&self) -> $crate::ids::SourceId {
                self.$field
            }
            fn source_id_mut(&mut self) -> &mut $crate::ids::SourceId {
                &mut self.$field
            }
        }
    };
    ($ty:ty { $( $cap:ident : $field:ident ),+ $(,)? }) => {
        $( impl_fields!(@one $ty, $cap: $field); )+
    };
}

pub(crate) use impl_fields;
