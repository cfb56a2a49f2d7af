//! Entity module - the subject of a triage run

use std::fmt;

/// Sanctions-screening schema for the entity
///
/// Passed verbatim to the sanctions API, so the string forms are
/// capitalised exactly as the API expects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Schema {
    /// A natural person
    #[default]
    Person,

    /// A company or other legal entity
    Company,
}

impl Schema {
    /// Get the schema name as sent to the sanctions API
    pub fn as_str(&self) -> &'static str {
        match self {
            Schema::Person => "Person",
            Schema::Company => "Company",
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person or company name to triage
///
/// Immutable for the lifetime of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityQuery {
    /// Free-text name as given by the user
    pub name: String,

    /// Screening schema
    pub schema: Schema,
}

impl EntityQuery {
    /// Create a new entity query
    ///
    /// # Examples
    ///
    /// ```
    /// use coritool_domain::{EntityQuery, Schema};
    ///
    /// let query = EntityQuery::new("Acme Energy", Schema::Company);
    /// assert_eq!(query.name, "Acme Energy");
    /// assert_eq!(query.schema.as_str(), "Company");
    /// ```
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }

    /// Create a query with the default `Person` schema
    pub fn person(name: impl Into<String>) -> Self {
        Self::new(name, Schema::Person)
    }
}
