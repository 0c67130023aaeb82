//! LinkedIn identifies entities with URNs such as
//! `urn:li:organization:2414183`. The types here wrap the bare id and know how
//! to print and parse their URN.

use strum::Display;
use thiserror::Error;

use std::fmt::Debug;

const URN_PREFIX: &str = "urn:li:";

/// LinkedIn ID or URN parsing error
///
/// See also [`Id`](crate::idtypes::Id) for details.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display, Error)]
pub enum IdError {
    /// URN prefix is not `urn:li:`.
    InvalidPrefix,
    /// URN can't be split into type and id parts.
    InvalidFormat,
    /// URN has a type name that does not match the requested id type.
    InvalidType,
    /// Id is invalid (empty or contains invalid characters).
    InvalidId,
}

/// The main interface for an ID.
pub trait Id {
    /// Entity type as it appears in the URN, e.g. `organization`.
    const TYPE: &'static str;

    /// Returns the inner LinkedIn object ID, which is guaranteed to be valid
    /// for its type.
    fn id(&self) -> &str;

    fn urn(&self) -> String {
        format!("{}{}:{}", URN_PREFIX, Self::TYPE, self.id())
    }
}

fn validate_id(id: &str) -> Result<(), IdError> {
    if id.is_empty() || id.chars().any(|c| c == ':' || c.is_whitespace()) {
        Err(IdError::InvalidId)
    } else {
        Ok(())
    }
}

fn split_urn<'a>(urn: &'a str, kind: &str) -> Result<&'a str, IdError> {
    let rest = urn.strip_prefix(URN_PREFIX).ok_or(IdError::InvalidPrefix)?;
    let (tpe, id) = rest.split_once(':').ok_or(IdError::InvalidFormat)?;
    if tpe != kind {
        return Err(IdError::InvalidType);
    }
    validate_id(id)?;
    Ok(id)
}

macro_rules! define_idtypes {
    ($($(#[$attr:meta])* $name:ident => $kind:literal),+ $(,)?) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, PartialEq, Eq, Hash)]
            pub struct $name(String);

            impl $name {
                pub fn from_id(id: impl Into<String>) -> Result<Self, IdError> {
                    let id = id.into();
                    validate_id(&id)?;
                    Ok(Self(id))
                }

                pub fn from_urn(urn: &str) -> Result<Self, IdError> {
                    split_urn(urn, $kind).map(|id| Self(id.to_owned()))
                }
            }

            impl Id for $name {
                const TYPE: &'static str = $kind;

                fn id(&self) -> &str {
                    &self.0
                }
            }
        )+
    };
}

define_idtypes!(
    /// Company page; the author of organization shares.
    OrganizationId => "organization",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urn_round_trip() {
        let org = OrganizationId::from_id("2414183").unwrap();
        assert_eq!(org.urn(), "urn:li:organization:2414183");
        assert_eq!(OrganizationId::from_urn(&org.urn()).unwrap(), org);
    }

    #[test]
    fn rejects_bad_urns() {
        assert_eq!(
            OrganizationId::from_urn("spotify:track:1"),
            Err(IdError::InvalidPrefix)
        );
        assert_eq!(
            OrganizationId::from_urn("urn:li:organization"),
            Err(IdError::InvalidFormat)
        );
        assert_eq!(
            OrganizationId::from_urn("urn:li:person:1"),
            Err(IdError::InvalidType)
        );
        assert_eq!(
            OrganizationId::from_urn("urn:li:organization:"),
            Err(IdError::InvalidId)
        );
        assert_eq!(OrganizationId::from_id("a b"), Err(IdError::InvalidId));
    }
}
