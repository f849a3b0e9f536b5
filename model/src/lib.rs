use core::str::FromStr;
use std::fmt;

use serde::de::Visitor;
use serde::{Deserialize, Serialize};

pub mod domain;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    #[error("The {0} cannot be empty")]
    Empty(&'static str),
    #[error("The {0} {1:?} contains a character forbidden in a URL segment")]
    ForbiddenCharacter(&'static str, String),
}

/// Characters that would change the meaning of the URL the identifier is
/// spliced into.
const FORBIDDEN: [char; 3] = ['/', '?', '#'];

fn validate_id(kind: &'static str, raw: &str) -> Result<String, IdError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IdError::Empty(kind));
    }
    if trimmed.contains(FORBIDDEN) {
        return Err(IdError::ForbiddenCharacter(kind, trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}

/// encapsulate the server-assigned identifiers in custom struct to let the
/// compiler differentiate them
macro_rules! impl_id_encapsulation {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name {
            id: String,
        }

        impl $name {
            pub fn try_new<S: AsRef<str>>(raw: S) -> Result<Self, IdError> {
                raw.as_ref().parse()
            }

            pub fn as_str(&self) -> &str { &self.id }
        }

        impl FromStr for $name {
            type Err = IdError;

            #[inline(always)]
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                validate_id(stringify!($name), s).map(|id| $name { id })
            }
        }

        impl TryFrom<&str> for $name {
            type Error = IdError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str { &self.id }
        }

        impl fmt::Display for $name {
            #[inline(always)]
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.id)
            }
        }

        impl Serialize for $name {
            #[inline(always)]
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.id)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct MyVisitor;

                impl<'de> Visitor<'de> for MyVisitor {
                    type Value = $name;

                    fn expecting(
                        &self,
                        formatter: &mut fmt::Formatter,
                    ) -> fmt::Result {
                        formatter.write_str(
                            format!(
                                "a {}, i.e., a non-empty string",
                                stringify!($name)
                            )
                            .as_str(),
                        )
                    }

                    fn visit_str<E>(
                        self,
                        value: &str,
                    ) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        value.parse().map_err(E::custom)
                    }
                }

                deserializer.deserialize_str(MyVisitor)
            }
        }
    };
}

impl_id_encapsulation!(FeedId);
impl_id_encapsulation!(SlaId);
