use tracing::trace;

use crate::parser::SyntaxToken;
use crate::parser::ast::{Member, Type};

use super::emit;

/// A body made of exactly one index signature.
#[derive(Debug, Clone)]
pub struct IndexedShape {
    pub key_name: SyntaxToken,
    pub key_type: Type,
    pub value_type: Type,
    pub is_readonly: bool,
}

impl IndexedShape {
    /// Matches the members of an interface body or type literal.
    ///
    /// The signature's first parameter must be a plain identifier with a type,
    /// and the signature itself must declare a value type.
    pub fn from_members(mut members: impl Iterator<Item = Member>) -> Option<Self> {
        let Some(Member::Index(signature)) = members.next() else {
            return None;
        };
        if members.next().is_some() {
            trace!("more than one member");
            return None;
        }

        let Some(param) = signature.params().next() else {
            trace!("index signature without parameters");
            return None;
        };
        if !param.is_plain_identifier() {
            trace!("index signature parameter is not a plain identifier");
            return None;
        }
        let key_name = param.name()?;
        let key_type = param.type_annotation()?.ty()?;
        let value_type = signature.type_annotation()?.ty()?;

        Some(Self {
            key_name,
            key_type,
            value_type,
            is_readonly: signature.is_readonly(),
        })
    }

    /// `Record<K, V>`, or `Readonly<Record<K, V>>` for a readonly signature.
    pub fn to_record(&self) -> String {
        let record = emit::record(&self.key_type.text(), &self.value_type.text());
        if self.is_readonly {
            emit::wrap("Readonly", record)
        } else {
            record
        }
    }
}
