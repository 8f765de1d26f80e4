//! Tree walk shared by both strategies.
//!
//! Override `visit_*` to inspect a node kind and call `walk_children` to keep
//! descending; nested shapes are reported independently of their parents.

use crate::parser::ast::{Interface, MappedType, TypeLiteral, TypeRef};
use crate::parser::{Root, SyntaxNode};

pub trait Visitor: Sized {
    fn visit_root(&mut self, root: &Root) {
        walk_children(self, root.as_cst());
    }

    fn visit_node(&mut self, node: &SyntaxNode) {
        walk_node(self, node);
    }

    fn visit_interface(&mut self, interface: &Interface) {
        walk_children(self, interface.as_cst());
    }

    fn visit_type_literal(&mut self, literal: &TypeLiteral) {
        walk_children(self, literal.as_cst());
    }

    fn visit_mapped_type(&mut self, mapped: &MappedType) {
        walk_children(self, mapped.as_cst());
    }

    fn visit_type_ref(&mut self, type_ref: &TypeRef) {
        walk_children(self, type_ref.as_cst());
    }
}

pub fn walk_node<V: Visitor>(visitor: &mut V, node: &SyntaxNode) {
    if let Some(interface) = Interface::cast(node.clone()) {
        visitor.visit_interface(&interface);
    } else if let Some(literal) = TypeLiteral::cast(node.clone()) {
        visitor.visit_type_literal(&literal);
    } else if let Some(mapped) = MappedType::cast(node.clone()) {
        visitor.visit_mapped_type(&mapped);
    } else if let Some(type_ref) = TypeRef::cast(node.clone()) {
        visitor.visit_type_ref(&type_ref);
    } else {
        walk_children(visitor, node);
    }
}

pub fn walk_children<V: Visitor>(visitor: &mut V, node: &SyntaxNode) {
    for child in node.children() {
        visitor.visit_node(&child);
    }
}
