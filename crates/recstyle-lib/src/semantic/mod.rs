//! Lexical scopes, bindings and references.
//!
//! The binder walks the CST once per file. Declarations are hoisted to the
//! scope that owns them, then every type reference, `extends` heritage name
//! and `typeof` query is resolved to the innermost binding living in the
//! matching namespace.

mod binder;
mod model;


pub use binder::bind;
pub use model::{Binding, BindingId, Namespace, Reference, Scope, ScopeId, SemanticModel};
