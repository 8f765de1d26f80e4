use tracing::trace;

use crate::parser::ast::{
    FunctionDecl, HeritageType, InferType, Interface, MappedType, ModuleDecl, Param, TypeAlias,
    TypeParams, TypeQuery, TypeRef, VarDeclarator,
};
use crate::parser::{Root, SyntaxKind, SyntaxNode, SyntaxToken};

use super::model::{Namespace, Reference, ScopeId, SemanticModel};

/// Builds the scope tree of `root` and resolves every reference in it.
pub fn bind(root: &Root) -> SemanticModel {
    let mut binder = Binder {
        model: SemanticModel::default(),
    };

    let root_scope = binder.model.add_scope(root.as_cst().clone(), None);
    binder.declare_children(root.as_cst(), root_scope);
    binder.resolve_references(root.as_cst());

    trace!(
        scopes = binder.model.scope_count(),
        bindings = binder.model.bindings().count(),
        "bound source file"
    );
    binder.model
}

struct Binder {
    model: SemanticModel,
}

impl Binder {
    fn declare_children(&mut self, node: &SyntaxNode, scope: ScopeId) {
        for child in node.children() {
            self.declare_node(&child, scope);
        }
    }

    fn declare_node(&mut self, node: &SyntaxNode, scope: ScopeId) {
        match node.kind() {
            SyntaxKind::TypeAlias => {
                if let Some(name) = TypeAlias::cast(node.clone()).and_then(|a| a.name()) {
                    self.declare(scope, &name, Namespace::Type);
                }
                self.declare_signature_scope(node, scope);
            }
            SyntaxKind::Interface => {
                if let Some(name) = Interface::cast(node.clone()).and_then(|i| i.name()) {
                    self.declare(scope, &name, Namespace::Type);
                }
                self.declare_signature_scope(node, scope);
            }
            SyntaxKind::FunctionDecl => {
                if let Some(name) = FunctionDecl::cast(node.clone()).and_then(|f| f.name()) {
                    self.declare(scope, &name, Namespace::Value);
                }
                self.declare_signature_scope(node, scope);
            }
            SyntaxKind::MethodSignature
            | SyntaxKind::CallSignature
            | SyntaxKind::ConstructSignature
            | SyntaxKind::FunctionType
            | SyntaxKind::ConstructorType => self.declare_signature_scope(node, scope),
            SyntaxKind::VarDeclarator => {
                if let Some(name) = VarDeclarator::cast(node.clone()).and_then(|v| v.name()) {
                    self.declare(scope, &name, Namespace::Value);
                }
                self.declare_children(node, scope);
            }
            SyntaxKind::ModuleDecl => {
                if let Some(name) = ModuleDecl::cast(node.clone()).and_then(|m| m.name()) {
                    self.declare(scope, &name, Namespace::Type);
                    self.declare(scope, &name, Namespace::Value);
                }
                self.declare_children(node, scope);
            }
            SyntaxKind::ModuleBlock | SyntaxKind::ConditionalType => {
                let inner = self.model.add_scope(node.clone(), Some(scope));
                self.declare_children(node, inner);
            }
            SyntaxKind::MappedType => {
                let inner = self.model.add_scope(node.clone(), Some(scope));
                let key = MappedType::cast(node.clone())
                    .and_then(|m| m.type_param())
                    .and_then(|p| p.name());
                if let Some(key) = key {
                    self.declare(inner, &key, Namespace::Type);
                }
                self.declare_children(node, inner);
            }
            SyntaxKind::InferType => {
                if let Some(name) = InferType::cast(node.clone()).and_then(|i| i.name()) {
                    let target = self.enclosing_conditional(scope);
                    self.declare(target, &name, Namespace::Type);
                }
                self.declare_children(node, scope);
            }
            _ => self.declare_children(node, scope),
        }
    }

    /// Opens a scope for `node` holding its type parameters and parameters.
    fn declare_signature_scope(&mut self, node: &SyntaxNode, scope: ScopeId) {
        let inner = self.model.add_scope(node.clone(), Some(scope));

        for params in node.children().filter_map(TypeParams::cast) {
            for param in params.params() {
                if let Some(name) = param.name() {
                    self.declare(inner, &name, Namespace::Type);
                }
            }
        }

        let value_params = node
            .children()
            .filter(|n| n.kind() == SyntaxKind::ParamList)
            .flat_map(|list| list.children().filter_map(Param::cast).collect::<Vec<_>>());
        for param in value_params {
            if param.is_plain_identifier()
                && let Some(name) = param.name()
            {
                self.declare(inner, &name, Namespace::Value);
            }
        }

        self.declare_children(node, inner);
    }

    /// `infer X` binds into the nearest conditional type around it.
    fn enclosing_conditional(&self, scope: ScopeId) -> ScopeId {
        self.model
            .scope_chain(scope)
            .find(|id| self.model.scope(*id).owner().kind() == SyntaxKind::ConditionalType)
            .unwrap_or(scope)
    }

    fn declare(&mut self, scope: ScopeId, name: &SyntaxToken, namespace: Namespace) {
        self.model
            .declare(scope, name.text(), namespace, name.text_range());
    }

    fn resolve_references(&mut self, root: &SyntaxNode) {
        for node in root.descendants() {
            let reference = match node.kind() {
                SyntaxKind::TypeRef => TypeRef::cast(node.clone())
                    .and_then(|r| r.head())
                    .map(|head| (head, Namespace::Type)),
                SyntaxKind::HeritageType => HeritageType::cast(node.clone())
                    .and_then(|h| h.name())
                    .map(|name| (name, Namespace::Type)),
                SyntaxKind::TypeQuery => TypeQuery::cast(node.clone())
                    .and_then(|q| q.head())
                    .map(|head| (head, Namespace::Value)),
                _ => None,
            };
            let Some((token, namespace)) = reference else {
                continue;
            };

            let scope = self.model.scope_of(&node);
            match self.model.resolve(scope, token.text(), namespace) {
                Some(id) => self
                    .model
                    .add_reference(id, Reference::new(token.text_range(), namespace)),
                None => trace!(name = token.text(), "unresolved reference"),
            }
        }
    }
}
