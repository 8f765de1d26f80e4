use indexmap::IndexMap;
use rowan::TextRange;

use crate::parser::SyntaxNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingId(u32);

/// Declaration space a name lives in. Namespaces declare into both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Type,
    Value,
}

#[derive(Debug, Clone)]
pub struct Scope {
    parent: Option<ScopeId>,
    owner: SyntaxNode,
    bindings: IndexMap<String, BindingId>,
}

impl Scope {
    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    /// The node that opened this scope.
    pub fn owner(&self) -> &SyntaxNode {
        &self.owner
    }

    pub fn bindings(&self) -> impl Iterator<Item = (&str, BindingId)> {
        self.bindings.iter().map(|(name, id)| (name.as_str(), *id))
    }
}

/// All declarations of one name in one scope, merged.
#[derive(Debug, Clone)]
pub struct Binding {
    name: String,
    scope: ScopeId,
    is_type: bool,
    is_value: bool,
    declarations: Vec<TextRange>,
    references: Vec<Reference>,
}

impl Binding {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    pub fn is_type(&self) -> bool {
        self.is_type
    }

    pub fn is_value(&self) -> bool {
        self.is_value
    }

    pub fn in_namespace(&self, namespace: Namespace) -> bool {
        match namespace {
            Namespace::Type => self.is_type,
            Namespace::Value => self.is_value,
        }
    }

    /// Name-token ranges of every declaration merged into this binding.
    pub fn declarations(&self) -> &[TextRange] {
        &self.declarations
    }

    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// Whether a type-level reference to this binding lies inside `range`.
    pub fn has_type_reference_within(&self, range: TextRange) -> bool {
        self.references
            .iter()
            .any(|r| r.namespace == Namespace::Type && range.contains_range(r.range))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    range: TextRange,
    namespace: Namespace,
}

impl Reference {
    pub fn new(range: TextRange, namespace: Namespace) -> Self {
        Self { range, namespace }
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn is_type(&self) -> bool {
        self.namespace == Namespace::Type
    }
}

/// Scope tree plus the bindings and resolved references of one file.
#[derive(Debug, Clone, Default)]
pub struct SemanticModel {
    scopes: Vec<Scope>,
    bindings: Vec<Binding>,
    owners: IndexMap<SyntaxNode, ScopeId>,
}

impl SemanticModel {
    pub(super) fn add_scope(&mut self, owner: SyntaxNode, parent: Option<ScopeId>) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.owners.insert(owner.clone(), id);
        self.scopes.push(Scope {
            parent,
            owner,
            bindings: IndexMap::new(),
        });
        id
    }

    /// Declares `name` in `scope`, merging with an existing binding of the same name.
    pub(super) fn declare(
        &mut self,
        scope: ScopeId,
        name: &str,
        namespace: Namespace,
        range: TextRange,
    ) -> BindingId {
        let id = match self.scopes[scope.0 as usize].bindings.get(name) {
            Some(id) => *id,
            None => {
                let id = BindingId(self.bindings.len() as u32);
                self.bindings.push(Binding {
                    name: name.to_string(),
                    scope,
                    is_type: false,
                    is_value: false,
                    declarations: Vec::new(),
                    references: Vec::new(),
                });
                self.scopes[scope.0 as usize]
                    .bindings
                    .insert(name.to_string(), id);
                id
            }
        };

        let binding = &mut self.bindings[id.0 as usize];
        match namespace {
            Namespace::Type => binding.is_type = true,
            Namespace::Value => binding.is_value = true,
        }
        if !binding.declarations.contains(&range) {
            binding.declarations.push(range);
        }
        id
    }

    pub(super) fn add_reference(&mut self, id: BindingId, reference: Reference) {
        self.bindings[id.0 as usize].references.push(reference);
    }

    pub fn root_scope(&self) -> ScopeId {
        ScopeId(0)
    }

    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0 as usize]
    }

    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    /// Innermost scope whose owner is `node` or one of its ancestors.
    pub fn scope_of(&self, node: &SyntaxNode) -> ScopeId {
        node.ancestors()
            .find_map(|n| self.owners.get(&n).copied())
            .unwrap_or_else(|| self.root_scope())
    }

    /// `scope` and its parents, innermost first.
    pub fn scope_chain(&self, scope: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        std::iter::successors(Some(scope), |id| self.scope(*id).parent)
    }

    /// Looks `name` up from `scope` outward, in any namespace.
    pub fn find_binding(&self, scope: ScopeId, name: &str) -> Option<BindingId> {
        self.scope_chain(scope)
            .find_map(|id| self.scope(id).bindings.get(name).copied())
    }

    /// Looks `name` up from `scope` outward, skipping bindings outside `namespace`.
    pub fn resolve(&self, scope: ScopeId, name: &str, namespace: Namespace) -> Option<BindingId> {
        self.scope_chain(scope).find_map(|id| {
            self.scope(id)
                .bindings
                .get(name)
                .copied()
                .filter(|b| self.binding(*b).in_namespace(namespace))
        })
    }

    /// A type-level binding declared directly in `scope`.
    pub fn own_type_binding(&self, scope: ScopeId, name: &str) -> Option<BindingId> {
        self.scope(scope)
            .bindings
            .get(name)
            .copied()
            .filter(|b| self.binding(*b).is_type())
    }

    pub fn binding(&self, id: BindingId) -> &Binding {
        &self.bindings[id.0 as usize]
    }

    pub fn bindings(&self) -> impl Iterator<Item = (BindingId, &Binding)> {
        self.bindings
            .iter()
            .enumerate()
            .map(|(i, b)| (BindingId(i as u32), b))
    }

    pub fn references(&self, id: BindingId) -> &[Reference] {
        self.binding(id).references()
    }
}
