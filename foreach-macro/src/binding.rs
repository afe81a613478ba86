use syn::visit::{self, Visit};
use syn::{Expr, Type, TypeReference, UnOp};

use crate::parse::LoopVar;

/// Whether the collection expression names storage the caller keeps
/// (`Borrowed`) or produces a temporary (`Owned`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingKind {
    Borrowed,
    Owned,
}

impl BindingKind {
    pub fn of(expr: &Expr) -> Self {
        if is_place(expr) {
            BindingKind::Borrowed
        } else {
            BindingKind::Owned
        }
    }
}

/// Place expressions denote existing storage; every other expression
/// produces a temporary. Nothing is evaluated.
pub fn is_place(expr: &Expr) -> bool {
    match expr {
        Expr::Path(path) => path
            .path
            .segments
            .last()
            .map_or(false, |segment| !is_constant_name(&segment.ident.to_string())),
        Expr::Field(field) => is_place(&field.base),
        Expr::Index(index) => is_place(&index.expr),
        Expr::Unary(unary) => matches!(unary.op, UnOp::Deref(_)) && is_place(&unary.expr),
        Expr::Paren(paren) => is_place(&paren.expr),
        Expr::Group(group) => is_place(&group.expr),
        _ => false,
    }
}

/// Peels the dereferences off a temporary, returning the expression that
/// produces the value to store and how many times to dereference it.
/// `*make()` stores the result of `make()` so that it outlives the loop.
pub fn strip_derefs(mut expr: &Expr) -> (&Expr, usize) {
    let mut derefs = 0;
    loop {
        match expr {
            Expr::Unary(unary) if matches!(unary.op, UnOp::Deref(_)) => {
                expr = &unary.expr;
                derefs += 1;
            }
            Expr::Paren(paren) => expr = &paren.expr,
            Expr::Group(group) => expr = &group.expr,
            _ => return (expr, derefs),
        }
    }
}

// `SCREAMING_CASE` paths name constants, which produce a fresh value at each
// use.
fn is_constant_name(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_uppercase())
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Shared loops read elements; mutable loops lend `&mut` elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Shared,
    Mutable,
}

/// How each element reaches the loop variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bind {
    /// `let pat = element`, the element as yielded.
    Direct,
    /// `let pat: T = bind_value(element)`.
    Value,
    /// `place = bind_value(element)`.
    Assign,
}

impl LoopVar {
    pub fn access(&self) -> Access {
        match self {
            LoopVar::Fresh { ty: Some(ty), .. } if References::of(ty).mutable => Access::Mutable,
            _ => Access::Shared,
        }
    }

    pub fn bind(&self) -> Bind {
        match self {
            LoopVar::Fresh { ty: None, .. } => Bind::Direct,
            LoopVar::Fresh { ty: Some(Type::Infer(_)), .. } => Bind::Direct,
            LoopVar::Fresh { ty: Some(ty), .. } if References::of(ty).any => Bind::Direct,
            LoopVar::Fresh { .. } => Bind::Value,
            LoopVar::Existing(_) => Bind::Assign,
        }
    }
}

#[derive(Default)]
struct References {
    any: bool,
    mutable: bool,
}

impl References {
    fn of(ty: &Type) -> Self {
        let mut references = References::default();
        references.visit_type(ty);
        references
    }
}

impl<'ast> Visit<'ast> for References {
    fn visit_type_reference(&mut self, reference: &'ast TypeReference) {
        self.any = true;
        if reference.mutability.is_some() {
            self.mutable = true;
        }
        visit::visit_type_reference(self, reference);
    }
}
