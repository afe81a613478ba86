use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned as _;
use syn::{Block, Error, Expr, Label, Lifetime, Pat, Result, Token, Type};

use crate::binding::is_place;

/// A parsed `for_each!` invocation.
pub struct ForEach {
    pub label: Option<Label>,
    pub var: LoopVar,
    pub expr: Expr,
    pub body: Block,
    pub else_branch: Option<Block>,
}

/// The loop variable: a fresh `let` binding or an existing place.
pub enum LoopVar {
    Fresh { pat: Pat, ty: Option<Type> },
    Existing(Expr),
}

impl Parse for ForEach {
    fn parse(input: ParseStream) -> Result<Self> {
        let label = if input.peek(Lifetime) {
            Some(input.parse::<Label>()?)
        } else {
            None
        };
        let var = input.parse::<LoopVar>()?;
        input.parse::<Token![in]>()?;
        // As in `for pat in expr {}`, a brace after the expression starts the
        // body rather than a struct literal.
        let expr = Expr::parse_without_eager_brace(input)?;
        let body = input.parse::<Block>()?;
        let else_branch = if input.peek(Token![else]) {
            input.parse::<Token![else]>()?;
            Some(input.parse::<Block>()?)
        } else {
            None
        };
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after `for_each!` body"));
        }
        Ok(ForEach {
            label,
            var,
            expr,
            body,
            else_branch,
        })
    }
}

impl Parse for LoopVar {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(Token![let]) {
            input.parse::<Token![let]>()?;
            let pat = Pat::parse_single(input)?;
            let ty = if input.peek(Token![:]) {
                input.parse::<Token![:]>()?;
                Some(input.parse::<Type>()?)
            } else {
                None
            };
            return Ok(LoopVar::Fresh { pat, ty });
        }
        let expr = Expr::parse_without_eager_brace(input)?;
        if !is_place(&expr) {
            return Err(Error::new(
                expr.span(),
                "expected `let <pattern>` or an existing variable",
            ));
        }
        Ok(LoopVar::Existing(expr))
    }
}
