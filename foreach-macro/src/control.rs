use std::collections::HashSet;

use proc_macro2::Ident;
use syn::visit::{self, Visit};
use syn::{
    Block, ExprAsync, ExprBlock, ExprBreak, ExprClosure, ExprConst, ExprContinue, ExprForLoop,
    ExprLoop, ExprWhile, Item, Label, Macro,
};

/// Control flow found in a loop body.
#[derive(Default)]
pub struct BlockState {
    unlabelled_break: bool,
    unlabelled_continue: bool,
    labelled_control_flow: HashSet<Ident>,
    // A macro invocation may expand to any control flow.
    opaque: bool,
}

impl BlockState {
    pub fn of(block: &Block) -> Self {
        let mut state = BlockState::default();
        state.visit_block(block);
        state
    }

    // Propagate the labels from an inner loop into the state for this loop.
    // We exclude any unlabelled control flow as it is contained by the inner
    // loop. We also exclude any label attached to the inner loop.
    fn propagate(&mut self, inner: Self, label: Option<&Label>) {
        for ident in inner.labelled_control_flow {
            if let Some(label) = label {
                if label.name.ident == ident {
                    continue;
                }
            }
            self.labelled_control_flow.insert(ident);
        }
        self.opaque |= inner.opaque;
    }

    /// Whether the body must run inside a single-pass inner loop: an
    /// unlabelled `continue` needs a loop to continue to, and control flow
    /// aimed at the construct's label needs the label to exist.
    pub fn needs_inner_loop(&self, label: Option<&Label>) -> bool {
        self.opaque
            || self.unlabelled_continue
            || label.is_some_and(|label| self.labelled_control_flow.contains(&label.name.ident))
    }

    /// Whether the body may leave the inner loop with `break`, so that the
    /// outer loop has to check the break flag.
    pub fn may_break(&self, label: Option<&Label>) -> bool {
        self.opaque
            || self.unlabelled_break
            || label.is_some_and(|label| self.labelled_control_flow.contains(&label.name.ident))
    }

    fn visit_loop_body(&mut self, label: Option<&Label>, visit_body: impl FnOnce(&mut Self)) {
        let mut inner = BlockState::default();
        visit_body(&mut inner);
        self.propagate(inner, label);
    }
}

impl<'ast> Visit<'ast> for BlockState {
    fn visit_expr_break(&mut self, brk: &'ast ExprBreak) {
        match &brk.label {
            Some(lt) => {
                self.labelled_control_flow.insert(lt.ident.clone());
            }
            None => {
                self.unlabelled_break = true;
            }
        }
        visit::visit_expr_break(self, brk);
    }

    fn visit_expr_continue(&mut self, cont: &'ast ExprContinue) {
        match &cont.label {
            Some(lt) => {
                self.labelled_control_flow.insert(lt.ident.clone());
            }
            None => {
                self.unlabelled_continue = true;
            }
        }
    }

    fn visit_expr_for_loop(&mut self, for_loop: &'ast ExprForLoop) {
        // The iterated expression runs outside the nested loop.
        self.visit_expr(&for_loop.expr);
        self.visit_loop_body(for_loop.label.as_ref(), |inner| {
            inner.visit_block(&for_loop.body);
        });
    }

    fn visit_expr_loop(&mut self, lp: &'ast ExprLoop) {
        self.visit_loop_body(lp.label.as_ref(), |inner| inner.visit_block(&lp.body));
    }

    fn visit_expr_while(&mut self, wh: &'ast ExprWhile) {
        self.visit_loop_body(wh.label.as_ref(), |inner| {
            inner.visit_expr(&wh.cond);
            inner.visit_block(&wh.body);
        });
    }

    fn visit_expr_block(&mut self, block: &'ast ExprBlock) {
        let mut inner = BlockState::default();
        inner.visit_block(&block.block);
        if let Some(label) = &block.label {
            inner.labelled_control_flow.remove(&label.name.ident);
        }
        self.unlabelled_break |= inner.unlabelled_break;
        self.unlabelled_continue |= inner.unlabelled_continue;
        self.propagate(inner, None);
    }

    fn visit_macro(&mut self, _mac: &'ast Macro) {
        self.opaque = true;
    }

    // Control flow cannot leave closures, async blocks, const blocks or
    // nested items.
    fn visit_expr_closure(&mut self, _closure: &'ast ExprClosure) {}

    fn visit_expr_async(&mut self, _async: &'ast ExprAsync) {}

    fn visit_expr_const(&mut self, _const: &'ast ExprConst) {}

    fn visit_item(&mut self, _item: &'ast Item) {}
}
