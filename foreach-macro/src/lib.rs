//! The `for_each!` procedural macro. Use it through the `foreach` crate,
//! which provides the traits the expansion calls.

mod binding;
mod control;
mod expand;
mod parse;

use crate::parse::ForEach;

/// Iterates over a sequence container, fixed array, null-terminated
/// sequence or cursor pair with one loop syntax.
///
/// ```text
/// for_each!(['label:] <binding> in <collection> <block> [else <block>])
/// ```
///
/// The collection expression is evaluated exactly once. A place expression
/// (a variable, field, index or dereference) is borrowed; any other
/// expression is moved into the loop as a temporary.
///
/// The loop is mutable when the binding's type contains `&mut`:
///
/// ```ignore
/// for_each!(let x: &mut u32 in counts {
///     *x += 1;
/// });
/// ```
///
/// See the `foreach` crate documentation for the binding forms and the
/// collection categories.
#[proc_macro]
pub fn for_each(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let for_each = syn::parse_macro_input!(input as ForEach);
    for_each.expand().into()
}
