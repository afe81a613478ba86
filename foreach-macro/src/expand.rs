use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::spanned::Spanned as _;
use syn::Ident;

use crate::binding::{strip_derefs, Access, Bind, BindingKind};
use crate::control::BlockState;
use crate::parse::{ForEach, LoopVar};

// Locals of the expansion. Mixed-site hygiene keeps them out of reach of the
// caller's body.
struct Locals {
    cell: Ident,
    cursor: Ident,
    item: Ident,
    brk: Ident,
    empty: Ident,
}

impl Locals {
    fn new() -> Self {
        let span = Span::mixed_site();
        Locals {
            cell: Ident::new("__foreach_cell", span),
            cursor: Ident::new("__foreach_cursor", span),
            item: Ident::new("__foreach_item", span),
            brk: Ident::new("__foreach_break", span),
            empty: Ident::new("__foreach_empty", span),
        }
    }
}

impl ForEach {
    /// Builds the scoped block that evaluates the collection once, starts a
    /// cursor over it and runs the body for each element.
    pub fn expand(&self) -> TokenStream {
        let locals = Locals::new();
        let Locals { cursor, empty, .. } = &locals;

        let store = self.store(&locals);
        let begin = self.begin(&locals);
        let looped = self.looped(&locals);

        match &self.else_branch {
            None => quote! {
                {
                    #store
                    #begin
                    if !::foreach::Cursor::done(&#cursor) {
                        #looped
                    }
                }
            },
            // The cell and cursor go out of scope before the `else` block runs,
            // so it may use the collection freely.
            Some(else_branch) => quote! {
                {
                    let #empty = {
                        #store
                        #begin
                        let #empty = ::foreach::Cursor::done(&#cursor);
                        if !#empty {
                            #looped
                        }
                        #empty
                    };
                    if #empty #else_branch
                }
            },
        }
    }

    // Evaluates the collection expression, the only place it appears.
    fn store(&self, locals: &Locals) -> TokenStream {
        let cell = &locals.cell;
        let span = self.expr.span();
        let kind = BindingKind::of(&self.expr);
        let expr = match kind {
            BindingKind::Borrowed => &self.expr,
            BindingKind::Owned => strip_derefs(&self.expr).0,
        };
        match (self.var.access(), kind) {
            (Access::Shared, BindingKind::Borrowed) => quote_spanned! {span=>
                let #cell = ::foreach::Cell::borrowed(&(#expr));
            },
            (Access::Shared, BindingKind::Owned) => quote_spanned! {span=>
                let #cell = ::foreach::Cell::owned(#expr);
            },
            (Access::Mutable, BindingKind::Borrowed) => quote_spanned! {span=>
                let mut #cell = ::foreach::CellMut::borrowed(&mut (#expr));
            },
            (Access::Mutable, BindingKind::Owned) => quote_spanned! {span=>
                let mut #cell = ::foreach::CellMut::owned(#expr);
            },
        }
    }

    fn begin(&self, locals: &Locals) -> TokenStream {
        let Locals { cell, cursor, .. } = locals;
        let span = self.expr.span();
        // Dereferences peeled off an owned temporary are applied to the cell.
        let derefs = match BindingKind::of(&self.expr) {
            BindingKind::Borrowed => 0,
            BindingKind::Owned => strip_derefs(&self.expr).1,
        };
        let stars = (0..derefs).map(|_| quote!(*));
        match (self.var.access(), derefs) {
            (Access::Shared, 0) => quote_spanned! {span=>
                let mut #cursor = {
                    use ::foreach::__private::Begin as _;
                    #cell.get().foreach_begin()
                };
            },
            (Access::Shared, _) => quote_spanned! {span=>
                let mut #cursor = {
                    use ::foreach::__private::Begin as _;
                    (&*#(#stars)* #cell.get()).foreach_begin()
                };
            },
            (Access::Mutable, 0) => quote_spanned! {span=>
                let mut #cursor = {
                    use ::foreach::__private::BeginMut as _;
                    #cell.get_mut().foreach_begin_mut()
                };
            },
            (Access::Mutable, _) => quote_spanned! {span=>
                let mut #cursor = {
                    use ::foreach::__private::BeginMut as _;
                    (&mut *#(#stars)* #cell.get_mut()).foreach_begin_mut()
                };
            },
        }
    }

    fn bind(&self, locals: &Locals) -> TokenStream {
        let item = &locals.item;
        match (&self.var, self.var.bind()) {
            (LoopVar::Fresh { pat, ty: None }, _) => quote! {
                let #pat = #item;
            },
            (LoopVar::Fresh { pat, ty: Some(ty) }, Bind::Direct) => quote! {
                let #pat: #ty = #item;
            },
            (LoopVar::Fresh { pat, ty: Some(ty) }, _) => quote_spanned! {ty.span()=>
                let #pat: #ty = ::foreach::bind_value::<#ty, _>(#item);
            },
            (LoopVar::Existing(place), _) => quote_spanned! {place.span()=>
                #place = ::foreach::bind_value(#item);
            },
        }
    }

    // The loop proper: get, bind, body, advance, until done. `break` leaves
    // without advancing; `continue` and falling off the body advance.
    fn looped(&self, locals: &Locals) -> TokenStream {
        let Locals { cursor, item, brk, .. } = locals;
        let bind = self.bind(locals);
        let body = &self.body;
        let label = self.label.as_ref();
        let state = BlockState::of(body);

        let run = if state.needs_inner_loop(label) {
            // A single-pass inner loop gives `continue` somewhere to go. The
            // flag is set on entry and cleared when the loop comes round
            // again, so it is still set only after a `break`.
            let check = state.may_break(label).then(|| {
                quote! {
                    if #brk {
                        break;
                    }
                }
            });
            quote! {
                let mut #brk = false;
                #label loop {
                    if #brk {
                        #brk = false;
                        break;
                    }
                    #brk = true;
                    #body
                }
                #check
            }
        } else {
            quote!(#body)
        };

        quote! {
            loop {
                let ::core::option::Option::Some(#item) = ::foreach::Cursor::get(&mut #cursor) else {
                    break;
                };
                #bind
                #run
                ::foreach::Cursor::next(&mut #cursor);
                if ::foreach::Cursor::done(&#cursor) {
                    break;
                }
            }
        }
    }
}
