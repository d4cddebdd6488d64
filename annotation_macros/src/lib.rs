use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, DeriveInput, Expr, ExprLit, Lit, MetaNameValue, Token};

/// Tags parameter positions of a type's methods for input logging.
///
/// `#[log_params(add = 0, add = 2)]` registers positions 0 and 2 of `add` for the annotated type when the
/// process starts. The expansion calls `tag_param`, which must be in scope at the annotated item.
#[proc_macro_attribute]
pub fn log_params(attr: TokenStream, item: TokenStream) -> TokenStream {
    let tags = parse_macro_input!(attr with Punctuated::<MetaNameValue, Token![,]>::parse_terminated);
    let input = parse_macro_input!(item as DeriveInput);
    let name = &input.ident;
    let owner = name.to_string();

    let fn_name = format_ident!("register_{}_param_tags", owner.to_case(Case::Snake));

    let mut registrations = Vec::with_capacity(tags.len());
    for tag in tags {
        let Some(member) = tag.path.get_ident().map(|ident| ident.to_string()) else {
            return syn::Error::new_spanned(&tag.path, "expected a method name").to_compile_error().into();
        };

        let position = match &tag.value {
            Expr::Lit(ExprLit { lit: Lit::Int(position), .. }) => match position.base10_parse::<usize>() {
                Ok(position) => position,
                Err(err) => return err.to_compile_error().into(),
            },
            other => return syn::Error::new_spanned(other, "expected a parameter position").to_compile_error().into(),
        };

        registrations.push(quote! {
            tag_param(#owner, #member, #position);
        });
    }

    let expanded = quote! {
        #input

        #[ctor::ctor]
        fn #fn_name() {
            #(#registrations)*
        }
    };

    expanded.into()
}
