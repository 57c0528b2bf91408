//! Expansion of the `#[randomized]` attribute.
//!
//! The macro rewrites a parameterized test into the shape the host runner
//! expects: a zero-parameter function that resolves each marked parameter
//! through the registry, then runs the original body.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{FnArg, Ident, ItemFn, Meta, Pat, Token, Type};

/// Parsed `#[randomized(...)]` arguments.
struct MacroArgs {
    seed: Option<u64>,
    float_bound: Option<f64>,
    krate: syn::Path,
}

impl MacroArgs {
    fn parse(metas: &Punctuated<Meta, Token![,]>) -> syn::Result<Self> {
        let mut args = Self {
            seed: None,
            float_bound: None,
            krate: syn::parse_quote!(::azar),
        };

        for meta in metas {
            let Meta::NameValue(nv) = meta else {
                return Err(syn::Error::new_spanned(
                    meta,
                    "expected `name = value` argument",
                ));
            };

            if nv.path.is_ident("seed") {
                args.seed = Some(parse_int_value(&nv.value, "seed")?);
            } else if nv.path.is_ident("float_bound") {
                args.float_bound = Some(parse_float_value(&nv.value)?);
            } else if nv.path.is_ident("crate") {
                args.krate = parse_crate_value(&nv.value)?;
            } else {
                return Err(syn::Error::new_spanned(
                    &nv.path,
                    "unknown argument; expected `seed`, `float_bound`, or `crate`",
                ));
            }
        }

        Ok(args)
    }

    /// Builds the registry construction expression.
    fn registry_init(&self) -> TokenStream2 {
        let krate = &self.krate;
        if self.seed.is_none() && self.float_bound.is_none() {
            return quote! { #krate::ResolverRegistry::standard() };
        }

        let mut init = quote! { #krate::ResolverRegistry::builder() };
        if let Some(seed) = self.seed {
            init.extend(quote! { .seed(#seed) });
        }
        if let Some(bound) = self.float_bound {
            init.extend(quote! { .float_bound(#bound) });
        }
        quote! { #init.build() }
    }
}

fn parse_int_value(value: &syn::Expr, name: &str) -> syn::Result<u64> {
    if let syn::Expr::Lit(syn::ExprLit {
        lit: syn::Lit::Int(lit),
        ..
    }) = value
    {
        return lit.base10_parse();
    }
    Err(syn::Error::new_spanned(
        value,
        format!("`{name}` expects an integer literal"),
    ))
}

fn parse_float_value(value: &syn::Expr) -> syn::Result<f64> {
    match value {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Float(lit),
            ..
        }) => lit.base10_parse(),
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Int(lit),
            ..
        }) => lit.base10_parse(),
        _ => Err(syn::Error::new_spanned(
            value,
            "`float_bound` expects a numeric literal",
        )),
    }
}

fn parse_crate_value(value: &syn::Expr) -> syn::Result<syn::Path> {
    if let syn::Expr::Lit(syn::ExprLit {
        lit: syn::Lit::Str(lit),
        ..
    }) = value
    {
        return lit.parse();
    }
    Err(syn::Error::new_spanned(
        value,
        "`crate` expects a string literal path",
    ))
}

/// One `#[random]` parameter extracted from the signature.
struct RandomParam {
    ident: Ident,
    ty: Box<Type>,
}

/// Validate the marker attributes on one parameter and extract it.
fn extract_param(arg: &FnArg) -> syn::Result<RandomParam> {
    let pat_type = match arg {
        FnArg::Receiver(receiver) => {
            return Err(syn::Error::new_spanned(
                receiver,
                "#[randomized] does not support methods",
            ));
        }
        FnArg::Typed(pat_type) => pat_type,
    };

    let Pat::Ident(pat_ident) = &*pat_type.pat else {
        return Err(syn::Error::new_spanned(
            &pat_type.pat,
            "parameter pattern must be a plain identifier",
        ));
    };

    let mut marked = false;
    for attr in &pat_type.attrs {
        if attr.path().is_ident("random") {
            if !matches!(attr.meta, Meta::Path(_)) {
                return Err(syn::Error::new_spanned(
                    attr,
                    "#[random] carries no arguments",
                ));
            }
            marked = true;
        } else {
            return Err(syn::Error::new_spanned(
                attr,
                "unsupported parameter attribute; expected #[random]",
            ));
        }
    }
    if !marked {
        return Err(syn::Error::new_spanned(
            pat_type,
            format!(
                "parameter `{}` is missing its #[random] marker",
                pat_ident.ident
            ),
        ));
    }

    classify_type(&pat_type.ty)?;

    Ok(RandomParam {
        ident: pat_ident.ident.clone(),
        ty: pat_type.ty.clone(),
    })
}

/// Check that the declared type is one the registry can resolve.
///
/// The declared type decides the parameter's fate at expansion time;
/// anything the registry could only reject at run time is rejected here
/// instead, with a location the compiler can point at.
fn classify_type(ty: &Type) -> syn::Result<()> {
    let Type::Path(type_path) = ty else {
        return Err(unsupported_type_error(ty));
    };
    if type_path.qself.is_some() {
        return Err(unsupported_type_error(ty));
    }
    let Some(ident) = type_path.path.get_ident() else {
        return Err(unsupported_type_error(ty));
    };

    match ident.to_string().as_str() {
        "i8" | "i16" | "i32" | "i64" | "isize" | "u8" | "u16" | "u32" | "u64" | "usize"
        | "f32" | "f64" => Ok(()),
        "i128" | "u128" => Err(syn::Error::new_spanned(
            ty,
            "128-bit integers are not supported: a resolution carries 64 uniform bits",
        )),
        _ => Err(unsupported_type_error(ty)),
    }
}

fn unsupported_type_error(ty: &Type) -> syn::Error {
    syn::Error::new_spanned(
        ty,
        "type is not supported by #[random]; \
         supported types: i8-i64, u8-u64, isize, usize, f32, f64",
    )
}

/// Expand `#[randomized]` on a test function.
pub fn expand_randomized(
    metas: &Punctuated<Meta, Token![,]>,
    func: ItemFn,
) -> syn::Result<TokenStream2> {
    let args = MacroArgs::parse(metas)?;

    if !func.sig.generics.params.is_empty() || func.sig.generics.where_clause.is_some() {
        return Err(syn::Error::new_spanned(
            &func.sig.generics,
            "#[randomized] does not support generic test functions",
        ));
    }
    if let Some(constness) = &func.sig.constness {
        return Err(syn::Error::new_spanned(constness, "test cannot be const"));
    }
    if let Some(unsafety) = &func.sig.unsafety {
        return Err(syn::Error::new_spanned(unsafety, "test cannot be unsafe"));
    }
    if func.sig.inputs.is_empty() {
        return Err(syn::Error::new_spanned(
            &func.sig,
            "#[randomized] requires at least one #[random] parameter",
        ));
    }

    let params = func
        .sig
        .inputs
        .iter()
        .map(extract_param)
        .collect::<syn::Result<Vec<_>>>()?;

    let krate = &args.krate;
    let registry_init = args.registry_init();
    let test_name = func.sig.ident.to_string();

    let bindings = params.iter().map(|param| {
        let ident = &param.ident;
        let ty = &param.ty;
        let name = ident.to_string();
        quote! {
            let #ident: #ty =
                match __azar_registry.resolve_param::<#ty>(&__azar_invocation, #name) {
                    ::core::result::Result::Ok(value) => value,
                    ::core::result::Result::Err(err) => ::core::panic!(
                        "parameter resolution failed for `{}`: {}",
                        #name,
                        err
                    ),
                };
        }
    });

    let attrs = &func.attrs;
    let vis = &func.vis;
    let asyncness = &func.sig.asyncness;
    let ident = &func.sig.ident;
    let output = &func.sig.output;
    let block = &func.block;

    let test_attr = if asyncness.is_some() {
        quote! { #[tokio::test] }
    } else {
        quote! { #[test] }
    };

    Ok(quote! {
        #(#attrs)*
        #test_attr
        #vis #asyncness fn #ident() #output {
            let __azar_registry = #registry_init;
            let __azar_invocation = #krate::Invocation::new(#test_name);
            #(#bindings)*
            #block
        }
    })
}
