use crate::attrs::{MessageAttrConfig, handled_by};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, GenericParam, Result as SynResult, Type};

#[derive(Clone, Copy)]
pub(crate) enum MessageKind {
    Command,
    Query,
}

impl MessageKind {
    fn attr_name(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Query => "query",
        }
    }
}

/// 生成 `Message` 与 `Command`/`Query` 的实现
pub(crate) fn expand(mut input: DeriveInput, kind: MessageKind) -> SynResult<TokenStream> {
    if let Data::Union(u) = &input.data {
        return Err(syn::Error::new(
            u.union_token.span,
            "messages must be a struct or an enum",
        ));
    }

    if let Some(lt) = input.generics.lifetimes().next() {
        return Err(syn::Error::new(
            lt.lifetime.ident.span(),
            "messages must be 'static; lifetime parameters are not supported",
        ));
    }

    let cfg = MessageAttrConfig::from_attrs(&input.attrs, kind.attr_name())?;
    let handlers = handled_by(&input.attrs)?;

    let output: Type = match (cfg.output, kind) {
        (Some(ty), _) => ty,
        (None, MessageKind::Command) => syn::parse_quote! { () },
        (None, MessageKind::Query) => {
            return Err(syn::Error::new(
                input.ident.span(),
                "#[derive(Query)] requires #[query(output = Type)]",
            ));
        }
    };
    let error: Type = cfg
        .error
        .unwrap_or_else(|| syn::parse_quote! { ::cqrs_bus::error::AppError });

    let ident = &input.ident;
    let name = cfg
        .name
        .unwrap_or_else(|| syn::LitStr::new(&ident.to_string(), ident.span()));

    // 类型参数需满足 Message 的 Send + 'static 约束
    let mut generics = input.generics.clone();
    let bounded: Vec<syn::Ident> = generics
        .params
        .iter()
        .filter_map(|p| match p {
            GenericParam::Type(t) => Some(t.ident.clone()),
            _ => None,
        })
        .collect();
    let where_clause = generics.make_where_clause();
    for param in bounded {
        where_clause
            .predicates
            .push(syn::parse_quote! { #param: ::core::marker::Send + 'static });
    }
    input.generics = generics;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let marker = match kind {
        MessageKind::Command => quote! { ::cqrs_bus::command::Command },
        MessageKind::Query => quote! { ::cqrs_bus::query::Query },
    };

    Ok(quote! {
        impl #impl_generics ::cqrs_bus::message::Message for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;
            const HANDLED_BY: &'static [&'static str] = &[#(#handlers),*];

            type Output = #output;
            type Error = #error;
        }

        impl #impl_generics #marker for #ident #ty_generics #where_clause {}
    })
}
