use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields};

// derive_ordinal_enum
pub fn derive_ordinal_enum(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data) = &input.data else {
        return Error::new_spanned(ident, "OrdinalEnum can only be derived for enums")
            .to_compile_error();
    };

    if data.variants.is_empty() {
        return Error::new_spanned(ident, "OrdinalEnum needs at least one variant")
            .to_compile_error();
    }

    if let Some(variant) = data
        .variants
        .iter()
        .find(|variant| !matches!(variant.fields, Fields::Unit))
    {
        return Error::new_spanned(variant, "OrdinalEnum variants cannot carry data")
            .to_compile_error();
    }

    let names = data.variants.iter().map(|variant| variant.ident.to_string());

    let to_ordinal_arms = data.variants.iter().enumerate().map(|(index, variant)| {
        let variant_ident = &variant.ident;
        let ordinal = ordinal_literal(index);

        quote!(Self::#variant_ident => #ordinal,)
    });

    let from_ordinal_arms = data.variants.iter().enumerate().map(|(index, variant)| {
        let variant_ident = &variant.ident;
        let ordinal = ordinal_literal(index);

        quote!(#ordinal => Some(Self::#variant_ident),)
    });

    quote! {
        impl #impl_generics ::cqlmap::traits::OrdinalEnum for #ident #ty_generics #where_clause {
            const VARIANTS: &'static [&'static str] = &[#(#names),*];

            fn ordinal(&self) -> u32 {
                match self {
                    #(#to_ordinal_arms)*
                }
            }

            fn from_ordinal(ordinal: u32) -> Option<Self> {
                match ordinal {
                    #(#from_ordinal_arms)*
                    _ => None,
                }
            }
        }

        impl #impl_generics ::cqlmap::traits::FieldValue for #ident #ty_generics #where_clause {
            fn field_type() -> ::cqlmap::model::field::FieldType {
                ::cqlmap::model::field::FieldType::new(::cqlmap::model::field::FieldKind::Enum(
                    <Self as ::cqlmap::traits::OrdinalEnum>::VARIANTS,
                ))
            }

            fn to_value(&self) -> ::cqlmap::value::Value {
                ::cqlmap::value::Value::Enum(::cqlmap::traits::OrdinalEnum::ordinal(self))
            }

            fn from_value(value: &::cqlmap::value::Value) -> Option<Self> {
                match value {
                    ::cqlmap::value::Value::Enum(ordinal) => {
                        <Self as ::cqlmap::traits::OrdinalEnum>::from_ordinal(*ordinal)
                    }
                    _ => None,
                }
            }
        }
    }
}

fn ordinal_literal(index: usize) -> Literal {
    Literal::u32_unsuffixed(u32::try_from(index).unwrap_or(u32::MAX))
}
