use darling::{FromDeriveInput, FromField, ast::Data, util::Ignored};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Generics, Ident, Type};

///
/// EntityInput
///

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(cql), supports(struct_named))]
struct EntityInput {
    ident: Ident,
    generics: Generics,
    data: Data<Ignored, EntityField>,

    #[darling(default)]
    table: Option<String>,

    #[darling(default)]
    keyspace: Option<String>,
}

///
/// EntityField
///

#[derive(Debug, FromField)]
#[darling(attributes(cql))]
struct EntityField {
    ident: Option<Ident>,
    ty: Type,

    #[darling(default)]
    column: Option<String>,

    #[darling(default)]
    case_sensitive: bool,

    #[darling(default)]
    key: Option<u32>,

    #[darling(default)]
    partition_key: Option<u32>,

    #[darling(default)]
    clustering_key: Option<u32>,

    #[darling(default)]
    skip: bool,

    #[darling(default)]
    flatten: bool,
}

impl EntityField {
    fn validate(&self) -> darling::Result<()> {
        let roles = [self.key, self.partition_key, self.clustering_key]
            .iter()
            .filter(|role| role.is_some())
            .count();

        if roles > 1 {
            return Err(darling::Error::custom(
                "a field takes at most one of `key`, `partition_key`, `clustering_key`",
            )
            .with_span(&self.ident));
        }

        let has_column_meta = self.column.is_some() || self.case_sensitive || roles > 0;
        if self.flatten && (has_column_meta || self.skip) {
            return Err(darling::Error::custom(
                "`flatten` cannot be combined with column, key or skip attributes",
            )
            .with_span(&self.ident));
        }

        Ok(())
    }

    // builder call describing this field on `EntitySchema<Self>`
    fn schema_part(&self, ident: &Ident) -> TokenStream {
        if self.flatten {
            return quote! {
                .flatten(|e: &Self| &e.#ident, |e: &mut Self| &mut e.#ident)
            };
        }

        let name = ident.to_string();
        let ty = &self.ty;
        let mut modifiers = Vec::new();

        if let Some(column) = &self.column {
            modifiers.push(quote!(.column(#column)));
        }
        if self.case_sensitive {
            modifiers.push(quote!(.case_sensitive()));
        }
        if let Some(number) = self.key {
            modifiers.push(quote!(.key(#number)));
        }
        if let Some(number) = self.partition_key {
            modifiers.push(quote!(.partition_key(#number)));
        }
        if let Some(number) = self.clustering_key {
            modifiers.push(quote!(.clustering_key(#number)));
        }
        if self.skip {
            modifiers.push(quote!(.skip()));
        }

        quote! {
            .field(
                ::cqlmap::schema::FieldSchema::<Self>::new::<#ty>(
                    #name,
                    |e: &Self| &e.#ident,
                    |e: &mut Self| &mut e.#ident,
                )
                #(#modifiers)*
            )
        }
    }
}

// derive_entity
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.write_errors(),
    }
}

fn expand(input: &DeriveInput) -> darling::Result<TokenStream> {
    let entity = EntityInput::from_derive_input(input)?;
    let ident = &entity.ident;
    let (impl_generics, ty_generics, where_clause) = entity.generics.split_for_impl();

    let fields = entity
        .data
        .as_ref()
        .take_struct()
        .ok_or_else(|| darling::Error::unsupported_shape("enum").with_span(ident))?;

    let mut errors = darling::Error::accumulator();
    let mut parts = Vec::new();

    for field in fields.iter() {
        if errors.handle(field.validate()).is_none() {
            continue;
        }
        if let Some(field_ident) = &field.ident {
            parts.push(field.schema_part(field_ident));
        }
    }
    errors.finish()?;

    let table = entity.table.as_ref().map(|table| quote!(.table(#table)));
    let keyspace = entity
        .keyspace
        .as_ref()
        .map(|keyspace| quote!(.keyspace(#keyspace)));

    Ok(quote! {
        impl #impl_generics ::cqlmap::traits::Entity for #ident #ty_generics #where_clause {
            fn schema() -> ::cqlmap::schema::EntitySchema<Self> {
                ::cqlmap::schema::EntitySchema::new()
                    #table
                    #keyspace
                    #(#parts)*
            }
        }
    })
}
