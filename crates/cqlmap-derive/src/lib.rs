use proc_macro::TokenStream;

mod entity;
mod ordinal_enum;

/// Implement `Entity` from `#[cql(...)]` attributes.
///
/// Container: `table = "..."`, `keyspace = "..."`.
/// Field: `column = "..."`, `case_sensitive`, `key = N`, `partition_key = N`,
/// `clustering_key = N`, `skip`, `flatten`.
#[proc_macro_derive(Entity, attributes(cql))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    entity::derive_entity(input.into()).into()
}

/// Implement `OrdinalEnum` and `FieldValue` for a unit-only enum.
#[proc_macro_derive(OrdinalEnum)]
pub fn derive_ordinal_enum(input: TokenStream) -> TokenStream {
    ordinal_enum::derive_ordinal_enum(input.into()).into()
}
