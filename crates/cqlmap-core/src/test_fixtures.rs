use crate::{
    schema::{EntitySchema, FieldSchema},
    traits::Entity,
};
use uuid::Uuid;

///
/// Color
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, cqlmap_derive::OrdinalEnum)]
pub(crate) enum Color {
    #[default]
    Red,
    Green,
    Blue,
}

///
/// Ranked
///
/// Hand-described entity covering every key role and column rule.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Ranked {
    pub(crate) rank: i32,
    pub(crate) id: Uuid,
    pub(crate) name: Option<String>,
    pub(crate) data: Option<Vec<u8>>,
    pub(crate) count: i32,
    pub(crate) enabled: bool,
    pub(crate) color: Option<Color>,
    pub(crate) scratch: i64,
}

impl Entity for Ranked {
    fn schema() -> EntitySchema<Self> {
        EntitySchema::new()
            .field(FieldSchema::new("name", |e: &Self| &e.name, |e: &mut Self| &mut e.name)
                .column("user_Name")
                .case_sensitive())
            .field(FieldSchema::new("id", |e: &Self| &e.id, |e: &mut Self| &mut e.id).clustering_key(2))
            .field(FieldSchema::new("data", |e: &Self| &e.data, |e: &mut Self| &mut e.data))
            .field(FieldSchema::new("rank", |e: &Self| &e.rank, |e: &mut Self| &mut e.rank).partition_key(1))
            .field(FieldSchema::new("count", |e: &Self| &e.count, |e: &mut Self| &mut e.count))
            .field(FieldSchema::new("enabled", |e: &Self| &e.enabled, |e: &mut Self| &mut e.enabled))
            .field(FieldSchema::new("color", |e: &Self| &e.color, |e: &mut Self| &mut e.color))
            .field(FieldSchema::new("scratch", |e: &Self| &e.scratch, |e: &mut Self| &mut e.scratch).skip())
    }
}

impl Ranked {
    pub(crate) fn sample() -> Self {
        Self {
            rank: 1,
            id: Uuid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef),
            name: Some("Ada".to_string()),
            data: Some(vec![0xca, 0xfe]),
            count: 7,
            enabled: true,
            color: Some(Color::Blue),
            scratch: 99,
        }
    }
}
