#![allow(dead_code)]

use cqlmap::{
    prelude::*,
    statement::{CompareOp, Delete, Insert, Select, Update},
};
pub use memory::MemoryStore;

///
/// RetentionPolicy
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, OrdinalEnum)]
pub enum RetentionPolicy {
    #[default]
    Source,
    Class,
    Runtime,
}

///
/// Audit
/// Embedded into `Example`; its fields map as if declared there.
///

#[derive(Clone, Debug, Default, PartialEq, Entity)]
pub struct Audit {
    pub created_at: Timestamp,
}

///
/// Example
///

#[derive(Clone, Debug, Default, PartialEq, Entity)]
#[cql(table = "\"test_streaming_Cassandra\"")]
pub struct Example {
    #[cql(partition_key = 1)]
    pub user_rank: i32,

    #[cql(clustering_key = 1)]
    pub user_id: Uuid,

    #[cql(column = "user_Name", case_sensitive)]
    pub user_name: Option<String>,

    pub data: Option<Vec<u8>>,
    pub number: i32,
    pub enable: bool,
    pub retention_policy: Option<RetentionPolicy>,

    #[cql(flatten)]
    pub audit: Audit,

    #[cql(skip)]
    pub cached: Option<String>,
}

impl Example {
    pub fn new(user_rank: i32, user_id: Uuid, user_name: &str) -> Self {
        Self {
            user_rank,
            user_id,
            user_name: Some(user_name.to_string()),
            ..Self::default()
        }
    }

    pub fn full(user_rank: i32, user_id: Uuid) -> Self {
        Self {
            data: Some(vec![5, 6, 7]),
            number: 2,
            enable: true,
            retention_policy: Some(RetentionPolicy::Runtime),
            audit: Audit {
                created_at: Timestamp::from_millis(1_700_000_000_000),
            },
            ..Self::new(user_rank, user_id, "Admin")
        }
    }
}

pub mod memory {
    //! In-memory stand-in for the store, driven by statement descriptions.

    use super::*;
    use std::{
        collections::BTreeMap,
        convert::Infallible,
        sync::Mutex,
    };

    type Record = BTreeMap<String, Value>;

    ///
    /// MemoryStore
    ///
    /// Rows live per table as column → value maps, identified by the
    /// configured key columns. Inserts upsert; where-clauses match by
    /// equality only.
    ///

    #[derive(Default)]
    pub struct MemoryStore {
        tables: Mutex<BTreeMap<String, Vec<Record>>>,
        log: Mutex<Vec<String>>,
        keys: Vec<String>,
    }

    impl MemoryStore {
        /// Store whose rows are identified by `keys` (wire column names).
        pub fn keyed(keys: &[&str]) -> Self {
            Self {
                keys: keys.iter().map(ToString::to_string).collect(),
                ..Self::default()
            }
        }

        /// Rendered statements, in execution order.
        pub fn log(&self) -> Vec<String> {
            self.log.lock().map(|log| log.clone()).unwrap_or_default()
        }

        pub fn row_count(&self, table: &str) -> usize {
            self.tables
                .lock()
                .map(|tables| tables.get(table).map_or(0, Vec::len))
                .unwrap_or_default()
        }

        fn key_of(&self, record: &Record) -> Vec<Option<Value>> {
            self.keys.iter().map(|key| record.get(key).cloned()).collect()
        }

        fn select(&self, tables: &BTreeMap<String, Vec<Record>>, select: &Select) -> ResultSet {
            let rows = tables.get(&select.table).map_or_else(Vec::new, |rows| {
                rows.iter()
                    .filter(|record| matches(record, &select.clauses))
                    .take(select.limit.map_or(usize::MAX, |limit| limit as usize))
                    .map(|record| to_row(record, &select.columns))
                    .collect()
            });

            ResultSet::new(rows)
        }

        fn insert(&self, tables: &mut BTreeMap<String, Vec<Record>>, insert: &Insert) -> ResultSet {
            let record: Record = insert
                .columns
                .iter()
                .cloned()
                .zip(insert.values.iter().cloned())
                .collect();
            let key = self.key_of(&record);
            let rows = tables.entry(insert.table.clone()).or_default();

            match rows.iter_mut().find(|existing| self.key_of(existing) == key) {
                Some(_) if insert.if_not_exists => return applied(false),
                Some(existing) => existing.extend(record),
                None => rows.push(record),
            }

            if insert.if_not_exists {
                applied(true)
            } else {
                ResultSet::default()
            }
        }

        fn update(tables: &mut BTreeMap<String, Vec<Record>>, update: &Update) -> ResultSet {
            let rows = tables.entry(update.table.clone()).or_default();
            let mut found = false;

            for record in rows.iter_mut().filter(|record| matches(record, &update.clauses)) {
                found = true;
                for assignment in &update.assignments {
                    if let Assignment::Set { column, value } = assignment {
                        record.insert(column.clone(), value.clone());
                    }
                }
            }

            if update.if_exists {
                applied(found)
            } else {
                ResultSet::default()
            }
        }

        fn delete(tables: &mut BTreeMap<String, Vec<Record>>, delete: &Delete) -> ResultSet {
            if let Some(rows) = tables.get_mut(&delete.table) {
                rows.retain(|record| !matches(record, &delete.clauses));
            }

            ResultSet::default()
        }
    }

    impl Executor for MemoryStore {
        type Error = Infallible;

        fn execute(&self, statement: &Statement) -> Result<ResultSet, Self::Error> {
            if let Ok(mut log) = self.log.lock() {
                log.push(statement.to_string());
            }
            let Ok(mut tables) = self.tables.lock() else {
                return Ok(ResultSet::default());
            };

            let result = match statement {
                Statement::Select(select) => self.select(&tables, select),
                Statement::Insert(insert) => self.insert(&mut tables, insert),
                Statement::Update(update) => Self::update(&mut tables, update),
                Statement::Delete(delete) => Self::delete(&mut tables, delete),
            };

            Ok(result)
        }
    }

    fn matches(record: &Record, clauses: &[Clause]) -> bool {
        clauses.iter().all(|clause| {
            clause.op == CompareOp::Eq && record.get(&clause.column) == Some(&clause.value)
        })
    }

    fn to_row(record: &Record, columns: &[String]) -> Row {
        columns
            .iter()
            .map(|column| {
                let value = record.get(column).cloned().unwrap_or(Value::Null);
                let name = cqlmap::quotes::remove_quotes(column).unwrap_or_else(|_| column.clone());

                Cell::encode(name, wire_type_of(&value), &value)
                    .unwrap_or_else(|_| Cell::new(column.clone(), WireType::Blob, None))
            })
            .collect()
    }

    fn wire_type_of(value: &Value) -> WireType {
        match value {
            Value::Bool(_) => WireType::Boolean,
            Value::Int(_) => WireType::Int,
            Value::BigInt(_) => WireType::BigInt,
            Value::Float(_) => WireType::Float,
            Value::Double(_) => WireType::Double,
            Value::Text(_) => WireType::Text,
            Value::Uuid(_) => WireType::Uuid,
            Value::Timestamp(_) => WireType::Timestamp,
            _ => WireType::Blob,
        }
    }

    fn applied(applied: bool) -> ResultSet {
        ResultSet::new(vec![Row::new(vec![Cell::new(
            "[applied]",
            WireType::Boolean,
            Some(vec![u8::from(applied)]),
        )])])
    }
}
