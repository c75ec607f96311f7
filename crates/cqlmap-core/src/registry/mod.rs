//! Schema registry: one descriptor per mapped type, derived lazily.
//!
//! The cache is a copy-on-write snapshot behind an atomically swapped
//! pointer. A hit loads the current snapshot without locking. A miss
//! derives the descriptor with no shared state held, then takes the install
//! mutex, checks again, and publishes a fresh copy of the map. The first
//! descriptor published for a type wins; a racing caller discards its own.

mod derive;


use crate::{
    config::MapperConfig,
    convert::{ConverterChain, ConverterChainBuilder, InboundConverter, OutboundConverter},
    error::Error,
    model::entity::EntityDescriptor,
    traits::Entity,
};
use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::{
    any::{Any, TypeId},
    collections::HashMap,
    fmt,
    sync::{Arc, OnceLock},
};
use tracing::debug;

type DescriptorMap = HashMap<TypeId, Arc<dyn Any + Send + Sync>>;

static GLOBAL: OnceLock<SchemaRegistry> = OnceLock::new();

///
/// SchemaRegistry
///

pub struct SchemaRegistry {
    config: MapperConfig,
    converters: Arc<ConverterChain>,
    snapshot: ArcSwap<DescriptorMap>,
    install: Mutex<()>,
}

impl SchemaRegistry {
    /// Registry with default config and the built-in converters.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn with_config(config: MapperConfig) -> Self {
        Self::builder().config(config).build()
    }

    #[must_use]
    pub fn builder() -> SchemaRegistryBuilder {
        SchemaRegistryBuilder::default()
    }

    /// Process-wide registry with default settings.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::new)
    }

    /// Descriptor for `E`, deriving and publishing it on first use.
    pub fn descriptor<E: Entity>(&self) -> Result<Arc<EntityDescriptor<E>>, Error> {
        let type_id = TypeId::of::<E>();

        if let Some(found) = lookup::<E>(&self.snapshot.load(), type_id) {
            return Ok(found);
        }

        let derived = Arc::new(derive::derive_descriptor::<E>(
            &self.config,
            Arc::clone(&self.converters),
        )?);

        let _guard = self.install.lock();
        let current = self.snapshot.load_full();

        if let Some(existing) = lookup::<E>(&current, type_id) {
            debug!(
                entity = derived.entity_path(),
                "descriptor already published; discarding concurrent derivation"
            );
            return Ok(existing);
        }

        let mut next = DescriptorMap::clone(&current);
        next.insert(type_id, Arc::clone(&derived) as Arc<dyn Any + Send + Sync>);
        self.snapshot.store(Arc::new(next));

        debug!(
            entity = derived.entity_path(),
            table = derived.table(),
            keys = derived.key_count(),
            columns = derived.columns().len(),
            "published entity descriptor"
        );

        Ok(derived)
    }

    /// Whether a descriptor for `E` has been published.
    #[must_use]
    pub fn contains<E: Entity>(&self) -> bool {
        self.snapshot.load().contains_key(&TypeId::of::<E>())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot.load().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot.load().is_empty()
    }

    #[must_use]
    pub const fn config(&self) -> &MapperConfig {
        &self.config
    }

    #[must_use]
    pub fn converters(&self) -> &ConverterChain {
        &self.converters
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaRegistry")
            .field("config", &self.config)
            .field("converters", &self.converters)
            .field("descriptors", &self.len())
            .finish()
    }
}

fn lookup<E: Entity>(map: &DescriptorMap, type_id: TypeId) -> Option<Arc<EntityDescriptor<E>>> {
    map.get(&type_id)
        .and_then(|found| Arc::clone(found).downcast::<EntityDescriptor<E>>().ok())
}

///
/// SchemaRegistryBuilder
///

#[derive(Default)]
pub struct SchemaRegistryBuilder {
    config: MapperConfig,
    converters: ConverterChainBuilder,
}

impl SchemaRegistryBuilder {
    #[must_use]
    pub fn config(mut self, config: MapperConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn prepend_inbound(mut self, converter: impl InboundConverter + 'static) -> Self {
        self.converters = self.converters.prepend_inbound(converter);
        self
    }

    #[must_use]
    pub fn append_inbound(mut self, converter: impl InboundConverter + 'static) -> Self {
        self.converters = self.converters.append_inbound(converter);
        self
    }

    #[must_use]
    pub fn prepend_outbound(mut self, converter: impl OutboundConverter + 'static) -> Self {
        self.converters = self.converters.prepend_outbound(converter);
        self
    }

    #[must_use]
    pub fn append_outbound(mut self, converter: impl OutboundConverter + 'static) -> Self {
        self.converters = self.converters.append_outbound(converter);
        self
    }

    #[must_use]
    pub fn build(self) -> SchemaRegistry {
        let converters = self
            .converters
            .builtins(self.config.builtin_converters)
            .build();

        SchemaRegistry {
            config: self.config,
            converters: Arc::new(converters),
            snapshot: ArcSwap::from_pointee(DescriptorMap::new()),
            install: Mutex::new(()),
        }
    }
}
