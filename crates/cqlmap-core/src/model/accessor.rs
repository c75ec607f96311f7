use crate::{error::AccessError, model::field::FieldType, traits::FieldValue, value::Value};
use std::{fmt, sync::Arc};

type Getter<E> = Arc<dyn Fn(&E) -> Value + Send + Sync>;
type Setter<E> = Arc<dyn Fn(&mut E, Value) -> Result<(), AccessError> + Send + Sync>;

///
/// FieldAccessor
///
/// Get/set capability for one field, bound once when the schema is
/// described. Calls never look anything up by name.
///

pub struct FieldAccessor<E> {
    field_type: FieldType,
    getter: Getter<E>,
    setter: Setter<E>,
}

impl<E: 'static> FieldAccessor<E> {
    /// Bind typed lens functions for field `name`.
    #[must_use]
    pub fn new<F>(name: &str, get: fn(&E) -> &F, get_mut: fn(&mut E) -> &mut F) -> Self
    where
        F: FieldValue + 'static,
    {
        let name: Arc<str> = Arc::from(name);
        let field_type = F::field_type();

        Self {
            field_type,
            getter: Arc::new(move |entity: &E| get(entity).to_value()),
            setter: Arc::new(move |entity: &mut E, value: Value| {
                let typed = F::from_value(&value).ok_or_else(|| AccessError::TypeMismatch {
                    field: name.to_string(),
                    expected: field_type,
                    found: format!("{} {value}", value.label()),
                })?;
                *get_mut(entity) = typed;

                Ok(())
            }),
        }
    }

    /// Bind arbitrary getter/setter closures, for fields whose storage does
    /// not map onto a single struct member.
    #[must_use]
    pub fn from_fns<G, S>(field_type: FieldType, getter: G, setter: S) -> Self
    where
        G: Fn(&E) -> Value + Send + Sync + 'static,
        S: Fn(&mut E, Value) -> Result<(), AccessError> + Send + Sync + 'static,
    {
        Self {
            field_type,
            getter: Arc::new(getter),
            setter: Arc::new(setter),
        }
    }

    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Read the current field value, before outbound conversion.
    #[must_use]
    pub fn get(&self, entity: &E) -> Value {
        (self.getter)(entity)
    }

    pub fn set(&self, entity: &mut E, value: Value) -> Result<(), AccessError> {
        (self.setter)(entity, value)
    }

    /// Re-bind this accessor onto a parent type that embeds `E`.
    #[must_use]
    pub fn nest<P: 'static>(
        self,
        lens: fn(&P) -> &E,
        lens_mut: fn(&mut P) -> &mut E,
    ) -> FieldAccessor<P> {
        let Self {
            field_type,
            getter,
            setter,
        } = self;

        FieldAccessor {
            field_type,
            getter: Arc::new(move |parent: &P| getter(lens(parent))),
            setter: Arc::new(move |parent: &mut P, value: Value| setter(lens_mut(parent), value)),
        }
    }
}

impl<E> Clone for FieldAccessor<E> {
    fn clone(&self) -> Self {
        Self {
            field_type: self.field_type,
            getter: Arc::clone(&self.getter),
            setter: Arc::clone(&self.setter),
        }
    }
}

impl<E> fmt::Debug for FieldAccessor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("field_type", &self.field_type)
            .finish_non_exhaustive()
    }
}
