//! Value converter chain.
//!
//! Two independent, ordered chains sit between typed fields and the wire:
//! the outbound chain runs on every value written, the inbound chain on
//! every decoded cell. Converters are consulted in order and the first one
//! returning `Some` wins; when none match the value passes through as is.

mod builtin;

use crate::{
    model::field::FieldType,
    value::{Value, WireType},
};
use std::{fmt, sync::Arc};

// re-exports
pub use builtin::{BlobToBytes, BytesToBlob, EnumToOrdinal, NullToZero, OrdinalToEnum};

///
/// OutboundConverter
/// typed field value → wire value
///

pub trait OutboundConverter: Send + Sync {
    fn convert_out(&self, field_type: &FieldType, value: &Value) -> Option<Value>;
}

///
/// InboundConverter
/// wire value → typed field value
///

pub trait InboundConverter: Send + Sync {
    fn convert_in(&self, wire_type: WireType, value: &Value, field_type: &FieldType)
    -> Option<Value>;
}

impl<F> OutboundConverter for F
where
    F: Fn(&FieldType, &Value) -> Option<Value> + Send + Sync,
{
    fn convert_out(&self, field_type: &FieldType, value: &Value) -> Option<Value> {
        self(field_type, value)
    }
}

impl<F> InboundConverter for F
where
    F: Fn(WireType, &Value, &FieldType) -> Option<Value> + Send + Sync,
{
    fn convert_in(
        &self,
        wire_type: WireType,
        value: &Value,
        field_type: &FieldType,
    ) -> Option<Value> {
        self(wire_type, value, field_type)
    }
}

///
/// ConverterChain
///
/// Immutable once built; shared by every descriptor of a registry.
///

#[derive(Clone)]
pub struct ConverterChain {
    inbound: Vec<Arc<dyn InboundConverter>>,
    outbound: Vec<Arc<dyn OutboundConverter>>,
}

impl ConverterChain {
    #[must_use]
    pub fn builder() -> ConverterChainBuilder {
        ConverterChainBuilder::default()
    }

    /// Chain with no converters at all; every value passes through.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            inbound: Vec::new(),
            outbound: Vec::new(),
        }
    }

    /// Run the outbound chain over one field value.
    #[must_use]
    pub fn convert_out(&self, field_type: &FieldType, value: Value) -> Value {
        self.outbound
            .iter()
            .find_map(|converter| converter.convert_out(field_type, &value))
            .unwrap_or(value)
    }

    /// Run the inbound chain over one decoded cell (`Null` when absent).
    #[must_use]
    pub fn convert_in(&self, wire_type: WireType, value: Value, field_type: &FieldType) -> Value {
        self.inbound
            .iter()
            .find_map(|converter| converter.convert_in(wire_type, &value, field_type))
            .unwrap_or(value)
    }

    #[must_use]
    pub fn inbound_len(&self) -> usize {
        self.inbound.len()
    }

    #[must_use]
    pub fn outbound_len(&self) -> usize {
        self.outbound.len()
    }
}

impl Default for ConverterChain {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for ConverterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterChain")
            .field("inbound", &self.inbound.len())
            .field("outbound", &self.outbound.len())
            .finish()
    }
}

///
/// ConverterChainBuilder
///
/// Custom converters are placed before (`prepend_*`) or after (`append_*`)
/// the built-ins. Prepending the same direction twice puts the most recent
/// converter first.
///

pub struct ConverterChainBuilder {
    builtins: bool,
    inbound_front: Vec<Arc<dyn InboundConverter>>,
    inbound_back: Vec<Arc<dyn InboundConverter>>,
    outbound_front: Vec<Arc<dyn OutboundConverter>>,
    outbound_back: Vec<Arc<dyn OutboundConverter>>,
}

impl Default for ConverterChainBuilder {
    fn default() -> Self {
        Self {
            builtins: true,
            inbound_front: Vec::new(),
            inbound_back: Vec::new(),
            outbound_front: Vec::new(),
            outbound_back: Vec::new(),
        }
    }
}

impl ConverterChainBuilder {
    /// Include or drop the built-in converters (included by default).
    #[must_use]
    pub const fn builtins(mut self, enabled: bool) -> Self {
        self.builtins = enabled;
        self
    }

    #[must_use]
    pub fn prepend_inbound(mut self, converter: impl InboundConverter + 'static) -> Self {
        self.inbound_front.insert(0, Arc::new(converter));
        self
    }

    #[must_use]
    pub fn append_inbound(mut self, converter: impl InboundConverter + 'static) -> Self {
        self.inbound_back.push(Arc::new(converter));
        self
    }

    #[must_use]
    pub fn prepend_outbound(mut self, converter: impl OutboundConverter + 'static) -> Self {
        self.outbound_front.insert(0, Arc::new(converter));
        self
    }

    #[must_use]
    pub fn append_outbound(mut self, converter: impl OutboundConverter + 'static) -> Self {
        self.outbound_back.push(Arc::new(converter));
        self
    }

    #[must_use]
    pub fn build(self) -> ConverterChain {
        let mut inbound = self.inbound_front;
        let mut outbound = self.outbound_front;

        if self.builtins {
            inbound.push(Arc::new(NullToZero));
            inbound.push(Arc::new(BlobToBytes));
            inbound.push(Arc::new(OrdinalToEnum));
            outbound.push(Arc::new(BytesToBlob));
            outbound.push(Arc::new(EnumToOrdinal));
        }

        inbound.extend(self.inbound_back);
        outbound.extend(self.outbound_back);

        ConverterChain { inbound, outbound }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field::FieldKind;

    const TEXT: FieldType = FieldType::new(FieldKind::Text);

    fn shout(_: &FieldType, value: &Value) -> Option<Value> {
        match value {
            Value::Text(text) => Some(Value::Text(text.to_uppercase())),
            _ => None,
        }
    }

    fn exclaim(_: &FieldType, value: &Value) -> Option<Value> {
        match value {
            Value::Text(text) => Some(Value::Text(format!("{text}!"))),
            _ => None,
        }
    }

    #[test]
    fn unmatched_value_passes_through() {
        let chain = ConverterChain::default();

        assert_eq!(
            chain.convert_out(&TEXT, Value::Text("a".to_string())),
            Value::Text("a".to_string())
        );
        assert_eq!(
            chain.convert_in(WireType::Text, Value::Null, &TEXT.nullable()),
            Value::Null
        );
    }

    #[test]
    fn first_match_wins() {
        let chain = ConverterChain::builder()
            .append_outbound(shout)
            .append_outbound(exclaim)
            .build();

        assert_eq!(
            chain.convert_out(&TEXT, Value::Text("hi".to_string())),
            Value::Text("HI".to_string())
        );
    }

    #[test]
    fn prepend_runs_before_builtins() {
        let raw_bytes = |_: &FieldType, value: &Value| match value {
            Value::Bytes(bytes) => Some(Value::Text(format!("{} bytes", bytes.len()))),
            _ => None,
        };
        let chain = ConverterChain::builder().prepend_outbound(raw_bytes).build();
        let bytes_type = FieldType::new(FieldKind::Bytes);

        assert_eq!(
            chain.convert_out(&bytes_type, Value::Bytes(vec![1, 2])),
            Value::Text("2 bytes".to_string())
        );
    }

    #[test]
    fn later_prepend_goes_first() {
        let chain = ConverterChain::builder()
            .builtins(false)
            .prepend_outbound(shout)
            .prepend_outbound(exclaim)
            .build();

        assert_eq!(
            chain.convert_out(&TEXT, Value::Text("hi".to_string())),
            Value::Text("hi!".to_string())
        );
    }

    #[test]
    fn builtins_can_be_dropped() {
        let chain = ConverterChain::builder().builtins(false).build();

        assert_eq!(chain.inbound_len(), 0);
        assert_eq!(chain.outbound_len(), 0);
        assert_eq!(
            chain.convert_out(&FieldType::new(FieldKind::Bytes), Value::Bytes(vec![1])),
            Value::Bytes(vec![1])
        );
    }

    #[test]
    fn inbound_closure_converter_is_consulted() {
        let chain = ConverterChain::builder()
            .append_inbound(|wire: WireType, value: &Value, _: &FieldType| {
                (wire == WireType::Ascii).then(|| Value::Text(format!("ascii:{value}")))
            })
            .build();

        assert_eq!(
            chain.convert_in(WireType::Ascii, Value::Text("x".to_string()), &TEXT),
            Value::Text("ascii:'x'".to_string())
        );
    }
}
