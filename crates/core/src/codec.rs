//! Codec registry keyed by logical-type descriptor.
//!
//! Compile-time code never needs the registry: `Nullable<D>` carries its own
//! serde impls. The registry serves code that only knows a [`Kind`] at
//! runtime. [`install`] builds the process-wide standard registry once.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::OnceCell;

use crate::any::AnyNullable;
use crate::contract::TriState;
use crate::datum::Datum;
use crate::domain::Domain;
use crate::error::{Result, ValueError};
use crate::factory;
use crate::kind::Kind;
use crate::status::Status;
use crate::value::Nullable;

/// Decode, encode, emptiness and construction for one domain.
#[derive(Clone, Copy)]
pub struct Codec {
    kind: Kind,
    decode: fn(&[u8]) -> Result<AnyNullable>,
    encode: fn(&AnyNullable) -> Result<String>,
    build: fn(Datum, Status) -> Result<AnyNullable>,
}

impl Codec {
    /// The codec for domain `D`
    pub fn of<D: Domain>() -> Self {
        Codec {
            kind: D::KIND,
            decode: decode_as::<D>,
            encode: encode_as::<D>,
            build: factory::build_into::<D>,
        }
    }

    /// Descriptor this codec serves
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Decode one JSON literal
    pub fn decode(&self, literal: &[u8]) -> Result<AnyNullable> {
        (self.decode)(literal)
    }

    /// Encode one value; fails with a domain mismatch for foreign values
    pub fn encode(&self, value: &AnyNullable) -> Result<String> {
        (self.encode)(value)
    }

    /// Whether the value should be omitted when emptiness-based omission is on
    pub fn is_empty(&self, value: &AnyNullable) -> bool {
        !value.is_assigned()
    }

    /// Construct from a raw datum
    pub fn build(&self, datum: Datum, status: Status) -> Result<AnyNullable> {
        (self.build)(datum, status)
    }
}

impl fmt::Debug for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec").field("kind", &self.kind).finish()
    }
}

fn decode_as<D: Domain>(literal: &[u8]) -> Result<AnyNullable> {
    Nullable::<D>::decode_literal(literal).map(D::into_any)
}

fn encode_as<D: Domain>(value: &AnyNullable) -> Result<String> {
    D::from_any(value)
        .ok_or_else(|| ValueError::mismatch(D::KIND, value.kind().name()))?
        .encode_literal()
}

/// Mapping from descriptor to codec.
#[derive(Debug, Clone, Default)]
pub struct CodecRegistry {
    codecs: BTreeMap<Kind, Codec>,
}

impl CodecRegistry {
    /// A registry with nothing registered
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry with all seven domains registered
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(Codec::of::<String>());
        registry.register(Codec::of::<i64>());
        registry.register(Codec::of::<f64>());
        registry.register(Codec::of::<bool>());
        registry.register(Codec::of::<Vec<u8>>());
        registry.register(Codec::of::<chrono::DateTime<chrono::FixedOffset>>());
        registry.register(Codec::of::<chrono::NaiveDate>());
        registry
    }

    /// Register a codec, returning the one it replaced
    pub fn register(&mut self, codec: Codec) -> Option<Codec> {
        self.codecs.insert(codec.kind, codec)
    }

    /// Look up the codec for a descriptor
    pub fn get(&self, kind: Kind) -> Result<&Codec> {
        self.codecs
            .get(&kind)
            .ok_or_else(|| ValueError::unsupported(kind.name()))
    }

    /// Look up the codec for a descriptor name
    pub fn get_named(&self, name: &str) -> Result<&Codec> {
        self.get(name.parse()?)
    }

    /// Whether `kind` is registered
    pub fn contains(&self, kind: Kind) -> bool {
        self.codecs.contains_key(&kind)
    }

    /// Registered descriptors, in descriptor order
    pub fn kinds(&self) -> impl Iterator<Item = Kind> + '_ {
        self.codecs.keys().copied()
    }

    /// Number of registered codecs
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    /// Decode a literal as the domain named by `kind`
    pub fn decode(&self, kind: Kind, literal: &[u8]) -> Result<AnyNullable> {
        self.get(kind)?.decode(literal)
    }

    /// Encode a value with its domain's codec
    pub fn encode(&self, value: &AnyNullable) -> Result<String> {
        self.get(value.kind())?.encode(value)
    }

    /// Emptiness predicate for field omission
    pub fn is_empty_value(&self, value: &AnyNullable) -> Result<bool> {
        Ok(self.get(value.kind())?.is_empty(value))
    }

    /// Dynamic factory: build a value of the domain named by `kind`.
    ///
    /// Fails with [`ValueError::UnsupportedDescriptor`] when `kind` is not
    /// registered and [`ValueError::DomainMismatch`] when the datum does not
    /// fit the domain (unless `status.null` is set).
    pub fn build(&self, kind: Kind, datum: Datum, status: Status) -> Result<AnyNullable> {
        self.get(kind)?.build(datum, status)
    }

    /// Dynamic factory keyed by descriptor name
    pub fn build_named(&self, name: &str, datum: Datum, status: Status) -> Result<AnyNullable> {
        self.get_named(name)?.build(datum, status)
    }
}

static REGISTRY: OnceCell<CodecRegistry> = OnceCell::new();

/// Install the standard registry for the process.
///
/// Idempotent and safe to race: exactly one caller builds the registry,
/// every caller gets the same instance.
pub fn install() -> &'static CodecRegistry {
    REGISTRY.get_or_init(|| {
        let registry = CodecRegistry::standard();
        tracing::info!(
            target: "tristate::codec",
            codecs = registry.len(),
            "codec registry installed"
        );
        registry
    })
}

/// The installed registry, if [`install`] has run
pub fn installed() -> Option<&'static CodecRegistry> {
    REGISTRY.get()
}
