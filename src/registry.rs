//! Generator lookup and the `Any` facade.
//!
//! The registry maps keys to generator functions. It seeds itself with the
//! built-in primitives and accepts runtime registration of new keys, which
//! is how user code defines its own "any" kinds; every `any_*` helper on the
//! facade goes through the same dispatch path.

use crate::any::{AnyError, AnyValue, GenerationOptions, Symbol};
use crate::engine::RandomEngine;
use crate::generators;
use crate::seed::{self, Seed, SeedError};
use std::any::TypeId;
use std::collections::HashMap;

/// Identifies a generator: either a symbolic tag or a domain-type tag.
///
/// Both forms may alias the same generator, so `any("number")` and
/// `any(GeneratorKey::of::<f64>())` hit the same function, mirroring the
/// registry's built-in table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeneratorKey {
    Tag(String),
    Type(TypeId, &'static str),
}

impl GeneratorKey {
    /// A symbolic key, e.g. `GeneratorKey::tag("email")`.
    pub fn tag(name: impl Into<String>) -> GeneratorKey {
        GeneratorKey::Tag(name.into())
    }

    /// A type key, e.g. `GeneratorKey::of::<f64>()`.
    pub fn of<T: 'static>() -> GeneratorKey {
        GeneratorKey::Type(TypeId::of::<T>(), std::any::type_name::<T>())
    }
}

impl std::fmt::Display for GeneratorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorKey::Tag(name) => write!(f, "tag {:?}", name),
            GeneratorKey::Type(_, name) => write!(f, "type {}", name),
        }
    }
}

impl From<&str> for GeneratorKey {
    fn from(name: &str) -> GeneratorKey {
        GeneratorKey::tag(name)
    }
}

impl From<String> for GeneratorKey {
    fn from(name: String) -> GeneratorKey {
        GeneratorKey::Tag(name)
    }
}

/// A registered generator: a pure function of the options, drawing from the
/// engine it is handed.
pub type Generator =
    Box<dyn Fn(&mut RandomEngine, &GenerationOptions) -> Result<AnyValue, AnyError>>;

/// The lookup table from keys to generators.
pub struct GeneratorRegistry {
    generators: HashMap<GeneratorKey, Generator>,
}

impl GeneratorRegistry {
    /// Create a registry pre-loaded with the built-in primitives, each
    /// reachable under a symbolic tag and, where one exists, its domain type.
    pub fn new() -> GeneratorRegistry {
        let mut registry = GeneratorRegistry {
            generators: HashMap::new(),
        };

        registry.register("string", |engine, options| {
            generators::any_string(engine, options).map(AnyValue::String)
        });
        registry.register(GeneratorKey::of::<String>(), |engine, options| {
            generators::any_string(engine, options).map(AnyValue::String)
        });
        registry.register("number", |engine, options| {
            Ok(AnyValue::Number(generators::any_number(engine, options)))
        });
        registry.register(GeneratorKey::of::<f64>(), |engine, options| {
            Ok(AnyValue::Number(generators::any_number(engine, options)))
        });
        registry.register("int", |engine, options| {
            Ok(AnyValue::Int(generators::any_int(engine, options)))
        });
        registry.register(GeneratorKey::of::<i64>(), |engine, options| {
            Ok(AnyValue::Int(generators::any_int(engine, options)))
        });
        registry.register("symbol", |engine, options| {
            generators::any_symbol(engine, options).map(AnyValue::Symbol)
        });
        registry.register(GeneratorKey::of::<Symbol>(), |engine, options| {
            generators::any_symbol(engine, options).map(AnyValue::Symbol)
        });
        registry.register("sentence", |engine, options| {
            generators::any_sentence(engine, options).map(AnyValue::String)
        });

        registry
    }

    /// Install `generator` under `key`, replacing any previous registration.
    pub fn register<K, F>(&mut self, key: K, generator: F)
    where
        K: Into<GeneratorKey>,
        F: Fn(&mut RandomEngine, &GenerationOptions) -> Result<AnyValue, AnyError> + 'static,
    {
        self.generators.insert(key.into(), Box::new(generator));
    }

    /// Look up `key` and run its generator against `engine` and `options`.
    ///
    /// Fails with [`AnyError::UnknownGenerator`] when the key was never
    /// registered; there is no silent fallback to a built-in.
    pub fn dispatch<K: Into<GeneratorKey>>(
        &self,
        key: K,
        engine: &mut RandomEngine,
        options: &GenerationOptions,
    ) -> Result<AnyValue, AnyError> {
        let key = key.into();
        match self.generators.get(&key) {
            Some(generator) => generator(engine, options),
            None => Err(AnyError::UnknownGenerator(key)),
        }
    }
}

impl Default for GeneratorRegistry {
    fn default() -> GeneratorRegistry {
        GeneratorRegistry::new()
    }
}

/// One engine plus one registry: the front door for arbitrary values.
///
/// Construct one per run (or per worker when tests execute concurrently)
/// and route every generation call through it, so the whole run replays
/// from the single reported seed.
pub struct Any {
    engine: RandomEngine,
    registry: GeneratorRegistry,
    seed: Seed,
}

impl Any {
    /// Build a source from an explicit seed.
    pub fn from_seed(seed: Seed) -> Any {
        Any {
            engine: RandomEngine::new(seed),
            registry: GeneratorRegistry::new(),
            seed,
        }
    }

    /// Build a source from the environment, reporting the resolved seed.
    pub fn from_env() -> Result<Any, SeedError> {
        Ok(Any::from_seed(seed::resolve()?))
    }

    /// The seed this source was built from.
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Generate a value for `key`. This is the open-ended path; the typed
    /// `any_*` helpers below go through it too.
    pub fn any<K: Into<GeneratorKey>>(
        &mut self,
        key: K,
        options: &GenerationOptions,
    ) -> Result<AnyValue, AnyError> {
        self.registry.dispatch(key, &mut self.engine, options)
    }

    /// Define (or replace) the generator behind `key`.
    pub fn new_any<K, F>(&mut self, key: K, generator: F)
    where
        K: Into<GeneratorKey>,
        F: Fn(&mut RandomEngine, &GenerationOptions) -> Result<AnyValue, AnyError> + 'static,
    {
        self.registry.register(key, generator);
    }

    /// An arbitrary float; see [`crate::generators::any_number`] for the
    /// contract.
    pub fn any_number(&mut self, options: &GenerationOptions) -> Result<f64, AnyError> {
        match self.any("number", options)? {
            AnyValue::Number(n) => Ok(n),
            other => Err(AnyError::UnexpectedKind {
                key: GeneratorKey::tag("number"),
                expected: "number",
                got: other.kind(),
            }),
        }
    }

    /// An arbitrary integer.
    pub fn any_int(&mut self, options: &GenerationOptions) -> Result<i64, AnyError> {
        match self.any("int", options)? {
            AnyValue::Int(i) => Ok(i),
            other => Err(AnyError::UnexpectedKind {
                key: GeneratorKey::tag("int"),
                expected: "int",
                got: other.kind(),
            }),
        }
    }

    /// An arbitrary string with length in the options' window.
    pub fn any_string(&mut self, options: &GenerationOptions) -> Result<String, AnyError> {
        match self.any("string", options)? {
            AnyValue::String(s) => Ok(s),
            other => Err(AnyError::UnexpectedKind {
                key: GeneratorKey::tag("string"),
                expected: "string",
                got: other.kind(),
            }),
        }
    }

    /// An arbitrary identifier-like symbol, 2 to 20 characters.
    pub fn any_symbol(&mut self, options: &GenerationOptions) -> Result<Symbol, AnyError> {
        match self.any("symbol", options)? {
            AnyValue::Symbol(s) => Ok(s),
            other => Err(AnyError::UnexpectedKind {
                key: GeneratorKey::tag("symbol"),
                expected: "symbol",
                got: other.kind(),
            }),
        }
    }

    /// An arbitrary sentence of space-joined words.
    pub fn any_sentence(&mut self, options: &GenerationOptions) -> Result<String, AnyError> {
        match self.any("sentence", options)? {
            AnyValue::String(s) => Ok(s),
            other => Err(AnyError::UnexpectedKind {
                key: GeneratorKey::tag("sentence"),
                expected: "string",
                got: other.kind(),
            }),
        }
    }
}
