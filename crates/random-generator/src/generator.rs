//! Main generator for random test data.

use crate::generators::generate_primitive;
use crate::generators::sign::random_sign_with;
use crate::lazy::{materialize, LazyList};
use crate::options::{ConfigError, GeneratorOptions, Settings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use random_core::{Key, Model, OrderedMap, RandomValue, TypeSet, TypeTag};

/// Configurable generator of random primitives and nested structures.
///
/// Configuration is only changed by [`configure`](Self::configure) and
/// [`try_configure`](Self::try_configure); generation never mutates it.
pub struct DataRandom {
    /// Resolved configuration
    settings: Settings,
    /// Random number generator, seeded from the OS unless a seed is given
    rng: StdRng,
}

impl DataRandom {
    /// Create a generator with the given options and an OS-seeded RNG.
    pub fn new(options: &GeneratorOptions) -> Self {
        Self {
            settings: Settings::from(options),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a generator whose output is reproducible for a given seed.
    pub fn with_seed(options: &GeneratorOptions, seed: u64) -> Self {
        Self {
            settings: Settings::from(options),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Like [`new`](Self::new), but reject options the permissive path
    /// would silently absorb.
    pub fn try_new(options: &GeneratorOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self::new(options))
    }

    /// Re-seed the RNG, keeping the configuration.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Apply options on top of the current configuration.
    ///
    /// Fields left `None` keep their value. Malformed bundles reset both
    /// numeric ranges to their defaults instead of failing.
    pub fn configure(&mut self, options: &GeneratorOptions) {
        self.settings.apply(options);
        tracing::debug!(settings = ?self.settings, "Generator configured");
    }

    /// Validate `options`, then apply them. Nothing changes on error.
    pub fn try_configure(&mut self, options: &GeneratorOptions) -> Result<(), ConfigError> {
        options.validate()?;
        self.configure(options);
        Ok(())
    }

    /// Get the resolved configuration.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get the allowed primitive types.
    pub fn types(&self) -> &TypeSet {
        &self.settings.types
    }

    /// Generate one primitive of `target`, or of a randomly chosen allowed
    /// type when `target` is `None`.
    pub fn random_primitive(&mut self, target: Option<&TypeTag>) -> RandomValue {
        generate_primitive(&self.settings, &mut self.rng, target)
    }

    /// Lazily generate a list, nested down to the configured level.
    ///
    /// `nested` selects the nested element count instead of the top-level
    /// one for this list.
    pub fn generate_list(&mut self, nested: bool) -> LazyList<'_> {
        let rng = StdRng::from_rng(&mut self.rng);
        LazyList::new(&self.settings, rng, nested, self.settings.nested_level)
    }

    /// Generate a fully materialized list, nested down to the configured
    /// level.
    pub fn random_list(&mut self) -> Vec<RandomValue> {
        materialize(self.generate_list(false))
    }

    /// Generate a flat map from index to primitive.
    pub fn random_dict(&mut self, nested: bool) -> OrderedMap<RandomValue> {
        (0..self.settings.count(nested))
            .map(|index| (Key::from(index), self.random_primitive(None)))
            .collect()
    }

    /// Flip the sign of a numeric `value` using this generator's RNG, so
    /// seeded generators flip reproducibly. Non-numeric input yields null.
    pub fn random_sign(&mut self, value: &RandomValue) -> RandomValue {
        random_sign_with(&mut self.rng, value)
    }

    /// Generate a value with the same shape as `model`.
    ///
    /// Mappings keep their keys and key order, sequences keep their length
    /// and order,
    /// and each leaf becomes a primitive of the leaf's tag.
    pub fn random_by_model(&mut self, model: &Model) -> RandomValue {
        match model {
            Model::Map(entries) => RandomValue::Map(
                entries
                    .iter()
                    .map(|(key, entry)| (key.clone(), self.random_by_model(entry)))
                    .collect(),
            ),
            Model::Seq(items) => {
                RandomValue::List(items.iter().map(|item| self.random_by_model(item)).collect())
            }
            Model::Leaf(tag) => self.random_primitive(tag.as_ref()),
        }
    }
}

impl Default for DataRandom {
    fn default() -> Self {
        Self::new(&GeneratorOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::Bundle;
    use random_core::expand_nested;

    fn depth_of(value: &RandomValue) -> usize {
        match value {
            RandomValue::List(items) => 1 + items.iter().map(depth_of).max().unwrap_or(0),
            _ => 0,
        }
    }

    #[test]
    fn test_single_type_list() {
        let options = GeneratorOptions::default()
            .with_int_bundle([-5, 7])
            .with_float_bundle([-0.5, 1.0])
            .with_elem_count(20)
            .with_types(TypeTag::Float)
            .with_nested_level(0);
        let mut generator = DataRandom::with_seed(&options, 42);

        let values = generator.random_list();
        assert_eq!(values.len(), 20);
        assert!(expand_nested(&values).all(|v| v.matches_any(generator.types())));
    }

    #[test]
    fn test_multi_type_list() {
        let options = GeneratorOptions::default()
            .with_int_bundle([-5, 7])
            .with_float_bundle([-0.5, 1.0])
            .with_elem_count(20)
            .with_types(vec![TypeTag::Float, TypeTag::Int, TypeTag::Bool])
            .with_nested_level(0);
        let mut generator = DataRandom::with_seed(&options, 42);

        let values = generator.random_list();
        assert_eq!(values.len(), 20);
        for value in &values {
            match value {
                RandomValue::Int(i) => assert!((-5..=7).contains(i)),
                RandomValue::Float(f) => assert!((-0.5..=1.0).contains(f)),
                RandomValue::Bool(_) => {}
                other => panic!("Unexpected value {other:?}"),
            }
        }
    }

    #[test]
    fn test_nested_list_depth_and_counts() {
        let options = GeneratorOptions::default()
            .with_nested_level(2)
            .with_elem_count(4)
            .with_nested_elem_count(3)
            .with_types(TypeTag::Float)
            .with_float_bundle([-3.0, 3.0]);
        let mut generator = DataRandom::with_seed(&options, 42);

        let values = generator.random_list();
        assert_eq!(values.len(), 4);
        for value in &values {
            assert_eq!(depth_of(value), 2);
            for inner in value.as_list().unwrap() {
                assert_eq!(inner.as_list().unwrap().len(), 3);
            }
        }
        assert_eq!(expand_nested(&values).count(), 4 * 3 * 3);
        assert_eq!(generator.settings().nested_level, 2);
    }

    #[test]
    fn test_generate_list_nested_count() {
        let options = GeneratorOptions::default()
            .with_nested_level(0)
            .with_elem_count(2)
            .with_nested_elem_count(6);
        let mut generator = DataRandom::with_seed(&options, 42);

        assert_eq!(generator.generate_list(true).len(), 6);
        assert_eq!(generator.generate_list(false).len(), 2);
    }

    #[test]
    fn test_abandoned_lazy_list_keeps_settings() {
        let options = GeneratorOptions::default().with_nested_level(3);
        let mut generator = DataRandom::with_seed(&options, 42);

        let mut list = generator.generate_list(false);
        let _ = list.next();
        drop(list);

        assert_eq!(generator.settings().nested_level, 3);
        assert_eq!(depth_of(&RandomValue::List(generator.random_list())), 4);
    }

    #[test]
    fn test_random_dict() {
        let options = GeneratorOptions::default()
            .with_elem_count(5)
            .with_nested_elem_count(2)
            .with_nested_level(3)
            .with_types(TypeTag::Int);
        let mut generator = DataRandom::with_seed(&options, 42);

        let dict = generator.random_dict(false);
        let keys: Vec<_> = dict.keys().cloned().collect();
        assert_eq!(keys, (0..5usize).map(Key::from).collect::<Vec<_>>());
        assert!(dict.values().all(|v| matches!(v, RandomValue::Int(-1..=1))));

        assert_eq!(generator.random_dict(true).len(), 2);
    }

    #[test]
    fn test_random_by_model_preserves_shape() {
        let model = Model::from_yaml(
            r#"
0: float
1: float
2: [bool, str]
3:
  - {0: float, 1: float}
  - {0: str, name: str}
"#,
        )
        .unwrap();
        let mut generator = DataRandom::with_seed(&GeneratorOptions::default(), 42);

        let value = generator.random_by_model(&model);
        let map = value.as_map().unwrap();
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec![Key::Index(0), Key::Index(1), Key::Index(2), Key::Index(3)]);

        assert!(map[&Key::Index(0)].as_f64().is_some());
        let pair = map[&Key::Index(2)].as_list().unwrap();
        assert_eq!(pair.len(), 2);
        assert!(pair[0].as_bool().is_some());
        assert_eq!(pair[1].as_str().map(str::len), Some(8));

        let nested = map[&Key::Index(3)].as_list().unwrap();
        assert_eq!(nested.len(), 2);
        let second = nested[1].as_map().unwrap();
        assert!(second.contains_key(&Key::from("name")));
        assert!(second.contains_key(&Key::Index(0)));
    }

    #[test]
    fn test_random_by_model_any_leaf_uses_allowed_types() {
        let options = GeneratorOptions::default().with_types(TypeTag::Bool);
        let mut generator = DataRandom::with_seed(&options, 42);

        let value = generator.random_by_model(&Model::Seq(vec![Model::any(); 10]));
        assert!(value.leaves().all(|v| v.as_bool().is_some()));

        // An explicit tag wins over the allowed types
        let value = generator.random_by_model(&Model::tag(TypeTag::Int));
        assert!(value.as_i64().is_some());
    }

    #[test]
    fn test_random_by_model_keeps_template_order() {
        let model = Model::from_yaml("{name: str, age: int, 0: bool, ~: float}").unwrap();
        let mut generator = DataRandom::with_seed(&GeneratorOptions::default(), 42);

        let value = generator.random_by_model(&model);
        let keys: Vec<_> = value.as_map().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            vec![Key::from("name"), Key::from("age"), Key::Index(0), Key::from("null")]
        );

        let json = serde_json::to_string(&value).unwrap();
        assert!(json.starts_with(r#"{"name":"#));
    }

    #[test]
    fn test_random_sign_follows_seed() {
        let flips = |seed| {
            let mut generator = DataRandom::with_seed(&GeneratorOptions::default(), seed);
            (0..32)
                .map(|_| generator.random_sign(&RandomValue::Int(5)))
                .collect::<Vec<_>>()
        };

        let first = flips(7);
        assert_eq!(first, flips(7));
        assert!(first.contains(&RandomValue::Int(5)));
        assert!(first.contains(&RandomValue::Int(-5)));

        let mut generator = DataRandom::with_seed(&GeneratorOptions::default(), 7);
        assert_eq!(generator.random_sign(&RandomValue::from("x")), RandomValue::Null);
    }

    #[test]
    fn test_huge_float_bundle_stays_finite() {
        let options = GeneratorOptions::default()
            .with_float_bundle([-1.0e306, 1.0e306])
            .with_types(TypeTag::Float);
        let mut generator = DataRandom::with_seed(&options, 42);
        assert_eq!(generator.settings().float_bundle, Bundle::new(-1.0e306, 1.0e306));

        for _ in 0..100 {
            let f = generator.random_primitive(None).as_f64().unwrap();
            assert!(f.is_finite());
            assert!((-1.0e306..=1.0e306).contains(&f));
        }
    }

    #[test]
    fn test_configure_updates_only_given_fields() {
        let mut generator = DataRandom::with_seed(&GeneratorOptions::default(), 42);
        generator.configure(&GeneratorOptions::default().with_length(3).with_int_bundle([10, 0]));

        let settings = generator.settings();
        assert_eq!(settings.length, 3);
        assert_eq!(settings.int_bundle, Bundle::new(0, 10));
        assert_eq!(settings.elem_count, 5);

        let text = generator.random_primitive(Some(&TypeTag::Text));
        assert_eq!(text.as_str().map(str::len), Some(3));
    }

    #[test]
    fn test_try_configure_rejects_and_keeps_settings() {
        let mut generator = DataRandom::with_seed(&GeneratorOptions::default(), 42);
        let before = generator.settings().clone();

        let bad = GeneratorOptions::default()
            .with_length(99)
            .with_int_bundle(vec![RandomValue::Int(1), RandomValue::from("x")]);
        assert!(generator.try_configure(&bad).is_err());
        assert_eq!(generator.settings(), &before);

        assert!(DataRandom::try_new(&GeneratorOptions::default().with_types(Vec::<TypeTag>::new())).is_err());
    }

    #[test]
    fn test_deterministic_generation() {
        let options = GeneratorOptions::default().with_nested_level(1);

        let mut gen1 = DataRandom::with_seed(&options, 42);
        let mut gen2 = DataRandom::with_seed(&options, 42);

        assert_eq!(gen1.random_list(), gen2.random_list());
        assert_eq!(gen1.random_dict(false), gen2.random_dict(false));

        gen1.reseed(7);
        gen2.reseed(7);
        assert_eq!(
            gen1.random_primitive(Some(&TypeTag::Text)),
            gen2.random_primitive(Some(&TypeTag::Text))
        );
    }
}
