//! Lazy nested lists.
//!
//! [`LazyList`] produces list elements on demand. While it has depth left,
//! each element is another `LazyList` one level shallower; at depth zero
//! elements are primitives. Depth is carried by each list, so nothing is
//! shared between siblings and the generator's settings stay untouched.

use crate::generators::generate_primitive;
use crate::options::Settings;
use rand::rngs::StdRng;
use rand::SeedableRng;
use random_core::RandomValue;

/// One element of a [`LazyList`].
pub enum LazyItem<'a> {
    /// Nested list, not yet generated
    Nested(LazyList<'a>),

    /// Primitive leaf
    Value(RandomValue),
}

/// Lazy, finite, single-pass list of random elements.
pub struct LazyList<'a> {
    settings: &'a Settings,
    rng: StdRng,
    remaining: usize,
    depth: u32,
}

impl<'a> LazyList<'a> {
    pub(crate) fn new(settings: &'a Settings, rng: StdRng, nested: bool, depth: u32) -> Self {
        let remaining = settings.count(nested);
        tracing::trace!(remaining, depth, nested, "Starting lazy list");
        Self {
            settings,
            rng,
            remaining,
            depth,
        }
    }

    /// Levels of nesting still below this list's elements.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Generate every remaining element, recursing into nested lists.
    pub fn materialize(self) -> Vec<RandomValue> {
        materialize(self)
    }
}

impl<'a> Iterator for LazyList<'a> {
    type Item = LazyItem<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;

        if self.depth > 0 {
            // Each child gets its own stream so it can be consumed independently
            let rng = StdRng::from_rng(&mut self.rng);
            Some(LazyItem::Nested(LazyList::new(
                self.settings,
                rng,
                true,
                self.depth - 1,
            )))
        } else {
            Some(LazyItem::Value(generate_primitive(
                self.settings,
                &mut self.rng,
                None,
            )))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LazyList<'_> {}

/// Eagerly turn a sequence of lazy items into nested lists of values.
///
/// Works on any source of [`LazyItem`]s, not just a fresh [`LazyList`]: a
/// partly consumed list materializes only what is left.
pub fn materialize<'a>(items: impl IntoIterator<Item = LazyItem<'a>>) -> Vec<RandomValue> {
    items
        .into_iter()
        .map(|item| match item {
            LazyItem::Nested(list) => RandomValue::List(materialize(list)),
            LazyItem::Value(value) => value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::GeneratorOptions;

    fn settings(level: u32) -> Settings {
        Settings::from(
            &GeneratorOptions::default()
                .with_nested_level(level)
                .with_elem_count(3)
                .with_nested_elem_count(2),
        )
    }

    #[test]
    fn test_flat_list_yields_primitives() {
        let settings = settings(0);
        let list = LazyList::new(&settings, StdRng::seed_from_u64(42), false, 0);

        assert_eq!(list.len(), 3);
        for item in list {
            assert!(matches!(item, LazyItem::Value(_)));
        }
    }

    #[test]
    fn test_nested_items_are_lazy_lists() {
        let settings = settings(2);
        let mut list = LazyList::new(&settings, StdRng::seed_from_u64(42), false, 2);

        let Some(LazyItem::Nested(child)) = list.next() else {
            panic!("Expected nested list");
        };
        assert_eq!(child.depth(), 1);
        assert_eq!(child.len(), 2);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_materialize_shape() {
        let settings = settings(2);
        let values = LazyList::new(&settings, StdRng::seed_from_u64(42), false, 2).materialize();

        assert_eq!(values.len(), 3);
        for middle in &values {
            let middle = middle.as_list().unwrap();
            assert_eq!(middle.len(), 2);
            for inner in middle {
                let inner = inner.as_list().unwrap();
                assert_eq!(inner.len(), 2);
                assert!(inner.iter().all(|v| !v.is_container()));
            }
        }
    }

    #[test]
    fn test_materialize_partly_consumed() {
        let settings = settings(0);
        let mut list = LazyList::new(&settings, StdRng::seed_from_u64(42), false, 0);
        list.next();

        assert_eq!(materialize(list).len(), 2);
    }

    #[test]
    fn test_zero_count() {
        let settings = Settings::from(&GeneratorOptions::default().with_elem_count(0));
        let list = LazyList::new(&settings, StdRng::seed_from_u64(42), false, 1);
        assert!(list.materialize().is_empty());
    }
}
