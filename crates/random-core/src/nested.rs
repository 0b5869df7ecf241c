//! Lazy flattening of nested values.

use crate::map::Keys;
use crate::values::RandomValue;
use std::borrow::Cow;
use std::slice;

/// Expand every nested list (and map) in `source` into a flat sequence of
/// leaves, depth first.
///
/// Text is a leaf: strings are never split into characters. A map is
/// iterated like a key collection, so it contributes its keys (index keys
/// as `Int`, named keys as `Text`) and not its values. Keys are built on
/// the fly, which is why leaves come back as [`Cow`].
pub fn expand_nested<'a, I>(source: I) -> ExpandNested<'a, I::IntoIter>
where
    I: IntoIterator<Item = &'a RandomValue>,
{
    ExpandNested {
        source: source.into_iter(),
        stack: Vec::new(),
    }
}

enum Frame<'a> {
    List(slice::Iter<'a, RandomValue>),
    Keys(Keys<'a, RandomValue>),
}

/// Iterator returned by [`expand_nested`].
pub struct ExpandNested<'a, I> {
    source: I,
    stack: Vec<Frame<'a>>,
}

impl<'a, I> Iterator for ExpandNested<'a, I>
where
    I: Iterator<Item = &'a RandomValue>,
{
    type Item = Cow<'a, RandomValue>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let element = match self.stack.last_mut() {
                Some(Frame::List(iter)) => match iter.next() {
                    Some(element) => element,
                    None => {
                        self.stack.pop();
                        continue;
                    }
                },
                Some(Frame::Keys(keys)) => match keys.next() {
                    Some(key) => return Some(Cow::Owned(RandomValue::from(key))),
                    None => {
                        self.stack.pop();
                        continue;
                    }
                },
                None => self.source.next()?,
            };

            match element {
                RandomValue::List(items) => self.stack.push(Frame::List(items.iter())),
                RandomValue::Map(map) => self.stack.push(Frame::Keys(map.keys())),
                leaf => return Some(Cow::Borrowed(leaf)),
            }
        }
    }
}

impl RandomValue {
    /// All leaves of this value in depth-first order.
    ///
    /// A primitive yields only itself.
    pub fn leaves(&self) -> ExpandNested<'_, std::iter::Once<&RandomValue>> {
        expand_nested(std::iter::once(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::OrderedMap;
    use crate::values::Key;

    fn int(i: i64) -> RandomValue {
        RandomValue::Int(i)
    }

    fn collect<'a>(iter: impl Iterator<Item = Cow<'a, RandomValue>>) -> Vec<RandomValue> {
        iter.map(Cow::into_owned).collect()
    }

    #[test]
    fn test_text_is_not_decomposed() {
        let source = vec![
            int(1),
            RandomValue::List(vec![int(2), int(3), RandomValue::List(vec![int(4)])]),
            RandomValue::from("ab"),
            RandomValue::List(vec![int(5)]),
        ];

        assert_eq!(
            collect(expand_nested(&source)),
            vec![int(1), int(2), int(3), int(4), RandomValue::from("ab"), int(5)]
        );
    }

    #[test]
    fn test_empty_lists_vanish() {
        let source = vec![
            RandomValue::List(vec![]),
            RandomValue::List(vec![RandomValue::List(vec![])]),
            RandomValue::Null,
        ];

        assert_eq!(collect(expand_nested(&source)), vec![RandomValue::Null]);
    }

    #[test]
    fn test_maps_expand_into_keys() {
        let mut map = OrderedMap::new();
        map.insert(Key::from("k"), int(9));
        map.insert(Key::Index(3), RandomValue::List(vec![int(10), int(11)]));

        let value = RandomValue::List(vec![RandomValue::Map(map), int(30)]);
        assert_eq!(
            collect(value.leaves()),
            vec![RandomValue::from("k"), int(3), int(30)]
        );
    }

    #[test]
    fn test_primitive_leaves() {
        let value = RandomValue::Bool(true);
        assert_eq!(value.leaves().count(), 1);
    }

    #[test]
    fn test_is_lazy() {
        let source = vec![int(1), RandomValue::List(vec![int(2), int(3)])];
        let mut iter = expand_nested(&source);
        assert_eq!(iter.next().as_deref(), Some(&int(1)));
        assert_eq!(iter.next().as_deref(), Some(&int(2)));
        assert_eq!(iter.next().as_deref(), Some(&int(3)));
        assert_eq!(iter.next(), None);
    }
}
