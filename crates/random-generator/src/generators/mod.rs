//! Individual value generators for each primitive type.
//!
//! This module maps a [`TypeTag`] to its generation routine. Every routine
//! takes the resolved [`Settings`] and an RNG, so the same code serves the
//! generator itself and the lazy lists it hands out.

pub mod numeric;
pub mod sign;
pub mod text;

use crate::options::Settings;
use rand::seq::IndexedRandom;
use rand::Rng;
use random_core::{RandomValue, TypeTag};

/// Generate one primitive of `target`, or of a tag picked uniformly from
/// the allowed types when no target is given.
///
/// Returns null when the allowed-type list is empty, even if a target is
/// given. Null and unrecognized tags also produce null.
pub fn generate_primitive<R: Rng>(
    settings: &Settings,
    rng: &mut R,
    target: Option<&TypeTag>,
) -> RandomValue {
    if settings.types.is_empty() {
        return RandomValue::Null;
    }

    let tag = match target {
        Some(tag) => tag,
        None => match settings.types.as_slice().choose(rng) {
            Some(tag) => tag,
            None => return RandomValue::Null,
        },
    };

    match tag {
        TypeTag::Int => numeric::generate_int_range(rng, settings.int_bundle),
        TypeTag::Float => {
            numeric::generate_float_span(rng, settings.float_bundle, settings.round_digits)
        }
        TypeTag::Text => text::generate_text(rng, settings.length),
        TypeTag::Bool => RandomValue::Bool(rng.random()),
        TypeTag::Null | TypeTag::Other(_) => RandomValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::GeneratorOptions;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use random_core::TypeSet;

    #[test]
    fn test_target_type_is_honored() {
        let settings = Settings::default();
        let mut rng = StdRng::seed_from_u64(42);

        for tag in TypeTag::KNOWN {
            for _ in 0..20 {
                let value = generate_primitive(&settings, &mut rng, Some(&tag));
                assert_eq!(value.type_tag(), Some(tag.clone()));
            }
        }
    }

    #[test]
    fn test_random_type_from_allowed() {
        let settings = Settings::from(
            &GeneratorOptions::default().with_types(vec![TypeTag::Text, TypeTag::Bool]),
        );
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = generate_primitive(&settings, &mut rng, None);
            assert!(value.matches_any(&settings.types), "unexpected {value:?}");
        }
    }

    #[test]
    fn test_empty_types_yield_null() {
        let settings = Settings::from(&GeneratorOptions::default().with_types(TypeSet::from(Vec::<TypeTag>::new())));
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(generate_primitive(&settings, &mut rng, None), RandomValue::Null);
        assert_eq!(
            generate_primitive(&settings, &mut rng, Some(&TypeTag::Int)),
            RandomValue::Null
        );
    }

    #[test]
    fn test_unrecognized_tag_yields_null() {
        let settings = Settings::default();
        let mut rng = StdRng::seed_from_u64(42);
        let tag = TypeTag::Other("decimal".to_string());

        assert_eq!(generate_primitive(&settings, &mut rng, Some(&tag)), RandomValue::Null);
    }

    #[test]
    fn test_duplicate_tags_weight_choice() {
        let settings = Settings::from(&GeneratorOptions::default().with_types(vec![
            TypeTag::Bool,
            TypeTag::Bool,
            TypeTag::Bool,
            TypeTag::Null,
        ]));
        let mut rng = StdRng::seed_from_u64(42);

        let bools = (0..1000)
            .filter(|_| generate_primitive(&settings, &mut rng, None).as_bool().is_some())
            .count();
        assert!(bools > 600, "expected roughly 750 booleans, got {bools}");
    }
}
