//! Pool membership tests.
//!
//! Each pool holds exactly the words satisfying its predicate, in
//! declaration order.

use glossa_foundation::Pool;
use glossa_lexicon::{Lexicon, Word};
use proptest::prelude::*;

use crate::round_trip_tests::arb_words;

#[test]
fn axe_example_pools() {
    let lexicon = Lexicon::from_raws(
        "[WORD:axe][NOUN:axe:axes][FRONT_COMPOUND_NOUN_SING]".as_bytes(),
        Vec::<(glossa_foundation::Culture, &[u8])>::new(),
    )
    .unwrap();

    let axe = lexicon.get("axe").unwrap();
    let noun = axe.noun.as_ref().unwrap();
    assert_eq!((noun.singular.as_str(), noun.plural.as_str()), ("axe", "axes"));
    assert!(noun.front_compound_singular);

    assert_eq!(lexicon.pool_len(Pool::Noun), 1);
    assert_eq!(lexicon.pool_len(Pool::Front), 1);
    assert_eq!(lexicon.pool_len(Pool::Rear), 0);
}

#[test]
fn adjective_rear_flag_does_not_enter_rear_pool() {
    let lexicon = Lexicon::from_raws(
        "[WORD:DARK][ADJ:dark][REAR_COMPOUND_ADJ]".as_bytes(),
        Vec::<(glossa_foundation::Culture, &[u8])>::new(),
    )
    .unwrap();
    assert_eq!(lexicon.pool_len(Pool::Rear), 0);
    assert_eq!(lexicon.pool_len(Pool::Noun), 0);
}

fn expected(words: &[Word], pool: Pool) -> Vec<&str> {
    words
        .iter()
        .filter(|w| match pool {
            Pool::Noun => w.noun.is_some(),
            Pool::Front => {
                w.noun
                    .as_ref()
                    .is_some_and(|n| n.front_compound_singular || n.front_compound_plural)
                    || w.prefix.as_ref().is_some_and(|p| p.front_compound)
                    || w.verb.as_ref().is_some_and(|v| v.standard)
                    || w.adjective.as_ref().is_some_and(|a| a.front_compound)
            }
            Pool::Rear => {
                w.noun
                    .as_ref()
                    .is_some_and(|n| n.rear_compound_singular || n.rear_compound_plural)
                    || w.verb.as_ref().is_some_and(|v| v.standard)
            }
        })
        .map(|w| w.id.as_str())
        .collect()
}

proptest! {
    #[test]
    fn pools_match_predicates(words in arb_words()) {
        let lexicon = Lexicon::from_words(words.clone()).unwrap();
        for pool in Pool::ALL {
            let ids: Vec<_> = lexicon.pool(pool).map(|w| w.id.as_str()).collect();
            prop_assert_eq!(ids, expected(&words, pool));
        }
    }
}
