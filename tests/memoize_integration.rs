//! Testes de integração para a memoização do Memora.

use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

use memora::{memoize, try_memoize, ByRef, Config, MemoizeOptions};

fn counter() -> Rc<Cell<u32>> {
    Rc::new(Cell::new(0))
}

// Testes de reaproveitamento de chamadas
mod reuse_tests {
    use super::*;

    #[test]
    fn test_equal_arg_lists_share_one_invocation() {
        let calls = counter();
        let c = Rc::clone(&calls);
        let mut greet = memoize(
            move |(name, excited): (String, bool)| {
                c.set(c.get() + 1);
                if excited {
                    format!("Hello, {}!", name)
                } else {
                    format!("Hello, {}", name)
                }
            },
            MemoizeOptions::default(),
        );

        let first = greet.call(("ana".to_string(), true));
        let second = greet.call(("ana".to_string(), true));

        assert_eq!(first, "Hello, ana!");
        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);

        greet.call(("ana".to_string(), false));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_zero_arity() {
        let calls = counter();
        let c = Rc::clone(&calls);
        let mut answer = memoize(
            move |(): ()| {
                c.set(c.get() + 1);
                42
            },
            MemoizeOptions::default(),
        );

        assert_eq!(answer.call(()), 42);
        assert_eq!(answer.call(()), 42);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_distinct_objects_are_distinct_calls() {
        let a = vec![1, 2];
        let b = vec![1, 2];
        let calls = counter();
        let c = Rc::clone(&calls);
        let mut count = memoize(
            move |(items,): (ByRef<'_, Vec<u8>>,)| {
                c.set(c.get() + 1);
                items.len()
            },
            MemoizeOptions::default(),
        );

        count.call((ByRef(&a),));
        count.call((ByRef(&b),));
        count.call((ByRef(&a),));

        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_nan_never_hits() {
        let calls = counter();
        let c = Rc::clone(&calls);
        let mut half = memoize(
            move |(x,): (f64,)| {
                c.set(c.get() + 1);
                x / 2.0
            },
            MemoizeOptions::default(),
        );

        half.call((f64::NAN,));
        half.call((f64::NAN,));
        assert_eq!(calls.get(), 2);

        half.call((0.0,));
        half.call((-0.0,));
        assert_eq!(calls.get(), 3);
    }
}

// Testes da política de despejo
mod eviction_tests {
    use super::*;

    #[test]
    fn test_fifo_eviction_recomputes_oldest() {
        let calls = counter();
        let c = Rc::clone(&calls);
        let mut upper = memoize(
            move |(s,): (&'static str,)| {
                c.set(c.get() + 1);
                s.to_uppercase()
            },
            MemoizeOptions::bounded(2),
        );

        upper.call(("x",));
        upper.call(("y",));
        upper.call(("z",));
        assert_eq!(upper.len(), 2);

        upper.call(("x",));
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_no_promotion_on_hit() {
        let calls = counter();
        let c = Rc::clone(&calls);
        let mut upper = memoize(
            move |(s,): (&'static str,)| {
                c.set(c.get() + 1);
                s.to_uppercase()
            },
            MemoizeOptions::bounded(2),
        );

        upper.call(("x",));
        upper.call(("y",));
        upper.call(("x",)); // hit, sem reordenar
        upper.call(("z",)); // x sai

        assert_eq!(calls.get(), 3);

        upper.call(("y",)); // ainda em cache
        assert_eq!(calls.get(), 3);

        upper.call(("x",)); // foi despejado
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_never_exceeds_bound() {
        let mut square = memoize(|(x,): (u32,)| x * x, MemoizeOptions::bounded(3));

        for x in 0..50 {
            square.call((x,));
            assert!(square.len() <= 3);
        }

        let stored: Vec<u32> = square.records().map(|r| r.args().0).collect();
        assert_eq!(stored, vec![47, 48, 49]);
    }

    #[test]
    fn test_zero_size_still_returns_results() {
        let calls = counter();
        let c = Rc::clone(&calls);
        let mut inc = memoize(
            move |(x,): (i32,)| {
                c.set(c.get() + 1);
                x + 1
            },
            MemoizeOptions::bounded(0),
        );

        assert_eq!(inc.call((1,)), 2);
        assert_eq!(inc.call((1,)), 2);
        assert_eq!(calls.get(), 2);
        assert!(inc.is_empty());
    }

    #[test]
    fn test_bound_from_config() {
        let config: Config = toml::from_str("[memoize]\ncache_size = 1\n").unwrap();
        let mut id = memoize(|(x,): (u8,)| x, MemoizeOptions::from(&config.memoize));

        id.call((1,));
        id.call((2,));

        assert_eq!(id.cache_size(), Some(1));
        assert_eq!(id.len(), 1);
    }
}

// Testes de falhas da função envolvida
mod failure_tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Flaky(u32);

    #[test]
    fn test_error_propagates_and_is_not_cached() {
        let calls = counter();
        let c = Rc::clone(&calls);
        let mut fetch = try_memoize(
            move |(id,): (u32,)| {
                c.set(c.get() + 1);
                // Falha nas duas primeiras tentativas
                if c.get() <= 2 {
                    Err(Flaky(c.get()))
                } else {
                    Ok(id * 100)
                }
            },
            MemoizeOptions::default(),
        );

        assert_eq!(fetch.call((7,)), Err(Flaky(1)));
        assert_eq!(fetch.call((7,)), Err(Flaky(2)));
        assert_eq!(fetch.call((7,)), Ok(700));
        assert_eq!(fetch.call((7,)), Ok(700));

        assert_eq!(calls.get(), 3);
        assert_eq!(fetch.stats().misses, 3);
        assert_eq!(fetch.stats().hits, 1);
    }

    #[test]
    fn test_error_leaves_full_cache_intact() {
        let mut checked_div = try_memoize(
            |(x,): (u32,)| 100u32.checked_div(x).ok_or(Flaky(x)),
            MemoizeOptions::bounded(1),
        );

        assert_eq!(checked_div.call((1,)), Ok(100));
        assert_eq!(checked_div.call((0,)), Err(Flaky(0)));

        // O erro não despeja nem substitui o registro existente
        let stored: Vec<u32> = checked_div.records().map(|r| r.args().0).collect();
        assert_eq!(stored, vec![1]);
        assert_eq!(*checked_div.records().next().unwrap().result(), 100);
    }

    #[test]
    fn test_panic_is_not_cached() {
        let calls = counter();
        let c = Rc::clone(&calls);
        let mut risky = memoize(
            move |(x,): (i32,)| {
                c.set(c.get() + 1);
                if c.get() == 1 {
                    panic!("first call fails");
                }
                x * 3
            },
            MemoizeOptions::default(),
        );

        let outcome = catch_unwind(AssertUnwindSafe(|| risky.call((5,))));
        assert!(outcome.is_err());
        assert!(risky.is_empty());

        assert_eq!(risky.call((5,)), 15);
        assert_eq!(calls.get(), 2);
    }
}

// Testes de limpeza
mod clear_tests {
    use super::*;

    #[test]
    fn test_clear_forgets_everything() {
        let calls = counter();
        let c = Rc::clone(&calls);
        let mut len = memoize(
            move |(s,): (String,)| {
                c.set(c.get() + 1);
                s.len()
            },
            MemoizeOptions::bounded(8),
        );

        len.call(("abc".to_string(),));
        len.call(("de".to_string(),));
        len.clear_cache();

        assert!(len.is_empty());
        assert_eq!(len.stats().size, 0);
        assert_eq!(len.cache_size(), Some(8));

        len.call(("abc".to_string(),));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_clear_on_empty_is_noop() {
        let mut id = memoize(|(x,): (bool,)| x, MemoizeOptions::default());

        id.clear_cache();
        assert!(id.is_empty());
        assert_eq!(id.cache_size(), None);
    }
}
