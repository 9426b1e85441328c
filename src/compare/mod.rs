//! Comparadores reutilizáveis para ordenação.

use std::cmp::Ordering;

/// Comparador padrão.
///
/// `Equal` se `a == b`; caso contrário `Greater` se `a > b`, senão `Less`.
/// Valores incomparáveis (como `NaN`) resultam em `Less`.
///
/// `Ordering as i8` devolve `0`, `1` ou `-1`.
pub fn default_comparator<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    if a == b {
        Ordering::Equal
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Inverte um comparador, trocando ordem crescente por decrescente.
///
/// ```
/// use memora::{default_comparator, inverse_comparator};
///
/// let mut values = vec![3, 1, 2];
/// values.sort_by(inverse_comparator(default_comparator::<i32>));
/// assert_eq!(values, vec![3, 2, 1]);
/// ```
pub fn inverse_comparator<T, C>(comparator: C) -> impl Fn(&T, &T) -> Ordering
where
    T: ?Sized,
    C: Fn(&T, &T) -> Ordering,
{
    move |a, b| comparator(a, b).reverse()
}
