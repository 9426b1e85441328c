//! Igualdade rasa de argumentos.
//!
//! Dois valores são "rasamente iguais" quando:
//! - são primitivos (números, `bool`, `char`, strings) com o mesmo valor, ou
//! - são handles compartilhados (`Rc`, `Arc`, [`ByRef`]) que apontam para a
//!   mesma alocação.
//!
//! Não há comparação estrutural profunda: dois `Rc` distintos com conteúdo
//! idêntico são considerados diferentes.

use std::rc::Rc;
use std::sync::Arc;

/// Igualdade por identidade (referências) ou por valor (primitivos).
pub trait ShallowEq {
    /// Retorna `true` se `self` e `other` são rasamente iguais.
    fn shallow_eq(&self, other: &Self) -> bool;
}

/// Compara duas sequências elemento a elemento.
///
/// Retorna `true` sse ambas têm o mesmo tamanho e todo par de elementos é
/// rasamente igual.
pub fn are_shallowly_equal<T: ShallowEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.shallow_eq(y))
}

/// Referência comparada por endereço, não por conteúdo.
///
/// Use para passar valores emprestados como argumento de uma função
/// memoizada quando a identidade do objeto é o que importa.
#[derive(Debug)]
pub struct ByRef<'a, T: ?Sized>(pub &'a T);

impl<T: ?Sized> Clone for ByRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for ByRef<'_, T> {}

impl<T: ?Sized> std::ops::Deref for ByRef<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.0
    }
}

impl<T: ?Sized> ShallowEq for ByRef<'_, T> {
    fn shallow_eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl<T: ?Sized> ShallowEq for Rc<T> {
    fn shallow_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> ShallowEq for Arc<T> {
    fn shallow_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ShallowEq> ShallowEq for Option<T> {
    fn shallow_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.shallow_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

// Primitivos comparam por valor. Floats seguem `==`: NaN nunca é igual a si
// mesmo e 0.0 == -0.0.
macro_rules! impl_shallow_eq_by_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl ShallowEq for $t {
                #[inline]
                fn shallow_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_shallow_eq_by_value!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    String, &str,
);

// Listas de argumentos: tuplas comparadas posição a posição.
macro_rules! impl_shallow_eq_for_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: ShallowEq),+> ShallowEq for ($($name,)+) {
            #[inline]
            fn shallow_eq(&self, other: &Self) -> bool {
                $(self.$idx.shallow_eq(&other.$idx))&&+
            }
        }
    };
}

impl_shallow_eq_for_tuple!(A: 0);
impl_shallow_eq_for_tuple!(A: 0, B: 1);
impl_shallow_eq_for_tuple!(A: 0, B: 1, C: 2);
impl_shallow_eq_for_tuple!(A: 0, B: 1, C: 2, D: 3);
impl_shallow_eq_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_shallow_eq_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
impl_shallow_eq_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
impl_shallow_eq_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);
impl_shallow_eq_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8);
impl_shallow_eq_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9);
impl_shallow_eq_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9, K: 10);
impl_shallow_eq_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9, K: 10, L: 11);
