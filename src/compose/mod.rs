//! Composição de funções.
//!
//! [`FunctionComposer`] acumula uma cadeia de funções de uma entrada e uma
//! saída. Cada `next` devolve um novo builder sem alterar o original, e as
//! etapas só são executadas quando a função produzida é chamada.

use std::rc::Rc;

/// Builder de composição `P -> R`.
pub struct FunctionComposer<P, R> {
    func: Rc<dyn Fn(P) -> R>,
}

impl<P: 'static, R: 'static> FunctionComposer<P, R> {
    /// Cria um builder a partir da primeira etapa.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(P) -> R + 'static,
    {
        Self {
            func: Rc::new(func),
        }
    }

    /// Acrescenta uma etapa `R -> X`, devolvendo um novo builder `P -> X`.
    pub fn next<X, G>(&self, next: G) -> FunctionComposer<P, X>
    where
        X: 'static,
        G: Fn(R) -> X + 'static,
    {
        let func = Rc::clone(&self.func);
        FunctionComposer::new(move |param: P| next(func(param)))
    }

    /// Devolve a função composta.
    pub fn produce(&self) -> Rc<dyn Fn(P) -> R> {
        Rc::clone(&self.func)
    }
}

impl<P, R> Clone for FunctionComposer<P, R> {
    fn clone(&self) -> Self {
        Self {
            func: Rc::clone(&self.func),
        }
    }
}

impl<P, R> std::fmt::Debug for FunctionComposer<P, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionComposer").finish_non_exhaustive()
    }
}

/// Inicia uma composição.
///
/// ```
/// use memora::compose;
///
/// let pipeline = compose(|x: i32| x + 1).next(|x| x * 10).produce();
/// assert_eq!(pipeline(2), 30);
/// ```
pub fn compose<P, R, F>(func: F) -> FunctionComposer<P, R>
where
    P: 'static,
    R: 'static,
    F: Fn(P) -> R + 'static,
{
    FunctionComposer::new(func)
}

/// Função que não faz nada.
pub fn void_func() {}
