// Functions as values: arity, currying, composition, memoization,
// partial vs total functions, and suppliers vs laziness.

use crate::error::{Result, WorkshopError};
use crate::lesson::Transcript;
use dashmap::DashMap;
use rustc_hash::FxHashMap;
use std::cell::{Cell, LazyCell, RefCell};
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;
use tracing::debug;

// =============================================================================
// Currying
// =============================================================================

/// Turns a two-argument function into a chain of one-argument functions.
///
/// ```
/// use fp_workshop::functions::curry;
///
/// let add = curry(|i: i32, j: i32| i + j);
/// let add1 = add(1);
/// assert_eq!(add1(12), 13);
/// ```
pub fn curry<A, B, C, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C>
where
    F: Fn(A, B) -> C + 'static,
    A: Clone + 'static,
    B: 'static,
    C: 'static,
{
    let f = Rc::new(f);
    move |a: A| {
        let f = Rc::clone(&f);
        Box::new(move |b: B| f(a.clone(), b)) as Box<dyn Fn(B) -> C>
    }
}

pub fn uncurry<A, B, C, F, G>(f: F) -> impl Fn(A, B) -> C
where
    F: Fn(A) -> G,
    G: Fn(B) -> C,
{
    move |a, b| f(a)(b)
}

// =============================================================================
// Composition
// =============================================================================

/// `compose(f, g)(x) == f(g(x))`
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |a| f(g(a))
}

/// `and_then(f, g)(x) == g(f(x))`
pub fn and_then<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |a| g(f(a))
}

/// Method-style combinators for any one-argument function.
pub trait FunctionExt<A, R>: Fn(A) -> R + Sized {
    fn and_then<S, G>(self, g: G) -> impl Fn(A) -> S
    where
        G: Fn(R) -> S,
    {
        and_then(self, g)
    }

    fn compose<Z, G>(self, g: G) -> impl Fn(Z) -> R
    where
        G: Fn(Z) -> A,
    {
        compose(self, g)
    }

    fn memoized(self) -> Memoized<A, R, Self>
    where
        A: Eq + Hash + Clone,
        R: Clone,
    {
        Memoized::new(self)
    }

    fn partial<P>(self, domain: P) -> PartialFunction<A, R>
    where
        Self: 'static,
        P: Fn(&A) -> bool + 'static,
    {
        PartialFunction::new(self, domain)
    }
}

impl<A, R, F: Fn(A) -> R> FunctionExt<A, R> for F {}

// =============================================================================
// Memoization
// =============================================================================

/// Caches the result of a pure function per input.
///
/// The wrapped function runs at most once per distinct argument; later calls
/// are answered from the cache.
pub struct Memoized<A, R, F> {
    f: F,
    cache: RefCell<FxHashMap<A, R>>,
    hits: Cell<usize>,
    misses: Cell<usize>,
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: Fn(A) -> R,
{
    pub fn new(f: F) -> Self {
        Memoized {
            f,
            cache: RefCell::new(FxHashMap::default()),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    pub fn apply(&self, arg: A) -> R {
        if let Some(cached) = self.cache.borrow().get(&arg) {
            self.hits.set(self.hits.get() + 1);
            debug!(hits = self.hits.get(), "memo hit");
            return cached.clone();
        }

        // no borrow held while `f` runs
        let result = (self.f)(arg.clone());
        self.misses.set(self.misses.get() + 1);
        debug!(misses = self.misses.get(), "memo miss");
        self.cache
            .borrow_mut()
            .entry(arg)
            .or_insert(result)
            .clone()
    }

    pub fn hits(&self) -> usize {
        self.hits.get()
    }

    pub fn misses(&self) -> usize {
        self.misses.get()
    }

    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }
}

impl<A, R, F> fmt::Debug for Memoized<A, R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("hits", &self.hits.get())
            .field("misses", &self.misses.get())
            .finish()
    }
}

/// Thread-safe memoization; share it behind an `Arc`.
pub struct ConcurrentMemoized<A, R, F> {
    f: F,
    cache: DashMap<A, R>,
}

impl<A, R, F> ConcurrentMemoized<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: Fn(A) -> R,
{
    pub fn new(f: F) -> Self {
        ConcurrentMemoized {
            f,
            cache: DashMap::new(),
        }
    }

    /// Two threads racing on the same new key may both compute it; the
    /// first inserted value wins and is returned to both.
    pub fn apply(&self, arg: A) -> R {
        if let Some(cached) = self.cache.get(&arg) {
            return cached.value().clone();
        }
        let result = (self.f)(arg.clone());
        self.cache.entry(arg).or_insert(result).value().clone()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

// =============================================================================
// Partial vs total functions
// =============================================================================

/// A function that is only defined for part of its input type.
pub struct PartialFunction<A, R> {
    f: Box<dyn Fn(A) -> R>,
    domain: Box<dyn Fn(&A) -> bool>,
}

impl<A, R> PartialFunction<A, R> {
    pub fn new<F, P>(f: F, domain: P) -> Self
    where
        F: Fn(A) -> R + 'static,
        P: Fn(&A) -> bool + 'static,
    {
        PartialFunction {
            f: Box::new(f),
            domain: Box::new(domain),
        }
    }

    pub fn is_defined_at(&self, arg: &A) -> bool {
        (self.domain)(arg)
    }

    /// Total version: `None` outside the domain.
    pub fn lift(self) -> impl Fn(A) -> Option<R> {
        move |arg| {
            if (self.domain)(&arg) {
                Some((self.f)(arg))
            } else {
                None
            }
        }
    }
}

impl<A: fmt::Debug, R> PartialFunction<A, R> {
    pub fn apply(&self, arg: A) -> Result<R> {
        if self.is_defined_at(&arg) {
            Ok((self.f)(arg))
        } else {
            Err(WorkshopError::IllegalArgument(format!(
                "{arg:?} is outside the function's domain"
            )))
        }
    }
}

/// Integer division, defined only where the divisor is non-zero.
pub fn safe_divide() -> PartialFunction<(i32, i32), i32> {
    PartialFunction::new(
        |(dividend, divisor): (i32, i32)| dividend / divisor,
        |&(dividend, divisor): &(i32, i32)| divisor != 0 && !(dividend == i32::MIN && divisor == -1),
    )
}

// =============================================================================
// Lessons
// =============================================================================

pub fn lesson(out: &Transcript) -> Result<()> {
    // arity
    let f2 = |i: i32, j: i32| i + j;
    out.say(format!("f2(1, 12) = {}", f2(1, 12)));

    // currying
    let curried = curry(f2);
    let add1 = curried(1);
    let add2 = curried(2);
    out.say(format!("add1(12) = {}", add1(12)));
    out.say(format!("add2(12) = {}", add2(12)));
    out.say(format!("uncurry(curried)(3, 4) = {}", uncurry(curried)(3, 4)));

    // composition
    let size = |s: String| s.chars().count();
    let is_even = |i: usize| i % 2 == 0;
    let constant_empty = |_: i32| String::new();
    let composed = size.compose(constant_empty);
    let size_is_even = size.and_then(is_even);
    out.say(format!("size.compose(_ -> \"\")(42) = {}", composed(42)));
    out.say(format!(
        "size.and_then(is_even)(\"abc\") = {}",
        size_is_even("abc".to_string())
    ));

    // suppliers vs laziness
    let evaluations = Cell::new(0);
    let supplier = || {
        evaluations.set(evaluations.get() + 1);
        42
    };
    let _ = supplier() + supplier();
    out.say(format!("supplier evaluated {} times", evaluations.get()));

    let lazy_evaluations = Cell::new(0);
    let lazy = LazyCell::new(|| {
        lazy_evaluations.set(lazy_evaluations.get() + 1);
        42
    });
    let _ = *lazy + *lazy;
    out.say(format!("lazy evaluated {} times", lazy_evaluations.get()));

    Ok(())
}

pub fn memoization_lesson(out: &Transcript) -> Result<()> {
    let size = |s: String| {
        out.say("ciao");
        s.len()
    };
    let memoized = size.memoized();

    // first call computes, second is answered from the cache
    let first = memoized.apply("t".to_string());
    let second = memoized.apply("t".to_string());
    out.say(format!("size(\"t\") = {first}, again = {second}"));
    out.say(format!(
        "cache: {} hit(s), {} miss(es)",
        memoized.hits(),
        memoized.misses()
    ));
    Ok(())
}

pub fn partial_lesson(out: &Transcript) -> Result<()> {
    let divide = safe_divide();
    out.say(format!("defined at (10, 0)? {}", divide.is_defined_at(&(10, 0))));

    match divide.apply((10, 0)) {
        Ok(value) => out.say(format!("10 / 0 = {value}")),
        Err(err) => out.say(format!("10 / 0 -> {err}")),
    }

    let total = divide.lift();
    out.say(format!("lift(10, 2) = {:?}", total((10, 2))));
    out.say(format!("lift(10, 0) = {:?}", total((10, 0))));
    Ok(())
}
