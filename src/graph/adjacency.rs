use std::convert::Infallible;

/// An adjacency relation over vertices of type `V`, queried on demand.
///
/// Traversals only ever ask `is_adjacent(current, candidate)`.
/// Nothing enforces `is_adjacent(a, b) == is_adjacent(b, a)`;
/// an asymmetric relation makes traversals follow edges only away from the current vertex.
/// Wrap it in [Symmetric] to get the undirected closure instead.
///
/// Every `Fn(&V, &V) -> bool` is an `Adjacency<V>` that never fails.
/// Use [Fallible] for predicates returning `Result<bool, E>`.
pub trait Adjacency<V: ?Sized> {
    type Error;

    fn is_adjacent(&self, from: &V, to: &V) -> Result<bool, Self::Error>;
}

impl<V, F> Adjacency<V> for F
where
    V: ?Sized,
    F: Fn(&V, &V) -> bool,
{
    type Error = Infallible;

    fn is_adjacent(&self, from: &V, to: &V) -> Result<bool, Self::Error> {
        Ok(self(from, to))
    }
}

/// Lifts a predicate which may fail into an [Adjacency].
///
/// Errors are passed through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<V, E, F> Adjacency<V> for Fallible<F>
where
    V: ?Sized,
    F: Fn(&V, &V) -> Result<bool, E>,
{
    type Error = E;

    fn is_adjacent(&self, from: &V, to: &V) -> Result<bool, Self::Error> {
        (self.0)(from, to)
    }
}

/// The symmetric closure of an adjacency relation: `a ~ b` iff `a -> b` or `b -> a`.
///
/// `from -> to` is asked first; `to -> from` only when the former does not hold.
#[derive(Debug, Clone, Copy)]
pub struct Symmetric<A>(pub A);

impl<V, A> Adjacency<V> for Symmetric<A>
where
    V: ?Sized,
    A: Adjacency<V>,
{
    type Error = A::Error;

    fn is_adjacent(&self, from: &V, to: &V) -> Result<bool, Self::Error> {
        if self.0.is_adjacent(from, to)? {
            return Ok(true);
        }
        self.0.is_adjacent(to, from)
    }
}
