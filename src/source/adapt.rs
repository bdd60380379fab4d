//! Adapting heterogeneous sources into sequences.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::property_bag::{Properties, PropertyBag};
use crate::error::{Result, ValidationError};
use crate::sequence::{BoxCursor, CursorState, Seq, Sequence};

/// A boxed, possibly unfused iterator supplied by the caller.
pub type DynIterator<T> = Box<dyn Iterator<Item = T>>;

/// A zero-argument function producing a fresh iterator per call.
pub type ProducerFn<T> = Rc<dyn Fn() -> DynIterator<T>>;

/// Options controlling [`adapt_with`].
///
/// # Examples
///
/// ```rust
/// use lazy_seq::source::AdaptOptions;
///
/// let options = AdaptOptions::new().all_properties(true);
/// assert!(options.includes_inherited());
/// assert!(!AdaptOptions::default().includes_inherited());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AdaptOptions {
    all_properties: bool,
}

impl AdaptOptions {
    /// Returns the default options: own fields only.
    #[inline]
    pub const fn new() -> Self {
        Self {
            all_properties: false,
        }
    }

    /// Sets whether property bags also yield inherited fields.
    #[inline]
    #[must_use]
    pub const fn all_properties(mut self, all_properties: bool) -> Self {
        self.all_properties = all_properties;
        self
    }

    /// Returns `true` if property bags yield inherited fields.
    #[inline]
    pub const fn includes_inherited(&self) -> bool {
        self.all_properties
    }
}

/// The enumerable shapes accepted by [`adapt`].
///
/// The shape is chosen by the caller when building the `Source`, usually
/// through a constructor or a `From` conversion, and resolved once by
/// [`adapt`].
pub enum Source<T> {
    /// Already a sequence; adapted unchanged.
    Sequence(Seq<T>),
    /// A producer function; every cursor request calls it.
    Producer(ProducerFn<T>),
    /// A single-use producer. Only the first cursor sees its values; every
    /// later cursor is immediately done.
    Generator(DynIterator<T>),
    /// A bare pull-only cursor. Drained into a snapshot when adapted.
    Cursor(DynIterator<T>),
    /// A property bag producing `(key, value)` entries.
    Bag(Rc<dyn Properties<Entry = T>>),
    /// A value without any enumeration capability.
    Unsupported {
        /// A description of the value, reported in the error.
        kind: String,
    },
}

impl<T> Source<T> {
    /// Wraps a sequence.
    pub fn sequence<S>(sequence: S) -> Self
    where
        S: Sequence<Item = T> + 'static,
    {
        Self::Sequence(Seq::new(sequence))
    }

    /// Wraps a producer function.
    ///
    /// The resulting sequence is restartable as long as `producer` returns a
    /// fresh iterator on every call.
    pub fn producer<F, I>(producer: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::Producer(Rc::new(move || -> DynIterator<T> {
            Box::new(producer().into_iter())
        }))
    }

    /// Wraps a single-use producer.
    pub fn generator<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::Generator(Box::new(values.into_iter()))
    }

    /// Wraps a bare cursor.
    pub fn cursor<I>(cursor: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::Cursor(Box::new(cursor.into_iter()))
    }

    /// Wraps a property bag.
    pub fn bag<P>(bag: P) -> Self
    where
        P: Properties<Entry = T> + 'static,
    {
        Self::Bag(Rc::new(bag))
    }

    /// Describes a value that cannot be enumerated.
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::Unsupported { kind: kind.into() }
    }

    /// Returns `true` if this source is already a sequence, in which case
    /// [`adapt`] returns it unchanged.
    #[inline]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Returns the name of this source's shape.
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Sequence(_) => "sequence",
            Self::Producer(_) => "producer",
            Self::Generator(_) => "generator",
            Self::Cursor(_) => "cursor",
            Self::Bag(_) => "bag",
            Self::Unsupported { .. } => "unsupported",
        }
    }
}

impl<T> fmt::Debug for Source<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported { kind } => formatter
                .debug_struct("Unsupported")
                .field("kind", kind)
                .finish(),
            other => formatter.debug_tuple(other.shape()).finish_non_exhaustive(),
        }
    }
}

impl<T> From<Seq<T>> for Source<T> {
    fn from(sequence: Seq<T>) -> Self {
        Self::Sequence(sequence)
    }
}

impl<T: Clone + 'static> From<Vec<T>> for Source<T> {
    fn from(values: Vec<T>) -> Self {
        Self::sequence(values)
    }
}

impl<V: Clone + 'static> From<PropertyBag<V>> for Source<(String, V)> {
    fn from(bag: PropertyBag<V>) -> Self {
        Self::bag(bag)
    }
}

/// Adapts `source` into a sequence with default [`AdaptOptions`].
///
/// # Errors
///
/// Returns [`ValidationError::UnsupportedSource`] for
/// [`Source::Unsupported`].
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::Sequence;
/// use lazy_seq::source::{adapt, PropertyBag, Source};
///
/// let numbers = adapt(vec![1, 2, 3])?;
/// assert_eq!(numbers.cursor().collect::<Vec<_>>(), vec![1, 2, 3]);
///
/// let moods = adapt(PropertyBag::new().with("bob", "Happy").with("anne", "Hungry"))?;
/// assert_eq!(
///     moods.cursor().collect::<Vec<_>>(),
///     vec![("bob".to_string(), "Happy"), ("anne".to_string(), "Hungry")]
/// );
///
/// let countdown = adapt(Source::producer(|| (1..=3).rev()))?;
/// assert_eq!(countdown.cursor().collect::<Vec<_>>(), vec![3, 2, 1]);
///
/// assert!(adapt(Source::<i32>::unsupported("number")).is_err());
/// # Ok::<(), lazy_seq::error::ValidationError>(())
/// ```
#[inline]
pub fn adapt<T, S>(source: S) -> Result<Seq<T>>
where
    T: Clone + 'static,
    S: Into<Source<T>>,
{
    adapt_with(source, AdaptOptions::default())
}

/// Adapts `source` into a sequence.
///
/// Every shape is adapted lazily except [`Source::Cursor`]: a bare cursor
/// cannot be restarted, so it is drained into an ordered snapshot here and
/// the returned sequence replays that snapshot.
///
/// # Errors
///
/// Returns [`ValidationError::UnsupportedSource`] for
/// [`Source::Unsupported`].
pub fn adapt_with<T, S>(source: S, options: AdaptOptions) -> Result<Seq<T>>
where
    T: Clone + 'static,
    S: Into<Source<T>>,
{
    let source = source.into();
    tracing::trace!(
        shape = source.shape(),
        all_properties = options.all_properties,
        "adapting source"
    );
    match source {
        Source::Sequence(sequence) => Ok(sequence),
        Source::Producer(producer) => Ok(Seq::new(Produced { producer })),
        Source::Generator(values) => Ok(Seq::new(Generated {
            slot: RefCell::new(Some(values)),
        })),
        Source::Cursor(cursor) => {
            let snapshot: Rc<[T]> = cursor.collect();
            tracing::debug!(len = snapshot.len(), "drained bare cursor into snapshot");
            Ok(Seq::new(snapshot))
        }
        Source::Bag(bag) => Ok(Seq::new(BagEntries {
            bag,
            all_properties: options.all_properties,
        })),
        Source::Unsupported { kind } => {
            tracing::debug!(%kind, "rejecting unsupported source");
            Err(ValidationError::UnsupportedSource { kind })
        }
    }
}

struct Produced<T> {
    producer: ProducerFn<T>,
}

impl<T> Sequence for Produced<T> {
    type Item = T;
    type Cursor<'a>
        = CursorState<DynIterator<T>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        CursorState::new((self.producer)())
    }
}

struct Generated<T> {
    slot: RefCell<Option<DynIterator<T>>>,
}

impl<T> Sequence for Generated<T> {
    type Item = T;
    type Cursor<'a>
        = CursorState<DynIterator<T>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        let taken = self.slot.borrow_mut().take();
        taken.map_or_else(
            || {
                tracing::debug!("generator source already consumed");
                CursorState::Done
            },
            CursorState::new,
        )
    }
}

struct BagEntries<T> {
    bag: Rc<dyn Properties<Entry = T>>,
    all_properties: bool,
}

impl<T> Sequence for BagEntries<T> {
    type Item = T;
    type Cursor<'a>
        = BoxCursor<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.bag.entries(self.all_properties)
    }
}
