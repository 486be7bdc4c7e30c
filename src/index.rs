use num_traits::{NumCast, PrimInt};
use std::hash::Hash;
use std::marker::PhantomData;

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
/// A node index that can be `None`.
/// The `None` variant is stored as `IndexType::max_value()` to keep the type as small as a plain index.
pub struct OptionalNodeIndex<IndexType: Sized>(IndexType);
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
/// An edge index that can be `None`.
/// The `None` variant is stored as `IndexType::max_value()` to keep the type as small as a plain index.
pub struct OptionalEdgeIndex<IndexType: Sized>(IndexType);
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
/// A valid node index.
pub struct NodeIndex<IndexType: Sized>(IndexType);
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
/// A valid edge index.
pub struct EdgeIndex<IndexType: Sized>(IndexType);

/// A graph index that can be `None`.
/// The `None` variant is encoded as the maximum value of the underlying integer type.
pub trait OptionalGraphIndex<MirrorGraphIndex: GraphIndex<Self>>:
    Default
    + std::fmt::Debug
    + Eq
    + Ord
    + Hash
    + Copy
    + Sized
    + From<usize>
    + From<Option<usize>>
    + From<MirrorGraphIndex>
    + Into<Option<MirrorGraphIndex>>
{
    /// Get this index as `usize`, but return `None` if this index is marked as invalid.
    fn as_usize(self) -> Option<usize>;

    /// Returns `true` if the index is `None`.
    fn is_none(self) -> bool {
        self.as_usize().is_none()
    }

    /// Returns `true` if the index is `Some`.
    fn is_some(self) -> bool {
        self.as_usize().is_some()
    }

    /// Returns a new `OptionalGraphIndex` that is marked as invalid.
    fn new_none() -> Self {
        <Self as From<Option<usize>>>::from(None)
    }

    /// Returns the graph index stored in this optional graph index.
    /// Panics if this optional graph index is `None`.
    fn unwrap(self) -> MirrorGraphIndex {
        self.as_usize().unwrap().into()
    }
}

/// A valid graph index.
///
/// The index intentionally does not implement `Into<usize>`, to make it hard to
/// accidentally convert between different index types.
pub trait GraphIndex<MirrorOptionalGraphIndex: OptionalGraphIndex<Self>>:
    std::fmt::Debug
    + Eq
    + Ord
    + Hash
    + Copy
    + Sized
    + From<usize>
    + Into<MirrorOptionalGraphIndex>
    + std::ops::Add<usize, Output = Self>
{
    /// Get this index as `usize`.
    fn as_usize(self) -> usize;
}

macro_rules! impl_graph_index {
    ($GraphIndexType:ident, $OptionalGraphIndexType:ident) => {
        impl<IndexType: PrimInt + Hash> OptionalGraphIndex<$GraphIndexType<IndexType>>
            for $OptionalGraphIndexType<IndexType>
        {
            fn as_usize(self) -> Option<usize> {
                if self.0 != IndexType::max_value() {
                    Some(<usize as NumCast>::from(self.0).unwrap())
                } else {
                    None
                }
            }
        }

        impl<IndexType: PrimInt + Hash> GraphIndex<$OptionalGraphIndexType<IndexType>>
            for $GraphIndexType<IndexType>
        {
            fn as_usize(self) -> usize {
                <usize as NumCast>::from(self.0).unwrap()
            }
        }

        impl<IndexType: PrimInt> Default for $OptionalGraphIndexType<IndexType> {
            fn default() -> Self {
                Self(IndexType::max_value())
            }
        }

        impl<IndexType: PrimInt + Hash> std::fmt::Debug for $OptionalGraphIndexType<IndexType> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                if let Some(value) = self.as_usize() {
                    write!(f, "{}", value)
                } else {
                    write!(f, "None")
                }
            }
        }

        impl<IndexType: PrimInt + Hash> std::fmt::Debug for $GraphIndexType<IndexType> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_usize())
            }
        }

        impl<IndexType: PrimInt> From<Option<usize>> for $OptionalGraphIndexType<IndexType> {
            fn from(source: Option<usize>) -> Self {
                if let Some(source) = source {
                    let source = <IndexType as NumCast>::from(source).unwrap();
                    debug_assert!(source != IndexType::max_value());
                    Self(source)
                } else {
                    Self(IndexType::max_value())
                }
            }
        }

        impl<IndexType: PrimInt> From<usize> for $OptionalGraphIndexType<IndexType> {
            fn from(source: usize) -> Self {
                let source = <IndexType as NumCast>::from(source).unwrap();
                debug_assert!(source != IndexType::max_value());
                Self(source)
            }
        }

        impl<IndexType: PrimInt> From<usize> for $GraphIndexType<IndexType> {
            fn from(source: usize) -> Self {
                let source = <IndexType as NumCast>::from(source).unwrap();
                debug_assert!(source != IndexType::max_value());
                Self(source)
            }
        }

        impl<IndexType: PrimInt + Hash> From<$GraphIndexType<IndexType>>
            for $OptionalGraphIndexType<IndexType>
        {
            fn from(source: $GraphIndexType<IndexType>) -> Self {
                Self::from(source.as_usize())
            }
        }

        impl<IndexType: PrimInt + Hash> From<$OptionalGraphIndexType<IndexType>>
            for Option<$GraphIndexType<IndexType>>
        {
            fn from(source: $OptionalGraphIndexType<IndexType>) -> Self {
                source.as_usize().map(|source| source.into())
            }
        }

        impl<IndexType: PrimInt + Hash> std::ops::Add<usize> for $GraphIndexType<IndexType> {
            type Output = Self;

            fn add(self, rhs: usize) -> Self::Output {
                Self::from(self.as_usize() + rhs)
            }
        }
    };
}

impl_graph_index!(NodeIndex, OptionalNodeIndex);
impl_graph_index!(EdgeIndex, OptionalEdgeIndex);

/// An iterator over a consecutive sequence of graph indices.
pub struct GraphIndices<IndexType, OptionalIndexType> {
    start: IndexType,
    end: IndexType,
    optional_index_type: PhantomData<OptionalIndexType>,
}

impl<
        RawType: num_traits::ToPrimitive,
        OptionalIndexType: OptionalGraphIndex<IndexType>,
        IndexType: GraphIndex<OptionalIndexType>,
    > From<(RawType, RawType)> for GraphIndices<IndexType, OptionalIndexType>
{
    fn from(raw: (RawType, RawType)) -> Self {
        Self {
            start: IndexType::from(raw.0.to_usize().unwrap()),
            end: IndexType::from(raw.1.to_usize().unwrap()),
            optional_index_type: Default::default(),
        }
    }
}

impl<
        OptionalIndexType: OptionalGraphIndex<IndexType>,
        IndexType: GraphIndex<OptionalIndexType>,
    > Iterator for GraphIndices<IndexType, OptionalIndexType>
{
    type Item = IndexType;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            let result = Some(self.start);
            self.start = self.start + 1;
            result
        } else {
            None
        }
    }
}
