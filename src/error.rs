use std::{error, fmt};

/// Error enumerates over all possible errors that this package
/// shall return.
#[derive(Debug, PartialEq)]
pub enum Error<K>
where
    K: Clone + Ord,
{
    /// Returned by insert APIs when key is already present, the tree is
    /// left untouched.
    DuplicateKey(K),
    /// Fatal case, a red node (parent, child) with a red child.
    ConsecutiveReds(K, K),
    /// Fatal case, black-height differs between two subtrees. The String
    /// component of this variant can be used for debugging.
    UnbalancedBlacks(String),
    /// Fatal case, tree entries are not in sort-order.
    SortError(K, K),
    /// Fatal case, root of a non-empty tree is red.
    RedRoot,
    /// Fatal case, parent and child links disagree.
    BrokenLink(String),
}

impl<K> fmt::Display for Error<K>
where
    K: Clone + Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DuplicateKey(key) => write!(f, "duplicate key {:?}", key),
            Error::ConsecutiveReds(parent, child) => {
                write!(f, "red node {:?} has red child {:?}", parent, child)
            }
            Error::UnbalancedBlacks(msg) => write!(f, "unbalanced blacks, {}", msg),
            Error::SortError(a, b) => write!(f, "keys out of order {:?} {:?}", a, b),
            Error::RedRoot => write!(f, "root is red"),
            Error::BrokenLink(msg) => write!(f, "broken link, {}", msg),
        }
    }
}

impl<K> error::Error for Error<K> where K: Clone + Ord + fmt::Debug {}
