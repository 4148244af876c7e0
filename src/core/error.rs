use thiserror::Error;

use crate::core::marker::VariantKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("vertex {vertex} does not exist in graph of order {order}")]
    OutOfRange { vertex: usize, order: usize },

    #[error("no edge between {origin} and {dest}")]
    NoSuchEdge { origin: usize, dest: usize },

    #[error("vertex {vertex} has no outgoing edge")]
    NoOutgoingEdge { vertex: usize },

    #[error("{operation} is not supported by the {variant} representation")]
    Unsupported {
        operation: &'static str,
        variant: VariantKind,
    },

    #[error("no graph variant named '{0}'")]
    UnknownVariant(String),

    #[error("cannot traverse an empty graph")]
    EmptyGraph,
}
