use std::{fmt, str::FromStr};

use crate::core::error::Error;

/// Closed tag identifying a graph representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    List,
    Matrix,
    Successor,
}

impl VariantKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantKind::List => "list",
            VariantKind::Matrix => "matrix",
            VariantKind::Successor => "successor",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(VariantKind::List),
            "matrix" => Ok(VariantKind::Matrix),
            "successor" => Ok(VariantKind::Successor),
            _ => Err(Error::UnknownVariant(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_known_variants() {
        assert_eq!("list".parse::<VariantKind>().unwrap(), VariantKind::List);
        assert_eq!(
            "matrix".parse::<VariantKind>().unwrap(),
            VariantKind::Matrix
        );
        assert_eq!(
            "successor".parse::<VariantKind>().unwrap(),
            VariantKind::Successor
        );
    }

    #[test]
    fn parse_unknown_variant() {
        assert_matches!(
            "ring".parse::<VariantKind>(),
            Err(Error::UnknownVariant(name)) if name == "ring"
        );
    }
}
