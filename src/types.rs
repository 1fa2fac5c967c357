use std::fmt;

/// The four operations the tool knows about.
///
/// Variants are declared in execution order; `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OperationKind {
    Build,
    Test,
    Commit,
    Tag,
}

impl OperationKind {
    /// Canonical execution order, independent of command-line order.
    pub const ORDER: [OperationKind; 4] = [
        OperationKind::Build,
        OperationKind::Test,
        OperationKind::Commit,
        OperationKind::Tag,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Build => "build",
            OperationKind::Test => "test",
            OperationKind::Commit => "commit",
            OperationKind::Tag => "tag",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_constant_matches_ord() {
        let mut sorted = OperationKind::ORDER;
        sorted.sort();
        assert_eq!(sorted, OperationKind::ORDER);
    }

    #[test]
    fn displays_lowercase_names() {
        assert_eq!(OperationKind::Commit.to_string(), "commit");
    }
}
