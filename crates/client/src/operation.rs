//! Named GraphQL operations.

/// Kind of GraphQL operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

/// A compiled GraphQL document together with the root field its result is
/// read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// `operationName` sent with the request.
    pub name: &'static str,
    pub kind: OperationKind,
    /// Top-level field of `data` holding the result.
    pub root: &'static str,
    pub document: &'static str,
}

impl Operation {
    #[must_use]
    pub const fn query(name: &'static str, root: &'static str, document: &'static str) -> Self {
        Self {
            name,
            kind: OperationKind::Query,
            root,
            document,
        }
    }

    #[must_use]
    pub const fn mutation(name: &'static str, root: &'static str, document: &'static str) -> Self {
        Self {
            name,
            kind: OperationKind::Mutation,
            root,
            document,
        }
    }

    #[must_use]
    pub const fn subscription(
        name: &'static str,
        root: &'static str,
        document: &'static str,
    ) -> Self {
        Self {
            name,
            kind: OperationKind::Subscription,
            root,
            document,
        }
    }
}
