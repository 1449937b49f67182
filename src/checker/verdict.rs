use crate::classifier::Category;

/// Why a build log failed its thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Fewer `Pass` lines than the required minimum.
    PassFloor { required: usize, found: usize },
    /// An upper-bounded category went over its limit.
    AboveLimit {
        category: Category,
        limit: usize,
        found: usize,
    },
}

impl Rejection {
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::PassFloor { .. } => Category::Pass,
            Self::AboveLimit { category, .. } => *category,
        }
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        match self {
            Self::PassFloor { required, .. } => *required,
            Self::AboveLimit { limit, .. } => *limit,
        }
    }

    #[must_use]
    pub const fn found(&self) -> usize {
        match self {
            Self::PassFloor { found, .. } | Self::AboveLimit { found, .. } => *found,
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PassFloor { .. } => {
                write!(f, "{} parts have gone below known limits", Category::Pass)
            }
            Self::AboveLimit { category, .. } => {
                write!(f, "{category} parts have gone above known limits")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    #[must_use]
    pub const fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Accepted => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }
}
