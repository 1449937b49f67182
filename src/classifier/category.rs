use serde::Serialize;

/// Build outcome bucket, bound to a literal marker substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Pass,
    Fail,
    Warning,
    UndefinedReference,
}

impl Category {
    /// Fixed evaluation order. Threshold checks walk categories in this order.
    pub const ALL: [Self; 4] = [
        Self::Pass,
        Self::Fail,
        Self::Warning,
        Self::UndefinedReference,
    ];

    /// Marker substring; also the name used in limit messages.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
            Self::Warning => "warning",
            Self::UndefinedReference => "undefined reference",
        }
    }

    /// Short label used in the summary report.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
            Self::Warning => "Warn",
            Self::UndefinedReference => "UnDef",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.marker())
    }
}

/// Number of deduplicated lines containing each category's marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub pass: usize,
    pub fail: usize,
    pub warning: usize,
    pub undefined_reference: usize,
}

impl Counts {
    #[must_use]
    pub const fn get(&self, category: Category) -> usize {
        match category {
            Category::Pass => self.pass,
            Category::Fail => self.fail,
            Category::Warning => self.warning,
            Category::UndefinedReference => self.undefined_reference,
        }
    }

    pub const fn increment(&mut self, category: Category) {
        match category {
            Category::Pass => self.pass += 1,
            Category::Fail => self.fail += 1,
            Category::Warning => self.warning += 1,
            Category::UndefinedReference => self.undefined_reference += 1,
        }
    }
}
