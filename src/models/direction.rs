use rust_decimal::Decimal;

/// Whether a transaction takes money out of or puts money into the household.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Expense,
    Income,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "Expense",
            Self::Income => "Income",
        }
    }

    /// Direction encoded by the sign of a raw amount: negative means expense.
    pub fn from_signed(amount: Decimal) -> Self {
        if amount < Decimal::ZERO {
            Self::Expense
        } else {
            Self::Income
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Expense => Self::Income,
            Self::Income => Self::Expense,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
