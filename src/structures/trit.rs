/*!
Ternary truth values.

A cell of a relation table is either known true, known false, or unknown.
The canonical external encoding is an [i8]: `+1` for true, `-1` for false, `0` for unknown.

The derived order on [Trit] is `False < Unknown < True`.
Under this order elementwise `max` is ternary disjunction --- true dominates unknown dominates false --- and the `min` of a table of values classifies a clause:
a positive minimum means every binding satisfies the clause, a negative minimum means some binding falsifies it, and an unknown minimum means some binding is undetermined while none are falsified.

```rust
# use relsat::structures::trit::Trit;
assert_eq!(Trit::True.max(Trit::Unknown), Trit::True);
assert_eq!(Trit::Unknown.max(Trit::False), Trit::Unknown);
assert_eq!(Trit::True.negate(), Trit::False);
assert_eq!(Trit::Unknown.negate(), Trit::Unknown);
```
*/

/// A ternary truth value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Trit {
    /// Known false, encoded as `-1`.
    False,

    /// No known value, encoded as `0`.
    #[default]
    Unknown,

    /// Known true, encoded as `+1`.
    True,
}

impl Trit {
    /// The ternary negation: true and false swap, unknown is fixed.
    pub fn negate(self) -> Self {
        match self {
            Self::False => Self::True,
            Self::Unknown => Self::Unknown,
            Self::True => Self::False,
        }
    }

    /// Whether the value is true or false.
    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// The value in its canonical integer encoding.
    pub fn as_i8(self) -> i8 {
        match self {
            Self::False => -1,
            Self::Unknown => 0,
            Self::True => 1,
        }
    }

    /// The value encoded by the given integer, if any.
    pub fn from_i8(value: i8) -> Option<Self> {
        match value {
            -1 => Some(Self::False),
            0 => Some(Self::Unknown),
            1 => Some(Self::True),
            _ => None,
        }
    }
}

impl std::fmt::Display for Trit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::False => write!(f, "-"),
            Self::Unknown => write!(f, "?"),
            Self::True => write!(f, "+"),
        }
    }
}
