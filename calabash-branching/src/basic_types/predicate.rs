use num::traits::PrimInt;

use crate::basic_types::AVar;

/// Representation of a domain operation over a single variable, in the form of an atomic
/// constraint over an [`AVar`] with bound type `B` (the bound type of the abstract domain's
/// per-variable lattice values).
#[derive(Clone, PartialEq, Eq, Copy, Hash)]
pub enum Predicate<B> {
    LowerBound { var: AVar, bound: B },
    UpperBound { var: AVar, bound: B },
    NotEqual { var: AVar, value: B },
    Equal { var: AVar, value: B },
}

impl<B> Predicate<B> {
    pub fn lower_bound(var: AVar, bound: B) -> Self {
        Predicate::LowerBound { var, bound }
    }

    pub fn upper_bound(var: AVar, bound: B) -> Self {
        Predicate::UpperBound { var, bound }
    }

    pub fn not_equal(var: AVar, value: B) -> Self {
        Predicate::NotEqual { var, value }
    }

    pub fn equal(var: AVar, value: B) -> Self {
        Predicate::Equal { var, value }
    }

    /// Returns the [`AVar`] constrained by this [`Predicate`].
    pub fn get_variable(&self) -> AVar {
        match *self {
            Predicate::LowerBound { var, bound: _ } => var,
            Predicate::UpperBound { var, bound: _ } => var,
            Predicate::NotEqual { var, value: _ } => var,
            Predicate::Equal { var, value: _ } => var,
        }
    }
}

impl<B: PrimInt> std::ops::Not for Predicate<B> {
    type Output = Predicate<B>;

    fn not(self) -> Self::Output {
        match self {
            Predicate::LowerBound { var, bound } => Predicate::UpperBound {
                var,
                bound: bound - B::one(),
            },
            Predicate::UpperBound { var, bound } => Predicate::LowerBound {
                var,
                bound: bound + B::one(),
            },
            Predicate::NotEqual { var, value } => Predicate::Equal { var, value },
            Predicate::Equal { var, value } => Predicate::NotEqual { var, value },
        }
    }
}

impl<B: std::fmt::Display> std::fmt::Display for Predicate<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::LowerBound { var, bound } => write!(f, "[{} >= {}]", var, bound),
            Predicate::UpperBound { var, bound } => write!(f, "[{} <= {}]", var, bound),
            Predicate::NotEqual { var, value } => write!(f, "[{} != {}]", var, value),
            Predicate::Equal { var, value } => write!(f, "[{} == {}]", var, value),
        }
    }
}

impl<B: std::fmt::Display> std::fmt::Debug for Predicate<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negating_a_predicate_flips_the_bound() {
        let var = AVar::new(0);

        assert_eq!(
            !Predicate::lower_bound(var, 5),
            Predicate::upper_bound(var, 4)
        );
        assert_eq!(
            !Predicate::upper_bound(var, 5),
            Predicate::lower_bound(var, 6)
        );
        assert_eq!(!Predicate::equal(var, 5), Predicate::not_equal(var, 5));
        assert_eq!(!Predicate::not_equal(var, 5), Predicate::equal(var, 5));
    }

    #[test]
    fn predicates_display_as_atomic_constraints() {
        let var = AVar::new(3);

        assert_eq!(Predicate::lower_bound(var, 5).to_string(), "[x3 >= 5]");
        assert_eq!(Predicate::upper_bound(var, -1).to_string(), "[x3 <= -1]");
        assert_eq!(Predicate::equal(var, 0).to_string(), "[x3 == 0]");
        assert_eq!(Predicate::not_equal(var, 2).to_string(), "[x3 != 2]");
    }
}
