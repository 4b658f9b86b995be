//! Named vector components

use crate::ComponentIndexError;

/// One of the four slots of a [`Vector4`](crate::Vector4)
///
/// Positional order is x, y, z, w (0..4).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    X,
    Y,
    Z,
    W,
}

impl Component {
    /// All components in positional order
    pub const ALL: [Component; 4] = [Component::X, Component::Y, Component::Z, Component::W];

    /// Position of this component (0 = x ... 3 = w)
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Component::X => 0,
            Component::Y => 1,
            Component::Z => 2,
            Component::W => 3,
        }
    }
}

impl TryFrom<usize> for Component {
    type Error = ComponentIndexError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Component::X),
            1 => Ok(Component::Y),
            2 => Ok(Component::Z),
            3 => Ok(Component::W),
            _ => Err(ComponentIndexError::new(index)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_in_range() {
        for (i, expected) in Component::ALL.iter().enumerate() {
            assert_eq!(Component::try_from(i), Ok(*expected));
            assert_eq!(expected.index(), i);
        }
    }

    #[test]
    fn test_try_from_out_of_range() {
        assert_eq!(Component::try_from(4), Err(ComponentIndexError::new(4)));
        assert_eq!(
            Component::try_from(usize::MAX),
            Err(ComponentIndexError::new(usize::MAX))
        );
    }
}
