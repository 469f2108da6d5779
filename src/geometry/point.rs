use std::{iter::Sum, ops::*};

/// Integer point in 3D space, also used as a displacement vector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point3(pub i64, pub i64, pub i64);
impl Point3 {
    pub const ORIGIN: Self = Self(0, 0, 0);

    /// Return the square of the length of the vector.
    pub fn sq_length(self) -> i64 {
        self.dot(self)
    }
    /// Find the dot product of this vector with another.
    pub fn dot(self, other: Self) -> i64 {
        self.0 * other.0 + self.1 * other.1 + self.2 * other.2
    }
    /// Find the cross product of this vector with another.
    pub fn cross(self, other: Self) -> Self {
        Self(
            self.1 * other.2 - self.2 * other.1,
            self.2 * other.0 - self.0 * other.2,
            self.0 * other.1 - self.1 * other.0,
        )
    }
}
impl Add for Point3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }
}
impl Sub for Point3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0, self.1 - rhs.1, self.2 - rhs.2)
    }
}
impl Neg for Point3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0, -self.1, -self.2)
    }
}
impl Mul<i64> for Point3 {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self(self.0 * rhs, self.1 * rhs, self.2 * rhs)
    }
}
impl AddAssign for Point3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl SubAssign for Point3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl Sum for Point3 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ORIGIN, Add::add)
    }
}
