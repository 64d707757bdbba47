#![allow(clippy::op_ref)]

// Implementation of arithmetic operators. Lengths are never trimmed, the
// result is as long as the longest operand (or the sum of degrees for products).

use itertools::{EitherOrBoth, Itertools};
use num::{Complex, Zero};
use std::ops::{Add, Mul, Neg, Sub};

use crate::{Poly, RealScalar};

impl<T: RealScalar> Add<Self> for Poly<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(
            self.0
                .into_iter()
                .zip_longest(rhs.0)
                .map(|p| match p {
                    EitherOrBoth::Both(l, r) => l + r,
                    EitherOrBoth::Left(l) => l,
                    EitherOrBoth::Right(r) => r,
                })
                .collect(),
        )
    }
}

impl<T: RealScalar> Add<&Self> for Poly<T> {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self::Output {
        self + rhs.clone()
    }
}

impl<T: RealScalar> Neg for Poly<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.into_iter().map(|z| -z).collect())
    }
}

impl<T: RealScalar> Sub<Self> for Poly<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<T: RealScalar> Sub<&Self> for Poly<T> {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self::Output {
        self - rhs.clone()
    }
}

impl<T: RealScalar> Mul<Self> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self * &rhs
    }
}

impl<T: RealScalar> Mul<&Self> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: &Self) -> Self::Output {
        // direct convolution, the root finder only multiplies small factors
        let mut ret = vec![Complex::<T>::zero(); self.len_raw() + rhs.len_raw() - 1];
        for (i, a) in self.iter().enumerate() {
            for (j, b) in rhs.iter().enumerate() {
                ret[i + j] += a * b;
            }
        }
        Self(ret)
    }
}

impl<T: RealScalar> Mul<Complex<T>> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: Complex<T>) -> Self::Output {
        self.scaled(rhs)
    }
}
