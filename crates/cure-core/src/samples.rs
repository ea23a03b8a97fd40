//! Scalar-or-series values.
//!
//! Ages and temperatures may be given either as a single value or as an
//! ordered series (e.g. an age axis swept by a caller). Derived quantities keep
//! the same shape: a scalar input yields a scalar output, a series yields an
//! aligned series. A scalar combined with a series broadcasts across it.

use crate::{CoreError, Real};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Samples {
    Scalar(Real),
    Series(Vec<Real>),
}

impl Samples {
    /// Length of the series, or `None` for a scalar.
    pub fn series_len(&self) -> Option<usize> {
        match self {
            Samples::Scalar(_) => None,
            Samples::Series(values) => Some(values.len()),
        }
    }

    pub fn as_scalar(&self) -> Option<Real> {
        match self {
            Samples::Scalar(v) => Some(*v),
            Samples::Series(_) => None,
        }
    }

    /// All values as a slice (a scalar is a one-element slice).
    pub fn values(&self) -> &[Real] {
        match self {
            Samples::Scalar(v) => std::slice::from_ref(v),
            Samples::Series(values) => values,
        }
    }

    pub fn map<F>(&self, mut f: F) -> Samples
    where
        F: FnMut(Real) -> Real,
    {
        match self {
            Samples::Scalar(v) => Samples::Scalar(f(*v)),
            Samples::Series(values) => Samples::Series(values.iter().map(|v| f(*v)).collect()),
        }
    }

    /// Element-wise fallible map. Stops at the first failing element.
    pub fn try_map<E, F>(&self, mut f: F) -> Result<Samples, E>
    where
        F: FnMut(Real) -> Result<Real, E>,
    {
        match self {
            Samples::Scalar(v) => Ok(Samples::Scalar(f(*v)?)),
            Samples::Series(values) => values
                .iter()
                .map(|v| f(*v))
                .collect::<Result<Vec<_>, E>>()
                .map(Samples::Series),
        }
    }

    /// Pairs of aligned values, broadcasting a scalar across a series.
    pub fn pairs(&self, other: &Samples) -> Result<Vec<(Real, Real)>, CoreError> {
        let n = match (self.series_len(), other.series_len()) {
            (Some(a), Some(b)) if a != b => {
                return Err(CoreError::SeriesLengthMismatch { left: a, right: b });
            }
            (Some(n), _) | (None, Some(n)) => n,
            (None, None) => 1,
        };
        let at = |s: &Samples, i: usize| match s {
            Samples::Scalar(v) => *v,
            Samples::Series(values) => values[i],
        };
        Ok((0..n).map(|i| (at(self, i), at(other, i))).collect())
    }

    /// Element-wise fallible combination of two sample sets.
    ///
    /// Two series must have the same length; a scalar broadcasts.
    pub fn try_zip_with<E, F>(&self, other: &Samples, mut f: F) -> Result<Samples, E>
    where
        E: From<CoreError>,
        F: FnMut(Real, Real) -> Result<Real, E>,
    {
        match (self, other) {
            (Samples::Scalar(a), Samples::Scalar(b)) => Ok(Samples::Scalar(f(*a, *b)?)),
            (Samples::Scalar(a), Samples::Series(bs)) => bs
                .iter()
                .map(|b| f(*a, *b))
                .collect::<Result<Vec<_>, E>>()
                .map(Samples::Series),
            (Samples::Series(a_s), Samples::Scalar(b)) => a_s
                .iter()
                .map(|a| f(*a, *b))
                .collect::<Result<Vec<_>, E>>()
                .map(Samples::Series),
            (Samples::Series(a_s), Samples::Series(bs)) => {
                if a_s.len() != bs.len() {
                    return Err(CoreError::SeriesLengthMismatch {
                        left: a_s.len(),
                        right: bs.len(),
                    }
                    .into());
                }
                a_s.iter()
                    .zip(bs)
                    .map(|(a, b)| f(*a, *b))
                    .collect::<Result<Vec<_>, E>>()
                    .map(Samples::Series)
            }
        }
    }
}

impl From<Real> for Samples {
    fn from(v: Real) -> Self {
        Samples::Scalar(v)
    }
}

impl From<Vec<Real>> for Samples {
    fn from(values: Vec<Real>) -> Self {
        Samples::Series(values)
    }
}

impl From<&[Real]> for Samples {
    fn from(values: &[Real]) -> Self {
        Samples::Series(values.to_vec())
    }
}
