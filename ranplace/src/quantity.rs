// RANPlace: Placing Disaggregated RAN Service Chains
// Copyright (C) 2021  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! Cluster-native CPU and memory quantities
//!
//! Capacity figures arrive in the cluster-native string format: `"500m"` is half a CPU,
//! `"512Mi"` is 512 binary megabytes. All arithmetic on these figures must be exact, so a
//! [`Quantity`] is a signed 64-bit count of *milliunits*, and parsing scales the integer mantissa
//! by the suffix with checked multiplication. Floats never enter the picture.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

/// One milliunit, the resolution of every [`Quantity`].
const MILLI: i64 = 1_000;

/// A CPU or memory quantity in the cluster-native format, stored as milliunits.
///
/// `"500m"` parses to 500, `"4"` to 4000, `"512Mi"` to `512 * 1024 * 1024 * 1000`. The mantissa
/// must be an unsigned integer; fractional figures are rejected (write `500m`, not `0.5`),
/// because rounding would silently break the resource accounting. A quantity may become negative
/// through subtraction (a failed reservation leaves the subtracted state behind on purpose),
/// and [`Quantity::is_negative`] exposes that check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Quantity(i64);

impl Quantity {
    /// Build a quantity from a raw milliunit count.
    pub const fn from_milli(milli: i64) -> Self {
        Self(milli)
    }

    /// The raw milliunit count.
    pub const fn milli(self) -> i64 {
        self.0
    }

    /// Returns true if the quantity has been subtracted below zero.
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl Sub for Quantity {
    type Output = Quantity;

    fn sub(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 - rhs.0)
    }
}

impl SubAssign for Quantity {
    fn sub_assign(&mut self, rhs: Quantity) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % MILLI == 0 {
            write!(f, "{}", self.0 / MILLI)
        } else {
            write!(f, "{}m", self.0)
        }
    }
}

impl FromStr for Quantity {
    type Err = ParseQuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseQuantityError::Empty);
        }

        let digits_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or_else(|| s.len());
        let (digits, suffix) = s.split_at(digits_end);

        if suffix.starts_with('.') {
            return Err(ParseQuantityError::FractionalMantissa(s.to_string()));
        }
        if digits.is_empty() {
            return Err(ParseQuantityError::InvalidMantissa(s.to_string()));
        }

        let mantissa: i64 =
            digits.parse().map_err(|_| ParseQuantityError::Overflow(s.to_string()))?;

        let multiplier: i64 = match suffix {
            "m" => 1,
            "" => MILLI,
            "k" => MILLI * 1_000,
            "M" => MILLI * 1_000_000,
            "G" => MILLI * 1_000_000_000,
            "T" => MILLI * 1_000_000_000_000,
            "P" => MILLI * 1_000_000_000_000_000,
            "Ki" => MILLI << 10,
            "Mi" => MILLI << 20,
            "Gi" => MILLI << 30,
            "Ti" => MILLI << 40,
            "Pi" => MILLI << 50,
            _ => return Err(ParseQuantityError::UnknownSuffix(suffix.to_string())),
        };

        mantissa
            .checked_mul(multiplier)
            .map(Quantity)
            .ok_or_else(|| ParseQuantityError::Overflow(s.to_string()))
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct QuantityVisitor;

        impl<'de> Visitor<'de> for QuantityVisitor {
            type Value = Quantity;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a quantity string like \"500m\" or \"512Mi\", or an integer")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Quantity, E> {
                value.parse().map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Quantity, E> {
                value
                    .checked_mul(MILLI)
                    .map(Quantity)
                    .ok_or_else(|| E::custom(ParseQuantityError::Overflow(value.to_string())))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Quantity, E> {
                i64::try_from(value)
                    .ok()
                    .and_then(|v| v.checked_mul(MILLI))
                    .map(Quantity)
                    .ok_or_else(|| E::custom(ParseQuantityError::Overflow(value.to_string())))
            }
        }

        deserializer.deserialize_any(QuantityVisitor)
    }
}

/// Errors raised while parsing a [`Quantity`]
#[derive(Debug, Error, PartialEq)]
pub enum ParseQuantityError {
    /// The input was empty
    #[error("quantity string is empty")]
    Empty,
    /// The mantissa is not an unsigned integer
    #[error("invalid quantity mantissa: {0}")]
    InvalidMantissa(String),
    /// The mantissa contains a decimal fraction. Use the scaled suffix instead (500m, not 0.5).
    #[error("fractional quantities are not supported, use a scaled suffix: {0}")]
    FractionalMantissa(String),
    /// The scaling suffix is not one of m, k, M, G, T, P, Ki, Mi, Gi, Ti, Pi
    #[error("unknown quantity suffix: {0}")]
    UnknownSuffix(String),
    /// The scaled value does not fit into 64 bits of milliunits
    #[error("quantity overflows the milliunit range: {0}")]
    Overflow(String),
}
