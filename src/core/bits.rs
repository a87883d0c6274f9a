//! Types for working with bitmasks treated as sets.

use static_assertions::const_assert;
use std::{
  fmt::Debug,
  ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not},
};

/// Operations on a fixed-capacity collection of bits.
///
/// You can see a `Bits` object as a set of bits, or as a set of values
/// (integers) in the range 0..CAPACITY.
pub trait Bits
where
  Self: BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + BitXor<Output = Self>
    + BitXorAssign
    + Copy
    + Eq
    + Not<Output = Self>
    + Sized,
{
  /// The number of bit positions in the collection, each of which will be
  /// present (a `1` bit) or absent (a `0` bit).
  const CAPACITY: i32;

  /// The instance of the Bits object with no `1` bits.  The empty set.
  const ZERO: Self;

  /// The instance of the Bits object with all possible `1` bits (CAPACITY of
  /// them).  The universal set.
  const ONES: Self;

  /// Returns a Bits instance consisting of the single `1` bit that
  /// corresponds to the given value.
  ///
  /// ## Panics
  ///
  /// Panics if the value is not representable in the set, meaning it's
  /// negative or greater than or equal to the set's capacity.
  fn singleton(value: i32) -> Self;

  /// The number of `1` bits in this collection.
  fn len(self) -> i32;

  /// Whether this is the empty set, meaning no `1` bits.
  fn is_empty(self) -> bool {
    self == Self::ZERO
  }

  /// Tells whether the given value's corresponding bit is `1`.
  fn contains(self, value: i32) -> bool {
    Self::is_valid_value(value) && !(self & Self::singleton(value)).is_empty()
  }

  /// The single `1` bit corresponding to the smallest value, or None if there
  /// are no `1` bits.
  fn smallest_bit(self) -> Option<Self>;

  /// The `i`th `1` bit in the set, or None if `i` is not in `0..self.len()`.
  /// This is a slow operation, O(Self::CAPACITY).
  fn bit_at(self, i: i32) -> Option<Self>;

  /// The smallest value in the collection whose bit is `1`, or None if there
  /// are no `1` bits.
  fn smallest_value(self) -> Option<i32>;

  /// The `i`th smallest value in the set whose bit is `1`, or None if `i` is
  /// not in `0..self.len()`.  This is a slow operation, O(Self::CAPACITY).
  fn value_at(self, i: i32) -> Option<i32> {
    let bit = self.bit_at(i)?;
    bit.smallest_value()
  }

  /// Tells whether the given value is representable in the set, meaning it's
  /// in the range 0..Self::CAPACITY.
  fn is_valid_value(n: i32) -> bool {
    n >= 0 && n < Self::CAPACITY
  }

  /// Ensures the given number is representable in the set.
  ///
  /// ## Panics
  ///
  /// Panics if the value is not representable in the set, meaning it's
  /// negative or greater than or equal to the set's capacity.
  fn check(n: i32) {
    assert!(
      Self::is_valid_value(n),
      "{} is out of bounds, must be in 0..{}",
      n,
      Self::CAPACITY
    );
  }

  /// Adds a value to the set.  Tells whether the (bit corresponding to the)
  /// value was previously absent from the set.
  ///
  /// ## Panics
  ///
  /// Panics if the value is not representable in the set, meaning it's
  /// negative or greater than or equal to the set's capacity.
  fn insert(&mut self, value: i32) -> bool;

  /// Removes a value from the set.  Tells whether the (bit corresponding to
  /// the) value was present in the set.
  ///
  /// ## Panics
  ///
  /// Panics if the value is not representable in the set, meaning it's
  /// negative or greater than or equal to the set's capacity.
  fn remove(&mut self, value: i32) -> bool;
}

pub trait BitsIterable {
  /// The corresponding Bits type.
  type Item: Bits;

  /// The type that will iterate this object's bits.
  type BitIterator: Iterator<Item = Self::Item> + Clone + Copy + Debug + Eq + PartialEq;

  /// The type that will iterate this object's values.
  type ValueIterator: Iterator<Item = i32> + Clone + Copy + Debug + Eq + PartialEq;

  /// Iterates through the `1` bits in this collection, by returning a series
  /// of instances of this type.  Each object returned has `o.len() == 1`.
  fn bit_iter(self) -> Self::BitIterator;

  /// Iterates through the values in this set, rendered as `i32`.
  fn value_iter(self) -> Self::ValueIterator;
}

/// Iterates through the bits of a `Bits` instance, by returning a separate
/// single-bit `Bits` instance for each `1` bit.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BitIter<T: Bits>(T);

impl<T: Bits> Iterator for BitIter<T> {
  type Item = T;
  fn next(&mut self) -> Option<T> {
    match self.0.smallest_bit() {
      None => None,
      Some(bit) => {
        self.0 &= !bit;
        Some(bit)
      }
    }
  }
}

/// Iterates through the values (integers) of a `Bits` instance.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ValueIter<T: Bits>(BitIter<T>);

impl<T: Bits> Iterator for ValueIter<T> {
  type Item = i32;
  fn next(&mut self) -> Option<i32> {
    match self.0.next() {
      None => None,
      Some(bit) => bit.smallest_value(),
    }
  }
}

/// Implements the Bits trait for a built-in integer type.
macro_rules! impl_int_bits {
  ($int:ty) => {
    const_assert!(<$int>::MIN == 0); // True only for unsigned int types
    impl Bits for $int {
      const CAPACITY: i32 = <$int>::BITS as i32;
      const ZERO: $int = 0;
      const ONES: $int = <$int>::MAX; // Note, only works for unsigned int types
      fn singleton(value: i32) -> $int {
        Self::check(value);
        1 << value
      }
      fn len(self) -> i32 {
        self.count_ones() as i32
      }
      fn smallest_bit(self) -> Option<$int> {
        if self == 0 {
          None
        } else {
          Some(self & !(self - 1))
        }
      }
      fn smallest_value(self) -> Option<i32> {
        self.smallest_bit().map(|bit| bit.trailing_zeros() as i32)
      }
      fn bit_at(self, mut i: i32) -> Option<Self> {
        if i >= self.count_ones() as _ {
          return None;
        }
        // Binary search
        let mut lo = 0;
        let mut hi = Self::CAPACITY;
        loop {
          let half_width = (hi - lo) / 2;
          let mask = ((1 << half_width) - 1) << lo; // `half_width` 1 bits
          let count = (self & mask).count_ones() as i32;
          if i >= count {
            i -= count;
            lo += half_width;
          } else {
            hi -= half_width;
          }
          if half_width == 1 {
            debug_assert_eq!(i, 0);
            return Some(1 << lo);
          }
        }
      }
      fn insert(&mut self, value: i32) -> bool {
        let bit = Self::singleton(value);
        if (bit & *self) == 0 {
          *self |= bit;
          true
        } else {
          false
        }
      }
      fn remove(&mut self, value: i32) -> bool {
        let bit = Self::singleton(value);
        if (bit & *self) == 0 {
          false
        } else {
          *self &= !bit;
          true
        }
      }
    }

    impl BitsIterable for $int {
      type Item = $int;
      type BitIterator = BitIter<$int>;
      type ValueIterator = ValueIter<$int>;

      fn bit_iter(self) -> BitIter<$int> {
        BitIter(self)
      }
      fn value_iter(self) -> ValueIter<$int> {
        ValueIter(self.bit_iter())
      }
    }

    impl BitsIterable for &$int {
      type Item = $int;
      type BitIterator = BitIter<$int>;
      type ValueIterator = ValueIter<$int>;

      fn bit_iter(self) -> BitIter<$int> {
        BitIter(*self)
      }
      fn value_iter(self) -> ValueIter<$int> {
        ValueIter(self.bit_iter())
      }
    }
  };
}

impl_int_bits!(u8);
impl_int_bits!(u16);
impl_int_bits!(u32);
impl_int_bits!(u64);

/// Defines Bits-implementing newtypes for Bits-implementing int types.
/// The purpose is to have a smaller capacity than the int type.
macro_rules! define_wrapped_bits_types {
    (
        $(
        $(#[$outer:meta])*
        $type_name:ident : $int:ty[$capacity:expr];
        )*
    ) => {
        $(
        #[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
        $(#[$outer])*
        pub struct $type_name($int);

        // The enclosed type must be strictly bigger than the new type.
        const_assert!(<$int>::CAPACITY > $capacity);

        // These newtypes let you manipulate the wrapped int.
        impl $type_name {
            /// Reads the wrapped int bitmask.
            pub const fn backing_int(self) -> $int {
                self.0
            }

            /// Makes a new instance from the underlying int type.
            pub const fn from_backing_int(int: $int) -> Self {
                Self(int & Self::ONES.0)
            }
        }

        impl Bits for $type_name {
            const CAPACITY: i32 = $capacity;
            const ZERO: Self = Self(<$int>::ZERO);
            const ONES: Self = Self((1 << $capacity) - 1);
            fn singleton(value: i32) -> Self {
                Self::check(value);
                Self(<$int>::singleton(value))
            }
            fn len(self) -> i32 {
                self.0.len()
            }
            fn smallest_bit(self) -> Option<Self> {
                self.0.smallest_bit().map(Self)
            }
            fn smallest_value(self) -> Option<i32> {
                self.0.smallest_value()
            }
            fn bit_at(self, i: i32) -> Option<Self> {
                self.0.bit_at(i).map(Self)
            }
            fn insert(&mut self, value: i32) -> bool {
                Self::check(value);
                self.0.insert(value)
            }
            fn remove(&mut self, value: i32) -> bool {
                Self::check(value);
                self.0.remove(value)
            }
        }

        impl BitsIterable for &$type_name {
            type Item = $type_name;
            type BitIterator = BitIter<$type_name>;
            type ValueIterator = ValueIter<$type_name>;
            fn bit_iter(self) -> Self::BitIterator {
                BitIter(*self)
            }
            fn value_iter(self) -> Self::ValueIterator {
                ValueIter(self.bit_iter())
            }
        }

        impl BitAnd for $type_name {
            type Output = Self;
            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }
        impl BitAndAssign for $type_name {
            fn bitand_assign(&mut self, rhs: Self) {
                self.0 &= rhs.0
            }
        }
        impl BitOr for $type_name {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }
        impl BitOrAssign for $type_name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0
            }
        }
        impl BitXor for $type_name {
            type Output = Self;
            fn bitxor(self, rhs: Self) -> Self {
                Self(self.0 ^ rhs.0)
            }
        }
        impl BitXorAssign for $type_name {
            fn bitxor_assign(&mut self, rhs: Self) {
                self.0 ^= rhs.0
            }
        }
        impl Not for $type_name {
            type Output = Self;
            fn not(self) -> Self {
                Self(!self.0 & Self::ONES.0)
            }
        }
        impl Debug for $type_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
              write!(f, "{}({:#o})", stringify!($type_name), self.0)  // octal
            }
        }
        )*
    };
}

define_wrapped_bits_types! {
    /// A 7-bit set, one bit per numeral that can occupy a cell of the hex
    /// board.  The candidate domain of a cell is a `Bits7`.
    Bits7: u8[7];

    /// A 49-bit set, one bit per cell of the hex board.
    Bits49: u64[49];
}
