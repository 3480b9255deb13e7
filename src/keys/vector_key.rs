use std::fmt::{self, Debug};

use num_traits::{Bounded, PrimInt, ToBytes};

use crate::utils::key_str_rep;

// Owns variable sized key data. Integer conversions produce big-endian bytes with the sign bit
// flipped, so that numeric order and byte order agree.
#[derive(Clone, Eq, PartialEq, PartialOrd, Ord, Hash, Default)]
pub struct VectorKey {
    data: Box<[u8]>,
}

impl VectorKey {
    pub fn new_from_str(s: &str) -> Self {
        Self::new_from_slice(s.as_bytes())
    }

    pub fn new_from_slice(data: &[u8]) -> Self {
        Self {
            data: Box::from(data),
        }
    }

    pub fn new_from_vec(data: Vec<u8>) -> Self {
        Self {
            data: data.into_boxed_slice(),
        }
    }

    /// Encodes an integer so that lexicographic byte order matches numeric order.
    pub fn from_int<T: PrimInt + ToBytes>(val: T) -> Self {
        // For signed types the minimum value is the lone sign bit; for unsigned ones it is zero.
        let flipped = val ^ <T as Bounded>::min_value();
        Self::new_from_slice(flipped.to_be_bytes().as_ref())
    }

    pub fn to_be_u64(&self) -> u64 {
        assert!(self.data.len() <= 8, "data length is more than 8 bytes");
        let mut arr = [0; 8];
        arr[8 - self.data.len()..].copy_from_slice(&self.data);
        u64::from_be_bytes(arr)
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data.into_vec()
    }
}

impl AsRef<[u8]> for VectorKey {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Debug for VectorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VectorKey{}", key_str_rep(&self.data))
    }
}

impl From<String> for VectorKey {
    fn from(data: String) -> Self {
        Self::new_from_vec(data.into_bytes())
    }
}
impl From<&String> for VectorKey {
    fn from(data: &String) -> Self {
        Self::new_from_str(data)
    }
}
impl From<&str> for VectorKey {
    fn from(data: &str) -> Self {
        Self::new_from_str(data)
    }
}
impl From<Vec<u8>> for VectorKey {
    fn from(data: Vec<u8>) -> Self {
        Self::new_from_vec(data)
    }
}
impl From<&[u8]> for VectorKey {
    fn from(data: &[u8]) -> Self {
        Self::new_from_slice(data)
    }
}

macro_rules! impl_from_int {
    ( $($t:ty),* ) => {
    $(
    impl From< $t > for VectorKey
    {
        fn from(data: $t) -> Self {
            VectorKey::from_int(data)
        }
    }
    impl From< &$t > for VectorKey
    {
        fn from(data: &$t) -> Self {
            (*data).into()
        }
    }
    ) *
    }
}
impl_from_int!(u8, u16, u32, u64, usize, u128);
impl_from_int!(i8, i16, i32, i64, isize, i128);
