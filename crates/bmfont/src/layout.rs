//! Declarative little-endian record layouts.
//!
//! Every fixed-size record in a BMFont file is a packed run of little-endian
//! integers. A [`Layout`] lists those fields (name, offset, width, signedness)
//! and [`Layout::decode`] reads all of them in one pass, so the record types
//! only describe where their fields live.
use crate::error::{FormatError, Result};

/// An integer type that can appear in a record.
pub trait Scalar: Copy {
    const WIDTH: usize;
    const SIGNED: bool;

    /// Narrow a value produced by [`Layout::decode`]. The value always fits,
    /// since it was read from exactly `WIDTH` bytes with matching signedness.
    fn from_value(value: i64) -> Self;
}

macro_rules! impl_scalar {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();
                const SIGNED: bool = <$ty>::MIN != 0;

                fn from_value(value: i64) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_scalar!(u8, i8, u16, i16, u32, i32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub offset: usize,
    pub width: usize,
    pub signed: bool,
}

impl Field {
    pub const fn new<T: Scalar>(name: &'static str, offset: usize) -> Self {
        Self {
            name,
            offset,
            width: T::WIDTH,
            signed: T::SIGNED,
        }
    }

    pub const fn end(&self) -> usize {
        self.offset + self.width
    }

    fn read(&self, bytes: &[u8]) -> Option<i64> {
        let raw = bytes.get(self.offset..self.end())?;
        let mut buf = [0u8; 8];
        buf[..raw.len()].copy_from_slice(raw);
        let value = u64::from_le_bytes(buf);
        if self.signed {
            // sign-extend from the field width
            let shift = 64 - 8 * self.width as u32;
            Some(((value << shift) as i64) >> shift)
        } else {
            Some(value as i64)
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Layout<const N: usize> {
    pub name: &'static str,
    pub size: usize,
    pub fields: [Field; N],
}

impl<const N: usize> Layout<N> {
    /// Read every field from the front of `bytes`, in declaration order.
    ///
    /// Fails with [`FormatError::TruncatedInput`] if `bytes` is shorter than
    /// the record. Extra bytes past `size` are not looked at.
    pub fn decode(&self, bytes: &[u8]) -> Result<[i64; N]> {
        if bytes.len() < self.size {
            return Err(FormatError::TruncatedInput {
                offset: 0,
                needed: self.size,
                available: bytes.len(),
            });
        }
        let mut values = [0; N];
        for (value, field) in values.iter_mut().zip(&self.fields) {
            *value = field.read(bytes).ok_or(FormatError::TruncatedInput {
                offset: field.offset,
                needed: field.width,
                available: bytes.len().saturating_sub(field.offset),
            })?;
        }
        Ok(values)
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Declares a record: the struct, its `LAYOUT` constant and a `from_bytes`
/// decoder built on [`Layout::decode`].
///
/// A plain integer record also gets `SIZE`. A record followed by
/// `text field;` gets `HEADER_SIZE` instead, and a `String` field holding
/// the rest of the block, run through the caller's [`TextDecoder`].
///
/// [`TextDecoder`]: crate::codepage::TextDecoder
macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident ($size:literal) {
            $(
                $(#[$field_meta:meta])*
                [$offset:literal] $field:ident: $ty:ty,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl $name {
            pub const SIZE: usize = $size;

            $crate::layout::record!(@layout $name $size { $($field: $ty = $offset),* });

            pub fn from_bytes(bytes: &[u8]) -> $crate::Result<Self> {
                let [$($field),*] = Self::LAYOUT.decode(bytes)?;
                Ok(Self {
                    $($field: <$ty as $crate::layout::Scalar>::from_value($field),)*
                })
            }
        }
    };
    (
        $(#[$meta:meta])*
        pub struct $name:ident ($size:literal) {
            $(
                $(#[$field_meta:meta])*
                [$offset:literal] $field:ident: $ty:ty,
            )*
        }
        $(#[$text_meta:meta])*
        text $text:ident;
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
            $(#[$text_meta])*
            pub $text: String,
        }

        impl $name {
            /// Bytes preceding the text field.
            pub const HEADER_SIZE: usize = $size;

            $crate::layout::record!(@layout $name $size { $($field: $ty = $offset),* });

            /// Decode the fixed header, then the text running to the end of
            /// `bytes`.
            pub fn from_bytes<D>(bytes: &[u8], decoder: &D) -> $crate::Result<Self>
            where
                D: $crate::codepage::TextDecoder + ?Sized,
            {
                let [$($field),*] = Self::LAYOUT.decode(bytes)?;
                let $text = decoder.decode_text(&bytes[$size..])?;
                Ok(Self {
                    $($field: <$ty as $crate::layout::Scalar>::from_value($field),)*
                    $text,
                })
            }
        }
    };
    (@layout $name:ident $size:literal { $($field:ident: $ty:ty = $offset:literal),* }) => {
        pub const LAYOUT: $crate::layout::Layout<{ [$(stringify!($field)),*].len() }> =
            $crate::layout::Layout {
                name: stringify!($name),
                size: $size,
                fields: [$($crate::layout::Field::new::<$ty>(stringify!($field), $offset)),*],
            };
    };
}

pub(crate) use record;
