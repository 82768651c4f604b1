//! This module defines the shared traits used by the encoder and its kernels.

/// A fixed-width scalar that knows how to append its little-endian wire
/// representation to a byte buffer.
///
/// Signed integers are written through their bit-identical unsigned
/// counterpart and floats through their IEEE-754 bit pattern, so the byte
/// layout is the same on every host.
pub trait LeBytes: Copy {
    /// Number of bytes this type occupies on the wire.
    const WIDTH: usize;

    /// Appends the little-endian bytes of `self` to `out`.
    fn append_le(self, out: &mut Vec<u8>);
}

// Implement the trait for all fixed-width primitive types.
macro_rules! impl_le_bytes {
    ($($T:ty),+ $(,)?) => {
        $(
            impl LeBytes for $T {
                const WIDTH: usize = std::mem::size_of::<$T>();

                #[inline]
                fn append_le(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }
            }
        )+
    };
}

impl_le_bytes!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl LeBytes for bool {
    const WIDTH: usize = 1;

    #[inline]
    fn append_le(self, out: &mut Vec<u8>) {
        out.push(u8::from(self));
    }
}
