//! Scalar kinds for generated constants.
//!
//! Every emitted constant carries one of these kinds; the emitter maps
//! them to C++ type names. Width selection always picks the smallest
//! kind whose range contains the value.

/// The closed set of value categories the compiler can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    String,
}

impl ScalarKind {
    /// Smallest unsigned kind whose range contains `value`.
    pub fn smallest_unsigned(value: u64) -> Self {
        if value <= u8::MAX as u64 {
            ScalarKind::U8
        } else if value <= u16::MAX as u64 {
            ScalarKind::U16
        } else if value <= u32::MAX as u64 {
            ScalarKind::U32
        } else {
            ScalarKind::U64
        }
    }

    /// Smallest signed kind for a negative literal.
    ///
    /// Each kind covers `[MIN, -1]`; values outside every range fall
    /// through to I64.
    pub fn smallest_signed_negative(value: i64) -> Self {
        if (i8::MIN as i64..=-1).contains(&value) {
            ScalarKind::I8
        } else if (i16::MIN as i64..=-1).contains(&value) {
            ScalarKind::I16
        } else if (i32::MIN as i64..=-1).contains(&value) {
            ScalarKind::I32
        } else {
            ScalarKind::I64
        }
    }

    /// True for the integer kinds (signed or unsigned).
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            ScalarKind::I8
                | ScalarKind::U8
                | ScalarKind::I16
                | ScalarKind::U16
                | ScalarKind::I32
                | ScalarKind::U32
                | ScalarKind::I64
                | ScalarKind::U64
        )
    }
}
