/// The integer representation backing an enumeration.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EnumRepr {
    I8,
    I16,
    #[default]
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
}
impl EnumRepr {
    pub fn bit_width(&self) -> u32 {
        match self {
            Self::I8 | Self::U8 => 8,
            Self::I16 | Self::U16 => 16,
            Self::I32 | Self::U32 => 32,
            Self::I64 | Self::U64 => 64,
        }
    }

    /// Renders a declared member value as it is stored in this
    /// representation: truncated to the representation's width and, for
    /// signed representations, sign-extended.
    ///
    /// Two labels collide exactly when their canonical values are equal, so
    /// `-1` and `255` collide in an `i8` enum but not in an `i32` one.
    pub fn canonical_value(&self, value: i128) -> String {
        let bits = self.bit_width();
        let mask: u128 = (1u128 << bits) - 1;
        let raw = (value as u128) & mask;
        let sign_bit = 1u128 << (bits - 1);

        if self.is_signed() && raw & sign_bit != 0 {
            ((raw as i128) - (1i128 << bits)).to_string()
        } else {
            raw.to_string()
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }
}
