bitflags::bitflags! {
    /// The role an argument plays for its field.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct ArgumentModifiers: u8 {
        /// Receives the item (or, in batch mode, items) being resolved.
        const SOURCE_DATA = 1 << 0;

        /// Receives the request's cancellation signal.
        const CANCELLATION_SIGNAL = 1 << 1;

        /// Supplied by the host; never part of the schema.
        const INTERNAL_ONLY = 1 << 2;

        /// Supplied by a caller and exposed on the schema.
        const PART_OF_SCHEMA = 1 << 3;

        /// Modifiers at most one argument per field may carry.
        const CLAIMABLE = Self::SOURCE_DATA.bits() | Self::CANCELLATION_SIGNAL.bits();
    }
}
impl ArgumentModifiers {
    pub fn is_part_of_schema(&self) -> bool {
        self.contains(Self::PART_OF_SCHEMA)
    }
}
