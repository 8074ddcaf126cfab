bitflags::bitflags! {
    /// The set of schema locations a directive may be applied to.
    ///
    /// Serialized (e.g. in a metadata manifest) as a `|`-separated list of
    /// flag names such as `"FIELD | FIELD_DEFINITION"`.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    #[derive(serde::Deserialize, serde::Serialize)]
    #[serde(transparent)]
    pub struct DirectiveLocation: u32 {
        const QUERY = 1 << 0;
        const MUTATION = 1 << 1;
        const SUBSCRIPTION = 1 << 2;
        const FIELD = 1 << 3;
        const FRAGMENT_DEFINITION = 1 << 4;
        const FRAGMENT_SPREAD = 1 << 5;
        const INLINE_FRAGMENT = 1 << 6;
        const VARIABLE_DEFINITION = 1 << 7;
        const SCHEMA = 1 << 8;
        const SCALAR = 1 << 9;
        const OBJECT = 1 << 10;
        const FIELD_DEFINITION = 1 << 11;
        const ARGUMENT_DEFINITION = 1 << 12;
        const INTERFACE = 1 << 13;
        const UNION = 1 << 14;
        const ENUM = 1 << 15;
        const ENUM_VALUE = 1 << 16;
        const INPUT_OBJECT = 1 << 17;
        const INPUT_FIELD_DEFINITION = 1 << 18;

        const EXECUTABLE_LOCATIONS = Self::QUERY.bits()
            | Self::MUTATION.bits()
            | Self::SUBSCRIPTION.bits()
            | Self::FIELD.bits()
            | Self::FRAGMENT_DEFINITION.bits()
            | Self::FRAGMENT_SPREAD.bits()
            | Self::INLINE_FRAGMENT.bits()
            | Self::VARIABLE_DEFINITION.bits();
    }
}
impl DirectiveLocation {
    /// Indicates if the directive targets the type system (as opposed to an
    /// executable document) at any of its locations.
    pub fn has_type_system_locations(&self) -> bool {
        !self.difference(Self::EXECUTABLE_LOCATIONS).is_empty()
    }
}
