bitflags::bitflags! {
    /// Object type flags passed to `RegisterObjectType`, mirroring `asEObjTypeFlags`.
    ///
    /// Only the subset needed for plain value types is listed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ObjectFlags: u32 {
        const VALUE = 1 << 1;
        const POD = 1 << 3;
        const APP_CLASS = 1 << 8;
        const APP_CLASS_ALLFLOATS = 1 << 17;
    }
}

impl ObjectFlags {
    /// Flags of a C struct registered by value
    pub fn value_type() -> Self {
        Self::VALUE | Self::POD | Self::APP_CLASS
    }

    /// C++ expression for the flags, e.g. `asOBJ_VALUE | asOBJ_POD`
    pub fn to_cpp(&self) -> String {
        if self.is_empty() {
            return "0".to_string();
        }
        self.iter_names()
            .map(|(name, _)| format!("asOBJ_{name}"))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
