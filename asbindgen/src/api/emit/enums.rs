use roxygen::roxygen;

use crate::{api::catalog::EnumEntry, codegen::statements};

/// Builder for configuring EnumEmitter instances
///
/// # Example
///
/// ```
/// let emitter = asbindgen::emit::EnumEmitter::builder()
///     .verbose(false)
///     .build();
/// ```
pub struct Builder {
    verbose: bool,
}

impl Builder {
    pub fn new() -> Self {
        Self { verbose: true }
    }

    /// Emit a header comment before each enum
    #[roxygen]
    pub fn verbose(
        mut self,
        /// Whether debug comments are written
        verbose: bool,
    ) -> Self {
        self.verbose = verbose;
        self
    }

    /// Build the EnumEmitter instance
    pub fn build(self) -> EnumEmitter {
        EnumEmitter { builder: self }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts enum catalog entries into `RegEnum`/`RegEnumValue` statements
///
/// Members are emitted in catalog order.
pub struct EnumEmitter {
    builder: Builder,
}

impl EnumEmitter {
    /// Create a builder for configuring an enum emitter instance
    pub fn builder() -> Builder {
        Builder::new()
    }

    pub fn call(&self, entry: &EnumEntry) -> Vec<String> {
        let mut lines = Vec::with_capacity(entry.members.len() + 3);
        if self.builder.verbose {
            lines.push(String::new());
            lines.push(statements::comment(&format!("enum {}", entry.name)));
        }
        lines.push(statements::reg_enum(&entry.name));
        lines.extend(entry.members.iter().map(|member| {
            statements::reg_enum_value(&member.name, &member.resolved_value().to_string())
        }));
        lines
    }
}

impl Default for EnumEmitter {
    fn default() -> Self {
        Builder::new().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::catalog::EnumMember;

    fn color() -> EnumEntry {
        EnumEntry {
            name: "Color".to_string(),
            members: vec![EnumMember::new("Red", 0), EnumMember::new("Green", 1)],
        }
    }

    fn quiet() -> EnumEmitter {
        EnumEmitter::builder().verbose(false).build()
    }

    #[test]
    fn test_members_follow_enum_in_order() {
        assert_eq!(
            quiet().call(&color()),
            [
                "    h.RegEnum(\"Color\");",
                "    h.RegEnumValue(\"Red\", 0);",
                "    h.RegEnumValue(\"Green\", 1);",
            ]
        );
    }

    #[test]
    fn test_verbose_header() {
        let lines = EnumEmitter::default().call(&color());
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "    //enum Color");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_expression_value_without_calc_value() {
        let entry: EnumEntry = EnumEntry {
            name: "ImGuiKeyChord_".to_string(),
            members: serde_json::from_str(r#"[{"name": "ImGuiMod_Ctrl", "value": "1 << 12"}]"#)
                .unwrap(),
        };
        assert_eq!(
            quiet().call(&entry)[1],
            "    h.RegEnumValue(\"ImGuiMod_Ctrl\", 1 << 12);"
        );
    }
}
