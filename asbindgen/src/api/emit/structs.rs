use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use roxygen::roxygen;

use crate::{
    api::catalog::{FieldEntry, StructEntry},
    codegen::{flags::ObjectFlags, statements},
};

/// Structs which other structs refer to; they are registered first, in this order
const PRIORITY_STRUCTS: &[&str] = &["ImVec2", "ImVec4", "ImColor"];

/// Structs made of floats only
const ALL_FLOATS_STRUCTS: &[&str] = &["ImVec2", "ImVec4"];

fn array_regex() -> &'static Regex {
    static ARRAY: OnceLock<Regex> = OnceLock::new();
    ARRAY.get_or_init(|| Regex::new(r"^\w+\[[^\]]*\]$").expect("valid array regex"))
}

/// Whether a struct field can be registered as an object property
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSupport {
    Supported,
    /// C array, `name[len]`
    Array,
    Bitfield,
    FunctionPointer,
    /// Anonymous union or struct declared inline
    Inline,
    Pointer,
}

impl FieldSupport {
    pub fn of(field: &FieldEntry) -> Self {
        if array_regex().is_match(&field.name) {
            return FieldSupport::Array;
        }
        if field.bitfield.is_some() {
            return FieldSupport::Bitfield;
        }
        let ty = field.ty.trim();
        if ty.contains('{') {
            FieldSupport::Inline
        } else if ty.contains('(') {
            FieldSupport::FunctionPointer
        } else if ty.ends_with('*') {
            FieldSupport::Pointer
        } else {
            FieldSupport::Supported
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, FieldSupport::Supported)
    }
}

/// Builder for configuring StructEmitter instances
///
/// # Example
///
/// ```
/// let emitter = asbindgen::emit::StructEmitter::builder()
///     .verbose(false)
///     .priority_structs(["ImVec2", "ImVec4", "ImColor", "ImRect"])
///     .build();
/// ```
pub struct Builder {
    verbose: bool,
    skip_unsupported_fields: bool,
    priority: Vec<String>,
    all_floats: HashSet<String>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            verbose: true,
            skip_unsupported_fields: false,
            priority: PRIORITY_STRUCTS.iter().map(|s| s.to_string()).collect(),
            all_floats: ALL_FLOATS_STRUCTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Emit a header comment for each struct and a comment for each skipped field
    #[roxygen]
    pub fn verbose(
        mut self,
        /// Whether debug comments are written
        verbose: bool,
    ) -> Self {
        self.verbose = verbose;
        self
    }

    /// Leave out fields AngelScript cannot register as plain properties
    ///
    /// Off by default: every field gets a `RegProperty` statement. When on, arrays,
    /// bitfields, function pointers, inline unions and pointers are skipped.
    #[roxygen]
    pub fn skip_unsupported_fields(
        mut self,
        /// Whether unsupported fields are skipped
        skip: bool,
    ) -> Self {
        self.skip_unsupported_fields = skip;
        self
    }

    /// Replace the list of structs registered before all others
    #[roxygen]
    pub fn priority_structs<I, S>(
        mut self,
        /// Struct names in registration order
        names: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the set of structs flagged `asOBJ_APP_CLASS_ALLFLOATS`
    #[roxygen]
    pub fn all_floats_structs<I, S>(
        mut self,
        /// Names of structs whose fields are all floats
        names: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.all_floats = names.into_iter().map(Into::into).collect();
        self
    }

    /// Build the StructEmitter instance
    pub fn build(self) -> StructEmitter {
        StructEmitter { builder: self }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts struct catalog entries into `RegObject`/`RegProperty` statements
pub struct StructEmitter {
    builder: Builder,
}

impl StructEmitter {
    /// Create a builder for configuring a struct emitter instance
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Registration order: priority structs that are present, then the rest in input order
    pub fn ordered<'a, I>(&self, structs: I) -> Vec<&'a StructEntry>
    where
        I: IntoIterator<Item = &'a StructEntry>,
    {
        let structs: Vec<&'a StructEntry> = structs.into_iter().collect();
        let mut seen: HashSet<&'a str> = HashSet::new();
        let mut ordered = Vec::with_capacity(structs.len());
        for name in &self.builder.priority {
            if let Some(&entry) = structs.iter().find(|s| &s.name == name) {
                if seen.insert(entry.name.as_str()) {
                    ordered.push(entry);
                }
            }
        }
        for &entry in &structs {
            if seen.insert(entry.name.as_str()) {
                ordered.push(entry);
            }
        }
        ordered
    }

    pub fn flags(&self, name: &str) -> ObjectFlags {
        if self.builder.all_floats.contains(name) {
            ObjectFlags::value_type() | ObjectFlags::APP_CLASS_ALLFLOATS
        } else {
            ObjectFlags::value_type()
        }
    }

    pub fn call(&self, entry: &StructEntry) -> Vec<String> {
        let mut lines = Vec::with_capacity(entry.fields.len() + 3);
        if self.builder.verbose {
            lines.push(String::new());
            lines.push(statements::comment(&format!("struct {}", entry.name)));
        }
        lines.push(statements::reg_object(&entry.name, self.flags(&entry.name)));
        for field in &entry.fields {
            let support = FieldSupport::of(field);
            if !self.builder.skip_unsupported_fields || support.is_supported() {
                lines.push(statements::reg_property(&entry.name, &field.ty, &field.name));
                continue;
            }
            tracing::debug!(
                "Skipping field {}::{} ({:?})",
                entry.name,
                field.name,
                support
            );
            if self.builder.verbose {
                lines.push(statements::comment(&format!(
                    "{} {} -- Unsupported field",
                    field.ty, field.name
                )));
            }
        }
        lines
    }
}

impl Default for StructEmitter {
    fn default() -> Self {
        Builder::new().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, fields: Vec<FieldEntry>) -> StructEntry {
        StructEntry {
            name: name.to_string(),
            fields,
        }
    }

    fn names<'a>(ordered: &[&'a StructEntry]) -> Vec<&'a str> {
        ordered.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_priority_order() {
        let structs = vec![
            entry("Foo", vec![]),
            entry("ImColor", vec![]),
            entry("ImVec4", vec![]),
            entry("ImVec2", vec![]),
        ];
        let emitter = StructEmitter::default();
        assert_eq!(
            names(&emitter.ordered(&structs)),
            ["ImVec2", "ImVec4", "ImColor", "Foo"]
        );
    }

    #[test]
    fn test_missing_priority_structs_are_skipped() {
        let structs = vec![
            entry("Zed", vec![]),
            entry("ImVec4", vec![]),
            entry("Alpha", vec![]),
        ];
        assert_eq!(
            names(&StructEmitter::default().ordered(&structs)),
            ["ImVec4", "Zed", "Alpha"]
        );
    }

    #[test]
    fn test_duplicate_priority_names() {
        let structs = vec![entry("B", vec![]), entry("A", vec![])];
        let emitter = StructEmitter::builder()
            .priority_structs(["A", "A"])
            .build();
        assert_eq!(names(&emitter.ordered(&structs)), ["A", "B"]);
    }

    #[test]
    fn test_flags() {
        let emitter = StructEmitter::default();
        assert!(emitter
            .flags("ImVec2")
            .contains(ObjectFlags::APP_CLASS_ALLFLOATS));
        assert!(emitter
            .flags("ImVec4")
            .contains(ObjectFlags::APP_CLASS_ALLFLOATS));
        assert_eq!(emitter.flags("ImColor"), ObjectFlags::value_type());
    }

    #[test]
    fn test_object_and_properties() {
        let vec2 = entry(
            "ImVec2",
            vec![FieldEntry::new("float", "x"), FieldEntry::new("float", "y")],
        );
        let lines = StructEmitter::builder().verbose(false).build().call(&vec2);
        assert_eq!(
            lines,
            [
                "    h.RegObject(\"ImVec2\", sizeof(ImVec2), asOBJ_VALUE | asOBJ_POD | asOBJ_APP_CLASS | asOBJ_APP_CLASS_ALLFLOATS);",
                "    h.RegProperty(\"float x\", asOFFSET(ImVec2, x));",
                "    h.RegProperty(\"float y\", asOFFSET(ImVec2, y));",
            ]
        );
    }

    #[test]
    fn test_field_support() {
        assert_eq!(
            FieldSupport::of(&FieldEntry::new("ImVec4", "Colors[ImGuiCol_COUNT]")),
            FieldSupport::Array
        );
        let mut bits = FieldEntry::new("unsigned int", "Flag");
        bits.bitfield = Some("1".to_string());
        assert_eq!(FieldSupport::of(&bits), FieldSupport::Bitfield);
        assert_eq!(
            FieldSupport::of(&FieldEntry::new("void*(*)(size_t,void*)", "AllocFunc")),
            FieldSupport::FunctionPointer
        );
        assert_eq!(
            FieldSupport::of(&FieldEntry::new("union { int val_i; float val_f;}", "")),
            FieldSupport::Inline
        );
        assert_eq!(
            FieldSupport::of(&FieldEntry::new("const char*", "IniFilename")),
            FieldSupport::Pointer
        );
        assert!(FieldSupport::of(&FieldEntry::new("ImGuiDir", "WindowMenuButtonPosition"))
            .is_supported());
    }

    fn io() -> StructEntry {
        let mut bits = FieldEntry::new("unsigned int", "AppFocusLost");
        bits.bitfield = Some("1".to_string());
        entry(
            "ImGuiIO",
            vec![
                FieldEntry::new("float", "DeltaTime"),
                FieldEntry::new("const char*", "IniFilename"),
                FieldEntry::new("ImFontAtlas*", "Fonts"),
                FieldEntry::new("ImGuiKeyData", "KeysData[ImGuiKey_KeysData_SIZE]"),
                bits,
            ],
        )
    }

    #[test]
    fn test_every_field_registered_by_default() {
        let lines = StructEmitter::builder().verbose(false).build().call(&io());
        let properties: Vec<&String> = lines
            .iter()
            .filter(|l| l.contains("h.RegProperty("))
            .collect();
        assert_eq!(properties.len(), 5);
        assert_eq!(
            properties[1],
            "    h.RegProperty(\"const char* IniFilename\", asOFFSET(ImGuiIO, IniFilename));"
        );
        assert!(!lines.iter().any(|l| l.contains("Unsupported")));
    }

    #[test]
    fn test_skip_unsupported_fields() {
        let verbose = StructEmitter::builder()
            .skip_unsupported_fields(true)
            .build()
            .call(&io());
        assert_eq!(verbose[1], "    //struct ImGuiIO");
        assert_eq!(
            verbose.iter().filter(|l| l.contains("h.RegProperty(")).count(),
            1
        );
        assert_eq!(
            verbose.last().map(String::as_str),
            Some("    //unsigned int AppFocusLost -- Unsupported field")
        );

        let quiet = StructEmitter::builder()
            .verbose(false)
            .skip_unsupported_fields(true)
            .build()
            .call(&io());
        assert_eq!(quiet.len(), 2);
        assert!(!quiet.iter().any(|l| l.contains("IniFilename")));
    }
}
