use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One overload record of the function catalog (`definitions.json`).
///
/// Unknown keys (`args`, `argsoriginal`, `defaults`, `location`, ...) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FunctionEntry {
    /// Owning struct name, empty for free functions
    #[serde(default)]
    pub stname: String,
    /// Canonical C identifier, unique across overloads (e.g. `igBeginChild_Str`)
    #[serde(default)]
    pub cimguiname: String,
    /// Display signature, e.g. `(const char*,...)`
    #[serde(default)]
    pub signature: String,
    /// Return type; absent for constructors
    #[serde(default)]
    pub ret: String,
    /// Callable name inside `namespace`
    #[serde(default)]
    pub funcname: String,
    /// C++ namespace qualifier of the callable
    #[serde(default)]
    pub namespace: Option<String>,
    /// Parameters in declaration order
    #[serde(rename = "argsT", default)]
    pub args: Vec<ArgEntry>,
}

impl FunctionEntry {
    /// True if the entry belongs to a struct and is therefore a method
    pub fn is_method(&self) -> bool {
        !self.stname.is_empty()
    }

    /// Fully-qualified reference to the C++ callable
    pub fn qualified_name(&self) -> String {
        match self.namespace.as_deref() {
            Some(ns) if !ns.is_empty() => format!("{ns}::{}", self.funcname),
            _ => self.funcname.clone(),
        }
    }
}

/// A `{type, name}` parameter pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArgEntry {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub name: String,
}

impl ArgEntry {
    pub fn new<S1: Into<String>, S2: Into<String>>(ty: S1, name: S2) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// A struct field as listed in `structs_and_enums.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldEntry {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
    /// Bit width of a bitfield member
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitfield: Option<String>,
    /// Element count of a C array member
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl FieldEntry {
    pub fn new<S1: Into<String>, S2: Into<String>>(ty: S1, name: S2) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            bitfield: None,
            size: None,
        }
    }
}

/// Value of an enum member: either a number or the C expression cimgui copied from the header
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum EnumValue {
    Int(i64),
    Expr(String),
}

impl std::fmt::Display for EnumValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnumValue::Int(v) => write!(f, "{v}"),
            EnumValue::Expr(e) => write!(f, "{e}"),
        }
    }
}

/// A `{name, value}` enum member
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnumMember {
    pub name: String,
    pub value: EnumValue,
    /// Value already evaluated by cimgui
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calc_value: Option<i64>,
}

impl EnumMember {
    pub fn new<S: Into<String>>(name: S, value: i64) -> Self {
        Self {
            name: name.into(),
            value: EnumValue::Int(value),
            calc_value: None,
        }
    }

    /// The value to emit: the evaluated one when present, the literal one otherwise
    pub fn resolved_value(&self) -> EnumValue {
        match self.calc_value {
            Some(v) => EnumValue::Int(v),
            None => self.value.clone(),
        }
    }
}

/// A named struct with its fields in layout order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructEntry {
    pub name: String,
    pub fields: Vec<FieldEntry>,
}

/// A named enum with its members in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEntry {
    pub name: String,
    pub members: Vec<EnumMember>,
}

/// Function catalog: API name mapped to its overloads
pub(crate) type Definitions = IndexMap<String, Vec<FunctionEntry>>;

/// Struct and enum catalog
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub(crate) struct StructsAndEnums {
    #[serde(default)]
    pub structs: IndexMap<String, Vec<FieldEntry>>,
    #[serde(default)]
    pub enums: IndexMap<String, Vec<EnumMember>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_entry_from_cimgui_record() {
        let json = r#"{
            "args": "(const char* fmt,...)",
            "argsT": [{"name": "fmt", "type": "const char*"}, {"name": "...", "type": "..."}],
            "cimguiname": "igText",
            "defaults": {},
            "funcname": "Text",
            "isvararg": "...)",
            "location": "imgui:520",
            "namespace": "ImGui",
            "ov_cimguiname": "igText",
            "ret": "void",
            "signature": "(const char*,...)",
            "stname": ""
        }"#;
        let entry: FunctionEntry = serde_json::from_str(json).unwrap();
        assert!(!entry.is_method());
        assert_eq!(entry.qualified_name(), "ImGui::Text");
        assert_eq!(entry.args.len(), 2);
        assert_eq!(entry.args[1].ty, "...");
    }

    #[test]
    fn test_constructor_without_ret() {
        let json = r#"{
            "argsT": [],
            "cimguiname": "ImVec2_ImVec2",
            "constructor": true,
            "funcname": "ImVec2",
            "signature": "()",
            "stname": "ImVec2"
        }"#;
        let entry: FunctionEntry = serde_json::from_str(json).unwrap();
        assert!(entry.is_method());
        assert_eq!(entry.ret, "");
        assert_eq!(entry.qualified_name(), "ImVec2");
    }

    #[test]
    fn test_enum_member_values() {
        let members: Vec<EnumMember> = serde_json::from_str(
            r#"[
                {"name": "ImGuiWindowFlags_None", "value": 0},
                {"name": "ImGuiWindowFlags_NoTitleBar", "value": "1 << 0", "calc_value": 1},
                {"name": "ImGuiWindowFlags_NoDecoration", "value": "ImGuiWindowFlags_NoTitleBar | 2"}
            ]"#,
        )
        .unwrap();
        assert_eq!(members[0].resolved_value(), EnumValue::Int(0));
        assert_eq!(members[1].resolved_value(), EnumValue::Int(1));
        assert_eq!(
            members[2].resolved_value().to_string(),
            "ImGuiWindowFlags_NoTitleBar | 2"
        );
    }

    #[test]
    fn test_field_extras() {
        let fields: Vec<FieldEntry> = serde_json::from_str(
            r#"[
                {"name": "x", "type": "float"},
                {"name": "Colors[ImGuiCol_COUNT]", "size": 55, "type": "ImVec4"},
                {"bitfield": "1", "name": "Flag", "type": "unsigned int"}
            ]"#,
        )
        .unwrap();
        assert_eq!(fields[0], FieldEntry::new("float", "x"));
        assert_eq!(fields[1].size, Some(55));
        assert_eq!(fields[2].bitfield.as_deref(), Some("1"));
    }
}
