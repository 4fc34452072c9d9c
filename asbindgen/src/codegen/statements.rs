//! One-line C++ statements calling the `Helper` defined in the prologue.

use crate::codegen::{flags::ObjectFlags, scaffold::INDENT};

/// Quote a string as a C++ literal
fn cpp_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

pub fn comment(text: &str) -> String {
    format!("{INDENT}//{text}")
}

pub fn set_namespace(name: &str) -> String {
    format!("{INDENT}h.SetNamespace({});", cpp_str(name))
}

/// `decl` is left-aligned inside the literal to `width` columns
pub fn reg_function(decl: &str, width: usize, target: &str) -> String {
    format!(
        "{INDENT}h.RegFunction({}, asFUNCTION({target}));",
        cpp_str(&format!("{decl:<width$}"))
    )
}

pub fn reg_object(name: &str, flags: ObjectFlags) -> String {
    format!(
        "{INDENT}h.RegObject({}, sizeof({name}), {});",
        cpp_str(name),
        flags.to_cpp()
    )
}

pub fn reg_property(owner: &str, ty: &str, name: &str) -> String {
    format!(
        "{INDENT}h.RegProperty({}, asOFFSET({owner}, {name}));",
        cpp_str(&format!("{ty} {name}"))
    )
}

pub fn reg_enum(name: &str) -> String {
    format!("{INDENT}h.RegEnum({});", cpp_str(name))
}

pub fn reg_enum_value(name: &str, value: &str) -> String {
    format!("{INDENT}h.RegEnumValue({}, {value});", cpp_str(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reg_function_padding() {
        let line = reg_function("void End()", 20, "ImGui::End");
        assert_eq!(
            line,
            "    h.RegFunction(\"void End()          \", asFUNCTION(ImGui::End));"
        );
    }

    #[test]
    fn test_reg_function_longer_than_width() {
        let decl = "bool Begin(string name, bool* p_open, ImGuiWindowFlags flags)";
        let line = reg_function(decl, 10, "ImGui::Begin");
        assert!(line.contains(&format!("\"{decl}\"")));
    }

    #[test]
    fn test_reg_property() {
        assert_eq!(
            reg_property("ImVec2", "float", "x"),
            "    h.RegProperty(\"float x\", asOFFSET(ImVec2, x));"
        );
    }

    #[test]
    fn test_literal_escaping() {
        assert_eq!(cpp_str(r#"a"b\c"#), r#""a\"b\\c""#);
    }

    #[test]
    fn test_enum_statements() {
        assert_eq!(reg_enum("Color"), "    h.RegEnum(\"Color\");");
        assert_eq!(
            reg_enum_value("Red", "0"),
            "    h.RegEnumValue(\"Red\", 0);"
        );
    }
}
