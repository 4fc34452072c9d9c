//! Fixed text surrounding the generated registration calls.
//!
//! The prologue defines a small `Helper` class which wraps the engine's registration
//! functions and turns negative return codes into `imgui_angelscript::SetupError`. The
//! generated statements call this helper through a local named `h`, inside the body of
//! `imgui_angelscript::RegisterInterface`. The epilogue closes that body.
//!
//! The generated file includes `as-imgui.hpp`, which declares the entry point and the
//! error type. Its text is [`HEADER`].

/// Contents of `as-imgui.hpp`
pub const HEADER: &str = include_str!("../../cpp/as-imgui.hpp");

pub const PROLOGUE: &str = r#"// Generated by asbindgen from cimgui definitions. Do not edit.

#include "as-imgui.hpp"

#include <imgui.h>
#include <string>

// ================================================================================================
//     Registration helper class
// ================================================================================================

using namespace AngelScript;

namespace
{

void Fail(const char* call, const char* name)
{
    std::string msg = std::string(call) + " failed for '" + (name ? name : "") + "'";
    throw imgui_angelscript::SetupError(msg.c_str());
}

class Helper
{
public:
    Helper(asIScriptEngine* e): m_engine(e), m_obj_name(nullptr), m_enum_name(nullptr) {}

    void SetNamespace(const char* name)
    {
        if (m_engine->SetDefaultNamespace(name) < asSUCCESS)
            Fail("SetDefaultNamespace()", name);
    }

    void RegObject(const char* name, size_t size, asDWORD flags)
    {
        if (m_engine->RegisterObjectType(name, static_cast<int>(size), flags) < asSUCCESS)
            Fail("RegisterObjectType()", name);
        m_obj_name = name;
    }

    void RegProperty(const char* decl, size_t offset)
    {
        if (m_engine->RegisterObjectProperty(m_obj_name, decl, static_cast<int>(offset)) < asSUCCESS)
            Fail("RegisterObjectProperty()", decl);
    }

    void RegMethod(const char* decl, const asSFuncPtr& ptr, asDWORD flags = asCALL_CDECL_OBJFIRST)
    {
        if (m_engine->RegisterObjectMethod(m_obj_name, decl, ptr, flags) < asSUCCESS)
            Fail("RegisterObjectMethod()", decl);
    }

    void RegEnum(const char* name)
    {
        if (m_engine->RegisterEnum(name) < asSUCCESS)
            Fail("RegisterEnum()", name);
        m_enum_name = name;
    }

    void RegEnumValue(const char* name, int value)
    {
        if (m_engine->RegisterEnumValue(m_enum_name, name, value) < asSUCCESS)
            Fail("RegisterEnumValue()", name);
    }

    void RegFunction(const char* decl, const asSFuncPtr& ptr, asDWORD flags = asCALL_CDECL)
    {
        if (m_engine->RegisterGlobalFunction(decl, ptr, flags) < asSUCCESS)
            Fail("RegisterGlobalFunction()", decl);
    }

private:
    asIScriptEngine* m_engine;
    const char*      m_obj_name;
    const char*      m_enum_name;
};

} // anonymous namespace

// ================================================================================================
//     Registration (generated)
// ================================================================================================

void imgui_angelscript::RegisterInterface(asIScriptEngine* engine)
{
    Helper h(engine);"#;

pub const EPILOGUE: &str = "} // imgui_angelscript::RegisterInterface";

/// Indentation of statements inside the entry point body
pub const INDENT: &str = "    ";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prologue_includes_header() {
        assert!(PROLOGUE.contains(&format!("#include \"{}\"", crate::HEADER_FILE)));
    }

    #[test]
    fn test_header_declares_what_prologue_uses() {
        assert!(HEADER.contains("class SetupError"));
        assert!(HEADER.contains("void RegisterInterface(asIScriptEngine *engine);"));
        assert!(PROLOGUE.contains("imgui_angelscript::SetupError"));
        assert!(PROLOGUE.contains("void imgui_angelscript::RegisterInterface(asIScriptEngine* engine)"));
    }
}
