use std::path::Path;

use indexmap::IndexMap;
use roxygen::roxygen;

use crate::{
    api::catalog::{Definitions, EnumEntry, FunctionEntry, StructEntry, StructsAndEnums},
    error::{Error, Result},
    utils::json::{parse_json, read_json_file},
};

/// The loaded cimgui catalogs.
///
/// Every mapping keeps the order of the JSON document, so iterating a `Source` twice
/// (or loading the same files twice) always yields the same sequence.
#[derive(Debug, Clone, Default)]
pub struct Source {
    definitions: Definitions,
    structs: IndexMap<String, StructEntry>,
    enums: IndexMap<String, EnumEntry>,
}

impl Source {
    /// Load both catalogs from disk
    ///
    /// Both paths are checked for existence before either file is parsed.
    #[roxygen]
    pub fn new<P1: AsRef<Path>, P2: AsRef<Path>>(
        /// Path to cimgui's `definitions.json`
        definitions_path: P1,
        /// Path to cimgui's `structs_and_enums.json`
        structs_and_enums_path: P2,
    ) -> Result<Self> {
        let definitions_path = definitions_path.as_ref();
        let structs_and_enums_path = structs_and_enums_path.as_ref();
        for path in [definitions_path, structs_and_enums_path] {
            if !path.exists() {
                return Err(Error::MissingInput(path.to_path_buf()));
            }
        }

        let definitions: Definitions = read_json_file(definitions_path)?;
        let structs_and_enums: StructsAndEnums = read_json_file(structs_and_enums_path)?;
        let source = Self::assemble(definitions, structs_and_enums);
        tracing::info!(
            "Loaded {} functions, {} structs and {} enums from {} and {}",
            source.functions().count(),
            source.structs.len(),
            source.enums.len(),
            definitions_path.display(),
            structs_and_enums_path.display()
        );
        Ok(source)
    }

    /// Build a source from catalogs already held in memory
    #[roxygen]
    pub fn from_json(
        /// Contents of `definitions.json`
        definitions: &str,
        /// Contents of `structs_and_enums.json`
        structs_and_enums: &str,
    ) -> Result<Self> {
        let definitions: Definitions = parse_json("<definitions>", definitions)?;
        let structs_and_enums: StructsAndEnums =
            parse_json("<structs_and_enums>", structs_and_enums)?;
        Ok(Self::assemble(definitions, structs_and_enums))
    }

    fn assemble(definitions: Definitions, structs_and_enums: StructsAndEnums) -> Self {
        let structs = structs_and_enums
            .structs
            .into_iter()
            .map(|(name, fields)| (name.clone(), StructEntry { name, fields }))
            .collect();
        let enums = structs_and_enums
            .enums
            .into_iter()
            .map(|(name, members)| (name.clone(), EnumEntry { name, members }))
            .collect();
        Self {
            definitions,
            structs,
            enums,
        }
    }

    /// All overload records of all API names, in document order
    pub fn functions(&self) -> impl Iterator<Item = &FunctionEntry> {
        self.definitions.values().flat_map(|overloads| overloads.iter())
    }

    /// All structs in document order
    pub fn structs(&self) -> impl Iterator<Item = &StructEntry> {
        self.structs.values()
    }

    /// All enums in document order
    pub fn enums(&self) -> impl Iterator<Item = &EnumEntry> {
        self.enums.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const DEFINITIONS: &str = r#"{
        "igEnd": [{"argsT": [], "cimguiname": "igEnd", "funcname": "End",
                   "namespace": "ImGui", "ret": "void", "signature": "()", "stname": ""}],
        "igBegin": [{"argsT": [], "cimguiname": "igBegin", "funcname": "Begin",
                     "namespace": "ImGui", "ret": "bool", "signature": "()", "stname": ""}]
    }"#;

    const STRUCTS: &str = r#"{
        "enums": {"Color": [{"name": "Red", "value": 0}, {"name": "Green", "value": 1}]},
        "structs": {"Foo": [{"name": "a", "type": "int"}], "ImVec2": [{"name": "x", "type": "float"}]}
    }"#;

    #[test]
    fn test_document_order() {
        let source = Source::from_json(DEFINITIONS, STRUCTS).unwrap();
        let names: Vec<_> = source.functions().map(|f| f.cimguiname.as_str()).collect();
        assert_eq!(names, ["igEnd", "igBegin"]);
        let structs: Vec<_> = source.structs().map(|s| s.name.as_str()).collect();
        assert_eq!(structs, ["Foo", "ImVec2"]);
        assert_eq!(source.enums().next().unwrap().members[1].name, "Green");
    }

    #[test]
    fn test_missing_second_catalog_is_reported_first() {
        let dir = tempfile::tempdir().unwrap();
        let definitions = dir.path().join("definitions.json");
        // Malformed on purpose: the missing file must win over the parse error
        fs::write(&definitions, "{").unwrap();
        let structs = dir.path().join("structs_and_enums.json");
        let err = Source::new(&definitions, &structs).unwrap_err();
        match err {
            Error::MissingInput(path) => assert_eq!(path, structs),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_sections_are_empty() {
        let source = Source::from_json("{}", "{}").unwrap();
        assert_eq!(source.functions().count(), 0);
        assert_eq!(source.structs().count(), 0);
        assert_eq!(source.enums().count(), 0);
    }
}
