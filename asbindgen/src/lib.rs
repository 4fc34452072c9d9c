//! # asbindgen
//!
//! Generates C++ glue code which registers the Dear ImGui API in an AngelScript engine.
//!
//! ## Problem
//!
//! Exposing a large C-style GUI library to a scripting engine means writing one registration
//! call per function, struct, struct field and enum value. For Dear ImGui that is well over a
//! thousand calls, and every library update changes some of them. Writing them by hand is
//! tedious and error prone.
//!
//! ## Solution
//!
//! The [cimgui](https://github.com/cimgui/cimgui) project already produces a machine readable
//! description of the whole ImGui API: `definitions.json` (function signatures) and
//! `structs_and_enums.json` (struct layouts and enum values). `asbindgen` reads these
//! catalogs and emits a single C++ file with a `RegisterInterface(asIScriptEngine*)` entry point
//! which performs all registrations through a small helper class.
//!
//! ## Usage example
//!
//! ```rust,no_run
//! use asbindgen::{Generator, Source};
//!
//! fn main() -> asbindgen::Result<()> {
//!     // Load both catalogs; a missing file is reported before anything is parsed
//!     let source = Source::new("definitions.json", "structs_and_enums.json")?;
//!
//!     // Configure the generator and run the pipeline
//!     let destination = Generator::builder()
//!         .verbose(true)
//!         .build()
//!         .generate(&source);
//!
//!     // Write the generated code atomically
//!     destination.write("as-imgui-gen.cpp")?;
//!     Ok(())
//! }
//! ```
//!
//! The individual stages are public as well, so the pipeline can be assembled by hand:
//!
//! ```rust,no_run
//! use asbindgen::{collect::Destination, emit::FunctionEmitter, Source};
//!
//! # fn main() -> asbindgen::Result<()> {
//! let source = Source::new("definitions.json", "structs_and_enums.json")?;
//! let emitter = FunctionEmitter::builder().verbose(false).build();
//! let destination = source
//!     .functions()
//!     .flat_map(|entry| emitter.call(entry).into_lines())
//!     .collect::<Destination>();
//! # let _ = destination;
//! # Ok(())
//! # }
//! ```

/// Default file name of the cimgui function catalog
pub const DEFINITIONS_FILE: &str = "definitions.json";

/// Default file name of the cimgui struct and enum catalog
pub const STRUCTS_AND_ENUMS_FILE: &str = "structs_and_enums.json";

/// Default file name of the generated C++ source
pub const OUTPUT_FILE: &str = "as-imgui-gen.cpp";

/// File name of the C++ header included by the generated source
pub const HEADER_FILE: &str = "as-imgui.hpp";

/// Column to which function declarations are padded in `RegFunction` calls
pub const DEFAULT_COLUMN_WIDTH: usize = 75;

/// Script type used in place of C strings
pub const DEFAULT_STRING_TYPE: &str = "string";

pub(crate) mod api;
pub(crate) mod codegen;
pub(crate) mod error;
pub(crate) mod utils;

pub use crate::api::blacklist::Blacklist;
pub use crate::api::catalog::{
    ArgEntry, EnumEntry, EnumMember, EnumValue, FieldEntry, FunctionEntry, StructEntry,
};
pub use crate::api::generator::{Builder, Generator};
pub use crate::api::source::Source;
pub use crate::codegen::flags::ObjectFlags;
pub use crate::error::{Error, Result};

/// Rules applied to parameters of function entries
pub mod map {
    pub use crate::api::map::rewrite_params::{ParamRewriter, ParamRule};
    pub mod rewrite_params {
        pub use crate::api::map::rewrite_params::Builder;
    }
}

/// Converters of catalog entries into registration statements
pub mod emit {
    pub use crate::api::emit::enums::EnumEmitter;
    pub use crate::api::emit::functions::{FunctionBinding, FunctionEmitter, FunctionOutcome};
    pub use crate::api::emit::structs::{FieldSupport, StructEmitter};
    pub mod enums {
        pub use crate::api::emit::enums::Builder;
    }
    pub mod functions {
        pub use crate::api::emit::functions::Builder;
    }
    pub mod structs {
        pub use crate::api::emit::structs::Builder;
    }
}

/// Collectors for sequences of generated lines produced by `collect`
pub mod collect {
    pub use crate::api::collect::destination::Destination;
}
