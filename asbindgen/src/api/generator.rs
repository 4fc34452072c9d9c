use roxygen::roxygen;

use crate::{
    api::{
        blacklist::Blacklist,
        collect::destination::Destination,
        emit::{
            enums::EnumEmitter,
            functions::{FunctionEmitter, FunctionOutcome},
            structs::StructEmitter,
        },
        map::rewrite_params::ParamRewriter,
        source::Source,
    },
    codegen::{scaffold, statements},
    DEFAULT_COLUMN_WIDTH, DEFAULT_STRING_TYPE,
};

/// Builder for configuring the Generator
///
/// The defaults reproduce the reference output: verbose comments, declarations padded to
/// 75 columns, C strings mapped to `string`, the ImGui blacklist, `ImVec2`, `ImVec4` and
/// `ImColor` registered first.
///
/// # Example
///
/// ```
/// let generator = asbindgen::Generator::builder()
///     .verbose(false)
///     .column_width(60)
///     .string_type("const string &in")
///     .blacklist(asbindgen::Blacklist::default().function("igShowDemoWindow"))
///     .script_namespace("ImGui")
///     .build();
/// ```
pub struct Builder {
    verbose: bool,
    skip_unsupported_fields: bool,
    column_width: usize,
    string_type: String,
    blacklist: Blacklist,
    param_rewriter: Option<ParamRewriter>,
    priority_structs: Option<Vec<String>>,
    all_floats_structs: Option<Vec<String>>,
    script_namespace: Option<String>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            verbose: true,
            skip_unsupported_fields: false,
            column_width: DEFAULT_COLUMN_WIDTH,
            string_type: DEFAULT_STRING_TYPE.to_string(),
            blacklist: Blacklist::default(),
            param_rewriter: None,
            priority_structs: None,
            all_floats_structs: None,
            script_namespace: None,
        }
    }

    /// Write debug comments with the original catalog signatures
    #[roxygen]
    pub fn verbose(
        mut self,
        /// Whether debug comments are written
        verbose: bool,
    ) -> Self {
        self.verbose = verbose;
        self
    }

    /// Leave out struct fields AngelScript cannot register as plain properties
    #[roxygen]
    pub fn skip_unsupported_fields(
        mut self,
        /// Whether arrays, bitfields, function pointers, inline unions and pointers are skipped
        skip: bool,
    ) -> Self {
        self.skip_unsupported_fields = skip;
        self
    }

    /// Set the column to which function declarations are padded
    #[roxygen]
    pub fn column_width(
        mut self,
        /// Minimal width of the declaration string literal contents
        width: usize,
    ) -> Self {
        self.column_width = width;
        self
    }

    /// Script type used in place of `const char*` parameters.
    /// Ignored if a custom [`ParamRewriter`] is set.
    #[roxygen]
    pub fn string_type<S: Into<String>>(
        mut self,
        /// Script type spelling, e.g. `string`
        ty: S,
    ) -> Self {
        self.string_type = ty.into();
        self
    }

    /// Replace the default ImGui blacklist
    #[roxygen]
    pub fn blacklist(
        mut self,
        /// Functions to exclude
        blacklist: Blacklist,
    ) -> Self {
        self.blacklist = blacklist;
        self
    }

    /// Replace the default parameter rules
    #[roxygen]
    pub fn param_rewriter(
        mut self,
        /// Rules applied to each function parameter
        rewriter: ParamRewriter,
    ) -> Self {
        self.param_rewriter = Some(rewriter);
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
        self.priority_structs = Some(names.into_iter().map(Into::into).collect());
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
        self.all_floats_structs = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Register global functions inside a script namespace
    #[roxygen]
    pub fn script_namespace<S: Into<String>>(
        mut self,
        /// Namespace name as seen by scripts
        name: S,
    ) -> Self {
        self.script_namespace = Some(name.into());
        self
    }

    /// Build the Generator instance
    pub fn build(self) -> Generator {
        let rewriter = self
            .param_rewriter
            .unwrap_or_else(|| ParamRewriter::imgui(&self.string_type));
        let function_emitter = FunctionEmitter::builder()
            .verbose(self.verbose)
            .column_width(self.column_width)
            .blacklist(self.blacklist)
            .param_rewriter(rewriter)
            .build();

        let mut struct_builder = StructEmitter::builder()
            .verbose(self.verbose)
            .skip_unsupported_fields(self.skip_unsupported_fields);
        if let Some(names) = self.priority_structs {
            struct_builder = struct_builder.priority_structs(names);
        }
        if let Some(names) = self.all_floats_structs {
            struct_builder = struct_builder.all_floats_structs(names);
        }

        Generator {
            enum_emitter: EnumEmitter::builder().verbose(self.verbose).build(),
            struct_emitter: struct_builder.build(),
            function_emitter,
            script_namespace: self.script_namespace,
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the whole pipeline: prologue, enums, structs, functions, epilogue
pub struct Generator {
    enum_emitter: EnumEmitter,
    struct_emitter: StructEmitter,
    function_emitter: FunctionEmitter,
    script_namespace: Option<String>,
}

impl Generator {
    /// Create a builder for configuring a generator instance
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// The `as-imgui.hpp` header included by the generated code
    ///
    /// It does not depend on the catalogs; write it next to the generated source.
    pub fn header() -> Destination {
        let mut destination = Destination::new();
        destination.push_block(scaffold::HEADER);
        destination
    }

    /// Generate the registration code for everything in `source`
    ///
    /// The result depends only on `source` and the configuration, so generating twice
    /// from the same catalogs gives identical output.
    pub fn generate(&self, source: &Source) -> Destination {
        let mut destination = Destination::new();
        destination.push_block(scaffold::PROLOGUE);

        for entry in source.enums() {
            destination.extend(self.enum_emitter.call(entry));
        }

        let structs = self.struct_emitter.ordered(source.structs());
        for entry in &structs {
            destination.extend(self.struct_emitter.call(entry));
        }

        if let Some(ns) = &self.script_namespace {
            destination.push("");
            destination.push(statements::set_namespace(ns));
        }
        let (mut bound, mut methods, mut blacklisted) = (0usize, 0usize, 0usize);
        for entry in source.functions() {
            let outcome = self.function_emitter.call(entry);
            match &outcome {
                FunctionOutcome::Bound(_) => bound += 1,
                FunctionOutcome::Method => methods += 1,
                FunctionOutcome::Blacklisted { .. } => blacklisted += 1,
            }
            destination.extend(outcome.into_lines());
        }
        if self.script_namespace.is_some() {
            destination.push(statements::set_namespace(""));
        }

        destination.push_block(scaffold::EPILOGUE);

        tracing::info!(
            "Registered {} enums, {} structs, {} functions ({} methods and {} blacklisted skipped)",
            source.enums().count(),
            structs.len(),
            bound,
            methods,
            blacklisted
        );
        destination
    }
}

impl Default for Generator {
    fn default() -> Self {
        Builder::new().build()
    }
}
