use itertools::Itertools;
use roxygen::roxygen;

use crate::{
    api::{blacklist::Blacklist, catalog::FunctionEntry, map::rewrite_params::ParamRewriter},
    codegen::statements,
    DEFAULT_COLUMN_WIDTH,
};

/// Builder for configuring FunctionEmitter instances
///
/// # Example
///
/// ```
/// let emitter = asbindgen::emit::FunctionEmitter::builder()
///     .verbose(false)
///     .column_width(60)
///     .blacklist(asbindgen::Blacklist::default().function("igShowDemoWindow"))
///     .build();
/// ```
pub struct Builder {
    verbose: bool,
    column_width: usize,
    blacklist: Blacklist,
    rewriter: ParamRewriter,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            verbose: true,
            column_width: DEFAULT_COLUMN_WIDTH,
            blacklist: Blacklist::default(),
            rewriter: ParamRewriter::default(),
        }
    }

    /// Emit a comment with the catalog signature before each statement
    #[roxygen]
    pub fn verbose(
        mut self,
        /// Whether debug comments are written
        verbose: bool,
    ) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the column to which declarations are padded
    #[roxygen]
    pub fn column_width(
        mut self,
        /// Minimal width of the declaration string literal contents
        width: usize,
    ) -> Self {
        self.column_width = width;
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

    /// Replace the default ImGui parameter rules
    #[roxygen]
    pub fn param_rewriter(
        mut self,
        /// Rules applied to each parameter
        rewriter: ParamRewriter,
    ) -> Self {
        self.rewriter = rewriter;
        self
    }

    /// Build the FunctionEmitter instance
    pub fn build(self) -> FunctionEmitter {
        FunctionEmitter { builder: self }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

/// A free function ready for registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionBinding {
    /// Script declaration, e.g. `void Text(string txt)`
    pub declaration: String,
    /// `h.RegFunction(...)` statement
    pub statement: String,
    /// Debug comment with the catalog signature, verbose mode only
    pub comment: Option<String>,
}

/// Result of processing one function entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionOutcome {
    /// Member of a struct; methods are not bound
    Method,
    /// Excluded by the blacklist; the comment is present in verbose mode
    Blacklisted { comment: Option<String> },
    Bound(FunctionBinding),
}

impl FunctionOutcome {
    /// Lines to append to the output, each comment preceded by a blank line
    pub fn into_lines(self) -> Vec<String> {
        match self {
            FunctionOutcome::Method => vec![],
            FunctionOutcome::Blacklisted { comment: None } => vec![],
            FunctionOutcome::Blacklisted {
                comment: Some(comment),
            } => vec![String::new(), comment],
            FunctionOutcome::Bound(FunctionBinding {
                statement,
                comment: None,
                ..
            }) => vec![statement],
            FunctionOutcome::Bound(FunctionBinding {
                statement,
                comment: Some(comment),
                ..
            }) => vec![String::new(), comment, statement],
        }
    }
}

/// Converts function catalog entries into `RegFunction` statements
pub struct FunctionEmitter {
    builder: Builder,
}

impl FunctionEmitter {
    /// Create a builder for configuring a function emitter instance
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Process one catalog entry
    ///
    /// Methods are recognized before the blacklist is consulted, so nothing at all is
    /// emitted for them.
    pub fn call(&self, entry: &FunctionEntry) -> FunctionOutcome {
        if entry.is_method() {
            tracing::debug!("Skipping method {}", entry.cimguiname);
            return FunctionOutcome::Method;
        }
        if self.builder.blacklist.contains(&entry.cimguiname) {
            tracing::debug!("Skipping blacklisted function {}", entry.cimguiname);
            let comment = self.builder.verbose.then(|| {
                statements::comment(&format!(
                    "{}{} -- Blacklisted",
                    entry.cimguiname, entry.signature
                ))
            });
            return FunctionOutcome::Blacklisted { comment };
        }

        let declaration = self.declaration(entry);
        let statement = statements::reg_function(
            &declaration,
            self.builder.column_width,
            &entry.qualified_name(),
        );
        let comment = self
            .builder
            .verbose
            .then(|| statements::comment(&format!("{}{}", entry.cimguiname, entry.signature)));
        FunctionOutcome::Bound(FunctionBinding {
            declaration,
            statement,
            comment,
        })
    }

    /// Script declaration `<ret> <funcname>(<args>)` with parameter rules applied
    pub fn declaration(&self, entry: &FunctionEntry) -> String {
        let args = entry
            .args
            .iter()
            .filter_map(|arg| self.builder.rewriter.call(arg))
            .map(|arg| {
                if arg.name.is_empty() {
                    arg.ty
                } else {
                    format!("{} {}", arg.ty, arg.name)
                }
            })
            .join(", ");
        format!("{} {}({})", entry.ret, entry.funcname, args)
    }
}

impl Default for FunctionEmitter {
    fn default() -> Self {
        Builder::new().build()
    }
}
