//! Rewrite function parameters by the spelling of their C type.
//! Mostly useful for replacing C types which have no script counterpart, e.g.
//! `const char*` with the script `string` type, or for removing C varargs.

use std::collections::HashMap;

use roxygen::roxygen;

use crate::{api::catalog::ArgEntry, DEFAULT_STRING_TYPE};

/// What happens to a parameter of a given type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamRule {
    /// Remove the parameter from the declaration
    Drop,
    /// Replace the type; parameters named like a key of `renames` also get a new name
    Retype {
        to: String,
        renames: HashMap<String, String>,
    },
}

pub struct Builder {
    rules: HashMap<String, ParamRule>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Remove parameters of the given type.
    ///
    /// # Example
    ///
    /// ```
    /// let rewriter = asbindgen::map::ParamRewriter::builder()
    ///     .drop_type("...")
    ///     .build();
    /// ```
    #[roxygen]
    pub fn drop_type<S: Into<String>>(
        mut self,
        /// Exact type spelling, e.g. `...`
        ty: S,
    ) -> Self {
        self.rules.insert(ty.into(), ParamRule::Drop);
        self
    }

    /// Replace one type spelling with another. Renames registered earlier for the
    /// same type are kept.
    #[roxygen]
    pub fn retype<S1: Into<String>, S2: Into<String>>(
        mut self,
        /// Exact type spelling to replace, e.g. `const char*`
        from: S1,
        /// Replacement type
        to: S2,
    ) -> Self {
        let to = to.into();
        let from = from.into();
        match self.rules.get_mut(&from) {
            Some(ParamRule::Retype { to: current, .. }) => *current = to,
            _ => {
                self.rules.insert(
                    from,
                    ParamRule::Retype {
                        to,
                        renames: HashMap::new(),
                    },
                );
            }
        }
        self
    }

    /// Rename parameters of a retyped type. Has no effect unless `retype` was called
    /// for the same type before.
    #[roxygen]
    pub fn rename<S1: Into<String>, S2: Into<String>, S3: Into<String>>(
        mut self,
        /// Type spelling the rule applies to
        ty: S1,
        /// Original parameter name
        from: S2,
        /// New parameter name
        to: S3,
    ) -> Self {
        let ty: String = ty.into();
        if let Some(ParamRule::Retype { renames, .. }) = self.rules.get_mut(&ty) {
            renames.insert(from.into(), to.into());
        }
        self
    }

    /// Build the ParamRewriter instance
    pub fn build(self) -> ParamRewriter {
        ParamRewriter { builder: self }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies [`ParamRule`]s to function parameters; types without a rule pass unchanged.
///
/// # Example
///
/// ```
/// use asbindgen::{map::ParamRewriter, ArgEntry};
///
/// let rewriter = ParamRewriter::imgui("string");
/// let fmt = ArgEntry::new("const char*", "fmt");
/// assert_eq!(rewriter.call(&fmt), Some(ArgEntry::new("string", "txt")));
/// assert_eq!(rewriter.call(&ArgEntry::new("...", "...")), None);
/// ```
pub struct ParamRewriter {
    builder: Builder,
}

impl ParamRewriter {
    /// Create a builder for creating a param rewriter instance
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// The ImGui rules: varargs are dropped (the preceding format string takes their
    /// role), C strings become `string_type` and `fmt`/`format` parameters are
    /// renamed to `txt` to stay clear of the engine's own format handling.
    pub fn imgui(string_type: &str) -> Self {
        Builder::new()
            .drop_type("...")
            .retype("const char*", string_type)
            .rename("const char*", "fmt", "txt")
            .rename("const char*", "format", "txt")
            .build()
    }

    /// Rewrite one parameter, `None` if it is dropped
    pub fn call(&self, arg: &ArgEntry) -> Option<ArgEntry> {
        match self.builder.rules.get(&arg.ty) {
            None => Some(arg.clone()),
            Some(ParamRule::Drop) => None,
            Some(ParamRule::Retype { to, renames }) => Some(ArgEntry {
                ty: to.clone(),
                name: renames.get(&arg.name).unwrap_or(&arg.name).clone(),
            }),
        }
    }

    /// Convert to closure to use with `filter_map`
    pub fn into_closure(self) -> impl FnMut(&ArgEntry) -> Option<ArgEntry> {
        move |arg| self.call(arg)
    }
}

impl Default for ParamRewriter {
    fn default() -> Self {
        Self::imgui(DEFAULT_STRING_TYPE)
    }
}
