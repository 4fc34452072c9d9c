//! Functions which are never registered.

use std::collections::HashSet;

use roxygen::roxygen;

/// C vararg helpers; the `...` variants are registered instead
const VARARG_HELPERS: &[&str] = &[
    "igBulletTextV",
    "igTextColoredV",
    "igTextDisabledV",
    "igTextWrappedV",
    "igTextV",
    "igTreeNodeExV",
    "igTreeNodeV",
    "igLabelTextV",
    "igSetTooltipV",
];

/// Too low-level for a scripting interface
const LOW_LEVEL: &[&str] = &[
    "igCaptureKeyboardFromApp",
    "igCaptureMouseFromApp",
    "igMemAlloc",
    "igMemFree",
    "igSaveIniSettingsToDisk",
    "igSaveIniSettingsToMemory",
    "SetAllocatorFunctions",
];

/// Logging is not exposed to scripts
const LOGGING: &[&str] = &[
    "LogToTTY",
    "LogToFile",
    "LogToClipboard",
    "LogText",
    "LogButtons",
    "LogFinish",
];

/// Set of canonical function identifiers (`cimguiname`) excluded from generation.
///
/// Matching is exact: `igTextV` does not exclude `igText`.
///
/// # Example
///
/// ```
/// let blacklist = asbindgen::Blacklist::default().function("igShowDemoWindow");
/// assert!(blacklist.contains("igShowDemoWindow"));
/// assert!(blacklist.contains("igTextV"));
/// assert!(!blacklist.contains("igText"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blacklist {
    functions: HashSet<String>,
}

impl Blacklist {
    /// A blacklist which excludes nothing
    pub fn empty() -> Self {
        Self {
            functions: HashSet::new(),
        }
    }

    /// Add a function to the blacklist
    #[roxygen]
    pub fn function<S: Into<String>>(
        mut self,
        /// Canonical identifier as found in the `cimguiname` key
        cimguiname: S,
    ) -> Self {
        self.functions.insert(cimguiname.into());
        self
    }

    pub fn contains(&self, cimguiname: &str) -> bool {
        self.functions.contains(cimguiname)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl Default for Blacklist {
    /// The ImGui blacklist
    fn default() -> Self {
        VARARG_HELPERS
            .iter()
            .chain(LOW_LEVEL)
            .chain(LOGGING)
            .fold(Self::empty(), |blacklist, name| blacklist.function(*name))
    }
}
