//! Raise-site capture.

use std::fmt;
use std::panic::Location;

use serde::Serialize;

use crate::trace;

/// Where an error was raised.
///
/// Captured once when the error is built and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SourceContext {
    file: String,
    line: u32,
    column: u32,
    function: String,
}

impl SourceContext {
    /// Build a context from an explicit location.
    pub fn new(
        file: impl Into<String>,
        line: u32,
        column: u32,
        function: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            function: function.into(),
        }
    }

    /// Capture the location of the caller.
    ///
    /// Every function between the raise site and this call must be
    /// `#[track_caller]` for the raise site to be recorded rather than a
    /// helper. The enclosing function name is looked up on the live stack
    /// and left empty when the binary carries no debug info.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    /// Capture the context of a `#[track_caller]` location.
    pub fn from_location(location: &Location<'_>) -> Self {
        let function = trace::function_at(location.file(), location.line());
        Self::new(location.file(), location.line(), location.column(), function)
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// Path of the enclosing function, or empty if it could not be resolved.
    pub fn function(&self) -> &str {
        &self.function
    }
}

impl fmt::Display for SourceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)?;
        if !self.function.is_empty() {
            write!(f, " in {}", self.function)?;
        }
        Ok(())
    }
}

/// Build a [`SourceContext`] for the macro call site without touching the
/// stack.
#[macro_export]
macro_rules! source_context {
    () => {
        $crate::SourceContext::new(::std::file!(), ::std::line!(), ::std::column!(), {
            fn f() {}
            fn type_name_of<T>(_: T) -> &'static str {
                ::std::any::type_name::<T>()
            }
            let name = type_name_of(f);
            name.strip_suffix("::f").unwrap_or(name)
        })
    };
}
