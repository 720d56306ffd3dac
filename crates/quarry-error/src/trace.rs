//! Call stack inspection.
//!
//! Both helpers walk the live stack with the `backtrace` crate. Resolution
//! needs debug info; without it they degrade to empty results and never panic.

use std::path::Path;

use backtrace::SymbolName;

/// Upper bound on the number of `file:line` entries in a captured trace.
pub const MAX_TRACE_FRAMES: usize = 50;

const ANCHOR: &str = "capture_trace";

/// Capture the current call stack as `file:line,file:line,...`.
///
/// The walk starts at the caller of this function, moves `skip` further
/// frames up, and stops when the stack is exhausted or
/// [`MAX_TRACE_FRAMES`] entries have been collected. File names are reduced
/// to their last path segment. Frames without file or line information are
/// left out.
#[inline(never)]
pub fn capture_trace(skip: usize) -> String {
    let mut entries: Vec<String> = Vec::new();
    let mut anchored = false;
    let mut remaining = skip;

    backtrace::trace(|frame| {
        // Inlined calls show up as several symbols on one frame.
        backtrace::resolve_frame(frame, |symbol| {
            if entries.len() >= MAX_TRACE_FRAMES {
                return;
            }
            if !anchored {
                anchored = symbol.name().is_some_and(|name| is_anchor(&name));
                return;
            }
            if remaining > 0 {
                remaining -= 1;
                return;
            }
            if let (Some(file), Some(line)) = (symbol.filename(), symbol.lineno()) {
                entries.push(format!("{}:{}", base_name(file), line));
            }
        });
        entries.len() < MAX_TRACE_FRAMES
    });

    entries.join(",")
}

/// Find the function executing `file:line` on the current stack.
///
/// `file` may be relative (as produced by `file!()` or
/// [`std::panic::Location`]); it is matched as a path suffix. Returns the
/// demangled path without its hash, or an empty string.
pub fn function_at(file: &str, line: u32) -> String {
    let wanted = Path::new(file);
    let mut found = None;

    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if found.is_some() || symbol.lineno() != Some(line) {
                return;
            }
            if symbol.filename().is_some_and(|path| path.ends_with(wanted)) {
                found = symbol.name().map(|name| format!("{name:#}"));
            }
        });
        found.is_none()
    });

    found.unwrap_or_default()
}

/// Last path segment of `path`, or the whole path if it has none.
pub(crate) fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn is_anchor(name: &SymbolName<'_>) -> bool {
    format!("{name:#}").ends_with(ANCHOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_trace_shaped(trace: &str) -> bool {
        trace.split(',').all(|entry| match entry.rsplit_once(':') {
            Some((file, line)) => {
                !file.is_empty() && !file.contains('/') && line.parse::<u32>().is_ok()
            }
            None => false,
        })
    }

    #[test]
    fn test_capture_trace_format() {
        let trace = capture_trace(0);
        assert!(!trace.is_empty());
        assert!(is_trace_shaped(&trace), "unexpected trace {trace:?}");
        assert!(!trace.ends_with(','));
    }

    #[test]
    fn test_capture_trace_starts_at_caller() {
        let trace = capture_trace(0);
        let first = trace.split(',').next().unwrap();
        assert!(first.starts_with("trace.rs:"), "first frame was {first:?}");
    }

    #[test]
    fn test_capture_trace_is_capped() {
        fn recurse(depth: usize) -> String {
            if depth == 0 {
                capture_trace(0)
            } else {
                let trace = recurse(depth - 1);
                std::hint::black_box(trace)
            }
        }

        let trace = recurse(MAX_TRACE_FRAMES + 10);
        assert_eq!(trace.split(',').count(), MAX_TRACE_FRAMES);
    }

    #[test]
    fn test_function_at_resolves_current_function() {
        let function = function_at(file!(), line!());
        assert!(
            function.ends_with("test_function_at_resolves_current_function"),
            "resolved {function:?}"
        );
    }

    #[test]
    fn test_function_at_unknown_location() {
        assert_eq!(function_at("no/such/file.rs", 1), "");
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name(Path::new("/a/b/c.rs")), "c.rs");
        assert_eq!(base_name(Path::new("c.rs")), "c.rs");
    }
}
