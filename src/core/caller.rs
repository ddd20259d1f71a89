//! Call-site resolution through the runtime stack
//!
//! A record's `func` and `filename` fields come from walking the live call
//! stack. The walk is indexed by a skip depth, which makes it the most
//! fragile contract in the crate; the depth bookkeeping is therefore
//! confined to this one function and the single constant in
//! `core::logger` that feeds it.

use backtrace::Backtrace;

/// Call-site metadata captured once per log call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerInfo {
    /// Unqualified function name of the caller.
    pub function: String,
    /// Final path segment of the caller's source file.
    pub file: String,
    /// 1-based source line of the call.
    pub line: u32,
}

impl CallerInfo {
    /// Render the source location as `[file:line]`; empty when unresolved.
    pub fn file_line(&self) -> String {
        if self.file.is_empty() {
            return String::new();
        }
        format!("[{}:{}]", self.file, self.line)
    }
}

/// Resolve the caller `skip_frames` stack frames above this function.
///
/// `skip_frames` must equal the number of frames between this function and
/// the call site being reported; every wrapper added or removed on that
/// path shifts the required value by one. The walk anchors on this
/// function's own frame by symbol name, so unwinder-internal frames below
/// it never count toward the depth.
///
/// An unresolvable stack (no anchor, depth past the outermost frame,
/// missing debug info) yields empty placeholder values; resolution failure
/// never panics and never aborts the logging call.
#[inline(never)]
pub fn resolve(skip_frames: usize) -> CallerInfo {
    let trace = Backtrace::new();
    let frames = trace.frames();

    let anchor = frames.iter().position(|frame| {
        frame.symbols().iter().any(|symbol| {
            symbol
                .name()
                .map_or(false, |name| format!("{:#}", name).ends_with("core::caller::resolve"))
        })
    });
    let Some(anchor) = anchor else {
        return CallerInfo::default();
    };

    let Some(frame) = frames.get(anchor + 1 + skip_frames) else {
        return CallerInfo::default();
    };
    let Some(symbol) = frame.symbols().first() else {
        return CallerInfo::default();
    };

    let function = symbol
        .name()
        .map(|name| short_function_name(&format!("{:#}", name)))
        .unwrap_or_default();
    let file = symbol
        .filename()
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let line = symbol.lineno().unwrap_or(0);

    CallerInfo {
        function,
        file,
        line,
    }
}

/// Last component of a demangled symbol, skipping closure segments:
/// `app::server::handle::{{closure}}` resolves to `handle`.
fn short_function_name(qualified: &str) -> String {
    qualified
        .rsplit("::")
        .find(|segment| *segment != "{{closure}}")
        .unwrap_or(qualified)
        .to_string()
}
