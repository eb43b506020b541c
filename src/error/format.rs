use crate::error::{ErrorContext, InstallError};

/// One-line diagnostic for the package manager's log, e.g.
/// `kcdev: binary not found: /pkg/bin/linux-x64/kcdev`.
pub fn format_error_chain(error: &InstallError) -> String {
    format!("kcdev: {error}")
}

/// The one-line diagnostic followed by indented `details:` and `hint:` lines.
///
/// The first line is always identical to [`format_error_chain`], so tooling
/// that greps install logs sees the same text with or without `-v`.
pub fn format_error_verbose(error: &InstallError, use_color: bool) -> String {
    let (prefix, hint, reset) = if use_color {
        ("\x1b[1;31m", "\x1b[33m", "\x1b[0m")
    } else {
        ("", "", "")
    };

    let context = ErrorContext::new(error);
    let mut lines = vec![format!("{prefix}kcdev:{reset} {error}")];

    if let Some(details) = &context.details {
        lines.push(format!("  details: {details}"));
    }

    if let Some(suggestion) = &context.suggestion {
        lines.extend(
            suggestion
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| format!("  {hint}hint:{reset} {line}")),
        );
    }

    lines.join("\n")
}
