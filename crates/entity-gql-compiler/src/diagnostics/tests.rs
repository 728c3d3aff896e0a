use super::*;

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::MissingKeyId, "$.relationships[0]")
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.warning_count(), 1);
    assert_eq!(diagnostics.error_count(), 0);

    let diag = diagnostics.iter().next().unwrap();
    assert_eq!(diag.message(), "relationship skipped: `keyId` is missing");
    assert_eq!(diag.hints().len(), 1);
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::IgnoredArgument, "args[2]")
        .message("selector")
        .hint("pass the selector second or third")
        .emit();

    let diag = diagnostics.iter().next().unwrap();
    assert_eq!(diag.message(), "selector argument ignored");
    assert_eq!(diag.hints(), ["pass the selector second or third"]);
}

#[test]
fn counts_by_severity() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnbalancedBraces, "fragments[0]")
        .emit();
    diagnostics
        .report(DiagnosticKind::DuplicateField, "$.relationships[1]")
        .message("owner")
        .emit();

    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(diagnostics.warning_count(), 1);
}

#[test]
fn display_single_line() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnbalancedBraces, "fragments[1]")
        .emit();
    let diag = diagnostics.iter().next().unwrap();
    insta::assert_snapshot!(diag.to_string(), @"error: unbalanced braces in fragment at fragments[1]");
}

#[test]
fn render_plain() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::MissingKeyValue, "$.relationships[2]")
        .emit();
    diagnostics
        .report(DiagnosticKind::IgnoredArgument, "args[0]")
        .message("selector")
        .emit();

    insta::assert_snapshot!(diagnostics.render(), @r"
    warning: relationship skipped: `keyValue` is missing
      --> $.relationships[2]
      = help: relationships are compiled only when both `keyId` and `keyValue` are strings

    warning: selector argument ignored
      --> args[0]
    ");
}

#[test]
fn render_without_hints() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::MissingKeyId, "$").emit();

    let out = diagnostics.printer().hints(false).render();
    assert_eq!(out, "warning: relationship skipped: `keyId` is missing\n  --> $\n");
}

#[test]
fn render_colored_uses_ansi() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::UnbalancedBraces, "x").emit();

    assert!(diagnostics.render_colored(true).contains("\x1b[31m"));
    assert!(!diagnostics.render_colored(false).contains('\x1b'));
}

#[test]
fn policy_check() {
    let mut diagnostics = Diagnostics::new();
    assert!(!Policy::Strict.rejects(&diagnostics));

    diagnostics.report(DiagnosticKind::MissingKeyId, "$").emit();
    assert!(Policy::Strict.rejects(&diagnostics));
    assert!(!Policy::Lenient.rejects(&diagnostics));

    assert_eq!(Policy::Lenient.check(7, diagnostics.clone()).unwrap(), 7);
    assert!(Policy::Strict.check(7, diagnostics).is_err());
}
