//! Flag grammar checks through the public API.

use marble_core::prelude::*;

fn parse(tokens: &[&str], framework: Option<FrameworkKind>) -> FlagSet {
    let registry = FlagRegistry::builtin();
    ArgumentParser::new(&registry).parse(tokens, framework)
}

#[test]
fn undeclared_flags_never_fail_and_stay_empty() {
    for flag in ["--x", "--verbose", "--install", "--", "---weird"] {
        let flags = parse(&["express", "app", flag, "value"], Some(FrameworkKind::Express));
        assert_eq!(flags.values(flag), Some(&[][..]), "flag {flag}");
    }
}

#[test]
fn full_express_invocation() {
    let flags = parse(
        &[
            "express",
            "shop",
            "--use-nodemon",
            "--install-packages",
            "cors",
            "dotenv",
            "--use-express-session",
            "--debug",
        ],
        Some(FrameworkKind::Express),
    );

    assert_eq!(flags.len(), 4);
    assert_eq!(
        flags.values("--install-packages").unwrap(),
        ["cors", "dotenv"]
    );
    assert!(flags.contains("--use-nodemon"));
    assert!(flags.contains("--use-express-session"));
    assert!(flags.contains("--debug"));
}

#[test]
fn variadic_flag_with_nothing_after_is_empty() {
    let flags = parse(&["express", "shop", "--install-packages"], None);
    assert_eq!(flags.values("--install-packages"), Some(&[][..]));
}

#[test]
fn registry_frameworks_match_builtin() {
    let frameworks = FrameworkRegistry::builtin();
    assert!(frameworks.is_supported("express"));
    assert!(frameworks.is_supported("react"));
    assert!(frameworks.is_supported("vue"));
    assert!(!frameworks.is_supported("angular"));
}
