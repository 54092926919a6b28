use super::commands::navigate_with;
use super::*;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_classify() {
    match parse(&["sitelink", "classify", "https://example.com/file.pdf"]) {
        CliCommand::Classify { target } => assert_eq!(target.as_str(), "https://example.com/file.pdf"),
        _ => panic!("expected Classify"),
    }
}

#[test]
fn cli_parse_hash_target() {
    match parse(&["sitelink", "classify", "#specific-section"]) {
        CliCommand::Classify { target } => assert_eq!(target.as_str(), "#specific-section"),
        _ => panic!("expected Classify"),
    }
}

#[test]
fn cli_parse_dispatch_defaults() {
    match parse(&["sitelink", "dispatch", "/glossary/term/"]) {
        CliCommand::Dispatch(args) => {
            assert_eq!(args.target.as_str(), "/glossary/term/");
            assert!(!args.hide_arrow);
            assert!(!args.exact);
            assert!(!args.click);
            let options = args.link_options(&SiteConfig::default());
            assert!(options.is_partially_active);
            assert!(options.custom_event.is_none());
        }
        _ => panic!("expected Dispatch"),
    }
}

#[test]
fn cli_parse_dispatch_flags() {
    match parse(&[
        "sitelink",
        "dispatch",
        "https://metamask.io/",
        "--hide-arrow",
        "--exact",
        "--rtl",
        "--locale",
        "ar",
        "--event-category",
        "Wallets",
        "--click",
    ]) {
        CliCommand::Dispatch(args) => {
            assert!(args.click);
            let options = args.link_options(&SiteConfig::default());
            assert!(options.hide_arrow);
            assert!(!options.is_partially_active);
            assert_eq!(options.locale.as_deref(), Some("ar"));
            let event = options.custom_event.unwrap();
            assert_eq!(event.category, "Wallets");
            assert_eq!(event.action, "Clicked");
            assert_eq!(event.label, "https://metamask.io/");
        }
        _ => panic!("expected Dispatch"),
    }
}

#[test]
fn cli_parse_navigate() {
    match parse(&["sitelink", "navigate", "/page/", "de", "--replace"]) {
        CliCommand::Navigate(args) => {
            assert_eq!(args.path, "/page/");
            assert_eq!(args.locale.as_deref(), Some("de"));
            assert!(args.replace);
            assert!(!args.prerender);
        }
        _ => panic!("expected Navigate"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["sitelink", "config", "--config", "/tmp/site.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/site.toml")));
    assert!(matches!(cli.command, CliCommand::Config));
}

#[test]
fn navigate_writes_locale_prefixed_destination() {
    let cli = Cli::try_parse_from(["sitelink", "navigate", "/page/", "de"]).unwrap();
    let CliCommand::Navigate(args) = cli.command else {
        panic!("expected Navigate");
    };
    let out = navigate_with(&SiteConfig::default(), &args, Vec::new()).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "push /de/page/\n");
}

#[test]
fn navigate_uses_default_locale() {
    let cli = Cli::try_parse_from(["sitelink", "navigate", "/page/", "--replace"]).unwrap();
    let CliCommand::Navigate(args) = cli.command else {
        panic!("expected Navigate");
    };
    let out = navigate_with(&SiteConfig::default(), &args, Vec::new()).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "replace /en/page/\n");
}

#[test]
fn navigate_prerender_writes_nothing() {
    let cli =
        Cli::try_parse_from(["sitelink", "navigate", "/page/", "de", "--prerender"]).unwrap();
    let CliCommand::Navigate(args) = cli.command else {
        panic!("expected Navigate");
    };
    let out = navigate_with(&SiteConfig::default(), &args, Vec::new()).unwrap();
    assert!(out.is_empty());
}
