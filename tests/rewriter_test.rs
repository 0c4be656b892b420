use imgmirror::ContentRewriter;

#[test]
fn substitutes_and_counts_per_reference() {
    let content = r#"<img src="https://a.example/1.jpg"><img src="https://a.example/2.jpg">"#;
    let mut rewriter = ContentRewriter::new(content.to_string(), None);

    rewriter.substitute("https://a.example/1.jpg", "/local/1.jpg");
    rewriter.substitute("https://a.example/2.jpg", "/local/2.jpg");

    let (rewritten, count) = rewriter.finish();
    assert_eq!(count, 2);
    assert_eq!(rewritten, r#"<img src="/local/1.jpg"><img src="/local/2.jpg">"#);
}

#[test]
fn one_substitution_replaces_every_occurrence() {
    // A repeated URL is replaced everywhere but counted once.
    let content = "x https://a.example/1.jpg y https://a.example/1.jpg z";
    let mut rewriter = ContentRewriter::new(content.to_string(), None);

    rewriter.substitute("https://a.example/1.jpg", "/local/1.jpg");

    let (rewritten, count) = rewriter.finish();
    assert_eq!(count, 1);
    assert_eq!(rewritten, "x /local/1.jpg y /local/1.jpg z");
}

#[test]
fn reports_capacity_once_cap_is_reached() {
    let mut rewriter = ContentRewriter::new("a b c".to_string(), Some(2));
    assert!(!rewriter.at_capacity());

    rewriter.substitute("a", "1");
    assert!(!rewriter.at_capacity());

    rewriter.substitute("b", "2");
    assert!(rewriter.at_capacity());
    assert_eq!(rewriter.replaced(), 2);
}

#[test]
fn uncapped_rewriter_never_reaches_capacity() {
    let mut rewriter = ContentRewriter::new("a b c d".to_string(), None);
    for needle in ["a", "b", "c", "d"] {
        assert!(!rewriter.at_capacity());
        rewriter.substitute(needle, "_");
    }
    assert!(!rewriter.at_capacity());
    assert_eq!(rewriter.replaced(), 4);
}
