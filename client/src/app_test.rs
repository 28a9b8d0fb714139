const INDEX_HTML: &str = include_str!("../index.html");
const MANIFEST: &str = include_str!("../Cargo.toml");

// =============================================================================
// entry point wiring
// =============================================================================

#[test]
fn index_page_builds_the_browser_binary() {
    assert!(INDEX_HTML.contains(r#"data-trunk rel="rust""#));
    assert!(INDEX_HTML.contains(r#"data-bin="client""#));
    assert!(INDEX_HTML.contains(r#"data-cargo-features="csr""#));
}

#[test]
fn browser_binary_requires_csr_feature() {
    let bin = MANIFEST
        .split("[[bin]]")
        .nth(1)
        .expect("manifest declares a binary");
    let bin = bin.split("\n[").next().expect("binary table");
    assert!(bin.contains(r#"name = "client""#));
    assert!(bin.contains(r#"path = "src/main.rs""#));
    assert!(bin.contains(r#"required-features = ["csr"]"#));
}

#[test]
fn csr_feature_enables_leptos_client_rendering() {
    let csr = MANIFEST
        .split("\ncsr = [")
        .nth(1)
        .and_then(|rest| rest.split(']').next())
        .expect("csr feature");
    assert!(csr.contains(r#""leptos/csr""#));
    assert!(!MANIFEST.contains("hydrate"));
}
