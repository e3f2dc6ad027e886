//! Source-level lints that clippy config does not cover for us.
//!
//! Non-test code must propagate errors instead of panicking on them, so
//! `.unwrap()` and `.expect(..)` are only allowed inside `#[test]` functions
//! and `#[cfg(test)]` modules.

use std::path::{Path, PathBuf};

use syn::visit::{self, Visit};
use walkdir::WalkDir;

const FORBIDDEN: &[&str] = &["unwrap", "expect"];

fn is_test_attr(attr: &syn::Attribute) -> bool {
    if attr.path().is_ident("test") {
        return true;
    }
    attr.path().is_ident("cfg")
        && attr
            .parse_args::<syn::Ident>()
            .map(|ident| ident == "test")
            .unwrap_or(false)
}

#[derive(Default)]
struct PanicFinder {
    current_fn: Vec<String>,
    hits: Vec<String>,
}

impl<'ast> Visit<'ast> for PanicFinder {
    fn visit_item_mod(&mut self, node: &'ast syn::ItemMod) {
        if node.attrs.iter().any(is_test_attr) {
            return;
        }
        visit::visit_item_mod(self, node);
    }

    fn visit_item_fn(&mut self, node: &'ast syn::ItemFn) {
        if node.attrs.iter().any(is_test_attr) {
            return;
        }
        self.current_fn.push(node.sig.ident.to_string());
        visit::visit_item_fn(self, node);
        self.current_fn.pop();
    }

    fn visit_impl_item_fn(&mut self, node: &'ast syn::ImplItemFn) {
        self.current_fn.push(node.sig.ident.to_string());
        visit::visit_impl_item_fn(self, node);
        self.current_fn.pop();
    }

    fn visit_expr_method_call(&mut self, node: &'ast syn::ExprMethodCall) {
        let method = node.method.to_string();
        if FORBIDDEN.contains(&method.as_str()) {
            let location = self
                .current_fn
                .last()
                .cloned()
                .unwrap_or_else(|| "<item>".to_string());
            self.hits.push(format!(".{method}() in {location}"));
        }
        visit::visit_expr_method_call(self, node);
    }
}

fn rust_sources(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

fn scan(source: &str) -> Vec<String> {
    let file = syn::parse_file(source).unwrap();
    let mut finder = PanicFinder::default();
    finder.visit_file(&file);
    finder.hits
}

#[test]
fn test_no_unwrap_or_expect_outside_tests() {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let roots = [manifest_dir.join("src"), manifest_dir.join("danceverse-model/src")];

    let mut violations = Vec::new();
    let mut scanned = 0;
    for root in &roots {
        for path in rust_sources(root) {
            let source = std::fs::read_to_string(&path).unwrap();
            scanned += 1;
            for hit in scan(&source) {
                violations.push(format!("{}: {hit}", path.display()));
            }
        }
    }

    assert!(scanned > 0, "no sources found under {roots:?}");
    assert!(
        violations.is_empty(),
        "panicking calls in non-test code:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_finder_skips_test_code() {
    let source = r#"
        fn load() -> Option<u8> { Some(1) }

        #[cfg(test)]
        mod tests {
            #[test]
            fn test_load() { super::load().unwrap(); }
        }
    "#;
    assert!(scan(source).is_empty());
}

#[test]
fn test_finder_flags_production_unwrap() {
    let source = r#"
        struct Loader;
        impl Loader {
            fn read(&self) -> u8 { "1".parse().expect("number") }
        }
        fn main() { Some(1).unwrap(); }
    "#;
    let hits = scan(source);
    assert_eq!(hits, vec![".expect() in read", ".unwrap() in main"]);
}
