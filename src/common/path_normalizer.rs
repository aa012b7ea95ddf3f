//! Path normalization for archive keys
//!
//! Archive entries are addressed by forward-slash keys relative to some base
//! directory, independent of the host path conventions.

use std::path::{Component, Path};

/// Compute the archive key of `file_path` relative to `base_path`
///
/// Components are joined with `/` whatever the host separator is. If
/// `file_path` is not beneath `base_path` the whole path is normalized instead.
pub fn normalize(base_path: &Path, file_path: &Path) -> String {
    let relative = file_path.strip_prefix(base_path).unwrap_or(file_path);

    let parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => None,
        })
        .collect();

    parts.join("/").replace('\\', "/")
}

/// Archive key for a file owned by a module: `<name>/<relative from module dir>`
pub fn module_key(name: &str, module_dir: &Path, file_path: &Path) -> String {
    format!("{name}/{}", normalize(module_dir, file_path))
}

/// Archive key relative to the grandparent of `file_path`
///
/// Used for top-level config markers and bundles, which keep the name of the
/// directory they live in: `<root>/shop/module.json` becomes `shop/module.json`.
pub fn parent_relative_key(file_path: &Path) -> String {
    let base = file_path
        .parent()
        .and_then(Path::parent)
        .unwrap_or_else(|| Path::new(""));
    normalize(base, file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_normalize_nested_file() {
        let base = PathBuf::from("/srv/modules");
        let file = base.join("a").join("b.txt");
        assert_eq!(normalize(&base, &file), "a/b.txt");
    }

    #[test]
    fn test_normalize_direct_child() {
        let base = PathBuf::from("/srv/modules/shop");
        assert_eq!(normalize(&base, &base.join("boot.js")), "boot.js");
    }

    #[test]
    fn test_normalize_relative_base() {
        let base = PathBuf::from("roots/one");
        let file = PathBuf::from("roots/one/shop/classes/Cart.js");
        assert_eq!(normalize(&base, &file), "shop/classes/Cart.js");
    }

    #[test]
    fn test_normalize_outside_base() {
        let base = PathBuf::from("/srv/modules");
        let file = PathBuf::from("/elsewhere/x.js");
        assert_eq!(normalize(&base, &file), "elsewhere/x.js");
    }

    #[test]
    fn test_module_key() {
        let dir = PathBuf::from("/r/shop/catalog");
        let file = dir.join("classes").join("Item.js");
        assert_eq!(
            module_key("shop.catalog", &dir, &file),
            "shop.catalog/classes/Item.js"
        );
    }

    #[test]
    fn test_parent_relative_key() {
        let file = PathBuf::from("/r/shop/module.json");
        assert_eq!(parent_relative_key(&file), "shop/module.json");

        let bundle = PathBuf::from("/r/bundles/app.js");
        assert_eq!(parent_relative_key(&bundle), "bundles/app.js");
    }
}
