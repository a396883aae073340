//! Fixed template asset table

/// Whether a source names one file or a directory of files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum AssetKind {
    File,
    Directory,
}

/// A (source-name, destination-path) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateAsset {
    /// Name inside the embedded template folder
    pub source: &'static str,
    /// Path relative to the destination root
    pub destination: &'static str,
    pub(super) kind: AssetKind,
}

impl TemplateAsset {
    pub const fn file(source: &'static str, destination: &'static str) -> Self {
        Self {
            source,
            destination,
            kind: AssetKind::File,
        }
    }

    pub const fn directory(source: &'static str, destination: &'static str) -> Self {
        Self {
            source,
            destination,
            kind: AssetKind::Directory,
        }
    }
}

/// Assets copied into every project, in copy order
pub const PROJECT_ASSETS: &[TemplateAsset] = &[
    TemplateAsset::file("index.html", "app/index.html"),
    TemplateAsset::directory("scss", "app/scss"),
    TemplateAsset::directory("js", "app/js"),
    TemplateAsset::directory("images", "images"),
    TemplateAsset::file("config.ini", "config.ini"),
    TemplateAsset::file("gulpfile.js", "gulpfile.js"),
];

/// Ignore rules, copied only when git is enabled
pub const VCS_IGNORE_ASSET: TemplateAsset = TemplateAsset::file("gitignore", ".gitignore");
