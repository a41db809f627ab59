//! Extension-based categorization for type-mode organization.
//!
//! A [`CategoryTable`] is an ordered list of named categories, each owning a set of
//! lowercase extensions (leading dot included). The table is an immutable value handed
//! to the organizer, so callers and tests can swap in their own.
//!
//! # Examples
//!
//! ```
//! use dirsort::file_category::CategoryTable;
//!
//! let table = CategoryTable::default();
//! assert_eq!(table.classify(".png"), "Images");
//! assert_eq!(table.classify(".PDF"), "Documents");
//! assert_eq!(table.classify(""), "Others");
//! ```

use std::collections::HashSet;
use std::path::Path;

/// Folder used for files whose extension matches no category.
pub const FALLBACK_CATEGORY: &str = "Others";

/// A named group of file extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// The category name, also used as the destination folder name.
    pub name: String,
    /// Lowercase extensions including the leading dot.
    pub extensions: HashSet<String>,
}

impl Category {
    /// Creates a category, normalizing every extension to lowercase with a leading dot.
    pub fn new<I, S>(name: &str, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| normalize_extension(ext.as_ref()))
            .filter(|ext| !ext.is_empty())
            .collect();

        Self {
            name: name.to_string(),
            extensions,
        }
    }

    /// Returns true if this category claims the given extension.
    pub fn contains(&self, ext: &str) -> bool {
        self.extensions.contains(ext)
    }
}

/// Ordered mapping from category name to extension set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    /// Creates a table from an ordered list of categories.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Returns the categories in lookup order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns the category name for an extension.
    ///
    /// The input is compared case-insensitively and must match exactly (no globbing).
    /// Unknown or empty extensions map to [`FALLBACK_CATEGORY`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dirsort::file_category::CategoryTable;
    ///
    /// let table = CategoryTable::default();
    /// assert_eq!(table.classify(".mp3"), "Audio");
    /// assert_eq!(table.classify(".unknown"), "Others");
    /// ```
    pub fn classify(&self, ext: &str) -> &str {
        let ext = normalize_extension(ext);
        self.categories
            .iter()
            .find(|category| category.contains(&ext))
            .map(|category| category.name.as_str())
            .unwrap_or(FALLBACK_CATEGORY)
    }

    /// Classifies a path by its extension.
    pub fn classify_path(&self, path: &Path) -> &str {
        self.classify(&extension_key(path))
    }

    /// Returns every destination folder name in table order, followed by the fallback.
    ///
    /// Each name appears once even if the table itself defines the fallback category.
    pub fn folder_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.categories.len() + 1);
        for category in &self.categories {
            if !names.contains(&category.name.as_str()) {
                names.push(&category.name);
            }
        }
        if !names.contains(&FALLBACK_CATEGORY) {
            names.push(FALLBACK_CATEGORY);
        }
        names
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new(vec![
            Category::new(
                "Images",
                [".jpg", ".jpeg", ".png", ".gif", ".bmp", ".svg", ".webp", ".tiff"],
            ),
            Category::new(
                "Documents",
                [".pdf", ".doc", ".docx", ".txt", ".rtf", ".odt", ".pages"],
            ),
            Category::new("Spreadsheets", [".xls", ".xlsx", ".csv", ".ods", ".numbers"]),
            Category::new("Presentations", [".ppt", ".pptx", ".odp", ".key"]),
            Category::new(
                "Videos",
                [".mp4", ".avi", ".mkv", ".mov", ".wmv", ".flv", ".webm", ".m4v"],
            ),
            Category::new(
                "Audio",
                [".mp3", ".wav", ".flac", ".aac", ".ogg", ".wma", ".m4a"],
            ),
            Category::new(
                "Archives",
                [".zip", ".rar", ".7z", ".tar", ".gz", ".bz2", ".xz"],
            ),
            Category::new(
                "Code",
                [
                    ".py", ".js", ".html", ".css", ".java", ".cpp", ".c", ".php", ".rb", ".go",
                ],
            ),
            Category::new(
                "Executables",
                [".exe", ".msi", ".dmg", ".pkg", ".deb", ".rpm", ".app"],
            ),
        ])
    }
}

/// Returns the lookup key for a path: `"."` plus the lowercased extension, or `""`.
///
/// # Examples
///
/// ```
/// use dirsort::file_category::extension_key;
/// use std::path::Path;
///
/// assert_eq!(extension_key(Path::new("photo.JPG")), ".jpg");
/// assert_eq!(extension_key(Path::new("archive.tar.gz")), ".gz");
/// assert_eq!(extension_key(Path::new("notes")), "");
/// assert_eq!(extension_key(Path::new(".bashrc")), "");
/// ```
pub fn extension_key(path: &Path) -> String {
    match path.extension() {
        Some(ext) if !ext.is_empty() => format!(".{}", ext.to_string_lossy().to_lowercase()),
        _ => String::new(),
    }
}

fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.is_empty() || ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}
