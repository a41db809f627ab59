/// Moving files out of a source directory into category or month folders.
///
/// An [`Organizer`] performs one pass over the direct children of its source directory.
/// Each file is classified, given a collision-free destination and moved. A failure on
/// one file is logged and recorded in the [`OrganizeReport`] without stopping the pass.
use crate::config::CompiledFilters;
use crate::date_bucket;
use crate::file_category::CategoryTable;
use clap::ValueEnum;
use fs_extra::file::CopyOptions;
use log::{debug, error, info};
use std::collections::HashMap;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Root folder created under the source directory in type mode.
pub const TYPE_ROOT: &str = "Organized";
/// Root folder created under the source directory in date mode.
pub const DATE_ROOT: &str = "Organized_by_Date";
/// Entries that are never organized, regardless of configuration.
pub const NOISE_FILES: &[&str] = &[".DS_Store"];

/// How files are grouped into folders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrganizeMode {
    /// Group by extension category.
    Type,
    /// Group by creation month.
    Date,
}

impl OrganizeMode {
    /// Folder created beneath the source directory for this mode.
    pub fn root_dir_name(&self) -> &'static str {
        match self {
            OrganizeMode::Type => TYPE_ROOT,
            OrganizeMode::Date => DATE_ROOT,
        }
    }
}

impl fmt::Display for OrganizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrganizeMode::Type => write!(f, "type"),
            OrganizeMode::Date => write!(f, "date"),
        }
    }
}

/// A single file move performed (or planned, in a dry run) during a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// Where the file was found.
    pub original_path: PathBuf,
    /// Where the file ended up.
    pub new_path: PathBuf,
    /// Category name or `YYYY-MM` bucket the file was sorted into.
    pub folder: String,
}

/// Outcome of one organize pass.
#[derive(Debug, Clone)]
pub struct OrganizeReport {
    /// The mode the pass ran in.
    pub mode: OrganizeMode,
    /// `Organized` or `Organized_by_Date` beneath the source directory.
    pub destination_root: PathBuf,
    /// Successful moves in the order they happened.
    pub operations: Vec<Operation>,
    /// Files left in place, with the reason.
    pub failures: Vec<(PathBuf, String)>,
    /// Whether the pass only simulated its moves.
    pub dry_run: bool,
}

impl OrganizeReport {
    fn new(mode: OrganizeMode, destination_root: PathBuf, dry_run: bool) -> Self {
        Self {
            mode,
            destination_root,
            operations: Vec::new(),
            failures: Vec::new(),
            dry_run,
        }
    }

    /// Number of files moved.
    pub fn moved_count(&self) -> usize {
        self.operations.len()
    }

    /// Number of files moved into each destination folder.
    pub fn counts_by_folder(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for operation in &self.operations {
            *counts.entry(operation.folder.clone()).or_insert(0) += 1;
        }
        counts
    }
}

/// Errors that can occur while organizing or cleaning a directory.
#[derive(Debug)]
pub enum OrganizeError {
    /// The source directory does not exist or is not a directory.
    InvalidSourceDir { path: PathBuf },
    /// A directory could not be listed.
    ReadDirFailed {
        path: PathBuf,
        source: io::Error,
    },
    /// Failed to create a destination directory.
    DirectoryCreationFailed {
        path: PathBuf,
        source: io::Error,
    },
    /// The timestamp needed for date mode could not be read.
    MetadataUnavailable {
        path: PathBuf,
        source: io::Error,
    },
    /// Every candidate name for a destination was taken.
    NoFreeName { path: PathBuf },
    /// Failed to move a file to its destination.
    FileMoveFailure {
        source: PathBuf,
        destination: PathBuf,
        source_error: io::Error,
    },
    /// Failed to remove an empty folder.
    FolderRemovalFailed {
        path: PathBuf,
        source: io::Error,
    },
}

impl fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSourceDir { path } => {
                write!(f, "Source directory {} does not exist!", path.display())
            }
            Self::ReadDirFailed { path, source } => {
                write!(f, "Failed to read directory {}: {}", path.display(), source)
            }
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::MetadataUnavailable { path, source } => {
                write!(
                    f,
                    "Failed to read creation time of {}: {}",
                    path.display(),
                    source
                )
            }
            Self::NoFreeName { path } => {
                write!(f, "No free name available for {}", path.display())
            }
            Self::FileMoveFailure {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
            Self::FolderRemovalFailed { path, source } => {
                write!(f, "Failed to remove folder {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for OrganizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReadDirFailed { source, .. }
            | Self::DirectoryCreationFailed { source, .. }
            | Self::MetadataUnavailable { source, .. }
            | Self::FolderRemovalFailed { source, .. } => Some(source),
            Self::FileMoveFailure { source_error, .. } => Some(source_error),
            Self::InvalidSourceDir { .. } | Self::NoFreeName { .. } => None,
        }
    }
}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Organizes the files of one directory.
///
/// # Examples
///
/// ```no_run
/// use dirsort::file_organizer::{OrganizeMode, Organizer};
///
/// let organizer = Organizer::new("/home/user/Downloads");
/// match organizer.organize(OrganizeMode::Type) {
///     Ok(report) => println!("Moved {} files", report.moved_count()),
///     Err(e) => eprintln!("{}", e),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Organizer {
    source_dir: PathBuf,
    categories: CategoryTable,
    filters: CompiledFilters,
    dry_run: bool,
}

impl Organizer {
    /// Creates an organizer for `source_dir` with the built-in category table and no
    /// extra filters.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            categories: CategoryTable::default(),
            filters: CompiledFilters::default(),
            dry_run: false,
        }
    }

    /// Replaces the category table used in type mode.
    pub fn with_categories(mut self, categories: CategoryTable) -> Self {
        self.categories = categories;
        self
    }

    /// Replaces the file filters applied before classification.
    pub fn with_filters(mut self, filters: CompiledFilters) -> Self {
        self.filters = filters;
        self
    }

    /// When set, passes report what they would do without touching the filesystem.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The directory being organized.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub(crate) fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Runs one organize pass in the given mode.
    pub fn organize(&self, mode: OrganizeMode) -> OrganizeResult<OrganizeReport> {
        match mode {
            OrganizeMode::Type => self.organize_by_type(),
            OrganizeMode::Date => self.organize_by_date(),
        }
    }

    /// Moves every file into `Organized/<Category>/`.
    ///
    /// All category folders (and `Others`) are created up front.
    pub fn organize_by_type(&self) -> OrganizeResult<OrganizeReport> {
        self.ensure_source_dir()?;

        let root = self.source_dir.join(TYPE_ROOT);
        if !self.dry_run {
            ensure_dir(&root)?;
            for name in self.categories.folder_names() {
                ensure_dir(&root.join(name))?;
            }
        }

        let report = self.run_pass(OrganizeMode::Type, root, |path| {
            Ok(self.categories.classify_path(path).to_string())
        })?;

        info!(
            "{}Successfully organized {} files!",
            self.log_prefix(),
            report.moved_count()
        );
        Ok(report)
    }

    /// Moves every file into `Organized_by_Date/<YYYY-MM>/`, creating month folders as
    /// they are first needed.
    pub fn organize_by_date(&self) -> OrganizeResult<OrganizeReport> {
        self.ensure_source_dir()?;

        let root = self.source_dir.join(DATE_ROOT);
        if !self.dry_run {
            ensure_dir(&root)?;
        }

        let report = self.run_pass(OrganizeMode::Date, root, |path| {
            date_bucket::creation_time(path)
                .map(date_bucket::month_bucket)
                .map_err(|e| OrganizeError::MetadataUnavailable {
                    path: path.to_path_buf(),
                    source: e,
                })
        })?;

        info!(
            "{}Successfully organized {} files by date!",
            self.log_prefix(),
            report.moved_count()
        );
        Ok(report)
    }

    /// Logs and returns an error unless the source directory exists.
    pub(crate) fn ensure_source_dir(&self) -> OrganizeResult<()> {
        if self.source_dir.is_dir() {
            return Ok(());
        }
        let err = OrganizeError::InvalidSourceDir {
            path: self.source_dir.clone(),
        };
        error!("{}", err);
        Err(err)
    }

    pub(crate) fn log_prefix(&self) -> &'static str {
        if self.dry_run { "[DRY RUN] " } else { "" }
    }

    /// Visits each candidate file once, sorting it into the folder chosen by `folder_for`.
    fn run_pass<F>(
        &self,
        mode: OrganizeMode,
        root: PathBuf,
        folder_for: F,
    ) -> OrganizeResult<OrganizeReport>
    where
        F: Fn(&Path) -> OrganizeResult<String>,
    {
        let mut report = OrganizeReport::new(mode, root, self.dry_run);

        for file_path in self.candidate_files(&mut report.failures)? {
            let name = display_name(&file_path);

            let folder = match folder_for(&file_path) {
                Ok(folder) => folder,
                Err(e) => {
                    error!("Error moving {}: {}", name, e);
                    report.failures.push((file_path, e.to_string()));
                    continue;
                }
            };

            match self.move_into(&file_path, &report.destination_root.join(&folder)) {
                Ok(new_path) => {
                    info!("{}Moved {} to {}/", self.log_prefix(), name, folder);
                    report.operations.push(Operation {
                        original_path: file_path,
                        new_path,
                        folder,
                    });
                }
                Err(e) => {
                    error!("Error moving {}: {}", name, e);
                    report.failures.push((file_path, e.to_string()));
                }
            }
        }

        Ok(report)
    }

    /// Lists the regular files directly inside the source directory, sorted by name,
    /// leaving out directories, noise entries and filtered files.
    ///
    /// Entries that cannot be read are logged and recorded in `failures`.
    fn candidate_files(
        &self,
        failures: &mut Vec<(PathBuf, String)>,
    ) -> OrganizeResult<Vec<PathBuf>> {
        let entries =
            fs::read_dir(&self.source_dir).map_err(|e| OrganizeError::ReadDirFailed {
                path: self.source_dir.clone(),
                source: e,
            })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    error!("Error reading entry in {}: {}", self.source_dir.display(), e);
                    failures.push((self.source_dir.clone(), e.to_string()));
                    continue;
                }
            };
            let path = entry.path();
            let name = entry.file_name();

            if !path.is_file() {
                debug!("Skipping {} (not a file)", path.display());
                continue;
            }
            if NOISE_FILES.iter().any(|noise| name == *noise) {
                debug!("Skipping {} (noise file)", path.display());
                continue;
            }
            if !self.filters.should_include(&path) {
                debug!("Skipping {} (excluded by filters)", path.display());
                continue;
            }
            files.push(path);
        }

        files.sort();
        Ok(files)
    }

    /// Moves one file into `dest_dir` under a collision-free name and returns its new path.
    fn move_into(&self, file_path: &Path, dest_dir: &Path) -> OrganizeResult<PathBuf> {
        let file_name = file_path
            .file_name()
            .ok_or_else(|| OrganizeError::FileMoveFailure {
                source: file_path.to_path_buf(),
                destination: dest_dir.to_path_buf(),
                source_error: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "file has no name component",
                ),
            })?;

        if !self.dry_run {
            ensure_dir(dest_dir)?;
        }

        let destination = resolve_destination(&dest_dir.join(file_name))?;

        if !self.dry_run {
            move_file(file_path, &destination)?;
        }
        Ok(destination)
    }
}

/// Creates `path` and any missing parents. Existing directories are left alone.
pub fn ensure_dir(path: &Path) -> OrganizeResult<()> {
    if path.is_dir() {
        return Ok(());
    }
    debug!("Creating directory {}", path.display());
    fs::create_dir_all(path).map_err(|e| OrganizeError::DirectoryCreationFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Returns `desired` if nothing occupies it, otherwise the first free
/// `<stem>_<n><.ext>` sibling with `n` counting up from 1.
///
/// The number of attempts is bounded by the number of entries already in the directory
/// plus one. Those many distinct candidates cannot all be taken, so the loop always
/// finds a name unless the directory changes underneath it.
///
/// # Examples
///
/// ```no_run
/// use dirsort::file_organizer::resolve_destination;
/// use std::path::Path;
///
/// // With a.txt and a_1.txt already present:
/// let free = resolve_destination(Path::new("/tmp/dest/a.txt")).unwrap();
/// assert_eq!(free, Path::new("/tmp/dest/a_2.txt"));
/// ```
pub fn resolve_destination(desired: &Path) -> OrganizeResult<PathBuf> {
    if !is_occupied(desired) {
        return Ok(desired.to_path_buf());
    }

    let parent = desired.parent().unwrap_or_else(|| Path::new("."));
    let occupied = fs::read_dir(parent)
        .map_err(|e| OrganizeError::ReadDirFailed {
            path: parent.to_path_buf(),
            source: e,
        })?
        .count();

    let stem = desired.file_stem().unwrap_or_default();
    let extension = desired.extension();

    for n in 1..=occupied + 1 {
        let mut name = OsString::from(stem);
        name.push(format!("_{n}"));
        if let Some(ext) = extension {
            name.push(".");
            name.push(ext);
        }

        let candidate = parent.join(name);
        if !is_occupied(&candidate) {
            return Ok(candidate);
        }
    }

    Err(OrganizeError::NoFreeName {
        path: desired.to_path_buf(),
    })
}

/// Moves `source` to `destination`. `fs_extra` falls back to copy and delete when a
/// rename cannot cross devices.
///
/// An occupied `destination` is refused, never overwritten; see [`resolve_destination`].
pub fn move_file(source: &Path, destination: &Path) -> OrganizeResult<()> {
    let move_error = |e: io::Error| OrganizeError::FileMoveFailure {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        source_error: e,
    };

    if is_occupied(destination) {
        return Err(move_error(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "destination already exists",
        )));
    }

    debug!("Moving {} to {}", source.display(), destination.display());
    let options = CopyOptions::new();
    fs_extra::file::move_file(source, destination, &options)
        .map(|_| ())
        .map_err(|e| move_error(io::Error::other(e)))
}

/// True if anything, including a dangling symlink, sits at `path`.
fn is_occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilterConfig;
    use crate::file_category::Category;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, "test content").expect("Failed to write test file");
    }

    #[test]
    fn test_resolve_destination_free_path_unchanged() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let desired = temp_dir.path().join("a.txt");

        let resolved = resolve_destination(&desired).expect("Failed to resolve");
        assert_eq!(resolved, desired);
    }

    #[test]
    fn test_resolve_destination_skips_taken_suffixes() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        touch(&temp_dir.path().join("a.txt"));
        touch(&temp_dir.path().join("a_1.txt"));

        let resolved =
            resolve_destination(&temp_dir.path().join("a.txt")).expect("Failed to resolve");
        assert_eq!(resolved, temp_dir.path().join("a_2.txt"));
        assert!(!resolved.exists());
    }

    #[test]
    fn test_resolve_destination_without_extension() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        touch(&temp_dir.path().join("notes"));

        let resolved =
            resolve_destination(&temp_dir.path().join("notes")).expect("Failed to resolve");
        assert_eq!(resolved, temp_dir.path().join("notes_1"));
    }

    #[test]
    fn test_resolve_destination_keeps_only_last_extension() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        touch(&temp_dir.path().join("backup.tar.gz"));

        let resolved = resolve_destination(&temp_dir.path().join("backup.tar.gz"))
            .expect("Failed to resolve");
        assert_eq!(resolved, temp_dir.path().join("backup.tar_1.gz"));
    }

    #[test]
    fn test_resolve_destination_hidden_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        touch(&temp_dir.path().join(".env"));

        let resolved =
            resolve_destination(&temp_dir.path().join(".env")).expect("Failed to resolve");
        assert_eq!(resolved, temp_dir.path().join(".env_1"));
    }

    #[test]
    fn test_resolve_destination_never_returns_existing_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        touch(&temp_dir.path().join("x.bin"));
        for n in 1..=20 {
            touch(&temp_dir.path().join(format!("x_{n}.bin")));
        }

        let resolved =
            resolve_destination(&temp_dir.path().join("x.bin")).expect("Failed to resolve");
        assert_eq!(resolved, temp_dir.path().join("x_21.bin"));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_destination_treats_dangling_symlink_as_taken() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        std::os::unix::fs::symlink(
            temp_dir.path().join("missing-target"),
            temp_dir.path().join("link.txt"),
        )
        .expect("Failed to create symlink");

        let resolved =
            resolve_destination(&temp_dir.path().join("link.txt")).expect("Failed to resolve");
        assert_eq!(resolved, temp_dir.path().join("link_1.txt"));
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let nested = temp_dir.path().join("Organized").join("Images");

        ensure_dir(&nested).expect("First creation failed");
        ensure_dir(&nested).expect("Second creation failed");
        assert!(nested.is_dir());
    }

    #[test]
    fn test_move_file_relocates_content() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let source = temp_dir.path().join("song.mp3");
        fs::write(&source, "la la la").expect("Failed to write test file");
        let destination = temp_dir.path().join("song-moved.mp3");

        move_file(&source, &destination).expect("Failed to move file");

        assert!(!source.exists());
        assert_eq!(
            fs::read_to_string(&destination).expect("Failed to read moved file"),
            "la la la"
        );
    }

    #[test]
    fn test_move_file_missing_source_is_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let result = move_file(
            &temp_dir.path().join("ghost.txt"),
            &temp_dir.path().join("dest.txt"),
        );
        assert!(matches!(result, Err(OrganizeError::FileMoveFailure { .. })));
    }

    #[test]
    fn test_move_file_never_overwrites_destination() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let source = temp_dir.path().join("new.txt");
        let destination = temp_dir.path().join("old.txt");
        fs::write(&source, "new").expect("Failed to write test file");
        fs::write(&destination, "old").expect("Failed to write test file");

        let result = move_file(&source, &destination);

        assert!(matches!(result, Err(OrganizeError::FileMoveFailure { .. })));
        assert_eq!(fs::read_to_string(&source).expect("Source lost"), "new");
        assert_eq!(
            fs::read_to_string(&destination).expect("Destination lost"),
            "old"
        );
    }

    #[test]
    fn test_organize_by_type_moves_into_category_folders() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();
        touch(&base.join("photo.JPG"));
        touch(&base.join("notes"));

        let report = Organizer::new(base)
            .organize_by_type()
            .expect("Organize pass failed");

        assert_eq!(report.moved_count(), 2);
        assert!(report.failures.is_empty());
        assert!(base.join("Organized/Images/photo.JPG").is_file());
        assert!(base.join("Organized/Others/notes").is_file());
        assert!(base.join("Organized/Executables").is_dir());
    }

    #[test]
    fn test_organize_with_injected_table() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();
        touch(&base.join("main.rs"));

        let table = CategoryTable::new(vec![Category::new("Rust", [".rs"])]);
        let report = Organizer::new(base)
            .with_categories(table)
            .organize(OrganizeMode::Type)
            .expect("Organize pass failed");

        assert_eq!(report.operations[0].folder, "Rust");
        assert!(base.join("Organized/Rust/main.rs").is_file());
        assert!(!base.join("Organized/Images").exists());
    }

    #[test]
    fn test_organize_by_date_uses_month_bucket() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();
        let file_path = base.join("scan.pdf");
        touch(&file_path);
        let bucket = date_bucket::month_bucket(
            date_bucket::creation_time(&file_path).expect("Failed to read timestamp"),
        );

        let report = Organizer::new(base)
            .organize(OrganizeMode::Date)
            .expect("Organize pass failed");

        assert_eq!(report.mode, OrganizeMode::Date);
        assert_eq!(report.operations[0].folder, bucket);
        assert!(base.join(DATE_ROOT).join(&bucket).join("scan.pdf").is_file());
    }

    #[test]
    fn test_noise_and_directories_are_skipped() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();
        touch(&base.join(".DS_Store"));
        fs::create_dir(base.join("Projects")).expect("Failed to create directory");

        let report = Organizer::new(base)
            .organize_by_type()
            .expect("Organize pass failed");

        assert_eq!(report.moved_count(), 0);
        assert!(base.join(".DS_Store").is_file());
        assert!(base.join("Projects").is_dir());
    }

    #[test]
    fn test_filters_exclude_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();
        touch(&base.join("movie.mp4.part"));
        touch(&base.join("movie.mp4"));

        let mut config = FilterConfig::default();
        config.filters.exclude.extensions.push("part".to_string());
        let filters = config.compile().expect("Failed to compile filters");

        let report = Organizer::new(base)
            .with_filters(filters)
            .organize_by_type()
            .expect("Organize pass failed");

        assert_eq!(report.moved_count(), 1);
        assert!(base.join("movie.mp4.part").is_file());
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();
        touch(&base.join("report.pdf"));

        let report = Organizer::new(base)
            .dry_run(true)
            .organize_by_type()
            .expect("Organize pass failed");

        assert!(report.dry_run);
        assert_eq!(report.moved_count(), 1);
        assert_eq!(
            report.operations[0].new_path,
            base.join("Organized/Documents/report.pdf")
        );
        assert!(base.join("report.pdf").is_file());
        assert!(!base.join(TYPE_ROOT).exists());
    }

    #[test]
    fn test_missing_source_dir_is_rejected_without_side_effects() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let missing = temp_dir.path().join("does-not-exist");

        let result = Organizer::new(&missing).organize_by_type();

        assert!(matches!(
            result,
            Err(OrganizeError::InvalidSourceDir { .. })
        ));
        assert!(!missing.exists());
    }

    #[test]
    fn test_source_dir_that_is_a_file_is_rejected() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file_path = temp_dir.path().join("plain.txt");
        touch(&file_path);

        let result = Organizer::new(&file_path).organize_by_date();
        assert!(matches!(
            result,
            Err(OrganizeError::InvalidSourceDir { .. })
        ));
    }

    #[test]
    fn test_counts_by_folder() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();
        touch(&base.join("a.png"));
        touch(&base.join("b.gif"));
        touch(&base.join("c.zip"));

        let report = Organizer::new(base)
            .organize_by_type()
            .expect("Organize pass failed");
        let counts = report.counts_by_folder();

        assert_eq!(counts.get("Images"), Some(&2));
        assert_eq!(counts.get("Archives"), Some(&1));
        assert_eq!(counts.get("Others"), None);
    }

    #[test]
    fn test_error_display() {
        let err = OrganizeError::InvalidSourceDir {
            path: PathBuf::from("/nowhere"),
        };
        assert_eq!(err.to_string(), "Source directory /nowhere does not exist!");
    }
}
