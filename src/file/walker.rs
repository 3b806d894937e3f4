//! Lazy directory-tree traversal
//!
//! [`TreeWalker`] yields the entries of a directory tree in pre-order, one
//! directory listing at a time. Traversal state lives on an explicit stack of
//! frames instead of the call stack, so arbitrarily deep trees never recurse.
//!
//! Directories that cannot be listed are treated as empty. Symbolic links to
//! directories are followed and there is no cycle detection.

use std::{
    fmt, fs,
    iter::FusedIterator,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

use super::filters::{self, PathFilter};
use crate::config::WalkConfig;
use crate::error::{Error, Result};
use crate::utils::require;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// The current entry has not been examined yet.
    Enter,
    /// The current entry is a directory whose children are still to be listed.
    Expanded,
    /// The current entry is finished; move to the next sibling.
    Done,
}

/// One level of the traversal: a non-empty sibling list and a cursor into it.
#[derive(Debug)]
struct Frame {
    entries: Vec<PathBuf>,
    index: usize,
    step: Step,
}

impl Frame {
    fn new(entries: Vec<PathBuf>) -> Self {
        Self { entries, index: 0, step: Step::Enter }
    }
}

/// Combined child filter: files go through the file filter, directories
/// through the optional directory filter.
struct EntryFilter {
    file: PathFilter,
    dir: Option<PathFilter>,
}

impl EntryFilter {
    fn accepts(&self, path: &Path) -> bool {
        if path.is_dir() {
            self.dir.as_ref().map(|f| f(path)).unwrap_or(false)
        } else {
            (self.file)(path)
        }
    }

    fn list_children(&self, dir: &Path) -> Vec<PathBuf> {
        let read_dir = match fs::read_dir(dir) {
            Ok(rd) => rd,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "cannot list directory, skipping");
                return Vec::new();
            }
        };

        let mut children = Vec::new();
        for entry in read_dir {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if self.accepts(&path) {
                        children.push(path);
                    }
                }
                Err(e) => debug!(dir = %dir.display(), error = %e, "unreadable directory entry"),
            }
        }
        children
    }
}

/// Pull-based pre-order iterator over a directory tree.
///
/// Created by [`files`] or [`WalkBuilder::build`]. Each call to `next` lists at
/// most one directory.
pub struct TreeWalker {
    stack: Vec<Frame>,
    filter: EntryFilter,
    include_directories: bool,
}

impl TreeWalker {
    /// Number of frames currently on the traversal stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl fmt::Debug for TreeWalker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeWalker")
            .field("depth", &self.stack.len())
            .field("include_directories", &self.include_directories)
            .field("descends", &self.filter.dir.is_some())
            .finish()
    }
}

impl Iterator for TreeWalker {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let frame = self.stack.last_mut()?;
            match frame.step {
                Step::Enter => {
                    let path = &frame.entries[frame.index];
                    if path.is_dir() {
                        frame.step = Step::Expanded;
                        if self.include_directories {
                            return Some(path.clone());
                        }
                    } else {
                        frame.step = Step::Done;
                        return Some(path.clone());
                    }
                }
                Step::Expanded => {
                    // The parent is finished once its children are pushed.
                    frame.step = Step::Done;
                    let children = self.filter.list_children(&frame.entries[frame.index]);
                    if !children.is_empty() {
                        self.stack.push(Frame::new(children));
                    }
                }
                Step::Done => {
                    if frame.index + 1 < frame.entries.len() {
                        frame.index += 1;
                        frame.step = Step::Enter;
                    } else {
                        self.stack.pop();
                    }
                }
            }
        }
    }
}

impl FusedIterator for TreeWalker {}

/// Lazily walks `root`.
///
/// Files are yielded when `file_filter` accepts them. Subdirectories are
/// descended into when `dir_filter` accepts them; with `None` only the root's
/// direct children are visited. Directories themselves (the root included)
/// are yielded before their contents when `include_directories` is set.
///
/// Fails with `InvalidArgument` when `root` is not an existing directory.
#[instrument(skip_all, fields(root = %root.display(), include_directories = include_directories))]
pub fn files(
    root: &Path,
    file_filter: PathFilter,
    dir_filter: Option<PathFilter>,
    include_directories: bool,
) -> Result<TreeWalker> {
    if !root.is_dir() {
        return Err(Error::invalid(format!(
            "Parameter 'directory' is not a directory: {}",
            root.display()
        )));
    }
    debug!(descends = dir_filter.is_some(), "starting tree walk");

    Ok(TreeWalker {
        stack: vec![Frame::new(vec![root.to_path_buf()])],
        filter: EntryFilter { file: file_filter, dir: dir_filter },
        include_directories,
    })
}

/// Eager counterpart of [`files`]: collects every entry of the walk.
pub fn list_files(
    root: &Path,
    file_filter: PathFilter,
    dir_filter: Option<PathFilter>,
    include_directories: bool,
) -> Result<Vec<PathBuf>> {
    Ok(files(root, file_filter, dir_filter, include_directories)?.collect())
}

/// Fluent setup for a [`TreeWalker`].
pub struct WalkBuilder {
    root: PathBuf,
    file_filter: Option<PathFilter>,
    dir_filter: Option<PathFilter>,
    include_directories: bool,
}

impl WalkBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file_filter: None,
            dir_filter: None,
            include_directories: false,
        }
    }

    /// Builder preloaded from a [`WalkConfig`].
    ///
    /// An empty extension list accepts every file. `recurse = false` leaves
    /// the directory filter unset.
    pub fn from_config(root: impl Into<PathBuf>, config: &WalkConfig) -> Self {
        let mut file_filter = if config.extensions.is_empty() {
            filters::accept_all()
        } else {
            filters::suffix_filter(config.extensions.as_slice())
        };
        let mut dir_filter = filters::accept_all();

        if config.skip_hidden {
            file_filter = filters::and(filters::hidden_filter(false), file_filter);
            dir_filter = filters::hidden_filter(false);
        }

        let builder = Self::new(root)
            .file_filter(file_filter)
            .include_directories(config.include_directories);

        if config.recurse {
            builder.dir_filter(dir_filter)
        } else {
            builder
        }
    }

    pub fn file_filter(mut self, filter: PathFilter) -> Self {
        self.file_filter = Some(filter);
        self
    }

    /// Narrows the current file filter, or sets it when none is present.
    pub fn and_file_filter(mut self, filter: PathFilter) -> Self {
        self.file_filter = Some(match self.file_filter.take() {
            Some(current) => filters::and(current, filter),
            None => filter,
        });
        self
    }

    pub fn dir_filter(mut self, filter: PathFilter) -> Self {
        self.dir_filter = Some(filter);
        self
    }

    pub fn include_directories(mut self, include: bool) -> Self {
        self.include_directories = include;
        self
    }

    /// Fails with `MissingArgument` when no file filter was set and with
    /// `InvalidArgument` when the root is not a directory.
    pub fn build(self) -> Result<TreeWalker> {
        if !self.root.is_dir() {
            return Err(Error::invalid(format!(
                "Parameter 'directory' is not a directory: {}",
                self.root.display()
            )));
        }
        let file_filter = require(self.file_filter, "fileFilter")?;
        files(&self.root, file_filter, self.dir_filter, self.include_directories)
    }
}
