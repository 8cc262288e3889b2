//! Resolution of task-relative paths

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Errors resolving a path inside a task directory
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("invalid task id: {0:?}")]
    InvalidTaskId(String),

    #[error("unknown task: {0}")]
    UnknownTask(String),

    #[error("path must be relative to the task directory: {0}")]
    AbsolutePath(String),

    #[error("path escapes the task directory: {0}")]
    OutsideTask(String),
}

/// Maps a task-relative path to an absolute one
pub trait PathResolver: Send + Sync {
    fn resolve(&self, task_id: &str, relative_path: &str) -> Result<PathBuf, WorkspaceError>;
}

/// Task directories laid out as `<root>/<task_id>`
#[derive(Debug, Clone)]
pub struct TaskWorkspace {
    root: PathBuf,
}

impl TaskWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of a task, which must already exist
    pub fn task_dir(&self, task_id: &str) -> Result<PathBuf, WorkspaceError> {
        let mut components = Path::new(task_id).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => return Err(WorkspaceError::InvalidTaskId(task_id.to_string())),
        }

        let dir = self.root.join(task_id);
        if !dir.is_dir() {
            return Err(WorkspaceError::UnknownTask(task_id.to_string()));
        }
        Ok(dir)
    }
}

impl PathResolver for TaskWorkspace {
    fn resolve(&self, task_id: &str, relative_path: &str) -> Result<PathBuf, WorkspaceError> {
        let task_dir = self.task_dir(task_id)?;

        let mut resolved = task_dir.clone();
        for component in Path::new(relative_path).components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                Component::ParentDir => {
                    if resolved == task_dir {
                        return Err(WorkspaceError::OutsideTask(relative_path.to_string()));
                    }
                    resolved.pop();
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(WorkspaceError::AbsolutePath(relative_path.to_string()));
                }
            }
        }
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace_with_task(task_id: &str) -> (tempfile::TempDir, TaskWorkspace) {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join(task_id)).unwrap();
        let workspace = TaskWorkspace::new(root.path());
        (root, workspace)
    }

    #[test]
    fn test_resolve_relative_path() {
        let (root, workspace) = workspace_with_task("task1");
        let resolved = workspace.resolve("task1", "audio/clip.wav").unwrap();
        assert_eq!(resolved, root.path().join("task1").join("audio").join("clip.wav"));
    }

    #[test]
    fn test_resolve_normalizes_dot_segments() {
        let (root, workspace) = workspace_with_task("task1");
        let resolved = workspace.resolve("task1", "./audio/../clip.wav").unwrap();
        assert_eq!(resolved, root.path().join("task1").join("clip.wav"));
    }

    #[test]
    fn test_resolve_does_not_require_file_to_exist() {
        let (_root, workspace) = workspace_with_task("task1");
        assert!(workspace.resolve("task1", "missing.wav").is_ok());
    }

    #[test]
    fn test_unknown_task() {
        let (_root, workspace) = workspace_with_task("task1");
        let err = workspace.resolve("task2", "clip.wav").unwrap_err();
        assert!(matches!(err, WorkspaceError::UnknownTask(_)));
        assert_eq!(err.to_string(), "unknown task: task2");
    }

    #[test]
    fn test_invalid_task_ids() {
        let (_root, workspace) = workspace_with_task("task1");
        for task_id in ["", "..", "task1/sub", "/etc", "."] {
            let err = workspace.resolve(task_id, "clip.wav").unwrap_err();
            assert!(
                matches!(err, WorkspaceError::InvalidTaskId(_)),
                "task id {:?} gave {:?}",
                task_id,
                err
            );
        }
    }

    #[test]
    fn test_rejects_escape_from_task_dir() {
        let (_root, workspace) = workspace_with_task("task1");
        let err = workspace.resolve("task1", "../other/clip.wav").unwrap_err();
        assert!(matches!(err, WorkspaceError::OutsideTask(_)));
    }

    #[test]
    fn test_rejects_absolute_path() {
        let (_root, workspace) = workspace_with_task("task1");
        let err = workspace.resolve("task1", "/etc/passwd").unwrap_err();
        assert!(matches!(err, WorkspaceError::AbsolutePath(_)));
    }
}
