use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use audio_tool_server::llm::{LlmClient, LlmError};
use audio_tool_server::tools::{default_registry, TaskWorkspace, ToolRegistry};
use tempfile::TempDir;

/// Client that reads the audio file and reports its size and the question
pub struct ByteCountClient;

#[async_trait]
impl LlmClient for ByteCountClient {
    async fn audio_query(
        &self,
        audio_path: &Path,
        question: &str,
        model: Option<&str>,
    ) -> Result<String, LlmError> {
        let audio = tokio::fs::read(audio_path)
            .await
            .map_err(|e| LlmError::from_io(audio_path, e))?;
        Ok(format!(
            "{} bytes; asked {:?} with model {}",
            audio.len(),
            question,
            model.unwrap_or("default")
        ))
    }
}

/// A workspace root containing `task1/clip.wav` (4 bytes)
pub fn workspace() -> TempDir {
    let root = tempfile::tempdir().unwrap();
    let task_dir = root.path().join("task1");
    std::fs::create_dir(&task_dir).unwrap();
    std::fs::write(task_dir.join("clip.wav"), b"RIFF").unwrap();
    root
}

pub fn registry(root: &TempDir, client: Arc<dyn LlmClient>) -> ToolRegistry {
    default_registry(client, Arc::new(TaskWorkspace::new(root.path()))).unwrap()
}
