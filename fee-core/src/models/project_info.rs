use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How the project description was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UploadMethod {
    Pdf,
    Manual,
}

/// Opaque handle to an uploaded project brief. The wizard stores it but
/// never opens or parses the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfFile {
    pub file_name: String,
    pub path: PathBuf,
}

impl PdfFile {
    /// Builds a handle from a path, or `None` when the path does not name a
    /// `.pdf` file.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            return None;
        }
        let file_name = path.file_name()?.to_string_lossy().into_owned();
        Some(Self { file_name, path })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInformation {
    pub name: String,
    pub description: String,
    pub upload_method: Option<UploadMethod>,
    pub pdf_file: Option<PdfFile>,
}

impl ProjectInformation {
    /// Shallow merge: every field present in `patch` replaces the current
    /// value, absent fields are kept.
    pub fn merged(&self, patch: ProjectInfoPatch) -> Self {
        Self {
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            description: patch.description.unwrap_or_else(|| self.description.clone()),
            upload_method: patch.upload_method.or(self.upload_method),
            pdf_file: patch.pdf_file.or_else(|| self.pdf_file.clone()),
        }
    }
}

/// Partial update for [`ProjectInformation`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInfoPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub upload_method: Option<UploadMethod>,
    pub pdf_file: Option<PdfFile>,
}

impl ProjectInfoPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Default::default()
        }
    }

    pub fn upload_method(method: UploadMethod) -> Self {
        Self {
            upload_method: Some(method),
            ..Default::default()
        }
    }

    /// Stores the handle and marks the upload method as PDF in one update.
    pub fn pdf(file: PdfFile) -> Self {
        Self {
            upload_method: Some(UploadMethod::Pdf),
            pdf_file: Some(file),
            ..Default::default()
        }
    }
}
