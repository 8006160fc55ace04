use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 文件元数据。字节存放在外部 blob 存储，本服务只按 token 引用。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "file.ts")]
pub struct File {
    pub id: i64,
    pub token: String,
    pub name: String,
    pub mime_type: String,
    pub size: i64,
    pub uploaded_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl File {
    /// 文件名扩展名（小写，不带点）
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_named(name: &str) -> File {
        File {
            id: 1,
            token: "t".into(),
            name: name.into(),
            mime_type: "application/octet-stream".into(),
            size: 1,
            uploaded_by: 1,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_extension() {
        assert_eq!(file_named("rapport.PDF").extension().as_deref(), Some("pdf"));
        assert_eq!(
            file_named("archive.tar.gz").extension().as_deref(),
            Some("gz")
        );
        assert_eq!(file_named("Makefile").extension(), None);
        assert_eq!(file_named("trailing.").extension(), None);
    }
}
