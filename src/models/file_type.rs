//! File categories used to pick icons.

use filegrid_core::FileRecord;

/// Display category of an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileType {
    Folder,
    Text,
    Image,
    Archive,
    Unknown,
}

impl FileType {
    /// Detect file type from name extension
    pub fn from_name(name: &str) -> Self {
        let Some((_, extension)) = name.rsplit_once('.') else {
            return Self::Unknown;
        };
        match extension.to_lowercase().as_str() {
            "md" | "txt" | "json" | "csv" | "log" => Self::Text,
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" => Self::Image,
            "zip" | "tar" | "gz" | "7z" => Self::Archive,
            _ => Self::Unknown,
        }
    }

    pub fn of(record: &FileRecord) -> Self {
        if record.is_dir() {
            Self::Folder
        } else {
            Self::from_name(&record.file_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use filegrid_core::FileKind;

    use super::*;

    // =========================================================================
    // FileType Tests
    // =========================================================================

    #[test]
    fn test_file_type_detection() {
        assert_eq!(FileType::from_name("notes.md"), FileType::Text);
        assert_eq!(FileType::from_name("photo.JPG"), FileType::Image);
        assert_eq!(FileType::from_name("backup.tar.gz"), FileType::Archive);
        assert_eq!(FileType::from_name("Makefile"), FileType::Unknown);
        assert_eq!(FileType::from_name("file.xyz"), FileType::Unknown);
    }

    #[test]
    fn test_folder_wins_over_extension() {
        let record = FileRecord {
            file_name: "assets.zip".to_string(),
            kind: FileKind::Folder,
            size: None,
            last_modified: None,
        };
        assert_eq!(FileType::of(&record), FileType::Folder);
    }
}
