//! Asset loading for the profile image and the resume PDF.
//!
//! Both files are read once at startup through an [`AssetSource`]. A missing
//! or unusable file is never fatal: callers get an explicit value describing
//! what is available and the page renders a fallback.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetLoadError {
    #[error("asset '{path}' could not be read: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("asset '{path}' is empty")]
    Empty { path: PathBuf },

    #[error("asset '{path}' has unsupported image type")]
    UnsupportedType { path: PathBuf },
}

/// Where asset bytes come from. Filesystem in production; tests swap in memory.
#[async_trait]
pub trait AssetSource: Send + Sync {
    async fn read(&self, path: &Path) -> Result<Bytes, AssetLoadError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FsAssetSource;

#[async_trait]
impl AssetSource for FsAssetSource {
    async fn read(&self, path: &Path) -> Result<Bytes, AssetLoadError> {
        let data = tokio::fs::read(path)
            .await
            .map_err(|source| AssetLoadError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Bytes::from(data))
    }
}

/// A loaded image with its declared media type.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub media_type: &'static str,
    pub bytes: Bytes,
}

/// Profile picture, or the reason it is missing.
#[derive(Debug, Clone)]
pub enum ProfileImage {
    Available {
        media_type: &'static str,
        bytes: Bytes,
    },
    Unavailable {
        reason: String,
    },
}

impl ProfileImage {
    pub fn is_available(&self) -> bool {
        matches!(self, ProfileImage::Available { .. })
    }

    pub fn image(&self) -> Option<ImageAsset> {
        match self {
            ProfileImage::Available { media_type, bytes } => Some(ImageAsset {
                media_type: *media_type,
                bytes: bytes.clone(),
            }),
            ProfileImage::Unavailable { .. } => None,
        }
    }
}

impl From<Result<ImageAsset, AssetLoadError>> for ProfileImage {
    fn from(result: Result<ImageAsset, AssetLoadError>) -> Self {
        match result {
            Ok(img) => ProfileImage::Available {
                media_type: img.media_type,
                bytes: img.bytes,
            },
            Err(e) => ProfileImage::Unavailable {
                reason: e.to_string(),
            },
        }
    }
}

/// Maps an image file extension to its media type.
pub fn image_media_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

pub async fn load_image(
    source: &dyn AssetSource,
    path: &Path,
) -> Result<ImageAsset, AssetLoadError> {
    let media_type = image_media_type(path).ok_or_else(|| AssetLoadError::UnsupportedType {
        path: path.to_path_buf(),
    })?;
    let bytes = source.read(path).await?;
    if bytes.is_empty() {
        return Err(AssetLoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(ImageAsset { media_type, bytes })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory asset source for tests.
    #[derive(Debug, Default)]
    pub struct MemoryAssetSource {
        pub files: HashMap<PathBuf, Bytes>,
    }

    impl MemoryAssetSource {
        pub fn with(mut self, path: &str, data: &'static [u8]) -> Self {
            self.files.insert(PathBuf::from(path), Bytes::from_static(data));
            self
        }
    }

    #[async_trait]
    impl AssetSource for MemoryAssetSource {
        async fn read(&self, path: &Path) -> Result<Bytes, AssetLoadError> {
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| AssetLoadError::Unreadable {
                    path: path.to_path_buf(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                })
        }
    }

    #[test]
    fn test_media_type_from_extension() {
        assert_eq!(image_media_type(Path::new("me.JPG")), Some("image/jpeg"));
        assert_eq!(image_media_type(Path::new("me.png")), Some("image/png"));
        assert_eq!(image_media_type(Path::new("me.bmp")), None);
        assert_eq!(image_media_type(Path::new("me")), None);
    }

    #[tokio::test]
    async fn test_load_image_from_memory() {
        let source = MemoryAssetSource::default().with("me.jpg", b"\xff\xd8\xff");
        let img = load_image(&source, Path::new("me.jpg")).await.unwrap();
        assert_eq!(img.media_type, "image/jpeg");
        assert_eq!(img.bytes.len(), 3);
    }

    #[tokio::test]
    async fn test_missing_image_is_unreadable() {
        let source = MemoryAssetSource::default();
        let err = load_image(&source, Path::new("me.jpg")).await.unwrap_err();
        assert!(matches!(err, AssetLoadError::Unreadable { .. }));
    }

    #[tokio::test]
    async fn test_empty_image_rejected() {
        let source = MemoryAssetSource::default().with("me.png", b"");
        let err = load_image(&source, Path::new("me.png")).await.unwrap_err();
        assert!(matches!(err, AssetLoadError::Empty { .. }));
    }

    #[tokio::test]
    async fn test_unsupported_extension_rejected_before_read() {
        let source = MemoryAssetSource::default().with("me.tiff", b"II*");
        let err = load_image(&source, Path::new("me.tiff")).await.unwrap_err();
        assert!(matches!(err, AssetLoadError::UnsupportedType { .. }));
    }

    #[tokio::test]
    async fn test_fs_source_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();
        let bytes = FsAssetSource.read(&path).await.unwrap();
        assert_eq!(&bytes[..], b"%PDF-1.4");
    }

    #[test]
    fn test_unavailable_profile_image_keeps_reason() {
        let img: ProfileImage = Err(AssetLoadError::Empty {
            path: PathBuf::from("me.jpg"),
        })
        .into();
        assert!(!img.is_available());
        assert!(img.image().is_none());
    }
}
