//! Image upload validation.
//!
//! Editors validate MIME type and size before anything reaches the
//! blob store, and only hand out a key once the blob is actually
//! saved - a failed save leaves no dangling key behind.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

use slidekit_store::{new_image_key, BlobError, BlobStore};

/// Upload size cap: 5 MiB of raw image bytes
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Accepted image MIME types
pub const ALLOWED_IMAGE_MIME: [&str; 5] = [
    "image/png",
    "image/jpeg",
    "image/gif",
    "image/webp",
    "image/svg+xml",
];

/// Errors surfaced by the upload path
#[derive(Error, Debug)]
pub enum UploadError {
    /// MIME type is not on the allow-list
    #[error("unsupported image type: {mime}")]
    UnsupportedType { mime: String },

    /// Raw payload exceeds [`MAX_IMAGE_BYTES`]
    #[error("image is {size} bytes, limit is {limit}")]
    TooLarge { size: usize, limit: usize },

    /// The blob store rejected the save; the field stays unchanged
    #[error("Upload failed. Try again.")]
    StoreRejected(#[from] BlobError),
}

/// Check an upload's MIME type and size before encoding
pub fn validate_upload(mime: &str, size: usize) -> Result<(), UploadError> {
    if !ALLOWED_IMAGE_MIME.contains(&mime) {
        return Err(UploadError::UnsupportedType {
            mime: mime.to_string(),
        });
    }
    if size > MAX_IMAGE_BYTES {
        return Err(UploadError::TooLarge {
            size,
            limit: MAX_IMAGE_BYTES,
        });
    }
    Ok(())
}

/// Encode raw file bytes to the base64 payload form blobs are stored in
pub fn encode_payload(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Validate, encode, and save an image; returns the new blob key.
///
/// The key is generated only after validation passes, and returned
/// only after the save succeeds, so callers can write it into content
/// knowing the blob exists.
pub fn store_image(
    blobs: &mut dyn BlobStore,
    mime: &str,
    bytes: &[u8],
) -> Result<String, UploadError> {
    validate_upload(mime, bytes.len())?;
    let key = new_image_key();
    blobs.save_image(&key, &encode_payload(bytes))?;
    Ok(key)
}
