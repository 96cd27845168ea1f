//! File Commands
//!
//! Frontend bindings for the document library.

use super::{delete, encode_component, get_json, post_form};
use crate::config;
use crate::error::{ApiError, ApiResult};
use crate::models::FileRecord;

pub async fn list_files() -> ApiResult<Vec<FileRecord>> {
    get_json("/api/file").await
}

/// Upload a file as multipart form data (`myfile`, `title`, optional `folder`).
pub async fn upload_file(file: &web_sys::File, title: &str, folder: Option<&str>) -> ApiResult<()> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Browser(super::js_message(&e)))?;
    let append = |name: &str, value: &str| {
        form.append_with_str(name, value)
            .map_err(|e| ApiError::Browser(super::js_message(&e)))
    };

    form.append_with_blob_and_filename("myfile", file, &file.name())
        .map_err(|e| ApiError::Browser(super::js_message(&e)))?;
    append("title", title)?;
    if let Some(folder) = folder {
        append("folder", folder)?;
    }

    log::info!("[Files] uploading '{}' into {:?}", title, folder);
    post_form("/api/files", form).await
}

pub async fn delete_file(uuid: &str) -> ApiResult<()> {
    delete(&format!("/api/file/delete/{}", encode_component(uuid))).await
}

/// Delete a folder server-side, together with its nested folders.
pub async fn delete_file_folder(path: &str) -> ApiResult<()> {
    delete(&format!("/api/file/delete-folder/{}", encode_component(path))).await
}

/// Direct link served by the backend; opening it starts the download.
pub fn download_url(uuid: &str) -> String {
    config::api_url(&format!("/file/download/{}", encode_component(uuid)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_url() {
        assert!(download_url("3f2c-77").ends_with("/file/download/3f2c-77"));
    }
}
