//! Image picking and multipart upload.

use gloo_events::EventListener;
use reqwest::multipart::{Form, Part};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, File, HtmlInputElement};

use scribe_editor_core::{EditorError, PickedFile, UploadError, UploadRequest, UploadResponse};

use crate::dom::{JsResultExt, create_html_element, describe};

/// Describe a browser `File` for the upload flow.
pub fn picked_file(file: &File) -> PickedFile {
    PickedFile {
        name: file.name(),
        mime_type: file.type_(),
        size: file.size() as u64,
    }
}

/// Open the native file picker restricted to images.
///
/// A temporary `input[type=file]` is appended to `<body>`, clicked and
/// removed. `on_file` runs once if the user chooses a file; cancelling the
/// picker never calls it.
pub fn open_image_picker(
    document: &Document,
    on_file: impl FnOnce(File) + 'static,
) -> Result<(), EditorError> {
    let input = create_html_element(document, "input")?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| EditorError::Js("input is not an HtmlInputElement".to_owned()))?;
    input.set_type("file");
    input.set_accept("image/*");

    let picker = input.clone();
    EventListener::once(&input, "change", move |_| {
        let file = picker.files().and_then(|files| files.get(0));
        match file {
            Some(file) => on_file(file),
            None => tracing::debug!("image picker closed without a file"),
        }
    })
    .forget();

    let body = document
        .body()
        .ok_or_else(|| EditorError::MissingElement("body".to_owned()))?;
    body.append_child(&input).js()?;
    input.click();
    input.remove();
    Ok(())
}

/// Read the whole file into memory.
pub async fn read_file(file: &File) -> Result<Vec<u8>, UploadError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| UploadError::Network(format!("could not read file: {}", describe(&e))))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Resolve a page-relative path against the current location.
///
/// Fetch-backed clients need absolute URLs.
pub fn resolve_url(path: &str) -> Result<reqwest::Url, String> {
    let href = gloo_utils::window()
        .location()
        .href()
        .map_err(|e| describe(&e))?;
    reqwest::Url::parse(&href)
        .and_then(|base| base.join(path))
        .map_err(|e| e.to_string())
}

/// POST `file` as multipart form data and decode the JSON reply.
///
/// Any non-2xx status is a failure regardless of the body.
pub async fn send_upload(
    request: &UploadRequest,
    file: &File,
) -> Result<UploadResponse, UploadError> {
    let bytes = read_file(file).await?;

    let mut part = Part::bytes(bytes).file_name(request.file.name.clone());
    if !request.file.mime_type.is_empty() {
        part = part
            .mime_str(&request.file.mime_type)
            .map_err(|e| UploadError::Network(e.to_string()))?;
    }
    let form = Form::new().part(request.field.clone(), part);

    let url = resolve_url(&request.endpoint).map_err(UploadError::Network)?;
    let mut builder = reqwest::Client::new().post(url).multipart(form);
    if let Some((header, token)) = &request.csrf {
        builder = builder.header(header.as_str(), token.as_str());
    }

    let response = builder
        .send()
        .await
        .map_err(|e| UploadError::Network(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(UploadError::Rejected {
            status: status.as_u16(),
        });
    }
    response
        .json::<UploadResponse>()
        .await
        .map_err(|e| UploadError::Decode(e.to_string()))
}
