//! Inline preview of a locally selected image
//!
//! The first selected file is read without a network round trip and shown in
//! the preview `<img>` as a `data:` URL. The preview element is looked up when
//! the read completes, so markup changes in between are honoured.

use log::{debug, warn};

use crate::config::PreviewConfig;
use crate::data_url;
use crate::dom::{DomDocument, DomElement, FileLoader, LoadedFile};
use crate::error::WebResult;

/// Start previewing the first of `files`.
///
/// Returns `true` when a read was started. Returns immediately; the preview
/// is updated from the read callback. Read failures leave the preview as it
/// was and are only logged.
pub fn preview_image<P, I>(page: &P, files: I, config: &PreviewConfig) -> bool
where
    P: DomDocument + FileLoader + Clone + 'static,
    I: IntoIterator<Item = <P as FileLoader>::File>,
{
    let Some(file) = files.into_iter().next() else {
        debug!("No file selected, preview unchanged");
        return false;
    };

    if let Some(limit) = config.max_preview_bytes {
        let size = page.file_size(&file);
        if size > limit {
            warn!("Selected file is {size} bytes, over the {limit} byte preview limit");
            return false;
        }
    }

    let target = page.clone();
    let target_id = config.target_id.clone();
    page.read_file(
        file,
        Box::new(move |result| match result {
            Ok(loaded) => {
                if let Err(e) = show_preview(&target, &target_id, &loaded) {
                    warn!("Failed to show image preview: {e}");
                }
            }
            Err(e) => warn!("Image preview skipped: {e}"),
        }),
    );
    true
}

/// Render `loaded` into the preview element, if it exists.
///
/// Returns whether the element was found.
pub fn show_preview<D: DomDocument>(
    document: &D,
    target_id: &str,
    loaded: &LoadedFile,
) -> WebResult<bool> {
    let Some(preview) = document.element_by_id(target_id) else {
        debug!("Preview target #{target_id} not found, discarding read result");
        return Ok(false);
    };
    preview.set_attribute("src", &data_url::encode(&loaded.mime_type, &loaded.bytes))?;
    preview.set_style("display", "block")?;
    Ok(true)
}
