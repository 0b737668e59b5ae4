use js_sys::Uint8Array;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, File, HtmlInputElement};

use crate::api::{DocumentKind, DocumentUpload};

/// First file picked in the `<input type="file">` that fired `ev`.
pub fn selected_file(ev: &Event) -> Option<File> {
    ev.target()?
        .dyn_into::<HtmlInputElement>()
        .ok()?
        .files()?
        .get(0)
}

/// Reads the whole file into memory for a multipart part.
pub async fn read_upload(kind: DocumentKind, file: File) -> Result<DocumentUpload, String> {
    let name = file.name();
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| format!("Não foi possível ler o ficheiro {}.", name))?;
    let mime = file.type_();
    Ok(DocumentUpload {
        kind,
        file_name: name,
        mime_type: (!mime.is_empty()).then_some(mime),
        bytes: Uint8Array::new(&buffer).to_vec(),
    })
}

/// Replaces any earlier pick for the same document.
pub fn put_upload(uploads: &mut Vec<DocumentUpload>, upload: DocumentUpload) {
    uploads.retain(|existing| existing.kind != upload.kind);
    uploads.push(upload);
    uploads.sort_by_key(|u| DocumentKind::ALL.iter().position(|k| *k == u.kind));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(kind: DocumentKind, name: &str) -> DocumentUpload {
        DocumentUpload {
            kind,
            file_name: name.into(),
            mime_type: None,
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn later_pick_replaces_same_kind_and_order_is_stable() {
        let mut uploads = Vec::new();
        put_upload(&mut uploads, upload(DocumentKind::DeclaracaoResidencia, "res.pdf"));
        put_upload(&mut uploads, upload(DocumentKind::CniOuPassaporte, "cni.pdf"));
        put_upload(&mut uploads, upload(DocumentKind::CniOuPassaporte, "cni-v2.pdf"));

        let names: Vec<&str> = uploads.iter().map(|u| u.file_name.as_str()).collect();
        assert_eq!(names, vec!["cni-v2.pdf", "res.pdf"]);
    }
}
