use std::path::{Path, PathBuf};

use mime::Mime;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Attachment {
    file_name: String,
    content_type: Mime,
    path: PathBuf,
}

impl Attachment {
    pub fn new(file_name: &str, content_type: &Mime, path: &Path) -> Self {
        Self {
            file_name: file_name.to_owned(),
            content_type: content_type.clone(),
            path: path.to_path_buf(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &Mime {
        &self.content_type
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
