use anyhow::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use mc_form::attachment::Attachment;
use mime::Mime;

pub struct EncodedAttachment {
    file_name: String,
    content_type: Mime,
    bytes: Vec<u8>,
    data_uri: String,
}

impl EncodedAttachment {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &Mime {
        &self.content_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }
}

pub fn to_data_uri(content_type: &Mime, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", content_type, STANDARD.encode(bytes))
}

pub async fn encode_attachment(attachment: &Attachment) -> Result<EncodedAttachment> {
    let bytes = tokio::fs::read(attachment.path()).await?;
    let data_uri = to_data_uri(attachment.content_type(), &bytes);
    Ok(EncodedAttachment {
        file_name: attachment.file_name().to_owned(),
        content_type: attachment.content_type().clone(),
        bytes,
        data_uri,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_is_self_describing_and_lossless() {
        let bytes = (0..=255u8).cycle().take(2 * 1024 * 1024).collect::<Vec<_>>();
        let data_uri = to_data_uri(&mime::IMAGE_JPEG, &bytes);

        let payload = data_uri
            .strip_prefix("data:image/jpeg;base64,")
            .expect("data URI must carry its media type");
        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(decoded.len(), bytes.len());
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn empty_input_still_produces_a_valid_data_uri() {
        assert_eq!(to_data_uri(&mime::IMAGE_PNG, &[]), "data:image/png;base64,");
    }
}
