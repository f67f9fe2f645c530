//! Pull-request comment fragments.
//!
//! Nothing here escapes its input. Callers embedding untrusted URLs must
//! sanitize them first.

use crate::core::constants::{COMMENT_FOOTER, PREVIEW_IMAGE_WIDTH};

/// A preview screenshot linked to its build log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub building_log_url: String,
    pub image_url: String,
}

/// `<a href="{log}"><img width="300" src="{image}"></a>`
pub fn format_image(image: &PreviewImage) -> String {
    format!(
        r#"<a href="{}"><img width="{}" src="{}"></a>"#,
        image.building_log_url, PREVIEW_IMAGE_WIDTH, image.image_url
    )
}

pub fn comment_footer() -> &'static str {
    COMMENT_FOOTER
}
