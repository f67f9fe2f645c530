//! Comment command.
//!
//! Prints fragments verbatim so they can be captured into a comment body.

use crate::core::comment::{self, PreviewImage};
use crate::error::Result;

/// Print the linked preview image.
pub fn image(building_log_url: String, image_url: String) -> Result<()> {
    let image = PreviewImage {
        building_log_url,
        image_url,
    };
    println!("{}", comment::format_image(&image));
    Ok(())
}

/// Print the attribution footer.
pub fn footer() -> Result<()> {
    println!("{}", comment::comment_footer());
    Ok(())
}
