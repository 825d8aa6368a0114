//! Prompt composition for the Gemini render models.
//!
//! The render models respond best to a fixed framing sentence carrying the
//! style parameters, followed by the user's own prompt text.

use crate::{ImageStyle, VideoStyle};

/// Full prompt for an image render.
///
/// # Examples
///
/// ```
/// use atelier_core::{image_prompt, ImageStyle};
///
/// let prompt = image_prompt(ImageStyle::Watercolor, 60, 80, "morning fog");
/// assert!(prompt.starts_with("Watercolor architectural render"));
/// assert!(prompt.ends_with("morning fog"));
/// ```
pub fn image_prompt(style: ImageStyle, creativity: u8, style_strength: u8, prompt: &str) -> String {
    format!(
        "{style} architectural render of this building, with a creativity level of {creativity} and style strength of {style_strength}. {prompt}"
    )
}

/// Full prompt for a video clip. The style reads in lowercase mid-sentence.
pub fn video_prompt(style: VideoStyle, prompt: &str) -> String {
    format!(
        "A {} video of this building. {prompt}",
        style.to_string().to_lowercase()
    )
}

/// Combined add/remove instruction used by the edit path.
pub fn edit_prompt(positive: &str, negative: &str) -> String {
    format!("{positive}. Do not include: {negative}.")
}

/// Full prompt when re-generating a video asset with edit instructions.
pub fn video_edit_prompt(style: VideoStyle, prior_prompt: &str, edit: &str) -> String {
    format!("A {style} video of this building. {prior_prompt}. Additional instructions: {edit}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_prompt_embeds_parameters() {
        let prompt = image_prompt(ImageStyle::PenSketch, 30, 90, "street view at noon");
        assert_eq!(
            prompt,
            "Pen Sketch architectural render of this building, with a creativity level of 30 and style strength of 90. street view at noon"
        );
    }

    #[test]
    fn video_prompt_lowercases_style() {
        let prompt = video_prompt(VideoStyle::Cinematic, "sweep around the tower");
        assert_eq!(prompt, "A cinematic video of this building. sweep around the tower");
    }

    #[test]
    fn edit_prompt_combines_instructions() {
        assert_eq!(
            edit_prompt("add planting", "cars"),
            "add planting. Do not include: cars."
        );
    }

    #[test]
    fn video_edit_prompt_keeps_display_case() {
        let prompt = video_edit_prompt(VideoStyle::Action, "orbit shot", "add rain. Do not include: people.");
        assert!(prompt.starts_with("A Action video of this building. orbit shot."));
    }
}
