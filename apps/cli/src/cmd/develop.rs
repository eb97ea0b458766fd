//! The develop command: run the darkroom photo-aging filter.

use acore::ProviderKind;
use anyhow::{Context, Result, anyhow};
use base64::Engine;
use provider::{Client, Gemini};
use session::Settings;
use std::path::{Path, PathBuf};

/// Send an image through the aging filter and write the result.
///
/// "No image produced" is a soft outcome: a notice is printed and the
/// original file is left untouched.
pub async fn run(image: &Path, prompt: &str, out: Option<&Path>) -> Result<()> {
    let settings = Settings::load();
    if !settings.has_key(ProviderKind::Gemini) {
        return Err(anyhow!(
            "the darkroom needs a Gemini API key; set one with `atlas config set gemini-key <key>`"
        ));
    }

    let bytes =
        std::fs::read(image).with_context(|| format!("reading {}", image.display()))?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);

    let gemini = Gemini::new(Client::new(), settings.key(ProviderKind::Gemini))?;
    let developed = gemini.develop(&encoded, prompt).await?;

    match developed {
        Some(photo) => {
            let target = out.map(Path::to_path_buf).unwrap_or_else(|| default_out(image));
            std::fs::write(&target, photo.to_bytes()?)
                .with_context(|| format!("writing {}", target.display()))?;
            println!("Developed photograph written to {}", target.display());
            Ok(())
        }
        None => {
            println!("No photograph was developed. The spirits are quiet.");
            Ok(())
        }
    }
}

/// Default output path: `<stem>-developed.png` next to the source image.
fn default_out(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "photograph".to_owned());
    image.with_file_name(format!("{stem}-developed.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_out_sits_next_to_the_source() {
        assert_eq!(
            default_out(Path::new("/tmp/plate.jpg")),
            PathBuf::from("/tmp/plate-developed.png")
        );
    }
}
