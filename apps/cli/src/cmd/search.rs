//! The search command: run the orchestrator and print the result.

use crate::render;
use acore::{Language, ProviderKind};
use anyhow::{Result, anyhow};
use provider::{Client, Provider};
use session::{SearchOutcome, Session, Settings};

/// Search a city and print its landmarks in the active language.
pub async fn run(city: &str, lang: Language, detail: Option<usize>) -> Result<()> {
    let mut session = Session::new(Settings::load());
    session.set_language(lang);
    let client = Client::new();

    match session.run_search(city, client.clone()).await {
        SearchOutcome::Displayed {
            city_name,
            center,
            landmarks,
            warning,
            offline,
        } => {
            if let Some(warning) = warning {
                eprintln!("{warning}");
            }
            let origin = if offline { "offline archive" } else { "live search" };
            println!(
                "{city_name} — {} landmark(s) from the {origin}, centered at ({:.4}, {:.4})",
                landmarks.len(),
                center.lat,
                center.lng
            );
            for landmark in &landmarks {
                println!("{}", render::landmark_line(landmark, lang));
            }
            if let Some(n) = detail {
                show_detail(&mut session, city, lang, n, client).await?;
            }
            Ok(())
        }
        SearchOutcome::NoResults { message } => {
            println!("{message}");
            Ok(())
        }
        SearchOutcome::Failed { message } => Err(anyhow!(message)),
    }
}

/// Open the detail panel for the n-th displayed landmark (1-based), with a
/// grounded place lookup when the Gemini provider is usable.
async fn show_detail(
    session: &mut Session,
    city: &str,
    lang: Language,
    n: usize,
    client: Client,
) -> Result<()> {
    let (id, name) = session
        .view()
        .landmarks
        .get(n.wrapping_sub(1))
        .map(|l| (l.id.clone(), l.name.en.clone()))
        .ok_or_else(|| anyhow!("no landmark #{n} on display"))?;

    if session.settings.provider == ProviderKind::Gemini
        && session.settings.has_key(ProviderKind::Gemini)
        && let Ok(provider) = Provider::build(
            ProviderKind::Gemini,
            session.settings.key(ProviderKind::Gemini),
            client,
        )
        && let Some(gemini) = provider.as_gemini()
    {
        // Grounding is best-effort: a failed lookup leaves the record as is.
        match gemini.verify_landmark(&name, city).await {
            Ok(grounding) => {
                session.attach_grounding(&id, grounding);
            }
            Err(e) => tracing::warn!("grounding lookup failed: {e}"),
        }
    }

    let landmark = session
        .select(&id)
        .ok_or_else(|| anyhow!("landmark disappeared from the view"))?;
    println!("\n{}", render::landmark_detail(landmark, lang));
    Ok(())
}
