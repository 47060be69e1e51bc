//! Bridge from click handlers to the async assist request.

use crate::net::assist::{Persona, Reply};
use crate::net::genai::GenAiClient;

/// Assist client shared through context.
pub type Assist = GenAiClient;

/// Run one assist request on the browser task queue and hand the folded
/// [`Reply`] to `on_reply`.
///
/// The caller marks its control busy before calling; `on_reply` is the only
/// place that clears it. Natively there is no task queue and nothing runs.
pub fn spawn_assist(assist: Assist, persona: Persona, fragment: String, on_reply: impl FnOnce(Reply) + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        crate::net::assist::run(&assist, persona, &fragment, on_reply).await;
    });
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("{persona:?} assist skipped outside the browser ({} chars)", fragment.len());
        drop((assist, on_reply));
    }
}
