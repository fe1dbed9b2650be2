pub mod collection;
pub mod palette;
pub mod sessions;

pub use collection::{
    handle_delete_palette, handle_export, handle_save_palette, DeletePaletteResponse,
    SavedPaletteResponse, __path_handle_delete_palette, __path_handle_export,
    __path_handle_save_palette,
};
pub use palette::{
    handle_generate, handle_lock, handle_reorder, GenerateRequest, LockRequest, ReorderRequest,
    __path_handle_generate, __path_handle_lock, __path_handle_reorder,
};
pub use sessions::{
    handle_create_session, handle_delete_session, handle_get_session, CreateSessionRequest,
    DeleteSessionResponse, SessionResponse, __path_handle_create_session,
    __path_handle_delete_session, __path_handle_get_session,
};

use color_harmony::HarmonyMode;

/// Parse a client-supplied harmony mode name.
///
/// Unknown names are not an error: they degrade to random generation, and
/// the degradation is logged so it stays observable.
pub(crate) fn resolve_mode(raw: &str) -> HarmonyMode {
    let mode = HarmonyMode::parse(raw);
    if mode == HarmonyMode::Random && !raw.eq_ignore_ascii_case("random") {
        tracing::debug!(requested = raw, "Unknown harmony mode, using random generation");
    }
    mode
}
