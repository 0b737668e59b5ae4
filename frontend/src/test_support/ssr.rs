//! Host-side rendering for component tests. Resources never fetch here, so
//! pages render their loading or empty state.

use leptos::*;

/// Runs `f` inside a fresh reactive runtime that is disposed afterwards.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

struct SuppressedLoads;

impl SuppressedLoads {
    fn enter() -> Self {
        leptos_reactive::suppress_resource_load(true);
        Self
    }
}

impl Drop for SuppressedLoads {
    fn drop(&mut self) {
        leptos_reactive::suppress_resource_load(false);
    }
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let _loads = SuppressedLoads::enter();
    with_runtime(|| view().into_view().render_to_string().to_string())
}
